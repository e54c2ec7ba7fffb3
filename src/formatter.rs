//! Renders a decoded [`Instruction`] as assembly text.
//!
//! One [`fmt::Display`] impl dispatching on `kind`, in the same flat match-and-`write!` shape the
//! teacher's RISC-V `Display for Instruction` uses, generalized to AArch64's richer operand
//! syntax (condition suffixes, addressing-mode-driven memory operands, the MRS friendly-name
//! table).

use core::fmt;

use crate::model::{AddrMode, ExtendKind, Instruction, InstKind, RegClass};

fn reg_name(reg: u8, class: RegClass) -> String {
    match class {
        RegClass::GpX => format!("x{reg}"),
        RegClass::GpW => format!("w{reg}"),
        RegClass::Sp => "sp".to_string(),
        RegClass::Xzr => "xzr".to_string(),
        RegClass::Wzr => "wzr".to_string(),
        RegClass::VFull => format!("v{reg}"),
        RegClass::VB => format!("b{reg}"),
        RegClass::VH => format!("h{reg}"),
        RegClass::VS => format!("s{reg}"),
        RegClass::VD => format!("d{reg}"),
        RegClass::VQ => format!("q{reg}"),
    }
}

fn extend_mnemonic(extend: ExtendKind) -> &'static str {
    match extend {
        ExtendKind::UxtB => "uxtb",
        ExtendKind::UxtH => "uxth",
        ExtendKind::UxtW => "uxtw",
        ExtendKind::UxtX => "uxtx",
        ExtendKind::SxtB => "sxtb",
        ExtendKind::SxtH => "sxth",
        ExtendKind::SxtW => "sxtw",
        ExtendKind::SxtX => "sxtx",
        ExtendKind::Lsl => "lsl",
        ExtendKind::Lsr => "lsr",
        ExtendKind::Asr => "asr",
        ExtendKind::Ror => "ror",
    }
}

/// Renders the memory operand (everything inside, and following, the `[...]`) for a load/store,
/// driven by `addr_mode` per the formatter contract.
fn mem_operand(inst: &Instruction) -> String {
    let base = reg_name(inst.rn, inst.rn_class);
    match inst.addr_mode {
        AddrMode::None => String::new(),
        AddrMode::Literal => format!("0x{:x}", inst.imm),
        AddrMode::ImmUnsigned | AddrMode::ImmSigned => {
            if inst.imm == 0 {
                format!("[{base}]")
            } else {
                format!("[{base}, #{}]", inst.imm)
            }
        }
        AddrMode::PreIndex => format!("[{base}, #{}]!", inst.imm),
        AddrMode::PostIndex => format!("[{base}], #{}", inst.imm),
        AddrMode::RegOffset | AddrMode::RegExtend => {
            let index = reg_name(inst.rm, inst.rm_class);
            if inst.addr_mode == AddrMode::RegOffset && inst.extend == ExtendKind::UxtX {
                format!("[{base}, {index}]")
            } else if inst.shift_amount != 0 {
                format!(
                    "[{base}, {index}, {} #{}]",
                    extend_mnemonic(inst.extend),
                    inst.shift_amount
                )
            } else {
                format!("[{base}, {index}, {}]", extend_mnemonic(inst.extend))
            }
        }
    }
}

/// Friendly names for the system registers this crate's test corpus cares about; anything else
/// falls back to the architectural `Sop0_op1_Cn_Cm_op2` spelling, per the formatter contract.
fn mrs_register_name(op0: u32, op1: u32, crn: u32, crm: u32, op2: u32) -> String {
    match (op0, op1, crn, crm, op2) {
        (3, 3, 4, 2, 0) => "nzcv".to_string(),
        (3, 3, 4, 2, 1) => "daif".to_string(),
        (3, 3, 4, 4, 0) => "fpcr".to_string(),
        (3, 3, 4, 4, 1) => "fpsr".to_string(),
        (3, 0, 0, 0, 5) => "mpidr_el1".to_string(),
        (3, 3, 13, 0, 2) => "tpidr_el0".to_string(),
        _ => format!("s{op0}_{op1}_c{crn}_c{crm}_{op2}"),
    }
}

/// Re-extracts `(op0, op1, CRn, CRm, op2)` from the raw word for `MRS`'s friendly-name lookup,
/// per the formatter contract's requirement to re-derive them rather than store them on
/// [`Instruction`].
fn mrs_operand_name(raw: u32) -> String {
    let op0 = (raw >> 19) & 0x3;
    let op1 = (raw >> 16) & 0x7;
    let crn = (raw >> 12) & 0xF;
    let crm = (raw >> 8) & 0xF;
    let op2 = (raw >> 5) & 0x7;
    mrs_register_name(op0, op1, crn, crm, op2)
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rd = || reg_name(self.rd, self.rd_class);
        let rn = || reg_name(self.rn, self.rn_class);
        let rm = || reg_name(self.rm, self.rm_class);
        let rt2 = || reg_name(self.rt2, self.rd_class);
        let ra = || reg_name(self.ra, self.rd_class);

        match self.kind {
            InstKind::Unknown => write!(f, "unknown (0x{:08x})", self.raw),

            InstKind::Ldr
            | InstKind::Ldrb
            | InstKind::Ldrh
            | InstKind::Ldrsw
            | InstKind::Ldrsb
            | InstKind::Ldrsh
            | InstKind::Str
            | InstKind::Strb
            | InstKind::Strh => write!(f, "{} {}, {}", self.mnemonic, rd(), mem_operand(self)),
            InstKind::Ldp | InstKind::Stp => {
                write!(f, "{} {}, {}, {}", self.mnemonic, rd(), rt2(), mem_operand(self))
            }

            InstKind::Ldxr | InstKind::Ldaxr | InstKind::Ldar | InstKind::Ldlar => {
                write!(f, "{} {}, [{}]", self.mnemonic, rd(), rn())
            }
            InstKind::Stlr | InstKind::Stllr => write!(f, "{} {}, [{}]", self.mnemonic, rd(), rn()),
            InstKind::Stxr | InstKind::Stlxr => {
                write!(f, "{} {}, {}, [{}]", self.mnemonic, rd(), rm(), rn())
            }
            InstKind::Ldxp | InstKind::Ldaxp => {
                write!(f, "{} {}, {}, [{}]", self.mnemonic, rd(), rt2(), rn())
            }
            InstKind::Stxp | InstKind::Stlxp => {
                write!(f, "{} {}, {}, {}, [{}]", self.mnemonic, rm(), rd(), rt2(), rn())
            }
            InstKind::Cas => write!(f, "{} {}, {}, [{}]", self.mnemonic, rd(), rm(), rn()),
            InstKind::Ldadd
            | InstKind::Ldclr
            | InstKind::Ldeor
            | InstKind::Ldset
            | InstKind::Ldsmax
            | InstKind::Ldsmin
            | InstKind::Ldumax
            | InstKind::Ldumin
            | InstKind::Swp => write!(f, "{} {}, {}, [{}]", self.mnemonic, rm(), rd(), rn()),

            InstKind::Adr | InstKind::Adrp => write!(f, "{} {}, #0x{:x}", self.mnemonic, rd(), self.imm),
            InstKind::Movz | InstKind::Movn | InstKind::Movk => {
                if self.shift_amount != 0 {
                    write!(f, "{} {}, #{}, lsl #{}", self.mnemonic, rd(), self.imm, self.shift_amount)
                } else {
                    write!(f, "{} {}, #{}", self.mnemonic, rd(), self.imm)
                }
            }
            InstKind::Mov => {
                if self.has_imm {
                    write!(f, "mov {}, #{}", rd(), self.imm)
                } else {
                    write!(f, "mov {}, {}", rd(), rm())
                }
            }

            InstKind::Add | InstKind::Sub | InstKind::Adds | InstKind::Subs | InstKind::And
            | InstKind::Orr | InstKind::Eor | InstKind::Bic | InstKind::Orn | InstKind::Eon => {
                if self.has_imm {
                    write!(f, "{} {}, {}, #{}", self.mnemonic, rd(), rn(), self.imm)
                } else {
                    write!(f, "{} {}, {}, {}", self.mnemonic, rd(), rn(), rm())
                }
            }
            InstKind::Mvn => write!(f, "mvn {}, {}", rd(), rm()),
            InstKind::Cmp | InstKind::Cmn | InstKind::Tst => {
                if self.has_imm {
                    write!(f, "{} {}, #{}", self.mnemonic, rn(), self.imm)
                } else {
                    write!(f, "{} {}, {}", self.mnemonic, rn(), rm())
                }
            }

            InstKind::Lsl | InstKind::Lsr | InstKind::Asr => {
                if self.has_imm {
                    write!(f, "{} {}, {}, #{}", self.mnemonic, rd(), rn(), self.shift_amount)
                } else {
                    write!(f, "{} {}, {}, {}", self.mnemonic, rd(), rn(), rm())
                }
            }
            InstKind::Ror | InstKind::Extr => {
                write!(f, "{} {}, {}, {}, #{}", self.mnemonic, rd(), rn(), rm(), self.shift_amount)
            }
            InstKind::Sbfm | InstKind::Bfm | InstKind::Ubfm => {
                let immr = self.shift_amount;
                let imms = (self.imm & 0x3F) as u8;
                write!(f, "{} {}, {}, #{}, #{}", self.mnemonic, rd(), rn(), immr, imms)
            }

            InstKind::Clz | InstKind::Cls | InstKind::Rbit | InstKind::Rev | InstKind::Rev16
            | InstKind::Rev32 => write!(f, "{} {}, {}", self.mnemonic, rd(), rn()),

            InstKind::Mul | InstKind::Mneg | InstKind::Sdiv | InstKind::Udiv => {
                write!(f, "{} {}, {}, {}", self.mnemonic, rd(), rn(), rm())
            }
            InstKind::Madd | InstKind::Msub => {
                write!(f, "{} {}, {}, {}, {}", self.mnemonic, rd(), rn(), rm(), ra())
            }

            InstKind::Csel | InstKind::Csinc | InstKind::Csinv | InstKind::Csneg => {
                write!(f, "{} {}, {}, {}, {}", self.mnemonic, rd(), rn(), rm(), self.cond)
            }
            InstKind::Cset | InstKind::Csetm => write!(f, "{} {}, {}", self.mnemonic, rd(), self.cond),
            InstKind::Cinc | InstKind::Cinv | InstKind::Cneg => {
                write!(f, "{} {}, {}, {}", self.mnemonic, rd(), rn(), self.cond)
            }

            InstKind::B | InstKind::Bl => {
                if self.mnemonic == "b.cond" {
                    write!(f, "b.{} #0x{:x}", self.cond, self.imm)
                } else {
                    write!(f, "{} #0x{:x}", self.mnemonic, self.imm)
                }
            }
            InstKind::Br | InstKind::Blr => write!(f, "{} {}", self.mnemonic, rn()),
            InstKind::Ret => {
                if self.rn == 30 {
                    write!(f, "ret")
                } else {
                    write!(f, "ret {}", rn())
                }
            }
            InstKind::Eret | InstKind::Drps => write!(f, "{}", self.mnemonic),
            InstKind::Cbz | InstKind::Cbnz => write!(f, "{} {}, #0x{:x}", self.mnemonic, rd(), self.imm),
            InstKind::Tbz | InstKind::Tbnz => {
                write!(f, "{} {}, #{}, #0x{:x}", self.mnemonic, rd(), self.shift_amount, self.imm)
            }

            InstKind::Nop | InstKind::Yield | InstKind::Wfe | InstKind::Wfi | InstKind::Sev
            | InstKind::Sevl => write!(f, "{}", self.mnemonic),
            InstKind::Mrs => write!(f, "mrs {}, {}", rd(), mrs_operand_name(self.raw)),

            InstKind::Fmov => {
                if self.has_imm {
                    write!(f, "fmov {}, #{}", rd(), self.imm)
                } else {
                    write!(f, "fmov {}, {}", rd(), rn())
                }
            }
            InstKind::Fadd | InstKind::Fsub | InstKind::Fmul | InstKind::Fdiv | InstKind::Fmax
            | InstKind::Fmin | InstKind::Fmaxnm | InstKind::Fminnm | InstKind::Fnmul
            | InstKind::Fmulx | InstKind::Frecps | InstKind::Frsqrts | InstKind::Fcmeq
            | InstKind::Fcmge | InstKind::Fcmgt | InstKind::Fcmle | InstKind::Fcmlt
            | InstKind::Facge | InstKind::Facgt => {
                write!(f, "{} {}, {}, {}", self.mnemonic, rd(), rn(), rm())
            }
            InstKind::Fcsel => {
                write!(f, "fcsel {}, {}, {}, {}", rd(), rn(), rm(), self.cond)
            }
            InstKind::Fabs | InstKind::Fneg | InstKind::Fsqrt | InstKind::Fcvt
            | InstKind::Frintn | InstKind::Frintp | InstKind::Frintm | InstKind::Frintz
            | InstKind::Frinta | InstKind::Frintx | InstKind::Frinti | InstKind::Fcvtzs
            | InstKind::Fcvtzu | InstKind::Fcvtns | InstKind::Fcvtnu | InstKind::Fcvtps
            | InstKind::Fcvtpu | InstKind::Fcvtms | InstKind::Fcvtmu | InstKind::Fcvtas
            | InstKind::Fcvtau | InstKind::Scvtf | InstKind::Ucvtf => {
                write!(f, "{} {}, {}", self.mnemonic, rd(), rn())
            }
            InstKind::Fmadd | InstKind::Fmsub | InstKind::Fnmadd | InstKind::Fnmsub => {
                write!(f, "{} {}, {}, {}, {}", self.mnemonic, rd(), rn(), rm(), ra())
            }
            InstKind::Fcmp | InstKind::Fcmpe => {
                if self.has_imm {
                    write!(f, "{} {}, #0.0", self.mnemonic, rn())
                } else {
                    write!(f, "{} {}, {}", self.mnemonic, rn(), rm())
                }
            }
            InstKind::Fccmp | InstKind::Fccmpe => {
                write!(f, "{} {}, {}, #{}, {}", self.mnemonic, rn(), rm(), self.imm, self.cond)
            }

            InstKind::Dup => {
                let lane = match self.rd_class {
                    RegClass::VB => "b",
                    RegClass::VH => "h",
                    RegClass::VS => "s",
                    _ => "d",
                };
                write!(f, "dup {}, {}.{lane}[{}]", rd(), rn(), self.imm)
            }
            InstKind::Suqadd | InstKind::Usqadd | InstKind::Sqabs | InstKind::Sqneg
            | InstKind::Abs | InstKind::Neg => write!(f, "{} {}, {}", self.mnemonic, rd(), rn()),
            InstKind::Cmgt | InstKind::Cmge | InstKind::Cmeq | InstKind::Cmlt | InstKind::Cmle => {
                write!(f, "{} {}, {}, #0", self.mnemonic, rd(), rn())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    #[test]
    fn formats_ldr_unsigned_offset() {
        let inst = decode(0xF940_0421, 0x1000).unwrap();
        assert_eq!(inst.to_string(), "ldr x1, [x1, #8]");
    }

    #[test]
    fn formats_stp_pre_index() {
        let inst = decode(0xA9BF_7BFD, 0x1000).unwrap();
        assert_eq!(inst.to_string(), "stp x29, x30, [sp, #-16]!");
    }

    #[test]
    fn formats_unconditional_branch() {
        let inst = decode(0x1400_0010, 0x1000).unwrap();
        assert_eq!(inst.to_string(), "b #0x40");
    }

    #[test]
    fn formats_ret_with_no_operand() {
        let inst = decode(0xD65F_03C0, 0x1000).unwrap();
        assert_eq!(inst.to_string(), "ret");
    }

    #[test]
    fn formats_cset() {
        let inst = decode(0x9A9F_07E0, 0x2000).unwrap();
        assert_eq!(inst.kind, InstKind::Cset);
        assert_eq!(inst.to_string(), format!("cset {}, {}", "x0", inst.cond));
    }

    #[test]
    fn formats_fcmp_register_form() {
        let inst = decode(0x1E20_2000, 0x3000).unwrap();
        assert_eq!(inst.to_string(), "fcmp s0, s0");
    }

    #[test]
    fn formats_fmov_gpr_to_fp() {
        let inst = decode(0x9E67_0000, 0x3000).unwrap();
        assert_eq!(inst.to_string(), "fmov x0, d0");
    }

    #[test]
    fn formats_cas() {
        let inst = decode(0xC8A0_7C20, 0x4000).unwrap();
        assert_eq!(inst.to_string(), "cas x0, x0, [x1]");
    }

    #[test]
    fn mrs_falls_back_to_generic_name_for_unknown_sysreg() {
        // mrs x0, S3_7_C15_C0_0 (an unmapped system register).
        let inst = decode(0xD53F_F000, 0).unwrap();
        assert_eq!(inst.kind, InstKind::Mrs);
        assert!(inst.to_string().contains("s3_7_c15_c0_0"));
    }
}
