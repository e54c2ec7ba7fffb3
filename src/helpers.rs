//! Trivial helper queries over a decoded [`Instruction`]: branch target arithmetic, the
//! membership predicates the CLI and formatter consult, and which register slots a given
//! instruction shape actually addresses.

use crate::model::{AddrMode, Instruction, InstKind, RegClass};

/// Whether `kind` is one of the forms whose target is `address + imm`.
fn is_branch_target_kind(kind: InstKind) -> bool {
    matches!(
        kind,
        InstKind::B
            | InstKind::Bl
            | InstKind::Cbz
            | InstKind::Cbnz
            | InstKind::Tbz
            | InstKind::Tbnz
            | InstKind::Adr
            | InstKind::Adrp
    )
}

/// The architectural branch target, for instructions whose target is `address + imm`.
///
/// Returns `None` for every other kind (including register-indirect branches, whose target isn't
/// known from the static encoding alone).
#[must_use]
pub fn branch_target(inst: &Instruction) -> Option<u64> {
    if is_branch_target_kind(inst.kind) {
        Some((inst.address as i64 + inst.imm) as u64)
    } else {
        None
    }
}

/// Whether `inst` is any branch-class instruction (direct, conditional, compare-and-branch,
/// test-and-branch, or register-indirect).
#[must_use]
pub fn is_branch(inst: &Instruction) -> bool {
    matches!(
        inst.kind,
        InstKind::B
            | InstKind::Bl
            | InstKind::Br
            | InstKind::Blr
            | InstKind::Ret
            | InstKind::Eret
            | InstKind::Drps
            | InstKind::Cbz
            | InstKind::Cbnz
            | InstKind::Tbz
            | InstKind::Tbnz
    )
}

/// Whether `inst` accesses memory (any load, store, or atomic/exclusive family member).
#[must_use]
pub fn is_load_store(inst: &Instruction) -> bool {
    matches!(
        inst.kind,
        InstKind::Ldr
            | InstKind::Ldrb
            | InstKind::Ldrh
            | InstKind::Ldrsw
            | InstKind::Ldrsb
            | InstKind::Ldrsh
            | InstKind::Str
            | InstKind::Strb
            | InstKind::Strh
            | InstKind::Ldp
            | InstKind::Stp
            | InstKind::Ldxr
            | InstKind::Stxr
            | InstKind::Ldaxr
            | InstKind::Stlxr
            | InstKind::Ldxp
            | InstKind::Stxp
            | InstKind::Ldaxp
            | InstKind::Stlxp
            | InstKind::Ldar
            | InstKind::Stlr
            | InstKind::Ldlar
            | InstKind::Stllr
            | InstKind::Cas
            | InstKind::Ldadd
            | InstKind::Ldclr
            | InstKind::Ldeor
            | InstKind::Ldset
            | InstKind::Ldsmax
            | InstKind::Ldsmin
            | InstKind::Ldumax
            | InstKind::Ldumin
            | InstKind::Swp
    )
}

/// The immediate value carried by `inst`, if any.
///
/// Per the decoder's own slot invariant, `imm` is only meaningful when `has_imm` is set; this
/// helper is the one place that invariant is enforced for callers.
#[must_use]
pub fn immediate_value(inst: &Instruction) -> Option<i64> {
    inst.has_imm.then_some(inst.imm)
}

/// Which of `rd`/`rn`/`rm`/`rt2`/`ra` a given instruction shape actually addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slots {
    rd: bool,
    rn: bool,
    rm: bool,
    rt2: bool,
    ra: bool,
}

fn slots_for(inst: &Instruction) -> Slots {
    use InstKind::*;

    let rd_rn_rm = Slots { rd: true, rn: true, rm: true, ..Slots::default() };
    let rd_rn = Slots { rd: true, rn: true, ..Slots::default() };
    let rn_rm = Slots { rn: true, rm: true, ..Slots::default() };

    match inst.kind {
        Unknown | B | Bl | Nop | Yield | Wfe | Wfi | Sev | Sevl => Slots::default(),

        Br | Blr | Ret | Eret | Drps => Slots { rn: true, ..Slots::default() },

        Cbz | Cbnz | Tbz | Tbnz | Adr | Adrp | Movz | Movn | Movk | Mrs => {
            Slots { rd: true, ..Slots::default() }
        }

        Cmp | Cmn | Tst => Slots { rn: true, rm: !inst.has_imm, ..Slots::default() },

        Mov => {
            if inst.has_imm {
                Slots { rd: true, ..Slots::default() }
            } else {
                Slots { rd: true, rm: true, ..Slots::default() }
            }
        }

        Add | Sub | Adds | Subs | And | Orr | Eor | Bic | Orn | Eon => {
            Slots { rd: true, rn: true, rm: !inst.has_imm, ..Slots::default() }
        }

        Mvn => rd_rn_rm,

        // LSL/LSR/ASR alias a bitfield-immediate form (rd, rn, shift amount; `has_imm`) and a
        // register-variable-shift form (rd, rn, rm; dp_reg's LSLV/LSRV/ASRV) under one kind.
        Lsl | Lsr | Asr => Slots { rd: true, rn: true, rm: !inst.has_imm, ..Slots::default() },
        Sbfm | Bfm | Ubfm => rd_rn,
        Ror | Extr => rd_rn_rm,

        Clz | Cls | Rbit | Rev | Rev16 | Rev32 => rd_rn,

        Mul | Mneg | Sdiv | Udiv => rd_rn_rm,
        Madd | Msub => Slots { rd: true, rn: true, rm: true, ra: true },

        Csel | Csinc | Csinv | Csneg | Cset | Csetm | Cinc | Cinv | Cneg => rd_rn_rm,

        Ldxr | Ldaxr | Ldar | Ldlar => rd_rn,
        Stxr | Stlxr => rd_rn_rm,
        Stlr | Stllr => rd_rn,
        Ldxp | Ldaxp => Slots { rd: true, rn: true, rt2: true, ..Slots::default() },
        Stxp | Stlxp => Slots { rd: true, rn: true, rm: true, rt2: true },
        Cas => rd_rn_rm,
        Ldadd | Ldclr | Ldeor | Ldset | Ldsmax | Ldsmin | Ldumax | Ldumin | Swp => rd_rn_rm,

        Ldp | Stp => Slots { rd: true, rn: true, rt2: true, ..Slots::default() },

        Ldr | Ldrb | Ldrh | Ldrsw | Ldrsb | Ldrsh | Str | Strb | Strh => Slots {
            rd: true,
            rn: true,
            rm: matches!(inst.addr_mode, AddrMode::RegOffset | AddrMode::RegExtend),
            ..Slots::default()
        },

        Fmov => {
            if inst.has_imm {
                Slots { rd: true, ..Slots::default() }
            } else {
                rd_rn
            }
        }
        Fadd | Fsub | Fmul | Fdiv | Fmax | Fmin | Fmaxnm | Fminnm | Fnmul | Fmulx | Frecps
        | Frsqrts | Fcmeq | Fcmge | Fcmgt | Fcmle | Fcmlt | Facge | Facgt | Fcsel => rd_rn_rm,
        Fabs | Fneg | Fsqrt | Fcvt | Frintn | Frintp | Frintm | Frintz | Frinta | Frintx
        | Frinti | Fcvtzs | Fcvtzu | Fcvtns | Fcvtnu | Fcvtps | Fcvtpu | Fcvtms | Fcvtmu
        | Fcvtas | Fcvtau | Scvtf | Ucvtf => rd_rn,
        Fmadd | Fmsub | Fnmadd | Fnmsub => Slots { rd: true, rn: true, rm: true, ra: true },
        Fcmp | Fcmpe => Slots { rn: true, rm: !inst.has_imm, ..Slots::default() },
        Fccmp | Fccmpe => rn_rm,

        Dup => rd_rn,
        Suqadd | Usqadd | Sqabs | Sqneg | Abs | Neg => rd_rn,
        Cmgt | Cmge | Cmeq | Cmlt | Cmle => rd_rn,
    }
}

/// The register slots `inst` actually addresses, paired with each slot's resolved class.
///
/// Unused slots are never returned, even though (per the decoder's slot invariant) their
/// underlying fields still hold zero and a valid default class.
#[must_use]
pub fn used_registers(inst: &Instruction) -> Vec<(u8, RegClass)> {
    let slots = slots_for(inst);
    let mut regs = Vec::with_capacity(5);
    if slots.rd {
        regs.push((inst.rd, inst.rd_class));
    }
    if slots.rn {
        regs.push((inst.rn, inst.rn_class));
    }
    if slots.rm {
        regs.push((inst.rm, inst.rm_class));
    }
    if slots.rt2 {
        regs.push((inst.rt2, inst.rd_class));
    }
    if slots.ra {
        regs.push((inst.ra, inst.rd_class));
    }
    regs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    #[test]
    fn branch_target_is_address_plus_imm_for_b() {
        let inst = decode(0x1400_0010, 0x1000).unwrap();
        assert_eq!(branch_target(&inst), Some(0x1040));
    }

    #[test]
    fn branch_target_is_none_for_register_branch() {
        let inst = decode(0xD65F_03C0, 0x1000).unwrap();
        assert_eq!(inst.kind, InstKind::Ret);
        assert_eq!(branch_target(&inst), None);
    }

    #[test]
    fn is_branch_true_for_ret() {
        let inst = decode(0xD65F_03C0, 0x1000).unwrap();
        assert!(is_branch(&inst));
        assert!(!is_load_store(&inst));
    }

    #[test]
    fn is_load_store_true_for_ldr() {
        let inst = decode(0xF940_0421, 0x1000).unwrap();
        assert!(is_load_store(&inst));
        assert!(!is_branch(&inst));
    }

    #[test]
    fn immediate_value_respects_has_imm() {
        let inst = decode(0xF940_0421, 0x1000).unwrap();
        assert_eq!(immediate_value(&inst), Some(8));

        let ret = decode(0xD65F_03C0, 0x1000).unwrap();
        assert_eq!(immediate_value(&ret), None);
    }

    #[test]
    fn used_registers_for_ldr_is_rd_and_rn() {
        let inst = decode(0xF940_0421, 0x1000).unwrap();
        let regs = used_registers(&inst);
        assert_eq!(regs, vec![(1, RegClass::GpX), (1, RegClass::GpX)]);
    }

    #[test]
    fn used_registers_for_stp_includes_rt2() {
        let inst = decode(0xA9BF_7BFD, 0x1000).unwrap();
        let regs = used_registers(&inst);
        assert!(regs.contains(&(29, RegClass::GpX)));
        assert!(regs.contains(&(30, RegClass::GpX)));
        assert!(regs.contains(&(31, RegClass::Sp)));
    }

    #[test]
    fn used_registers_for_ret_is_rn_only() {
        let inst = decode(0xD65F_03C0, 0x1000).unwrap();
        assert_eq!(used_registers(&inst), vec![(30, RegClass::GpX)]);
    }

    #[test]
    fn used_registers_for_b_is_empty() {
        let inst = decode(0x1400_0010, 0x1000).unwrap();
        assert!(used_registers(&inst).is_empty());
    }
}
