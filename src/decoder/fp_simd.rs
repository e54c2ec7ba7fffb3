//! Floating-point and scalar Advanced SIMD decoding: the 1-/2-/3-source FP data-processing
//! forms, FP compare and conditional-compare/select, FP<->integer and FP<->GPR conversions, the
//! FP immediate-move form, and the scalar forms of `DUP`, three-same and two-register-misc.
//!
//! The opcode tables for the three-same and two-register-misc scalar groups only cover the
//! operations this crate's [`InstKind`] models; unmapped opcodes are rejected rather than
//! guessed at, the same reject-and-fall-through discipline the rest of the decoder uses for
//! genuinely reserved encodings.

use crate::bits::{bit, bits};
use crate::decode_table::{Row, Table};
use crate::model::{Instruction, InstKind, RegClass};

pub static TABLE: Table = Table(ROWS);

static ROWS: &[Row] = &[
    Row { mask: 0x5F00_0000, value: 0x1F00_0000, decoder: decode_three_source },
    Row { mask: 0x5F20_7C00, value: 0x1E20_4000, decoder: decode_one_source },
    Row { mask: 0x5F20_3C00, value: 0x1E20_2000, decoder: decode_compare },
    Row { mask: 0x5F20_1C00, value: 0x1E20_1000, decoder: decode_fmov_immediate },
    Row { mask: 0x5F20_FC00, value: 0x1E20_0000, decoder: decode_int_fp_convert },
    Row { mask: 0xFF20_0400, value: 0x1E20_0400, decoder: decode_fccmp },
    Row { mask: 0xFF20_0C00, value: 0x1E20_0C00, decoder: decode_fcsel },
    Row { mask: 0x5F20_0C00, value: 0x1E20_0800, decoder: decode_two_source },
    Row { mask: 0xFFE0_FC00, value: 0x5E00_0400, decoder: decode_scalar_dup },
    Row { mask: 0xDF20_0400, value: 0x5E20_0400, decoder: decode_scalar_three_same },
    Row { mask: 0xDF3E_0C00, value: 0x5E20_0800, decoder: decode_scalar_two_reg_misc },
];

fn decode_three_source(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let m = bit(word, 31);
    let s = bit(word, 29);
    if m != 0 || s != 0 {
        return false;
    }
    let ptype = bits(word, 22, 23);
    let o1 = bit(word, 21);
    let rm = bits(word, 16, 20) as u8;
    let o0 = bit(word, 15);
    let ra = bits(word, 10, 14) as u8;
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if ptype == 2 {
        return false;
    }

    let class = RegClass::fp_by_ftype(ptype);
    out.rd = rd;
    out.rn = rn;
    out.rm = rm;
    out.ra = ra;
    out.rd_class = class;
    out.rn_class = class;
    out.rm_class = class;

    out.kind = match (o1, o0) {
        (0, 0) => InstKind::Fmadd,
        (0, 1) => InstKind::Fmsub,
        (1, 0) => InstKind::Fnmadd,
        (_, _) => InstKind::Fnmsub,
    };
    out.mnemonic = match out.kind {
        InstKind::Fmadd => "fmadd",
        InstKind::Fmsub => "fmsub",
        InstKind::Fnmadd => "fnmadd",
        _ => "fnmsub",
    };
    true
}

fn decode_one_source(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let m = bit(word, 31);
    let s = bit(word, 29);
    if m != 0 || s != 0 {
        return false;
    }
    let ptype = bits(word, 22, 23);
    let opcode = bits(word, 15, 20);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if ptype == 2 {
        return false;
    }
    let src_class = RegClass::fp_by_ftype(ptype);

    out.rn = rn;
    out.rd = rd;
    out.rn_class = src_class;
    out.rd_class = src_class;

    match opcode {
        0x00 => {
            out.kind = InstKind::Fmov;
            out.mnemonic = "fmov";
        }
        0x01 => {
            out.kind = InstKind::Fabs;
            out.mnemonic = "fabs";
        }
        0x02 => {
            out.kind = InstKind::Fneg;
            out.mnemonic = "fneg";
        }
        0x03 => {
            out.kind = InstKind::Fsqrt;
            out.mnemonic = "fsqrt";
        }
        0x04 | 0x05 | 0x07 => {
            out.kind = InstKind::Fcvt;
            out.mnemonic = "fcvt";
            out.rd_class = match opcode {
                0x04 => RegClass::VS,
                0x05 => RegClass::VD,
                _ => RegClass::VH,
            };
        }
        0x08 => {
            out.kind = InstKind::Frintn;
            out.mnemonic = "frintn";
        }
        0x09 => {
            out.kind = InstKind::Frintp;
            out.mnemonic = "frintp";
        }
        0x0A => {
            out.kind = InstKind::Frintm;
            out.mnemonic = "frintm";
        }
        0x0B => {
            out.kind = InstKind::Frintz;
            out.mnemonic = "frintz";
        }
        0x0C => {
            out.kind = InstKind::Frinta;
            out.mnemonic = "frinta";
        }
        0x0E => {
            out.kind = InstKind::Frintx;
            out.mnemonic = "frintx";
        }
        0x0F => {
            out.kind = InstKind::Frinti;
            out.mnemonic = "frinti";
        }
        _ => return false,
    }
    true
}

fn decode_compare(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let m = bit(word, 31);
    let s = bit(word, 29);
    if m != 0 || s != 0 {
        return false;
    }
    let ptype = bits(word, 22, 23);
    let op = bits(word, 14, 15);
    let rm = bits(word, 16, 20) as u8;
    let rn = bits(word, 5, 9) as u8;
    let opcode2 = bits(word, 0, 4);
    if ptype == 2 || op != 0 {
        return false;
    }
    let class = RegClass::fp_by_ftype(ptype);

    out.rn = rn;
    out.rn_class = class;
    let is_exception_on_qnan = opcode2 & 0x10 != 0;
    out.kind = if is_exception_on_qnan { InstKind::Fcmpe } else { InstKind::Fcmp };
    out.mnemonic = if is_exception_on_qnan { "fcmpe" } else { "fcmp" };

    match opcode2 & !0x10 {
        0x00 => {
            out.rm = rm;
            out.rm_class = class;
        }
        0x08 => {
            out.has_imm = true;
            // Compare against +0.0; rm unused.
        }
        _ => return false,
    }
    true
}

fn decode_fccmp(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let ptype = bits(word, 22, 23);
    let rm = bits(word, 16, 20) as u8;
    let cond = crate::model::Condition::from_bits(bits(word, 12, 15));
    let rn = bits(word, 5, 9) as u8;
    let op = bit(word, 4);
    let nzcv = bits(word, 0, 3);
    if ptype == 2 {
        return false;
    }
    let class = RegClass::fp_by_ftype(ptype);

    out.rn = rn;
    out.rm = rm;
    out.rn_class = class;
    out.rm_class = class;
    out.cond = cond;
    out.imm = nzcv as i64;
    out.has_imm = true;
    out.kind = if op != 0 { InstKind::Fccmpe } else { InstKind::Fccmp };
    out.mnemonic = if op != 0 { "fccmpe" } else { "fccmp" };
    true
}

fn decode_fcsel(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let ptype = bits(word, 22, 23);
    let rm = bits(word, 16, 20) as u8;
    let cond = crate::model::Condition::from_bits(bits(word, 12, 15));
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if ptype == 2 {
        return false;
    }
    let class = RegClass::fp_by_ftype(ptype);

    out.rd = rd;
    out.rn = rn;
    out.rm = rm;
    out.rd_class = class;
    out.rn_class = class;
    out.rm_class = class;
    out.cond = cond;
    out.kind = InstKind::Fcsel;
    out.mnemonic = "fcsel";
    true
}

fn decode_two_source(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let m = bit(word, 31);
    let s = bit(word, 29);
    if m != 0 || s != 0 {
        return false;
    }
    let ptype = bits(word, 22, 23);
    let rm = bits(word, 16, 20) as u8;
    let opcode = bits(word, 12, 15);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if ptype == 2 {
        return false;
    }
    let class = RegClass::fp_by_ftype(ptype);

    out.rd = rd;
    out.rn = rn;
    out.rm = rm;
    out.rd_class = class;
    out.rn_class = class;
    out.rm_class = class;

    out.kind = match opcode {
        0x0 => InstKind::Fmul,
        0x1 => InstKind::Fdiv,
        0x2 => InstKind::Fadd,
        0x3 => InstKind::Fsub,
        0x4 => InstKind::Fmax,
        0x5 => InstKind::Fmin,
        0x6 => InstKind::Fmaxnm,
        0x7 => InstKind::Fminnm,
        0x8 => InstKind::Fnmul,
        _ => return false,
    };
    out.mnemonic = match out.kind {
        InstKind::Fmul => "fmul",
        InstKind::Fdiv => "fdiv",
        InstKind::Fadd => "fadd",
        InstKind::Fsub => "fsub",
        InstKind::Fmax => "fmax",
        InstKind::Fmin => "fmin",
        InstKind::Fmaxnm => "fmaxnm",
        InstKind::Fminnm => "fminnm",
        _ => "fnmul",
    };
    true
}

fn decode_int_fp_convert(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let sf = bit(word, 31) != 0;
    let s = bit(word, 29);
    if s != 0 {
        return false;
    }
    let ptype = bits(word, 22, 23);
    let rmode = bits(word, 19, 20);
    let opcode = bits(word, 16, 18);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if ptype == 2 {
        return false;
    }
    let fp_class = RegClass::fp_by_ftype(ptype);
    let gpr_class = RegClass::gpr(sf);
    out.is_64bit = sf;

    match (rmode, opcode) {
        (0, 0) | (1, 0) | (2, 0) | (3, 0) => {
            out.kind = match rmode {
                0 => InstKind::Fcvtns,
                1 => InstKind::Fcvtps,
                2 => InstKind::Fcvtms,
                _ => InstKind::Fcvtzs,
            };
            out.mnemonic = match rmode {
                0 => "fcvtns",
                1 => "fcvtps",
                2 => "fcvtms",
                _ => "fcvtzs",
            };
            out.rd = rd;
            out.rn = rn;
            out.rd_class = gpr_class;
            out.rn_class = fp_class;
        }
        (0, 1) | (1, 1) | (2, 1) | (3, 1) => {
            out.kind = match rmode {
                0 => InstKind::Fcvtnu,
                1 => InstKind::Fcvtpu,
                2 => InstKind::Fcvtmu,
                _ => InstKind::Fcvtzu,
            };
            out.mnemonic = match rmode {
                0 => "fcvtnu",
                1 => "fcvtpu",
                2 => "fcvtmu",
                _ => "fcvtzu",
            };
            out.rd = rd;
            out.rn = rn;
            out.rd_class = gpr_class;
            out.rn_class = fp_class;
        }
        (0, 2) => {
            out.kind = InstKind::Scvtf;
            out.mnemonic = "scvtf";
            out.rd = rd;
            out.rn = rn;
            out.rd_class = fp_class;
            out.rn_class = gpr_class;
        }
        (0, 3) => {
            out.kind = InstKind::Ucvtf;
            out.mnemonic = "ucvtf";
            out.rd = rd;
            out.rn = rn;
            out.rd_class = fp_class;
            out.rn_class = gpr_class;
        }
        (0, 6) => {
            // FMOV general -> vector, same-width forms only (ptype 0/sf=0 or ptype 1/sf=1).
            if !((ptype == 0 && !sf) || (ptype == 1 && sf)) {
                return false;
            }
            out.kind = InstKind::Fmov;
            out.mnemonic = "fmov";
            out.rd = rd;
            out.rn = rn;
            out.rd_class = fp_class;
            out.rn_class = gpr_class;
        }
        (0, 7) => {
            // FMOV vector -> general, same-width forms only.
            if !((ptype == 0 && !sf) || (ptype == 1 && sf)) {
                return false;
            }
            out.kind = InstKind::Fmov;
            out.mnemonic = "fmov";
            out.rd = rd;
            out.rn = rn;
            out.rd_class = gpr_class;
            out.rn_class = fp_class;
        }
        _ => return false,
    }
    true
}

fn decode_fmov_immediate(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let m = bit(word, 31);
    let s = bit(word, 29);
    if m != 0 || s != 0 {
        return false;
    }
    let ptype = bits(word, 22, 23);
    let imm8 = bits(word, 13, 20);
    let imm5 = bits(word, 5, 9);
    let rd = bits(word, 0, 4) as u8;
    if ptype == 2 || imm5 != 0 {
        return false;
    }

    out.rd = rd;
    out.rd_class = RegClass::fp_by_ftype(ptype);
    out.imm = imm8 as i64;
    out.has_imm = true;
    out.kind = InstKind::Fmov;
    out.mnemonic = "fmov";
    true
}

fn decode_scalar_dup(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let imm5 = bits(word, 16, 20);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;

    let (size, index) = if imm5 & 1 != 0 {
        (0u32, imm5 >> 1)
    } else if imm5 & 2 != 0 {
        (1u32, imm5 >> 2)
    } else if imm5 & 4 != 0 {
        (2u32, imm5 >> 3)
    } else if imm5 & 8 != 0 {
        (3u32, imm5 >> 4)
    } else {
        return false;
    };

    out.rd = rd;
    out.rn = rn;
    out.rd_class = RegClass::vector_by_size(size);
    out.rn_class = RegClass::VFull;
    out.imm = index as i64;
    out.has_imm = true;
    out.kind = InstKind::Dup;
    out.mnemonic = "dup";
    true
}

fn decode_scalar_three_same(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let u = bit(word, 29);
    let size = bits(word, 22, 23);
    let rm = bits(word, 16, 20) as u8;
    let opcode = bits(word, 11, 15);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    let sz = size & 1;
    let class = if sz == 0 { RegClass::VS } else { RegClass::VD };

    out.rd = rd;
    out.rn = rn;
    out.rm = rm;
    out.rd_class = class;
    out.rn_class = class;
    out.rm_class = class;

    out.kind = match (u, opcode, sz) {
        (0, 0x10, _) => InstKind::Add,
        (1, 0x10, _) => InstKind::Sub,
        (0, 0x19, _) => InstKind::Frecps,
        (1, 0x19, _) => InstKind::Frsqrts,
        (0, 0x1A, _) => InstKind::Fmulx,
        (0, 0x1C, _) => InstKind::Fcmeq,
        (1, 0x1C, 0) => InstKind::Fcmge,
        (1, 0x1C, 1) => InstKind::Fcmgt,
        // U=1, opcode=0x1D names both facge and fdiv in the source table at the same key;
        // first match wins there, so facge is the one that is reachable.
        (1, 0x1D, _) => InstKind::Facge,
        (1, 0x1F, 0) => InstKind::Facgt,
        (1, 0x1B, _) => InstKind::Fmul,
        (0, 0x1E, _) => InstKind::Fadd,
        (1, 0x1E, _) => InstKind::Fsub,
        (0, 0x0F, _) => InstKind::Fmax,
        (1, 0x0F, _) => InstKind::Fmin,
        _ => return false,
    };
    out.mnemonic = match out.kind {
        InstKind::Add => "add",
        InstKind::Sub => "sub",
        InstKind::Frecps => "frecps",
        InstKind::Frsqrts => "frsqrts",
        InstKind::Fmulx => "fmulx",
        InstKind::Fcmeq => "fcmeq",
        InstKind::Fcmge => "fcmge",
        InstKind::Fcmgt => "fcmgt",
        InstKind::Facge => "facge",
        InstKind::Fdiv => "fdiv",
        InstKind::Facgt => "facgt",
        InstKind::Fmul => "fmul",
        InstKind::Fadd => "fadd",
        InstKind::Fsub => "fsub",
        InstKind::Fmax => "fmax",
        InstKind::Fmin => "fmin",
        _ => "unknown",
    };
    true
}

fn decode_scalar_two_reg_misc(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let u = bit(word, 29);
    let size = bits(word, 22, 23);
    let opcode = bits(word, 12, 16);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    let gp_class = RegClass::vector_by_size(size);

    out.rd = rd;
    out.rn = rn;
    out.rd_class = gp_class;
    out.rn_class = gp_class;

    out.kind = match (u, opcode) {
        (0, 0x03) => InstKind::Suqadd,
        (1, 0x03) => InstKind::Usqadd,
        (0, 0x07) => InstKind::Sqabs,
        (1, 0x07) => InstKind::Sqneg,
        (0, 0x08) => InstKind::Cmgt,
        (1, 0x08) => InstKind::Cmge,
        (0, 0x09) => InstKind::Cmeq,
        (1, 0x09) => InstKind::Cmle,
        (0, 0x0A) => InstKind::Cmlt,
        (0, 0x0B) => InstKind::Abs,
        (1, 0x0B) => InstKind::Neg,
        (0, 0x1A) => InstKind::Fcvtns,
        (1, 0x1A) => InstKind::Fcvtnu,
        (0, 0x1B) => InstKind::Fcvtms,
        (1, 0x1B) => InstKind::Fcvtmu,
        (0, 0x1C) => InstKind::Fcvtas,
        (1, 0x1C) => InstKind::Fcvtau,
        (0, 0x1D) => InstKind::Scvtf,
        (1, 0x1D) => InstKind::Ucvtf,
        (0, 0x0C) => InstKind::Fcmgt,
        (1, 0x0C) => InstKind::Fcmge,
        (0, 0x0D) => InstKind::Fcmlt,
        (1, 0x0D) => InstKind::Fcmle,
        (1, 0x19) => InstKind::Fcvtpu,
        (1, 0x1E) => InstKind::Fcvtzu,
        (0, 0x1E) => InstKind::Fcvtzs,
        _ => return false,
    };
    out.mnemonic = match out.kind {
        InstKind::Suqadd => "suqadd",
        InstKind::Usqadd => "usqadd",
        InstKind::Sqabs => "sqabs",
        InstKind::Sqneg => "sqneg",
        InstKind::Cmgt => "cmgt",
        InstKind::Cmge => "cmge",
        InstKind::Cmeq => "cmeq",
        InstKind::Cmle => "cmle",
        InstKind::Cmlt => "cmlt",
        InstKind::Abs => "abs",
        InstKind::Neg => "neg",
        InstKind::Fcvtns => "fcvtns",
        InstKind::Fcvtnu => "fcvtnu",
        InstKind::Fcvtms => "fcvtms",
        InstKind::Fcvtmu => "fcvtmu",
        InstKind::Fcvtas => "fcvtas",
        InstKind::Fcvtau => "fcvtau",
        InstKind::Scvtf => "scvtf",
        InstKind::Ucvtf => "ucvtf",
        InstKind::Fcmgt => "fcmgt",
        InstKind::Fcmge => "fcmge",
        InstKind::Fcmle => "fcmle",
        InstKind::Fcmlt => "fcmlt",
        InstKind::Fcvtpu => "fcvtpu",
        InstKind::Fcvtzu => "fcvtzu",
        InstKind::Fcvtzs => "fcvtzs",
        _ => "unknown",
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fmov_register_double() {
        // fmov d0, d1: M=0,S=0,ptype=01,opcode=000000
        let mut inst = Instruction::default();
        let word = 0x1E60_4020u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Fmov);
        assert_eq!(inst.rd_class, RegClass::VD);
        assert_eq!(inst.rn, 1);
    }

    #[test]
    fn decodes_fadd_single() {
        // fadd s0, s1, s2: ptype=00, opcode=0010
        let mut inst = Instruction::default();
        let word = 0x1E22_2820u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Fadd);
        assert_eq!(inst.rd_class, RegClass::VS);
    }

    #[test]
    fn decodes_fcmp_zero_form() {
        let mut inst = Instruction::default();
        // fcmp s0, #0.0: opcode2=01000
        let word = 0x1E20_2008u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Fcmp);
    }

    #[test]
    fn decodes_fmov_vector_to_gpr() {
        // fmov x0, d0: sf=1, rmode=0, opcode=7 (vector -> general)
        let mut inst = Instruction::default();
        let word = 0x9E67_0000u32;
        assert!(TABLE.decode(word, 0x3000, &mut inst));
        assert_eq!(inst.kind, InstKind::Fmov);
        assert_eq!(inst.rd_class, RegClass::GpX);
        assert_eq!(inst.rn_class, RegClass::VD);
    }

    #[test]
    fn rejects_reserved_ptype() {
        let mut inst = Instruction::default();
        let word = 0x1E60_4020u32 | (1 << 22) | (1 << 23);
        assert!(!TABLE.decode(word, 0, &mut inst));
    }

    #[test]
    fn decodes_scalar_dup_selects_element_size_and_index() {
        // dup s0, v1.s[1]: imm5 = 0b01100 (index=1, lowest set bit at position 2 -> S)
        let mut inst = Instruction::default();
        let word = 0x5E0C_0420u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Dup);
        assert_eq!(inst.rd_class, RegClass::VS);
        assert_eq!(inst.rn, 1);
        assert_eq!(inst.imm, 1);
    }

    #[test]
    fn decodes_scalar_three_same_vector_add() {
        // add d4, d3, d2: U=0, opcode=0x10, size=1 (sz selects D)
        let mut inst = Instruction::default();
        let word = 0x5E62_8464u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Add);
        assert_eq!(inst.rd_class, RegClass::VD);
        assert_eq!((inst.rd, inst.rn, inst.rm), (4, 3, 2));
    }

    #[test]
    fn decodes_scalar_three_same_fadd() {
        // fadd d7, d6, d5: U=0, opcode=0x1E, size=1
        let mut inst = Instruction::default();
        let word = 0x5E65_F4C7u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Fadd);
        assert_eq!(inst.rd_class, RegClass::VD);
    }

    #[test]
    fn decodes_scalar_two_reg_misc_suqadd() {
        // suqadd s9, s8: U=0, opcode=0x03, size=2 (S)
        let mut inst = Instruction::default();
        let word = 0x5EA0_3909u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Suqadd);
        assert_eq!(inst.rd_class, RegClass::VS);
        assert_eq!((inst.rd, inst.rn), (9, 8));
    }

    #[test]
    fn decodes_scalar_two_reg_misc_fcvtpu() {
        // fcvtpu x.. form at D width: U=1, opcode=0x19, size=1
        let mut inst = Instruction::default();
        let word = 0x7E61_994Bu32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Fcvtpu);
        assert_eq!(inst.rd_class, RegClass::VD);
    }

    #[test]
    fn decodes_scalar_two_reg_misc_fcmgt_zero_not_gated_by_size() {
        // fcmgt d13, d12, #0.0: U=0, opcode=0x0C, size=1 (D) -- must not be dropped by size gating
        let mut inst = Instruction::default();
        let word = 0x5E60_C98Du32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Fcmgt);
        assert_eq!(inst.rd_class, RegClass::VD);
    }
}
