//! Branch and system-instruction decoding: unconditional/conditional branches, compare-and-branch,
//! test-and-branch, branch-to-register forms, hints, and `MRS`.

use crate::bits::{bit, bits, sign_extend};
use crate::decode_table::{Row, Table};
use crate::model::{Condition, Instruction, InstKind, RegClass};

pub static TABLE: Table = Table(ROWS);

static ROWS: &[Row] = &[
    Row { mask: 0x7C00_0000, value: 0x1400_0000, decoder: decode_b_bl },
    Row { mask: 0xFF00_0010, value: 0x5400_0000, decoder: decode_b_cond },
    Row { mask: 0x7E00_0000, value: 0x3400_0000, decoder: decode_cbz_cbnz },
    Row { mask: 0x7E00_0000, value: 0x3600_0000, decoder: decode_tbz_tbnz },
    Row { mask: 0xFE1F_001F, value: 0xD61F_0000, decoder: decode_branch_register },
    Row { mask: 0xFFC0_0000, value: 0xD500_0000, decoder: decode_system },
];

fn decode_b_bl(word: u32, address: u64, out: &mut Instruction) -> bool {
    let op = bit(word, 31);
    let imm26 = bits(word, 0, 25);
    out.imm = sign_extend(imm26, 26) << 2;
    out.has_imm = true;
    let _ = address;
    if op == 0 {
        out.kind = InstKind::B;
        out.mnemonic = "b";
    } else {
        out.kind = InstKind::Bl;
        out.mnemonic = "bl";
    }
    true
}

fn decode_b_cond(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let imm19 = bits(word, 5, 23);
    let cond = Condition::from_bits(bits(word, 0, 3));
    out.imm = sign_extend(imm19, 19) << 2;
    out.has_imm = true;
    out.cond = cond;
    out.kind = InstKind::B;
    out.mnemonic = "b.cond";
    true
}

fn decode_cbz_cbnz(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let sf = bit(word, 31) != 0;
    let op = bit(word, 24);
    let imm19 = bits(word, 5, 23);
    let rt = bits(word, 0, 4) as u8;

    out.rd = rt;
    out.rd_class = RegClass::gpr(sf);
    out.is_64bit = sf;
    out.imm = sign_extend(imm19, 19) << 2;
    out.has_imm = true;
    if op == 0 {
        out.kind = InstKind::Cbz;
        out.mnemonic = "cbz";
    } else {
        out.kind = InstKind::Cbnz;
        out.mnemonic = "cbnz";
    }
    true
}

fn decode_tbz_tbnz(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let b5 = bit(word, 31);
    let op = bit(word, 24);
    let b40 = bits(word, 19, 23);
    let imm14 = bits(word, 5, 18);
    let rt = bits(word, 0, 4) as u8;
    let bit_pos = (b5 << 5) | b40;

    out.rd = rt;
    out.rd_class = if bit_pos < 32 { RegClass::GpW } else { RegClass::GpX };
    out.is_64bit = bit_pos >= 32;
    out.shift_amount = bit_pos as u8;
    out.imm = sign_extend(imm14, 14) << 2;
    out.has_imm = true;
    if op == 0 {
        out.kind = InstKind::Tbz;
        out.mnemonic = "tbz";
    } else {
        out.kind = InstKind::Tbnz;
        out.mnemonic = "tbnz";
    }
    true
}

fn decode_branch_register(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let opc = bits(word, 21, 24);
    let op3 = bits(word, 10, 15);
    let rn = bits(word, 5, 9) as u8;
    if op3 != 0 {
        return false;
    }

    out.rn = rn;
    out.rn_class = RegClass::GpX;
    match opc {
        0 => {
            out.kind = InstKind::Br;
            out.mnemonic = "br";
        }
        1 => {
            out.kind = InstKind::Blr;
            out.mnemonic = "blr";
        }
        2 => {
            out.kind = InstKind::Ret;
            out.mnemonic = "ret";
        }
        4 => {
            if rn != 31 {
                return false;
            }
            out.kind = InstKind::Eret;
            out.mnemonic = "eret";
        }
        5 => {
            if rn != 31 {
                return false;
            }
            out.kind = InstKind::Drps;
            out.mnemonic = "drps";
        }
        _ => return false,
    }
    true
}

fn decode_system(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let l = bit(word, 21);
    let op0 = bits(word, 19, 20);
    let op1 = bits(word, 16, 18);
    let crn = bits(word, 12, 15);
    let crm = bits(word, 8, 11);
    let op2 = bits(word, 5, 7);
    let rt = bits(word, 0, 4) as u8;

    if l == 0 {
        if !(op0 == 0 && op1 == 3 && crn == 2 && crm == 0 && rt == 31) {
            return false;
        }
        out.kind = InstKind::Nop;
        out.mnemonic = match op2 {
            0 => "nop",
            1 => "yield",
            2 => "wfe",
            3 => "wfi",
            4 => "sev",
            5 => "sevl",
            _ => return false,
        };
        return true;
    }

    if rt == 31 {
        return false;
    }
    out.kind = InstKind::Mrs;
    out.mnemonic = "mrs";
    out.rd = rt;
    out.rd_class = RegClass::GpX;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unconditional_branch_and_computes_target() {
        let mut inst = Instruction::default();
        assert!(TABLE.decode(0x1400_0010, 0x1000, &mut inst));
        assert_eq!(inst.kind, InstKind::B);
        assert_eq!(inst.imm, 0x40);
        assert_eq!((inst.address as i64 + inst.imm) as u64, 0x1040);
    }

    #[test]
    fn decodes_ret_with_link_register() {
        let mut inst = Instruction::default();
        assert!(TABLE.decode(0xD65F_03C0, 0x1000, &mut inst));
        assert_eq!(inst.kind, InstKind::Ret);
        assert_eq!(inst.rn, 30);
    }

    #[test]
    fn bl_sets_link_flavor() {
        let mut inst = Instruction::default();
        assert!(TABLE.decode(0x9400_0010, 0x1000, &mut inst));
        assert_eq!(inst.kind, InstKind::Bl);
    }

    #[test]
    fn eret_requires_rn_31() {
        // opc=4 (ERET) with Rn=1 instead of the required 31.
        let mut inst = Instruction::default();
        assert!(!TABLE.decode(0xD69F_0020, 0x1000, &mut inst));
    }

    #[test]
    fn cbz_uses_32bit_class_when_sf_clear() {
        let mut inst = Instruction::default();
        // cbz w0, #0
        assert!(TABLE.decode(0x3400_0000, 0x1000, &mut inst));
        assert_eq!(inst.kind, InstKind::Cbz);
        assert_eq!(inst.rd_class, RegClass::GpW);
    }

    #[test]
    fn tbnz_bit_position_above_31_forces_64bit_class() {
        let mut inst = Instruction::default();
        // tbnz x0, #32, #0 -> b5=1, b40=0
        let word = 0x3700_0000 | (1 << 31);
        let mut t = Instruction::default();
        assert!(TABLE.decode(word, 0, &mut t));
        assert_eq!(t.kind, InstKind::Tbnz);
        assert_eq!(t.rd_class, RegClass::GpX);
        let _ = &mut inst;
    }
}
