//! Data-processing (immediate) decoding: PC-relative address formation, add/subtract immediate
//! with its `CMP`/`CMN`/`MOV`-SP aliases, logical immediate with its `MOV`/`TST` aliases, wide
//! immediate moves, bitfield operations with their shift aliases, and `EXTR`/`ROR`.

use crate::bits::{bit, bits, sign_extend};
use crate::decode_table::{Row, Table};
use crate::model::{Condition, Instruction, InstKind, RegClass};

pub static TABLE: Table = Table(ROWS);

static ROWS: &[Row] = &[
    Row { mask: 0x1F00_0000, value: 0x1000_0000, decoder: decode_adr },
    Row { mask: 0x1F00_0000, value: 0x1100_0000, decoder: decode_add_sub_imm },
    Row { mask: 0x1F80_0000, value: 0x1200_0000, decoder: decode_logical_imm },
    Row { mask: 0x1F80_0000, value: 0x1280_0000, decoder: decode_movewide },
    Row { mask: 0x1F80_0000, value: 0x1300_0000, decoder: decode_bitfield },
    Row { mask: 0x7FA0_0000, value: 0x1380_0000, decoder: decode_extr },
];

fn decode_adr(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let op = bit(word, 31);
    let immlo = bits(word, 29, 30);
    let immhi = bits(word, 5, 23);
    let rd = bits(word, 0, 4) as u8;
    let imm21 = (immhi << 2) | immlo;

    out.rd = rd;
    out.rd_class = RegClass::GpX;
    out.is_64bit = true;
    out.has_imm = true;
    if op == 0 {
        out.kind = InstKind::Adr;
        out.mnemonic = "adr";
        out.imm = sign_extend(imm21, 21);
    } else {
        out.kind = InstKind::Adrp;
        out.mnemonic = "adrp";
        out.imm = sign_extend(imm21, 21) << 12;
    }
    true
}

fn decode_add_sub_imm(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let sf = bit(word, 31) != 0;
    let op = bit(word, 30);
    let s = bit(word, 29) != 0;
    let shift = bits(word, 22, 23);
    let imm12 = bits(word, 10, 21);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if shift > 1 {
        return false;
    }

    out.is_64bit = sf;
    out.set_flags = s;
    out.shift_amount = if shift == 1 { 12 } else { 0 };
    out.imm = (imm12 << out.shift_amount) as i64;
    out.has_imm = true;
    out.rn = rn;
    out.rd = rd;
    out.rn_class = RegClass::gpr_or_sp(rn, sf);
    out.rd_class = RegClass::gpr_or_sp(rd, sf);

    if s && rd == 31 {
        out.kind = if op == 0 { InstKind::Cmn } else { InstKind::Cmp };
        out.mnemonic = if op == 0 { "cmn" } else { "cmp" };
        out.rd_class = RegClass::gpr_or_zero(rd, sf);
        return true;
    }

    if !s && op == 0 && imm12 == 0 && shift == 0 {
        out.kind = InstKind::Mov;
        out.mnemonic = "mov";
        out.has_imm = false;
        out.rm = rn;
        out.rm_class = out.rn_class;
        return true;
    }

    out.kind = match (op, s) {
        (0, false) => InstKind::Add,
        (0, true) => InstKind::Adds,
        (_, false) => InstKind::Sub,
        (_, true) => InstKind::Subs,
    };
    out.mnemonic = match out.kind {
        InstKind::Add => "add",
        InstKind::Adds => "adds",
        InstKind::Sub => "sub",
        _ => "subs",
    };
    true
}

fn decode_logical_imm(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let sf = bit(word, 31) != 0;
    let opc = bits(word, 29, 30);
    let n = bit(word, 22);
    let immr = bits(word, 16, 21);
    let imms = bits(word, 10, 15);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if !sf && n != 0 {
        return false;
    }

    out.is_64bit = sf;
    out.rn = rn;
    out.rd = rd;
    out.rn_class = RegClass::gpr_or_zero(rn, sf);
    out.rd_class = RegClass::gpr_or_zero(rd, sf);
    out.imm = ((immr << 6) | imms) as i64;
    out.has_imm = true;

    out.kind = match opc {
        0 => InstKind::And,
        1 => InstKind::Orr,
        2 => InstKind::Eor,
        _ => InstKind::And, // ANDS, set_flags below
    };
    out.set_flags = opc == 3;
    out.mnemonic = match opc {
        0 => "and",
        1 => "orr",
        2 => "eor",
        _ => "ands",
    };

    if opc == 1 && rn == 31 {
        out.kind = InstKind::Mov;
        out.mnemonic = "mov";
    } else if opc == 3 && rd == 31 {
        out.kind = InstKind::Tst;
        out.mnemonic = "tst";
    }
    true
}

fn decode_movewide(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let sf = bit(word, 31) != 0;
    let opc = bits(word, 29, 30);
    let hw = bits(word, 21, 22);
    let imm16 = bits(word, 5, 20);
    let rd = bits(word, 0, 4) as u8;
    if !sf && hw >= 2 {
        return false;
    }
    if opc == 1 {
        return false;
    }

    out.is_64bit = sf;
    out.rd = rd;
    out.rd_class = RegClass::gpr_or_zero(rd, sf);
    out.shift_amount = (hw * 16) as u8;
    out.imm = imm16 as i64;
    out.has_imm = true;
    out.kind = match opc {
        0 => InstKind::Movn,
        2 => InstKind::Movz,
        _ => InstKind::Movk,
    };
    out.mnemonic = match out.kind {
        InstKind::Movn => "movn",
        InstKind::Movz => "movz",
        _ => "movk",
    };
    true
}

fn decode_bitfield(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let sf = bit(word, 31) != 0;
    let opc = bits(word, 29, 30);
    let n = bit(word, 22) != 0;
    let immr = bits(word, 16, 21);
    let imms = bits(word, 10, 15);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if n != sf {
        return false;
    }

    let width_top = if sf { 63 } else { 31 };
    out.is_64bit = sf;
    out.rn = rn;
    out.rd = rd;
    out.rn_class = RegClass::gpr_or_zero(rn, sf);
    out.rd_class = RegClass::gpr_or_zero(rd, sf);
    out.shift_amount = immr as u8;
    out.imm = ((immr << 6) | imms) as i64;
    out.has_imm = true;

    match opc {
        0 => {
            if immr != 0 && imms == width_top {
                out.kind = InstKind::Asr;
                out.mnemonic = "asr";
            } else {
                out.kind = InstKind::Sbfm;
                out.mnemonic = "sbfm";
            }
        }
        1 => {
            out.kind = InstKind::Bfm;
            out.mnemonic = "bfm";
        }
        2 => {
            if imms == width_top {
                out.kind = InstKind::Lsr;
                out.mnemonic = "lsr";
            } else if immr == 0 && imms < width_top {
                out.kind = InstKind::Lsl;
                out.mnemonic = "lsl";
                out.shift_amount = (width_top - imms) as u8;
            } else {
                out.kind = InstKind::Ubfm;
                out.mnemonic = "ubfm";
            }
        }
        _ => return false,
    }
    true
}

fn decode_extr(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let sf = bit(word, 31) != 0;
    let n = bit(word, 22) != 0;
    let rm = bits(word, 16, 20) as u8;
    let imms = bits(word, 10, 15);
    let rn = bits(word, 5, 9) as u8;
    let rd = bits(word, 0, 4) as u8;
    if n != sf {
        return false;
    }
    if !sf && imms >= 32 {
        return false;
    }

    out.is_64bit = sf;
    out.rd = rd;
    out.rn = rn;
    out.rm = rm;
    out.rd_class = RegClass::gpr_or_zero(rd, sf);
    out.rn_class = RegClass::gpr_or_zero(rn, sf);
    out.rm_class = RegClass::gpr_or_zero(rm, sf);
    out.shift_amount = imms as u8;
    out.cond = Condition::Al;

    if rn == rm {
        out.kind = InstKind::Ror;
        out.mnemonic = "ror";
    } else {
        out.kind = InstKind::Extr;
        out.mnemonic = "extr";
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_imm_with_rd_31_and_s_is_cmp() {
        let mut inst = Instruction::default();
        // subs xzr, x0, #1 (S=1, op=1, Rd=31)
        let word = 0xF100_041Fu32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Cmp);
        assert_eq!(inst.rd_class, RegClass::Xzr);
    }

    #[test]
    fn add_imm_zero_becomes_mov() {
        let mut inst = Instruction::default();
        // add x0, x1, #0
        let word = 0x9100_0020u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Mov);
        assert!(!inst.has_imm);
        assert_eq!(inst.rm, 1);
    }

    #[test]
    fn logical_imm_orr_with_rn_31_is_mov() {
        let mut inst = Instruction::default();
        // orr x0, xzr, #1  (N=0 immr=0 imms=0 encodes mask 0x1)
        let word = 0xB200_03E0u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Mov);
    }

    #[test]
    fn movz_rejects_narrow_hw_overflow() {
        let mut inst = Instruction::default();
        // sf=0, hw=2 (invalid for 32-bit)
        let word = 0x5280_0000u32 | (2 << 21);
        assert!(!TABLE.decode(word, 0, &mut inst));
    }

    #[test]
    fn bitfield_lsr_alias() {
        let mut inst = Instruction::default();
        // ubfm x0, x1, #4, #63 -> lsr x0, x1, #4
        let word = 0xD344_FC20u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Lsr);
        assert_eq!(inst.shift_amount, 4);
    }

    #[test]
    fn extr_with_matching_registers_is_ror() {
        let mut inst = Instruction::default();
        // extr x0, x1, x1, #4
        let word = 0x93C1_1020u32;
        assert!(TABLE.decode(word, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Ror);
    }
}
