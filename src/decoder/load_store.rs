//! Load/store decoding: exclusive and ordered accesses, compare-and-swap, the atomic
//! read-modify-write family, load/store pair, literal-pool loads, and the unsigned-immediate,
//! register-offset, unscaled-immediate and pre/post-indexed scalar forms.
//!
//! Row order matters here more than anywhere else in the decoder: the exclusive/atomic/CAS rows
//! are deliberately listed ahead of the generic scalar rows they would otherwise be mistaken for.

use crate::bits::{bit, bits, sign_extend};
use crate::decode_table::{Row, Table};
use crate::model::{AddrMode, Instruction, InstKind, RegClass};

pub static TABLE: Table = Table(ROWS);

static ROWS: &[Row] = &[
    Row { mask: 0x3F00_0000, value: 0x0800_0000, decoder: decode_exclusive },
    Row { mask: 0x3FA0_7C00, value: 0x08A0_7C00, decoder: decode_cas },
    Row { mask: 0x3F20_0C00, value: 0x3820_0000, decoder: decode_atomic_rmw },
    Row { mask: 0x3800_0000, value: 0x2800_0000, decoder: decode_ldp_stp },
    Row { mask: 0x3B00_0000, value: 0x1800_0000, decoder: decode_load_literal },
    Row { mask: 0x3B00_0000, value: 0x3900_0000, decoder: decode_unsigned_imm },
    Row { mask: 0x3B20_0C00, value: 0x3820_0800, decoder: decode_register_offset },
    Row { mask: 0x3B20_0000, value: 0x3800_0000, decoder: decode_unscaled_or_indexed },
];

/// Macro for the recurring `base[a][l][b|h]` mnemonic shape shared by `CAS` and the atomic
/// read-modify-write family: acquire/release infix before the byte/halfword suffix.
macro_rules! compose_al_bh {
    ($base:literal, $a:expr, $r:expr, $size:expr) => {
        match ($a, $r, $size) {
            (false, false, 0u32) => concat!($base, "b"),
            (false, false, 1u32) => concat!($base, "h"),
            (false, false, _) => $base,
            (true, false, 0u32) => concat!($base, "ab"),
            (true, false, 1u32) => concat!($base, "ah"),
            (true, false, _) => concat!($base, "a"),
            (false, true, 0u32) => concat!($base, "lb"),
            (false, true, 1u32) => concat!($base, "lh"),
            (false, true, _) => concat!($base, "l"),
            (true, true, 0u32) => concat!($base, "alb"),
            (true, true, 1u32) => concat!($base, "alh"),
            (true, true, _) => concat!($base, "al"),
        }
    };
}

fn rn_base_class(rn: u8) -> RegClass {
    if rn == 31 {
        RegClass::Sp
    } else {
        RegClass::GpX
    }
}

/// The shared `(size << 2) | opc` instruction-identity table for the GPR scalar load/store
/// forms, reused (per the architecture's own reuse of `opc` across addressing submodes) by the
/// unsigned-immediate, register-offset and unscaled/indexed decoders.
fn gpr_ldst_identity(size_opc: u32) -> Option<(InstKind, RegClass, bool)> {
    match size_opc {
        0x0 => Some((InstKind::Strb, RegClass::GpW, false)),
        0x1 => Some((InstKind::Ldrb, RegClass::GpW, false)),
        0x2 => Some((InstKind::Ldrsb, RegClass::GpX, true)),
        0x3 => Some((InstKind::Ldrsb, RegClass::GpW, false)),
        0x4 => Some((InstKind::Strh, RegClass::GpW, false)),
        0x5 => Some((InstKind::Ldrh, RegClass::GpW, false)),
        0x6 => Some((InstKind::Ldrsh, RegClass::GpX, true)),
        0x7 => Some((InstKind::Ldrsh, RegClass::GpW, false)),
        0x8 => Some((InstKind::Str, RegClass::GpW, false)),
        0x9 => Some((InstKind::Ldr, RegClass::GpW, false)),
        0xA => Some((InstKind::Ldrsw, RegClass::GpX, true)),
        0xC => Some((InstKind::Str, RegClass::GpX, true)),
        0xD => Some((InstKind::Ldr, RegClass::GpX, true)),
        _ => None,
    }
}

fn gpr_ldst_mnemonic_scaled(size_opc: u32) -> &'static str {
    match size_opc {
        0x0 => "strb",
        0x1 => "ldrb",
        0x2 => "ldrsb",
        0x3 => "ldrsb",
        0x4 => "strh",
        0x5 => "ldrh",
        0x6 => "ldrsh",
        0x7 => "ldrsh",
        0x8 => "str",
        0x9 => "ldr",
        0xA => "ldrsw",
        0xC => "str",
        0xD => "ldr",
        _ => "unknown",
    }
}

fn gpr_ldst_mnemonic_unscaled(size_opc: u32) -> &'static str {
    match size_opc {
        0x0 => "sturb",
        0x1 => "ldurb",
        0x2 => "ldursb",
        0x3 => "ldursb",
        0x4 => "sturh",
        0x5 => "ldurh",
        0x6 => "ldursh",
        0x7 => "ldursh",
        0x8 => "stur",
        0x9 => "ldur",
        0xA => "ldursw",
        0xC => "stur",
        0xD => "ldur",
        _ => "unknown",
    }
}

fn simd_ldst_identity(size: u32, is_store: bool) -> (InstKind, RegClass) {
    let class = RegClass::vector_by_size(size);
    let kind = if is_store { InstKind::Str } else { InstKind::Ldr };
    (kind, class)
}

fn decode_exclusive(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let size = bits(word, 30, 31);
    let o2 = bit(word, 23);
    let l = bit(word, 22);
    let o1 = bit(word, 21);
    let rs = bits(word, 16, 20) as u8;
    let o0 = bit(word, 15);
    let rt2 = bits(word, 10, 14) as u8;
    let rn = bits(word, 5, 9) as u8;
    let rt = bits(word, 0, 4) as u8;

    out.rd = rt;
    out.rt2 = rt2;
    out.rn = rn;
    out.rn_class = rn_base_class(rn);
    out.is_acquire = o0 != 0;
    out.is_release = o1 != 0;

    out.kind = if o2 == 0 {
        out.rm = rs;
        out.rm_class = RegClass::GpW;
        if o1 == 0 {
            if l == 1 {
                if o0 != 0 { InstKind::Ldaxr } else { InstKind::Ldxr }
            } else if o0 != 0 {
                InstKind::Stlxr
            } else {
                InstKind::Stxr
            }
        } else if l == 1 {
            if o0 != 0 { InstKind::Ldaxp } else { InstKind::Ldxp }
        } else if o0 != 0 {
            InstKind::Stlxp
        } else {
            InstKind::Stxp
        }
    } else if o1 != 0 {
        // o2=1, o1=1 is the compare-and-swap sub-space, handled by `decode_cas`.
        return false;
    } else if l == 1 {
        if o0 != 0 { InstKind::Ldar } else { InstKind::Ldlar }
    } else if o0 != 0 {
        InstKind::Stlr
    } else {
        InstKind::Stllr
    };

    out.mnemonic = match (out.kind, size) {
        (InstKind::Ldxr, 0) => "ldxrb",
        (InstKind::Ldxr, 1) => "ldxrh",
        (InstKind::Ldxr, _) => "ldxr",
        (InstKind::Ldaxr, 0) => "ldaxrb",
        (InstKind::Ldaxr, 1) => "ldaxrh",
        (InstKind::Ldaxr, _) => "ldaxr",
        (InstKind::Stxr, 0) => "stxrb",
        (InstKind::Stxr, 1) => "stxrh",
        (InstKind::Stxr, _) => "stxr",
        (InstKind::Stlxr, 0) => "stlxrb",
        (InstKind::Stlxr, 1) => "stlxrh",
        (InstKind::Stlxr, _) => "stlxr",
        (InstKind::Ldxp, _) => "ldxp",
        (InstKind::Ldaxp, _) => "ldaxp",
        (InstKind::Stxp, _) => "stxp",
        (InstKind::Stlxp, _) => "stlxp",
        (InstKind::Ldar, 0) => "ldarb",
        (InstKind::Ldar, 1) => "ldarh",
        (InstKind::Ldar, _) => "ldar",
        (InstKind::Stlr, 0) => "stlrb",
        (InstKind::Stlr, 1) => "stlrh",
        (InstKind::Stlr, _) => "stlr",
        (InstKind::Ldlar, 0) => "ldlarb",
        (InstKind::Ldlar, 1) => "ldlarh",
        (InstKind::Ldlar, _) => "ldlar",
        (InstKind::Stllr, 0) => "stllrb",
        (InstKind::Stllr, 1) => "stllrh",
        (InstKind::Stllr, _) => "stllr",
        _ => "unknown",
    };

    out.is_64bit = size == 3;
    out.rd_class = if size <= 1 { RegClass::GpW } else { RegClass::gpr(size == 3) };
    true
}

fn decode_cas(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let size = bits(word, 30, 31);
    let o1 = bit(word, 22);
    let rs = bits(word, 16, 20) as u8;
    let o0 = bit(word, 15);
    let rn = bits(word, 5, 9) as u8;
    let rt = bits(word, 0, 4) as u8;

    out.is_acquire = o0 != 0;
    out.is_release = o1 != 0;
    out.rd = rt;
    out.rm = rs;
    out.rn = rn;
    out.rn_class = rn_base_class(rn);
    out.kind = InstKind::Cas;
    out.mnemonic = compose_al_bh!("cas", out.is_acquire, out.is_release, size);
    out.is_64bit = size == 3;
    out.rd_class = if size <= 1 { RegClass::GpW } else { RegClass::gpr(size == 3) };
    out.rm_class = out.rd_class;
    true
}

fn decode_atomic_rmw(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let size = bits(word, 30, 31);
    let v = bit(word, 26);
    if v != 0 {
        return false;
    }
    let a = bit(word, 23);
    let r = bit(word, 22);
    let rs = bits(word, 16, 20) as u8;
    let o3 = bit(word, 15);
    let opc = bits(word, 12, 14);
    let rn = bits(word, 5, 9) as u8;
    let rt = bits(word, 0, 4) as u8;

    out.is_acquire = a != 0;
    out.is_release = r != 0;
    out.rm = rs;
    out.rn = rn;
    out.rd = rt;
    out.rn_class = rn_base_class(rn);
    out.is_64bit = size == 3;
    out.rd_class = if size <= 1 { RegClass::GpW } else { RegClass::gpr(size == 3) };
    out.rm_class = out.rd_class;

    if o3 != 0 {
        out.kind = InstKind::Swp;
        out.mnemonic = compose_al_bh!("swp", a != 0, r != 0, size);
        return true;
    }

    out.kind = match opc {
        0 => InstKind::Ldadd,
        1 => InstKind::Ldclr,
        2 => InstKind::Ldeor,
        3 => InstKind::Ldset,
        4 => InstKind::Ldsmax,
        5 => InstKind::Ldsmin,
        6 => InstKind::Ldumax,
        7 => InstKind::Ldumin,
        _ => return false,
    };
    out.mnemonic = match opc {
        0 => compose_al_bh!("ldadd", a != 0, r != 0, size),
        1 => compose_al_bh!("ldclr", a != 0, r != 0, size),
        2 => compose_al_bh!("ldeor", a != 0, r != 0, size),
        3 => compose_al_bh!("ldset", a != 0, r != 0, size),
        4 => compose_al_bh!("ldsmax", a != 0, r != 0, size),
        5 => compose_al_bh!("ldsmin", a != 0, r != 0, size),
        6 => compose_al_bh!("ldumax", a != 0, r != 0, size),
        _ => compose_al_bh!("ldumin", a != 0, r != 0, size),
    };
    true
}

fn decode_ldp_stp(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let opc = bits(word, 30, 31);
    let v = bit(word, 26);
    let idx = bits(word, 23, 25);
    let l = bit(word, 22);
    let imm7 = bits(word, 15, 21);
    let rt2 = bits(word, 10, 14) as u8;
    let rn = bits(word, 5, 9) as u8;
    let rt = bits(word, 0, 4) as u8;
    if idx == 0 || idx > 3 {
        return false;
    }

    out.addr_mode = match idx {
        1 => AddrMode::PostIndex,
        2 => AddrMode::ImmSigned,
        _ => AddrMode::PreIndex,
    };
    out.rd = rt;
    out.rt2 = rt2;
    out.rn = rn;
    out.rn_class = rn_base_class(rn);
    out.kind = if l == 1 { InstKind::Ldp } else { InstKind::Stp };
    out.mnemonic = if l == 1 { "ldp" } else { "stp" };

    let scale = if v == 0 {
        if opc == 1 {
            if l == 0 {
                return false;
            }
            out.mnemonic = "ldpsw";
            out.is_64bit = true;
            out.rd_class = RegClass::GpX;
            out.rt2 = rt2;
            2
        } else {
            out.is_64bit = opc == 2;
            out.rd_class = RegClass::gpr(opc == 2);
            if opc == 2 {
                3
            } else {
                2
            }
        }
    } else {
        if opc > 2 {
            return false;
        }
        out.rd_class = match opc {
            0 => RegClass::VS,
            1 => RegClass::VD,
            _ => RegClass::VQ,
        };
        (opc + 2) as u32
    };

    out.imm = sign_extend(imm7, 7) << scale;
    out.has_imm = true;
    true
}

fn decode_load_literal(word: u32, address: u64, out: &mut Instruction) -> bool {
    let opc = bits(word, 30, 31);
    let v = bit(word, 26);
    let imm19 = bits(word, 5, 23);
    let rt = bits(word, 0, 4) as u8;
    let _ = address;

    out.rd = rt;
    out.imm = sign_extend(imm19, 19) << 2;
    out.has_imm = true;
    out.addr_mode = AddrMode::Literal;

    if v == 0 {
        match opc {
            0 => {
                out.kind = InstKind::Ldr;
                out.mnemonic = "ldr";
                out.rd_class = RegClass::GpW;
            }
            1 => {
                out.kind = InstKind::Ldr;
                out.mnemonic = "ldr";
                out.rd_class = RegClass::GpX;
                out.is_64bit = true;
            }
            2 => {
                out.kind = InstKind::Ldrsw;
                out.mnemonic = "ldrsw";
                out.rd_class = RegClass::GpX;
                out.is_64bit = true;
            }
            _ => return false,
        }
    } else {
        if opc > 2 {
            return false;
        }
        out.kind = InstKind::Ldr;
        out.mnemonic = "ldr";
        out.rd_class = match opc {
            0 => RegClass::VS,
            1 => RegClass::VD,
            _ => RegClass::VQ,
        };
    }
    true
}

fn decode_unsigned_imm(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let size = bits(word, 30, 31);
    let v = bit(word, 26);
    let opc = bits(word, 22, 23);
    let imm12 = bits(word, 10, 21);
    let rn = bits(word, 5, 9) as u8;
    let rt = bits(word, 0, 4) as u8;

    out.rd = rt;
    out.rn = rn;
    out.rn_class = rn_base_class(rn);
    out.addr_mode = AddrMode::ImmUnsigned;
    out.imm = (imm12 << size) as i64;
    out.has_imm = true;

    if v == 0 {
        let size_opc = (size << 2) | opc;
        let Some((kind, class, is64)) = gpr_ldst_identity(size_opc) else {
            return false;
        };
        out.kind = kind;
        out.mnemonic = gpr_ldst_mnemonic_scaled(size_opc);
        out.rd_class = class;
        out.is_64bit = is64;
    } else {
        if opc > 1 {
            return false;
        }
        let (kind, class) = simd_ldst_identity(size, opc == 0);
        out.kind = kind;
        out.mnemonic = if opc == 0 { "str" } else { "ldr" };
        out.rd_class = class;
    }
    true
}

fn decode_register_offset(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let size = bits(word, 30, 31);
    let v = bit(word, 26);
    let opc = bits(word, 22, 23);
    let rm = bits(word, 16, 20) as u8;
    let option = bits(word, 13, 15);
    let s = bit(word, 12);
    let rn = bits(word, 5, 9) as u8;
    let rt = bits(word, 0, 4) as u8;

    let extend = crate::model::ExtendKind::from_option(option);
    out.rd = rt;
    out.rn = rn;
    out.rm = rm;
    out.rn_class = rn_base_class(rn);
    out.extend = extend;
    out.addr_mode = if option == 3 { AddrMode::RegOffset } else { AddrMode::RegExtend };
    out.shift_amount = if s != 0 { size as u8 } else { 0 };
    out.rm_class = if extend.is_64bit_index() { RegClass::GpX } else { RegClass::GpW };

    if v == 0 {
        let size_opc = (size << 2) | opc;
        let Some((kind, class, is64)) = gpr_ldst_identity(size_opc) else {
            return false;
        };
        out.kind = kind;
        out.mnemonic = gpr_ldst_mnemonic_scaled(size_opc);
        out.rd_class = class;
        out.is_64bit = is64;
    } else {
        if opc > 1 {
            return false;
        }
        let (kind, class) = simd_ldst_identity(size, opc == 0);
        out.kind = kind;
        out.mnemonic = if opc == 0 { "str" } else { "ldr" };
        out.rd_class = class;
    }
    true
}

fn decode_unscaled_or_indexed(word: u32, _address: u64, out: &mut Instruction) -> bool {
    let size = bits(word, 30, 31);
    let v = bit(word, 26);
    let opc = bits(word, 22, 23);
    let imm9 = bits(word, 12, 20);
    let idx = bits(word, 10, 11);
    let rn = bits(word, 5, 9) as u8;
    let rt = bits(word, 0, 4) as u8;
    if idx == 2 {
        return false;
    }

    out.rd = rt;
    out.rn = rn;
    out.rn_class = rn_base_class(rn);
    out.imm = sign_extend(imm9, 9);
    out.has_imm = true;
    out.addr_mode = match idx {
        0 => AddrMode::ImmSigned,
        1 => AddrMode::PostIndex,
        _ => AddrMode::PreIndex,
    };

    if v == 0 {
        let size_opc = (size << 2) | opc;
        let Some((kind, class, is64)) = gpr_ldst_identity(size_opc) else {
            return false;
        };
        out.kind = kind;
        out.mnemonic = if idx == 0 {
            gpr_ldst_mnemonic_unscaled(size_opc)
        } else {
            gpr_ldst_mnemonic_scaled(size_opc)
        };
        out.rd_class = class;
        out.is_64bit = is64;
    } else {
        if opc > 1 {
            return false;
        }
        let (kind, class) = simd_ldst_identity(size, opc == 0);
        out.kind = kind;
        out.mnemonic = if opc == 0 { "str" } else { "ldr" };
        out.rd_class = class;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unsigned_offset_ldr() {
        let mut inst = Instruction::default();
        assert!(TABLE.decode(0xF940_0421, 0x1000, &mut inst));
        assert_eq!(inst.kind, InstKind::Ldr);
        assert_eq!(inst.rd, 1);
        assert_eq!(inst.rn, 1);
        assert_eq!(inst.rn_class, RegClass::GpX);
        assert_eq!(inst.rd_class, RegClass::GpX);
        assert_eq!(inst.imm, 8);
        assert_eq!(inst.addr_mode, AddrMode::ImmUnsigned);
    }

    #[test]
    fn decodes_stp_pre_index() {
        let mut inst = Instruction::default();
        assert!(TABLE.decode(0xA9BF_7BFD, 0x1000, &mut inst));
        assert_eq!(inst.kind, InstKind::Stp);
        assert_eq!(inst.rd, 29);
        assert_eq!(inst.rt2, 30);
        assert_eq!(inst.rn, 31);
        assert_eq!(inst.rn_class, RegClass::Sp);
        assert_eq!(inst.imm, -16);
        assert_eq!(inst.addr_mode, AddrMode::PreIndex);
        assert_eq!(inst.rd_class, RegClass::GpX);
    }

    #[test]
    fn decodes_cas() {
        let mut inst = Instruction::default();
        assert!(TABLE.decode(0xC8A0_7C20, 0x4000, &mut inst));
        assert_eq!(inst.kind, InstKind::Cas);
        assert_eq!(inst.rd, 0);
        assert_eq!(inst.rm, 0);
        assert_eq!(inst.rn, 1);
        assert_eq!(inst.rd_class, RegClass::GpX);
    }

    #[test]
    fn ldp_stp_rejects_reserved_idx_zero() {
        let mut inst = Instruction::default();
        // idx=0 is reserved for this family.
        let word = 0x2900_0000u32;
        assert!(!TABLE.decode(word, 0, &mut inst));
    }
}
