//! Top-level instruction dispatch.
//!
//! A raw word is routed to one of five category tables by its high-order opcode bits. Because the
//! routing table below is necessarily approximate (several categories share opcode bits), a row
//! whose decoder rejects falls through to a fixed retry chain that tries every category in turn —
//! matching the architecture's own description of the primary decode groups, not a strict
//! partition of the encoding space.

pub mod branch;
pub mod dp_imm;
pub mod dp_reg;
pub mod fp_simd;
pub mod load_store;

use crate::decode_table::{Row, Table};
use crate::model::{Instruction, InstKind};

fn dispatch_dp_imm(word: u32, address: u64, out: &mut Instruction) -> bool {
    dp_imm::TABLE.decode(word, address, out)
}

fn dispatch_branch(word: u32, address: u64, out: &mut Instruction) -> bool {
    branch::TABLE.decode(word, address, out)
}

fn dispatch_load_store(word: u32, address: u64, out: &mut Instruction) -> bool {
    load_store::TABLE.decode(word, address, out)
}

fn dispatch_dp_reg(word: u32, address: u64, out: &mut Instruction) -> bool {
    dp_reg::TABLE.decode(word, address, out)
}

fn dispatch_fp_simd(word: u32, address: u64, out: &mut Instruction) -> bool {
    fp_simd::TABLE.decode(word, address, out)
}

static TOP_LEVEL: &[Row] = &[
    Row { mask: 0x1C00_0000, value: 0x1000_0000, decoder: dispatch_dp_imm },
    Row { mask: 0x1C00_0000, value: 0x1400_0000, decoder: dispatch_branch },
    Row { mask: 0x0A00_0000, value: 0x0800_0000, decoder: dispatch_load_store },
    Row { mask: 0x1C00_0000, value: 0x1800_0000, decoder: dispatch_load_store },
    Row { mask: 0x0E00_0000, value: 0x0A00_0000, decoder: dispatch_dp_reg },
];

/// Retry order when the top-level table doesn't land a word on the right category outright.
const FALLBACK_CHAIN: &[fn(u32, u64, &mut Instruction) -> bool] =
    &[dispatch_branch, dispatch_dp_imm, dispatch_dp_reg, dispatch_load_store, dispatch_fp_simd];

/// Decodes `word` at `address` into `out`. Returns whether a concrete instruction was recognized;
/// `out` is always left fully initialized (blank/`Unknown` on failure).
pub fn decode_into(word: u32, address: u64, out: &mut Instruction) -> bool {
    *out = Instruction {
        raw: word,
        address,
        mnemonic: "unknown",
        ..Instruction::default()
    };

    let top_level = Table(TOP_LEVEL);
    if top_level.decode(word, address, out) && out.kind != InstKind::Unknown {
        return true;
    }

    for dispatch in FALLBACK_CHAIN {
        if dispatch(word, address, out) && out.kind != InstKind::Unknown {
            return true;
        }
    }

    false
}

/// Decodes `word` at `address`, returning the populated record on success.
#[must_use]
pub fn decode(word: u32, address: u64) -> Option<Instruction> {
    let mut inst = Instruction::default();
    decode_into(word, address, &mut inst).then_some(inst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_word_reports_failure_and_unknown_kind() {
        let mut inst = Instruction::default();
        assert!(!decode_into(0x0000_0000, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Unknown);
        assert_eq!(inst.mnemonic, "unknown");
    }

    #[test]
    fn decode_is_pure() {
        let a = decode(0x9400_0010, 0x1000);
        let b = decode(0x9400_0010, 0x1000);
        assert_eq!(a, b);
    }
}
