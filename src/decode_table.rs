//! The table-driven dispatch engine shared by the top-level decoder and every category decoder.
//!
//! A table is an ordered list of rows. A row matches a word when `(word & mask) == value`; on
//! match its decoder function runs. If that decoder rejects (returns `false`, because some finer
//! field constraint didn't hold beyond what the mask/value pair alone can express), the engine
//! keeps scanning later rows instead of giving up — this is what lets a broad row cover an
//! encoding group that a later, more specific row then refines.

use crate::model::Instruction;

/// A decoder function for one table row: populates `out` from `word`/`address` and reports
/// whether the encoding it targets actually matched.
pub type RowDecoder = fn(word: u32, address: u64, out: &mut Instruction) -> bool;

/// One `(mask, value, decoder)` entry in a [`Table`].
#[derive(Clone, Copy)]
pub struct Row {
    pub mask: u32,
    pub value: u32,
    pub decoder: RowDecoder,
}

/// An ordered, immutable sequence of rows. Earlier rows win: the engine stops at the first row
/// whose mask/value matches *and* whose decoder accepts.
pub struct Table(pub &'static [Row]);

impl Table {
    /// Walks the rows in order, invoking the decoder of the first mask/value match. Continues
    /// past a matching row whose decoder rejects. Returns whether any row succeeded.
    pub fn decode(&self, word: u32, address: u64, out: &mut Instruction) -> bool {
        for row in self.0 {
            if (word & row.mask) == row.value && (row.decoder)(word, address, out) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InstKind;

    fn always_reject(_: u32, _: u64, _: &mut Instruction) -> bool {
        false
    }

    fn accept_as_nop(_: u32, _: u64, out: &mut Instruction) -> bool {
        out.kind = InstKind::Nop;
        true
    }

    #[test]
    fn first_matching_row_wins() {
        static ROWS: &[Row] = &[
            Row { mask: 0xFF, value: 0x01, decoder: accept_as_nop },
            Row { mask: 0xFF, value: 0x01, decoder: always_reject },
        ];
        let table = Table(ROWS);
        let mut inst = Instruction::default();
        assert!(table.decode(0x01, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Nop);
    }

    #[test]
    fn rejecting_row_falls_through_to_next_row() {
        static ROWS: &[Row] = &[
            Row { mask: 0xFF, value: 0x01, decoder: always_reject },
            Row { mask: 0xFF, value: 0x01, decoder: accept_as_nop },
        ];
        let table = Table(ROWS);
        let mut inst = Instruction::default();
        assert!(table.decode(0x01, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Nop);
    }

    #[test]
    fn no_matching_row_reports_failure() {
        static ROWS: &[Row] = &[Row { mask: 0xFF, value: 0x01, decoder: accept_as_nop }];
        let table = Table(ROWS);
        let mut inst = Instruction::default();
        assert!(!table.decode(0x02, 0, &mut inst));
        assert_eq!(inst.kind, InstKind::Unknown);
    }
}
