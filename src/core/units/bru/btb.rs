//! Branch Target Buffer (BTB).
//!
//! Direct-mapped, untagged: 64 entries indexed purely by `pc[7:2]`.
//! Aliasing between branches that share an index is expected and is not
//! corrected (there is no tag field to detect it).

use crate::common::constants::BTB_SIZE;

/// One entry: a cached target address and its validity bit.
#[derive(Clone, Copy, Default)]
struct BtbEntry {
    target: u32,
    valid: bool,
}

/// Branch Target Buffer, 64 entries, indexed by `pc[7:2]`.
#[derive(Debug, Clone)]
pub struct Btb {
    table: Vec<BtbEntry>,
}

impl Btb {
    /// Creates an all-invalid BTB of [`BTB_SIZE`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: vec![BtbEntry::default(); BTB_SIZE],
        }
    }

    /// Index into the table for a given PC: `pc[7:2]`.
    #[must_use]
    pub fn index(pc: u32) -> usize {
        ((pc >> 2) as usize) & (BTB_SIZE - 1)
    }

    /// Looks up the cached target for `idx`. Returns `None` if the entry
    /// is not valid.
    #[must_use]
    pub fn lookup(&self, idx: usize) -> Option<u32> {
        let e = self.table[idx];
        e.valid.then_some(e.target)
    }

    /// Whether the entry at `idx` is valid, regardless of target.
    #[must_use]
    pub fn is_valid(&self, idx: usize) -> bool {
        self.table[idx].valid
    }

    /// Records `target` as the resolved target for the branch at `idx`.
    pub fn update(&mut self, idx: usize, target: u32) {
        self.table[idx] = BtbEntry {
            target,
            valid: true,
        };
    }
}

impl Default for Btb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_entries_report_invalid() {
        let btb = Btb::new();
        assert_eq!(btb.lookup(Btb::index(0)), None);
    }

    #[test]
    fn update_then_lookup_returns_target() {
        let mut btb = Btb::new();
        let idx = Btb::index(0x40);
        btb.update(idx, 0x1000);
        assert_eq!(btb.lookup(idx), Some(0x1000));
    }

    #[test]
    fn index_is_derived_from_pc_bits_7_through_2() {
        assert_eq!(Btb::index(0x0), Btb::index(0x100));
    }
}
