//! Branch prediction unit: a 64-entry BTB paired with a 2-bit-counter BHT.
//!
//! Only conditional branches are predicted; `JAL`/`JALR` are never
//! predicted and always flush once resolved in EX (§4.3).

pub mod bht;
pub mod btb;

use bht::Bht;
use btb::Btb;

/// Snapshot of the predictor's output for one fetched instruction,
/// carried through IF/ID and ID/EX so EX can verify it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictionInfo {
    /// Whether the BTB held a valid entry for this PC.
    pub btb_hit: bool,
    /// Whether the predictor predicted this branch taken.
    pub predict_taken: bool,
    /// The PC fetch will resume from next cycle under this prediction.
    pub predicted_pc: u32,
}

/// The branch predictor: BTB + BHT, read by fetch and trained by execute.
#[derive(Debug, Clone, Default)]
pub struct BranchPredictor {
    btb: Btb,
    bht: Bht,
}

impl BranchPredictor {
    /// Creates a predictor with all entries in their initial
    /// (invalid / strongly-not-taken) state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            btb: Btb::new(),
            bht: Bht::new(),
        }
    }

    /// Predicts the outcome for the branch (or not-yet-known instruction)
    /// at `pc`. A BTB hit whose counter predicts not-taken still falls
    /// through to `pc + 4`, matching the fetch-stage contract.
    #[must_use]
    pub fn predict(&self, pc: u32) -> PredictionInfo {
        let idx = Btb::index(pc);
        let btb_hit = self.btb.is_valid(idx);
        let predict_taken = btb_hit && self.bht.predicts_taken(idx);
        let predicted_pc = if predict_taken {
            self.btb.lookup(idx).unwrap_or(pc.wrapping_add(4))
        } else {
            pc.wrapping_add(4)
        };
        PredictionInfo {
            btb_hit,
            predict_taken,
            predicted_pc,
        }
    }

    /// Trains the predictor after a branch resolves in EX. Writes the
    /// resolved target unconditionally and trains the BHT counter toward
    /// the actual direction.
    pub fn update(&mut self, pc: u32, actual_taken: bool, actual_target: u32) {
        let idx = Btb::index(pc);
        self.btb.update(idx, actual_target);
        self.bht.update(idx, actual_taken);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_pc_predicts_fall_through() {
        let bp = BranchPredictor::new();
        let info = bp.predict(0x40);
        assert!(!info.btb_hit);
        assert!(!info.predict_taken);
        assert_eq!(info.predicted_pc, 0x44);
    }

    #[test]
    fn trained_taken_branch_predicts_its_target() {
        let mut bp = BranchPredictor::new();
        bp.update(0x40, true, 0x20);
        bp.update(0x40, true, 0x20);
        let info = bp.predict(0x40);
        assert!(info.btb_hit);
        assert!(info.predict_taken);
        assert_eq!(info.predicted_pc, 0x20);
    }

    #[test]
    fn single_taken_update_crosses_the_prediction_threshold() {
        let mut bp = BranchPredictor::new();
        bp.update(0x40, true, 0x20);
        let info = bp.predict(0x40);
        assert!(info.btb_hit);
        assert!(info.predict_taken);
        assert_eq!(info.predicted_pc, 0x20);
    }

    #[test]
    fn target_write_is_unconditional_even_when_counter_stays_below_threshold() {
        let mut bp = BranchPredictor::new();
        bp.update(0x40, false, 0x99); // drives the counter to strongly-not-taken
        bp.update(0x40, true, 0x20); // one taken update, still below threshold
        let info = bp.predict(0x40);
        assert!(info.btb_hit, "target write happens unconditionally");
        assert!(!info.predict_taken);
        assert_eq!(info.predicted_pc, 0x20);
    }
}
