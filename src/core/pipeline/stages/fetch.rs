//! IF: reads the next instruction word and consults the branch predictor.

use crate::core::pipeline::latches::IfIdLatch;
use crate::core::units::BranchPredictor;
use crate::memory::InstructionMemory;

/// Fetches the instruction at `pc` and predicts its outcome.
///
/// The prediction is taken unconditionally here — whether `pc` actually
/// holds a branch is not yet known; decode will clear `is_branch`-derived
/// signals for anything else, and a stale prediction for a non-branch
/// simply never disagrees with `pc + 4` at verify time.
#[must_use]
pub fn fetch_stage(pc: u32, imem: &InstructionMemory, predictor: &BranchPredictor) -> IfIdLatch {
    IfIdLatch {
        valid: true,
        pc,
        instruction: imem.read(pc),
        prediction: predictor.predict(pc),
    }
}
