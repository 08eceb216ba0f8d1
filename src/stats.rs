//! Run-time statistics accumulated over the cycle loop.

use std::fmt;

/// Counters accumulated over a simulation run.
///
/// Printed at halt (see [`Self::report`]) and exposed to callers that want
/// to assert on pipeline behavior (e.g. "at most two mispredictions").
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Total cycles executed.
    pub cycles: u64,
    /// Instructions that reached writeback.
    pub instructions_retired: u64,
    /// Conditional branches resolved in EX.
    pub branch_predictions: u64,
    /// Conditional branches whose resolved outcome disagreed with the
    /// fetch-time prediction.
    pub branch_mispredictions: u64,
    /// Cycles stalled because the instruction behind a load needed its
    /// result.
    pub stalls_load_use: u64,
    /// Cycles stalled because the multiplier was still busy.
    pub stalls_mul_busy: u64,
    /// Cycles stalled because the divider was still busy.
    pub stalls_div_busy: u64,
    /// Retired ALU (register-register and register-immediate) ops.
    pub inst_alu: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired `JAL`/`JALR` instructions.
    pub inst_jump: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired multiplies.
    pub inst_mul: u64,
    /// Retired divides/remainders.
    pub inst_div: u64,
}

impl SimStats {
    /// Creates a zeroed counter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of predicted conditional branches that mispredicted, or
    /// `0.0` if none were predicted.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn misprediction_rate(&self) -> f64 {
        if self.branch_predictions == 0 {
            0.0
        } else {
            self.branch_mispredictions as f64 / self.branch_predictions as f64
        }
    }

    /// Instructions retired per cycle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cycles:              {}", self.cycles)?;
        writeln!(f, "instructions retired: {}", self.instructions_retired)?;
        writeln!(f, "IPC:                 {:.3}", self.ipc())?;
        writeln!(
            f,
            "branch mispredictions: {} / {} ({:.1}%)",
            self.branch_mispredictions,
            self.branch_predictions,
            self.misprediction_rate() * 100.0
        )?;
        writeln!(f, "stalls (load-use):   {}", self.stalls_load_use)?;
        writeln!(f, "stalls (mul busy):   {}", self.stalls_mul_busy)?;
        write!(f, "stalls (div busy):   {}", self.stalls_div_busy)
    }
}
