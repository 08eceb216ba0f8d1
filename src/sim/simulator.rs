//! Wires a loaded program into a [`Cpu`] and drives the cycle loop to
//! completion.

use tracing::info;

use crate::common::error::{HaltReason, SimFault};
use crate::common::constants::{DEFAULT_DMEM_BYTES, DEFAULT_IMEM_WORDS};
use crate::config::SimConfig;
use crate::core::{Cpu, TickOutcome};
use crate::memory::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

use super::loader;

/// Owns the CPU for one run and applies the cycle-count ceiling the
/// pipeline itself doesn't know about.
pub struct Simulator {
    cpu: Cpu,
    max_cycles: u64,
}

impl Simulator {
    /// Builds a simulator from a configuration: loads both images and
    /// constructs a fresh `Cpu` around them.
    pub fn from_config(cfg: &SimConfig) -> Result<Self, SimFault> {
        let program = loader::load_image(&cfg.instruction_image_path)?;
        let data = loader::load_image(&cfg.data_image_path)?;

        let mut imem = InstructionMemory::new();
        imem.load(&program)?;
        let mut dmem = DataMemory::new();
        dmem.load(&data)?;

        info!(
            instruction_words = program.len(),
            imem_capacity = DEFAULT_IMEM_WORDS,
            data_words = data.len(),
            dmem_capacity = DEFAULT_DMEM_BYTES,
            "images loaded"
        );

        Ok(Self {
            cpu: Cpu::new(imem, dmem),
            max_cycles: cfg.max_cycles,
        })
    }

    /// Runs the cycle loop until the pipeline halts itself or the
    /// configured cycle ceiling is reached.
    pub fn run(&mut self) -> HaltReason {
        loop {
            match self.cpu.tick() {
                TickOutcome::Halt(reason) => return reason,
                TickOutcome::Continue => {}
            }
            if self.cpu.stats().cycles >= self.max_cycles {
                return HaltReason::CycleThreshold;
            }
        }
    }

    /// The CPU this simulator is driving, for register/stat inspection
    /// after [`Self::run`] returns.
    #[must_use]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Accumulated statistics for the run so far.
    #[must_use]
    pub fn stats(&self) -> &SimStats {
        self.cpu.stats()
    }
}
