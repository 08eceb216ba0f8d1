//! A cycle-accurate five-stage (IF/ID/EX/MEM/WB) RV32IM pipeline
//! simulator.
//!
//! Models in-order single-issue execution with full EX/MEM and MEM/WB
//! operand forwarding, a load-use stall, a 64-entry BTB/BHT dynamic
//! branch predictor, and multi-cycle multiply (3 cycles) and divide (18
//! cycles) functional units with RISC-V divide-by-zero and signed-overflow
//! semantics.
//!
//! [`sim::Simulator`] is the entry point: it loads an instruction image
//! and a data image, builds a [`core::Cpu`], and drives the cycle loop to
//! a [`common::error::HaltReason`].

pub mod common;
pub mod config;
pub mod core;
pub mod isa;
pub mod memory;
pub mod sim;
pub mod stats;

pub use common::error::{HaltReason, SimFault};
pub use config::SimConfig;
pub use core::Cpu;
pub use sim::Simulator;
pub use stats::SimStats;
