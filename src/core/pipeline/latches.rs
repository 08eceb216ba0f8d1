//! Pipeline latches: the four single-entry registers between stages.
//!
//! Each latch carries a `valid` bit. An invalid latch is a bubble: the
//! next stage sees it and does nothing but propagate another bubble
//! forward.

use crate::core::units::bru::PredictionInfo;
use crate::isa::Decoded;

use super::signals::ControlSignals;

/// IF/ID: the freshly fetched instruction word and its fetch-time
/// metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct IfIdLatch {
    pub valid: bool,
    pub pc: u32,
    pub instruction: u32,
    pub prediction: PredictionInfo,
}

/// ID/EX: the decoded instruction, its operand values, and the control
/// signals decode derived for it.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdExLatch {
    pub valid: bool,
    pub pc: u32,
    pub decoded: Decoded,
    pub control: ControlSignals,
    pub rs1_idx: usize,
    pub rs2_idx: usize,
    pub rs1_value: u32,
    pub rs2_value: u32,
    pub prediction: PredictionInfo,
}

/// EX/MEM: the ALU result (or branch/jump resolution) and the value to
/// store, if this is a store.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMemLatch {
    pub valid: bool,
    pub pc: u32,
    pub control: ControlSignals,
    pub rd: usize,
    pub alu_result: u32,
    pub store_data: u32,
    /// Whether the branch/jump actually resolved taken.
    pub branch_taken: bool,
    /// The resolved next-PC, for branches and jumps.
    pub resolved_target: u32,
}

/// MEM/WB: the value writeback will commit to `rd`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWbLatch {
    pub valid: bool,
    pub control: ControlSignals,
    pub rd: usize,
    pub alu_result: u32,
    pub mem_data: u32,
}
