//! Hazard detection and operand forwarding.
//!
//! Forwarding is two levels deep — EX/MEM has priority over MEM/WB,
//! which has priority over the raw value latched in ID/EX — there is no
//! third forwarding source because nothing further back can still hold
//! a not-yet-committed value.

use super::latches::{ExMemLatch, IdExLatch, MemWbLatch};

/// What the pipeline should do this cycle, in descending priority: a
/// resolved mispredict always wins over a stall, which always wins over
/// a plain advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineAction {
    /// Every latch advances normally.
    Advance,
    /// Fetch and decode hold their instruction; a bubble is injected into
    /// ID/EX.
    Stall,
    /// IF/ID and ID/EX are flushed (turned into bubbles) and fetch resumes
    /// from the corrected PC.
    Flush,
}

impl PipelineAction {
    /// Combines two cycle-level decisions, preferring the
    /// higher-priority one.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Flush, _) | (_, Self::Flush) => Self::Flush,
            (Self::Stall, _) | (_, Self::Stall) => Self::Stall,
            _ => Self::Advance,
        }
    }
}

/// Forwards an operand value, preferring EX/MEM over MEM/WB over the
/// value ID latched from the register file.
///
/// Loads never forward out of EX/MEM: the loaded word isn't available
/// until MEM completes, so a true load-use dependency must instead be
/// caught by [`load_use_stall`].
#[must_use]
pub fn forward_operand(
    reg_idx: usize,
    raw_value: u32,
    ex_mem: &ExMemLatch,
    mem_wb: &MemWbLatch,
) -> u32 {
    if reg_idx == 0 {
        return raw_value;
    }
    if ex_mem.valid && ex_mem.control.reg_write && !ex_mem.control.is_load && ex_mem.rd == reg_idx
    {
        return ex_mem.alu_result;
    }
    if mem_wb.valid && mem_wb.control.reg_write && mem_wb.rd == reg_idx {
        return if mem_wb.control.mem_to_reg {
            mem_wb.mem_data
        } else {
            mem_wb.alu_result
        };
    }
    raw_value
}

/// True when the instruction in ID/EX is a load whose destination the
/// instruction currently in ID needs — the one hazard forwarding cannot
/// cover, since MEM hasn't produced the loaded word yet.
#[must_use]
pub fn load_use_stall(
    id_ex: &IdExLatch,
    needs_rs1: bool,
    rs1: usize,
    needs_rs2: bool,
    rs2: usize,
) -> bool {
    if !id_ex.valid || !id_ex.control.is_load {
        return false;
    }
    let rd = id_ex.decoded.rd;
    if rd == 0 {
        return false;
    }
    (needs_rs1 && rs1 == rd) || (needs_rs2 && rs2 == rd)
}
