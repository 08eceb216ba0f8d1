//! WB: commits the MEM/WB latch's result to the register file.

use crate::common::reg::RegFile;
use crate::core::pipeline::latches::MemWbLatch;

/// Commits the instruction in MEM/WB, if any, to its destination
/// register.
pub fn writeback_stage(mem_wb: &MemWbLatch, regs: &mut RegFile) {
    if !mem_wb.valid || !mem_wb.control.reg_write {
        return;
    }
    let value = if mem_wb.control.mem_to_reg {
        mem_wb.mem_data
    } else {
        mem_wb.alu_result
    };
    regs.write(mem_wb.rd, value);
}
