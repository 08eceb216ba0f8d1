//! EX: ALU/branch/jump resolution, operand forwarding, and the multi-cycle
//! multiply/divide units.

use crate::core::pipeline::hazards::forward_operand;
use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, MemWbLatch};
use crate::core::units::alu;
use crate::core::units::{Divider, Multiplier};

/// Outcome of attempting to run one instruction through EX this cycle.
pub enum ExOutcome {
    /// EX produced a result; it advances into EX/MEM this cycle.
    Done(ExMemLatch),
    /// A multiply or divide is still counting down; the instruction holds
    /// in ID/EX and EX/MEM receives a bubble this cycle.
    Busy,
}

/// Runs the EX stage for the instruction currently latched in ID/EX.
///
/// `ex_mem`/`mem_wb` are the *previous* cycle's latches, consulted for
/// forwarding. A multiply or divide is issued into its unit the first
/// cycle it's seen here and re-polled on every subsequent cycle until it
/// completes; everything else resolves in a single cycle.
pub fn execute_stage(
    id_ex: &IdExLatch,
    ex_mem: &ExMemLatch,
    mem_wb: &MemWbLatch,
    multiplier: &mut Multiplier,
    divider: &mut Divider,
) -> ExOutcome {
    if !id_ex.valid {
        return ExOutcome::Done(ExMemLatch::default());
    }

    let rs1 = forward_operand(id_ex.rs1_idx, id_ex.rs1_value, ex_mem, mem_wb);
    let rs2 = forward_operand(id_ex.rs2_idx, id_ex.rs2_value, ex_mem, mem_wb);

    if let Some(op) = id_ex.control.mul_op {
        if !multiplier.is_busy() {
            multiplier.issue(op, rs1, rs2, id_ex.decoded.rd);
        }
        return match multiplier.tick() {
            Some((rd, result)) => ExOutcome::Done(alu_result_latch(id_ex, rd, result)),
            None => ExOutcome::Busy,
        };
    }
    if let Some(op) = id_ex.control.div_op {
        if !divider.is_busy() {
            divider.issue(op, rs1, rs2, id_ex.decoded.rd);
        }
        return match divider.tick() {
            Some((rd, result)) => ExOutcome::Done(alu_result_latch(id_ex, rd, result)),
            None => ExOutcome::Busy,
        };
    }

    let pc = id_ex.pc;
    let imm = id_ex.decoded.imm as u32;

    if let Some(op) = id_ex.control.branch_op.filter(|_| id_ex.control.is_branch) {
        let taken = op.evaluate(rs1, rs2);
        let resolved_target = if taken { pc.wrapping_add(imm) } else { pc.wrapping_add(4) };
        return ExOutcome::Done(ExMemLatch {
            valid: true,
            pc,
            control: id_ex.control,
            rd: id_ex.decoded.rd,
            alu_result: 0,
            store_data: 0,
            branch_taken: taken,
            resolved_target,
        });
    }

    if id_ex.control.is_jump {
        return ExOutcome::Done(ExMemLatch {
            valid: true,
            pc,
            control: id_ex.control,
            rd: id_ex.decoded.rd,
            alu_result: pc.wrapping_add(4),
            store_data: 0,
            branch_taken: true,
            resolved_target: pc.wrapping_add(imm),
        });
    }

    if id_ex.control.is_jalr {
        let target = rs1.wrapping_add(imm) & !1u32;
        return ExOutcome::Done(ExMemLatch {
            valid: true,
            pc,
            control: id_ex.control,
            rd: id_ex.decoded.rd,
            alu_result: pc.wrapping_add(4),
            store_data: 0,
            branch_taken: true,
            resolved_target: target,
        });
    }

    let alu_result = if id_ex.control.is_lui {
        imm
    } else if id_ex.control.is_auipc {
        pc.wrapping_add(imm)
    } else {
        let b = if id_ex.control.alu_src_imm { imm } else { rs2 };
        alu::execute(id_ex.control.alu_op, rs1, b)
    };

    ExOutcome::Done(ExMemLatch {
        valid: true,
        pc,
        control: id_ex.control,
        rd: id_ex.decoded.rd,
        alu_result,
        store_data: rs2,
        branch_taken: false,
        resolved_target: pc.wrapping_add(4),
    })
}

fn alu_result_latch(id_ex: &IdExLatch, rd: usize, result: u32) -> ExMemLatch {
    ExMemLatch {
        valid: true,
        pc: id_ex.pc,
        control: id_ex.control,
        rd,
        alu_result: result,
        store_data: 0,
        branch_taken: false,
        resolved_target: id_ex.pc.wrapping_add(4),
    }
}
