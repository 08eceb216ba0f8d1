//! Pipeline control signals synthesized by decode and consumed by the
//! downstream stages.

use crate::core::units::alu::AluOp;
use crate::core::units::{DivOp, MulOp};
use crate::memory::AccessWidth;

/// Which condition a conditional branch tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchOp {
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Branch if less than (unsigned).
    Bltu,
    /// Branch if greater or equal (unsigned).
    Bgeu,
}

impl BranchOp {
    /// Evaluates the branch condition against the (already-forwarded)
    /// operand values.
    #[must_use]
    pub fn evaluate(self, rs1: u32, rs2: u32) -> bool {
        match self {
            Self::Beq => rs1 == rs2,
            Self::Bne => rs1 != rs2,
            Self::Blt => (rs1 as i32) < (rs2 as i32),
            Self::Bge => (rs1 as i32) >= (rs2 as i32),
            Self::Bltu => rs1 < rs2,
            Self::Bgeu => rs1 >= rs2,
        }
    }
}

/// Control signals produced by decode, carried through ID/EX, EX/MEM, and
/// (the subset writeback needs) MEM/WB.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Commit the result to `rd` in writeback.
    pub reg_write: bool,
    /// Issue a data-memory read in MEM.
    pub mem_read: bool,
    /// Issue a data-memory write in MEM.
    pub mem_write: bool,
    /// Writeback selects memory data instead of the ALU result.
    pub mem_to_reg: bool,
    /// ALU operation to perform in EX.
    pub alu_op: AluOp,
    /// ALU operand B is the immediate rather than `rs2`.
    pub alu_src_imm: bool,
    /// Instruction is a conditional branch.
    pub is_branch: bool,
    /// Instruction is `JAL`.
    pub is_jump: bool,
    /// Instruction is `JALR`.
    pub is_jalr: bool,
    /// Instruction is `LUI`.
    pub is_lui: bool,
    /// Instruction is `AUIPC`.
    pub is_auipc: bool,
    /// Instruction is a load.
    pub is_load: bool,
    /// Instruction is a store.
    pub is_store: bool,
    /// Instruction reads `rs1`.
    pub needs_rs1: bool,
    /// Instruction reads `rs2`.
    pub needs_rs2: bool,
    /// Access width for a load or store; `None` for non-memory ops.
    pub access_width: Option<AccessWidth>,
    /// Whether a load sign-extends its result (`lb`/`lh` vs `lbu`/`lhu`).
    pub signed_load: bool,
    /// Branch condition, for `is_branch` instructions.
    pub branch_op: Option<BranchOp>,
    /// Multiply variant, for RV32M multiply instructions.
    pub mul_op: Option<MulOp>,
    /// Divide variant, for RV32M divide instructions.
    pub div_op: Option<DivOp>,
}
