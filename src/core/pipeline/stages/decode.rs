//! ID: field/immediate decode, control-signal synthesis, and register read.

use tracing::warn;

use crate::common::reg::RegFile;
use crate::core::pipeline::latches::{IdExLatch, IfIdLatch};
use crate::core::pipeline::signals::{BranchOp, ControlSignals};
use crate::core::units::alu::AluOp;
use crate::core::units::{DivOp, MulOp};
use crate::isa::opcodes::{funct3, funct7, OP_AUIPC, OP_BRANCH, OP_JAL, OP_JALR, OP_LOAD, OP_LUI, OP_REG, OP_STORE, OP_IMM};
use crate::isa::{decode, Decoded};
use crate::memory::AccessWidth;

/// Decodes the fetched instruction and reads its source operands.
///
/// An instruction whose opcode or funct3/funct7 combination isn't one of
/// the ones this core implements decodes to a silent NOP (every control
/// signal false) with a one-line trace warning — it never halts the
/// simulator.
#[must_use]
pub fn decode_stage(if_id: &IfIdLatch, regs: &RegFile) -> IdExLatch {
    if !if_id.valid {
        return IdExLatch::default();
    }
    let decoded = decode(if_id.instruction);
    let control = synthesize_control(&decoded, if_id.pc);
    IdExLatch {
        valid: true,
        pc: if_id.pc,
        decoded,
        rs1_idx: decoded.rs1,
        rs2_idx: decoded.rs2,
        rs1_value: regs.read(decoded.rs1),
        rs2_value: regs.read(decoded.rs2),
        prediction: if_id.prediction,
        control,
    }
}

fn synthesize_control(decoded: &Decoded, pc: u32) -> ControlSignals {
    let mut c = ControlSignals::default();
    match decoded.opcode {
        OP_LOAD => {
            let Some((width, signed)) = load_width(decoded.funct3) else {
                warn!(pc, funct3 = decoded.funct3, "unsupported load funct3, treating as NOP");
                return c;
            };
            c.needs_rs1 = true;
            c.reg_write = true;
            c.mem_read = true;
            c.is_load = true;
            c.mem_to_reg = true;
            c.alu_src_imm = true;
            c.alu_op = AluOp::Add;
            c.access_width = Some(width);
            c.signed_load = signed;
        }
        OP_STORE => {
            let Some(width) = store_width(decoded.funct3) else {
                warn!(pc, funct3 = decoded.funct3, "unsupported store funct3, treating as NOP");
                return c;
            };
            c.needs_rs1 = true;
            c.needs_rs2 = true;
            c.mem_write = true;
            c.is_store = true;
            c.alu_src_imm = true;
            c.alu_op = AluOp::Add;
            c.access_width = Some(width);
        }
        OP_IMM => {
            let Some(op) = imm_alu_op(decoded.funct3, decoded.funct7) else {
                warn!(pc, funct3 = decoded.funct3, "unsupported op-imm funct3, treating as NOP");
                return c;
            };
            c.needs_rs1 = true;
            c.reg_write = true;
            c.alu_src_imm = true;
            c.alu_op = op;
        }
        OP_REG => {
            if decoded.funct7 == funct7::M_EXTENSION {
                c.needs_rs1 = true;
                c.needs_rs2 = true;
                c.reg_write = true;
                match mul_div_op(decoded.funct3) {
                    Some(MulOrDiv::Mul(op)) => c.mul_op = Some(op),
                    Some(MulOrDiv::Div(op)) => c.div_op = Some(op),
                    None => {
                        warn!(pc, funct3 = decoded.funct3, "unsupported M-extension funct3, treating as NOP");
                        return ControlSignals::default();
                    }
                }
            } else {
                let Some(op) = reg_alu_op(decoded.funct3, decoded.funct7) else {
                    warn!(pc, funct3 = decoded.funct3, funct7 = decoded.funct7, "unsupported op-reg encoding, treating as NOP");
                    return c;
                };
                c.needs_rs1 = true;
                c.needs_rs2 = true;
                c.reg_write = true;
                c.alu_op = op;
            }
        }
        OP_LUI => {
            c.reg_write = true;
            c.is_lui = true;
        }
        OP_AUIPC => {
            c.reg_write = true;
            c.is_auipc = true;
        }
        OP_BRANCH => {
            let Some(op) = branch_op(decoded.funct3) else {
                warn!(pc, funct3 = decoded.funct3, "unsupported branch funct3, treating as NOP");
                return c;
            };
            c.needs_rs1 = true;
            c.needs_rs2 = true;
            c.is_branch = true;
            c.branch_op = Some(op);
        }
        OP_JAL => {
            c.reg_write = true;
            c.is_jump = true;
        }
        OP_JALR => {
            c.needs_rs1 = true;
            c.reg_write = true;
            c.is_jalr = true;
        }
        other => {
            warn!(pc, opcode = format!("{other:#09b}"), "unsupported opcode, treating as NOP");
        }
    }
    c
}

fn load_width(f3: u32) -> Option<(AccessWidth, bool)> {
    Some(match f3 {
        funct3::LB => (AccessWidth::Byte, true),
        funct3::LH => (AccessWidth::Half, true),
        funct3::LW => (AccessWidth::Word, false),
        funct3::LBU => (AccessWidth::Byte, false),
        funct3::LHU => (AccessWidth::Half, false),
        _ => return None,
    })
}

fn store_width(f3: u32) -> Option<AccessWidth> {
    Some(match f3 {
        funct3::SB => AccessWidth::Byte,
        funct3::SH => AccessWidth::Half,
        funct3::SW => AccessWidth::Word,
        _ => return None,
    })
}

fn imm_alu_op(f3: u32, f7: u32) -> Option<AluOp> {
    Some(match f3 {
        funct3::ADD_SUB => AluOp::Add,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        funct3::SLL => AluOp::Sll,
        funct3::SRL_SRA => {
            if f7 == funct7::SUB {
                AluOp::Sra
            } else {
                AluOp::Srl
            }
        }
        _ => return None,
    })
}

fn reg_alu_op(f3: u32, f7: u32) -> Option<AluOp> {
    Some(match f3 {
        funct3::ADD_SUB => {
            if f7 == funct7::SUB {
                AluOp::Sub
            } else {
                AluOp::Add
            }
        }
        funct3::SLL => AluOp::Sll,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::SRL_SRA => {
            if f7 == funct7::SUB {
                AluOp::Sra
            } else {
                AluOp::Srl
            }
        }
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        _ => return None,
    })
}

enum MulOrDiv {
    Mul(MulOp),
    Div(DivOp),
}

fn mul_div_op(f3: u32) -> Option<MulOrDiv> {
    Some(match f3 {
        funct3::MUL => MulOrDiv::Mul(MulOp::Mul),
        funct3::MULH => MulOrDiv::Mul(MulOp::Mulh),
        funct3::MULHSU => MulOrDiv::Mul(MulOp::Mulhsu),
        funct3::MULHU => MulOrDiv::Mul(MulOp::Mulhu),
        funct3::DIV => MulOrDiv::Div(DivOp::Div),
        funct3::DIVU => MulOrDiv::Div(DivOp::Divu),
        funct3::REM => MulOrDiv::Div(DivOp::Rem),
        funct3::REMU => MulOrDiv::Div(DivOp::Remu),
        _ => return None,
    })
}

fn branch_op(f3: u32) -> Option<BranchOp> {
    Some(match f3 {
        funct3::BEQ => BranchOp::Beq,
        funct3::BNE => BranchOp::Bne,
        funct3::BLT => BranchOp::Blt,
        funct3::BGE => BranchOp::Bge,
        funct3::BLTU => BranchOp::Bltu,
        funct3::BGEU => BranchOp::Bgeu,
        _ => return None,
    })
}
