//! Hand-assembly helpers for building RV32IM word programs in tests,
//! plus a tiny harness that runs one to completion.

use rv32im_pipe_sim::common::error::HaltReason;
use rv32im_pipe_sim::core::{Cpu, TickOutcome};
use rv32im_pipe_sim::isa::opcodes::{funct3, funct7, OP_BRANCH, OP_IMM, OP_JAL, OP_JALR, OP_LOAD, OP_LUI, OP_REG, OP_STORE};
use rv32im_pipe_sim::memory::{DataMemory, InstructionMemory};

const MAX_TEST_CYCLES: u64 = 100_000;

pub fn r_type(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (funct7 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

pub fn i_type(imm: i32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (((imm as u32) & 0xFFF) << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

pub fn s_type(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let u = imm as u32;
    let low = u & 0x1F;
    let high = (u >> 5) & 0x7F;
    (high << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (low << 7) | opcode
}

pub fn b_type(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let u = imm as u32;
    let bit12 = (u >> 12) & 1;
    let bit11 = (u >> 11) & 1;
    let bits10_5 = (u >> 5) & 0x3F;
    let bits4_1 = (u >> 1) & 0xF;
    (bit12 << 31) | (bits10_5 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (bits4_1 << 8) | (bit11 << 7) | opcode
}

pub fn u_type(imm20: u32, rd: u32, opcode: u32) -> u32 {
    (imm20 << 12) | (rd << 7) | opcode
}

pub fn j_type(imm: i32, rd: u32, opcode: u32) -> u32 {
    let u = imm as u32;
    let bit20 = (u >> 20) & 1;
    let bits10_1 = (u >> 1) & 0x3FF;
    let bit11 = (u >> 11) & 1;
    let bits19_12 = (u >> 12) & 0xFF;
    (bit20 << 31) | (bits10_1 << 21) | (bit11 << 20) | (bits19_12 << 12) | (rd << 7) | opcode
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, funct3::ADD_SUB, rd, OP_IMM)
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct7::DEFAULT, rs2, rs1, funct3::ADD_SUB, rd, OP_REG)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct7::SUB, rs2, rs1, funct3::ADD_SUB, rd, OP_REG)
}

pub fn mul(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct7::M_EXTENSION, rs2, rs1, funct3::MUL, rd, OP_REG)
}

pub fn div(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct7::M_EXTENSION, rs2, rs1, funct3::DIV, rd, OP_REG)
}

pub fn rem(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(funct7::M_EXTENSION, rs2, rs1, funct3::REM, rd, OP_REG)
}

pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(imm20, rd, OP_LUI)
}

pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(imm, rs2, rs1, funct3::BEQ, OP_BRANCH)
}

pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(imm, rs2, rs1, funct3::BNE, OP_BRANCH)
}

pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(imm, rd, OP_JAL)
}

#[allow(dead_code)]
pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0, rd, OP_JALR)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, funct3::LW, rd, OP_LOAD)
}

pub fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, funct3::LB, rd, OP_LOAD)
}

pub fn sw(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(imm, rs2, rs1, funct3::SW, OP_STORE)
}

pub fn sb(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(imm, rs2, rs1, funct3::SB, OP_STORE)
}

/// "jal x0, 0" — the halt-sentinel instruction fetch recognizes without
/// ever issuing it into the pipeline.
pub fn halt() -> u32 {
    jal(0, 0)
}

/// Assembles `program` into a fresh CPU and runs it to completion, with a
/// generous cycle ceiling so a broken test program fails fast instead of
/// hanging.
pub fn run(program: &[u32]) -> (Cpu, HaltReason) {
    let mut imem = InstructionMemory::new();
    imem.load(program).expect("test program fits instruction memory");
    let dmem = DataMemory::new();
    let mut cpu = Cpu::new(imem, dmem);
    for _ in 0..MAX_TEST_CYCLES {
        if let TickOutcome::Halt(reason) = cpu.tick() {
            return (cpu, reason);
        }
    }
    panic!("test program did not halt within {MAX_TEST_CYCLES} cycles");
}
