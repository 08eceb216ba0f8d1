//! Named constants shared across the instruction decoder, memories, and
//! branch predictor.
//!
//! Grouping these as named constants (rather than inline magic numbers)
//! keeps the bit-level contracts of the RV32IM encoding and the predictor's
//! indexing scheme auditable in one place.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Number of architectural general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Number of entries in the branch target buffer and branch history table.
///
/// Indexed by `pc[7:2]` (6 bits), per the fetch-stage predictor contract.
pub const BTB_SIZE: usize = 64;

/// Bit width of the BTB/BHT index extracted from the PC.
pub const BTB_INDEX_BITS: u32 = 6;

/// Latency, in EX cycles, of the Wallace-tree multiplier from issue to
/// result-visible-at-EX.
pub const MUL_LATENCY: u32 = 3;

/// Latency, in EX cycles, of the radix-4 SRT divider from issue to
/// result-visible-at-EX.
pub const DIV_LATENCY: u32 = 18;

/// Number of radix-4 SRT iterations (each producing 2 quotient bits) that
/// the divider performs before the final correction cycle.
pub const DIV_ITERATIONS: u32 = 16;

/// Default instruction memory capacity, in 32-bit words.
pub const DEFAULT_IMEM_WORDS: usize = 4096;

/// Default data memory capacity, in bytes (16 KiB minimum per the data
/// model).
pub const DEFAULT_DMEM_BYTES: usize = 16 * 1024;

/// Default cycle-count threshold before the simulator halts with a
/// non-zero exit code.
pub const DEFAULT_MAX_CYCLES: u64 = 1_000_000;

/// Register index of `a0` (`x10`), where the harness reads the program's
/// result at halt.
pub const REG_A0: usize = 10;

/// Register index of `a1` (`x11`), used by the division test scenarios
/// for the remainder.
pub const REG_A1: usize = 11;
