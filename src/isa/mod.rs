//! RV32I / RV32M instruction encoding.
//!
//! 1. **Field extraction:** [`instruction::InstructionBits`] pulls opcode,
//!    register, and function-code fields out of a raw 32-bit word.
//! 2. **Immediate decoding:** [`decode::decode`] additionally produces the
//!    format-specific sign-extended immediate (I/S/B/U/J).
//! 3. **Opcode tables:** [`opcodes`] holds the named opcode/funct3/funct7
//!    constants for the base integer ISA and the M extension.

pub mod decode;
pub mod instruction;
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Decoded, InstructionBits};
