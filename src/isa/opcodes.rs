//! RV32I and RV32M opcode, funct3, and funct7 constants.
//!
//! Named per bit-field position rather than inlined, matching the
//! field-extraction contract in [`super::instruction`].

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const OP_LOAD: u32 = 0b0000011;
/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;
/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;
/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b0100011;
/// Register-Register arithmetic, including the M-extension (funct7 = 1).
pub const OP_REG: u32 = 0b0110011;
/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;
/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;
/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;
/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// Load/store/branch/arithmetic `funct3` codes.
pub mod funct3 {
    /// Load Byte (signed).
    pub const LB: u32 = 0b000;
    /// Load Halfword (signed).
    pub const LH: u32 = 0b001;
    /// Load Word.
    pub const LW: u32 = 0b010;
    /// Load Byte Unsigned.
    pub const LBU: u32 = 0b100;
    /// Load Halfword Unsigned.
    pub const LHU: u32 = 0b101;

    /// Store Byte.
    pub const SB: u32 = 0b000;
    /// Store Halfword.
    pub const SH: u32 = 0b001;
    /// Store Word.
    pub const SW: u32 = 0b010;

    /// Branch Equal.
    pub const BEQ: u32 = 0b000;
    /// Branch Not Equal.
    pub const BNE: u32 = 0b001;
    /// Branch Less Than (signed).
    pub const BLT: u32 = 0b100;
    /// Branch Greater or Equal (signed).
    pub const BGE: u32 = 0b101;
    /// Branch Less Than Unsigned.
    pub const BLTU: u32 = 0b110;
    /// Branch Greater or Equal Unsigned.
    pub const BGEU: u32 = 0b111;

    /// Add / Subtract (distinguished by `funct7`).
    pub const ADD_SUB: u32 = 0b000;
    /// Shift Left Logical.
    pub const SLL: u32 = 0b001;
    /// Set Less Than (signed).
    pub const SLT: u32 = 0b010;
    /// Set Less Than Unsigned.
    pub const SLTU: u32 = 0b011;
    /// Bitwise XOR.
    pub const XOR: u32 = 0b100;
    /// Shift Right Logical / Arithmetic (distinguished by `funct7`).
    pub const SRL_SRA: u32 = 0b101;
    /// Bitwise OR.
    pub const OR: u32 = 0b110;
    /// Bitwise AND.
    pub const AND: u32 = 0b111;

    /// Multiply (signed × signed), lower 32 bits.
    pub const MUL: u32 = 0b000;
    /// Multiply High (signed × signed), upper 32 bits.
    pub const MULH: u32 = 0b001;
    /// Multiply High (signed × unsigned), upper 32 bits.
    pub const MULHSU: u32 = 0b010;
    /// Multiply High (unsigned × unsigned), upper 32 bits.
    pub const MULHU: u32 = 0b011;
    /// Divide (signed).
    pub const DIV: u32 = 0b100;
    /// Divide (unsigned).
    pub const DIVU: u32 = 0b101;
    /// Remainder (signed).
    pub const REM: u32 = 0b110;
    /// Remainder (unsigned).
    pub const REMU: u32 = 0b111;
}

/// R-type `funct7` codes.
pub mod funct7 {
    /// Default operation (ADD, SRL, ...).
    pub const DEFAULT: u32 = 0b0000000;
    /// Alternate operation (SUB, SRA).
    pub const SUB: u32 = 0b0100000;
    /// Alias of [`SUB`] used for shift-right-arithmetic decoding.
    pub const SRA: u32 = SUB;
    /// M-extension selector: `opcode == OP_REG && funct7 == M_EXTENSION`
    /// routes `funct3` through the multiply/divide table instead of the
    /// base arithmetic table.
    pub const M_EXTENSION: u32 = 0b0000001;
}
