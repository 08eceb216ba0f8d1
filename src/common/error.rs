//! Error and termination taxonomy for the simulator.
//!
//! `SimFault` covers faults detected before the cycle loop starts (image
//! parsing); `HaltReason` covers the ways the cycle loop itself can stop.
//! Both are plain data, never panics — the core never unwinds on a
//! malformed program image or a runtime fault.

use thiserror::Error;

/// A fault raised while preparing the simulator, before any cycle runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimFault {
    /// A line in an instruction or data image was not valid hexadecimal.
    #[error("image parse error at line {line}: {text:?} is not valid hexadecimal")]
    ImageParse {
        /// 1-based line number within the image file.
        line: usize,
        /// The offending line's text.
        text: String,
    },

    /// The instruction image contained more words than instruction memory
    /// can hold.
    #[error("instruction image has {words} words, exceeding capacity of {capacity}")]
    InstructionImageTooLarge {
        /// Words present in the image.
        words: usize,
        /// Instruction memory capacity, in words.
        capacity: usize,
    },

    /// The data image contained more words than data memory can hold.
    #[error("data image has {words} words, exceeding capacity of {capacity} bytes")]
    DataImageTooLarge {
        /// Words present in the image.
        words: usize,
        /// Data memory capacity, in bytes.
        capacity: usize,
    },

    /// The image file could not be read from disk.
    #[error("failed to read image file {path:?}: {source}")]
    Io {
        /// Path that failed to open or read.
        path: String,
        /// Underlying I/O error, stringified since `io::Error` is not `Eq`.
        source: String,
    },
}

/// Why the cycle loop stopped running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaltReason {
    /// The "done" sentinel instruction (an unconditional branch to self)
    /// was fetched. Carries the value of `x10` (`a0`) at halt.
    Sentinel {
        /// Value of register `a0` at the moment of halt.
        result: u32,
    },
    /// The configured cycle-count threshold was reached without a
    /// sentinel being fetched.
    CycleThreshold,
    /// A load or store targeted an address that was not aligned to its
    /// access width.
    UnalignedAccess {
        /// PC of the offending instruction.
        pc: u32,
        /// Address that was misaligned.
        addr: u32,
    },
    /// A load or store targeted an address outside the configured data
    /// memory extent.
    OutOfBounds {
        /// PC of the offending instruction.
        pc: u32,
        /// Address that was out of bounds.
        addr: u32,
    },
    /// Halt was asserted externally by the harness.
    External,
}

impl HaltReason {
    /// The process exit code a CLI harness should report for this halt.
    ///
    /// Zero only for a successful sentinel halt; non-zero otherwise, per
    /// the termination contract.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Sentinel { .. } => 0,
            Self::CycleThreshold | Self::UnalignedAccess { .. } | Self::OutOfBounds { .. } => 1,
            Self::External => 2,
        }
    }
}
