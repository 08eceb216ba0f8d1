//! Functional units: the single-cycle ALU and the two multi-cycle units
//! (multiplier, divider) modeled as explicit busy/countdown state
//! machines.

pub mod alu;
pub mod bru;
pub mod div;
pub mod mul;

pub use bru::BranchPredictor;
pub use div::{DivOp, Divider};
pub use mul::{MulOp, Multiplier};
