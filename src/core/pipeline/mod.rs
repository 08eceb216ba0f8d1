//! The five-stage pipeline: latches, hazard/forwarding logic, and the
//! per-stage functions the CPU drives each cycle.

pub mod hazards;
pub mod latches;
pub mod signals;
pub mod stages;

pub use hazards::{forward_operand, load_use_stall, PipelineAction};
pub use latches::{ExMemLatch, IdExLatch, IfIdLatch, MemWbLatch};
pub use signals::{BranchOp, ControlSignals};
