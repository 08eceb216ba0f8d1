//! The five pipeline stage functions: fetch, decode, execute, memory,
//! writeback.

pub mod decode;
pub mod execute;
pub mod fetch;
pub mod memory;
pub mod writeback;

pub use decode::decode_stage;
pub use execute::{execute_stage, ExOutcome};
pub use fetch::fetch_stage;
pub use memory::{memory_stage, MemoryFault};
pub use writeback::writeback_stage;
