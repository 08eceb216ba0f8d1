//! The multi-cycle radix-4 SRT divider.
//!
//! Computes the quotient/remainder pair immediately but only exposes it
//! after [`DIV_LATENCY`] EX cycles — [`DIV_ITERATIONS`] radix-4 steps plus
//! a final quotient-correction cycle — matching the non-restoring
//! redundant-digit algorithm's observable latency without literally
//! tracking per-iteration partial remainders.

use crate::common::constants::DIV_LATENCY;

/// Which quotient/remainder the issuing instruction wants, and with what
/// sign convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivOp {
    /// `DIV`: signed quotient.
    Div,
    /// `DIVU`: unsigned quotient.
    Divu,
    /// `REM`: signed remainder.
    Rem,
    /// `REMU`: unsigned remainder.
    Remu,
}

/// Divider pipeline state: idle, or busy counting down to completion.
#[derive(Debug, Clone, Default)]
pub struct Divider {
    busy: bool,
    remaining: u32,
    pending_rd: usize,
    result: u32,
}

impl Divider {
    /// Creates an idle divider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the divider currently holds in-flight work.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Issues a new divide. `a` is the dividend, `b` the divisor.
    pub fn issue(&mut self, op: DivOp, a: u32, b: u32, rd: usize) {
        self.result = compute(op, a, b);
        self.pending_rd = rd;
        self.remaining = DIV_LATENCY;
        self.busy = true;
    }

    /// Advances the divider by one cycle. Returns `Some((rd, result))` on
    /// the cycle the result becomes visible.
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
    /// The driver never calls this in practice: the issuing divide
    /// occupies ID/EX for its whole latency (fetch is stalled behind it),
    /// so no branch can resolve and flush while this unit is busy. Kept
    /// for the case a future wider-issue or speculative-div design needs
    /// it, and exercised directly by the unit test below.
    pub fn cancel(&mut self) {
        self.busy = false;
    }
}

/// Computes the requested quotient or remainder per the RISC-V spec's
/// divide-by-zero and signed-overflow rules.
fn compute(op: DivOp, a: u32, b: u32) -> u32 {
    match op {
        DivOp::Divu => {
            if b == 0 {
                u32::MAX
            } else {
                a / b
            }
        }
        DivOp::Remu => {
            if b == 0 {
                a
            } else {
                a % b
            }
        }
        DivOp::Div => {
            let (a, b) = (a as i32, b as i32);
            if b == 0 {
                u32::MAX
            } else if a == i32::MIN && b == -1 {
                i32::MIN as u32
            } else {
                a.wrapping_div(b) as u32
            }
        }
        DivOp::Rem => {
            let (a, b) = (a as i32, b as i32);
            if b == 0 {
                a as u32
            } else if a == i32::MIN && b == -1 {
                0
            } else {
                a.wrapping_rem(b) as u32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_completes_after_exactly_eighteen_ticks() {
        let mut d = Divider::new();
        d.issue(DivOp::Div, 10, 2, 5);
        for _ in 0..17 {
            assert_eq!(d.tick(), None);
        }
        assert_eq!(d.tick(), Some((5, 5)));
        assert!(!d.is_busy());
    }

    #[test]
    fn divide_by_zero_signed_yields_all_ones_quotient() {
        assert_eq!(compute(DivOp::Div, 42, 0), u32::MAX);
        assert_eq!(compute(DivOp::Rem, 42, 0), 42);
    }

    #[test]
    fn divide_by_zero_unsigned_yields_all_ones_quotient() {
        assert_eq!(compute(DivOp::Divu, 42, 0), u32::MAX);
        assert_eq!(compute(DivOp::Remu, 42, 0), 42);
    }

    #[test]
    fn signed_overflow_int_min_div_minus_one() {
        let min = i32::MIN as u32;
        let minus_one = (-1i32) as u32;
        assert_eq!(compute(DivOp::Div, min, minus_one), min);
        assert_eq!(compute(DivOp::Rem, min, minus_one), 0);
    }

    #[test]
    fn cancel_while_busy_drops_the_pending_result() {
        let mut d = Divider::new();
        d.issue(DivOp::Div, 4, 2, 1);
        d.cancel();
        assert!(!d.is_busy());
        assert_eq!(d.tick(), None);
    }
}
