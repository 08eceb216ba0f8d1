//! `DIV`/`REM` of `INT_MIN / -1`: the one case where the mathematical
//! quotient overflows a 32-bit signed integer.

mod common;
use common::*;

use rv32im_pipe_sim::common::constants::{REG_A0, REG_A1};
use rv32im_pipe_sim::common::error::HaltReason;

#[test]
fn signed_overflow_returns_the_dividend_unchanged_and_a_zero_remainder() {
    let program = vec![
        lui(1, 0x8_0000),                  // 0: x1 = 0x8000_0000 (i32::MIN)
        addi(2, 0, -1),                     // 4: x2 = -1
        div(REG_A0 as u32, 1, 2),           // 8: a0 = x1 / x2
        rem(REG_A1 as u32, 1, 2),           // 12: a1 = x1 % x2
        halt(),                             // 16: end
    ];

    let (cpu, reason) = run(&program);
    assert_eq!(reason, HaltReason::Sentinel { result: i32::MIN as u32 });
    assert_eq!(cpu.regs().read(REG_A0), i32::MIN as u32);
    assert_eq!(cpu.regs().read(REG_A1), 0);
    assert_eq!(cpu.stats().inst_div, 2);
}
