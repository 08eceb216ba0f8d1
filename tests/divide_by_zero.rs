//! `DIV`/`REM` by zero: RISC-V defines this rather than trapping.

mod common;
use common::*;

use rv32im_pipe_sim::common::constants::{REG_A0, REG_A1};
use rv32im_pipe_sim::common::error::HaltReason;

#[test]
fn divide_by_zero_yields_all_ones_and_rem_yields_the_dividend() {
    let program = vec![
        addi(1, 0, 42),            // 0: x1 = 42
        addi(2, 0, 0),              // 4: x2 = 0
        div(REG_A0 as u32, 1, 2),   // 8: a0 = 42 / 0
        rem(REG_A1 as u32, 1, 2),   // 12: a1 = 42 % 0
        halt(),                     // 16: end
    ];

    let (cpu, reason) = run(&program);
    assert_eq!(reason, HaltReason::Sentinel { result: u32::MAX });
    assert_eq!(cpu.regs().read(REG_A0), u32::MAX);
    assert_eq!(cpu.regs().read(REG_A1), 42);
}
