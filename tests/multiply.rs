//! A single `MUL` through the 3-cycle multiplier.

mod common;
use common::*;

use rv32im_pipe_sim::common::constants::REG_A0;
use rv32im_pipe_sim::common::error::HaltReason;

#[test]
fn fifteen_times_seventeen_is_two_hundred_fifty_five() {
    let program = vec![
        addi(1, 0, 15),             // 0: x1 = 15
        addi(2, 0, 17),             // 4: x2 = 17
        mul(REG_A0 as u32, 1, 2),   // 8: a0 = x1 * x2
        halt(),                     // 12: end
    ];

    let (cpu, reason) = run(&program);
    assert_eq!(reason, HaltReason::Sentinel { result: 255 });
    assert_eq!(cpu.regs().read(REG_A0), 255);
    assert_eq!(cpu.stats().inst_mul, 1);
}
