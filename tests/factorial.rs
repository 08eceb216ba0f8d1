//! Computes 5! through the multiplier's multi-cycle latency.

mod common;
use common::*;

use rv32im_pipe_sim::common::constants::REG_A0;
use rv32im_pipe_sim::common::error::HaltReason;

#[test]
fn factorial_of_five_is_one_hundred_twenty() {
    // x1 = n, x2 = result
    let program = vec![
        addi(1, 0, 5),             // 0:  n = 5
        addi(2, 0, 1),              // 4:  result = 1
        beq(1, 0, 16),              // 8:  loop: if n == 0, goto 24
        mul(2, 2, 1),                // 12: result *= n
        addi(1, 1, -1),              // 16: n -= 1
        jal(0, -12),                  // 20: goto loop (pc 8)
        add(REG_A0 as u32, 2, 0),    // 24: a0 = result
        halt(),                      // 28: end
    ];

    let (cpu, reason) = run(&program);
    assert_eq!(reason, HaltReason::Sentinel { result: 120 });
    assert_eq!(cpu.regs().read(REG_A0), 120);
    assert!(cpu.stats().inst_mul >= 5);
}
