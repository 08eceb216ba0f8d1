//! A backward branch taken many times then not-taken once: the BHT
//! resets weakly-not-taken, so it misses the BTB on the branch's first
//! execution, trains to taken on that single resolution, then predicts
//! correctly until the final, untaken exit mispredicts once more.

mod common;
use common::*;

use rv32im_pipe_sim::common::constants::REG_A0;
use rv32im_pipe_sim::common::error::HaltReason;

#[test]
fn warm_up_mispredictions_stay_bounded() {
    // x1 = counter (counts down from 10), x2 = iterations taken
    let program = vec![
        addi(1, 0, 10),            // 0:  counter = 10
        addi(2, 0, 0),              // 4:  taken = 0
        addi(1, 1, -1),              // 8:  loop: counter -= 1
        addi(2, 2, 1),                // 12: taken += 1
        bne(1, 0, -8),                 // 16: if counter != 0, goto loop (pc 8)
        add(REG_A0 as u32, 2, 0),     // 20: a0 = taken
        halt(),                        // 24: end
    ];

    let (cpu, reason) = run(&program);
    assert_eq!(reason, HaltReason::Sentinel { result: 10 });
    assert_eq!(cpu.regs().read(REG_A0), 10);

    // The BHT resets weakly-not-taken, one update below threshold. The
    // branch's first execution (taken) misses the BTB and mispredicts,
    // but that single resolution is enough to cross the taken threshold,
    // so every iteration after it predicts correctly. The final,
    // untaken exit mispredicts once more against the taken-trained
    // counter: two mispredictions total.
    assert_eq!(cpu.stats().branch_predictions, 10);
    assert!(
        cpu.stats().branch_mispredictions <= 2,
        "expected at most one warm-up miss plus the final exit, got {}",
        cpu.stats().branch_mispredictions
    );
}
