//! CLI front-end for the pipeline simulator.
//!
//! ```text
//! rvsim <instruction_image_path> <data_image_path> [--max-cycles N] [--trace] [--dump-regs-on-halt]
//! ```

use std::env;
use std::process::ExitCode;

use rv32im_pipe_sim::{HaltReason, SimConfig, Simulator};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let cfg = match SimConfig::from_args(args) {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("rvsim: {msg}");
            eprintln!(
                "usage: rvsim <instruction_image_path> <data_image_path> [--max-cycles N] [--trace] [--dump-regs-on-halt]"
            );
            return ExitCode::FAILURE;
        }
    };

    if cfg.trace {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rv32im_pipe_sim=trace"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let mut sim = match Simulator::from_config(&cfg) {
        Ok(sim) => sim,
        Err(fault) => {
            eprintln!("rvsim: {fault}");
            return ExitCode::FAILURE;
        }
    };

    let reason = sim.run();
    report(&reason, &sim, cfg.dump_regs_on_halt);
    ExitCode::from(reason.exit_code() as u8)
}

fn report(reason: &HaltReason, sim: &Simulator, dump_regs: bool) {
    match reason {
        HaltReason::Sentinel { result } => {
            println!("halted: sentinel (a0 = {result} / {result:#010x})");
        }
        HaltReason::CycleThreshold => {
            println!("halted: cycle threshold reached without a sentinel halt");
        }
        HaltReason::UnalignedAccess { pc, addr } => {
            println!("halted: unaligned memory access at pc={pc:#010x} addr={addr:#010x}");
        }
        HaltReason::OutOfBounds { pc, addr } => {
            println!("halted: out-of-bounds memory access at pc={pc:#010x} addr={addr:#010x}");
        }
        HaltReason::External => {
            println!("halted: external request");
        }
    }
    println!("{}", sim.stats());
    if dump_regs {
        sim.cpu().regs().dump();
    }
}
