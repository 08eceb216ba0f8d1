//! The CPU: register file, memories, functional units, and the four
//! pipeline latches, advanced one cycle at a time by [`Cpu::tick`].

use tracing::trace;

use crate::common::constants::REG_A0;
use crate::common::error::HaltReason;
use crate::common::reg::RegFile;
use crate::core::pipeline::hazards::{load_use_stall, PipelineAction};
use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, IfIdLatch, MemWbLatch};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage, ExOutcome, MemoryFault,
};
use crate::core::units::{BranchPredictor, Divider, Multiplier};
use crate::isa::opcodes::OP_JAL;
use crate::isa::{decode, InstructionBits};
use crate::memory::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// What happened this cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cycle loop should keep running.
    Continue,
    /// The cycle loop should stop; here's why.
    Halt(HaltReason),
}

/// The five-stage RV32IM core.
pub struct Cpu {
    regs: RegFile,
    pc: u32,
    imem: InstructionMemory,
    dmem: DataMemory,
    predictor: BranchPredictor,
    multiplier: Multiplier,
    divider: Divider,

    if_id: IfIdLatch,
    id_ex: IdExLatch,
    ex_mem: ExMemLatch,
    mem_wb: MemWbLatch,

    /// Set once the "jump to self" halt sentinel has been seen at fetch;
    /// fetch stops issuing new instructions but the pipeline keeps
    /// draining until every latch is empty.
    draining: bool,

    stats: SimStats,
}

impl Cpu {
    /// Builds a CPU around the given instruction and data memories, with
    /// everything else (registers, latches, predictor, functional units)
    /// in its reset state.
    #[must_use]
    pub fn new(imem: InstructionMemory, dmem: DataMemory) -> Self {
        Self {
            regs: RegFile::new(),
            pc: 0,
            imem,
            dmem,
            predictor: BranchPredictor::new(),
            multiplier: Multiplier::new(),
            divider: Divider::new(),
            if_id: IfIdLatch::default(),
            id_ex: IdExLatch::default(),
            ex_mem: ExMemLatch::default(),
            mem_wb: MemWbLatch::default(),
            draining: false,
            stats: SimStats::new(),
        }
    }

    /// Read-only access to the register file, for `--dump-regs-on-halt`
    /// and tests.
    #[must_use]
    pub fn regs(&self) -> &RegFile {
        &self.regs
    }

    /// Accumulated run statistics.
    #[must_use]
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Advances the pipeline by exactly one cycle.
    pub fn tick(&mut self) -> TickOutcome {
        self.stats.cycles += 1;

        writeback_stage(&self.mem_wb, &mut self.regs);
        let retiring = self.mem_wb;
        if retiring.valid {
            self.retire(&retiring);
        }

        let mem_wb_next = match memory_stage(&self.ex_mem, &mut self.dmem) {
            Ok(latch) => latch,
            Err(MemoryFault::Unaligned { pc, addr }) => {
                return TickOutcome::Halt(HaltReason::UnalignedAccess { pc, addr })
            }
            Err(MemoryFault::OutOfBounds { pc, addr }) => {
                return TickOutcome::Halt(HaltReason::OutOfBounds { pc, addr })
            }
        };

        let ex_outcome = execute_stage(
            &self.id_ex,
            &self.ex_mem,
            &self.mem_wb,
            &mut self.multiplier,
            &mut self.divider,
        );
        let ex_busy = matches!(ex_outcome, ExOutcome::Busy);
        let ex_mem_next = match ex_outcome {
            ExOutcome::Done(latch) => latch,
            ExOutcome::Busy => ExMemLatch::default(),
        };

        let mut flush = false;
        let mut flush_target = 0;
        if ex_mem_next.valid
            && (ex_mem_next.control.is_branch
                || ex_mem_next.control.is_jump
                || ex_mem_next.control.is_jalr)
        {
            let actual_next = if ex_mem_next.branch_taken {
                ex_mem_next.resolved_target
            } else {
                ex_mem_next.pc.wrapping_add(4)
            };
            if ex_mem_next.control.is_branch {
                self.predictor
                    .update(ex_mem_next.pc, ex_mem_next.branch_taken, ex_mem_next.resolved_target);
                self.stats.branch_predictions += 1;
            }
            if actual_next != self.id_ex.prediction.predicted_pc {
                flush = true;
                flush_target = actual_next;
                if ex_mem_next.control.is_branch {
                    self.stats.branch_mispredictions += 1;
                }
                trace!(pc = ex_mem_next.pc, target = flush_target, "mispredict, flushing");
            }
        }

        let decode_candidate = decode_stage(&self.if_id, &self.regs);
        let load_use = load_use_stall(
            &self.id_ex,
            decode_candidate.control.needs_rs1,
            decode_candidate.rs1_idx,
            decode_candidate.control.needs_rs2,
            decode_candidate.rs2_idx,
        );
        if load_use {
            self.stats.stalls_load_use += 1;
        }
        if ex_busy {
            if self.id_ex.control.mul_op.is_some() {
                self.stats.stalls_mul_busy += 1;
            }
            if self.id_ex.control.div_op.is_some() {
                self.stats.stalls_div_busy += 1;
            }
        }

        self.ex_mem = ex_mem_next;
        self.mem_wb = mem_wb_next;

        // Resolve the cycle's action through the hazard unit's own
        // priority rule: a resolved mispredict always wins over either
        // stall source, which always wins over a plain advance.
        let stall = if ex_busy {
            PipelineAction::Stall
        } else if load_use {
            PipelineAction::Stall
        } else {
            PipelineAction::Advance
        };
        let action = stall.combine(if flush { PipelineAction::Flush } else { PipelineAction::Advance });

        match action {
            PipelineAction::Flush => {
                self.if_id = IfIdLatch::default();
                self.id_ex = IdExLatch::default();
                self.pc = flush_target;
            }
            PipelineAction::Stall if ex_busy => {
                // Hold fetch/decode/ID-EX exactly as they are; the busy
                // unit keeps counting down next cycle. A flush can never
                // coincide with ex_busy: execute_stage resolves at most
                // one instruction per cycle, so id_ex can't simultaneously
                // hold a busy multiply/divide and a just-resolved branch,
                // so the in-flight unit never needs cancel()ing.
            }
            PipelineAction::Stall => {
                self.id_ex = IdExLatch::default();
                // if_id and pc are held so the dependent instruction
                // decodes again next cycle.
            }
            PipelineAction::Advance => {
                self.id_ex = decode_candidate;
                if self.draining {
                    self.if_id = IfIdLatch::default();
                } else if self.is_halt_sentinel(self.pc) {
                    self.draining = true;
                    self.if_id = IfIdLatch::default();
                } else {
                    self.if_id = fetch_stage(self.pc, &self.imem, &self.predictor);
                    self.pc = self.if_id.prediction.predicted_pc;
                }
            }
        }

        if self.draining && self.pipeline_is_empty() {
            return TickOutcome::Halt(HaltReason::Sentinel {
                result: self.regs.read(REG_A0),
            });
        }

        TickOutcome::Continue
    }

    fn pipeline_is_empty(&self) -> bool {
        !self.if_id.valid
            && !self.id_ex.valid
            && !self.ex_mem.valid
            && !self.mem_wb.valid
            && !self.multiplier.is_busy()
            && !self.divider.is_busy()
    }

    fn is_halt_sentinel(&self, pc: u32) -> bool {
        let word = self.imem.read(pc);
        word.opcode() == OP_JAL && word.rd() == 0 && decode(word).imm == 0
    }

    fn retire(&mut self, latch: &MemWbLatch) {
        self.stats.instructions_retired += 1;
        let c = &latch.control;
        if c.is_load {
            self.stats.inst_load += 1;
        } else if c.is_store {
            self.stats.inst_store += 1;
        } else if c.is_branch {
            self.stats.inst_branch += 1;
        } else if c.is_jump || c.is_jalr {
            self.stats.inst_jump += 1;
        } else if c.mul_op.is_some() {
            self.stats.inst_mul += 1;
        } else if c.div_op.is_some() {
            self.stats.inst_div += 1;
        } else {
            self.stats.inst_alu += 1;
        }
    }
}
