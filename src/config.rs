//! Simulator configuration: defaults and the CLI surface that overrides
//! them.

use std::path::PathBuf;

use serde::Deserialize;

use crate::common::constants::DEFAULT_MAX_CYCLES;

/// Named default values, kept in one place so [`SimConfig::from_args`]
/// and serde's `#[serde(default = ...)]` attributes stay in sync.
pub mod defaults {
    use super::DEFAULT_MAX_CYCLES;

    /// Default cycle-count ceiling before a run halts with
    /// [`crate::common::error::HaltReason::CycleThreshold`].
    #[must_use]
    pub fn max_cycles() -> u64 {
        DEFAULT_MAX_CYCLES
    }
}

/// Configuration for one simulation run.
#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    /// Path to the hex-text instruction image.
    pub instruction_image_path: PathBuf,
    /// Path to the hex-text data image.
    pub data_image_path: PathBuf,
    /// Cycle-count ceiling; the run halts with
    /// [`crate::common::error::HaltReason::CycleThreshold`] if reached
    /// without a sentinel halt first.
    #[serde(default = "defaults::max_cycles")]
    pub max_cycles: u64,
    /// Whether to emit per-cycle `tracing` events for fetch, stalls,
    /// flushes, and retirement.
    #[serde(default)]
    pub trace: bool,
    /// Whether to dump all 32 registers when the run halts.
    #[serde(default)]
    pub dump_regs_on_halt: bool,
}

impl SimConfig {
    /// Parses `argv[1..]`-style arguments into a config.
    ///
    /// Surface: `<instruction_image_path> <data_image_path> [--max-cycles
    /// N] [--trace] [--dump-regs-on-halt]`. The two image paths are
    /// positional and required; everything else is an optional flag.
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = Vec::new();
        let mut max_cycles = defaults::max_cycles();
        let mut trace = false;
        let mut dump_regs_on_halt = false;

        let mut iter = args.into_iter().map(Into::into);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--max-cycles" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--max-cycles requires a value".to_string())?;
                    max_cycles = value
                        .parse()
                        .map_err(|_| format!("invalid --max-cycles value: {value:?}"))?;
                }
                "--trace" => trace = true,
                "--dump-regs-on-halt" => dump_regs_on_halt = true,
                _ => positional.push(arg),
            }
        }

        if positional.len() != 2 {
            return Err(format!(
                "expected exactly 2 positional arguments (instruction image, data image), got {}",
                positional.len()
            ));
        }

        Ok(Self {
            instruction_image_path: PathBuf::from(&positional[0]),
            data_image_path: PathBuf::from(&positional[1]),
            max_cycles,
            trace,
            dump_regs_on_halt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_paths_with_defaults() {
        let cfg = SimConfig::from_args(["prog.hex", "data.hex"]).unwrap();
        assert_eq!(cfg.instruction_image_path, PathBuf::from("prog.hex"));
        assert_eq!(cfg.data_image_path, PathBuf::from("data.hex"));
        assert_eq!(cfg.max_cycles, defaults::max_cycles());
        assert!(!cfg.trace);
        assert!(!cfg.dump_regs_on_halt);
    }

    #[test]
    fn parses_flags_in_any_position() {
        let cfg = SimConfig::from_args([
            "--trace",
            "prog.hex",
            "--max-cycles",
            "42",
            "data.hex",
            "--dump-regs-on-halt",
        ])
        .unwrap();
        assert_eq!(cfg.max_cycles, 42);
        assert!(cfg.trace);
        assert!(cfg.dump_regs_on_halt);
    }

    #[test]
    fn rejects_wrong_positional_count() {
        assert!(SimConfig::from_args(["only_one.hex"]).is_err());
    }
}
