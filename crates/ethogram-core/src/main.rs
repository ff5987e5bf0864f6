//! Ethogram Behavior Simulator
//!
//! Runs the bounded single-organism simulation and writes the per-tick
//! snapshot series (JSONL) plus a final run report (JSON) to the output
//! directory.

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use ethogram_core::{ConfigError, RewardMode, SeriesWriter, SimConfig, Simulator};

/// Command line arguments for the simulator
#[derive(Parser, Debug)]
#[command(name = "ethogram_sim")]
#[command(about = "A drive-based behavior simulator with an epsilon-greedy value learner")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Reward variant to run (defaults to the tuning file's mode, or
    /// drive-linked when no file is given)
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Tuning file overriding the variant defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the horizon to run exactly this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Directory for the series and report files
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

/// CLI mirror of the reward mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    DriveLinked,
    RangedRandom,
}

impl From<Mode> for RewardMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::DriveLinked => RewardMode::DriveLinked,
            Mode::RangedRandom => RewardMode::RangedRandom,
        }
    }
}

/// Resolves the run configuration from the tuning file and CLI overrides.
///
/// A tuning file supplies the base configuration (its reward mode included);
/// without one, the variant defaults for the `--mode` flag apply. An
/// explicit `--mode` overrides the file, and `--ticks` rewrites the horizon
/// so the inclusive-bound loop runs exactly that many ticks.
fn resolve_config(
    file: Option<&Path>,
    mode_flag: Option<RewardMode>,
    ticks: Option<u64>,
) -> Result<SimConfig, ConfigError> {
    let mut config = match file {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::for_mode(mode_flag.unwrap_or(RewardMode::DriveLinked)),
    };

    if let Some(mode) = mode_flag {
        config.reward.mode = mode;
    }

    if let Some(ticks) = ticks {
        if ticks == 0 {
            return Err(ConfigError::ZeroDuration { name: "--ticks" });
        }
        // The loop bound is inclusive: N ticks cover N-1 increments, so one
        // tick maps to a zero-hour horizon.
        config.schedule.horizon_hours = (ticks - 1) * config.schedule.tick_hours;
    }

    Ok(config)
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match resolve_config(
        args.config.as_deref(),
        args.mode.map(RewardMode::from),
        args.ticks,
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    println!("Ethogram Behavior Simulator");
    println!("===========================");
    println!("Seed: {}", args.seed);
    println!("Mode: {}", config.reward.mode.as_str());
    println!();

    let mut sim = match Simulator::new(config, args.seed) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Warning: Could not create output directory: {}", e);
    });

    println!(
        "Running {} ticks ({}h horizon at {}h per tick)...",
        sim.clock().expected_ticks(),
        config.schedule.horizon_hours,
        config.schedule.tick_hours
    );

    let report = sim.run();

    let series_path = args.output_dir.join("series.jsonl");
    let mut series = match SeriesWriter::new(&series_path) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("Warning: Could not open {}: {}", series_path.display(), e);
            SeriesWriter::null()
        }
    };
    for snapshot in &report.series {
        if let Err(e) = series.append(snapshot) {
            eprintln!("Warning: Could not write snapshot: {}", e);
            break;
        }
    }
    if let Err(e) = series.flush() {
        eprintln!("Warning: Could not flush series: {}", e);
    }

    match ethogram_core::write_report(&args.output_dir, &report) {
        Ok(path) => println!("Wrote report to {}", path.display()),
        Err(e) => eprintln!("Warning: Could not write report: {}", e),
    }

    let params = report.summary.params;
    println!();
    println!(
        "Simulation complete. Ran {} ticks (ending at {}).",
        report.summary.ticks_run,
        sim.clock().end
    );
    println!(
        "alpha={}, gamma={}, epsilon={}",
        params.alpha, params.gamma, params.epsilon
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tuning_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_tuning_file_mode_takes_effect_without_flag() {
        let file = tuning_file("[reward]\nmode = \"ranged_random\"\n");
        let config = resolve_config(Some(file.path()), None, None).unwrap();
        assert_eq!(config.reward.mode, RewardMode::RangedRandom);
    }

    #[test]
    fn test_explicit_mode_flag_overrides_tuning_file() {
        let file = tuning_file("[reward]\nmode = \"ranged_random\"\n");
        let config =
            resolve_config(Some(file.path()), Some(RewardMode::DriveLinked), None).unwrap();
        assert_eq!(config.reward.mode, RewardMode::DriveLinked);
    }

    #[test]
    fn test_mode_flag_selects_variant_defaults_without_file() {
        let config = resolve_config(None, Some(RewardMode::RangedRandom), None).unwrap();
        assert_eq!(config.reward.mode, RewardMode::RangedRandom);
        assert_eq!(config.params.alpha, 0.9);

        let config = resolve_config(None, None, None).unwrap();
        assert_eq!(config.reward.mode, RewardMode::DriveLinked);
    }

    #[test]
    fn test_single_tick_override_runs_one_tick() {
        let config = resolve_config(None, None, Some(1)).unwrap();
        assert_eq!(config.schedule.horizon_hours, 0);

        let mut sim = Simulator::new(config, 42).unwrap();
        let report = sim.run();
        assert_eq!(report.summary.ticks_run, 1);
    }

    #[test]
    fn test_tick_override_sets_exact_tick_count() {
        let config = resolve_config(None, None, Some(10)).unwrap();
        let mut sim = Simulator::new(config, 42).unwrap();
        assert_eq!(sim.run().summary.ticks_run, 10);
    }

    #[test]
    fn test_zero_tick_override_rejected_by_name() {
        let err = resolve_config(None, None, Some(0)).unwrap_err();
        assert!(err.to_string().contains("--ticks"));
    }
}
