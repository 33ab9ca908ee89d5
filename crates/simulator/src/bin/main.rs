//! Interrupt Simulator CLI
//!
//! Runs priority-based interrupt scenarios and steps through their timelines.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use irqsim_registry::RegistryConfig;
use irqsim_simulator::{render, repl, ScenarioConfig, WorkloadConfig};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "irqsim")]
#[command(about = "Step through preemptive, priority-based interrupt handling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a scenario and print the whole timeline
    Run {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Load a scenario and step through it interactively
    Play {
        /// Scenario file (TOML); starts empty if omitted
        scenario: Option<PathBuf>,
    },

    /// Print a random scenario
    Generate {
        /// Number of interrupts
        #[arg(long, default_value = "5")]
        count: usize,

        /// Random seed
        #[arg(long, default_value = "12345")]
        seed: u64,

        /// Highest priority to generate
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
        max_priority: u32,

        /// Longest duration to generate, in milliseconds
        #[arg(long, default_value = "5000", value_parser = clap::value_parser!(u64).range(1..))]
        max_duration_ms: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn wall_clock() -> Duration {
    // A clock before 1970 only affects informational timestamps.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

fn load_scenario(path: &Path) -> anyhow::Result<ScenarioConfig> {
    ScenarioConfig::load(path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the requested output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run { scenario, format } => {
            let scenario = load_scenario(&scenario)?;
            let mut simulator = scenario
                .build_simulator(wall_clock())
                .context("registering scenario interrupts")?;
            simulator.start_simulation();
            let state = simulator.state();

            match format {
                OutputFormat::Text => {
                    print!("{}", render::render_interrupts(&state.interrupts));
                    println!();
                    print!("{}", render::render_log(&state));
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&state)
                        .context("encoding simulation state")?;
                    println!("{json}");
                }
            }
        }

        Commands::Play { scenario } => {
            let scenario = match scenario {
                Some(path) => load_scenario(&path)?,
                None => ScenarioConfig::new(),
            };
            let mut simulator = scenario
                .build_simulator(wall_clock())
                .context("registering scenario interrupts")?;

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run(&mut simulator, stdin.lock(), &mut stdout, wall_clock)?;
        }

        Commands::Generate {
            count,
            seed,
            max_priority,
            max_duration_ms,
        } => {
            let registry = RegistryConfig::default()
                .with_max_priority(max_priority)
                .with_max_duration_ms(max_duration_ms);
            let scenario = WorkloadConfig::default()
                .with_count(count)
                .with_seed(seed)
                .with_registry(registry)
                .generate();
            print!("{}", scenario.to_toml_string()?);
        }
    }

    Ok(())
}
