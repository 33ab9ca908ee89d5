//! Interrupt Simulator front end
//!
//! A command-line front end built on top of the simulator state machine.
//! Loads scenarios, prints timelines and lets a learner step through a run.
//!
//! # Architecture
//!
//! The front end builds on `irqsim-simulation` to provide:
//!
//! - **Scenarios**: TOML files of interrupt definitions and registry limits
//! - **Workload Generation**: Seeded random scenarios for demos
//! - **Rendering**: Plain-text timeline and control-panel views
//! - **REPL**: Interactive stepping, one command per line
//!
//! # Example
//!
//! ```ignore
//! use irqsim_simulator::{render, ScenarioConfig};
//! use std::time::Duration;
//!
//! let scenario = ScenarioConfig::load("teclado.toml".as_ref())?;
//! let mut simulator = scenario.build_simulator(Duration::ZERO)?;
//! simulator.start_simulation();
//!
//! print!("{}", render::render_log(&simulator.state()));
//! ```

pub mod config;
pub mod render;
pub mod repl;
pub mod workload;

pub use config::{ScenarioConfig, ScenarioError};
pub use repl::{parse_line, ParseError, ReplCommand};
pub use workload::{RandomWorkload, WorkloadConfig, WorkloadGenerator};
