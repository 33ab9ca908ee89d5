//! Interrupt simulator state machine.
//!
//! This crate ties the registry and the engine together behind a single
//! stateful service, [`InterruptSimulator`]. One instance is created per
//! session and owned by the front end, which sends it commands and re-reads
//! [`EngineState`] after each one.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  InterruptSimulator                      │
//! │                                                          │
//! │  ┌───────────────────┐   start   ┌────────────────────┐  │
//! │  │ InterruptRegistry │──────────▶│ irqsim_engine::    │  │
//! │  │ (priority order)  │ snapshot  │ simulate()         │  │
//! │  └───────────────────┘           └─────────┬──────────┘  │
//! │                                            │ log         │
//! │                                            ▼             │
//! │  ┌───────────────────┐           ┌────────────────────┐  │
//! │  │ RunState          │           │ Playback cursor    │  │
//! │  │ running / paused  │           │ next / previous    │  │
//! │  └───────────────────┘           └────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//!                          │ state()
//!                          ▼
//!                 EngineState (owned snapshot)
//! ```

mod config;
mod playback;
mod simulator;
mod state;

pub use config::SimulatorConfig;
pub use playback::{Playback, RunState};
pub use simulator::InterruptSimulator;
pub use state::EngineState;
