//! Event-log generation for preemptive interrupt handling.
//!
//! Turns a snapshot of interrupt definitions into the ordered timeline a
//! learner steps through. Generation is synchronous and deterministic: the
//! same snapshot and timestamp always give the same log.
//!
//! # Algorithm
//!
//! ```text
//! start(main)
//! for I in interrupts (priority desc, ties in registration order):
//!     if stack.top is lower priority than I  → interrupt(top)
//!     push I                                 → start(I)
//!                                            → complete(I)
//!     pop I
//!     if stack not empty                     → resume(top)
//! complete(main)
//! ```
//!
//! Each interrupt completes before the next one is considered, so a run
//! that starts with an empty stack never preempts. A generator seeded with
//! a non-empty stack shows the preemption and resume paths.

mod generator;
mod stack;
mod summary;

pub use generator::{simulate, EventGenerator, SimulationOutput};
pub use stack::ActiveStack;
pub use summary::LogSummary;
