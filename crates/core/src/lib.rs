//! Core abstractions shared by the simulator and its front ends.
//!
//! Every operation a presentation layer may perform is a [`Command`]. A
//! [`StateMachine`] applies commands synchronously and reports what
//! happened as a [`CommandOutcome`]; the caller re-reads state afterwards.

mod command;
mod outcome;
mod traits;

pub use command::Command;
pub use outcome::CommandOutcome;
pub use traits::StateMachine;
