//! Core types for the interrupt simulator.
//!
//! Everything here is plain data: identifiers, interrupt definitions,
//! simulation events and the validation error shared by every crate that
//! accepts user input.

mod error;
mod event;
mod identifiers;
mod interrupt;

pub use error::ValidationError;
pub use event::{EventKind, EventSubject, SimulationEvent, MAIN_PROCESS_NAME};
pub use identifiers::{EventId, InterruptId};
pub use interrupt::{Interrupt, InterruptForm};
