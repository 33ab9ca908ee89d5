//! Core traits for state machines.

use crate::{Command, CommandOutcome};
use irqsim_types::ValidationError;
use std::time::Duration;

/// A state machine that processes commands.
///
/// The simulator is implemented as a state machine that is:
///
/// - **Synchronous**: No async, no `.await`
/// - **Deterministic**: Same state + command + time = same result
/// - **Pure-ish**: Mutates self, but performs no I/O
///
/// # Example
///
/// ```ignore
/// let mut simulator = InterruptSimulator::new(SimulatorConfig::default());
/// simulator.set_time(wall_clock());
///
/// let outcome = simulator.handle(Command::AddInterrupt(form))?;
/// simulator.handle(Command::StartSimulation)?;
///
/// // Re-read state after every command.
/// render(&simulator.state());
/// ```
pub trait StateMachine {
    /// Apply a command.
    ///
    /// # Guarantees
    ///
    /// - **Synchronous**: This method never blocks or awaits
    /// - **Atomic**: On `Err`, state is unchanged
    /// - **No I/O**: Rendering is left to the caller
    ///
    /// # Errors
    ///
    /// Only registry commands with invalid attributes fail. Unknown ids and
    /// out-of-range cursor moves report [`CommandOutcome::Ignored`].
    fn handle(&mut self, command: Command) -> Result<CommandOutcome, ValidationError>;

    /// Set the current time.
    ///
    /// Called by the runner before each `handle()` call. The value stamps
    /// new interrupts and generated events; it never drives control flow.
    fn set_time(&mut self, now: Duration);

    /// Get the current time.
    ///
    /// Returns the time that was last set via `set_time()`.
    fn now(&self) -> Duration;
}
