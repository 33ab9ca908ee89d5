//! Read-only view of the simulator.

use im::Vector;
use irqsim_types::{Interrupt, SimulationEvent};
use serde::{Deserialize, Serialize};

/// Snapshot of everything a front end displays.
///
/// Owned data: changing a snapshot has no effect on the simulator. The log
/// shares structure with the simulator's copy, so taking a snapshot does not
/// copy every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Registered interrupts, highest priority first.
    pub interrupts: Vec<Interrupt>,
    /// Timeline of the current run. Empty when idle.
    pub log: Vector<SimulationEvent>,
    /// Index of the event being shown.
    pub cursor: usize,
    pub is_running: bool,
    pub is_paused: bool,
    /// Active interrupts, bottom first; the last entry is executing.
    pub active_stack: Vec<Interrupt>,
}

impl EngineState {
    /// Get the event under the cursor.
    pub fn current_event(&self) -> Option<&SimulationEvent> {
        self.log.get(self.cursor)
    }

    /// Get the executing interrupt, if any.
    pub fn executing(&self) -> Option<&Interrupt> {
        self.active_stack.last()
    }

    /// A run can be started when interrupts are configured and none is active.
    pub fn can_start(&self) -> bool {
        !self.interrupts.is_empty() && !self.is_running
    }

    /// Pausing only makes sense during a run.
    pub fn can_pause(&self) -> bool {
        self.is_running
    }

    /// Check if there is an event after the cursor.
    pub fn can_step_forward(&self) -> bool {
        self.cursor + 1 < self.log.len()
    }

    /// Check if there is an event before the cursor.
    pub fn can_step_back(&self) -> bool {
        self.cursor > 0
    }

    /// One-based step number and total, e.g. `(1, 6)` for "step 1 of 6".
    ///
    /// Returns `None` when there is no log.
    pub fn progress(&self) -> Option<(usize, usize)> {
        if self.log.is_empty() {
            None
        } else {
            Some((self.cursor + 1, self.log.len()))
        }
    }
}
