//! Inbound command types.

use irqsim_types::{InterruptForm, InterruptId};
use serde::{Deserialize, Serialize};

/// Commands accepted by the simulator.
///
/// These are the only ways a front end can change simulator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // ═══════════════════════════════════════════════════════════════════════
    // Registry
    // ═══════════════════════════════════════════════════════════════════════
    /// Register a new interrupt.
    AddInterrupt(InterruptForm),

    /// Replace the attributes of an existing interrupt.
    UpdateInterrupt { id: InterruptId, form: InterruptForm },

    /// Remove an interrupt.
    RemoveInterrupt { id: InterruptId },

    // ═══════════════════════════════════════════════════════════════════════
    // Run control
    // ═══════════════════════════════════════════════════════════════════════
    /// Snapshot the registry and generate a fresh event log.
    StartSimulation,

    /// Toggle the pause flag of a running simulation.
    PauseSimulation,

    /// Discard the current run.
    Reset,

    // ═══════════════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════════════
    /// Advance the cursor by one event.
    NextStep,

    /// Move the cursor back by one event.
    PreviousStep,
}

impl Command {
    /// Get a human-readable name for this command type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Command::AddInterrupt(_) => "AddInterrupt",
            Command::UpdateInterrupt { .. } => "UpdateInterrupt",
            Command::RemoveInterrupt { .. } => "RemoveInterrupt",
            Command::StartSimulation => "StartSimulation",
            Command::PauseSimulation => "PauseSimulation",
            Command::Reset => "Reset",
            Command::NextStep => "NextStep",
            Command::PreviousStep => "PreviousStep",
        }
    }

    /// Check if this command edits the interrupt registry.
    pub fn is_registry(&self) -> bool {
        matches!(
            self,
            Command::AddInterrupt(_)
                | Command::UpdateInterrupt { .. }
                | Command::RemoveInterrupt { .. }
        )
    }

    /// Check if this command starts, pauses or resets a run.
    pub fn is_run_control(&self) -> bool {
        matches!(
            self,
            Command::StartSimulation | Command::PauseSimulation | Command::Reset
        )
    }

    /// Check if this command moves the playback cursor.
    pub fn is_playback(&self) -> bool {
        matches!(self, Command::NextStep | Command::PreviousStep)
    }
}
