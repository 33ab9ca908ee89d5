//! Playback cursor and run flags.

use serde::{Deserialize, Serialize};

/// Position of the learner in the event log.
///
/// Always within `[0, len - 1]`, or 0 when the log is empty. Moves past
/// either end are no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playback {
    position: usize,
}

impl Playback {
    /// Create a cursor at the first event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Advance by one within a log of `len` events. Returns whether it moved.
    pub fn next(&mut self, len: usize) -> bool {
        if self.position + 1 < len {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Move back by one. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Pull the cursor back inside a log of `len` events.
    pub fn clamp(&mut self, len: usize) {
        self.position = self.position.min(len.saturating_sub(1));
    }

    /// Return to the first event.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Whether a run is active and whether it is paused.
///
/// Paused implies running: [`RunState::toggle_pause`] refuses while idle and
/// [`RunState::stop`] clears both flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    running: bool,
    paused: bool,
}

impl RunState {
    /// Check if a run is active.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Check if the active run is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Enter the running state, unpaused.
    pub fn start(&mut self) {
        self.running = true;
        self.paused = false;
    }

    /// Flip the pause flag. Returns `false` without changing anything if no
    /// run is active.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Return to idle.
    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
    }
}
