//! Per-kind event counts.

use irqsim_types::{EventKind, SimulationEvent};
use serde::{Deserialize, Serialize};

/// How many events of each kind a log contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSummary {
    pub starts: usize,
    pub preemptions: usize,
    pub resumes: usize,
    pub completions: usize,
}

impl LogSummary {
    /// Count the events of a log.
    pub fn of<'a>(events: impl IntoIterator<Item = &'a SimulationEvent>) -> Self {
        let mut summary = Self::default();
        for event in events {
            match event.kind {
                EventKind::Start => summary.starts += 1,
                EventKind::Interrupt => summary.preemptions += 1,
                EventKind::Resume => summary.resumes += 1,
                EventKind::Complete => summary.completions += 1,
            }
        }
        summary
    }

    /// Get the count for one kind.
    pub fn count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Start => self.starts,
            EventKind::Interrupt => self.preemptions,
            EventKind::Resume => self.resumes,
            EventKind::Complete => self.completions,
        }
    }

    /// Get the total number of events.
    pub fn total(&self) -> usize {
        self.starts + self.preemptions + self.resumes + self.completions
    }
}
