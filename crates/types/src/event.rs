//! Simulation events.

use crate::{EventId, Interrupt, InterruptId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Display name of the background context every run starts and ends with.
pub const MAIN_PROCESS_NAME: &str = "Proceso Principal";

/// What happened at a step of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A context began executing.
    Start,
    /// The executing context was preempted.
    Interrupt,
    /// A preempted context continued.
    Resume,
    /// A context finished.
    Complete,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [EventKind; 4] = [
        EventKind::Start,
        EventKind::Interrupt,
        EventKind::Resume,
        EventKind::Complete,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "start",
            EventKind::Interrupt => "interrupt",
            EventKind::Resume => "resume",
            EventKind::Complete => "complete",
        }
    }

    /// Label shown to the learner next to each step.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Start => "INICIO",
            EventKind::Interrupt => "INTERRUPCIÓN",
            EventKind::Resume => "REANUDACIÓN",
            EventKind::Complete => "COMPLETADO",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The context an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSubject {
    /// The main process, which is not a registered interrupt.
    Main,
    /// A registered interrupt.
    Interrupt(InterruptId),
}

impl EventSubject {
    /// Check if this is the main process.
    pub fn is_main(&self) -> bool {
        matches!(self, EventSubject::Main)
    }

    /// Get the interrupt id, if the subject is an interrupt.
    pub fn interrupt_id(&self) -> Option<InterruptId> {
        match self {
            EventSubject::Main => None,
            EventSubject::Interrupt(id) => Some(*id),
        }
    }
}

impl fmt::Display for EventSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSubject::Main => f.write_str("main"),
            EventSubject::Interrupt(id) => write!(f, "{}", id),
        }
    }
}

/// One step of a simulation timeline.
///
/// The subject's name is copied in at generation time, so renaming an
/// interrupt afterwards does not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub id: EventId,
    /// When the event was generated. Informational.
    pub timestamp: Duration,
    pub kind: EventKind,
    pub subject: EventSubject,
    pub subject_name: String,
    pub message: String,
}

impl SimulationEvent {
    /// Main process started.
    pub fn main_start(id: EventId, timestamp: Duration) -> Self {
        Self::for_main(id, timestamp, EventKind::Start, "Iniciando proceso principal")
    }

    /// Main process finished.
    pub fn main_complete(id: EventId, timestamp: Duration) -> Self {
        Self::for_main(id, timestamp, EventKind::Complete, "Proceso principal completado")
    }

    /// Interrupt began executing.
    pub fn start(id: EventId, timestamp: Duration, interrupt: &Interrupt) -> Self {
        let message = format!(
            "Iniciando {} (prioridad {}, duración {}ms)",
            interrupt.name, interrupt.priority, interrupt.duration_ms
        );
        Self::for_interrupt(id, timestamp, EventKind::Start, interrupt, message)
    }

    /// Interrupt was preempted by a higher-priority arrival.
    pub fn preempted(id: EventId, timestamp: Duration, interrupt: &Interrupt) -> Self {
        let message = format!(
            "Interrumpiendo {} (prioridad {})",
            interrupt.name, interrupt.priority
        );
        Self::for_interrupt(id, timestamp, EventKind::Interrupt, interrupt, message)
    }

    /// Interrupt continued after the context above it finished.
    pub fn resumed(id: EventId, timestamp: Duration, interrupt: &Interrupt) -> Self {
        let message = format!("Resumiendo {}", interrupt.name);
        Self::for_interrupt(id, timestamp, EventKind::Resume, interrupt, message)
    }

    /// Interrupt finished.
    pub fn completed(id: EventId, timestamp: Duration, interrupt: &Interrupt) -> Self {
        let message = format!("Completando {}", interrupt.name);
        Self::for_interrupt(id, timestamp, EventKind::Complete, interrupt, message)
    }

    fn for_main(id: EventId, timestamp: Duration, kind: EventKind, message: &str) -> Self {
        Self {
            id,
            timestamp,
            kind,
            subject: EventSubject::Main,
            subject_name: MAIN_PROCESS_NAME.to_string(),
            message: message.to_string(),
        }
    }

    fn for_interrupt(
        id: EventId,
        timestamp: Duration,
        kind: EventKind,
        interrupt: &Interrupt,
        message: String,
    ) -> Self {
        Self {
            id,
            timestamp,
            kind,
            subject: EventSubject::Interrupt(interrupt.id),
            subject_name: interrupt.name.clone(),
            message,
        }
    }
}
