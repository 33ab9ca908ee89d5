//! Interrupt definitions.

use crate::{InterruptId, ValidationError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A named interrupt source with a priority and a nominal duration.
///
/// `duration_ms` is descriptive only. The simulator never waits for it and
/// it has no influence on event ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interrupt {
    /// Registry-assigned identifier. Immutable.
    pub id: InterruptId,
    /// Display name.
    pub name: String,
    /// Nominal service time in milliseconds.
    pub duration_ms: u64,
    /// Urgency; higher preempts lower.
    pub priority: u32,
    /// When the interrupt was registered. Informational, immutable.
    pub created_at: Duration,
}

impl Interrupt {
    /// Overwrite the mutable attributes from a form.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, form: InterruptForm) {
        self.name = form.name;
        self.duration_ms = form.duration_ms;
        self.priority = form.priority;
    }

    /// Get the mutable attributes as a form.
    pub fn to_form(&self) -> InterruptForm {
        InterruptForm {
            name: self.name.clone(),
            duration_ms: self.duration_ms,
            priority: self.priority,
        }
    }
}

/// User-supplied attributes of an interrupt, before it is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterruptForm {
    pub name: String,
    pub duration_ms: u64,
    pub priority: u32,
}

impl InterruptForm {
    /// Create a new form.
    pub fn new(name: impl Into<String>, duration_ms: u64, priority: u32) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            priority,
        }
    }

    /// Check the constraints that hold regardless of configured limits:
    /// non-empty name, positive duration and positive priority.
    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.duration_ms == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if self.priority == 0 {
            return Err(ValidationError::ZeroPriority);
        }
        Ok(())
    }
}
