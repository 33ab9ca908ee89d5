//! Shared fixtures for interrupt simulator tests.

use irqsim_types::{Interrupt, InterruptForm, InterruptId};
use std::time::Duration;

/// Build an interrupt form.
pub fn form(name: &str, duration_ms: u64, priority: u32) -> InterruptForm {
    InterruptForm::new(name, duration_ms, priority)
}

/// Build a registered interrupt directly, bypassing the registry.
pub fn interrupt(id: u64, name: &str, duration_ms: u64, priority: u32) -> Interrupt {
    Interrupt {
        id: InterruptId(id),
        name: name.to_string(),
        duration_ms,
        priority,
        created_at: Duration::ZERO,
    }
}

/// Keyboard at priority 5 and disk at priority 2, in that registration order.
pub fn keyboard_and_disk() -> Vec<InterruptForm> {
    vec![form("Teclado", 100, 5), form("Disco", 50, 2)]
}

/// Priorities `[5, 3, 5]` named `A, B, C`; registry order must be `A, C, B`.
pub fn tied_priorities() -> Vec<InterruptForm> {
    vec![form("A", 10, 5), form("B", 10, 3), form("C", 10, 5)]
}

/// A fixed point in time for deterministic timestamps.
pub fn fixed_time() -> Duration {
    Duration::from_secs(1_700_000_000)
}
