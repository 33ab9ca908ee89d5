//! Domain-specific identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interrupt identifier.
///
/// Allocated by the registry from a monotonically increasing counter, so an
/// id is never handed out twice, even after the interrupt it named has been
/// removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InterruptId(pub u64);

impl InterruptId {
    /// The first id a fresh registry hands out.
    pub const FIRST: Self = InterruptId(1);

    /// Get the id that follows this one.
    pub fn next(self) -> Self {
        InterruptId(self.0 + 1)
    }

    /// Get the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InterruptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "irq-{}", self.0)
    }
}

impl std::str::FromStr for InterruptId {
    type Err = std::num::ParseIntError;

    /// Accepts both the display form (`irq-3`) and a bare number (`3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("irq-").unwrap_or(s);
        raw.parse().map(InterruptId)
    }
}

/// Simulation event identifier.
///
/// Unique within the log of a single run; every run starts again from
/// [`EventId::FIRST`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// Id of the first event of every run.
    pub const FIRST: Self = EventId(0);

    /// Get the id that follows this one.
    pub fn next(self) -> Self {
        EventId(self.0 + 1)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evt-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_id_next() {
        assert_eq!(InterruptId::FIRST.next(), InterruptId(2));
        assert_eq!(InterruptId(41).next().as_u64(), 42);
    }

    #[test]
    fn test_interrupt_id_display_and_parse() {
        let id = InterruptId(7);
        assert_eq!(id.to_string(), "irq-7");
        assert_eq!("irq-7".parse::<InterruptId>().unwrap(), id);
        assert_eq!("7".parse::<InterruptId>().unwrap(), id);
        assert!("irq-".parse::<InterruptId>().is_err());
        assert!("seven".parse::<InterruptId>().is_err());
    }

    #[test]
    fn test_event_id_sequence() {
        let first = EventId::FIRST;
        assert_eq!(first.to_string(), "evt-0");
        assert_eq!(first.next(), EventId(1));
    }
}
