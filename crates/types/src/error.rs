//! Error types for interrupt definitions.

use thiserror::Error;

/// An interrupt definition was rejected.
///
/// This is the only error kind the simulator surfaces: lookups of unknown
/// ids are ignored rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or only whitespace.
    #[error("Interrupt name must not be empty")]
    EmptyName,

    /// Duration must be at least one millisecond.
    #[error("Interrupt duration must be positive")]
    ZeroDuration,

    /// Priority must be at least one.
    #[error("Interrupt priority must be positive")]
    ZeroPriority,

    /// Duration exceeds the configured limit.
    #[error("Interrupt duration {value}ms exceeds maximum of {max}ms")]
    DurationOutOfRange { value: u64, max: u64 },

    /// Priority exceeds the configured limit.
    #[error("Interrupt priority {value} exceeds maximum of {max}")]
    PriorityOutOfRange { value: u32, max: u32 },
}
