//! Configuration for the interrupt registry.

use irqsim_types::{InterruptForm, ValidationError};
use serde::{Deserialize, Serialize};

/// Input limits for interrupt definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Longest accepted duration, in milliseconds.
    pub max_duration_ms: u64,

    /// Highest accepted priority.
    pub max_priority: u32,

    /// Whether the upper limits are enforced.
    ///
    /// When disabled, only the non-empty name and positive duration/priority
    /// checks apply.
    pub enforce_bounds: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_duration_ms: 5000,
            max_priority: 10,
            enforce_bounds: true,
        }
    }
}

impl RegistryConfig {
    /// Create a config with only the basic checks.
    pub fn unbounded() -> Self {
        Self {
            enforce_bounds: false,
            ..Default::default()
        }
    }

    /// Set the longest accepted duration.
    pub fn with_max_duration_ms(mut self, max_duration_ms: u64) -> Self {
        self.max_duration_ms = max_duration_ms;
        self
    }

    /// Set the highest accepted priority.
    pub fn with_max_priority(mut self, max_priority: u32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Check a form against these limits.
    pub fn validate(&self, form: &InterruptForm) -> Result<(), ValidationError> {
        form.validate_basic()?;

        if !self.enforce_bounds {
            return Ok(());
        }
        if form.duration_ms > self.max_duration_ms {
            return Err(ValidationError::DurationOutOfRange {
                value: form.duration_ms,
                max: self.max_duration_ms,
            });
        }
        if form.priority > self.max_priority {
            return Err(ValidationError::PriorityOutOfRange {
                value: form.priority,
                max: self.max_priority,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = RegistryConfig::default();

        assert!(config.validate(&InterruptForm::new("Reloj", 5000, 10)).is_ok());
        assert_eq!(
            config.validate(&InterruptForm::new("Reloj", 5001, 10)),
            Err(ValidationError::DurationOutOfRange {
                value: 5001,
                max: 5000
            })
        );
        assert_eq!(
            config.validate(&InterruptForm::new("Reloj", 10, 11)),
            Err(ValidationError::PriorityOutOfRange { value: 11, max: 10 })
        );
    }

    #[test]
    fn test_basic_checks_run_before_bounds() {
        let config = RegistryConfig::default();
        assert_eq!(
            config.validate(&InterruptForm::new("", 9999, 99)),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_unbounded_still_rejects_zero() {
        let config = RegistryConfig::unbounded();

        assert!(config.validate(&InterruptForm::new("Red", 60_000, 200)).is_ok());
        assert_eq!(
            config.validate(&InterruptForm::new("Red", 0, 200)),
            Err(ValidationError::ZeroDuration)
        );
    }

    #[test]
    fn test_builder() {
        let config = RegistryConfig::default()
            .with_max_duration_ms(100)
            .with_max_priority(3);
        assert!(config.validate(&InterruptForm::new("A", 100, 3)).is_ok());
        assert!(config.validate(&InterruptForm::new("A", 101, 3)).is_err());
        assert!(config.validate(&InterruptForm::new("A", 100, 4)).is_err());
    }
}
