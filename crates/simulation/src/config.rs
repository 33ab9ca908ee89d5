//! Simulator configuration.

use irqsim_registry::RegistryConfig;
use serde::{Deserialize, Serialize};

/// Configuration for an interrupt simulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Limits applied to interrupt definitions.
    pub registry: RegistryConfig,
}

impl SimulatorConfig {
    /// Create a configuration with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry limits.
    pub fn with_registry(mut self, registry: RegistryConfig) -> Self {
        self.registry = registry;
        self
    }

    /// Disable the upper limits on duration and priority.
    pub fn unbounded() -> Self {
        Self::default().with_registry(RegistryConfig::unbounded())
    }
}
