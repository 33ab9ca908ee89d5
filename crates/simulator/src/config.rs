//! Scenario files.
//!
//! A scenario is a TOML document listing interrupt definitions and,
//! optionally, the registry limits to load them under:
//!
//! ```toml
//! [registry]
//! max_priority = 10
//!
//! [[interrupts]]
//! name = "Teclado"
//! duration_ms = 100
//! priority = 5
//! ```

use irqsim_core::StateMachine;
use irqsim_registry::RegistryConfig;
use irqsim_simulation::{InterruptSimulator, SimulatorConfig};
use irqsim_types::{InterruptForm, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors loading or applying a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Scenario file could not be read.
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario file is not valid TOML or has the wrong shape.
    #[error("Invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scenario could not be written as TOML.
    #[error("Failed to encode scenario: {0}")]
    Encode(#[from] toml::ser::Error),

    /// An interrupt definition was rejected by the registry.
    #[error("Interrupt #{index} ({name:?}) rejected: {source}")]
    Invalid {
        index: usize,
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Interrupt definitions plus the limits to load them under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Registry limits.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Interrupts in registration order.
    #[serde(default)]
    pub interrupts: Vec<InterruptForm>,
}

impl ScenarioConfig {
    /// Create an empty scenario with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry limits.
    pub fn with_registry(mut self, registry: RegistryConfig) -> Self {
        self.registry = registry;
        self
    }

    /// Append an interrupt.
    pub fn with_interrupt(mut self, form: InterruptForm) -> Self {
        self.interrupts.push(form);
        self
    }

    /// Parse a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            interrupts = scenario.interrupts.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    /// Encode the scenario as TOML.
    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build a simulator with every interrupt of the scenario registered.
    ///
    /// Interrupts are registered in file order, all stamped with `now`.
    pub fn build_simulator(&self, now: Duration) -> Result<InterruptSimulator, ScenarioError> {
        let config = SimulatorConfig::new().with_registry(self.registry.clone());
        let mut simulator = InterruptSimulator::new(config);
        simulator.set_time(now);

        for (index, form) in self.interrupts.iter().enumerate() {
            simulator
                .add_interrupt(form.name.clone(), form.duration_ms, form.priority)
                .map_err(|source| ScenarioError::Invalid {
                    index,
                    name: form.name.clone(),
                    source,
                })?;
        }
        Ok(simulator)
    }
}
