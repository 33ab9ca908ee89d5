//! Interrupt registry.
//!
//! Holds the interrupt definitions a learner has configured, always ordered
//! by priority (highest first). Equal priorities keep the order in which the
//! interrupts were first added.
//!
//! # Components
//!
//! - [`InterruptRegistry`] - The ordered collection and its add/update/remove operations
//! - [`RegistryConfig`] - Input limits enforced on every add and update

mod config;
mod registry;

pub use config::RegistryConfig;
pub use registry::InterruptRegistry;
