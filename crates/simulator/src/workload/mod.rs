//! Workload generation for demo scenarios.
//!
//! Produces interrupt definitions from a seeded RNG, so the same seed always
//! yields the same scenario.

mod random;

pub use random::RandomWorkload;

use crate::config::ScenarioConfig;
use irqsim_registry::RegistryConfig;
use irqsim_types::InterruptForm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Trait for generating interrupt definitions.
pub trait WorkloadGenerator {
    /// Generate a single interrupt definition.
    fn generate_one(&mut self, rng: &mut impl rand::Rng) -> InterruptForm;

    /// Generate `count` interrupt definitions.
    fn generate_batch(&mut self, count: usize, rng: &mut impl rand::Rng) -> Vec<InterruptForm> {
        (0..count).map(|_| self.generate_one(&mut *rng)).collect()
    }
}

/// Settings for a generated scenario.
#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    /// Number of interrupts to generate.
    pub count: usize,

    /// Random seed for deterministic generation.
    pub seed: u64,

    /// Limits the generated values stay within.
    pub registry: RegistryConfig,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            seed: 12345,
            registry: RegistryConfig::default(),
        }
    }
}

impl WorkloadConfig {
    /// Set the number of interrupts.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the limits.
    pub fn with_registry(mut self, registry: RegistryConfig) -> Self {
        self.registry = registry;
        self
    }

    /// Generate a scenario.
    pub fn generate(&self) -> ScenarioConfig {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut workload = RandomWorkload::new(&self.registry);

        ScenarioConfig {
            registry: self.registry.clone(),
            interrupts: workload.generate_batch(self.count, &mut rng),
        }
    }
}
