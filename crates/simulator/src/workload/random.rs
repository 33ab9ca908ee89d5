//! Random interrupt workload.

use crate::workload::WorkloadGenerator;
use irqsim_registry::RegistryConfig;
use irqsim_types::InterruptForm;

/// Device names handed out in order; later rounds get a numeric suffix.
const DEVICE_NAMES: [&str; 10] = [
    "Teclado",
    "Disco",
    "Red",
    "Reloj",
    "Ratón",
    "Impresora",
    "USB",
    "Audio",
    "DMA",
    "Sensor",
];

/// Generates interrupts with uniformly random duration and priority.
pub struct RandomWorkload {
    max_duration_ms: u64,
    max_priority: u32,
    /// How many interrupts have been generated so far.
    issued: usize,
}

impl RandomWorkload {
    /// Create a generator whose output passes the given limits.
    ///
    /// With bounds disabled, the default limits are used as ranges anyway.
    pub fn new(limits: &RegistryConfig) -> Self {
        let limits = if limits.enforce_bounds {
            limits.clone()
        } else {
            RegistryConfig::default()
        };
        Self {
            max_duration_ms: limits.max_duration_ms.max(1),
            max_priority: limits.max_priority.max(1),
            issued: 0,
        }
    }

    fn next_name(&mut self) -> String {
        let base = DEVICE_NAMES[self.issued % DEVICE_NAMES.len()];
        let round = self.issued / DEVICE_NAMES.len();
        self.issued += 1;

        if round == 0 {
            base.to_string()
        } else {
            format!("{} {}", base, round + 1)
        }
    }
}

impl WorkloadGenerator for RandomWorkload {
    fn generate_one(&mut self, rng: &mut impl rand::Rng) -> InterruptForm {
        let name = self.next_name();
        let duration_ms = rng.gen_range(1..=self.max_duration_ms);
        let priority = rng.gen_range(1..=self.max_priority);
        InterruptForm::new(name, duration_ms, priority)
    }
}
