//! The interrupt registry.

use crate::RegistryConfig;
use indexmap::IndexMap;
use irqsim_types::{Interrupt, InterruptForm, InterruptId, ValidationError};
use std::time::Duration;
use tracing::{debug, warn};

/// Priority-ordered set of interrupt definitions.
///
/// Iteration order is always descending priority. Ties are broken by
/// registration order, which is the same as id order because ids come from a
/// monotonic counter. Updating an interrupt does not change its rank among
/// equal priorities.
#[derive(Debug, Clone)]
pub struct InterruptRegistry {
    config: RegistryConfig,
    /// Kept sorted after every mutation.
    interrupts: IndexMap<InterruptId, Interrupt>,
    /// Never decremented, so removed ids are not reused.
    next_id: InterruptId,
}

impl Default for InterruptRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl InterruptRegistry {
    /// Create an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            interrupts: IndexMap::new(),
            next_id: InterruptId::FIRST,
        }
    }

    /// Register a new interrupt.
    ///
    /// # Arguments
    ///
    /// * `form` - Name, duration and priority of the interrupt
    /// * `now` - Creation timestamp to record
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the form violates the configured
    /// limits. Nothing is inserted in that case and no id is consumed.
    pub fn add(
        &mut self,
        form: InterruptForm,
        now: Duration,
    ) -> Result<InterruptId, ValidationError> {
        if let Err(e) = self.config.validate(&form) {
            warn!(error = %e, name = %form.name, "Rejected interrupt definition");
            return Err(e);
        }

        let id = self.next_id;
        self.next_id = id.next();

        debug!(
            id = %id,
            name = %form.name,
            priority = form.priority,
            duration_ms = form.duration_ms,
            "Registered interrupt"
        );

        self.interrupts.insert(
            id,
            Interrupt {
                id,
                name: form.name,
                duration_ms: form.duration_ms,
                priority: form.priority,
                created_at: now,
            },
        );
        self.sort();
        Ok(id)
    }

    /// Replace the name, duration and priority of an interrupt.
    ///
    /// Returns `Ok(false)` if no interrupt has this id; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the form violates the configured
    /// limits. The interrupt is left untouched in that case.
    pub fn update(
        &mut self,
        id: InterruptId,
        form: InterruptForm,
    ) -> Result<bool, ValidationError> {
        if let Err(e) = self.config.validate(&form) {
            warn!(error = %e, id = %id, "Rejected interrupt update");
            return Err(e);
        }

        let Some(interrupt) = self.interrupts.get_mut(&id) else {
            debug!(id = %id, "Update for unknown interrupt ignored");
            return Ok(false);
        };

        debug!(
            id = %id,
            old_priority = interrupt.priority,
            new_priority = form.priority,
            "Updated interrupt"
        );
        interrupt.apply(form);
        self.sort();
        Ok(true)
    }

    /// Remove an interrupt. Returns whether one was removed.
    pub fn remove(&mut self, id: InterruptId) -> bool {
        // shift_remove keeps the remaining entries in order.
        let removed = self.interrupts.shift_remove(&id).is_some();
        if removed {
            debug!(id = %id, "Removed interrupt");
        } else {
            debug!(id = %id, "Remove for unknown interrupt ignored");
        }
        removed
    }

    /// Look up an interrupt by id.
    pub fn get(&self, id: InterruptId) -> Option<&Interrupt> {
        self.interrupts.get(&id)
    }

    /// Check if an interrupt is registered.
    pub fn contains(&self, id: InterruptId) -> bool {
        self.interrupts.contains_key(&id)
    }

    /// Iterate in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Interrupt> {
        self.interrupts.values()
    }

    /// Copy the interrupts out, in priority order.
    pub fn snapshot(&self) -> Vec<Interrupt> {
        self.interrupts.values().cloned().collect()
    }

    /// Get the number of registered interrupts.
    pub fn len(&self) -> usize {
        self.interrupts.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.interrupts.is_empty()
    }

    fn sort(&mut self) {
        self.interrupts
            .sort_by(|_, a, _, b| b.priority.cmp(&a.priority).then(a.id.cmp(&b.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irqsim_test_helpers::form;
    use tracing_test::traced_test;

    fn names(registry: &InterruptRegistry) -> Vec<&str> {
        registry.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_orders_by_priority_descending() {
        let mut registry = InterruptRegistry::default();
        registry.add(form("Disco", 50, 2), Duration::ZERO).unwrap();
        registry.add(form("Teclado", 100, 5), Duration::ZERO).unwrap();
        registry.add(form("Red", 20, 3), Duration::ZERO).unwrap();

        assert_eq!(names(&registry), vec!["Teclado", "Red", "Disco"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut registry = InterruptRegistry::default();
        registry.add(form("A", 10, 5), Duration::ZERO).unwrap();
        registry.add(form("B", 10, 3), Duration::ZERO).unwrap();
        registry.add(form("C", 10, 5), Duration::ZERO).unwrap();

        assert_eq!(names(&registry), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_update_keeps_original_rank_among_ties() {
        let mut registry = InterruptRegistry::default();
        let a = registry.add(form("A", 10, 5), Duration::ZERO).unwrap();
        let b = registry.add(form("B", 10, 3), Duration::ZERO).unwrap();
        registry.add(form("C", 10, 5), Duration::ZERO).unwrap();

        // B joins the priority-5 group; it was added before C, so it ranks before C.
        assert_eq!(registry.update(b, form("B", 10, 5)), Ok(true));
        assert_eq!(names(&registry), vec!["A", "B", "C"]);

        // A drops to the bottom.
        assert_eq!(registry.update(a, form("A", 10, 1)), Ok(true));
        assert_eq!(names(&registry), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_update_preserves_identity() {
        let mut registry = InterruptRegistry::default();
        let id = registry
            .add(form("Teclado", 100, 5), Duration::from_millis(42))
            .unwrap();

        registry.update(id, form("Keyboard", 80, 7)).unwrap();

        let interrupt = registry.get(id).unwrap();
        assert_eq!(interrupt.id, id);
        assert_eq!(interrupt.name, "Keyboard");
        assert_eq!(interrupt.duration_ms, 80);
        assert_eq!(interrupt.priority, 7);
        assert_eq!(interrupt.created_at, Duration::from_millis(42));
    }

    #[traced_test]
    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut registry = InterruptRegistry::default();
        registry.add(form("Teclado", 100, 5), Duration::ZERO).unwrap();
        let before = registry.snapshot();

        assert_eq!(registry.update(InterruptId(99), form("X", 1, 1)), Ok(false));
        assert!(!registry.remove(InterruptId(99)));
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn test_remove() {
        let mut registry = InterruptRegistry::default();
        let a = registry.add(form("A", 10, 5), Duration::ZERO).unwrap();
        registry.add(form("B", 10, 3), Duration::ZERO).unwrap();

        assert!(registry.remove(a));
        assert!(!registry.contains(a));
        assert_eq!(names(&registry), vec!["B"]);
        assert!(!registry.remove(a));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut registry = InterruptRegistry::default();
        let a = registry.add(form("A", 10, 5), Duration::ZERO).unwrap();
        registry.remove(a);
        let b = registry.add(form("B", 10, 5), Duration::ZERO).unwrap();

        assert_ne!(a, b);
        assert!(b > a);
    }

    #[traced_test]
    #[test]
    fn test_invalid_add_is_rejected() {
        let mut registry = InterruptRegistry::default();

        assert_eq!(
            registry.add(form("", 10, 5), Duration::ZERO),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            registry.add(form("A", 10, 11), Duration::ZERO),
            Err(ValidationError::PriorityOutOfRange { value: 11, max: 10 })
        );
        assert!(registry.is_empty());
        assert!(logs_contain("Rejected interrupt definition"));

        // Rejections do not burn ids.
        let id = registry.add(form("A", 10, 5), Duration::ZERO).unwrap();
        assert_eq!(id, InterruptId::FIRST);
    }

    #[test]
    fn test_invalid_update_leaves_interrupt_untouched() {
        let mut registry = InterruptRegistry::default();
        let id = registry.add(form("A", 10, 5), Duration::ZERO).unwrap();

        assert_eq!(registry.update(id, form("A", 0, 5)), Err(ValidationError::ZeroDuration));
        assert_eq!(registry.get(id).unwrap().duration_ms, 10);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut registry = InterruptRegistry::default();
        let id = registry.add(form("A", 10, 5), Duration::ZERO).unwrap();

        let mut snapshot = registry.snapshot();
        snapshot[0].name = "mutated".to_string();

        assert_eq!(registry.get(id).unwrap().name, "A");
    }
}
