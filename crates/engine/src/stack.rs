//! The active-interrupt stack.

use irqsim_types::Interrupt;
use serde::{Deserialize, Serialize};

/// LIFO of interrupts currently being serviced.
///
/// The top entry is the one executing; everything below it has been
/// preempted. Entries are snapshots, detached from the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveStack {
    frames: Vec<Interrupt>,
}

impl ActiveStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an interrupt on top.
    pub fn push(&mut self, interrupt: Interrupt) {
        self.frames.push(interrupt);
    }

    /// Pop the executing interrupt.
    pub fn pop(&mut self) -> Option<Interrupt> {
        self.frames.pop()
    }

    /// Get the executing interrupt.
    pub fn top(&self) -> Option<&Interrupt> {
        self.frames.last()
    }

    /// Check if an arriving interrupt would preempt the executing one.
    ///
    /// Only the top entry is compared, and only a strictly higher priority
    /// preempts.
    pub fn would_preempt(&self, incoming: &Interrupt) -> bool {
        self.top()
            .is_some_and(|current| incoming.priority > current.priority)
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Interrupt> {
        self.frames.iter()
    }

    /// Get the number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Copy the frames out, bottom first.
    pub fn to_vec(&self) -> Vec<Interrupt> {
        self.frames.clone()
    }
}

impl FromIterator<Interrupt> for ActiveStack {
    fn from_iter<T: IntoIterator<Item = Interrupt>>(iter: T) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irqsim_test_helpers::interrupt;

    #[test]
    fn test_lifo_order() {
        let mut stack = ActiveStack::new();
        stack.push(interrupt(1, "A", 10, 1));
        stack.push(interrupt(2, "B", 10, 2));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().map(|i| i.name.as_str()), Some("B"));
        assert_eq!(stack.pop().map(|i| i.name), Some("B".to_string()));
        assert_eq!(stack.top().map(|i| i.name.as_str()), Some("A"));
        stack.pop();
        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_would_preempt_is_strict() {
        let stack: ActiveStack = [interrupt(1, "A", 10, 5)].into_iter().collect();

        assert!(stack.would_preempt(&interrupt(2, "B", 10, 6)));
        assert!(!stack.would_preempt(&interrupt(2, "B", 10, 5)));
        assert!(!stack.would_preempt(&interrupt(2, "B", 10, 4)));
    }

    #[test]
    fn test_would_preempt_checks_only_top() {
        // Top has priority 1; the frame below has 9. Only the top matters.
        let stack: ActiveStack = [interrupt(1, "Deep", 10, 9), interrupt(2, "Top", 10, 1)]
            .into_iter()
            .collect();

        assert!(stack.would_preempt(&interrupt(3, "New", 10, 2)));
    }

    #[test]
    fn test_empty_stack_never_preempts() {
        assert!(!ActiveStack::new().would_preempt(&interrupt(1, "A", 10, 10)));
    }
}
