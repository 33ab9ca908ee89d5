//! Command results.

use irqsim_types::InterruptId;
use serde::{Deserialize, Serialize};

/// What a successfully handled command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    /// A new interrupt was registered under this id.
    Added(InterruptId),

    /// State changed.
    Applied,

    /// Nothing changed: unknown id, cursor at a boundary, or pause while idle.
    Ignored,
}

impl CommandOutcome {
    /// Get the id of a newly registered interrupt.
    pub fn added_id(&self) -> Option<InterruptId> {
        match self {
            CommandOutcome::Added(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_id() {
        assert_eq!(
            CommandOutcome::Added(InterruptId(3)).added_id(),
            Some(InterruptId(3))
        );
        assert_eq!(CommandOutcome::Applied.added_id(), None);
        assert_eq!(CommandOutcome::Ignored.added_id(), None);
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(
            serde_json::to_value(CommandOutcome::Added(InterruptId(3))).unwrap(),
            serde_json::json!({"added": 3})
        );
        assert_eq!(
            serde_json::to_value(CommandOutcome::Ignored).unwrap(),
            serde_json::json!("ignored")
        );
        assert_eq!(
            serde_json::from_str::<CommandOutcome>(r#""applied""#).unwrap(),
            CommandOutcome::Applied
        );
    }
}
