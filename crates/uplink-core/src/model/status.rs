use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CatalogError;

/// Dispatch status of a command instance
///
/// The status set is closed and the pipeline is one-way:
///
/// ```text
/// PENDING ──► SENT ──► ACKNOWLEDGED
///    │          │
///    └──────────┴────► FAILED
/// ```
///
/// `ACKNOWLEDGED` and `FAILED` are terminal. Nothing returns to `PENDING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandStatus {
    /// Created and queued, not yet handed to the uplink
    #[default]
    Pending,
    /// Handed to the uplink, awaiting an outcome from the on-board computer
    Sent,
    /// Receipt confirmed by the on-board computer
    Acknowledged,
    /// Dispatch or execution failed
    Failed,
}

impl CommandStatus {
    pub const ALL: [CommandStatus; 4] = [
        CommandStatus::Pending,
        CommandStatus::Sent,
        CommandStatus::Acknowledged,
        CommandStatus::Failed,
    ];

    /// Persisted/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandStatus::Pending => "PENDING",
            CommandStatus::Sent => "SENT",
            CommandStatus::Acknowledged => "ACKNOWLEDGED",
            CommandStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CommandStatus::Acknowledged | CommandStatus::Failed)
    }

    /// Whether the state machine permits moving from `self` to `next`
    pub fn can_transition_to(&self, next: CommandStatus) -> bool {
        matches!(
            (self, next),
            (CommandStatus::Pending, CommandStatus::Sent)
                | (CommandStatus::Pending, CommandStatus::Failed)
                | (CommandStatus::Sent, CommandStatus::Acknowledged)
                | (CommandStatus::Sent, CommandStatus::Failed)
        )
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandStatus {
    type Err = CatalogError;

    /// Case-insensitive parse of the persisted representation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownStatus {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(CommandStatus::default(), CommandStatus::Pending);
    }

    #[test]
    fn test_nothing_returns_to_pending() {
        for from in CommandStatus::ALL {
            assert!(!from.can_transition_to(CommandStatus::Pending), "{from}");
        }
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for from in CommandStatus::ALL.into_iter().filter(|s| s.is_terminal()) {
            for to in CommandStatus::ALL {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_self_transition_rejected() {
        for status in CommandStatus::ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_terminal_reachable_from_pending() {
        assert!(CommandStatus::Pending.can_transition_to(CommandStatus::Failed));
        assert!(CommandStatus::Pending.can_transition_to(CommandStatus::Sent));
        assert!(CommandStatus::Sent.can_transition_to(CommandStatus::Acknowledged));
    }

    #[test]
    fn test_parse_round_trip() {
        for status in CommandStatus::ALL {
            assert_eq!(status.as_str().parse::<CommandStatus>().unwrap(), status);
        }
        assert_eq!("sent".parse::<CommandStatus>().unwrap(), CommandStatus::Sent);
        assert!(matches!(
            "QUEUED".parse::<CommandStatus>(),
            Err(CatalogError::UnknownStatus { .. })
        ));
    }

    #[test]
    fn test_serde_uses_upper_case() {
        let json = serde_json::to_string(&CommandStatus::Acknowledged).unwrap();
        assert_eq!(json, "\"ACKNOWLEDGED\"");
    }
}
