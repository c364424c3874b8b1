//! Edit-session state machine.

use serde::{Deserialize, Serialize};

/// Tracks which single holding, if any, is currently being edited.
///
/// A UI mode toggled for the lifetime of the session; there is no terminal
/// state. At most one holding is ever tracked: starting an edit while one is
/// already in progress replaces the tracked id (last-start-wins).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditSession {
    /// No holding is being edited.
    #[default]
    Idle,
    /// Exactly one holding, identified by id, is being edited.
    Editing { holding_id: String },
}

impl EditSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Begins editing the given holding, replacing any edit in progress.
    pub fn start(&mut self, holding_id: impl Into<String>) {
        *self = EditSession::Editing {
            holding_id: holding_id.into(),
        };
    }

    /// Abandons the edit in progress, if any.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Ends the edit after a successful update of the given holding.
    ///
    /// Only clears the session when `holding_id` matches the tracked id;
    /// a finished update for some other holding leaves the session alone.
    pub fn finish(&mut self, holding_id: &str) {
        if self.is_editing(holding_id) {
            *self = EditSession::Idle;
        }
    }

    /// The id of the holding being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { holding_id } => Some(holding_id),
        }
    }

    /// Whether the given holding is the one being edited.
    pub fn is_editing(&self, holding_id: &str) -> bool {
        self.editing_id() == Some(holding_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(EditSession::new(), EditSession::Idle);
        assert_eq!(EditSession::default().editing_id(), None);
    }

    #[test]
    fn test_start_then_cancel_returns_to_idle() {
        let mut session = EditSession::new();
        session.start("1");
        assert_eq!(session.editing_id(), Some("1"));
        assert!(session.is_editing("1"));

        session.cancel();
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn test_last_start_wins() {
        let mut session = EditSession::new();
        session.start("1");
        session.start("2");
        assert_eq!(session.editing_id(), Some("2"));
        assert!(!session.is_editing("1"));
    }

    #[test]
    fn test_finish_clears_only_matching_id() {
        let mut session = EditSession::new();
        session.start("1");

        session.finish("2");
        assert_eq!(session.editing_id(), Some("1"));

        session.finish("1");
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn test_finish_while_idle_is_noop() {
        let mut session = EditSession::new();
        session.finish("1");
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut session = EditSession::new();
        session.start("abc");

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("editing"));

        let restored: EditSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
