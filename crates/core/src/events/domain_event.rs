//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by the holding store after successful mutations.
///
/// These events represent facts about domain data changes. Observers
/// translate them into side effects (snapshot persistence, re-rendering,
/// etc.). No event is emitted for no-op operations on unknown ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A holding was created and appended to the list.
    HoldingAdded { holding_id: String },

    /// An existing holding's fields were replaced.
    HoldingUpdated { holding_id: String },

    /// A holding was removed from the list.
    HoldingDeleted { holding_id: String },
}

impl DomainEvent {
    /// Creates a HoldingAdded event.
    pub fn holding_added(holding_id: impl Into<String>) -> Self {
        Self::HoldingAdded {
            holding_id: holding_id.into(),
        }
    }

    /// Creates a HoldingUpdated event.
    pub fn holding_updated(holding_id: impl Into<String>) -> Self {
        Self::HoldingUpdated {
            holding_id: holding_id.into(),
        }
    }

    /// Creates a HoldingDeleted event.
    pub fn holding_deleted(holding_id: impl Into<String>) -> Self {
        Self::HoldingDeleted {
            holding_id: holding_id.into(),
        }
    }

    /// The id of the holding the event refers to.
    pub fn holding_id(&self) -> &str {
        match self {
            DomainEvent::HoldingAdded { holding_id }
            | DomainEvent::HoldingUpdated { holding_id }
            | DomainEvent::HoldingDeleted { holding_id } => holding_id,
        }
    }
}
