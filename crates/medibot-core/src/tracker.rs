//! Read-only view of the conversation tracker handed to actions.

use medibot_contracts::{intent::Intent, protocol::TrackerState, turn::TurnContext};

/// Wraps the tracker snapshot from an `ActionCall`.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    state: TrackerState,
}

impl Tracker {
    pub fn new(state: TrackerState) -> Self {
        Self { state }
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.state.sender_id.as_deref()
    }

    /// Current value of slot `name` if it holds a string.
    ///
    /// Null, numeric, boolean, and list values read as unset.
    pub fn get_slot(&self, name: &str) -> Option<&str> {
        self.state.slots.get(name).and_then(|v| v.as_str())
    }

    /// Name of the top intent of the latest user message, if any.
    pub fn latest_intent_name(&self) -> Option<&str> {
        self.state
            .latest_message
            .intent
            .as_ref()
            .and_then(|i| i.name.as_deref())
    }

    /// The latest intent, parsed. A missing intent reads as `Other("")`.
    pub fn latest_intent(&self) -> Intent {
        Intent::from_name(self.latest_intent_name().unwrap_or_default())
    }

    /// Snapshot the inputs the disease-info dispatcher needs.
    pub fn turn_context(&self, disease_slot: &str) -> TurnContext {
        TurnContext {
            intent: self.latest_intent(),
            disease: self.get_slot(disease_slot).map(str::to_string),
        }
    }
}
