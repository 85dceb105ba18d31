//! Per-turn input to the response dispatcher.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// What the framework tells us about the current turn.
///
/// Supplied fresh per invocation; nothing here outlives the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    pub intent: Intent,
    /// Raw `disease` slot text, in whatever case the user typed it.
    pub disease: Option<String>,
}

impl TurnContext {
    pub fn new(intent: impl Into<Intent>, disease: Option<&str>) -> Self {
        Self {
            intent: intent.into(),
            disease: disease.map(str::to_string),
        }
    }
}
