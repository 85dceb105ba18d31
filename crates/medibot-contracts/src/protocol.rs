//! Wire types for the framework's custom-action webhook.
//!
//! The framework POSTs an `ActionCall` naming the action it wants run, along
//! with a snapshot of the conversation tracker. The server answers with an
//! `ActionResponse` carrying the collected bot messages, or an
//! `ActionErrorBody` when the action name is unknown.
//!
//! Only the fields this server reads are modelled; everything else in the
//! request is ignored on deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /webhook`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionCall {
    /// Name of the action the framework wants executed.
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: TrackerState,
    /// The assistant's domain. Passed through to actions untouched.
    #[serde(default)]
    pub domain: serde_json::Value,
    /// Framework version string.
    #[serde(default)]
    pub version: Option<String>,
}

/// The subset of the conversation tracker an action may inspect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub sender_id: Option<String>,
    /// Slot name → current value. Values are arbitrary JSON.
    #[serde(default)]
    pub slots: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

/// The most recent user message as parsed by the NLU pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentPrediction>,
}

/// The top intent prediction for a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentPrediction {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One outgoing bot message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotMessage {
    pub text: String,
}

/// Successful webhook reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Tracker events the action wants applied. The disease-info action
    /// never emits any.
    pub events: Vec<serde_json::Value>,
    pub responses: Vec<BotMessage>,
}

/// Reply body when the requested action is not registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionErrorBody {
    pub error: String,
    pub action_name: String,
}

/// One entry of `GET /actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub name: String,
}
