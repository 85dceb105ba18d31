//! The closed set of intents the disease-info action understands.
//!
//! Intent names arrive from the NLU pipeline as plain strings. They are
//! parsed once at the boundary so the dispatcher can `match` exhaustively.
//! Names outside the known set are kept verbatim in `Intent::Other` and take
//! the general-information branch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::disease::InfoField;

/// A framework-classified label for what the user asked this turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
    Greet,
    Goodbye,
    AskSymptoms,
    AskPrevention,
    AskTreatment,
    AskMoreInfo,
    EmergencyTips,
    Affirm,
    Deny,
    /// The default "tell me about this disease" intent.
    AskDiseaseInfo,
    /// Any intent name outside the known set, including an empty one.
    Other(String),
}

impl Intent {
    /// Every named variant, in wire-name order. `Other` is excluded.
    pub const KNOWN: [Intent; 10] = [
        Intent::Greet,
        Intent::Goodbye,
        Intent::AskSymptoms,
        Intent::AskPrevention,
        Intent::AskTreatment,
        Intent::AskMoreInfo,
        Intent::EmergencyTips,
        Intent::Affirm,
        Intent::Deny,
        Intent::AskDiseaseInfo,
    ];

    /// Parse a wire name. Matching is exact; unknown names become `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "greet" => Intent::Greet,
            "goodbye" => Intent::Goodbye,
            "ask_symptoms" => Intent::AskSymptoms,
            "ask_prevention" => Intent::AskPrevention,
            "ask_treatment" => Intent::AskTreatment,
            "ask_more_info" => Intent::AskMoreInfo,
            "emergency_tips" => Intent::EmergencyTips,
            "affirm" => Intent::Affirm,
            "deny" => Intent::Deny,
            "ask_disease_info" => Intent::AskDiseaseInfo,
            other => Intent::Other(other.to_string()),
        }
    }

    /// The wire name of this intent.
    pub fn as_str(&self) -> &str {
        match self {
            Intent::Greet => "greet",
            Intent::Goodbye => "goodbye",
            Intent::AskSymptoms => "ask_symptoms",
            Intent::AskPrevention => "ask_prevention",
            Intent::AskTreatment => "ask_treatment",
            Intent::AskMoreInfo => "ask_more_info",
            Intent::EmergencyTips => "emergency_tips",
            Intent::Affirm => "affirm",
            Intent::Deny => "deny",
            Intent::AskDiseaseInfo => "ask_disease_info",
            Intent::Other(name) => name,
        }
    }

    /// The record field a content intent asks for, if it asks for one.
    ///
    /// Returns `None` for conversational intents (greet, goodbye, affirm,
    /// deny) and for the general-information default.
    pub fn info_field(&self) -> Option<InfoField> {
        match self {
            Intent::AskSymptoms => Some(InfoField::Symptoms),
            Intent::AskPrevention => Some(InfoField::Prevention),
            Intent::AskTreatment => Some(InfoField::Treatment),
            Intent::AskMoreInfo => Some(InfoField::MoreInfo),
            Intent::EmergencyTips => Some(InfoField::EmergencyTips),
            _ => None,
        }
    }
}

impl From<&str> for Intent {
    fn from(name: &str) -> Self {
        Intent::from_name(name)
    }
}

impl From<String> for Intent {
    fn from(name: String) -> Self {
        Intent::from_name(&name)
    }
}

impl From<Intent> for String {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
