//! The response dispatcher.
//!
//! `Responder::respond` turns one (intent, disease slot) pair into exactly
//! one reply. The policy is evaluated in order:
//!
//!   greet → goodbye → missing slot → unknown disease → per-intent template
//!
//! Every input produces a reply. Missing slots, unknown diseases, and
//! unrecognized intents are answered with text, never with an error.

use tracing::debug;

use medibot_contracts::{disease::InfoField, intent::Intent, turn::TurnContext};
use medibot_knowledge::KnowledgeTable;

pub const GREETING: &str =
    "Hi! I’m your health assistant. Please tell me what disease you’d like to know about.";
pub const FAREWELL: &str = "Goodbye! Take care.";
pub const MISSING_DISEASE: &str = "Please specify a disease name.";
pub const AFFIRM_REPLY: &str = "Great! What would you like to know more about this disease?";
pub const DENY_REPLY: &str = "Okay, thanks for chatting!";
pub const FOLLOW_UP: &str = "Would you like to know more about this disease?";

/// Formats replies from a borrowed knowledge table.
#[derive(Debug, Clone, Copy)]
pub struct Responder<'a> {
    table: &'a KnowledgeTable,
}

impl<'a> Responder<'a> {
    pub fn new(table: &'a KnowledgeTable) -> Self {
        Self { table }
    }

    /// Answer one turn.
    pub fn respond(&self, intent: &Intent, disease: Option<&str>) -> String {
        match intent {
            Intent::Greet => return GREETING.to_string(),
            Intent::Goodbye => return FAREWELL.to_string(),
            _ => {}
        }

        let disease = match disease {
            Some(d) if !d.is_empty() => d,
            _ => {
                debug!(intent = %intent, "no disease slot, prompting for one");
                return MISSING_DISEASE.to_string();
            }
        };

        let display = capitalize_first(disease);

        let Some(record) = self.table.lookup(disease) else {
            debug!(intent = %intent, disease = %disease, "disease not in knowledge table");
            return unknown_disease(&display);
        };

        debug!(intent = %intent, disease = %disease, "answering from knowledge table");

        match intent {
            Intent::AskSymptoms => format!("Symptoms of {}: {}", display, record.symptoms),
            Intent::AskPrevention => format!("Prevention tips for {}: {}", display, record.prevention),
            Intent::AskTreatment => format!("Treatment for {}: {}", display, record.treatment),
            Intent::AskMoreInfo => format!("More info about {}: {}", display, record.more_info),
            Intent::EmergencyTips => {
                format!("Emergency tips for {}: {}", display, record.emergency_tips)
            }
            Intent::Affirm => AFFIRM_REPLY.to_string(),
            Intent::Deny => DENY_REPLY.to_string(),
            Intent::Greet | Intent::Goodbye | Intent::AskDiseaseInfo | Intent::Other(_) => {
                format!("{}\n\n{}", record.field(InfoField::GeneralInfo), FOLLOW_UP)
            }
        }
    }

    /// Answer a `TurnContext`.
    pub fn respond_turn(&self, turn: &TurnContext) -> String {
        self.respond(&turn.intent, turn.disease.as_deref())
    }
}

/// Answer a raw intent name against the built-in table.
pub fn respond_to(intent_name: &str, disease: Option<&str>) -> String {
    Responder::new(KnowledgeTable::builtin()).respond(&Intent::from_name(intent_name), disease)
}

/// Upper-case the first character and lower-case the rest.
///
/// "malaria" → "Malaria", "COVID-19" → "Covid-19", "MALARIA" → "Malaria".
/// This is not title case: "food allergy" → "Food allergy".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn unknown_disease(display: &str) -> String {
    format!(
        "I don’t yet have detailed info about {}. You can ask me about symptoms, prevention, \
         treatment, or more info of other diseases I know.",
        display
    )
}

// ── Tests ────────────────────────────────────────────────────────────────────
