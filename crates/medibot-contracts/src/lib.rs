//! # medibot-contracts
//!
//! Shared types, wire contracts, and errors for the MEDIBOT action server.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod disease;
pub mod error;
pub mod intent;
pub mod protocol;
pub mod turn;

#[cfg(test)]
mod tests {
    use super::*;
    use disease::{DiseaseRecord, InfoField};
    use error::MedibotError;
    use intent::Intent;
    use protocol::{ActionCall, ActionResponse, BotMessage};

    fn record() -> DiseaseRecord {
        DiseaseRecord {
            general_info: "general".to_string(),
            symptoms: "symptoms".to_string(),
            prevention: "prevention".to_string(),
            treatment: "treatment".to_string(),
            more_info: "more".to_string(),
            emergency_tips: "emergency".to_string(),
        }
    }

    // ── Intent ───────────────────────────────────────────────────────────────

    #[test]
    fn intent_known_names_parse_back_to_themselves() {
        for intent in Intent::KNOWN {
            assert_eq!(Intent::from_name(intent.as_str()), intent);
        }
    }

    #[test]
    fn intent_unknown_name_is_preserved() {
        let intent = Intent::from_name("ask_about_weather");
        assert_eq!(intent, Intent::Other("ask_about_weather".to_string()));
        assert_eq!(intent.to_string(), "ask_about_weather");
    }

    #[test]
    fn intent_matching_is_case_sensitive() {
        // The NLU pipeline emits lower-case names; anything else is foreign.
        assert_eq!(Intent::from_name("Greet"), Intent::Other("Greet".to_string()));
    }

    #[test]
    fn intent_info_field_only_for_content_intents() {
        assert_eq!(Intent::AskSymptoms.info_field(), Some(InfoField::Symptoms));
        assert_eq!(Intent::AskPrevention.info_field(), Some(InfoField::Prevention));
        assert_eq!(Intent::AskTreatment.info_field(), Some(InfoField::Treatment));
        assert_eq!(Intent::AskMoreInfo.info_field(), Some(InfoField::MoreInfo));
        assert_eq!(Intent::EmergencyTips.info_field(), Some(InfoField::EmergencyTips));

        assert_eq!(Intent::Greet.info_field(), None);
        assert_eq!(Intent::Affirm.info_field(), None);
        assert_eq!(Intent::AskDiseaseInfo.info_field(), None);
        assert_eq!(Intent::Other("x".to_string()).info_field(), None);
    }

    #[test]
    fn intent_serializes_as_wire_name() {
        let json = serde_json::to_string(&Intent::EmergencyTips).unwrap();
        assert_eq!(json, "\"emergency_tips\"");

        let decoded: Intent = serde_json::from_str("\"nlu_fallback\"").unwrap();
        assert_eq!(decoded, Intent::Other("nlu_fallback".to_string()));
    }

    // ── DiseaseRecord ────────────────────────────────────────────────────────

    #[test]
    fn record_field_selects_matching_text() {
        let r = record();
        assert_eq!(r.field(InfoField::GeneralInfo), "general");
        assert_eq!(r.field(InfoField::Symptoms), "symptoms");
        assert_eq!(r.field(InfoField::Prevention), "prevention");
        assert_eq!(r.field(InfoField::Treatment), "treatment");
        assert_eq!(r.field(InfoField::MoreInfo), "more");
        assert_eq!(r.field(InfoField::EmergencyTips), "emergency");
    }

    // ── Wire protocol ────────────────────────────────────────────────────────

    #[test]
    fn action_call_ignores_unmodelled_fields() {
        let body = r#"{
            "next_action": "action_provide_disease_info",
            "sender_id": "user-1",
            "tracker": {
                "sender_id": "user-1",
                "slots": { "disease": "Malaria", "session_started_metadata": null },
                "latest_message": {
                    "text": "how do I treat malaria",
                    "intent": { "name": "ask_treatment", "confidence": 0.97 },
                    "entities": [{ "entity": "disease", "value": "Malaria" }]
                },
                "events": [],
                "paused": false
            },
            "domain": { "intents": ["ask_treatment"] },
            "version": "3.6.0"
        }"#;

        let call: ActionCall = serde_json::from_str(body).unwrap();
        assert_eq!(call.next_action, "action_provide_disease_info");
        assert_eq!(call.tracker.slots["disease"], "Malaria");
        let intent = call.tracker.latest_message.intent.unwrap();
        assert_eq!(intent.name.as_deref(), Some("ask_treatment"));
    }

    #[test]
    fn action_call_with_bare_name_uses_defaults() {
        let call: ActionCall =
            serde_json::from_str(r#"{ "next_action": "action_provide_disease_info" }"#).unwrap();
        assert!(call.tracker.slots.is_empty());
        assert!(call.tracker.latest_message.intent.is_none());
    }

    #[test]
    fn action_response_shape() {
        let response = ActionResponse {
            events: vec![],
            responses: vec![BotMessage { text: "Goodbye! Take care.".to_string() }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["events"], serde_json::json!([]));
        assert_eq!(json["responses"][0]["text"], "Goodbye! Take care.");
    }

    // ── MedibotError display messages ────────────────────────────────────────

    #[test]
    fn error_unknown_action_display() {
        let err = MedibotError::UnknownAction {
            action_name: "action_fetch_weather".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No registered action found for name 'action_fetch_weather'."
        );
    }

    #[test]
    fn error_config_error_display() {
        let err = MedibotError::ConfigError {
            reason: "port out of range".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("port out of range"));
    }

    #[test]
    fn error_knowledge_error_display() {
        let err = MedibotError::KnowledgeError {
            reason: "duplicate disease 'malaria'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("knowledge table error"));
        assert!(msg.contains("malaria"));
    }
}
