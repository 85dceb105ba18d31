//! `action_provide_disease_info`: the one action this server registers.

use std::sync::Arc;

use tracing::info;

use medibot_contracts::error::MedibotResult;
use medibot_knowledge::KnowledgeTable;

use crate::{
    dispatcher::CollectingDispatcher, responder::Responder, tracker::Tracker, traits::Action,
};

/// Action identifier registered with the framework.
pub const ACTION_NAME: &str = "action_provide_disease_info";

/// Slot the NLU pipeline fills with the disease the user mentioned.
pub const DISEASE_SLOT: &str = "disease";

/// Answers disease questions from a knowledge table.
///
/// Emits exactly one message per run and no tracker events.
#[derive(Debug, Clone)]
pub struct ProvideDiseaseInfo {
    table: Arc<KnowledgeTable>,
}

impl ProvideDiseaseInfo {
    pub fn new(table: Arc<KnowledgeTable>) -> Self {
        Self { table }
    }

    /// Build the action over a copy of the built-in table.
    pub fn builtin() -> Self {
        Self::new(Arc::new(KnowledgeTable::builtin().clone()))
    }
}

impl Action for ProvideDiseaseInfo {
    fn name(&self) -> &str {
        ACTION_NAME
    }

    fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        _domain: &serde_json::Value,
    ) -> MedibotResult<Vec<serde_json::Value>> {
        let turn = tracker.turn_context(DISEASE_SLOT);

        info!(
            sender_id = tracker.sender_id().unwrap_or("-"),
            intent = %turn.intent,
            disease = turn.disease.as_deref().unwrap_or("-"),
            "providing disease info"
        );

        let reply = Responder::new(&self.table).respond_turn(&turn);
        dispatcher.utter_message(reply);
        Ok(Vec::new())
    }
}
