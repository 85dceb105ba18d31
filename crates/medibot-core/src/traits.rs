//! The `Action` trait: the registration surface the framework calls into.

use medibot_contracts::error::MedibotResult;

use crate::{dispatcher::CollectingDispatcher, tracker::Tracker};

/// A named custom action the conversational framework can invoke.
///
/// Implementations read the tracker, queue replies on the dispatcher, and
/// return any tracker events they want applied. They hold no per-call state
/// and may be invoked from several threads at once.
pub trait Action: Send + Sync {
    /// The action identifier the framework uses in `next_action`.
    fn name(&self) -> &str;

    /// Run the action for one turn.
    ///
    /// `domain` is the assistant's domain as sent by the framework; actions
    /// that do not need it ignore it.
    fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        domain: &serde_json::Value,
    ) -> MedibotResult<Vec<serde_json::Value>>;
}
