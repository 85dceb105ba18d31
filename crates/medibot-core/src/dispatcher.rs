//! Outgoing message collection.

use medibot_contracts::protocol::BotMessage;

/// Collects the messages an action wants sent to the user.
///
/// Actions call `utter_message` and never see the delivery channel. The
/// registry drains the collected messages into the webhook response.
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one text message for delivery.
    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(BotMessage { text: text.into() });
    }

    pub fn messages(&self) -> &[BotMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}
