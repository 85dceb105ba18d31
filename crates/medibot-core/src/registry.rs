//! Action registry: routes an incoming `ActionCall` to the named action.
//!
//! The registry is built once at startup and shared read-only between
//! request handlers.
//!
//!   ActionCall → lookup(next_action) → Action::run → ActionResponse
//!
//! An unregistered action name is the only routing failure; it surfaces as
//! `MedibotError::UnknownAction` so the server can answer 404.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use medibot_contracts::{
    error::{MedibotError, MedibotResult},
    protocol::{ActionCall, ActionDescriptor, ActionResponse},
};

use crate::{dispatcher::CollectingDispatcher, tracker::Tracker, traits::Action};

/// Named actions available to the framework.
#[derive(Default, Clone)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` under its own name, replacing any earlier action
    /// with the same name.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        let name = action.name().to_string();
        if self.actions.insert(name.clone(), action).is_some() {
            warn!(action = %name, "action registered twice; keeping the latest");
        } else {
            debug!(action = %name, "action registered");
        }
    }

    /// Registered actions, sorted by name.
    pub fn descriptors(&self) -> Vec<ActionDescriptor> {
        self.actions
            .keys()
            .map(|name| ActionDescriptor { name: name.clone() })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run the action named by `call.next_action`.
    ///
    /// # Errors
    ///
    /// `MedibotError::UnknownAction` if nothing is registered under that name,
    /// or whatever the action itself returns.
    pub fn run(&self, call: ActionCall) -> MedibotResult<ActionResponse> {
        let Some(action) = self.actions.get(&call.next_action) else {
            warn!(action = %call.next_action, "no action registered under requested name");
            return Err(MedibotError::UnknownAction {
                action_name: call.next_action,
            });
        };

        let tracker = Tracker::new(call.tracker);
        let mut dispatcher = CollectingDispatcher::new();
        let events = action.run(&mut dispatcher, &tracker, &call.domain)?;

        debug!(
            action = %call.next_action,
            messages = dispatcher.messages().len(),
            events = events.len(),
            "action completed"
        );

        Ok(ActionResponse {
            events,
            responses: dispatcher.into_messages(),
        })
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
