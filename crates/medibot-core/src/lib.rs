//! # medibot-core
//!
//! Response dispatching and action routing for MEDIBOT.
//!
//! This crate provides:
//! - `Responder`, which turns an (intent, disease) pair into one reply
//! - the `Action` trait, `Tracker` and `CollectingDispatcher` that make up
//!   the framework-facing action surface
//! - `ProvideDiseaseInfo`, the single registered action
//! - `ActionRegistry`, which routes a webhook call to its action
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use medibot_core::{ActionRegistry, ProvideDiseaseInfo};
//!
//! let mut registry = ActionRegistry::new();
//! registry.register(Arc::new(ProvideDiseaseInfo::builtin()));
//! let response = registry.run(call)?;
//! ```

pub mod disease_info;
pub mod dispatcher;
pub mod registry;
pub mod responder;
pub mod tracker;
pub mod traits;

pub use disease_info::{ProvideDiseaseInfo, ACTION_NAME, DISEASE_SLOT};
pub use dispatcher::CollectingDispatcher;
pub use registry::ActionRegistry;
pub use responder::{respond_to, Responder};
pub use tracker::Tracker;
pub use traits::Action;

/// A registry holding only `action_provide_disease_info` over `table`.
pub fn default_registry(table: std::sync::Arc<medibot_knowledge::KnowledgeTable>) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry.register(std::sync::Arc::new(ProvideDiseaseInfo::new(table)));
    registry
}

// ── Tests ─────────────────────────────────────────────────────────────────────
