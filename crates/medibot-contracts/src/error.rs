//! Error types for the MEDIBOT action server.
//!
//! Conversational outcomes (missing slot, unknown disease, unrecognized
//! intent) are never errors: they become reply text. The variants below cover
//! the plumbing around the dispatcher only.

use thiserror::Error;

/// The unified error type for the MEDIBOT crates.
#[derive(Debug, Error)]
pub enum MedibotError {
    /// The framework asked for an action name this server never registered.
    #[error("No registered action found for name '{action_name}'.")]
    UnknownAction { action_name: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A knowledge file could not be parsed or holds an invalid record.
    #[error("knowledge table error: {reason}")]
    KnowledgeError { reason: String },

    /// Binding, serving, or reading from disk failed.
    #[error("i/o error: {reason}")]
    Io { reason: String },
}

/// Convenience alias used throughout the MEDIBOT crates.
pub type MedibotResult<T> = Result<T, MedibotError>;
