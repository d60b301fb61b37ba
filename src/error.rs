//! Error types for the bot.
//!
//! Storage, lookup and media failures each get their own enum so the adapters
//! stay independent of Discord. `CommandError` is what handlers return; the
//! dispatcher turns every variant into exactly one reply.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record already exists")]
    Duplicate,

    #[error("record not found")]
    Missing,

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("stored song list is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("search failed: {0}")]
    Search(String),

    #[error("could not join voice channel: {0}")]
    Join(String),

    #[error("no active call for this server")]
    NoCall,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Failure of a single command invocation.
///
/// The first four variants carry the message shown to the user. `Storage`
/// is a system fault: the user gets a generic apology and the cause is logged.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    ExternalService(String),

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

pub const GENERIC_FAILURE: &str = "Something went wrong while handling that command. Try again later.";

impl CommandError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalService(message.into())
    }

    /// Text sent back to the channel for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Duplicate(msg)
            | Self::ExternalService(msg) => msg.clone(),
            Self::Storage(_) => GENERIC_FAILURE.to_string(),
        }
    }

    /// True when the failure is the bot's fault rather than the user's input.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Duplicate(_) => "duplicate",
            Self::ExternalService(_) => "external_service",
            Self::Storage(_) => "storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_hide_internals() {
        let err = CommandError::from(StoreError::Missing);
        assert!(err.is_fault());
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn user_errors_pass_message_through() {
        let err = CommandError::validation("Duration must be a number in minutes!");
        assert!(!err.is_fault());
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.user_message(), "Duration must be a number in minutes!");
    }
}
