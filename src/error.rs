//! Error types for portal operations.
//!
//! Errors are classified by how the caller recovers:
//! - Validation: user input rejected, re-prompt with the message
//! - NotFound / Forbidden: the request targeted something it shouldn't
//! - Config / Io: config loading only
//!
//! Capacity adjustments and dropped meeting slots are deliberately *not*
//! errors — they are warnings carried in result payloads.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    /// User input failed a form rule. The operation aborted with no partial
    /// state change; the message is user-facing.
    #[error("{message}")]
    Validation { message: String },

    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    /// The acting user lacks the role the operation requires.
    #[error("permission denied: {action} requires an administrator account")]
    Forbidden { action: &'static str },

    /// Registration is read-only while its round is in progress.
    #[error("registration is locked while the current round is in progress")]
    RegistrationLocked,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortalError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(what: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            what,
            id: id.into(),
        }
    }

    /// Returns true when the caller should re-prompt the user rather than
    /// treat the failure as a fault.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PortalError::Validation { .. } | PortalError::RegistrationLocked
        )
    }
}
