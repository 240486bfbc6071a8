//! Error types for the form controller and its host

use crate::state::FieldId;
use crate::validation::ValidationError;
use thiserror::Error;

/// Failures reported by the host environment's primitives
#[derive(Debug, Error)]
pub enum HostError {
    /// The host could not be initialized (missing bridge, closed surface)
    #[error("host is not ready: {0}")]
    NotReady(String),
    /// The outbound message channel refused the payload
    #[error("outbound channel rejected the message: {0}")]
    ChannelRejected(String),
}

/// Errors raised by the form controller
#[derive(Debug, Error)]
pub enum FormError {
    /// A field failed its rule while building a payload
    #[error("field `{field}` is invalid: {source}")]
    Validation {
        field: FieldId,
        #[source]
        source: ValidationError,
    },

    /// The payload could not be turned into a wire message
    #[error("failed to serialize submission payload")]
    Serialization(#[from] serde_json::Error),

    /// The host channel did not accept the payload
    #[error("failed to hand off submission")]
    Delivery(#[source] HostError),

    /// The host environment is missing; the view cannot run at all
    #[error("host environment unavailable")]
    HostUnavailable(#[source] HostError),
}

impl FormError {
    /// Whether the error belongs to the submission block (serialize or send)
    pub fn is_submission_error(&self) -> bool {
        matches!(self, FormError::Serialization(_) | FormError::Delivery(_))
    }
}
