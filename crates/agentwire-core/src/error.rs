//! Validation errors produced when a received value violates the contract.

use thiserror::Error;

use crate::protocol::kind::MessageKind;

/// Peer-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `type` absent or not a recognized kind.
    UnknownMessageKind,
    /// `sessionCode` absent or empty.
    MissingSessionCode,
    /// `requestId` absent or not a string.
    MissingRequestId,
    /// `timestamp` absent or not a non-negative integer.
    InvalidTimestamp,
    /// `data` (or `content`) does not match the kind's shape.
    PayloadShapeMismatch,
}

impl ErrorCode {
    /// String representation used in logs and error prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnknownMessageKind => "UNKNOWN_MESSAGE_KIND",
            ErrorCode::MissingSessionCode => "MISSING_SESSION_CODE",
            ErrorCode::MissingRequestId => "MISSING_REQUEST_ID",
            ErrorCode::InvalidTimestamp => "INVALID_TIMESTAMP",
            ErrorCode::PayloadShapeMismatch => "PAYLOAD_SHAPE_MISMATCH",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Why a received envelope was rejected.
///
/// Rejection is never fatal to the connection: the caller decides whether to
/// log, reply with an error prompt, or drop the peer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Carries the offending `type` name, or `None` when it was absent or not
    /// a string.
    #[error("unknown message kind: {}", .0.as_deref().unwrap_or("<missing>"))]
    UnknownMessageKind(Option<String>),
    #[error("sessionCode is missing or empty")]
    MissingSessionCode,
    #[error("requestId is missing or empty")]
    MissingRequestId,
    #[error("timestamp must be a non-negative integer")]
    InvalidTimestamp,
    /// `field` is the path of the first offending field, e.g.
    /// `data.toolSchemas[0].inputSchema.type`.
    #[error("{kind} payload mismatch at `{field}`")]
    PayloadShapeMismatch { kind: MessageKind, field: String },
}

impl ValidationError {
    pub(crate) fn shape(kind: MessageKind, field: impl Into<String>) -> Self {
        ValidationError::PayloadShapeMismatch {
            kind,
            field: field.into(),
        }
    }

    /// Map to the stable peer-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::UnknownMessageKind(_) => ErrorCode::UnknownMessageKind,
            ValidationError::MissingSessionCode => ErrorCode::MissingSessionCode,
            ValidationError::MissingRequestId => ErrorCode::MissingRequestId,
            ValidationError::InvalidTimestamp => ErrorCode::InvalidTimestamp,
            ValidationError::PayloadShapeMismatch { .. } => ErrorCode::PayloadShapeMismatch,
        }
    }
}
