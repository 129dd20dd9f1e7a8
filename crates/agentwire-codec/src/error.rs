//! Codec error type.

use agentwire_core::{MessageKind, ValidationError};
use thiserror::Error;

use crate::config::Role;

/// Shared result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Why a frame could not be decoded or encoded, or config could not load.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("frame too large: {len} bytes (max {max})")]
    FrameTooLarge { len: usize, max: usize },
    #[error("malformed frame: {0}")]
    Malformed(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{kind} is not accepted by a {role} peer")]
    UnexpectedDirection { kind: MessageKind, role: Role },
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("config: {0}")]
    Config(String),
}

impl CodecError {
    /// Stable code for logs, metrics labels and error prompts.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::FrameTooLarge { .. } => "FRAME_TOO_LARGE",
            CodecError::Malformed(_) => "MALFORMED_FRAME",
            CodecError::Invalid(e) => e.code().as_str(),
            CodecError::UnexpectedDirection { .. } => "UNEXPECTED_DIRECTION",
            CodecError::Encode(_) => "ENCODE_FAILED",
            CodecError::Config(_) => "BAD_CONFIG",
        }
    }
}
