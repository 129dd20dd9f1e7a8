//! Decode-once codec for text frames.
//!
//! - Text frame => size check => JSON => contract validation => direction check
//! - Unknown kinds are rejected or reported as ignored, per config
//! - Every rejection is logged with its stable code and counted

use serde_json::Value;
use tracing::{debug, warn};

use agentwire_core::{build, validate_with, Envelope, ValidationError};

use crate::config::{CodecConfig, DecoderSection, UnknownKinds};
use crate::error::{CodecError, Result};
use crate::obs::CodecMetrics;

/// Outcome of decoding one frame.
#[derive(Debug)]
pub enum Inbound {
    /// Well-formed envelope, safe to match on its payload.
    Message(Envelope),
    /// Unknown `type` dropped under `unknown_kinds: ignore`.
    Ignored { kind: String },
}

/// Frame decoder. Holds only immutable policy plus counters, so one instance
/// can be shared by every connection.
#[derive(Default)]
pub struct Decoder {
    cfg: DecoderSection,
    metrics: CodecMetrics,
}

impl Decoder {
    pub fn new(cfg: DecoderSection) -> Self {
        Self {
            cfg,
            metrics: CodecMetrics::default(),
        }
    }

    pub fn from_config(cfg: &CodecConfig) -> Self {
        Self::new(cfg.decoder.clone())
    }

    pub fn config(&self) -> &DecoderSection {
        &self.cfg
    }

    pub fn metrics(&self) -> &CodecMetrics {
        &self.metrics
    }

    /// Decode one text frame.
    pub fn decode(&self, text: &str) -> Result<Inbound> {
        match self.decode_inner(text) {
            Ok(Inbound::Message(env)) => {
                debug!(
                    kind = %env.kind(),
                    session = env.session_code(),
                    request_id = env.request_id(),
                    "frame decoded"
                );
                self.metrics
                    .frames_decoded
                    .inc(&[("kind", env.kind().as_str())]);
                Ok(Inbound::Message(env))
            }
            Ok(Inbound::Ignored { kind }) => {
                debug!(%kind, "ignoring frame of unknown kind");
                self.metrics.frames_ignored.inc(&[]);
                Ok(Inbound::Ignored { kind })
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, bytes = text.len(), "frame rejected");
                self.metrics.frames_rejected.inc(&[("code", e.code())]);
                Err(e)
            }
        }
    }

    fn decode_inner(&self, text: &str) -> Result<Inbound> {
        let len = text.len();
        if len > self.cfg.max_frame_bytes {
            return Err(CodecError::FrameTooLarge {
                len,
                max: self.cfg.max_frame_bytes,
            });
        }

        let raw: Value = serde_json::from_str(text)
            .map_err(|e| CodecError::Malformed(format!("invalid envelope json: {e}")))?;

        let env = match validate_with(&raw, self.cfg.tool_schema_check) {
            Ok(env) => env,
            Err(ValidationError::UnknownMessageKind(Some(kind)))
                if self.cfg.unknown_kinds == UnknownKinds::Ignore =>
            {
                return Ok(Inbound::Ignored { kind });
            }
            Err(e) => return Err(e.into()),
        };

        if !self.cfg.role.accepts(env.kind()) {
            return Err(CodecError::UnexpectedDirection {
                kind: env.kind(),
                role: self.cfg.role,
            });
        }

        Ok(Inbound::Message(env))
    }
}

/// Encode one envelope as a text frame.
pub fn encode(env: &Envelope) -> Result<String> {
    serde_json::to_string(env).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Error prompt telling the peer its frame was rejected.
///
/// `session_code` is the connection's session; `request_id` is the rejected
/// frame's id when it could be read. Returns `None` when there is no session
/// to address the reply to.
pub fn reject_reply(session_code: &str, request_id: Option<&str>, err: &CodecError) -> Option<Envelope> {
    if session_code.trim().is_empty() {
        return None;
    }
    let request_id = request_id.filter(|id| !id.is_empty());
    Some(build::protocol_error(session_code, request_id, err))
}
