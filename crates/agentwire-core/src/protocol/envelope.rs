//! The envelope wrapping every message, in either direction.
//!
//! Envelopes are immutable once built: fields are read through accessors and
//! there are no setters. Serialization produces the exact wire object;
//! deserialization always goes through [`validate`], so a `serde_json`
//! round-trip can never yield an envelope that breaks the contract.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::protocol::kind::MessageKind;
use crate::protocol::payload::Payload;
use crate::protocol::validate::validate;

/// A validated (or freshly built) protocol message.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    session_code: String,
    request_id: String,
    content: Option<String>,
    payload: Payload,
    timestamp: u64,
}

impl Envelope {
    pub(crate) fn new(
        session_code: String,
        request_id: String,
        content: Option<String>,
        payload: Payload,
        timestamp: u64,
    ) -> Self {
        Self {
            session_code,
            request_id,
            content,
            payload,
            timestamp,
        }
    }

    /// Message kind (field name is `type` on the wire).
    pub fn kind(&self) -> MessageKind {
        self.payload.kind()
    }

    /// Logical conversation id.
    pub fn session_code(&self) -> &str {
        &self.session_code
    }

    /// Correlation token.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Free text (user message, user order, streamed token).
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Kind-specific data.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Milliseconds since epoch at construction. Advisory only.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Wire object as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind())?;
        map.serialize_entry("sessionCode", &self.session_code)?;
        map.serialize_entry("requestId", &self.request_id)?;
        if let Some(content) = &self.content {
            map.serialize_entry("content", content)?;
        }
        if self.kind().has_payload() {
            map.serialize_entry("data", &self.payload)?;
        }
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        validate(&raw).map_err(serde::de::Error::custom)
    }
}
