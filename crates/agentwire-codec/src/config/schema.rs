use std::fmt;

use serde::Deserialize;

use agentwire_core::{Direction, MessageKind, SchemaCheck};

use crate::error::{CodecError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    pub version: u32,

    #[serde(default)]
    pub decoder: DecoderSection,
}

impl CodecConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CodecError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.decoder.validate()?;

        Ok(())
    }
}

/// Which peer is decoding. A peer only accepts kinds travelling towards it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Accept both directions (proxies, recorders, tests).
    #[default]
    Any,
    /// Accept client -> server kinds only.
    Server,
    /// Accept server -> client kinds only.
    Client,
}

impl Role {
    pub fn accepts(self, kind: MessageKind) -> bool {
        match self {
            Role::Any => true,
            Role::Server => kind.direction() == Direction::ClientToServer,
            Role::Client => kind.direction() == Direction::ServerToClient,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Any => "any",
            Role::Server => "server",
            Role::Client => "client",
        })
    }
}

/// Policy for frames whose `type` is not a known kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKinds {
    /// Surface `UnknownMessageKind` to the caller.
    #[default]
    Reject,
    /// Report the frame as ignored. Frames with no `type` at all are still rejected.
    Ignore,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderSection {
    #[serde(default)]
    pub role: Role,

    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,

    #[serde(default)]
    pub unknown_kinds: UnknownKinds,

    #[serde(default)]
    pub tool_schema_check: SchemaCheck,
}

impl Default for DecoderSection {
    fn default() -> Self {
        Self {
            role: Role::default(),
            max_frame_bytes: default_max_frame_bytes(),
            unknown_kinds: UnknownKinds::default(),
            tool_schema_check: SchemaCheck::default(),
        }
    }
}

impl DecoderSection {
    pub fn validate(&self) -> Result<()> {
        if !(1024..=16 * 1024 * 1024).contains(&self.max_frame_bytes) {
            return Err(CodecError::Config(
                "decoder.max_frame_bytes must be between 1024 and 16777216".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_frame_bytes() -> usize {
    1024 * 1024
}
