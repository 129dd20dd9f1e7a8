//! Decoder policy loaded from YAML.
//!
//! ```yaml
//! version: 1
//! decoder:
//!   role: server            # any | server | client
//!   max_frame_bytes: 1048576
//!   unknown_kinds: reject   # reject | ignore
//!   tool_schema_check: warn # off | warn | reject
//! ```
//!
//! Unknown keys are errors, and so are out-of-range limits; a config that
//! loads is a config [`Decoder`](crate::Decoder) can run with.

pub mod schema;

use std::fs;
use std::path::Path;

use crate::error::{CodecError, Result};

pub use schema::{CodecConfig, DecoderSection, Role, UnknownKinds};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<CodecConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| CodecError::Config(format!("cannot read {}: {e}", path.display())))?;
    load_from_str(&text)
}

/// Parse and check a decoder policy document.
pub fn load_from_str(yaml: &str) -> Result<CodecConfig> {
    let cfg = serde_yaml::from_str::<CodecConfig>(yaml)
        .map_err(|e| CodecError::Config(format!("decoder policy: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
