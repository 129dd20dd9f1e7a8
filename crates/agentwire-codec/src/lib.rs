//! agentwire codec: text frames in, validated envelopes out.
//!
//! This crate sits between a WebSocket transport and the message contract in
//! `agentwire-core`. It decodes each text frame once (size limit, JSON parse,
//! contract validation, direction check), encodes outbound envelopes, and
//! loads its decode policy from strict YAML. It performs no I/O on the
//! connection itself.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod obs;

pub use config::{CodecConfig, DecoderSection, Role, UnknownKinds};
pub use decoder::{encode, reject_reply, Decoder, Inbound};
pub use error::{CodecError, Result};
