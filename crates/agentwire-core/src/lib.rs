//! agentwire core: the message contract between a client and an Agent backend.
//!
//! This crate defines the envelope shared by both directions of the Agent
//! WebSocket protocol, the closed set of message kinds, the payload shape each
//! kind carries, validation of raw JSON into typed envelopes, and constructors
//! for every outbound kind. It performs no I/O and carries no runtime
//! dependencies, so the same contract is usable on either side of a
//! connection.
//!
//! # Defensive guarantees
//! `unwrap`, `expect` and `panic!` are compile-denied here. Malformed input is
//! always reported as a [`ValidationError`] value. The only panics are the
//! documented precondition asserts in [`protocol::build`], which flag caller
//! bugs rather than bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod ids;
pub mod protocol;

pub use error::{ErrorCode, Result, ValidationError};
pub use protocol::{
    build, default_prompt_message, validate, validate_with, AgentCompleteData, AgentPromptData,
    AgentPromptType, Direction, Envelope, InputSchema, MessageKind, Payload, SchemaCheck,
    ToolCallOutcome, ToolCallRequestData, ToolCallResponseData, ToolSchema, UserMessageData,
    UserOrderData,
};
