//! Protocol modules for the Agent WebSocket contract.
//!
//! - `kind`: the closed set of message kinds and their direction.
//! - `envelope` / `payload`: the typed message model (one payload variant per kind).
//! - `schema` / `prompt`: nested shapes carried inside payloads.
//! - `validate`: raw JSON -> typed envelope, reporting the first offending field.
//! - `build`: constructors for every outbound kind.
//!
//! Validation is panic-free: malformed input surfaces as `ValidationError`
//! instead of panicking or indexing into raw JSON.

pub mod build;
pub mod envelope;
pub mod kind;
pub mod payload;
pub mod prompt;
pub mod schema;
pub mod validate;

pub use envelope::Envelope;
pub use kind::{Direction, MessageKind};
pub use payload::{
    AgentCompleteData, AgentPromptData, Payload, ToolCallOutcome, ToolCallRequestData,
    ToolCallResponseData, UserMessageData, UserOrderData,
};
pub use prompt::{default_prompt_message, AgentPromptType};
pub use schema::{InputSchema, ToolSchema};
pub use validate::{validate, validate_with, SchemaCheck};
