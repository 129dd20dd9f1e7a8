//! Per-kind payloads (`data` field), one variant per message kind.

use serde::{Serialize, Serializer};

use crate::protocol::kind::MessageKind;
use crate::protocol::prompt::AgentPromptType;
use crate::protocol::schema::ToolSchema;

/// `USER_MESSAGE` data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMessageData {
    /// Workflow document the message refers to (JSON text, passed through).
    pub workflow_content: String,
    /// Client-local tools the Agent may ask the client to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_schemas: Option<Vec<ToolSchema>>,
}

/// `USER_ORDER` data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrderData {
    pub workflow_content: String,
}

/// `AGENT_TOOL_CALL_RESPONSE` data.
///
/// `tool_args` and `result` are JSON-encoded strings this crate never parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResponseData {
    pub tool_name: String,
    pub is_client_tool: bool,
    pub tool_args: String,
    pub is_allow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Execution outcome reported with an allowed tool call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCallOutcome {
    pub result: Option<String>,
    pub success: Option<bool>,
    pub error: Option<String>,
}

impl ToolCallOutcome {
    /// Tool ran and produced `result`.
    pub fn succeeded(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            success: Some(true),
            error: None,
        }
    }

    /// Tool ran and failed with `error`.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            result: None,
            success: Some(false),
            error: Some(error.into()),
        }
    }
}

/// `AGENT_PROMPT` data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPromptData {
    pub prompt_type: AgentPromptType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AgentPromptData {
    /// The carried message, or the prompt type's default when absent.
    pub fn message_or_default(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.prompt_type.default_message())
    }
}

/// `AGENT_COMPLETE` data: a marker, optionally carrying usage counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCompleteData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_messages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u64>,
}

/// `AGENT_TOOL_CALL_REQUEST` data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallRequestData {
    pub tool_name: String,
    pub tool_args: String,
    /// When false the client only answers allow/deny; the server runs the tool.
    pub is_client_tool: bool,
}

/// Typed `data`, keyed by message kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    UserMessage(UserMessageData),
    UserOrder(UserOrderData),
    ToolCallResponse(ToolCallResponseData),
    Interrupt,
    Ping,
    AgentPrompt(AgentPromptData),
    AgentStream,
    AgentComplete(AgentCompleteData),
    ToolCallRequest(ToolCallRequestData),
    Pong,
}

impl Payload {
    pub fn kind(&self) -> MessageKind {
        match self {
            Payload::UserMessage(_) => MessageKind::UserMessage,
            Payload::UserOrder(_) => MessageKind::UserOrder,
            Payload::ToolCallResponse(_) => MessageKind::AgentToolCallResponse,
            Payload::Interrupt => MessageKind::Interrupt,
            Payload::Ping => MessageKind::Ping,
            Payload::AgentPrompt(_) => MessageKind::AgentPrompt,
            Payload::AgentStream => MessageKind::AgentStream,
            Payload::AgentComplete(_) => MessageKind::AgentComplete,
            Payload::ToolCallRequest(_) => MessageKind::AgentToolCallRequest,
            Payload::Pong => MessageKind::Pong,
        }
    }
}

/// Serializes as the `data` object. Kinds without a payload serialize as unit
/// and are never written by [`Envelope`](crate::Envelope).
impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::UserMessage(d) => d.serialize(serializer),
            Payload::UserOrder(d) => d.serialize(serializer),
            Payload::ToolCallResponse(d) => d.serialize(serializer),
            Payload::AgentPrompt(d) => d.serialize(serializer),
            Payload::AgentComplete(d) => d.serialize(serializer),
            Payload::ToolCallRequest(d) => d.serialize(serializer),
            Payload::Interrupt | Payload::Ping | Payload::AgentStream | Payload::Pong => {
                serializer.serialize_unit()
            }
        }
    }
}
