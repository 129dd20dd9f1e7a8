//! Constructors for every outbound message kind.
//!
//! Each constructor stamps the current time. Requests that expect a reply
//! (`USER_MESSAGE`, `USER_ORDER`, `PING`) get a fresh request id. Replies
//! (`AGENT_TOOL_CALL_RESPONSE`, `INTERRUPT`, `PONG`) must echo the id they
//! answer, because the receiver correlates by id equality alone. Server pushes
//! take the id of the turn they belong to, or get a fresh one.
//!
//! Every envelope built here passes [`validate`](crate::protocol::validate).
//!
//! # Panics
//! Passing an empty `session_code` or an empty echoed `request_id` is a caller
//! bug and panics.

use std::fmt::Display;

use crate::ids;
use crate::protocol::envelope::Envelope;
use crate::protocol::payload::{
    AgentCompleteData, AgentPromptData, Payload, ToolCallOutcome, ToolCallRequestData,
    ToolCallResponseData, UserMessageData, UserOrderData,
};
use crate::protocol::prompt::AgentPromptType;
use crate::protocol::schema::ToolSchema;

fn envelope(
    session_code: &str,
    request_id: String,
    content: Option<String>,
    payload: Payload,
) -> Envelope {
    assert!(
        !session_code.trim().is_empty(),
        "sessionCode must not be empty"
    );
    Envelope::new(
        session_code.to_owned(),
        request_id,
        content,
        payload,
        ids::now_millis(),
    )
}

fn echoed(request_id: &str) -> String {
    assert!(
        !request_id.is_empty(),
        "a reply must echo the requestId it answers"
    );
    request_id.to_owned()
}

fn correlated(request_id: Option<&str>) -> String {
    request_id.map_or_else(ids::new_request_id, echoed)
}

// --------------------
// Client -> server
// --------------------

/// `USER_MESSAGE` carrying the user's text and current workflow.
pub fn user_message(
    session_code: &str,
    content: &str,
    workflow_content: &str,
    tool_schemas: Option<Vec<ToolSchema>>,
) -> Envelope {
    envelope(
        session_code,
        ids::new_request_id(),
        Some(content.to_owned()),
        Payload::UserMessage(UserMessageData {
            workflow_content: workflow_content.to_owned(),
            tool_schemas,
        }),
    )
}

/// `USER_ORDER` carrying a command.
pub fn user_order(session_code: &str, command: &str, workflow_content: &str) -> Envelope {
    envelope(
        session_code,
        ids::new_request_id(),
        Some(command.to_owned()),
        Payload::UserOrder(UserOrderData {
            workflow_content: workflow_content.to_owned(),
        }),
    )
}

/// `AGENT_TOOL_CALL_RESPONSE` allowing the call, with its outcome if the
/// client ran the tool.
pub fn tool_call_allow(
    session_code: &str,
    request_id: &str,
    tool_name: &str,
    tool_args: &str,
    is_client_tool: bool,
    outcome: ToolCallOutcome,
) -> Envelope {
    envelope(
        session_code,
        echoed(request_id),
        None,
        Payload::ToolCallResponse(ToolCallResponseData {
            tool_name: tool_name.to_owned(),
            is_client_tool,
            tool_args: tool_args.to_owned(),
            is_allow: true,
            result: outcome.result,
            success: outcome.success,
            error: outcome.error,
        }),
    )
}

/// `AGENT_TOOL_CALL_RESPONSE` denying the call. Nothing ran, so no
/// result/success/error is attached.
pub fn tool_call_deny(
    session_code: &str,
    request_id: &str,
    tool_name: &str,
    tool_args: &str,
    is_client_tool: bool,
) -> Envelope {
    envelope(
        session_code,
        echoed(request_id),
        None,
        Payload::ToolCallResponse(ToolCallResponseData {
            tool_name: tool_name.to_owned(),
            is_client_tool,
            tool_args: tool_args.to_owned(),
            is_allow: false,
            result: None,
            success: None,
            error: None,
        }),
    )
}

/// `INTERRUPT` for the in-flight request `request_id`.
pub fn interrupt(session_code: &str, request_id: &str) -> Envelope {
    envelope(session_code, echoed(request_id), None, Payload::Interrupt)
}

/// `PING` heartbeat.
pub fn ping(session_code: &str) -> Envelope {
    envelope(session_code, ids::new_request_id(), None, Payload::Ping)
}

// --------------------
// Server -> client
// --------------------

/// `PONG` answering the ping `request_id`.
pub fn pong(session_code: &str, request_id: &str) -> Envelope {
    envelope(session_code, echoed(request_id), None, Payload::Pong)
}

/// `AGENT_PROMPT` status update. `message: None` lets the receiver show the
/// prompt type's default text.
pub fn agent_prompt(
    session_code: &str,
    request_id: Option<&str>,
    prompt_type: AgentPromptType,
    message: Option<&str>,
) -> Envelope {
    envelope(
        session_code,
        correlated(request_id),
        None,
        Payload::AgentPrompt(AgentPromptData {
            prompt_type,
            message: message.map(str::to_owned),
        }),
    )
}

/// `AGENT_STREAM` carrying one chunk of generated text.
pub fn agent_stream(session_code: &str, request_id: Option<&str>, token: &str) -> Envelope {
    envelope(
        session_code,
        correlated(request_id),
        Some(token.to_owned()),
        Payload::AgentStream,
    )
}

/// `AGENT_COMPLETE` marker, with optional usage counters.
pub fn agent_complete(
    session_code: &str,
    request_id: Option<&str>,
    usage: AgentCompleteData,
) -> Envelope {
    envelope(
        session_code,
        correlated(request_id),
        None,
        Payload::AgentComplete(usage),
    )
}

/// `AGENT_TOOL_CALL_REQUEST` asking the client to run (or approve) a tool.
pub fn tool_call_request(
    session_code: &str,
    request_id: Option<&str>,
    tool_name: &str,
    tool_args: &str,
    is_client_tool: bool,
) -> Envelope {
    envelope(
        session_code,
        correlated(request_id),
        None,
        Payload::ToolCallRequest(ToolCallRequestData {
            tool_name: tool_name.to_owned(),
            tool_args: tool_args.to_owned(),
            is_client_tool,
        }),
    )
}

/// `AGENT_PROMPT` of type `ERROR` reporting `error` to the peer, e.g. after a
/// frame was rejected.
pub fn protocol_error(
    session_code: &str,
    request_id: Option<&str>,
    error: &dyn Display,
) -> Envelope {
    let message = error.to_string();
    agent_prompt(
        session_code,
        request_id,
        AgentPromptType::Error,
        Some(message.as_str()),
    )
}
