//! Message kinds (the `type` discriminant of every envelope).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Which peer originates a kind. Fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ClientToServer,
    ServerToClient,
}

/// Closed set of message kinds. The serialized names are wire identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    UserMessage,
    UserOrder,
    AgentToolCallResponse,
    Interrupt,
    Ping,
    AgentPrompt,
    AgentStream,
    AgentComplete,
    AgentToolCallRequest,
    Pong,
}

impl MessageKind {
    /// Every kind, client-originated first.
    pub const ALL: [MessageKind; 10] = [
        MessageKind::UserMessage,
        MessageKind::UserOrder,
        MessageKind::AgentToolCallResponse,
        MessageKind::Interrupt,
        MessageKind::Ping,
        MessageKind::AgentPrompt,
        MessageKind::AgentStream,
        MessageKind::AgentComplete,
        MessageKind::AgentToolCallRequest,
        MessageKind::Pong,
    ];

    /// Wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::UserMessage => "USER_MESSAGE",
            MessageKind::UserOrder => "USER_ORDER",
            MessageKind::AgentToolCallResponse => "AGENT_TOOL_CALL_RESPONSE",
            MessageKind::Interrupt => "INTERRUPT",
            MessageKind::Ping => "PING",
            MessageKind::AgentPrompt => "AGENT_PROMPT",
            MessageKind::AgentStream => "AGENT_STREAM",
            MessageKind::AgentComplete => "AGENT_COMPLETE",
            MessageKind::AgentToolCallRequest => "AGENT_TOOL_CALL_REQUEST",
            MessageKind::Pong => "PONG",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            MessageKind::UserMessage
            | MessageKind::UserOrder
            | MessageKind::AgentToolCallResponse
            | MessageKind::Interrupt
            | MessageKind::Ping => Direction::ClientToServer,
            MessageKind::AgentPrompt
            | MessageKind::AgentStream
            | MessageKind::AgentComplete
            | MessageKind::AgentToolCallRequest
            | MessageKind::Pong => Direction::ServerToClient,
        }
    }

    /// True when the kind defines a `data` shape. Kinds without one ignore
    /// any `data` a peer sends.
    pub fn has_payload(self) -> bool {
        !matches!(
            self,
            MessageKind::Interrupt
                | MessageKind::Ping
                | MessageKind::AgentStream
                | MessageKind::Pong
        )
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the wire identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownMessageKind(Some(s.to_string())))
    }
}
