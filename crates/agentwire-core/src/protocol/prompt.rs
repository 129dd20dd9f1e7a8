//! Agent prompt types and their default display messages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status prompts the Agent pushes while working on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentPromptType {
    Thinking,
    ToolCalling,
    ToolComplete,
    Summary,
    SummaryComplete,
    Interrupted,
    Error,
}

impl AgentPromptType {
    pub const ALL: [AgentPromptType; 7] = [
        AgentPromptType::Thinking,
        AgentPromptType::ToolCalling,
        AgentPromptType::ToolComplete,
        AgentPromptType::Summary,
        AgentPromptType::SummaryComplete,
        AgentPromptType::Interrupted,
        AgentPromptType::Error,
    ];

    /// Wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentPromptType::Thinking => "THINKING",
            AgentPromptType::ToolCalling => "TOOL_CALLING",
            AgentPromptType::ToolComplete => "TOOL_COMPLETE",
            AgentPromptType::Summary => "SUMMARY",
            AgentPromptType::SummaryComplete => "SUMMARY_COMPLETE",
            AgentPromptType::Interrupted => "INTERRUPTED",
            AgentPromptType::Error => "ERROR",
        }
    }

    /// Message shown when a prompt arrives without one.
    ///
    /// The match is exhaustive, so a new prompt type does not compile until
    /// it is given a default here.
    pub fn default_message(self) -> &'static str {
        match self {
            AgentPromptType::Thinking => "Agent is analyzing the problem...",
            AgentPromptType::ToolCalling => "Agent is calling a tool...",
            AgentPromptType::ToolComplete => "Tool call finished, continuing analysis...",
            AgentPromptType::Summary => "Agent is generating a summary...",
            AgentPromptType::SummaryComplete => "Summary generated",
            AgentPromptType::Interrupted => "Execution was interrupted",
            AgentPromptType::Error => "An error occurred during execution",
        }
    }
}

/// Default display message for `prompt_type`.
pub fn default_prompt_message(prompt_type: AgentPromptType) -> &'static str {
    prompt_type.default_message()
}

impl fmt::Display for AgentPromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a prompt type string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown prompt type: {0}")]
pub struct UnknownPromptType(pub String);

impl FromStr for AgentPromptType {
    type Err = UnknownPromptType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentPromptType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPromptType(s.to_string()))
    }
}
