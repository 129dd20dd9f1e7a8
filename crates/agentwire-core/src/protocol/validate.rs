//! Raw JSON -> typed envelope.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. `type` is a known kind
//! 2. `sessionCode` is a non-empty string
//! 3. `requestId` is a non-empty string
//! 4. `timestamp` is a non-negative integer
//! 5. `content` (if present) is a string, and `data` matches the kind's shape
//!
//! Optional fields carried as JSON `null` count as absent. Unknown fields are
//! ignored, and so is any `data` sent with a kind that defines no payload.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};
use crate::protocol::envelope::Envelope;
use crate::protocol::kind::MessageKind;
use crate::protocol::payload::{
    AgentCompleteData, AgentPromptData, Payload, ToolCallRequestData, ToolCallResponseData,
    UserMessageData, UserOrderData,
};
use crate::protocol::schema::{InputSchema, SchemaType, ToolSchema};

/// Largest integer a JSON number can carry without precision loss.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// What to do when a tool schema lists `required` names it never declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaCheck {
    /// Skip the check.
    Off,
    /// Log a warning and accept the message.
    #[default]
    Warn,
    /// Reject the message with `PayloadShapeMismatch`.
    Reject,
}

/// Validate a received value with the default (advisory) schema check.
pub fn validate(raw: &Value) -> Result<Envelope> {
    validate_with(raw, SchemaCheck::Warn)
}

/// Validate a received value.
pub fn validate_with(raw: &Value, schema_check: SchemaCheck) -> Result<Envelope> {
    let obj = raw
        .as_object()
        .ok_or(ValidationError::UnknownMessageKind(None))?;

    let kind = read_kind(obj)?;

    let session_code = match present(obj, "sessionCode") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => return Err(ValidationError::MissingSessionCode),
    };

    // Replies echo this id, so an empty one could never be answered.
    let request_id = match present(obj, "requestId") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(ValidationError::MissingRequestId),
    };

    let timestamp = present(obj, "timestamp")
        .and_then(read_timestamp)
        .ok_or(ValidationError::InvalidTimestamp)?;

    let content = match present(obj, "content") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(ValidationError::shape(kind, "content")),
    };

    let data = present(obj, "data").filter(|_| kind.has_payload());
    let payload = read_payload(kind, data, schema_check)?;

    Ok(Envelope::new(
        session_code,
        request_id,
        content,
        payload,
        timestamp,
    ))
}

/// `obj[name]`, treating `null` as absent.
fn present<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name).filter(|v| !v.is_null())
}

fn read_kind(obj: &Map<String, Value>) -> Result<MessageKind> {
    match obj.get("type") {
        Some(Value::String(s)) => s.parse(),
        None | Some(Value::Null) => Err(ValidationError::UnknownMessageKind(None)),
        // A non-string `type` is malformed, not a kind from a newer peer.
        Some(_) => Err(ValidationError::UnknownMessageKind(None)),
    }
}

fn read_timestamp(v: &Value) -> Option<u64> {
    if let Some(ms) = v.as_u64() {
        return Some(ms);
    }
    // Peers that build JSON from doubles may send `1700000000000.0`.
    let f = v.as_f64()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= MAX_SAFE_INTEGER).then_some(f as u64)
}

fn read_payload(
    kind: MessageKind,
    data: Option<&Value>,
    schema_check: SchemaCheck,
) -> Result<Payload> {
    let payload = match kind {
        MessageKind::UserMessage => {
            let f = Fields::open(kind, "data".into(), data)?;
            Payload::UserMessage(UserMessageData {
                workflow_content: f.string("workflowContent")?,
                tool_schemas: read_tool_schemas(&f, schema_check)?,
            })
        }
        MessageKind::UserOrder => {
            let f = Fields::open(kind, "data".into(), data)?;
            Payload::UserOrder(UserOrderData {
                workflow_content: f.string("workflowContent")?,
            })
        }
        MessageKind::AgentToolCallResponse => {
            let f = Fields::open(kind, "data".into(), data)?;
            Payload::ToolCallResponse(ToolCallResponseData {
                tool_name: f.string("toolName")?,
                is_client_tool: f.boolean("isClientTool")?,
                tool_args: f.string("toolArgs")?,
                is_allow: f.boolean("isAllow")?,
                result: f.opt_string("result")?,
                success: f.opt_bool("success")?,
                error: f.opt_string("error")?,
            })
        }
        MessageKind::AgentPrompt => {
            let f = Fields::open(kind, "data".into(), data)?;
            let prompt_type = f
                .get("promptType")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| f.mismatch("promptType"))?;
            Payload::AgentPrompt(AgentPromptData {
                prompt_type,
                message: f.opt_string("message")?,
            })
        }
        MessageKind::AgentComplete => match data {
            // Bare marker: `data` may be omitted entirely.
            None => Payload::AgentComplete(AgentCompleteData::default()),
            Some(_) => {
                let f = Fields::open(kind, "data".into(), data)?;
                Payload::AgentComplete(AgentCompleteData {
                    max_tokens: f.opt_count("maxTokens")?,
                    max_messages: f.opt_count("maxMessages")?,
                    input_tokens: f.opt_count("inputTokens")?,
                    output_tokens: f.opt_count("outputTokens")?,
                    total_tokens: f.opt_count("totalTokens")?,
                    message_count: f.opt_count("messageCount")?,
                })
            }
        },
        MessageKind::AgentToolCallRequest => {
            let f = Fields::open(kind, "data".into(), data)?;
            Payload::ToolCallRequest(ToolCallRequestData {
                tool_name: f.string("toolName")?,
                tool_args: f.string("toolArgs")?,
                is_client_tool: f.boolean("isClientTool")?,
            })
        }
        MessageKind::Interrupt => Payload::Interrupt,
        MessageKind::Ping => Payload::Ping,
        MessageKind::AgentStream => Payload::AgentStream,
        MessageKind::Pong => Payload::Pong,
    };
    Ok(payload)
}

fn read_tool_schemas(f: &Fields<'_>, schema_check: SchemaCheck) -> Result<Option<Vec<ToolSchema>>> {
    let items = match f.get("toolSchemas") {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(f.mismatch("toolSchemas")),
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{}.toolSchemas[{i}]", f.path);
        let schema = read_tool_schema(f.kind, path.clone(), item)?;

        if schema_check != SchemaCheck::Off {
            let undeclared = schema.undeclared_required();
            if !undeclared.is_empty() {
                if schema_check == SchemaCheck::Reject {
                    return Err(ValidationError::shape(
                        f.kind,
                        format!("{path}.inputSchema.required"),
                    ));
                }
                tracing::warn!(
                    tool = %schema.name,
                    undeclared = ?undeclared,
                    "tool schema requires undeclared properties"
                );
            }
        }

        out.push(schema);
    }
    Ok(Some(out))
}

fn read_tool_schema(kind: MessageKind, path: String, item: &Value) -> Result<ToolSchema> {
    let s = Fields::open(kind, path, Some(item))?;
    let name = s.string("name")?;
    let description = s.opt_string("description")?;

    let input = Fields::open(kind, format!("{}.inputSchema", s.path), s.get("inputSchema"))?;
    match input.get("type") {
        Some(Value::String(t)) if t == "object" => {}
        _ => return Err(input.mismatch("type")),
    }

    let properties = match input.get("properties") {
        None => None,
        Some(Value::Object(props)) => Some(props.clone()),
        Some(_) => return Err(input.mismatch("properties")),
    };

    let required = match input.get("required") {
        None => None,
        Some(Value::Array(names)) => {
            let mut out = Vec::with_capacity(names.len());
            for (j, name) in names.iter().enumerate() {
                let name = name
                    .as_str()
                    .ok_or_else(|| input.mismatch(&format!("required[{j}]")))?;
                out.push(name.to_string());
            }
            Some(out)
        }
        Some(_) => return Err(input.mismatch("required")),
    };

    Ok(ToolSchema {
        name,
        description,
        input_schema: InputSchema {
            schema_type: SchemaType::Object,
            properties,
            required,
        },
    })
}

/// Field reader over one JSON object, reporting failures by dotted path.
struct Fields<'a> {
    kind: MessageKind,
    path: String,
    obj: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Fails with the object's own path when it is absent or not an object.
    fn open(kind: MessageKind, path: String, value: Option<&'a Value>) -> Result<Self> {
        match value {
            Some(Value::Object(obj)) => Ok(Self { kind, path, obj }),
            _ => Err(ValidationError::shape(kind, path)),
        }
    }

    fn mismatch(&self, name: &str) -> ValidationError {
        ValidationError::shape(self.kind, format!("{}.{name}", self.path))
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        present(self.obj, name)
    }

    fn string(&self, name: &str) -> Result<String> {
        self.opt_string(name)?.ok_or_else(|| self.mismatch(name))
    }

    fn opt_string(&self, name: &str) -> Result<Option<String>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.mismatch(name)),
        }
    }

    fn boolean(&self, name: &str) -> Result<bool> {
        self.opt_bool(name)?.ok_or_else(|| self.mismatch(name))
    }

    fn opt_bool(&self, name: &str) -> Result<Option<bool>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.mismatch(name)),
        }
    }

    fn opt_count(&self, name: &str) -> Result<Option<u64>> {
        match self.get(name) {
            None => Ok(None),
            Some(v) => v.as_u64().map(Some).ok_or_else(|| self.mismatch(name)),
        }
    }
}
