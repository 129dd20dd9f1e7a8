//! Envelope validation vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use agentwire_core::{validate, ValidationError};

use vector_loader::load;

const VECTORS: &[&str] = &[
    "user_message_full.json",
    "user_message_null_tool_schemas.json",
    "user_message_missing_workflow.json",
    "user_message_missing_data.json",
    "user_message_bad_schema_type.json",
    "user_message_schema_missing_name.json",
    "user_message_required_not_strings.json",
    "user_message_content_not_string.json",
    "user_order_ok.json",
    "user_order_missing_workflow.json",
    "tool_call_response_ok.json",
    "tool_call_response_null_optionals.json",
    "tool_call_response_missing_is_allow.json",
    "tool_call_response_missing_tool_name.json",
    "tool_call_response_missing_is_client_tool.json",
    "tool_call_response_missing_tool_args.json",
    "tool_call_response_bool_as_string.json",
    "interrupt_ignores_data.json",
    "ping_ok.json",
    "agent_prompt_default_message.json",
    "agent_prompt_unknown_type.json",
    "agent_prompt_missing_type.json",
    "agent_stream_ok.json",
    "agent_complete_no_data.json",
    "agent_complete_usage.json",
    "agent_complete_negative_counter.json",
    "agent_complete_data_not_object.json",
    "tool_call_request_ok.json",
    "tool_call_request_missing_tool_args.json",
    "tool_call_request_missing_tool_name.json",
    "tool_call_request_missing_is_client_tool.json",
    "tool_call_request_data_array.json",
    "pong_ok.json",
    "unknown_kind.json",
    "lowercase_kind.json",
    "missing_kind.json",
    "non_string_kind.json",
    "unknown_kind_before_session.json",
    "empty_session_code.json",
    "missing_session_before_data.json",
    "numeric_request_id.json",
    "missing_request_id.json",
    "empty_request_id.json",
    "negative_timestamp.json",
    "string_timestamp.json",
    "fractional_timestamp.json",
    "integral_float_timestamp.json",
];

#[test]
fn validation_vectors() {
    for f in VECTORS {
        let v = load(f);
        let res = validate(&v.frame);

        if let Some(ex) = v.expect_error {
            let e = res.expect_err(&format!("expected error, vector={}", v.description));
            assert_eq!(e.code().as_str(), ex.code, "vector={}", v.description);
            if let ValidationError::PayloadShapeMismatch { kind, field } = &e {
                assert_eq!(Some(field.as_str()), ex.field.as_deref(), "vector={}", v.description);
                assert_eq!(Some(kind.as_str()), ex.kind.as_deref(), "vector={}", v.description);
            }
            continue;
        }

        let env = res.unwrap_or_else(|e| panic!("vector={}: {e}", v.description));
        let ex = v.expect.expect("missing expect block");
        assert_eq!(env.to_value(), ex, "vector={}", v.description);
    }
}

#[test]
fn non_object_frames_have_no_kind() {
    for raw in [serde_json::json!([]), serde_json::json!("PING"), serde_json::Value::Null] {
        assert_eq!(validate(&raw), Err(ValidationError::UnknownMessageKind(None)));
    }
}

#[test]
fn unknown_kind_error_names_the_kind() {
    let v = load("unknown_kind.json");
    let e = validate(&v.frame).unwrap_err();
    assert_eq!(
        e,
        ValidationError::UnknownMessageKind(Some("NOT_A_REAL_KIND".into()))
    );
    assert!(e.to_string().contains("NOT_A_REAL_KIND"));
}

#[test]
fn non_string_kind_carries_no_name() {
    let v = load("non_string_kind.json");
    assert_eq!(validate(&v.frame), Err(ValidationError::UnknownMessageKind(None)));

    for kind in [serde_json::json!(true), serde_json::json!({ "name": "PING" })] {
        let mut frame = v.frame.clone();
        frame["type"] = kind;
        assert_eq!(validate(&frame), Err(ValidationError::UnknownMessageKind(None)));
    }
}

#[test]
fn serde_deserialize_goes_through_validation() {
    let ok = load("ping_ok.json");
    let env: agentwire_core::Envelope = serde_json::from_value(ok.frame).unwrap();
    assert_eq!(env.session_code(), "sess-1");

    // null optionals are absent on the serde path too
    let nulls = load("user_message_null_tool_schemas.json");
    let env: agentwire_core::Envelope = serde_json::from_value(nulls.frame).unwrap();
    assert_eq!(env.to_value(), nulls.expect.unwrap());

    let bad = load("tool_call_response_missing_is_allow.json");
    let err = serde_json::from_value::<agentwire_core::Envelope>(bad.frame).unwrap_err();
    assert!(err.to_string().contains("data.isAllow"), "{err}");
}
