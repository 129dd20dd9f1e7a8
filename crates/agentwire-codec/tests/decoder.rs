//! Frame decoder policy tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use agentwire_codec::{config, encode, reject_reply, CodecError, Decoder, Inbound};
use agentwire_core::{build, AgentPromptType, MessageKind, Payload, ToolSchema, ValidationError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("agentwire_codec=debug,agentwire_core=debug")
        .try_init();
}

fn decoder(yaml: &str) -> Decoder {
    init_tracing();
    Decoder::from_config(&config::load_from_str(yaml).unwrap())
}

fn message(inbound: Inbound) -> agentwire_core::Envelope {
    match inbound {
        Inbound::Message(env) => env,
        other => panic!("expected message, got {other:?}"),
    }
}

#[test]
fn encode_then_decode_preserves_envelope() {
    let dec = decoder("version: 1\n");
    let sent = build::user_order("sess-1", "/compact", "{}");
    let text = encode(&sent).unwrap();
    assert_eq!(message(dec.decode(&text).unwrap()), sent);
    assert_eq!(dec.metrics().frames_decoded.get(&[("kind", "USER_ORDER")]), 1);
}

#[test]
fn oversized_frames_are_rejected_before_parsing() {
    let dec = decoder("version: 1\ndecoder:\n  max_frame_bytes: 1024\n");
    let text = encode(&build::agent_stream("sess-1", None, &"x".repeat(2048))).unwrap();
    match dec.decode(&text) {
        Err(CodecError::FrameTooLarge { max, .. }) => assert_eq!(max, 1024),
        other => panic!("expected FrameTooLarge, got {other:?}"),
    }
    assert_eq!(dec.metrics().frames_rejected.get(&[("code", "FRAME_TOO_LARGE")]), 1);
}

#[test]
fn invalid_json_is_malformed() {
    let dec = decoder("version: 1\n");
    let err = dec.decode("{\"type\": \"PING\",").unwrap_err();
    assert_eq!(err.code(), "MALFORMED_FRAME");
}

#[test]
fn unknown_kinds_rejected_by_default() {
    let dec = decoder("version: 1\n");
    let frame = json!({
        "type": "NOT_A_REAL_KIND",
        "sessionCode": "sess-1",
        "requestId": "1",
        "timestamp": 1
    });
    match dec.decode(&frame.to_string()) {
        Err(CodecError::Invalid(ValidationError::UnknownMessageKind(Some(k)))) => {
            assert_eq!(k, "NOT_A_REAL_KIND")
        }
        other => panic!("expected UnknownMessageKind, got {other:?}"),
    }
}

#[test]
fn unknown_kinds_can_be_ignored() {
    let dec = decoder("version: 1\ndecoder:\n  unknown_kinds: ignore\n");
    let frame = json!({ "type": "SESSION_CREATED", "sessionCode": "sess-1" });
    match dec.decode(&frame.to_string()).unwrap() {
        Inbound::Ignored { kind } => assert_eq!(kind, "SESSION_CREATED"),
        other => panic!("expected Ignored, got {other:?}"),
    }
    assert_eq!(dec.metrics().frames_ignored.total(), 1);

    // no type at all is still a protocol error
    let err = dec.decode(&json!({ "sessionCode": "sess-1" }).to_string()).unwrap_err();
    assert_eq!(err.code(), "UNKNOWN_MESSAGE_KIND");
}

#[test]
fn non_string_kinds_are_never_ignored() {
    let dec = decoder("version: 1\ndecoder:\n  unknown_kinds: ignore\n");
    for kind in [json!(5), json!(true), json!({ "name": "PING" })] {
        let frame = json!({ "type": kind, "sessionCode": "sess-1" });
        match dec.decode(&frame.to_string()) {
            Err(CodecError::Invalid(ValidationError::UnknownMessageKind(None))) => {}
            other => panic!("expected UnknownMessageKind(None), got {other:?}"),
        }
    }
    assert_eq!(dec.metrics().frames_ignored.total(), 0);
    assert_eq!(
        dec.metrics().frames_rejected.get(&[("code", "UNKNOWN_MESSAGE_KIND")]),
        3
    );
}

#[test]
fn ignored_kinds_share_one_counter() {
    let dec = decoder("version: 1\ndecoder:\n  unknown_kinds: ignore\n");
    for i in 0..500 {
        let frame = json!({ "type": format!("FUTURE_KIND_{i}"), "sessionCode": "sess-1" });
        assert!(matches!(dec.decode(&frame.to_string()).unwrap(), Inbound::Ignored { .. }));
    }
    assert_eq!(dec.metrics().frames_ignored.get(&[]), 500);

    let text = dec.metrics().render();
    assert!(text.contains("\nagentwire_frames_ignored_total 500\n"), "{text}");
    assert!(!text.contains("FUTURE_KIND_"), "{text}");
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn server_role_accepts_only_client_kinds() {
    let dec = decoder("version: 1\ndecoder:\n  role: server\n");
    let ping = encode(&build::ping("sess-1")).unwrap();
    assert_eq!(message(dec.decode(&ping).unwrap()).kind(), MessageKind::Ping);

    let pong = encode(&build::pong("sess-1", "1")).unwrap();
    match dec.decode(&pong) {
        Err(CodecError::UnexpectedDirection { kind, .. }) => assert_eq!(kind, MessageKind::Pong),
        other => panic!("expected UnexpectedDirection, got {other:?}"),
    }
}

#[test]
fn client_role_accepts_only_server_kinds() {
    let dec = decoder("version: 1\ndecoder:\n  role: client\n");
    let req = encode(&build::tool_call_request("sess-1", Some("9"), "search_web", "{}", true)).unwrap();
    let env = message(dec.decode(&req).unwrap());
    assert_eq!(env.request_id(), "9");

    let deny = encode(&build::tool_call_deny("sess-1", "9", "search_web", "{}", true)).unwrap();
    let err = dec.decode(&deny).unwrap_err();
    assert_eq!(err.code(), "UNEXPECTED_DIRECTION");
}

#[test]
fn strict_schema_check_applies_to_decoding() {
    let mut tool = ToolSchema::new("resize_image");
    tool.input_schema.required = Some(vec!["width".into()]);
    let text = encode(&build::user_message("sess-1", "resize", "{}", Some(vec![tool]))).unwrap();

    let lenient = decoder("version: 1\n");
    assert!(lenient.decode(&text).is_ok());

    let strict = decoder("version: 1\ndecoder:\n  tool_schema_check: reject\n");
    let err = strict.decode(&text).unwrap_err();
    assert_eq!(err.code(), "PAYLOAD_SHAPE_MISMATCH");
    assert!(err.to_string().contains("data.toolSchemas[0].inputSchema.required"), "{err}");
}

#[test]
fn rejected_frame_gets_an_error_prompt() {
    let dec = decoder("version: 1\n");
    let err = dec
        .decode(&json!({ "type": "PING", "sessionCode": "sess-1", "requestId": "77" }).to_string())
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_TIMESTAMP");

    let reply = reject_reply("sess-1", Some("77"), &err).expect("session is known");
    assert_eq!(reply.request_id(), "77");
    match reply.payload() {
        Payload::AgentPrompt(p) => {
            assert_eq!(p.prompt_type, AgentPromptType::Error);
            assert_eq!(p.message.as_deref(), Some(err.to_string().as_str()));
        }
        other => panic!("unexpected payload {other:?}"),
    }

    let fresh = reject_reply("sess-1", Some(""), &err).unwrap();
    assert!(!fresh.request_id().is_empty());
    assert!(reject_reply("", None, &err).is_none());
}

#[test]
fn metrics_render_in_text_format() {
    let dec = decoder("version: 1\n");
    dec.decode(&encode(&build::ping("sess-1")).unwrap()).unwrap();
    let _ = dec.decode("not json");

    let text = dec.metrics().render();
    assert!(text.contains("# TYPE agentwire_frames_decoded_total counter"));
    assert!(text.contains("agentwire_frames_decoded_total{kind=\"PING\"} 1"));
    assert!(text.contains("agentwire_frames_rejected_total{code=\"MALFORMED_FRAME\"} 1"));
}
