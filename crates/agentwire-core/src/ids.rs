//! Request ids and timestamps stamped onto outbound envelopes.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Fresh correlation id for a request that expects a reply.
///
/// Ids are random v4 UUIDs, so two envelopes built within the same
/// millisecond (or by two peers of one session) never share an id.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}
