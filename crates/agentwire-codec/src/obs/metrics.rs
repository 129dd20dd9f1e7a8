//! Label-keyed counters for the decoder.
//!
//! Labels are flattened into sorted key vectors so the same label set always
//! maps to the same counter regardless of argument order.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum across all label sets.
    pub fn total(&self) -> u64 {
        self.map.iter().map(|r| r.value().load(Ordering::Relaxed)).sum()
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let labels = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (labels, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (labels, val) in rows {
            if labels.is_empty() {
                let _ = writeln!(out, "{name} {val}");
            } else {
                let _ = writeln!(out, "{name}{{{labels}}} {val}");
            }
        }
    }
}

/// Counters maintained by [`Decoder`](crate::Decoder).
#[derive(Default)]
pub struct CodecMetrics {
    /// Accepted frames, by `kind`.
    pub frames_decoded: CounterVec,
    /// Rejected frames, by error `code`.
    pub frames_rejected: CounterVec,
    /// Frames dropped under the `ignore` unknown-kind policy. Unlabeled: the
    /// kind name comes from the peer.
    pub frames_ignored: CounterVec,
}

impl CodecMetrics {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.frames_decoded.render("agentwire_frames_decoded_total", &mut out);
        self.frames_rejected.render("agentwire_frames_rejected_total", &mut out);
        self.frames_ignored.render("agentwire_frames_ignored_total", &mut out);
        out
    }
}
