//! JSON payload recovery from raw model replies.
//!
//! Vision models wrap their answer inconsistently: a ```json fence, a bare
//! ``` fence, or no fence at all. The strategies are tried in that fixed
//! order and the first one that structurally matches is terminal: if its
//! content does not parse, the call yields `None` rather than falling
//! through to a later strategy.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// --- Fence patterns ---

static TAGGED_FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    // First ```json block, tag matched case-insensitively, non-greedy across newlines.
    Regex::new(r"(?is)```json\s*(.*?)\s*```").unwrap()
});

static PLAIN_FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap()
});

/// Recover a single JSON value from a raw model reply.
///
/// Returns `None` when the selected extraction path does not parse. Failure
/// is data here: no panic and no error type crosses this boundary. Pure and
/// deterministic, safe to call concurrently.
pub fn extract_payload(reply: &str) -> Option<Value> {
    if let Some(caps) = TAGGED_FENCE_RE.captures(reply) {
        return parse_candidate(caps.get(1)?.as_str());
    }
    if let Some(caps) = PLAIN_FENCE_RE.captures(reply) {
        return parse_candidate(caps.get(1)?.as_str());
    }
    parse_candidate(reply)
}

fn parse_candidate(content: &str) -> Option<Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}
