//! Two-stage parsing of directory lookup responses.
//!
//! Stage one is a syntactic JSON parse and fails loudly. Stage two extracts
//! `results[0].trackId` and treats any shape mismatch as "no match", so
//! schema drift upstream degrades to an empty result instead of an error.

use crate::request::LookupResult;
use app_review_core::ReviewResult;
use serde_json::Value;
use tracing::{debug, warn};

/// Parses a lookup response body.
///
/// - empty body: empty result
/// - not JSON: [`app_review_core::ReviewError::Parse`]
/// - JSON of an unexpected shape: empty result
pub fn parse_lookup_body(body: &[u8]) -> ReviewResult<LookupResult> {
    if body.is_empty() {
        debug!("Lookup response body is empty");
        return Ok(LookupResult::empty());
    }

    let value: Value = serde_json::from_slice(body)?;

    Ok(extract_track_id(&value)
        .map(LookupResult::found)
        .unwrap_or_default())
}

/// Reads `results[0].trackId`. Entries after the first are not inspected
/// beyond being objects.
fn extract_track_id(value: &Value) -> Option<i64> {
    let Some(results) = value.get("results").and_then(Value::as_array) else {
        warn!("Lookup response has no results array");
        return None;
    };
    if !results.iter().all(Value::is_object) {
        warn!("Lookup response results contain a non-object entry");
        return None;
    }

    let track_id = results.first()?.get("trackId").and_then(Value::as_i64);
    if track_id.is_none() {
        debug!("First lookup result has no integer trackId");
    }
    track_id
}
