use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::product::value_objects::ProductId;

use super::errors::UpstreamError;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").expect("valid regex"));
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?[ \t]*```$").expect("valid regex"));

/// Removes a surrounding markdown code fence (with optional language tag).
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let start = OPENING_FENCE.find(trimmed).map_or(0, |m| m.end());
    let body = &trimmed[start..];
    let end = CLOSING_FENCE.find(body).map_or(body.len(), |m| m.start());
    body[..end].trim()
}

/// Extracts the recommended ids from a raw completion.
///
/// Text that is not JSON is an upstream failure. Valid JSON without a
/// `recommendedIds` array is a successful answer with no picks. Ids that do
/// not normalize are dropped, repeats are collapsed.
pub fn parse_recommended_ids(raw: &str) -> Result<Vec<ProductId>, UpstreamError> {
    let text = strip_code_fence(raw);
    if text.is_empty() {
        return Err(UpstreamError::EmptyCompletion);
    }

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

    let Some(ids) = parsed.get("recommendedIds").and_then(|v| v.as_array()) else {
        return Ok(vec![]);
    };

    let mut seen = HashSet::new();
    Ok(ids
        .iter()
        .filter_map(ProductId::from_json)
        .filter(|id| seen.insert(*id))
        .collect())
}
