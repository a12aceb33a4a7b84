//! Parsing of raw kubectl output.
//!
//! kubectl's jsonpath output is not always clean JSON: depending on how the
//! template was quoted it can come back wrapped in quote characters. The
//! parsers here accept that and reduce every answer to an explicit case.

use serde_json::{Map, Value};
use tracing::trace;

use crate::core::domain::SecretManifest;
use crate::core::types::{DataKey, EncodedValue, SecretName};

/// Result of parsing the `{.data}` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSpan {
    /// A well-formed, empty data map.
    Empty,
    /// A well-formed data map, in retrieval order.
    Entries(Vec<(DataKey, EncodedValue)>),
    /// No brace-delimited span, or one that is not a map of strings.
    Malformed,
}

/// Parse the output of `kubectl get secret <name> -o jsonpath={.data}`.
///
/// The data map is the first `{...}` span in the output. Values are base64,
/// so the first closing brace always ends the span.
pub fn parse_data(raw: &str) -> DataSpan {
    let Some(span) = brace_span(raw) else {
        trace!("no brace span in data output");
        return DataSpan::Malformed;
    };

    let object: Map<String, Value> = match serde_json::from_str(span) {
        Ok(object) => object,
        Err(e) => {
            trace!(error = %e, "data span is not a JSON object");
            return DataSpan::Malformed;
        }
    };

    if object.is_empty() {
        return DataSpan::Empty;
    }

    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::String(s) => entries.push((key, s)),
            _ => return DataSpan::Malformed,
        }
    }
    DataSpan::Entries(entries)
}

/// Parse the output of `kubectl get secret <name> -o json`.
///
/// Returns `None` when the output is empty or not a secret object.
pub fn parse_manifest(raw: &str) -> Option<SecretManifest> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str(raw)
        .map_err(|e| trace!(error = %e, "manifest output is not valid JSON"))
        .ok()
}

/// Parse the whitespace-separated output of the name listing query.
pub fn parse_names(raw: &str) -> Vec<SecretName> {
    raw.split_whitespace()
        .map(|name| name.trim_matches(|c| c == '\'' || c == '"'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let len = raw[start..].find('}')?;
    Some(&raw[start..=start + len])
}
