// request-key-core/src/core/canonical.rs
// ============================================================================
// Module: Request Key Canonicalization
// Description: Deterministic key ordering and compact text encoding for JSON values.
// Purpose: Guarantee byte-identical serialization for structurally equal variables.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Derived keys embed a JSON rendering of caller variables. JSON writers
//! preserve object insertion order, so two equal variable sets built through
//! different code paths would serialize to different text. This module sorts
//! object keys at every nesting depth and then encodes without re-sorting,
//! which keeps derived keys stable across construction order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while canonicalizing variables.
#[derive(Debug, Error)]
pub enum CanonicalError {
    /// The supplied variables contain a value outside the JSON data model.
    #[error("unsupported variables value: {0}")]
    UnsupportedValue(String),
}

// ============================================================================
// SECTION: Canonical Ordering
// ============================================================================

/// Returns a structurally equal value with object keys sorted at every depth.
///
/// Scalars pass through unchanged. Array element order is semantically
/// meaningful and is preserved. Objects are rebuilt with keys in code-point
/// order; the sort runs even when the input happens to arrive sorted, so two
/// objects built via different insertion paths serialize identically.
#[must_use]
pub fn sort_json_value(value: Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value,
        Value::Array(items) => Value::Array(items.into_iter().map(sort_json_value).collect()),
        Value::Object(entries) => {
            let mut entries: Vec<(String, Value)> = entries.into_iter().collect();
            entries.sort_by(|left, right| left.0.cmp(&right.0));
            let mut sorted = Map::with_capacity(entries.len());
            for (key, value) in entries {
                sorted.insert(key, sort_json_value(value));
            }
            Value::Object(sorted)
        }
    }
}

/// Converts serializable variables into canonical JSON value form.
///
/// # Errors
///
/// Returns [`CanonicalError::UnsupportedValue`] when the variables cannot be
/// represented in the JSON data model (non-string map keys, out-of-range
/// numbers, failing `Serialize` implementations). Unsupported values fail
/// loudly rather than passing through with unstable serialization.
pub fn canonical_variables<T: Serialize + ?Sized>(variables: &T) -> Result<Value, CanonicalError> {
    let value = serde_json::to_value(variables)
        .map_err(|err| CanonicalError::UnsupportedValue(err.to_string()))?;
    Ok(sort_json_value(value))
}

// ============================================================================
// SECTION: Canonical Text
// ============================================================================

/// Encodes a canonical value as compact JSON text with no extraneous
/// whitespace.
///
/// Object keys are emitted in the order they appear in `value`; callers sort
/// via [`sort_json_value`] first. The encoder itself never re-sorts.
///
/// # Errors
///
/// Returns [`CanonicalError::UnsupportedValue`] when the value cannot be
/// encoded as JSON text.
pub fn canonical_text(value: &Value) -> Result<String, CanonicalError> {
    serde_json::to_string(value).map_err(|err| CanonicalError::UnsupportedValue(err.to_string()))
}
