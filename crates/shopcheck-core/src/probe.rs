// crates/shopcheck-core/src/probe.rs
// ============================================================================
// Module: Existence Probe
// Description: Collection normalization and membership checks.
// Purpose: Decide whether a target identifier is present in a collection payload.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Collection endpoints may return records as a bare JSON array or wrapped in
//! an object under a conventional key. Normalization happens here, once, so
//! call sites never branch on payload shape. Membership compares each record's
//! identifier field against the target, with the fallback keys the storefront
//! backend is known to emit. Anything else fails closed as a probe failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::error::VerifyError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Wrapper keys accepted when a collection arrives as an object.
pub const WRAPPER_KEYS: [&str; 4] = ["banners", "products", "items", "data"];

/// Identifier keys accepted on individual records, in precedence order.
pub const ID_KEYS: [&str; 3] = ["id", "_id", "bannerId"];

// ============================================================================
// SECTION: Types
// ============================================================================

/// Result of one existence probe against a collection payload.
///
/// # Invariants
/// - Derived fresh per probe call; callers must not cache across mutations.
/// - `record` is `Some` exactly when `found` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// True when the target identifier appeared in the collection.
    pub found: bool,
    /// The matched record, when present.
    pub record: Option<Value>,
    /// The identifier that was probed for.
    pub target: String,
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Normalizes a collection payload to its record sequence.
///
/// Accepts a bare array, or an object wrapping an array under one of
/// [`WRAPPER_KEYS`] (first matching key wins).
///
/// # Errors
///
/// Returns [`VerifyError::Probe`] when the payload is neither accepted shape.
pub fn normalize_collection(payload: &Value) -> Result<&Vec<Value>, VerifyError> {
    if let Value::Array(records) = payload {
        return Ok(records);
    }
    if let Value::Object(map) = payload {
        for key in WRAPPER_KEYS {
            if let Some(Value::Array(records)) = map.get(key) {
                return Ok(records);
            }
        }
        return Err(VerifyError::Probe(
            "collection object has no recognized wrapper key".to_string(),
        ));
    }
    Err(VerifyError::Probe("collection payload is neither array nor object".to_string()))
}

/// Extracts a record's identifier as a string, trying [`ID_KEYS`] in order.
///
/// String identifiers are returned verbatim; numeric identifiers are
/// stringified so probes can compare against externally supplied targets.
#[must_use]
pub fn record_id(record: &Value) -> Option<String> {
    let map = record.as_object()?;
    for key in ID_KEYS {
        match map.get(key) {
            Some(Value::String(id)) if !id.is_empty() => return Some(id.clone()),
            Some(Value::Number(id)) => return Some(id.to_string()),
            _ => {}
        }
    }
    None
}

/// Tests membership of `target` in a collection payload.
///
/// # Errors
///
/// Returns [`VerifyError::Probe`] when the payload shape is unrecognized.
pub fn membership(payload: &Value, target: &str) -> Result<ProbeResult, VerifyError> {
    let records = normalize_collection(payload)?;
    let record = records
        .iter()
        .find(|candidate| record_id(candidate).is_some_and(|id| id == target))
        .cloned();
    Ok(ProbeResult {
        found: record.is_some(),
        record,
        target: target.to_string(),
    })
}
