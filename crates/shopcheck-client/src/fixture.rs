// crates/shopcheck-client/src/fixture.rs
// ============================================================================
// Module: Resource Lifecycle Guard
// Description: Fixture creation and scoped release for banner instances.
// Purpose: Guarantee test-created resources are removed on every exit path.
// Dependencies: shopcheck-core, tracing
// ============================================================================

//! ## Overview
//! When a scenario needs a guaranteed-existing banner rather than a
//! possibly-absent fixed identifier, the guard fabricates one, records its
//! identifier into a [`CleanupRecord`], and hands both back. Callers must
//! invoke [`release`] on every exit path; release failures are logged at warn
//! level and never propagated, so cleanup can never mask the test's actual
//! result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use shopcheck_core::CleanupRecord;
use shopcheck_core::VerifyError;
use shopcheck_core::record_id;

use crate::client::StorefrontClient;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// File name submitted with fabricated banner images.
pub const DUMMY_IMAGE_NAME: &str = "shopcheck-fixture.jpg";

// ============================================================================
// SECTION: Fixture Lifecycle
// ============================================================================

/// Returns a minimal JPEG payload: SOI/APP0 magic bytes plus padding.
#[must_use]
pub fn dummy_jpeg() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
    bytes.resize(1028, 0x30);
    bytes
}

/// Creates one banner fixture and returns its identifier with the cleanup
/// record tracking it.
///
/// # Errors
///
/// Returns [`VerifyError::FixtureCreation`] when the creation call fails or
/// no identifier can be extracted from the response. Nothing is scheduled for
/// cleanup in that case because nothing was created.
pub async fn ensure_banner(
    client: &StorefrontClient,
) -> Result<(String, CleanupRecord), VerifyError> {
    let outcome = client
        .create_banners(DUMMY_IMAGE_NAME, dummy_jpeg())
        .await
        .map_err(|err| VerifyError::FixtureCreation(err.to_string()))?;
    if !matches!(outcome.status(), 200 | 201) {
        return Err(VerifyError::FixtureCreation(format!(
            "banner creation returned status {}",
            outcome.status()
        )));
    }
    let payload = outcome.json().ok_or_else(|| {
        VerifyError::FixtureCreation("banner creation response was not JSON".to_string())
    })?;
    let id = extract_instance_id(payload).ok_or_else(|| {
        VerifyError::FixtureCreation("banner creation response carries no identifier".to_string())
    })?;
    let record = CleanupRecord::created(id.clone());
    Ok((id, record))
}

/// Attempts deletion of the fabricated instance tracked by `record`.
///
/// Must run on every exit path. An empty record is a no-op. Deletion failure
/// is logged, not propagated; a 404 is accepted because the test body may
/// already have deleted the fixture.
pub async fn release(client: &StorefrontClient, record: CleanupRecord) {
    let Some(id) = record.consume() else {
        return;
    };
    match client.delete_banner(&id).await {
        Ok(outcome) if outcome.is_success() || outcome.is_not_found() => {}
        Ok(outcome) => {
            tracing::warn!(id = %id, status = outcome.status(), "fixture cleanup returned unexpected status");
        }
        Err(err) => {
            tracing::warn!(id = %id, error = %err, "fixture cleanup failed");
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Extracts the created identifier from a creation response: directly from an
/// object, or from the first element of a non-empty array.
#[must_use]
pub fn extract_instance_id(payload: &Value) -> Option<String> {
    match payload {
        Value::Object(_) => record_id(payload),
        Value::Array(records) => records.first().and_then(record_id),
        _ => None,
    }
}
