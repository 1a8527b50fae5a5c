// crates/shopcheck-core/src/error.rs
// ============================================================================
// Module: Verification Errors
// Description: Error taxonomy for contract-verification runs.
// Purpose: Keep transport, auth, probe, and expectation failures distinguishable.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! One error enum covers every failure class a verification can hit. Transport
//! failures are kept distinct from HTTP-level error statuses so callers never
//! conflate "no response obtained" with "the backend said no".

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Failure taxonomy for contract-verification runs.
///
/// # Invariants
/// - Variants are stable for suite-level error mapping and tests.
/// - String payloads are diagnostic and may include untrusted server text.
/// - [`VerifyError::Transport`] means no HTTP response was obtained; every
///   other variant carries or implies a backend response.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Network-level failure: DNS, connection refused, or timeout. Fatal to
    /// the current call only and never retried.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Login did not yield a usable credential. Fatal to the whole test.
    #[error("authentication failure: {0}")]
    Authentication(String),
    /// Collection fetch failed or had an unrecognized shape. Fatal to the
    /// verification that depended on it.
    #[error("probe failure: {0}")]
    Probe(String),
    /// A mutation denied a target the probe confirmed exists. The primary
    /// defect class this harness surfaces.
    #[error("route inconsistency for `{id}`: probe confirmed existence but mutation returned {status}")]
    RouteInconsistency {
        /// Identifier of the probe-confirmed resource.
        id: String,
        /// Unexpected status returned by the mutating endpoint.
        status: u16,
    },
    /// Mutation outcome matched neither defined expectation branch.
    #[error("unexpected outcome for `{id}`: status {status} ({context})")]
    UnexpectedOutcome {
        /// Identifier of the target resource.
        id: String,
        /// Status returned by the mutating endpoint.
        status: u16,
        /// Which expectation was violated and how.
        context: String,
    },
    /// Fixture creation failed before any cleanup was scheduled.
    #[error("fixture creation failure: {0}")]
    FixtureCreation(String),
    /// Harness configuration was invalid before any call was issued.
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl VerifyError {
    /// Returns true when the error is a transport-level failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
