// crates/shopcheck-core/src/lib.rs
// ============================================================================
// Module: Shopcheck Core
// Description: Transport-agnostic contract-verification logic.
// Purpose: Provide outcome normalization, existence probing, and conditional assertions.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate hosts the verification logic shared by every Shopcheck scenario:
//! a normalized call [`Outcome`], the [`VerifyError`] taxonomy, collection
//! shape normalization for existence probes, the conditional assertion engine
//! that selects an expectation branch from a fresh [`ProbeResult`], and the
//! [`CleanupRecord`] consumed by scoped fixture teardown.
//! Invariants:
//! - Probe results are derived fresh per verification and never memoized.
//! - Exactly one expectation branch applies per verification.
//!
//! Security posture: backend responses are untrusted; parsing fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cleanup;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod probe;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cleanup::CleanupRecord;
pub use engine::MutationKind;
pub use engine::verify_mutation;
pub use error::VerifyError;
pub use outcome::Body;
pub use outcome::Outcome;
pub use probe::ProbeResult;
pub use probe::membership;
pub use probe::normalize_collection;
pub use probe::record_id;
