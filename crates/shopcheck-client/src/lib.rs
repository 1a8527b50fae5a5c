// crates/shopcheck-client/src/lib.rs
// ============================================================================
// Module: Shopcheck Client
// Description: HTTP layer for storefront contract verification.
// Purpose: Execute bounded calls, hold the session credential, probe and mutate.
// Dependencies: shopcheck-core, reqwest, serde, tracing
// ============================================================================

//! ## Overview
//! This crate binds the transport-agnostic verification logic in
//! `shopcheck-core` to a real storefront backend over HTTP: a bounded
//! single-shot [`TransportExecutor`], a session [`Credential`] obtained by one
//! login exchange, the storefront [`Endpoints`] surface, the
//! [`StorefrontClient`] that probes and mutates with transcript capture, and
//! the fixture lifecycle guard with scoped release.
//! Invariants:
//! - Calls are sequential; each completes before the next is issued.
//! - Transport failures are surfaced, never retried.
//! - The credential is immutable for the remainder of a test once obtained.
//!
//! Security posture: backend responses are untrusted; parsing fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod endpoints;
pub mod fixture;
pub mod session;
pub mod transport;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::StorefrontClient;
pub use client::TranscriptEntry;
pub use config::HarnessConfig;
pub use config::HarnessEnv;
pub use endpoints::Endpoints;
pub use endpoints::KNOWN_BANNER_ID;
pub use fixture::ensure_banner;
pub use fixture::release;
pub use session::Credential;
pub use transport::DEFAULT_CALL_TIMEOUT;
pub use transport::TransportExecutor;
