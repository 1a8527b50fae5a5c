// crates/shopcheck-core/src/outcome.rs
// ============================================================================
// Module: Call Outcome
// Description: Normalized result of a single HTTP exchange.
// Purpose: Expose status classification and decoded bodies to assertions.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! An [`Outcome`] is what every executed call reduces to: the numeric status
//! plus a body decoded once at construction (JSON when the transport said so,
//! raw bytes otherwise). Transport failures never become outcomes; they stay
//! in the error channel.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Decoded response body for an [`Outcome`].
///
/// # Invariants
/// - `Json` is only produced when the response content type indicated JSON
///   and the payload parsed; undecodable payloads stay `Bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Parsed JSON payload.
    Json(Value),
    /// Raw bytes for non-JSON or undecodable payloads.
    Bytes(Vec<u8>),
    /// No payload.
    Empty,
}

/// Normalized outcome of one HTTP exchange.
///
/// # Invariants
/// - `status` is the HTTP status as received; classification helpers never
///   mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// HTTP status code of the response.
    status: u16,
    /// Decoded response body.
    body: Body,
}

impl Outcome {
    /// Creates an outcome from a status and decoded body.
    #[must_use]
    pub const fn new(status: u16, body: Body) -> Self {
        Self {
            status,
            body,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the decoded body.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the JSON payload when the body decoded as JSON.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => Some(value),
            Body::Bytes(_) | Body::Empty => None,
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true for the not-found status.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns true for 4xx statuses.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }
}
