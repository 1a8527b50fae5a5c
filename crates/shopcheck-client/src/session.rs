// crates/shopcheck-client/src/session.rs
// ============================================================================
// Module: Session Context
// Description: One login exchange yielding an immutable bearer credential.
// Purpose: Authenticate once and propagate the credential to later calls.
// Dependencies: shopcheck-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! Exactly one exchange with the identity-verification endpoint. Success means
//! status 200 with a non-empty token field in the body; anything else is an
//! authentication failure, which is fatal to the whole test. The resulting
//! [`Credential`] is immutable and attached unmodified to every later
//! authorized request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;
use serde_json::json;
use shopcheck_core::VerifyError;

use crate::endpoints::Endpoints;
use crate::transport::TransportExecutor;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Token field names accepted in a login response, in precedence order.
pub const TOKEN_KEYS: [&str; 3] = ["token", "accessToken", "access_token"];

// ============================================================================
// SECTION: Types
// ============================================================================

/// Opaque bearer credential for one test run.
///
/// # Invariants
/// - Non-empty; construction rejects empty tokens.
/// - Immutable once established, never persisted beyond the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Raw bearer token.
    token: String,
}

impl Credential {
    /// Wraps a token, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Authentication`] when the token is empty.
    pub fn new(token: String) -> Result<Self, VerifyError> {
        if token.trim().is_empty() {
            return Err(VerifyError::Authentication("login yielded an empty token".to_string()));
        }
        Ok(Self {
            token,
        })
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

// ============================================================================
// SECTION: Authentication
// ============================================================================

/// Performs the single login exchange and returns the credential.
///
/// # Errors
///
/// - [`VerifyError::Transport`] when no response is obtained.
/// - [`VerifyError::Authentication`] when the exchange does not yield a
///   non-empty token; this is fatal to the test.
pub async fn authenticate(
    transport: &TransportExecutor,
    endpoints: &Endpoints,
    identity: &str,
    secret: &str,
) -> Result<Credential, VerifyError> {
    let payload = json!({
        "email": identity,
        "password": secret,
    });
    let outcome = transport
        .execute(Method::POST, &endpoints.login(), HeaderMap::new(), Some(&payload))
        .await?;
    if outcome.status() != 200 {
        return Err(VerifyError::Authentication(format!(
            "login returned status {}",
            outcome.status()
        )));
    }
    let body = outcome
        .json()
        .ok_or_else(|| VerifyError::Authentication("login response was not JSON".to_string()))?;
    let token = extract_token(body).ok_or_else(|| {
        VerifyError::Authentication("login response contains no token field".to_string())
    })?;
    Credential::new(token)
}

/// Extracts the token from a login response body, trying [`TOKEN_KEYS`] in
/// order.
fn extract_token(body: &Value) -> Option<String> {
    let map = body.as_object()?;
    for key in TOKEN_KEYS {
        if let Some(Value::String(token)) = map.get(key) {
            return Some(token.clone());
        }
    }
    None
}
