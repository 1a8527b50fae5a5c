// crates/shopcheck-client/src/transport.rs
// ============================================================================
// Module: Transport Executor
// Description: Single-shot bounded HTTP execution.
// Purpose: Issue one request per call and normalize the result into an Outcome.
// Dependencies: reqwest, shopcheck-core, tracing
// ============================================================================

//! ## Overview
//! One request in, one [`Outcome`] out. Every call is bounded by a fixed
//! timeout; exceeding it yields a transport failure, not a hang. Network-level
//! failures (DNS, connection refused, timeout) surface as
//! [`VerifyError::Transport`] and are never conflated with HTTP error
//! statuses, and nothing is retried: the probe-then-act flow above this layer
//! depends on observing each call's true result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use serde_json::Value;
use shopcheck_core::Body;
use shopcheck_core::Outcome;
use shopcheck_core::VerifyError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Per-call timeout bound applied when no override is configured.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// SECTION: Executor
// ============================================================================

/// Bounded single-shot HTTP executor.
///
/// # Invariants
/// - Every request carries the configured timeout.
/// - A timed-out or refused call is a terminal transport failure for that
///   call; it is not retried.
#[derive(Debug, Clone)]
pub struct TransportExecutor {
    /// Underlying HTTP client.
    client: Client,
    /// Per-call timeout bound.
    timeout: Duration,
}

impl TransportExecutor {
    /// Creates an executor with the given per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, VerifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| VerifyError::Transport(format!("failed to build http client: {err}")))?;
        Ok(Self {
            client,
            timeout,
        })
    }

    /// Returns the per-call timeout bound.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Executes one request with an optional JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained. HTTP
    /// error statuses are not errors here; they come back inside the outcome.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<&Value>,
    ) -> Result<Outcome, VerifyError> {
        let mut request = self.client.request(method, url).headers(headers);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        self.finish(url, request).await
    }

    /// Executes one POST with a multipart payload.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn execute_multipart(
        &self,
        url: &str,
        headers: HeaderMap,
        form: Form,
    ) -> Result<Outcome, VerifyError> {
        let request = self.client.post(url).headers(headers).multipart(form);
        self.finish(url, request).await
    }

    /// Sends a prepared request and decodes the response.
    async fn finish(&self, url: &str, request: RequestBuilder) -> Result<Outcome, VerifyError> {
        let response = request.send().await.map_err(|err| classify_send_error(&err))?;
        let outcome = decode_response(response).await?;
        tracing::debug!(url, status = outcome.status(), "call completed");
        Ok(outcome)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps a reqwest send failure into the transport failure class.
fn classify_send_error(err: &reqwest::Error) -> VerifyError {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else {
        "network"
    };
    VerifyError::Transport(format!("{kind} failure: {err}"))
}

/// Decodes a response into an outcome, parsing JSON when the content type
/// indicates it and keeping raw bytes otherwise.
async fn decode_response(response: Response) -> Result<Outcome, VerifyError> {
    let status = response.status().as_u16();
    let indicates_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));
    let bytes = response
        .bytes()
        .await
        .map_err(|err| VerifyError::Transport(format!("failed to read response body: {err}")))?;
    let body = if bytes.is_empty() {
        Body::Empty
    } else if indicates_json {
        // A JSON content type with an unparsable payload stays raw; the
        // caller decides whether that is acceptable for its check.
        serde_json::from_slice(&bytes).map_or_else(|_| Body::Bytes(bytes.to_vec()), Body::Json)
    } else {
        Body::Bytes(bytes.to_vec())
    };
    Ok(Outcome::new(status, body))
}
