// crates/shopcheck-client/src/client.rs
// ============================================================================
// Module: Storefront Client
// Description: Probe and mutation calls against the storefront backend.
// Purpose: Drive existence-gated verifications with transcript capture.
// Dependencies: shopcheck-core, reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! The [`StorefrontClient`] owns the transport executor, the session
//! credential, and a per-run transcript of every call. It exposes the
//! storefront operations the suites consume and the existence-gated
//! verification entry points that pair a fresh probe with exactly one
//! mutating call.
//! Invariants:
//! - Probes are issued fresh immediately before the mutation they gate.
//! - The credential, once set, is attached unmodified to authorized calls.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use shopcheck_core::MutationKind;
use shopcheck_core::Outcome;
use shopcheck_core::ProbeResult;
use shopcheck_core::VerifyError;
use shopcheck_core::membership;
use shopcheck_core::verify_mutation;

use crate::config::HarnessConfig;
use crate::endpoints::Endpoints;
use crate::session;
use crate::session::Credential;
use crate::transport::TransportExecutor;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One recorded call in the per-run transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// Position of the call within the run, starting at 1.
    pub sequence: u64,
    /// HTTP method of the call.
    pub method: String,
    /// Absolute URL of the call.
    pub url: String,
    /// Response status, when a response was obtained.
    pub status: Option<u16>,
    /// Transport failure description, when no response was obtained.
    pub error: Option<String>,
}

/// Storefront client with session credential and transcript capture.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    /// Bounded single-shot executor.
    transport: TransportExecutor,
    /// Storefront endpoint surface.
    endpoints: Endpoints,
    /// Session credential, set by [`StorefrontClient::authenticate`].
    credential: Option<Credential>,
    /// Recorded calls for this run.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl StorefrontClient {
    /// Creates a client from harness configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &HarnessConfig) -> Result<Self, VerifyError> {
        let transport = TransportExecutor::new(config.timeout)?;
        Ok(Self {
            transport,
            endpoints: Endpoints::new(&config.base_url),
            credential: None,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the endpoint surface.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the session credential, when established.
    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Performs the single login exchange and stores the credential.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Authentication`] when login does not yield a
    /// usable credential; no subsequent authorized call can proceed.
    pub async fn authenticate(&mut self, identity: &str, secret: &str) -> Result<(), VerifyError> {
        let result = session::authenticate(&self.transport, &self.endpoints, identity, secret).await;
        self.record("POST", &self.endpoints.login(), &result_status(&result));
        let credential = result?;
        self.credential = Some(credential);
        Ok(())
    }

    /// Builds headers for an authorized call, attaching the bearer credential
    /// when one is established.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(credential) = &self.credential
            && let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", credential.as_str()))
        {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    // ------------------------------------------------------------------
    // Probes
    // ------------------------------------------------------------------

    /// Probes the banner collection for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Probe`] when the fetch is non-200 or the body
    /// has an unrecognized shape.
    pub async fn probe_banner(&self, target: &str) -> Result<ProbeResult, VerifyError> {
        self.probe_collection(&self.endpoints.get_banners(), target).await
    }

    /// Probes the product collection for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Probe`] on fetch failure or unrecognized shape.
    pub async fn probe_product(&self, target: &str) -> Result<ProbeResult, VerifyError> {
        self.probe_collection(&self.endpoints.products(), target).await
    }

    /// Fetches a collection endpoint and tests membership of `target`.
    ///
    /// The result is derived fresh on every call and must not be cached
    /// across mutating calls.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Probe`] on fetch failure or unrecognized shape.
    pub async fn probe_collection(
        &self,
        url: &str,
        target: &str,
    ) -> Result<ProbeResult, VerifyError> {
        let outcome = self.call(Method::GET, url, None).await?;
        if outcome.status() != 200 {
            return Err(VerifyError::Probe(format!(
                "collection fetch returned status {}",
                outcome.status()
            )));
        }
        let payload = outcome
            .json()
            .ok_or_else(|| VerifyError::Probe("collection response was not JSON".to_string()))?;
        membership(payload, target)
    }

    // ------------------------------------------------------------------
    // Storefront operations
    // ------------------------------------------------------------------

    /// `DELETE /api/settings/banners/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn delete_banner(&self, id: &str) -> Result<Outcome, VerifyError> {
        self.call(Method::DELETE, &self.endpoints.banner(id), None).await
    }

    /// Uploads one banner image via `POST /api/settings/banners`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when the payload cannot be formed
    /// or no response is obtained.
    pub async fn create_banners(
        &self,
        image_name: &str,
        image_bytes: Vec<u8>,
    ) -> Result<Outcome, VerifyError> {
        let part = Part::bytes(image_bytes)
            .file_name(image_name.to_string())
            .mime_str("image/jpeg")
            .map_err(|err| VerifyError::Transport(format!("invalid multipart payload: {err}")))?;
        let form = Form::new().part("images", part);
        let url = self.endpoints.create_banners();
        let result = self.transport.execute_multipart(&url, self.auth_headers(), form).await;
        self.record("POST", &url, &result_status(&result));
        result
    }

    /// `POST /api/settings/update-feature-products` with the given ids.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn update_feature_products(&self, ids: &[String]) -> Result<Outcome, VerifyError> {
        let payload = json!({ "productIds": ids });
        self.call(Method::POST, &self.endpoints.update_feature_products(), Some(&payload)).await
    }

    /// `GET /api/settings/fetch-feature-products`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn fetch_feature_products(&self) -> Result<Outcome, VerifyError> {
        self.call(Method::GET, &self.endpoints.fetch_feature_products(), None).await
    }

    /// `GET /api/products`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn list_products(&self) -> Result<Outcome, VerifyError> {
        self.call(Method::GET, &self.endpoints.products(), None).await
    }

    /// `POST /api/products` with a JSON product record.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn create_product(&self, product: &Value) -> Result<Outcome, VerifyError> {
        self.call(Method::POST, &self.endpoints.products(), Some(product)).await
    }

    /// `POST /api/cart` adding one product.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<Outcome, VerifyError> {
        let payload = json!({
            "productId": product_id,
            "quantity": quantity,
        });
        self.call(Method::POST, &self.endpoints.cart(), Some(&payload)).await
    }

    /// `GET /api/cart`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] when no response is obtained.
    pub async fn get_cart(&self) -> Result<Outcome, VerifyError> {
        self.call(Method::GET, &self.endpoints.cart(), None).await
    }

    // ------------------------------------------------------------------
    // Existence-gated verification
    // ------------------------------------------------------------------

    /// Probes for `target`, then verifies a banner deletion against the
    /// branch the probe selected.
    ///
    /// # Errors
    ///
    /// Propagates probe failures and the engine's branch verdicts; see
    /// [`verify_mutation`].
    pub async fn verify_banner_delete(&self, target: &str) -> Result<Outcome, VerifyError> {
        let probe = self.probe_banner(target).await?;
        verify_mutation(MutationKind::Delete, probe, || self.delete_banner(target)).await
    }

    /// Like [`StorefrontClient::verify_banner_delete`], with a confirming
    /// re-probe after a successful deletion under the found branch.
    ///
    /// # Errors
    ///
    /// Additionally returns [`VerifyError::UnexpectedOutcome`] when the
    /// target is still listed after a deletion the engine judged successful.
    pub async fn verify_banner_delete_with_recheck(
        &self,
        target: &str,
    ) -> Result<Outcome, VerifyError> {
        let probe = self.probe_banner(target).await?;
        let was_found = probe.found;
        let outcome = verify_mutation(MutationKind::Delete, probe, || self.delete_banner(target))
            .await?;
        if was_found {
            let recheck = self.probe_banner(target).await?;
            if recheck.found {
                return Err(VerifyError::UnexpectedOutcome {
                    id: target.to_string(),
                    status: outcome.status(),
                    context: "target still listed after successful delete".to_string(),
                });
            }
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Executes one authorized JSON call and records it in the transcript.
    async fn call(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Outcome, VerifyError> {
        let label = method.to_string();
        let result = self.transport.execute(method, url, self.auth_headers(), body).await;
        self.record(&label, url, &result_status(&result));
        result
    }

    /// Appends one transcript entry.
    fn record(&self, method: &str, url: &str, status: &Result<u16, String>) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        let (status, error) = match status {
            Ok(code) => (Some(*code), None),
            Err(message) => (None, Some(message.clone())),
        };
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            url: url.to_string(),
            status,
            error,
        });
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Projects a call result into transcript form.
fn result_status<T>(result: &Result<T, VerifyError>) -> Result<u16, String>
where
    T: StatusCarrier,
{
    match result {
        Ok(value) => Ok(value.status_code()),
        Err(err) => Err(err.to_string()),
    }
}

/// Types that expose a status code for transcript capture.
trait StatusCarrier {
    /// Returns the HTTP status associated with the value.
    fn status_code(&self) -> u16;
}

impl StatusCarrier for Outcome {
    fn status_code(&self) -> u16 {
        self.status()
    }
}

impl StatusCarrier for Credential {
    fn status_code(&self) -> u16 {
        200
    }
}
