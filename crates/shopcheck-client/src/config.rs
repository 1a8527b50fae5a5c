// crates/shopcheck-client/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: Environment-backed configuration for verification runs.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Harness settings are read from `SHOPCHECK_*` environment variables and
//! mapped into a small typed structure. Values are parsed with strict UTF-8
//! enforcement and validated; invalid input fails closed rather than falling
//! back to a default silently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use shopcheck_core::VerifyError;
use url::Url;

use crate::transport::DEFAULT_CALL_TIMEOUT;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default storefront base URL when no override is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default login identity for scenario runs.
pub const DEFAULT_IDENTITY: &str = "validuser@example.com";

/// Default login secret for scenario runs.
pub const DEFAULT_SECRET: &str = "validpassword123";

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Storefront base URL override.
    BaseUrl,
    /// Per-call timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Login identity override.
    Identity,
    /// Login secret override.
    Secret,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "SHOPCHECK_BASE_URL",
            Self::TimeoutSeconds => "SHOPCHECK_TIMEOUT_SEC",
            Self::Identity => "SHOPCHECK_EMAIL",
            Self::Secret => "SHOPCHECK_PASSWORD",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Storefront base URL, scheme included, no trailing slash.
    pub base_url: String,
    /// Per-call timeout bound.
    pub timeout: Duration,
    /// Login identity submitted to the auth endpoint.
    pub identity: String,
    /// Login secret submitted to the auth endpoint.
    pub secret: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_CALL_TIMEOUT,
            identity: DEFAULT_IDENTITY.to_string(),
            secret: DEFAULT_SECRET.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for unset keys.
    ///
    /// The timeout override acts as a minimum: it can extend the per-call
    /// bound beyond [`DEFAULT_CALL_TIMEOUT`] but never tighten it below.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Configuration`] when an environment value is
    /// not valid UTF-8, is empty, is not an absolute http(s) URL, or is an
    /// invalid timeout.
    pub fn load() -> Result<Self, VerifyError> {
        let base_url = match read_env_nonempty(HarnessEnv::BaseUrl.as_str())? {
            Some(raw) => validate_base_url(HarnessEnv::BaseUrl.as_str(), &raw)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let timeout = read_env_nonempty(HarnessEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(HarnessEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?
            .map_or(DEFAULT_CALL_TIMEOUT, |requested| requested.max(DEFAULT_CALL_TIMEOUT));
        let identity = read_env_nonempty(HarnessEnv::Identity.as_str())?
            .unwrap_or_else(|| DEFAULT_IDENTITY.to_string());
        let secret = read_env_nonempty(HarnessEnv::Secret.as_str())?
            .unwrap_or_else(|| DEFAULT_SECRET.to_string());
        Ok(Self {
            base_url,
            timeout,
            identity,
            secret,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns [`VerifyError::Configuration`] when the environment variable
/// contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, VerifyError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| VerifyError::Configuration(format!("{name} must be valid UTF-8")))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns [`VerifyError::Configuration`] when the variable is set but empty
/// or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, VerifyError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => {
            Err(VerifyError::Configuration(format!("{name} must not be empty")))
        }
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Validates a base URL and normalizes away any trailing slash.
///
/// # Errors
///
/// Returns [`VerifyError::Configuration`] when the value is not an absolute
/// http(s) URL.
fn validate_base_url(name: &str, raw: &str) -> Result<String, VerifyError> {
    let parsed = Url::parse(raw)
        .map_err(|_| VerifyError::Configuration(format!("{name} must be an absolute URL")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(VerifyError::Configuration(format!(
            "{name} must use the http or https scheme"
        )));
    }
    if parsed.host_str().is_none() {
        return Err(VerifyError::Configuration(format!("{name} must include a host")));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns [`VerifyError::Configuration`] when the value is non-numeric or
/// zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, VerifyError> {
    let trimmed = raw.trim();
    let secs: u64 = trimmed.parse().map_err(|_| {
        VerifyError::Configuration(format!("{name} must be a positive integer number of seconds"))
    })?;
    if secs == 0 {
        return Err(VerifyError::Configuration(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_secs(secs))
}
