// crates/shopcheck-client/src/endpoints.rs
// ============================================================================
// Module: Storefront Endpoints
// Description: URL construction for the storefront API surface.
// Purpose: Keep every consumed route in one place.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The harness consumes the storefront API; it never reimplements it. Every
//! route the suites touch is built here from a validated base URL so call
//! sites carry no path literals.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Previously-problematic banner identifier used by the existence-gated
/// scenarios. Only ever a probe target, never trusted ground truth.
pub const KNOWN_BANNER_ID: &str = "cmhccsa030004hs6klsn4vtqv";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Storefront endpoint surface rooted at a base URL.
///
/// # Invariants
/// - `base` carries no trailing slash; [`crate::HarnessConfig`] validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Validated base URL without a trailing slash.
    base: String,
}

impl Endpoints {
    /// Creates the endpoint surface from a validated base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /api/auth/login`
    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/api/auth/login", self.base)
    }

    /// `GET /api/settings/get-banners`
    #[must_use]
    pub fn get_banners(&self) -> String {
        format!("{}/api/settings/get-banners", self.base)
    }

    /// `POST /api/settings/banners`
    #[must_use]
    pub fn create_banners(&self) -> String {
        format!("{}/api/settings/banners", self.base)
    }

    /// `DELETE /api/settings/banners/{id}`
    #[must_use]
    pub fn banner(&self, id: &str) -> String {
        format!("{}/api/settings/banners/{id}", self.base)
    }

    /// `POST /api/settings/update-feature-products`
    #[must_use]
    pub fn update_feature_products(&self) -> String {
        format!("{}/api/settings/update-feature-products", self.base)
    }

    /// `GET /api/settings/fetch-feature-products`
    #[must_use]
    pub fn fetch_feature_products(&self) -> String {
        format!("{}/api/settings/fetch-feature-products", self.base)
    }

    /// `GET|POST /api/products`
    #[must_use]
    pub fn products(&self) -> String {
        format!("{}/api/products", self.base)
    }

    /// `GET|POST /api/cart`
    #[must_use]
    pub fn cart(&self) -> String {
        format!("{}/api/cart", self.base)
    }
}
