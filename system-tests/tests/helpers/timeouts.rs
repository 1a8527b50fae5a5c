// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep system-test timeouts consistent and configurable across suites.
// ============================================================================

use std::time::Duration;

use system_tests::config::SystemTestConfig;

/// Default per-call timeout used by suites against the in-process stub.
pub const SUITE_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the effective timeout, honoring `SHOPCHECK_SYSTEM_TEST_TIMEOUT_SEC`
/// when set. The override acts as a minimum to avoid shortening explicitly
/// longer test timeouts.
#[must_use]
pub fn resolve_timeout(requested: Duration) -> Duration {
    SystemTestConfig::load().ok().and_then(|config| config.timeout).map_or(
        requested,
        |override_timeout| std::cmp::max(requested, override_timeout),
    )
}
