// system-tests/tests/helpers/readiness.rs
// ============================================================================
// Module: Readiness Helpers
// Description: Readiness probes for the backend stub.
// Purpose: Ensure servers are ready without arbitrary sleeps.
// Dependencies: tokio, shopcheck-client
// ============================================================================

use std::time::Duration;
use std::time::Instant;

use shopcheck_client::StorefrontClient;
use tokio::time::sleep;

/// Polls the product listing until the stub responds or the timeout expires.
pub async fn wait_for_backend_ready(
    client: &StorefrontClient,
    timeout: Duration,
) -> Result<(), String> {
    let start = Instant::now();
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        match client.list_products().await {
            Ok(_) => return Ok(()),
            Err(err) => {
                if start.elapsed() > timeout {
                    return Err(format!(
                        "backend readiness timeout after {attempts} attempts: {err}"
                    ));
                }
                sleep(Duration::from_millis(50)).await;
            }
        }
    }
}
