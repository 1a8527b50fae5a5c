// system-tests/tests/suites/catalog.rs
// ============================================================================
// Module: Catalog Tests
// Description: Feature-product selection, product creation, and cart flows.
// Purpose: Verify reference-dependent mutations and catalog round trips.
// Dependencies: system-tests helpers, shopcheck-client, shopcheck-core
// ============================================================================

//! Catalog tests: featured-product updates gated on referenced product
//! existence, product creation echo checks, and cart round trips.

use helpers::artifacts::TestReporter;
use helpers::backend_stub::spawn_backend_stub;
use helpers::init_tracing;
use helpers::readiness::wait_for_backend_ready;
use helpers::timeouts::SUITE_CALL_TIMEOUT;
use helpers::timeouts::resolve_timeout;
use serde_json::Value;
use serde_json::json;
use shopcheck_client::HarnessConfig;
use shopcheck_client::StorefrontClient;
use shopcheck_client::config::DEFAULT_IDENTITY;
use shopcheck_client::config::DEFAULT_SECRET;
use shopcheck_core::MutationKind;
use shopcheck_core::verify_mutation;

use crate::helpers;

fn stub_config(base_url: &str) -> HarnessConfig {
    HarnessConfig {
        base_url: base_url.to_string(),
        timeout: resolve_timeout(SUITE_CALL_TIMEOUT),
        identity: DEFAULT_IDENTITY.to_string(),
        secret: DEFAULT_SECRET.to_string(),
    }
}

async fn ready_client(
    base_url: &str,
) -> Result<StorefrontClient, Box<dyn std::error::Error>> {
    let config = stub_config(base_url);
    let mut client = StorefrontClient::new(&config)?;
    wait_for_backend_ready(&client, resolve_timeout(SUITE_CALL_TIMEOUT)).await?;
    client.authenticate(&config.identity, &config.secret).await?;
    Ok(client)
}

#[tokio::test(flavor = "multi_thread")]
async fn feature_update_with_existing_products() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut reporter = TestReporter::new("feature_update_with_existing_products")?;
    let stub = spawn_backend_stub().await?;
    let client = ready_client(stub.base_url()).await?;

    let first = stub.seed_product("Walnut Desk", 499.0);
    let second = stub.seed_product("Oak Shelf", 129.5);
    let ids = vec![first.clone(), second.clone()];

    let outcome = client.update_feature_products(&ids).await?;
    if outcome.status() != 200 {
        return Err(format!("feature update returned status {}", outcome.status()).into());
    }
    let accepted = outcome
        .json()
        .and_then(|payload| payload.get("success"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !accepted {
        return Err("feature update response did not confirm success".into());
    }
    if stub.feature_ids() != ids {
        return Err("backend feature list does not match the submitted ids".into());
    }

    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec![format!("feature list updated to {first} and {second}")],
        vec!["transcript.json".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn feature_update_with_unknown_reference_is_rejected()
-> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut reporter = TestReporter::new("feature_update_with_unknown_reference_is_rejected")?;
    let stub = spawn_backend_stub().await?;
    let client = ready_client(stub.base_url()).await?;

    // The referenced product does not exist, so the probe selects the absent
    // branch and the backend's 400 is the verified verdict.
    let probe = client.probe_product("pr-phantom").await?;
    if probe.found {
        return Err("phantom product reported as found".into());
    }
    let ids = vec!["pr-phantom".to_string()];
    let outcome = verify_mutation(MutationKind::CreateByReference, probe, || {
        client.update_feature_products(&ids)
    })
    .await?;
    if outcome.status() != 400 {
        return Err(format!(
            "unknown reference accepted with status {}",
            outcome.status()
        )
        .into());
    }

    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["unknown product reference rejected with 400".to_string()],
        vec!["transcript.json".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_feature_products_returns_selected_records()
-> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut reporter = TestReporter::new("fetch_feature_products_returns_selected_records")?;
    let stub = spawn_backend_stub().await?;
    let client = ready_client(stub.base_url()).await?;

    let featured = stub.seed_product("Spruce Chair", 89.0);
    let _other = stub.seed_product("Pine Stool", 39.0);
    client.update_feature_products(&[featured.clone()]).await?;

    let outcome = client.fetch_feature_products().await?;
    if outcome.status() != 200 {
        return Err(format!("feature fetch returned status {}", outcome.status()).into());
    }
    let listed: Vec<String> = outcome
        .json()
        .and_then(|payload| payload.get("products"))
        .and_then(Value::as_array)
        .map(|products| {
            products
                .iter()
                .filter_map(|product| product.get("id"))
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default();
    if listed != vec![featured.clone()] {
        return Err(format!("feature fetch listed {listed:?}, expected [{featured}]").into());
    }

    reporter.finish(
        "pass",
        vec!["feature fetch returned exactly the selected product".to_string()],
        Vec::new(),
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn created_product_echoes_submitted_fields() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut reporter = TestReporter::new("created_product_echoes_submitted_fields")?;
    let stub = spawn_backend_stub().await?;
    let client = ready_client(stub.base_url()).await?;

    let submitted = json!({
        "name": "Cedar Bench",
        "price": 219.0,
        "stock": 7,
    });
    let outcome = client.create_product(&submitted).await?;
    if outcome.status() != 201 {
        return Err(format!("product creation returned status {}", outcome.status()).into());
    }
    let Some(created) = outcome.json() else {
        return Err("product creation response was not JSON".into());
    };
    for field in ["name", "price", "stock"] {
        if created.get(field) != submitted.get(field) {
            return Err(format!("created product does not echo field {field}").into());
        }
    }
    let Some(id) = created.get("id").and_then(Value::as_str) else {
        return Err("created product carries no identifier".into());
    };

    let probe = client.probe_product(id).await?;
    if !probe.found {
        return Err("created product not listed by the backend".into());
    }

    reporter.artifacts().write_json("created_product.json", created)?;
    reporter.finish(
        "pass",
        vec![format!("product {id} created with submitted fields echoed")],
        vec!["created_product.json".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cart_round_trip_lists_added_item() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut reporter = TestReporter::new("cart_round_trip_lists_added_item")?;
    let stub = spawn_backend_stub().await?;
    let client = ready_client(stub.base_url()).await?;

    let product_id = stub.seed_product("Maple Table", 349.0);
    let outcome = client.add_to_cart(&product_id, 2).await?;
    if !matches!(outcome.status(), 200 | 201) {
        return Err(format!("cart add returned status {}", outcome.status()).into());
    }

    let cart = client.get_cart().await?;
    if cart.status() != 200 {
        return Err(format!("cart fetch returned status {}", cart.status()).into());
    }
    let items = cart
        .json()
        .and_then(|payload| payload.get("items"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let present = items.iter().any(|item| {
        item.get("productId").and_then(Value::as_str) == Some(product_id.as_str())
            && item.get("quantity").and_then(Value::as_u64) == Some(2)
    });
    if !present {
        return Err("added item missing from the cart listing".into());
    }

    reporter.finish(
        "pass",
        vec![format!("cart lists product {product_id} with quantity 2")],
        Vec::new(),
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cart_add_for_unknown_product_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut reporter = TestReporter::new("cart_add_for_unknown_product_is_not_found")?;
    let stub = spawn_backend_stub().await?;
    let client = ready_client(stub.base_url()).await?;

    let outcome = client.add_to_cart("pr-phantom", 1).await?;
    if outcome.status() != 404 {
        return Err(format!("cart add for unknown product returned {}", outcome.status()).into());
    }

    reporter.finish(
        "pass",
        vec!["cart add rejected for an unknown product".to_string()],
        Vec::new(),
    )?;
    Ok(())
}
