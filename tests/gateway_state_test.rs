// ABOUTME: Integration tests for per-operation call state: loading, errors, reset
// ABOUTME: Observes in-flight state through a latency-injecting stub backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::StubBackend;
use forex_gateway::call_state::{CallPhase, Operation};
use forex_gateway::config::GatewayConfig;
use forex_gateway::gateway::ApiGateway;
use forex_gateway::models::PriceRecord;
use forex_gateway::GatewayError;
use std::sync::Arc;
use std::time::Duration;

const STUB_LATENCY: Duration = Duration::from_millis(200);
const OBSERVE_DELAY: Duration = Duration::from_millis(50);

/// Gateway pointed at a port nothing listens on
fn unreachable_gateway() -> ApiGateway {
    let config = GatewayConfig::with_base_url("http://127.0.0.1:9").unwrap();
    ApiGateway::with_config(&config)
}

#[tokio::test]
async fn test_loading_flag_is_set_while_in_flight_and_cleared_after() {
    let stub = StubBackend::spawn_with_latency(STUB_LATENCY).await;
    let gateway = Arc::new(stub.gateway());

    let worker = Arc::clone(&gateway);
    let call = tokio::spawn(async move { worker.list_prices().await });

    tokio::time::sleep(OBSERVE_DELAY).await;
    assert!(gateway.is_loading(Operation::ListPrices));
    assert_eq!(gateway.phase(Operation::ListPrices), CallPhase::InFlight);

    call.await.unwrap();
    assert!(!gateway.is_loading(Operation::ListPrices));
    assert_eq!(gateway.phase(Operation::ListPrices), CallPhase::Settled);
}

#[tokio::test]
async fn test_loading_flag_is_cleared_on_failure_too() {
    let gateway = unreachable_gateway();

    let prices = gateway.list_prices().await;

    assert!(prices.is_empty());
    assert!(!gateway.is_loading(Operation::ListPrices));
    assert_eq!(gateway.phase(Operation::ListPrices), CallPhase::Settled);
    assert!(matches!(
        gateway.last_error(Operation::ListPrices),
        Some(GatewayError::Transport { .. })
    ));
}

#[tokio::test]
async fn test_every_operation_releases_its_loading_flag_on_failure() {
    let gateway = unreachable_gateway();

    let record = PriceRecord::new(1, "EURUSD", 1.08);
    let credentials = forex_gateway::Credentials::new("alice", "hunter2");

    gateway.create_price(&record).await;
    gateway.list_prices().await;
    gateway.get_price_by_id(1).await;
    gateway.update_price(1, &record).await;
    gateway.register(&credentials).await;
    gateway.login(&credentials).await;

    for op in Operation::ALL {
        assert!(!gateway.is_loading(op), "{op} must not stay loading");
        assert_eq!(gateway.phase(op), CallPhase::Settled);
        assert!(
            gateway.last_error(op).is_some(),
            "{op} must capture its failure"
        );
    }
}

#[tokio::test]
async fn test_failure_is_isolated_to_its_own_operation() {
    let stub = StubBackend::spawn().await;
    let gateway = stub.gateway();

    // 404 on the lookup; the listing stays clean
    gateway.get_price_by_id(404).await;
    let prices = gateway.list_prices().await;

    assert!(prices.is_empty());
    assert!(gateway.last_error(Operation::GetPriceById).is_some());
    assert!(gateway.last_error(Operation::ListPrices).is_none());
    assert_eq!(gateway.phase(Operation::CreatePrice), CallPhase::Idle);
}

#[tokio::test]
async fn test_successful_call_clears_that_operations_error() {
    let stub = StubBackend::spawn().await;
    let gateway = stub.gateway();

    gateway.get_price_by_id(1).await;
    assert!(gateway.last_error(Operation::GetPriceById).is_some());

    stub.seed_price(PriceRecord::new(1, "EURUSD", 1.08));
    gateway.get_price_by_id(1).await;

    assert!(
        gateway.last_error(Operation::GetPriceById).is_none(),
        "a successful settlement must clear the stored error"
    );
}

#[tokio::test]
async fn test_invocation_keeps_prior_error_until_settlement() {
    let stub = StubBackend::spawn_with_latency(STUB_LATENCY).await;
    let gateway = Arc::new(stub.gateway());

    gateway.get_price_by_id(1).await;
    assert!(gateway.last_error(Operation::GetPriceById).is_some());

    stub.seed_price(PriceRecord::new(1, "EURUSD", 1.08));
    let worker = Arc::clone(&gateway);
    let call = tokio::spawn(async move { worker.get_price_by_id(1).await });

    tokio::time::sleep(OBSERVE_DELAY).await;
    assert!(gateway.is_loading(Operation::GetPriceById));
    assert!(
        gateway.last_error(Operation::GetPriceById).is_some(),
        "the prior error must survive while the retry is in flight"
    );

    call.await.unwrap();
    assert!(gateway.last_error(Operation::GetPriceById).is_none());
}

#[tokio::test]
async fn test_concurrent_operations_track_independent_flags() {
    let stub = StubBackend::spawn_with_latency(STUB_LATENCY).await;
    stub.seed_price(PriceRecord::new(1, "EURUSD", 1.08));
    let gateway = Arc::new(stub.gateway());

    let lister = Arc::clone(&gateway);
    let getter = Arc::clone(&gateway);
    let list_call = tokio::spawn(async move { lister.list_prices().await });
    let get_call = tokio::spawn(async move { getter.get_price_by_id(1).await });

    tokio::time::sleep(OBSERVE_DELAY).await;
    assert!(gateway.is_loading(Operation::ListPrices));
    assert!(gateway.is_loading(Operation::GetPriceById));
    assert!(!gateway.is_loading(Operation::CreatePrice));

    list_call.await.unwrap();
    get_call.await.unwrap();

    assert!(!gateway.is_loading(Operation::ListPrices));
    assert!(!gateway.is_loading(Operation::GetPriceById));
    assert!(gateway.last_error(Operation::ListPrices).is_none());
    assert!(gateway.last_error(Operation::GetPriceById).is_none());
}

#[tokio::test]
async fn test_transport_error_carries_the_failed_url() {
    let gateway = unreachable_gateway();

    let result = gateway.try_list_prices().await;

    let error = result.expect_err("nothing listens on the target port");
    assert!(error.url().ends_with("/forex_price"));
    assert!(error.status_code().is_none());
}
