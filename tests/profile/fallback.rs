use httpmock::Method::GET;
use vantage_rs::{Profile, demo};

use crate::common;
use crate::profile_offline::IBM_QUOTE;

/// Asserts `p` is the demo profile relabelled as `symbol` and carrying the given market data.
fn assert_demo_profile(p: &Profile, symbol: &str, price: f64, volume: u64) {
    let base = demo::profile();
    assert_eq!(p.symbol, symbol);
    assert_eq!(p.price, price);
    assert_eq!(p.volume, volume);
    assert_eq!(
        Profile {
            symbol: base.symbol.clone(),
            price: base.price,
            change: base.change,
            change_percent: base.change_percent,
            volume: base.volume,
            ..p.clone()
        },
        base
    );
}

#[tokio::test]
async fn overview_without_symbol_yields_demo_profile_with_live_quote() {
    let server = common::setup_server();
    let quote = common::mock_function(&server, "GLOBAL_QUOTE", "ibm", IBM_QUOTE.to_string());
    let overview = common::mock_function(&server, "OVERVIEW", "ibm", "{}".to_string());

    let p = common::gateway_for(&server).profile("ibm").await;
    quote.assert();
    overview.assert();

    assert_demo_profile(&p, "IBM", 191.07, 8_828_166);
    assert_eq!(p.change, -2.36);
    assert_eq!(p.change_percent, -1.2201);
    assert_eq!(p.name, "Apple Inc.");
    assert_eq!(p.market_cap, 2_750_000_000_000);
}

#[tokio::test]
async fn rate_limited_overview_reuses_the_first_quote() {
    let server = common::setup_server();
    let quote = common::mock_function(&server, "GLOBAL_QUOTE", "IBM", IBM_QUOTE.to_string());
    let overview = common::mock_function(&server, "OVERVIEW", "IBM", common::rate_limit_body());

    let p = common::gateway_for(&server).profile("IBM").await;
    quote.assert_calls(1);
    overview.assert_calls(1);
    assert_demo_profile(&p, "IBM", 191.07, 8_828_166);
}

#[tokio::test]
async fn failed_overview_request_fetches_a_fresh_quote() {
    let server = common::setup_server();
    let quote = common::mock_function(&server, "GLOBAL_QUOTE", "IBM", IBM_QUOTE.to_string());
    let overview = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "OVERVIEW");
        then.status(502).body("bad gateway");
    });

    let p = common::gateway_for(&server).profile("IBM").await;
    quote.assert_calls(2);
    overview.assert_calls(1);
    assert_demo_profile(&p, "IBM", 191.07, 8_828_166);
}

#[tokio::test]
async fn error_message_overview_reuses_the_first_quote() {
    let server = common::setup_server();
    let quote = common::mock_function(&server, "GLOBAL_QUOTE", "IBM", IBM_QUOTE.to_string());
    let overview = common::mock_function(&server, "OVERVIEW", "IBM", common::error_message_body());

    let p = common::gateway_for(&server).profile("IBM").await;
    quote.assert_calls(1);
    overview.assert_calls(1);
    assert_demo_profile(&p, "IBM", 191.07, 8_828_166);
    assert_eq!(p.name, "Apple Inc.");
}

#[tokio::test]
async fn malformed_overview_body_fetches_a_fresh_quote() {
    let server = common::setup_server();
    let quote = common::mock_function(&server, "GLOBAL_QUOTE", "IBM", IBM_QUOTE.to_string());
    let overview = common::mock_function(&server, "OVERVIEW", "IBM", "{not json".to_string());

    let p = common::gateway_for(&server).profile("IBM").await;
    quote.assert_calls(2);
    overview.assert_calls(1);
    assert_demo_profile(&p, "IBM", 191.07, 8_828_166);
}

#[tokio::test]
async fn rate_limited_quote_still_uses_live_overview() {
    let server = common::setup_server();
    let quote = common::mock_function(&server, "GLOBAL_QUOTE", "IBM", common::rate_limit_body());
    let overview = common::mock_function(
        &server,
        "OVERVIEW",
        "IBM",
        common::fixture("overview", "IBM", "json"),
    );

    let p = common::gateway_for(&server).profile("IBM").await;
    quote.assert();
    overview.assert();

    assert_eq!(p.name, "International Business Machines");
    assert_eq!(p.price, 175.43);
    assert_eq!(p.volume, 45_678_900);
}

#[tokio::test]
async fn network_failure_yields_the_full_demo_profile() {
    let p = common::unreachable_gateway().profile("aapl").await;
    let expected = demo::profile();
    assert_eq!(p, expected);
}
