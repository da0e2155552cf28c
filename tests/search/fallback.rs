use httpmock::Method::GET;

use crate::common;

fn symbols(hits: &[vantage_rs::SearchHit]) -> Vec<&str> {
    hits.iter().map(|h| h.symbol.as_str()).collect()
}

#[tokio::test]
async fn rate_limited_search_filters_the_five_item_list() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "SYMBOL_SEARCH");
        then.status(200).body(common::rate_limit_body());
    });
    let gateway = common::gateway_for(&server);

    assert_eq!(symbols(&gateway.search("AAPL").await), ["AAPL"]);
    // Names match too, case-insensitively.
    assert_eq!(
        symbols(&gateway.search("inc").await),
        ["AAPL", "GOOGL", "TSLA", "AMZN"]
    );
    // TSLA and AMZN are only offered on the rate-limited path.
    assert_eq!(symbols(&gateway.search("tesla").await), ["TSLA"]);
    assert!(gateway.search("xyz-no-match").await.is_empty());

    mock.assert_calls(4);
}

#[tokio::test]
async fn error_message_falls_back_to_the_three_item_list() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(common::error_message_body());
    });
    let gateway = common::gateway_for(&server);

    assert_eq!(symbols(&gateway.search("o").await), ["GOOGL", "MSFT"]);
    assert!(gateway.search("tesla").await.is_empty());
    mock.assert_calls(2);
}

#[tokio::test]
async fn http_status_and_malformed_json_fall_back() {
    let server = common::setup_server();
    let broken = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("keywords", "apple");
        then.status(503).body("upstream down");
    });
    let garbage = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("keywords", "micro");
        then.status(200).body("<html>not json</html>");
    });
    let gateway = common::gateway_for(&server);

    assert_eq!(symbols(&gateway.search("apple").await), ["AAPL"]);
    assert_eq!(symbols(&gateway.search("micro").await), ["MSFT"]);
    broken.assert();
    garbage.assert();
}

#[tokio::test]
async fn network_failure_falls_back() {
    let gateway = common::unreachable_gateway();
    let hits = gateway.search("msft").await;
    assert_eq!(symbols(&hits), ["MSFT"]);
    assert_eq!(hits[0].name, "Microsoft Corporation");
    assert_eq!(hits[0].region, "United States");
}
