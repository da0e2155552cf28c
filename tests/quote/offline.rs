use vantage_rs::AvError;

use crate::common;

#[tokio::test]
async fn offline_quote_parses_numbered_fields() {
    let server = common::setup_server();
    let mock = common::mock_function(
        &server,
        "GLOBAL_QUOTE",
        "AAPL",
        common::fixture("global_quote", "AAPL", "json"),
    );

    let quote = common::gateway_for(&server).quote("AAPL").await;
    mock.assert();

    assert_eq!(quote.symbol, "AAPL");
    assert!((quote.price - 123.45).abs() < 1e-9);
    assert!((quote.change - 1.5).abs() < 1e-9);
    assert!((quote.change_percent - 1.23).abs() < 1e-9);
    assert_eq!(quote.volume, 51_234_567);
    assert_eq!(quote.last_updated, "2024-03-15");
}

#[test]
fn unparsable_numbers_become_zero() {
    let body = r#"{"Global Quote":{
        "01. symbol":"ABC",
        "05. price":"None",
        "06. volume":"",
        "07. latest trading day":"2024-03-15",
        "09. change":"-0.5000",
        "10. change percent":"-0.41%"
    }}"#;
    let quote = vantage_rs::quote::parse(body).unwrap();
    assert_eq!(quote.price, 0.0);
    assert_eq!(quote.volume, 0);
    assert!((quote.change + 0.5).abs() < 1e-9);
    assert!((quote.change_percent + 0.41).abs() < 1e-9);
}

#[test]
fn numeric_json_values_are_accepted() {
    let body = r#"{"Global Quote":{
        "01. symbol":"ABC",
        "05. price":12.5,
        "06. volume":1000,
        "07. latest trading day":"2024-03-15",
        "09. change":0.25,
        "10. change percent":"2.04%"
    }}"#;
    let quote = vantage_rs::quote::parse(body).unwrap();
    assert!((quote.price - 12.5).abs() < 1e-9);
    assert_eq!(quote.volume, 1000);
}

#[test]
fn strict_quote_reports_missing_data() {
    let body = r#"{"Information":"nothing here"}"#;
    let err = vantage_rs::quote::parse(body).unwrap_err();
    assert!(
        matches!(err, AvError::MissingField(ref f) if f == "Global Quote"),
        "got {err:?}"
    );

    // Unknown symbols come back as an empty quote object.
    let body = r#"{"Global Quote":{}}"#;
    let err = vantage_rs::quote::parse(body).unwrap_err();
    assert!(
        matches!(err, AvError::MissingField(ref f) if f == "10. change percent"),
        "got {err:?}"
    );

    let body = common::rate_limit_body();
    let err = vantage_rs::quote::parse(&body).unwrap_err();
    assert!(matches!(err, AvError::RateLimited(_)), "got {err:?}");
}

#[test]
fn oversized_volume_saturates() {
    let body = r#"{"Global Quote":{
        "01. symbol":"ABC",
        "05. price":"1.00",
        "06. volume":"99999999999999999999",
        "07. latest trading day":"2024-03-15",
        "09. change":"0.00",
        "10. change percent":"0.00%"
    }}"#;
    let quote = vantage_rs::quote::parse(body).unwrap();
    assert_eq!(quote.volume, i64::MAX as u64);
}
