use vantage_rs::{AvError, Quote};

use crate::common;

pub(crate) const IBM_QUOTE: &str = r#"{"Global Quote":{
    "01. symbol":"IBM",
    "05. price":"191.0700",
    "06. volume":"8828166",
    "07. latest trading day":"2024-03-15",
    "09. change":"-2.3600",
    "10. change percent":"-1.2201%"
}}"#;

#[tokio::test]
async fn offline_profile_combines_quote_and_overview() {
    let server = common::setup_server();
    let quote = common::mock_function(&server, "GLOBAL_QUOTE", "IBM", IBM_QUOTE.to_string());
    let overview = common::mock_function(
        &server,
        "OVERVIEW",
        "IBM",
        common::fixture("overview", "IBM", "json"),
    );

    let p = common::gateway_for(&server).profile("IBM").await;
    quote.assert();
    overview.assert();

    assert_eq!(p.symbol, "IBM");
    assert_eq!(p.name, "International Business Machines");
    assert!((p.price - 191.07).abs() < 1e-9);
    assert!((p.change + 2.36).abs() < 1e-9);
    assert!((p.change_percent + 1.2201).abs() < 1e-9);
    assert_eq!(p.volume, 8_828_166);
    assert_eq!(p.market_cap, 178_900_000_000);
    assert!((p.pe_ratio - 22.36).abs() < 1e-9);
    assert!((p.eps - 8.68).abs() < 1e-9);
    assert!((p.dividend - 6.64).abs() < 1e-9);
    assert!((p.dividend_yield - 0.0345).abs() < 1e-9);
    assert!((p.high_52_week - 199.18).abs() < 1e-9);
    assert!((p.low_52_week - 125.07).abs() < 1e-9);
    assert_eq!(p.avg_volume, 185);
    assert!((p.beta - 0.707).abs() < 1e-9);
    assert_eq!(p.sector, "TECHNOLOGY");
    assert_eq!(p.industry, "COMPUTER & OFFICE EQUIPMENT");
    let lead = "International Business Machines Corporation";
    assert!(p.description.starts_with(lead));
    assert_eq!(p.employees, 282_200);
    assert_eq!(p.founded, "N/A");
    assert_eq!(p.headquarters, "1 NEW ORCHARD ROAD, ARMONK, NY, US");
    assert_eq!(p.website, "https://www.ibm.com");
}

fn sample_quote() -> Quote {
    Quote {
        symbol: "XYZ".into(),
        price: 10.0,
        change: 0.5,
        change_percent: 5.0,
        volume: 1_000,
        last_updated: "2024-03-15".into(),
    }
}

#[test]
fn malformed_overview_fields_default_independently() {
    let body = r#"{
        "Symbol":"XYZ",
        "MarketCapitalization":"None",
        "PERatio":"-",
        "EPS":"1.5",
        "Beta":"",
        "FullTimeEmployees":"n/a"
    }"#;
    let p = vantage_rs::profile::parse(body, &sample_quote()).unwrap();

    assert_eq!(p.symbol, "XYZ");
    assert_eq!(p.name, "N/A");
    assert_eq!(p.market_cap, 0);
    assert_eq!(p.pe_ratio, 0.0);
    assert!((p.eps - 1.5).abs() < 1e-9);
    assert_eq!(p.beta, 0.0);
    assert_eq!(p.employees, 0);
    assert_eq!(p.sector, "N/A");
    assert_eq!(p.description, "No description available");
    assert_eq!(p.website, "N/A");
    assert_eq!(p.price, 10.0);
    assert_eq!(p.volume, 1_000);
}

#[test]
fn strict_overview_reports_rate_limit_and_unknown_symbol() {
    let q = sample_quote();

    let body = common::rate_limit_body();
    let err = vantage_rs::profile::parse(&body, &q).unwrap_err();
    assert!(matches!(err, AvError::RateLimited(_)), "got {err:?}");

    let err = vantage_rs::profile::parse("{}", &q).unwrap_err();
    assert!(
        matches!(err, AvError::MissingField(ref f) if f == "Symbol"),
        "got {err:?}"
    );

    let body = r#"{"Symbol":""}"#;
    let err = vantage_rs::profile::parse(body, &q).unwrap_err();
    assert!(matches!(err, AvError::MissingField(_)), "got {err:?}");
}
