//! Prints a one-screen report for a symbol.
//!
//! Run with `cargo run --example quote_report --features tracing-subscriber -- MSFT`.
//! Set `ALPHA_VANTAGE_API_KEY` for live data; without it the shared `demo` key is used and
//! most symbols degrade to the built-in demo values.

use tracing_subscriber::EnvFilter;
use vantage_rs::{
    Interval, QuoteGateway, format_market_cap, format_percentage, format_price, format_volume,
};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "IBM".to_string());
    let gateway = QuoteGateway::default();

    let hits = gateway.search(&symbol).await;
    println!("Search '{symbol}': {} match(es)", hits.len());
    for h in hits.iter().take(3) {
        println!(
            "  {:<10} {} ({}, {})",
            h.symbol, h.name, h.region, h.currency
        );
    }

    let p = gateway.profile(&symbol).await;
    println!();
    println!("{} - {}", p.symbol, p.name);
    println!(
        "  {}  {}  vol {}",
        format_price(p.price),
        format_percentage(p.change_percent),
        format_volume(p.volume as f64)
    );
    println!(
        "  market cap {}  P/E {:.2}  beta {:.2}",
        format_market_cap(p.market_cap as f64),
        p.pe_ratio,
        p.beta
    );
    println!("  {} / {}", p.sector, p.industry);

    let bars = gateway.history(&symbol, Interval::Weekly).await;
    println!();
    println!("Last {} weekly closes:", bars.len().min(5));
    for b in bars.iter().take(5) {
        println!("  {}  {}", b.date, format_price(b.close));
    }

    println!();
    for n in gateway.news(Some(&symbol)) {
        println!("* {} ({})", n.title, n.source);
    }
}
