//! Binary to fetch the NSE option chain for a symbol and print the filtered
//! strike table, open-interest totals, and put/call ratio.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin chain_check --features cli -- NMDC 60 80
//! ```
//!
//! Symbol defaults to NMDC; min/max strike default to the whole chain.
//! The nearest listed expiry is used.

use std::env;

use nse_chain_rs::cache::CachedFetcher;
use nse_chain_rs::chain::{ChainFilter, ChainSnapshot};
use nse_chain_rs::client::NseClient;

#[tokio::main]
async fn main() -> nse_chain_rs::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "NMDC".to_owned());
    let min_strike: f64 = args
        .next()
        .map(|s| s.parse().expect("min strike must be numeric"))
        .unwrap_or(0.0);
    let max_strike: f64 = args
        .next()
        .map(|s| s.parse().expect("max strike must be numeric"))
        .unwrap_or(f64::MAX);

    println!("Fetching option chain for {symbol}…");
    let mut fetcher = CachedFetcher::new(NseClient::new());
    let fetch = fetcher.option_chain(&symbol).await?;

    let Some(expiry) = fetch.document.expiry_dates().first().cloned() else {
        println!("No expiries listed for {symbol} — nothing to show.");
        return Ok(());
    };

    let filter = ChainFilter::new(expiry.clone(), min_strike, max_strike);
    let snapshot = ChainSnapshot::build(&fetch.document, &filter);

    println!("\nOption chain: {symbol} — expiry {expiry}");
    println!(
        "{:>9}  {:>10} {:>10} {:>7} {:>8}  {:>10} {:>10} {:>7} {:>8}",
        "Strike", "CE OI", "CE ChgOI", "CE IV", "CE LTP", "PE OI", "PE ChgOI", "PE IV", "PE LTP"
    );
    for row in &snapshot.rows {
        println!(
            "{:>9.2}  {:>10} {:>10} {:>7.2} {:>8.2}  {:>10} {:>10} {:>7.2} {:>8.2}",
            row.strike,
            row.ce_oi,
            row.ce_oi_change,
            row.ce_iv,
            row.ce_ltp,
            row.pe_oi,
            row.pe_oi_change,
            row.pe_iv,
            row.pe_ltp,
        );
    }
    if snapshot.rows.is_empty() {
        println!("(no strikes matched the filter)");
    }

    println!("\nTotal call OI: {}", snapshot.summary.total_call_oi);
    println!("Total put OI:  {}", snapshot.summary.total_put_oi);
    println!("Put/call ratio: {:.2}", snapshot.summary.put_call_ratio);

    let feed_time = fetch
        .document
        .records
        .timestamp
        .clone()
        .unwrap_or_else(|| fetch.fetched_at.format("%Y-%m-%d %H:%M:%S").to_string());
    println!("Last updated: {feed_time}");

    Ok(())
}
