//! # nse-chain-rs
//!
//! A Rust client for the public [NSE India](https://www.nseindia.com) equity
//! option-chain endpoint, with a small pure pipeline for filtering the chain
//! by expiry and strike range and aggregating open-interest totals.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nse_chain_rs::chain::{ChainFilter, ChainSnapshot};
//! use nse_chain_rs::client::NseClient;
//!
//! #[tokio::main]
//! async fn main() -> nse_chain_rs::error::Result<()> {
//!     let client = NseClient::new();
//!     let document = client.option_chain("NMDC").await?;
//!
//!     let expiry = document.expiry_dates().first().cloned().unwrap_or_default();
//!     let filter = ChainFilter::new(expiry, 60.0, 80.0);
//!     let snapshot = ChainSnapshot::build(&document, &filter);
//!
//!     for row in &snapshot.rows {
//!         println!("{:>8.2}  CE OI {:>10}  PE OI {:>10}", row.strike, row.ce_oi, row.pe_oi);
//!     }
//!     println!("PCR: {:.2}", snapshot.summary.put_call_ratio);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod chain;
pub mod client;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::NseClient;
/// Re-export the error type and Result alias.
pub use error::{NseError, Result};
/// Re-export the pipeline types — the pieces most consumers touch per refresh.
pub use chain::{ChainFilter, ChainRow, ChainSnapshot, ChainSummary};
