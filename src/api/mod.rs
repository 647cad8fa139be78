//! API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`NseClient`](crate::client::NseClient) via `impl` blocks. All methods
//! handle session priming, JSON deserialization, and error mapping
//! automatically.
//!
//! ## Usage
//!
//! Import the relevant types and call methods on your `NseClient`:
//!
//! ```no_run
//! use nse_chain_rs::NseClient;
//!
//! # #[tokio::main]
//! # async fn main() -> nse_chain_rs::Result<()> {
//! let client = NseClient::new();
//! let document = client.option_chain("NMDC").await?;
//! # Ok(())
//! # }
//! ```

pub mod option_chain;
