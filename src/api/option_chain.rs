//! Option Chain endpoint — full equity chain data across strikes and expiries.

use crate::client::NseClient;
use crate::constants::OPTION_CHAIN_EQUITIES_PATH;
use crate::error::{NseError, Result};
use crate::types::option_chain::OptionChainDocument;

impl NseClient {
    /// Retrieve the full option chain for an equity underlying.
    ///
    /// Returns every strike/expiry entry NSE publishes for the symbol,
    /// along with the list of selectable expiry dates
    /// ([`OptionChainDocument::expiry_dates`]). Filtering down to one expiry
    /// and a strike range is done locally with
    /// [`extract`](crate::chain::extract) or
    /// [`ChainSnapshot::build`](crate::chain::ChainSnapshot::build).
    ///
    /// A payload that is JSON but not shaped like a chain document fails
    /// with [`NseError::MalformedDocument`].
    ///
    /// **Endpoint:** `GET /api/option-chain-equities?symbol=<SYMBOL>`
    pub async fn option_chain(&self, symbol: &str) -> Result<OptionChainDocument> {
        if symbol.trim().is_empty() {
            return Err(NseError::InvalidArgument(
                "symbol must not be empty".into(),
            ));
        }

        let raw: serde_json::Value = self
            .get_with_params(OPTION_CHAIN_EQUITIES_PATH, &[("symbol", symbol)])
            .await?;
        OptionChainDocument::from_value(raw)
    }
}
