//! Chain extraction — expiry/strike-range filtering and row projection.

use serde::Serialize;

use crate::types::option_chain::{ChainEntry, OptionChainDocument, OptionQuote};

/// The presentation layer's selection: one expiry date and an inclusive
/// strike range.
///
/// Bounds ordering is the caller's job — an inverted range matches nothing
/// rather than being corrected. An expiry that isn't in the document's
/// `expiryDates` list likewise just matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainFilter {
    /// Expiry date exactly as listed in `records.expiryDates`,
    /// e.g. `"28-Aug-2026"`.
    pub expiry: String,
    /// Lower strike bound, inclusive.
    pub min_strike: f64,
    /// Upper strike bound, inclusive.
    pub max_strike: f64,
}

impl ChainFilter {
    /// Create a filter for one expiry and an inclusive strike range.
    pub fn new(expiry: impl Into<String>, min_strike: f64, max_strike: f64) -> Self {
        Self {
            expiry: expiry.into(),
            min_strike,
            max_strike,
        }
    }

    /// Whether an entry falls inside this selection.
    pub fn matches(&self, entry: &ChainEntry) -> bool {
        entry.expiry_date.as_deref() == Some(self.expiry.as_str())
            && self.min_strike <= entry.strike_price
            && entry.strike_price <= self.max_strike
    }
}

/// One normalized row per matching chain entry: the strike plus both sides'
/// quote fields, with absent sides/fields projected to zero.
///
/// Rows have no identity of their own — the set is recomputed in full on
/// every fetch/filter cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainRow {
    pub strike: f64,
    pub ce_oi: u64,
    pub ce_oi_change: i64,
    pub ce_iv: f64,
    pub ce_ltp: f64,
    pub pe_oi: u64,
    pub pe_oi_change: i64,
    pub pe_iv: f64,
    pub pe_ltp: f64,
}

impl ChainRow {
    fn project(entry: &ChainEntry) -> Self {
        let ce = entry.ce.as_ref();
        let pe = entry.pe.as_ref();
        Self {
            strike: entry.strike_price,
            ce_oi: side(ce, |q| q.open_interest),
            ce_oi_change: side(ce, |q| q.change_in_open_interest),
            ce_iv: side(ce, |q| q.implied_volatility),
            ce_ltp: side(ce, |q| q.last_price),
            pe_oi: side(pe, |q| q.open_interest),
            pe_oi_change: side(pe, |q| q.change_in_open_interest),
            pe_iv: side(pe, |q| q.implied_volatility),
            pe_ltp: side(pe, |q| q.last_price),
        }
    }
}

/// Pull one field out of an optional quote side, defaulting to zero when the
/// side or the field is absent.
fn side<T: Default>(quote: Option<&OptionQuote>, field: impl Fn(&OptionQuote) -> Option<T>) -> T {
    quote.and_then(field).unwrap_or_default()
}

/// Project every entry matching `filter` into a [`ChainRow`].
///
/// Pure function: same document and filter always yield the same rows.
/// Source order is preserved (the ascending-strike sort happens in
/// [`ChainSnapshot::build`](crate::chain::ChainSnapshot::build)), and
/// duplicate (strike, expiry) entries each produce their own row.
pub fn extract(document: &OptionChainDocument, filter: &ChainFilter) -> Vec<ChainRow> {
    document
        .records
        .data
        .iter()
        .filter(|entry| filter.matches(entry))
        .map(ChainRow::project)
        .collect()
}
