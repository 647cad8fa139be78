//! The option-chain pipeline: document → rows → summary.
//!
//! Everything here is a pure, synchronous transform re-run from scratch on
//! every fetch or filter change. [`extract`] selects and projects matching
//! entries, [`aggregate`] computes open-interest totals and the put/call
//! ratio, and [`ChainSnapshot::build`] composes the two plus the
//! ascending-strike sort the display expects.

pub mod aggregate;
pub mod extract;

pub use aggregate::{ChainSummary, aggregate};
pub use extract::{ChainFilter, ChainRow, extract};

use crate::types::option_chain::OptionChainDocument;

/// A filtered, display-ready view of one expiry's chain: rows sorted by
/// ascending strike, plus their aggregates.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChainSnapshot {
    /// Matching rows, ascending by strike (equal strikes keep source order).
    pub rows: Vec<ChainRow>,
    /// Open-interest totals and put/call ratio over `rows`.
    pub summary: ChainSummary,
}

impl ChainSnapshot {
    /// Run the full pipeline for one filter selection.
    pub fn build(document: &OptionChainDocument, filter: &ChainFilter) -> Self {
        let mut rows = extract(document, filter);
        rows.sort_by(|a, b| a.strike.total_cmp(&b.strike));
        let summary = aggregate(&rows);
        Self { rows, summary }
    }
}
