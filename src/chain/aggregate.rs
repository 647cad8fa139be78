//! Chain aggregation — open-interest totals and the put/call ratio.

use serde::Serialize;

use crate::chain::extract::ChainRow;

/// Open-interest totals and put/call ratio over one filtered row set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChainSummary {
    /// Sum of call open interest across all rows.
    pub total_call_oi: u64,
    /// Sum of put open interest across all rows.
    pub total_put_oi: u64,
    /// `total_put_oi / total_call_oi`, or `0.0` when there is no call OI
    /// (empty or all-zero-call filtered sets yield `0.0`, never an
    /// infinite/NaN value).
    pub put_call_ratio: f64,
}

/// Compute totals and ratio for a row set.
///
/// Stateless and infallible; division by zero is defined away by the
/// ratio-0 policy.
pub fn aggregate(rows: &[ChainRow]) -> ChainSummary {
    let total_call_oi: u64 = rows.iter().map(|row| row.ce_oi).sum();
    let total_put_oi: u64 = rows.iter().map(|row| row.pe_oi).sum();
    let put_call_ratio = if total_call_oi == 0 {
        0.0
    } else {
        total_put_oi as f64 / total_call_oi as f64
    };
    ChainSummary {
        total_call_oi,
        total_put_oi,
        put_call_ratio,
    }
}
