//! Recipe ranking
//!
//! Orders recipes descending by coverage. The sort is stable over the
//! previously displayed order, so recipes with equal fractions keep their
//! on-screen positions instead of shuffling on every recomputation.

use crate::matcher::MatchResult;

/// Display order for the first render: build order.
pub fn initial_order(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Re-sorts `order` (indices into `results`) descending by fraction.
///
/// `order` must hold the currently displayed order and one index per result.
pub fn rerank(order: &mut [usize], results: &[MatchResult]) {
    order.sort_by(|&a, &b| results[b].fraction().total_cmp(&results[a].fraction()));
}
