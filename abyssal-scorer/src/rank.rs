//! Stable descending ranking of scored cells.

use crate::ScoredCell;

/// Order cells by score, best first.
///
/// The sort is stable: cells with equal scores keep their input order.
/// Scores are compared with [`f64::total_cmp`]; NaN scores rank after every
/// number.
///
/// # Examples
/// ```
/// use abyssal_core::{CellId, CellRecord};
/// use abyssal_scorer::{ScoredCell, SubMetrics, rank};
///
/// let scored = |col, score| ScoredCell {
///     cell: CellRecord::new(CellId::new(0, col)),
///     metrics: SubMetrics::default(),
///     score,
/// };
/// let ranked = rank(vec![scored(0, 1.0), scored(1, 3.0), scored(2, 1.0)]);
/// let cols: Vec<u32> = ranked.iter().map(|c| c.cell.id.col).collect();
/// assert_eq!(cols, [1, 0, 2]);
/// ```
#[must_use]
pub fn rank(mut cells: Vec<ScoredCell>) -> Vec<ScoredCell> {
    cells.sort_by(|a, b| {
        a.score
            .is_nan()
            .cmp(&b.score.is_nan())
            .then_with(|| b.score.total_cmp(&a.score))
    });
    cells
}

/// Return at most the first `n` cells of a ranking.
#[must_use]
pub fn top_n(ranked: &[ScoredCell], n: usize) -> &[ScoredCell] {
    ranked.get(..n).unwrap_or(ranked)
}
