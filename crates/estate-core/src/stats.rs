//! Tree height statistics.

use crate::models::{StatsResult, Tree};

impl StatsResult {
    /// Build a result from precomputed values.
    pub fn from_parts(count: usize, min: u32, max: u32, median: f64) -> Self {
        Self {
            count,
            max,
            min,
            median,
        }
    }
}

/// Count, min, max and interpolated median of a set of heights.
///
/// The median is the continuous 50th percentile: the mean of the two
/// middle values when the count is even. All fields are zero for an
/// empty input.
pub fn aggregate(heights: &[u32]) -> StatsResult {
    if heights.is_empty() {
        return StatsResult::default();
    }

    let mut sorted = heights.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let mid = count / 2;
    let median = if count % 2 == 1 {
        f64::from(sorted[mid])
    } else {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    };

    StatsResult {
        count,
        max: sorted[count - 1],
        min: sorted[0],
        median,
    }
}

/// Aggregate the heights of stored trees.
pub fn aggregate_trees(trees: &[Tree]) -> StatsResult {
    let heights: Vec<u32> = trees.iter().map(|t| t.height).collect();
    aggregate(&heights)
}
