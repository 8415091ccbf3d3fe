//! Drone coverage distance for an estate survey.
//!
//! The drone sweeps every unit cell once in a back-and-forth raster pattern
//! and climbs over each tree it meets. The altitude cost is the plain sum of
//! tree heights: no descent cost and no dependence on tree position.

use crate::models::{DronePlanResult, Estate, Tree};

/// Raster sweep length over a `width × length` grid.
pub fn horizontal_distance(width: u32, length: u32) -> u64 {
    debug_assert!(width > 0 && length > 0, "estate dimensions must be positive");
    let width = u64::from(width);
    let length = u64::from(length);
    width.saturating_sub(1) * length + length.saturating_sub(1) * width
}

/// Total altitude change needed to clear every tree.
pub fn vertical_distance<I>(heights: I) -> u64
where
    I: IntoIterator<Item = u32>,
{
    heights.into_iter().map(u64::from).sum()
}

/// Total survey distance for an estate with the given tree heights.
pub fn plan_coverage<I>(width: u32, length: u32, heights: I) -> u64
where
    I: IntoIterator<Item = u32>,
{
    horizontal_distance(width, length) + vertical_distance(heights)
}

/// Plan an estate from stored records.
pub fn plan_estate(estate: &Estate, trees: &[Tree]) -> DronePlanResult {
    DronePlanResult {
        distance: plan_coverage(estate.width, estate.length, trees.iter().map(|t| t.height)),
    }
}
