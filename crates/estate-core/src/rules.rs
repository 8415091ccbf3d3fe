//! Input bounds enforced at the API boundary.
//!
//! The coverage and statistics functions trust their inputs; these checks
//! run before anything is stored.

use thiserror::Error;

use crate::models::Estate;

pub const MIN_DIMENSION: i64 = 1;
pub const MAX_DIMENSION: i64 = 50_000;
pub const MIN_HEIGHT: i64 = 0;
pub const MAX_HEIGHT: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Invalid Width")]
    InvalidWidth,
    #[error("Invalid Length")]
    InvalidLength,
    #[error("Invalid payload X or Y position or Height")]
    InvalidTree,
    #[error("Tree position ({x}, {y}) is outside the estate")]
    OutOfBounds { x: u32, y: u32 },
}

/// Validated estate dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub length: u32,
}

/// Validated tree placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePlacement {
    pub x: u32,
    pub y: u32,
    pub height: u32,
}

pub fn validate_dimensions(width: i64, length: i64) -> Result<Dimensions, RuleViolation> {
    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if !range.contains(&width) {
        return Err(RuleViolation::InvalidWidth);
    }
    if !range.contains(&length) {
        return Err(RuleViolation::InvalidLength);
    }
    Ok(Dimensions {
        width: width as u32,
        length: length as u32,
    })
}

pub fn validate_tree(x: i64, y: i64, height: i64) -> Result<TreePlacement, RuleViolation> {
    let x = u32::try_from(x).map_err(|_| RuleViolation::InvalidTree)?;
    let y = u32::try_from(y).map_err(|_| RuleViolation::InvalidTree)?;
    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
        return Err(RuleViolation::InvalidTree);
    }
    Ok(TreePlacement {
        x,
        y,
        height: height as u32,
    })
}

/// Only applied when the server is configured to enforce tree bounds.
pub fn validate_tree_in_bounds(estate: &Estate, placement: &TreePlacement) -> Result<(), RuleViolation> {
    if estate.contains_cell(placement.x, placement.y) {
        Ok(())
    } else {
        Err(RuleViolation::OutOfBounds {
            x: placement.x,
            y: placement.y,
        })
    }
}
