//! Core data models for the estate survey system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rectangular plot of `width × length` unit cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estate {
    pub id: String,
    pub width: u32,
    pub length: u32,
    pub created_at: DateTime<Utc>,
}

impl Estate {
    /// Whether the cell `(x, y)` lies inside this estate.
    pub fn contains_cell(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.length
    }
}

/// A tree planted on an estate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub id: String,
    pub estate_id: String,
    pub x: u32,
    pub y: u32,
    /// Height in meters, 0..=30
    pub height: u32,
    pub created_at: DateTime<Utc>,
}

/// Height statistics for the trees of one estate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    pub count: usize,
    pub max: u32,
    pub min: u32,
    pub median: f64,
}

/// Drone survey distance for one estate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DronePlanResult {
    pub distance: u64,
}

/// Wire request for `POST /estate`.
///
/// Dimensions are signed so that out-of-range values reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEstateRequest {
    pub width: i64,
    pub length: i64,
}

/// Wire request for `POST /estate/:id/tree`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTreeRequest {
    pub x: i64,
    pub y: i64,
    pub height: i64,
}

/// Response carrying the id of a newly created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_cell_is_exclusive_of_dimensions() {
        let estate = Estate {
            id: "e1".into(),
            width: 10,
            length: 5,
            created_at: Utc::now(),
        };
        assert!(estate.contains_cell(0, 0));
        assert!(estate.contains_cell(9, 4));
        assert!(!estate.contains_cell(10, 0));
        assert!(!estate.contains_cell(0, 5));
    }

    #[test]
    fn stats_result_serializes_wire_field_names() {
        let stats = StatsResult {
            count: 2,
            max: 25,
            min: 10,
            median: 17.5,
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["max"], 25);
        assert_eq!(value["min"], 10);
        assert_eq!(value["median"], 17.5);
    }
}
