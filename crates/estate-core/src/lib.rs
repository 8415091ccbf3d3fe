pub mod coverage;
pub mod models;
pub mod rules;
pub mod stats;

pub use coverage::{horizontal_distance, plan_coverage, plan_estate, vertical_distance};
pub use models::{
    CreateEstateRequest, CreateTreeRequest, CreatedResponse, DronePlanResult, ErrorResponse,
    Estate, StatsResult, Tree,
};
pub use rules::{validate_dimensions, validate_tree, validate_tree_in_bounds, RuleViolation};
pub use stats::{aggregate, aggregate_trees};
