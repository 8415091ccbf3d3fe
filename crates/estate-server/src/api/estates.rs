//! Estate and tree endpoints.
//!
//! Requests are validated here before they reach the store; the drone plan
//! and statistics are computed from the stored tree heights on every call.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use estate_core::{
    aggregate_trees, plan_estate, rules, CreateEstateRequest, CreateTreeRequest, CreatedResponse,
    DronePlanResult, StatsResult,
};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::state::AppState;

fn invalid_body(err: JsonRejection) -> ApiError {
    tracing::debug!("Rejected request body: {}", err.body_text());
    ApiError::BadRequest("Invalid Request Body".into())
}

/// Create a new estate.
pub async fn create_estate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateEstateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload.map_err(invalid_body)?;
    let dims = rules::validate_dimensions(req.width, req.length)?;

    let estate = state.create_estate(dims).await?;
    tracing::info!("Created estate {} ({}x{})", estate.id, estate.width, estate.length);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: estate.id })))
}

/// Plant a tree on an estate.
pub async fn create_tree(
    State(state): State<Arc<AppState>>,
    Path(estate_id): Path<String>,
    payload: Result<Json<CreateTreeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload.map_err(invalid_body)?;
    let placement = rules::validate_tree(req.x, req.y, req.height)?;

    let estate = state.get_estate(&estate_id)?;
    if state.config().enforce_tree_placement {
        rules::validate_tree_in_bounds(&estate, &placement)?;
    }

    let tree = state.create_tree(&estate_id, placement).await?;
    tracing::debug!(
        "Planted tree {} on estate {} at ({}, {}) height {}",
        tree.id,
        estate_id,
        tree.x,
        tree.y,
        tree.height
    );

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: tree.id })))
}

/// Height statistics for an estate's trees.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(estate_id): Path<String>,
) -> Result<Json<StatsResult>, ApiError> {
    let trees = state.trees_for_estate(&estate_id)?;
    Ok(Json(aggregate_trees(&trees)))
}

/// Drone survey distance for an estate.
pub async fn get_drone_plan(
    State(state): State<Arc<AppState>>,
    Path(estate_id): Path<String>,
) -> Result<Json<DronePlanResult>, ApiError> {
    let estate = state.get_estate(&estate_id)?;
    let trees = state.trees_for_estate(&estate_id)?;

    let plan = plan_estate(&estate, &trees);
    tracing::debug!(
        "Drone plan for estate {} over {} trees: {}",
        estate_id,
        trees.len(),
        plan.distance
    );

    Ok(Json(plan))
}
