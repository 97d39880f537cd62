//! Spot and story submission handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use spotdb_core::{SpotRecord, SpotSubmission, Story, StorySubmission, SubmissionError};
use spotdb_store::StoreError;

use crate::middleware::RequestId;

use super::super::{ApiError, ApiResponse, AppState};
use super::{not_found, parse_spot_id};

fn validation_error(req_id: &str, e: &SubmissionError) -> ApiError {
    ApiError::new(req_id, "validation_error", e.to_string())
}

fn store_error(req_id: &str, e: &StoreError) -> ApiError {
    match e {
        StoreError::NotFound(id) => not_found(req_id, *id),
        StoreError::IdSpaceExhausted(_) => {
            tracing::error!(error = %e, "cannot assign id");
            ApiError::new(req_id, "internal_error", e.to_string())
        }
    }
}

/// POST /api/v1/spots — validate and store a new spot.
pub(in crate::api) async fn create_spot(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SpotSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<SpotRecord>>), ApiError> {
    let rid = &req_id.0;
    let new_spot = body.validate().map_err(|e| validation_error(rid, &e))?;

    let spot = state
        .store
        .append(new_spot)
        .await
        .map_err(|e| store_error(rid, &e))?;
    tracing::info!(spot_id = spot.id, vibe = %spot.vibe, "spot created");

    Ok((StatusCode::CREATED, Json(ApiResponse::new(spot, req_id.0))))
}

/// POST /api/v1/spots/{id}/stories — add a story to an existing spot.
pub(in crate::api) async fn create_story(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
    Json(body): Json<StorySubmission>,
) -> Result<(StatusCode, Json<ApiResponse<Story>>), ApiError> {
    let rid = &req_id.0;
    let new_story = body.validate().map_err(|e| validation_error(rid, &e))?;
    let id = parse_spot_id(&raw_id, rid)?;

    let story = state
        .store
        .append_story(id, new_story)
        .await
        .map_err(|e| store_error(rid, &e))?;
    tracing::info!(spot_id = id, story_id = story.id, "story added");

    Ok((StatusCode::CREATED, Json(ApiResponse::new(story, req_id.0))))
}
