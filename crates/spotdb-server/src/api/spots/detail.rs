use axum::{
    extract::{Path, State},
    Extension, Json,
};
use spotdb_core::SpotDetail;

use crate::middleware::RequestId;

use super::super::{ApiError, ApiResponse, AppState};
use super::{not_found, parse_spot_id};

/// GET /api/v1/spots/{id} — full spot with its stories.
pub(in crate::api) async fn get_spot(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<SpotDetail>>, ApiError> {
    let rid = &req_id.0;
    let id = parse_spot_id(&raw_id, rid)?;

    let detail = state
        .store
        .get(id)
        .await
        .ok_or_else(|| not_found(rid, id))?;

    Ok(Json(ApiResponse::new(detail, req_id.0)))
}
