use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Serialize;
use spotdb_core::{RankedResult, SearchParams};

use crate::middleware::RequestId;

use super::super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(in crate::api) struct SpotSearchData {
    pub spots: Vec<RankedResult>,
    pub total: usize,
}

/// GET /api/v1/spots — rank spots by distance from `lat`/`lng`.
///
/// Missing or malformed numbers fall back to the configured defaults. A
/// `vibe` that names no known vibe matches nothing rather than failing.
pub(in crate::api) async fn search_spots(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<SpotSearchData>> {
    let spots = match params.resolve(&state.search_defaults) {
        Ok(query) => {
            let results = state.store.search(&query).await;
            tracing::debug!(
                lat = query.origin.latitude,
                lng = query.origin.longitude,
                radius_km = query.radius_km,
                vibe = ?query.vibe,
                matched = results.len(),
                "spot search"
            );
            results
        }
        Err(e) => {
            tracing::debug!(error = %e, "spot search with unknown vibe");
            Vec::new()
        }
    };

    let total = spots.len();
    Json(ApiResponse::new(SpotSearchData { spots, total }, req_id.0))
}
