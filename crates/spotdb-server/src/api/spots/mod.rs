//! Spot API handlers.
//!
//! - `GET  /api/v1/spots`              — proximity search
//! - `POST /api/v1/spots`              — submit a new spot
//! - `GET  /api/v1/spots/{id}`         — spot detail with stories
//! - `POST /api/v1/spots/{id}/stories` — add a story to a spot

mod detail;
mod search;
mod write;

pub(super) use detail::get_spot;
pub(super) use search::search_spots;
pub(super) use write::{create_spot, create_story};

use super::ApiError;

/// Parse a path id, treating anything that is not a spot id as not found.
fn parse_spot_id(raw: &str, request_id: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|_| not_found(request_id, raw))
}

fn not_found(request_id: &str, id: impl std::fmt::Display) -> ApiError {
    ApiError::new(request_id, "not_found", format!("spot '{id}' not found"))
}
