//! Proximity search over a snapshot of spots.
//!
//! The pipeline is a linear scan: annotate every spot with its distance from
//! the query origin, keep the ones inside the radius that pass the optional
//! vibe and text filters, then order nearest-first.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, Coordinate};
use crate::spots::SpotRecord;
use crate::vibe::Vibe;
use crate::CoreError;

/// Fixed city-center origin used when a query does not supply one.
pub const DEFAULT_ORIGIN: Coordinate = Coordinate::new(26.2183, 78.1821);
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub origin: Coordinate,
    /// Inclusive upper bound on distance. Non-positive radii match nothing.
    pub radius_km: f64,
    pub vibe: Option<Vibe>,
    pub search_term: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(origin: Coordinate, radius_km: f64) -> Self {
        Self {
            origin,
            radius_km,
            vibe: None,
            search_term: None,
        }
    }

    #[must_use]
    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        self.vibe = Some(vibe);
        self
    }

    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }
}

/// A spot annotated with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub spot: SpotRecord,
    pub distance_km: f64,
}

/// Run the proximity pipeline against `spots`.
///
/// Results are ordered by ascending distance; equal distances fall back to
/// ascending spot id so output is reproducible. `spots` is never modified.
#[must_use]
pub fn search(query: &SearchQuery, spots: &[SpotRecord]) -> Vec<RankedResult> {
    if !query.radius_km.is_finite() || query.radius_km <= 0.0 {
        return Vec::new();
    }

    let needle = query
        .search_term
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(str::to_lowercase);

    let mut results: Vec<RankedResult> = spots
        .iter()
        .filter_map(|spot| {
            let distance_km = haversine_km(query.origin, spot.coordinate());
            // NaN distances (garbage coordinates) fail this comparison too.
            (distance_km <= query.radius_km).then_some((spot, distance_km))
        })
        .filter(|(spot, _)| query.vibe.is_none_or(|vibe| spot.vibe == vibe))
        .filter(|(spot, _)| {
            needle
                .as_deref()
                .is_none_or(|needle| spot.matches_term(needle))
        })
        .map(|(spot, distance_km)| RankedResult {
            spot: spot.clone(),
            distance_km,
        })
        .collect();

    results.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.spot.id.cmp(&b.spot.id))
    });

    results
}

/// Fallbacks applied when query-string values are missing or unusable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchDefaults {
    pub origin: Coordinate,
    pub radius_km: f64,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// Raw, untyped search parameters as they arrive on a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub vibe: Option<String>,
    pub search: Option<String>,
}

impl SearchParams {
    /// Resolve raw parameters into a typed query.
    ///
    /// Numeric values that are missing, unparseable or non-finite silently
    /// fall back to `defaults`. Blank `vibe`/`search` values count as absent;
    /// a non-blank `search` is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownVibe`] when `vibe` names no known vibe.
    pub fn resolve(&self, defaults: &SearchDefaults) -> Result<SearchQuery, CoreError> {
        let origin = Coordinate::new(
            lenient_f64(self.lat.as_deref(), defaults.origin.latitude),
            lenient_f64(self.lng.as_deref(), defaults.origin.longitude),
        );
        let radius_km = lenient_f64(self.radius.as_deref(), defaults.radius_km);

        let vibe = match non_empty(self.vibe.as_deref()) {
            Some(raw) => Some(raw.parse::<Vibe>()?),
            None => None,
        };

        Ok(SearchQuery {
            origin,
            radius_km,
            vibe,
            search_term: self
                .search
                .clone()
                .filter(|term| !term.trim().is_empty()),
        })
    }
}

fn lenient_f64(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
