use std::path::Path;

use spotdb_core::{Coordinate, RankedResult, SearchQuery, SpotRecord, Vibe};

#[derive(Debug, Clone)]
pub(crate) struct SearchArgs {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub vibe: Option<Vibe>,
    pub term: Option<String>,
    pub json: bool,
}

impl SearchArgs {
    pub(crate) fn to_query(&self) -> SearchQuery {
        SearchQuery {
            origin: Coordinate::new(self.lat, self.lng),
            radius_km: self.radius,
            vibe: self.vibe,
            search_term: self.term.clone(),
        }
    }
}

/// Rank the seed file's spots and print them nearest-first.
///
/// # Errors
///
/// Returns an error if the seed file cannot be loaded or results cannot be
/// serialized.
pub(crate) fn run_search(seed_path: &Path, args: &SearchArgs) -> anyhow::Result<()> {
    let seed = spotdb_core::load_seed(seed_path)?;
    let spots: Vec<SpotRecord> = seed.spots.into_iter().map(|entry| entry.spot).collect();

    let query = args.to_query();
    let results = spotdb_core::search(&query, &spots);
    tracing::debug!(
        candidates = spots.len(),
        matched = results.len(),
        "search complete"
    );

    if args.json {
        let body = serde_json::json!({ "spots": results, "total": results.len() });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if results.is_empty() {
        println!(
            "no spots within {} km of ({}, {})",
            query.radius_km, query.origin.latitude, query.origin.longitude
        );
        return Ok(());
    }

    println!("{}", render_table(&results));
    Ok(())
}

pub(crate) fn render_table(results: &[RankedResult]) -> String {
    let mut lines = vec![format!(
        "{:<5}{:<10}{:<11}{:<8}NAME",
        "ID", "KM", "VIBE", "RATING"
    )];
    for result in results {
        lines.push(format!(
            "{:<5}{:<10.3}{:<11}{:<8.1}{}",
            result.spot.id,
            result.distance_km,
            result.spot.vibe.as_str(),
            result.spot.rating,
            result.spot.name
        ));
    }
    lines.join("\n")
}
