use std::collections::BTreeMap;
use std::path::Path;

/// Load the seed file, report validation failures, and print per-vibe counts.
///
/// # Errors
///
/// Returns an error if the seed file cannot be read, parsed, or validated.
pub(crate) fn run_check_seed(seed_path: &Path) -> anyhow::Result<()> {
    let seed = spotdb_core::load_seed(seed_path)?;

    let mut by_vibe: BTreeMap<&str, usize> = BTreeMap::new();
    let mut stories = 0usize;
    for entry in &seed.spots {
        *by_vibe.entry(entry.spot.vibe.as_str()).or_default() += 1;
        stories += entry.stories.len();
    }

    println!(
        "{}: {} spots, {} stories",
        seed_path.display(),
        seed.spots.len(),
        stories
    );
    for (vibe, count) in by_vibe {
        println!("  {vibe:<11}{count}");
    }

    Ok(())
}
