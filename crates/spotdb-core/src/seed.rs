use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::spots::{SpotRecord, Story};
use crate::ConfigError;

/// One spot in the seed file, with any stories already written about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSpot {
    #[serde(flatten)]
    pub spot: SpotRecord,
    /// Newest first.
    #[serde(default)]
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub spots: Vec<SeedSpot>,
}

/// Load and validate the sample dataset from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_seed(path: &Path) -> Result<SeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_seed(&content)
}

/// Parse and validate seed YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_seed(content: &str) -> Result<SeedFile, ConfigError> {
    let seed: SeedFile = serde_yaml::from_str(content).map_err(ConfigError::SeedFileParse)?;
    validate_seed(&seed)?;
    Ok(seed)
}

fn validate_seed(seed: &SeedFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for entry in &seed.spots {
        let spot = &entry.spot;

        if spot.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "spot {} has an empty name",
                spot.id
            )));
        }

        if spot.description.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "spot '{}' has an empty description",
                spot.name
            )));
        }

        if !spot.coordinate().is_valid() {
            return Err(ConfigError::Validation(format!(
                "spot '{}' has out-of-range coordinates ({}, {})",
                spot.name, spot.latitude, spot.longitude
            )));
        }

        if !seen_ids.insert(spot.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate spot id {} (from spot '{}')",
                spot.id, spot.name
            )));
        }

        if let Some(story) = entry.stories.iter().find(|s| s.content.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "story {} on spot '{}' has no content",
                story.id, spot.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vibe::Vibe;

    const MINIMAL: &str = r#"
spots:
  - id: 1
    name: "Sunset Point at Gwalior Fort"
    description: "A secluded corner of the fort"
    vibe: romantic
    latitude: 26.2295
    longitude: 78.1773
    location: "Gwalior Fort, Gwalior"
    created_at: "2024-01-15T00:00:00Z"
    stories:
      - id: 1
        author: "Anonymous"
        content: "She said yes."
        likes: 24
        created_at: "2024-01-20T00:00:00Z"
"#;

    #[test]
    fn parse_minimal_seed_applies_defaults() {
        let seed = parse_seed(MINIMAL).unwrap();
        assert_eq!(seed.spots.len(), 1);
        let entry = &seed.spots[0];
        assert_eq!(entry.spot.vibe, Vibe::Romantic);
        assert!(entry.spot.tips.is_empty());
        assert!(entry.spot.rating.abs() < f64::EPSILON);
        assert_eq!(entry.spot.created_by, "anonymous");
        assert_eq!(entry.stories.len(), 1);
        assert_eq!(entry.stories[0].likes, 24);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doubled = format!("{MINIMAL}{}", &MINIMAL["\nspots:\n".len()..]);
        let err = parse_seed(&doubled).unwrap_err();
        assert!(err.to_string().contains("duplicate spot id 1"), "{err}");
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let bad = MINIMAL.replace("latitude: 26.2295", "latitude: 126.2295");
        let err = parse_seed(&bad).unwrap_err();
        assert!(err.to_string().contains("out-of-range"), "{err}");
    }

    #[test]
    fn empty_description_is_rejected() {
        let bad = MINIMAL.replace("A secluded corner of the fort", " ");
        let err = parse_seed(&bad).unwrap_err();
        assert!(err.to_string().contains("empty description"), "{err}");
    }

    #[test]
    fn unknown_vibe_fails_to_parse() {
        let bad = MINIMAL.replace("vibe: romantic", "vibe: haunted");
        assert!(matches!(
            parse_seed(&bad),
            Err(ConfigError::SeedFileParse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_seed(Path::new("/nonexistent/spots.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::SeedFileIo { ref path, .. } if path.contains("spots.yaml")));
    }

    #[test]
    fn load_seed_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("spots.yaml");
        assert!(
            path.exists(),
            "spots.yaml missing at {path:?} — required for this test"
        );
        let seed = load_seed(&path).expect("failed to load spots.yaml");
        assert_eq!(seed.spots.len(), 4);
        assert!(seed.spots.iter().any(|s| s.spot.name == "Hidden Garden Café"));
    }
}
