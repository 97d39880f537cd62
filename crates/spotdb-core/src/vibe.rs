use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Atmosphere tag attached to every spot.
///
/// The set is closed so that the submission side and the query side cannot
/// drift apart. Parsing is case-insensitive; the canonical spelling is the
/// capitalised one produced by [`Vibe::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Vibe {
    Romantic,
    Serene,
    Creative,
    Adventure,
    Social,
    Peaceful,
}

impl Vibe {
    pub const ALL: [Vibe; 6] = [
        Vibe::Romantic,
        Vibe::Serene,
        Vibe::Creative,
        Vibe::Adventure,
        Vibe::Social,
        Vibe::Peaceful,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Vibe::Romantic => "Romantic",
            Vibe::Serene => "Serene",
            Vibe::Creative => "Creative",
            Vibe::Adventure => "Adventure",
            Vibe::Social => "Social",
            Vibe::Peaceful => "Peaceful",
        }
    }

    /// Comma-separated list of every accepted value, for error messages.
    #[must_use]
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vibe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownVibe(trimmed.to_string()))
    }
}

// Seed files and request bodies may spell vibes in any case.
impl<'de> Deserialize<'de> for Vibe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
