//! Domain core for spotdb: spots, vibes, distance, search and submissions.

pub mod app_config;
pub mod config;
pub mod geo;
pub mod search;
pub mod seed;
pub mod spots;
pub mod submission;
pub mod vibe;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use search::{
    search, RankedResult, SearchDefaults, SearchParams, SearchQuery, DEFAULT_ORIGIN,
    DEFAULT_RADIUS_KM,
};
pub use seed::{load_seed, parse_seed, SeedFile, SeedSpot};
pub use spots::{SpotDetail, SpotRecord, Story};
pub use submission::{
    split_tips, NewSpot, NewStory, SpotSubmission, StorySubmission, SubmissionError,
};
pub use vibe::Vibe;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown vibe: '{0}'")]
    UnknownVibe(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[source] serde_yaml::Error),

    #[error("seed validation failed: {0}")]
    Validation(String),
}
