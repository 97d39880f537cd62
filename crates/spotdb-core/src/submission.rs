//! Validation of user-submitted spots and stories.
//!
//! Submissions arrive with every field optional; [`SpotSubmission::validate`]
//! either produces a well-formed [`NewSpot`] or names the first offending
//! field. Id assignment and persistence are left to the store.

use serde::Deserialize;
use thiserror::Error;

use crate::geo::Coordinate;
use crate::vibe::Vibe;

pub const ANONYMOUS_CREATOR: &str = "anonymous";
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Error, PartialEq)]
pub enum SubmissionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid vibe '{0}'; expected one of: {choices}", choices = Vibe::choices())]
    InvalidVibe(String),
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Raw spot submission, as posted by the add-spot form.
///
/// Keys are snake_case; the form's camelCase spellings are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotSubmission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub vibe: Option<String>,
    pub location: Option<String>,
    /// The creator's own story about the spot.
    pub story: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(alias = "bestTime")]
    pub best_time: Option<String>,
    /// Freeform tips, one per line.
    pub tips: Option<String>,
    pub uniqueness: Option<f64>,
    pub safety: Option<f64>,
    #[serde(alias = "crowdLevel")]
    pub crowd_level: Option<f64>,
    pub images: Option<Vec<String>>,
    #[serde(alias = "userId")]
    pub user_id: Option<String>,
}

/// A validated spot, ready to be handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpot {
    pub name: String,
    pub description: String,
    pub vibe: Vibe,
    pub location: String,
    pub story: String,
    pub coordinate: Coordinate,
    pub best_time: String,
    pub tips: Vec<String>,
    pub uniqueness: f64,
    pub safety: f64,
    pub crowd_level: f64,
    pub images: Vec<String>,
    pub created_by: String,
}

impl SpotSubmission {
    /// Check required fields and normalise optional ones.
    ///
    /// Required fields are checked in the order `name`, `description`,
    /// `vibe`, `location`, `story`, `latitude`, `longitude`; the first
    /// missing or blank one is reported.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] naming the first invalid field.
    pub fn validate(self) -> Result<NewSpot, SubmissionError> {
        let name = required_text(self.name, "name")?;
        let description = required_text(self.description, "description")?;
        let raw_vibe = required_text(self.vibe, "vibe")?;
        let location = required_text(self.location, "location")?;
        let story = required_text(self.story, "story")?;
        let latitude = self
            .latitude
            .ok_or(SubmissionError::MissingField("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(SubmissionError::MissingField("longitude"))?;

        let vibe = raw_vibe
            .parse::<Vibe>()
            .map_err(|_| SubmissionError::InvalidVibe(raw_vibe))?;

        let coordinate = Coordinate::new(latitude, longitude);
        if !coordinate.is_valid() {
            return Err(SubmissionError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(NewSpot {
            name,
            description,
            vibe,
            location,
            story,
            coordinate,
            best_time: self.best_time.map(|s| s.trim().to_string()).unwrap_or_default(),
            tips: self.tips.as_deref().map(split_tips).unwrap_or_default(),
            uniqueness: self.uniqueness.unwrap_or(0.0),
            safety: self.safety.unwrap_or(0.0),
            crowd_level: self.crowd_level.unwrap_or(0.0),
            images: self.images.unwrap_or_default(),
            created_by: self
                .user_id
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| ANONYMOUS_CREATOR.to_string()),
        })
    }
}

/// Raw story submission for an existing spot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorySubmission {
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStory {
    pub author: String,
    pub content: String,
}

impl StorySubmission {
    /// # Errors
    ///
    /// Returns [`SubmissionError::MissingField`] when `content` is missing or blank.
    pub fn validate(self) -> Result<NewStory, SubmissionError> {
        let content = required_text(self.content, "content")?;
        let author = self
            .author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
        Ok(NewStory { author, content })
    }
}

/// Split freeform multi-line tips into individual entries.
///
/// Each non-blank line becomes one trimmed tip; blank lines are dropped and
/// order is preserved.
#[must_use]
pub fn split_tips(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, SubmissionError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(SubmissionError::MissingField(field))
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
