use chrono::Utc;
use spotdb_core::submission::{ANONYMOUS_AUTHOR, ANONYMOUS_CREATOR};
use spotdb_core::{NewSpot, NewStory, SpotRecord, Story};

use crate::{SpotStore, StoreError, StoredSpot};

impl SpotStore {
    /// Insert a validated spot and return the stored record.
    ///
    /// Assigns the next free id, starts `rating` at zero and records the
    /// creator's story as the spot's first story.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the largest stored id is
    /// already `u64::MAX`.
    pub async fn append(&self, new_spot: NewSpot) -> Result<SpotRecord, StoreError> {
        let now = Utc::now();
        let mut spots = self.inner.write().await;
        let id = next_id(spots.keys().next_back().copied(), "spot")?;

        let author = if new_spot.created_by == ANONYMOUS_CREATOR {
            ANONYMOUS_AUTHOR.to_string()
        } else {
            new_spot.created_by.clone()
        };

        let record = SpotRecord {
            id,
            name: new_spot.name,
            description: new_spot.description,
            vibe: new_spot.vibe,
            latitude: new_spot.coordinate.latitude,
            longitude: new_spot.coordinate.longitude,
            location: new_spot.location,
            best_time: new_spot.best_time,
            tips: new_spot.tips,
            rating: 0.0,
            uniqueness: new_spot.uniqueness,
            safety: new_spot.safety,
            crowd_level: new_spot.crowd_level,
            images: new_spot.images,
            stories_count: 1,
            created_at: now,
            created_by: new_spot.created_by,
        };

        let first_story = Story {
            id: 1,
            author,
            content: new_spot.story,
            likes: 0,
            created_at: now,
        };

        spots.insert(
            id,
            StoredSpot {
                record: record.clone(),
                stories: vec![first_story],
            },
        );

        Ok(record)
    }

    /// Prepend a story to spot `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no spot has that id, or
    /// [`StoreError::IdSpaceExhausted`] if its story ids are used up.
    pub async fn append_story(&self, id: u64, new_story: NewStory) -> Result<Story, StoreError> {
        let mut spots = self.inner.write().await;
        let stored = spots.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        let story_id = next_id(stored.stories.iter().map(|s| s.id).max(), "story")?;
        let story = Story {
            id: story_id,
            author: new_story.author,
            content: new_story.content,
            likes: 0,
            created_at: Utc::now(),
        };

        stored.stories.insert(0, story.clone());
        stored.record.stories_count = stored.record.stories_count.saturating_add(1);

        Ok(story)
    }
}

fn next_id(max: Option<u64>, kind: &'static str) -> Result<u64, StoreError> {
    match max {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted(kind)),
    }
}
