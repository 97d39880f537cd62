//! In-memory repository for spots and their stories.
//!
//! The store owns the only mutable copy of the dataset. Readers receive
//! cloned snapshots, so a search never observes a half-applied write and
//! never holds the lock while ranking.

mod read;
mod write;

use std::collections::BTreeMap;
use std::sync::Arc;

use spotdb_core::{SeedFile, SpotRecord, Story};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("spot {0} not found")]
    NotFound(u64),
    #[error("no free {0} id left")]
    IdSpaceExhausted(&'static str),
}

#[derive(Debug, Clone)]
struct StoredSpot {
    record: SpotRecord,
    /// Newest first.
    stories: Vec<Story>,
}

/// Shared handle to the spot dataset. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct SpotStore {
    inner: Arc<RwLock<BTreeMap<u64, StoredSpot>>>,
}

impl SpotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated from a validated seed file.
    #[must_use]
    pub fn from_seed(seed: &SeedFile) -> Self {
        let spots = seed
            .spots
            .iter()
            .map(|entry| {
                (
                    entry.spot.id,
                    StoredSpot {
                        record: entry.spot.clone(),
                        stories: entry.stories.clone(),
                    },
                )
            })
            .collect();

        Self {
            inner: Arc::new(RwLock::new(spots)),
        }
    }
}
