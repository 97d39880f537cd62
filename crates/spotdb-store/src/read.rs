use spotdb_core::{RankedResult, SearchQuery, SpotDetail, SpotRecord};

use crate::SpotStore;

impl SpotStore {
    /// Snapshot of every spot, ordered by id.
    pub async fn list(&self) -> Vec<SpotRecord> {
        let spots = self.inner.read().await;
        spots.values().map(|s| s.record.clone()).collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn find_by_id(&self, id: u64) -> Option<SpotRecord> {
        let spots = self.inner.read().await;
        spots.get(&id).map(|s| s.record.clone())
    }

    /// Spot with its stories, newest first.
    pub async fn get(&self, id: u64) -> Option<SpotDetail> {
        let spots = self.inner.read().await;
        spots.get(&id).map(|s| SpotDetail {
            spot: s.record.clone(),
            stories: s.stories.clone(),
        })
    }

    /// Rank the current snapshot against `query`.
    ///
    /// The read lock is released before ranking; writes that land afterwards
    /// are not reflected in the result.
    pub async fn search(&self, query: &SearchQuery) -> Vec<RankedResult> {
        let snapshot = self.list().await;
        spotdb_core::search(query, &snapshot)
    }
}
