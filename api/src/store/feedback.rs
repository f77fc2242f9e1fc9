use arcade_shared::{FeedbackDraft, FeedbackEntry};
use tokio::sync::RwLock;

use super::IdAllocator;

/// In-memory feedback board.
///
/// Ids are allocated inside the same write lock as the insert, so the list is
/// always ordered by id.
pub struct FeedbackBoard {
    entries: RwLock<Vec<FeedbackEntry>>,
    ids: IdAllocator,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            ids: IdAllocator::default(),
        }
    }

    pub async fn list(&self) -> Vec<FeedbackEntry> {
        self.entries.read().await.clone()
    }

    pub async fn contains(&self, id: u64) -> bool {
        self.entries.read().await.iter().any(|entry| entry.id == id)
    }

    pub async fn create(&self, draft: FeedbackDraft) -> FeedbackEntry {
        let mut entries = self.entries.write().await;
        let entry = draft.with_id(self.ids.next());
        entries.push(entry.clone());
        entry
    }

    /// Fully replace an entry's content, keeping its id and position
    pub async fn update(&self, id: u64, draft: FeedbackDraft) -> Option<FeedbackEntry> {
        let mut entries = self.entries.write().await;
        let slot = entries.iter_mut().find(|entry| entry.id == id)?;
        *slot = draft.with_id(id);
        Some(slot.clone())
    }

    pub async fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for FeedbackBoard {
    fn default() -> Self {
        Self::new()
    }
}
