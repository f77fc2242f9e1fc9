//! Collection store
//!
//! The catalog sits behind the `CatalogStore` trait with an in-memory and a
//! Postgres implementation, chosen at startup. Feedback entries and contact
//! submissions always live in process memory.

mod contacts;
mod feedback;
mod ids;
mod memory;
mod postgres;

pub use contacts::ContactLog;
pub use feedback::FeedbackBoard;
pub use ids::IdAllocator;
pub use memory::MemoryCatalog;
pub use postgres::PgCatalog;

use arcade_shared::{CatalogChanges, CatalogItem, NewCatalogItem};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage contract for catalog items.
///
/// Identifiers arrive as the raw path segment. A segment the backend cannot
/// parse as one of its identifiers behaves exactly like an absent item.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Short backend name for logs and the health endpoint
    fn backend(&self) -> &'static str;

    async fn list(&self) -> StoreResult<Vec<CatalogItem>>;

    async fn get(&self, id: &str) -> StoreResult<Option<CatalogItem>>;

    async fn create(&self, item: NewCatalogItem) -> StoreResult<CatalogItem>;

    /// Replace the item's fields, keeping its image when `changes.img` is `None`
    async fn update(&self, id: &str, changes: CatalogChanges) -> StoreResult<Option<CatalogItem>>;

    /// Returns `false` when nothing matched
    async fn remove(&self, id: &str) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;

    /// Insert `items` only if the collection is empty. Returns how many were inserted.
    async fn seed_if_empty(&self, items: Vec<NewCatalogItem>) -> StoreResult<usize>;
}

/// Owner of every collection the API serves
pub struct Store {
    catalog: Arc<dyn CatalogStore>,
    feedback: FeedbackBoard,
    contacts: ContactLog,
}

impl Store {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog,
            feedback: FeedbackBoard::new(),
            contacts: ContactLog::new(),
        }
    }

    /// Store backed entirely by memory, with the built-in catalog loaded
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCatalog::seeded()))
    }

    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }

    pub fn feedback(&self) -> &FeedbackBoard {
        &self.feedback
    }

    pub fn contacts(&self) -> &ContactLog {
        &self.contacts
    }
}
