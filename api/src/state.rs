use std::sync::Arc;
use std::time::Instant;

use crate::store::Store;
use crate::uploads::ImageStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub images: Arc<ImageStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Store, images: ImageStore) -> Self {
        Self {
            store: Arc::new(store),
            images: Arc::new(images),
            started_at: Instant::now(),
        }
    }
}
