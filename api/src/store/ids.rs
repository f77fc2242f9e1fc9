use std::sync::atomic::{AtomicU64, Ordering};

/// Process-local sequence of integer identifiers.
///
/// Values are strictly increasing and never handed out twice. The counter is
/// not persisted, so a restart begins again at the starting value.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
