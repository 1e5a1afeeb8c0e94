//! Persistence backends for the record store.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::store::error::StoreError;
use crate::store::state::StoreState;

/// Durable home of the store document.
///
/// The [`Store`](crate::store::Store) serialises all access, so a backend
/// only needs to load and replace one whole document.
pub trait StoreBackend: Send + Sync {
    /// Loads the persisted document, or `None` if nothing was written yet.
    fn load(&self) -> Result<Option<StoreState>, StoreError>;

    /// Replaces the persisted document.
    fn persist(&self, state: &StoreState) -> Result<(), StoreError>;
}

/// Backend that keeps the last persisted document in memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: Mutex<Option<StoreState>>,
    reject_writes: AtomicBool,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds `state`.
    #[must_use]
    pub fn with_state(state: StoreState) -> Self {
        Self {
            document: Mutex::new(Some(state)),
            reject_writes: AtomicBool::new(false),
        }
    }

    /// Makes every following `persist` fail (or succeed again).
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Returns a copy of the last persisted document.
    pub fn persisted(&self) -> Result<Option<StoreState>, StoreError> {
        let document = self.document.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(document.clone())
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<Option<StoreState>, StoreError> {
        self.persisted()
    }

    fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected("memory backend is read-only".into()));
        }
        let mut document = self.document.lock().map_err(|_| StoreError::LockPoisoned)?;
        *document = Some(state.clone());
        Ok(())
    }
}

impl<B: StoreBackend + ?Sized> StoreBackend for std::sync::Arc<B> {
    fn load(&self) -> Result<Option<StoreState>, StoreError> {
        (**self).load()
    }

    fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        (**self).persist(state)
    }
}
