//! Record store behind a single serializing lock.
//!
//! Every mutation runs inside [`Store::transact`]: the closure edits a
//! working copy, the backend persists it, and only then does the copy
//! replace the live state. Paired records (payment + approval, approval +
//! release item, release item + payment) therefore always change together.
//!
//! # Modules
//!
//! - `state` - The store document and lookup helpers
//! - `backend` - Persistence backends (`StoreBackend`, `MemoryBackend`)
//! - `error` - Store error types

pub mod backend;
pub mod error;
pub mod state;

use std::sync::Mutex;

pub use backend::{MemoryBackend, StoreBackend};
pub use error::StoreError;
pub use state::StoreState;

/// Serialized access to the store document.
pub struct Store {
    backend: Box<dyn StoreBackend>,
    state: Mutex<StoreState>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    /// Opens a store over `backend`, starting empty if nothing was persisted.
    pub fn open(backend: impl StoreBackend + 'static) -> Result<Self, StoreError> {
        Self::open_or_seed(backend, StoreState::default)
    }

    /// Opens a store over `backend`, persisting `seed()` if nothing was persisted.
    pub fn open_or_seed(
        backend: impl StoreBackend + 'static,
        seed: impl FnOnce() -> StoreState,
    ) -> Result<Self, StoreError> {
        let state = match backend.load()? {
            Some(state) => state,
            None => {
                let state = seed();
                backend.persist(&state)?;
                state
            }
        };

        Ok(Self {
            backend: Box::new(backend),
            state: Mutex::new(state),
        })
    }

    /// Creates a store over a fresh [`MemoryBackend`] holding `state`.
    #[must_use]
    pub fn in_memory(state: StoreState) -> Self {
        Self {
            backend: Box::new(MemoryBackend::with_state(state.clone())),
            state: Mutex::new(state),
        }
    }

    /// Runs a read-only projection over the current state.
    pub fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> Result<R, StoreError> {
        let state = self.state.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&state))
    }

    /// Runs `f` as one transaction.
    ///
    /// Nothing becomes visible unless `f` succeeds and the backend accepts
    /// the new document.
    pub fn transact<R, E>(&self, f: impl FnOnce(&mut StoreState) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let mut state = self.state.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut working = state.clone();
        let result = f(&mut working)?;
        self.backend.persist(&working)?;
        *state = working;
        Ok(result)
    }

    /// Returns a copy of the whole document.
    pub fn snapshot(&self) -> Result<StoreState, StoreError> {
        self.read(Clone::clone)
    }
}
