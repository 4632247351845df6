//! HTTP surface of the demo backend: an axum router over the in-memory
//! store, answering everything in the uniform `{success, data|error}`
//! envelope.

pub mod envelope;
pub mod error;
pub mod requests;
pub mod routes;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use adelanta_store::Store;

/// Shared application state: the store behind one mutex. Holding the lock
/// across a whole operation is what makes fund/settle transitions atomic.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store. A poisoned lock is recovered rather than
    /// propagated; the handlers have nothing useful to do with the poison.
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Current unix time in seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub use routes::router;
