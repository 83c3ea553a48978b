//! In-memory content store with keyed single-flight loading.
//!
//! [`ContentStore`] owns two pieces of session state:
//! - the index document, fetched at most once per store lifetime
//! - a per-path memo of question documents, populated on first access
//!
//! Concurrent requests for the same uncached path collapse into one
//! underlying fetch; every waiter receives the single result or the single
//! failure. A failure is never memoized (the key is released so a later
//! call retries), while a success is kept until [`clear_cache`] (questions)
//! or the end of the store's lifetime (index).
//!
//! [`clear_cache`]: ContentStore::clear_cache
//!
//! # Thread Safety
//!
//! The store is `Send + Sync` and designed to be shared behind an `Arc`.
//! Map locks are held only for slot bookkeeping, never across a fetch;
//! waiters block on the flight handle, not on the map.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};

use tracing::debug;

use prep_catalog::{QuestionContent, SpacesIndex};

use crate::error::LoadError;
use crate::fetch::Fetcher;

/// Shared handle for one in-flight fetch.
///
/// The thread that opened the flight performs the fetch and completes the
/// handle; every other interested thread blocks in [`wait`](Self::wait).
struct Flight<T> {
    result: Mutex<Option<Result<Arc<T>, LoadError>>>,
    done: Condvar,
}

impl<T> Flight<T> {
    fn new() -> Self {
        Self {
            result: Mutex::new(None),
            done: Condvar::new(),
        }
    }

    fn complete(&self, result: Result<Arc<T>, LoadError>) {
        *self.result.lock().unwrap() = Some(result);
        self.done.notify_all();
    }

    fn wait(&self) -> Result<Arc<T>, LoadError> {
        let mut slot = self.result.lock().unwrap();
        loop {
            if let Some(result) = slot.as_ref() {
                return result.clone();
            }
            slot = self.done.wait(slot).unwrap();
        }
    }
}

/// What a caller found in a cache slot.
enum Role<T> {
    /// First caller for the key: perform the fetch and complete the flight.
    Leader(Arc<Flight<T>>),
    /// A fetch is already running: wait for its result.
    Waiter(Arc<Flight<T>>),
}

/// Cache slot for one question path.
enum Slot {
    /// A fetch for this path is running.
    InFlight(Arc<Flight<QuestionContent>>),
    /// The document is resolved and memoized.
    Resolved(Arc<QuestionContent>),
}

/// Index slot: like [`Slot`], but with an explicit initial state.
enum IndexSlot {
    /// Not requested yet, or the last attempt failed.
    Idle,
    /// The initial fetch is running.
    InFlight(Arc<Flight<SpacesIndex>>),
    /// Loaded for the lifetime of the store.
    Resolved(Arc<SpacesIndex>),
}

/// In-memory store over a [`Fetcher`].
pub struct ContentStore {
    fetcher: Arc<dyn Fetcher>,
    index_path: String,
    index: Mutex<IndexSlot>,
    questions: Mutex<HashMap<String, Slot>>,
}

impl ContentStore {
    /// Create a store over a transport.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Document transport
    /// * `index_path` - Content path of the index document
    ///   (e.g. "spaces-index.json")
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetcher>, index_path: impl Into<String>) -> Self {
        Self {
            fetcher,
            index_path: index_path.into(),
            index: Mutex::new(IndexSlot::Idle),
            questions: Mutex::new(HashMap::new()),
        }
    }

    /// Load the index document.
    ///
    /// The first successful load is memoized for the lifetime of the store;
    /// every later call returns the same `Arc`. Callers arriving while the
    /// initial fetch is in flight share it and receive its result. A failed
    /// load is handed to every waiter of that flight but not memoized, so
    /// calling again retries.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] of the fetch or decode that failed.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    pub fn load_index(&self) -> Result<Arc<SpacesIndex>, LoadError> {
        let role = {
            let mut slot = self.index.lock().unwrap();
            match &*slot {
                IndexSlot::Resolved(index) => return Ok(Arc::clone(index)),
                IndexSlot::InFlight(flight) => Role::Waiter(Arc::clone(flight)),
                IndexSlot::Idle => {
                    let flight = Arc::new(Flight::new());
                    *slot = IndexSlot::InFlight(Arc::clone(&flight));
                    Role::Leader(flight)
                }
            }
        };

        let flight = match role {
            Role::Waiter(flight) => return flight.wait(),
            Role::Leader(flight) => flight,
        };

        let result = self.fetch_index();
        {
            let mut slot = self.index.lock().unwrap();
            *slot = match &result {
                Ok(index) => IndexSlot::Resolved(Arc::clone(index)),
                Err(_) => IndexSlot::Idle,
            };
        }
        flight.complete(result.clone());
        result
    }

    /// Load a question document by content path.
    ///
    /// Returns the memoized value when present. Otherwise issues exactly
    /// one fetch for the path regardless of how many callers arrive while
    /// it is in flight; all of them receive the single result or the
    /// single failure. Failures release the key so a later call retries.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] of the fetch or decode that failed.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    pub fn load_question(&self, path: &str) -> Result<Arc<QuestionContent>, LoadError> {
        let role = {
            let mut slots = self.questions.lock().unwrap();
            match slots.get(path) {
                Some(Slot::Resolved(content)) => {
                    debug!(%path, "question cache hit");
                    return Ok(Arc::clone(content));
                }
                Some(Slot::InFlight(flight)) => Role::Waiter(Arc::clone(flight)),
                None => {
                    let flight = Arc::new(Flight::new());
                    slots.insert(path.to_owned(), Slot::InFlight(Arc::clone(&flight)));
                    Role::Leader(flight)
                }
            }
        };

        let flight = match role {
            Role::Waiter(flight) => return flight.wait(),
            Role::Leader(flight) => flight,
        };

        let result = self.fetch_question(path);
        {
            let mut slots = self.questions.lock().unwrap();
            match &result {
                Ok(content) => {
                    slots.insert(path.to_owned(), Slot::Resolved(Arc::clone(content)));
                }
                Err(_) => {
                    // Release the key, unless a clear_cache raced in and a
                    // fresh flight for this path already took its place.
                    if let Some(Slot::InFlight(current)) = slots.get(path)
                        && Arc::ptr_eq(current, &flight)
                    {
                        slots.remove(path);
                    }
                }
            }
        }
        flight.complete(result.clone());
        result
    }

    /// Discard all memoized question documents.
    ///
    /// The loaded index is unaffected. In-flight fetches complete normally
    /// and hand their result to their waiters.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear_cache(&self) {
        self.questions.lock().unwrap().clear();
        debug!("question cache cleared");
    }

    /// Number of resolved question documents currently memoized.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn cached_questions(&self) -> usize {
        self.questions
            .lock()
            .unwrap()
            .values()
            .filter(|slot| matches!(slot, Slot::Resolved(_)))
            .count()
    }

    fn fetch_index(&self) -> Result<Arc<SpacesIndex>, LoadError> {
        let body = self.fetcher.fetch(&self.index_path)?;
        let index: SpacesIndex =
            serde_json::from_str(&body).map_err(|err| LoadError::Malformed {
                path: self.index_path.clone(),
                detail: err.to_string(),
            })?;
        debug!(spaces = index.spaces.len(), "index loaded");
        Ok(Arc::new(index))
    }

    fn fetch_question(&self, path: &str) -> Result<Arc<QuestionContent>, LoadError> {
        let body = self.fetcher.fetch(path)?;
        let content: QuestionContent =
            serde_json::from_str(&body).map_err(|err| LoadError::Malformed {
                path: path.to_owned(),
                detail: err.to_string(),
            })?;
        debug!(%path, "question loaded");
        Ok(Arc::new(content))
    }
}
