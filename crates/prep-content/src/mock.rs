//! Mock fetcher for testing.
//!
//! Provides [`MockFetcher`] for exercising the store without a network.
//! Serves documents from an in-memory path table and records every request
//! so tests can assert how many fetches a scenario performed. An optional
//! gate holds fetches open, letting tests pin the in-flight window of a
//! load deterministically.

use std::collections::HashMap;
use std::sync::{Condvar, Mutex};

use crate::error::LoadError;
use crate::fetch::Fetcher;

struct GateState {
    open: bool,
    entered: usize,
}

/// In-memory fetcher for tests.
///
/// Paths without a configured response answer as [`LoadError::NotFound`].
///
/// # Example
///
/// ```ignore
/// use prep_content::Fetcher;
/// use prep_content::mock::MockFetcher;
///
/// let fetcher = MockFetcher::new().with_document("q.json", "{}");
///
/// assert!(fetcher.fetch("q.json").is_ok());
/// assert_eq!(fetcher.request_count("q.json"), 1);
/// ```
pub struct MockFetcher {
    responses: Mutex<HashMap<String, Result<String, LoadError>>>,
    requests: Mutex<Vec<String>>,
    gate: Mutex<GateState>,
    gate_changed: Condvar,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            gate: Mutex::new(GateState {
                open: true,
                entered: 0,
            }),
            gate_changed: Condvar::new(),
        }
    }
}

impl MockFetcher {
    /// Create a new empty mock fetcher with an open gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.into(), Ok(body.into()));
        self
    }

    /// Answer `path` with `error`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_error(self, path: impl Into<String>, error: LoadError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.into(), Err(error));
        self
    }

    /// Replace the response for `path` after construction.
    ///
    /// Used by retry tests that repair a failing path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_document(&self, path: impl Into<String>, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.into(), Ok(body.into()));
    }

    /// Close the gate: subsequent fetches block in [`Fetcher::fetch`]
    /// until [`release`](Self::release) is called.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn hold(&self) {
        self.gate.lock().unwrap().open = false;
    }

    /// Open the gate and wake every blocked fetch.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn release(&self) {
        self.gate.lock().unwrap().open = true;
        self.gate_changed.notify_all();
    }

    /// Block until at least `count` fetches have entered the gate.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn wait_for_fetches(&self, count: usize) {
        let mut state = self.gate.lock().unwrap();
        while state.entered < count {
            state = self.gate_changed.wait(state).unwrap();
        }
    }

    /// Number of fetches issued for `path`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn request_count(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|requested| requested.as_str() == path)
            .count()
    }

    /// Total number of fetches issued.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.requests.lock().unwrap().push(path.to_owned());

        {
            let mut state = self.gate.lock().unwrap();
            state.entered += 1;
            self.gate_changed.notify_all();
            while !state.open {
                state = self.gate_changed.wait(state).unwrap();
            }
        }

        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| {
                Err(LoadError::NotFound {
                    path: path.to_owned(),
                })
            })
    }
}
