//! Content loading and caching for prep.
//!
//! This crate owns every interaction with the content host:
//! - [`Fetcher`]: transport trait for retrieving raw documents by path
//! - [`HttpFetcher`]: HTTP GET transport against a static file base URL
//! - [`ContentStore`]: in-memory store that loads the index once and
//!   memoizes question documents per path with single-flight
//!   deduplication of concurrent fetches
//! - [`LoadError`]: failure taxonomy shared by transport and store
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), prep_content::LoadError> {
//! use std::sync::Arc;
//! use std::time::Duration;
//! use prep_content::{ContentStore, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new("https://example.com/data", Duration::from_secs(30));
//! let store = ContentStore::new(Arc::new(fetcher), "spaces-index.json");
//!
//! let index = store.load_index()?;
//! let question = store.load_question(&index.spaces[0].topics[0].questions[0].file_path)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod fetch;
mod store;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{LoadError, LoadErrorKind};
pub use fetch::{Fetcher, HttpFetcher};
pub use store::ContentStore;
