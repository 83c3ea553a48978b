//! CLI command implementations.

mod show;
pub(crate) mod spaces;
mod tree;

use std::sync::Arc;

use prep_config::Config;
use prep_content::{ContentStore, HttpFetcher};

pub(crate) use show::ShowArgs;
pub(crate) use tree::TreeArgs;

/// Build a content store from the loaded configuration.
fn open_store(config: &Config) -> ContentStore {
    let fetcher = HttpFetcher::new(&config.source.base_url, config.timeout());
    ContentStore::new(Arc::new(fetcher), config.source.index_path.clone())
}
