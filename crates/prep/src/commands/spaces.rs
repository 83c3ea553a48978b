//! `spaces` command - list available spaces.

use std::path::Path;

use prep_config::Config;

use super::open_store;
use crate::error::CliError;
use crate::output::Output;

/// List every space in the index with its topic and question counts.
pub(crate) fn execute(config_path: Option<&Path>, output: &Output) -> Result<(), CliError> {
    let config = Config::load(config_path, None)?;
    let store = open_store(&config);
    let index = store.load_index()?;

    if index.spaces.is_empty() {
        output.warning("No spaces published.");
        return Ok(());
    }

    for space in &index.spaces {
        let questions: usize = space
            .topics
            .iter()
            .map(|topic| topic.questions.len())
            .sum();
        output.highlight(&format!("{}  ({})", space.name, space.id));
        output.info(&format!("  {}", space.description));
        output.detail(&format!(
            "  {} topics, {} questions",
            space.topics.len(),
            questions
        ));
    }

    Ok(())
}
