//! `tree` command - print the navigation tree.

use std::path::Path;

use clap::Args;

use prep_catalog::{NavItem, build_navigation};
use prep_config::Config;

use super::open_store;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `tree` command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Restrict the tree to a single space id.
    pub(crate) space: Option<String>,

    /// Emit the tree as JSON instead of an indented listing.
    #[arg(long)]
    pub(crate) json: bool,
}

impl TreeArgs {
    /// Print the space/topic/question tree, optionally for one space.
    pub(crate) fn execute(
        &self,
        config_path: Option<&Path>,
        output: &Output,
    ) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let store = open_store(&config);
        let index = store.load_index()?;

        let items = build_navigation(&index);
        let items = match &self.space {
            Some(space_id) => {
                let wanted = format!("/{space_id}");
                let item = items.into_iter().find(|item| item.path == wanted);
                match item {
                    Some(item) => vec![item],
                    None => {
                        return Err(CliError::Validation(format!(
                            "space not found: {space_id}"
                        )));
                    }
                }
            }
            None => items,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&items)
                .map_err(|err| CliError::Validation(err.to_string()))?;
            output.info(&json);
        } else {
            print_items(output, &items, 0);
        }
        Ok(())
    }
}

fn print_items(output: &Output, items: &[NavItem], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        if depth == 0 {
            output.highlight(&format!("{indent}{}", item.title));
        } else if item.children.is_empty() {
            output.info(&format!("{indent}{}  ({})", item.title, item.path));
        } else {
            output.info(&format!("{indent}{}", item.title));
        }
        print_items(output, &item.children, depth + 1);
    }
}
