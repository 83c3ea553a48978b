//! `show` command - display one question.

use std::path::Path;

use clap::Args;

use prep_catalog::{breadcrumb, question_navigation};
use prep_config::{CliSettings, Config};

use super::open_store;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `show` command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Space id (e.g. "java").
    pub(crate) space: String,
    /// Topic id within the space (e.g. "oop").
    pub(crate) topic: String,
    /// Question id within the topic.
    pub(crate) question: String,

    /// Answer level to display (defaults to browse.default_level).
    #[arg(long)]
    pub(crate) level: Option<String>,
}

impl ShowArgs {
    /// Fetch and print the question at the requested answer level, with
    /// breadcrumb and previous/next hints.
    pub(crate) fn execute(
        &self,
        config_path: Option<&Path>,
        output: &Output,
    ) -> Result<(), CliError> {
        let settings = CliSettings {
            level: self.level.clone(),
            ..Default::default()
        };
        let config = Config::load(config_path, Some(&settings))?;
        let store = open_store(&config);
        let index = store.load_index()?;

        let Some(space) = index.find_space(&self.space) else {
            return Err(CliError::Validation(format!(
                "space not found: {}",
                self.space
            )));
        };
        let Some(topic) = space.find_topic(&self.topic) else {
            return Err(CliError::Validation(format!(
                "topic not found: {}/{}",
                self.space, self.topic
            )));
        };
        let Some(question) = topic.find_question(&self.question) else {
            return Err(CliError::Validation(format!(
                "question not found: {}/{}/{}",
                self.space, self.topic, self.question
            )));
        };

        let crumbs = breadcrumb(
            &index,
            Some(&self.space),
            Some(&self.topic),
            Some(&self.question),
        );
        let trail: Vec<&str> = crumbs.iter().map(|crumb| crumb.label.as_str()).collect();
        output.detail(&trail.join(" > "));

        let content = store.load_question(&question.file_path)?;
        let level = &config.browse.default_level;

        output.highlight(&content.title);
        match content.answer(level) {
            Some(text) => {
                output.info("");
                output.info(text);
            }
            None => {
                output.warning(&format!(
                    "No {level} answer for this question (available: {}).",
                    content.levels().join(", ")
                ));
            }
        }

        let nav = question_navigation(&index, &self.space, &self.topic, &self.question);
        output.info("");
        if let Some(previous) = nav.previous {
            output.detail(&format!(
                "previous: {}  ({})",
                previous.question.title,
                previous.route()
            ));
        }
        if let Some(next) = nav.next {
            output.detail(&format!("next: {}  ({})", next.question.title, next.route()));
        }
        if nav.is_first && nav.is_last {
            output.detail("only question in this space");
        } else if nav.is_first {
            output.detail("first question in this space");
        } else if nav.is_last {
            output.detail("last question in this space");
        }

        Ok(())
    }
}
