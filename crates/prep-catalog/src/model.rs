//! Catalog data model.
//!
//! Mirrors the JSON documents served by the content host: one index
//! document describing every space, topic and question, plus one content
//! document per question. The index is loaded once and treated as
//! immutable for the lifetime of a session.
//!
//! # Id Convention
//!
//! Ids are unique within their immediate parent collection only: a topic
//! id is unique within its space, a question id within its topic. Route
//! segments therefore always carry the full `space/topic/question` prefix.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root index document listing every space.
///
/// Fetched once per session and shared read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpacesIndex {
    /// All available spaces, in display order.
    pub spaces: Vec<Space>,
}

impl SpacesIndex {
    /// Look up a space by id.
    ///
    /// Returns `None` when no space carries the id. Absence is an expected
    /// branch (stale or mistyped route), not an error.
    #[must_use]
    pub fn find_space(&self, space_id: &str) -> Option<&Space> {
        self.spaces.iter().find(|space| space.id == space_id)
    }
}

/// Top-level subject-matter category (e.g. "Java").
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Space {
    /// Unique id among all spaces.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown in listings.
    pub description: String,
    /// Topics belonging to this space, in display order.
    pub topics: Vec<Topic>,
}

impl Space {
    /// Look up a topic by id within this space.
    #[must_use]
    pub fn find_topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id == topic_id)
    }
}

/// Grouping of related questions within a space.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    /// Unique id within the parent space.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown in listings.
    pub description: String,
    /// Questions belonging to this topic, in display order.
    pub questions: Vec<Question>,
}

impl Topic {
    /// Look up a question by id within this topic.
    #[must_use]
    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }
}

/// Single interview question entry in the index.
///
/// The question text itself lives in a separate document referenced by
/// [`file_path`](Self::file_path) and is fetched lazily.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// Unique id within the parent topic.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Content-host path of the question document
    /// (e.g. "spaces/java/oop/what-is-inheritance.json").
    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// Content document for one question.
///
/// `answers` maps an answer-level name ("junior", "middle", "senior",
/// "tricky") to the answer text for that level. The exact key set varies
/// by deployment; unknown level names are preserved as opaque
/// pass-through rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuestionContent {
    /// Question title (authoritative over the index entry).
    pub title: String,
    /// Answer text keyed by level name.
    pub answers: HashMap<String, String>,
}

impl QuestionContent {
    /// Answer text for a level, if the document carries one.
    #[must_use]
    pub fn answer(&self, level: &str) -> Option<&str> {
        self.answers.get(level).map(String::as_str)
    }

    /// Level names present in this document, sorted for stable display.
    #[must_use]
    pub fn levels(&self) -> Vec<&str> {
        let mut levels: Vec<&str> = self.answers.keys().map(String::as_str).collect();
        levels.sort_unstable();
        levels
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two-space fixture shared by the derivation tests in this crate.
    pub(crate) fn sample_index() -> SpacesIndex {
        SpacesIndex {
            spaces: vec![
                Space {
                    id: "java".to_owned(),
                    name: "Java".to_owned(),
                    description: "Core Java interview questions".to_owned(),
                    topics: vec![
                        Topic {
                            id: "oop".to_owned(),
                            name: "OOP".to_owned(),
                            description: "Object-oriented programming".to_owned(),
                            questions: vec![
                                question("inheritance", "What is inheritance?"),
                                question("polymorphism", "What is polymorphism?"),
                            ],
                        },
                        Topic {
                            id: "collections".to_owned(),
                            name: "Collections".to_owned(),
                            description: "Collections framework".to_owned(),
                            questions: vec![question("arraylist", "ArrayList vs LinkedList")],
                        },
                    ],
                },
                Space {
                    id: "sql".to_owned(),
                    name: "SQL".to_owned(),
                    description: "Database questions".to_owned(),
                    topics: Vec::new(),
                },
            ],
        }
    }

    pub(crate) fn question(id: &str, title: &str) -> Question {
        Question {
            id: id.to_owned(),
            title: title.to_owned(),
            file_path: format!("spaces/java/oop/{id}.json"),
        }
    }

    #[test]
    fn test_find_space_returns_space() {
        let index = sample_index();

        let space = index.find_space("java");

        assert!(space.is_some());
        assert_eq!(space.unwrap().name, "Java");
    }

    #[test]
    fn test_find_space_nonexistent_returns_none() {
        let index = sample_index();

        assert!(index.find_space("nonexistent").is_none());
    }

    #[test]
    fn test_find_topic_returns_topic() {
        let index = sample_index();
        let space = index.find_space("java").unwrap();

        let topic = space.find_topic("collections");

        assert!(topic.is_some());
        assert_eq!(topic.unwrap().name, "Collections");
    }

    #[test]
    fn test_find_topic_nonexistent_returns_none() {
        let index = sample_index();
        let space = index.find_space("java").unwrap();

        assert!(space.find_topic("nonexistent").is_none());
    }

    #[test]
    fn test_find_question_returns_question() {
        let index = sample_index();
        let topic = index.find_space("java").unwrap().find_topic("oop").unwrap();

        let question = topic.find_question("polymorphism");

        assert!(question.is_some());
        assert_eq!(question.unwrap().title, "What is polymorphism?");
    }

    #[test]
    fn test_find_question_nonexistent_returns_none() {
        let index = sample_index();
        let topic = index.find_space("java").unwrap().find_topic("oop").unwrap();

        assert!(topic.find_question("nonexistent").is_none());
    }

    #[test]
    fn test_index_deserializes_file_path_key() {
        let json = r#"{
            "spaces": [{
                "id": "java",
                "name": "Java",
                "description": "Java questions",
                "topics": [{
                    "id": "oop",
                    "name": "OOP",
                    "description": "OOP questions",
                    "questions": [{
                        "id": "inheritance",
                        "title": "What is inheritance?",
                        "filePath": "spaces/java/oop/inheritance.json"
                    }]
                }]
            }]
        }"#;

        let index: SpacesIndex = serde_json::from_str(json).unwrap();

        let question = &index.spaces[0].topics[0].questions[0];
        assert_eq!(question.file_path, "spaces/java/oop/inheritance.json");
    }

    #[test]
    fn test_question_content_known_levels() {
        let json = r#"{
            "title": "What is inheritance?",
            "answers": {
                "junior": "A mechanism to derive a class from another.",
                "senior": "Subtype polymorphism via class extension."
            }
        }"#;

        let content: QuestionContent = serde_json::from_str(json).unwrap();

        assert_eq!(
            content.answer("junior"),
            Some("A mechanism to derive a class from another.")
        );
        assert_eq!(content.answer("middle"), None);
        assert_eq!(content.levels(), vec!["junior", "senior"]);
    }

    #[test]
    fn test_question_content_unknown_levels_pass_through() {
        let json = r#"{
            "title": "ArrayList vs LinkedList",
            "answers": {
                "basic": "ArrayList is array-backed.",
                "inDepth": "Cache locality usually favours ArrayList."
            }
        }"#;

        let content: QuestionContent = serde_json::from_str(json).unwrap();

        assert_eq!(content.answer("basic"), Some("ArrayList is array-backed."));
        assert_eq!(content.levels(), vec!["basic", "inDepth"]);
    }
}
