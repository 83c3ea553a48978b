//! Previous/next question adjacency.
//!
//! Questions form one ordered sequence per space: topic order first, then
//! question order within each topic. Adjacency wraps across topic
//! boundaries within a space (the last question of a topic's predecessor
//! precedes the topic's first question) but never across spaces; the ends
//! of a space are reported as boundaries. Topics with zero questions are
//! skipped when wrapping.

use crate::model::{Question, Space, SpacesIndex, Topic};

/// Direction of an adjacency query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the space.
    Previous,
    /// Towards the end of the space.
    Next,
}

/// Fully-resolved location of a question within the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionRef<'a> {
    /// Space containing the question.
    pub space: &'a Space,
    /// Topic containing the question.
    pub topic: &'a Topic,
    /// The question entry.
    pub question: &'a Question,
}

impl QuestionRef<'_> {
    /// Route path of the question (e.g. "/java/oop/inheritance").
    #[must_use]
    pub fn route(&self) -> String {
        format!("/{}/{}/{}", self.space.id, self.topic.id, self.question.id)
    }
}

/// Result of an adjacency query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjacent<'a> {
    /// The neighboring question in the requested direction.
    Question(QuestionRef<'a>),
    /// No neighbor: the current question sits at the start or end of its
    /// space.
    Boundary,
    /// The `space/topic/question` ids did not resolve against the index.
    Unresolved,
}

/// Both adjacency directions for one question, computed together.
///
/// `is_first`/`is_last` are the "disable this button" flags of the
/// original navigation: set on a space boundary and also when the route
/// does not resolve (no navigation possible at all).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionNavigation<'a> {
    /// Previous question, if any.
    pub previous: Option<QuestionRef<'a>>,
    /// Next question, if any.
    pub next: Option<QuestionRef<'a>>,
    /// No previous question exists.
    pub is_first: bool,
    /// No next question exists.
    pub is_last: bool,
}

/// Find the previous or next question relative to a resolved position.
///
/// # Returns
///
/// [`Adjacent::Question`] with the neighbor, [`Adjacent::Boundary`] at the
/// ends of the space, or [`Adjacent::Unresolved`] when any id does not
/// resolve (including a question id missing from its topic).
#[must_use]
pub fn adjacent_question<'a>(
    index: &'a SpacesIndex,
    space_id: &str,
    topic_id: &str,
    question_id: &str,
    direction: Direction,
) -> Adjacent<'a> {
    let Some(space) = index.find_space(space_id) else {
        return Adjacent::Unresolved;
    };
    let Some(topic_idx) = space.topics.iter().position(|topic| topic.id == topic_id) else {
        return Adjacent::Unresolved;
    };
    let topic = &space.topics[topic_idx];
    let Some(question_idx) = topic
        .questions
        .iter()
        .position(|question| question.id == question_id)
    else {
        return Adjacent::Unresolved;
    };

    match direction {
        Direction::Next => {
            if let Some(question) = topic.questions.get(question_idx + 1) {
                return Adjacent::Question(QuestionRef {
                    space,
                    topic,
                    question,
                });
            }
            // Wrap into the first later topic that has questions.
            for later in &space.topics[topic_idx + 1..] {
                if let Some(question) = later.questions.first() {
                    return Adjacent::Question(QuestionRef {
                        space,
                        topic: later,
                        question,
                    });
                }
            }
            Adjacent::Boundary
        }
        Direction::Previous => {
            if question_idx > 0 {
                return Adjacent::Question(QuestionRef {
                    space,
                    topic,
                    question: &topic.questions[question_idx - 1],
                });
            }
            // Wrap into the last earlier topic that has questions.
            for earlier in space.topics[..topic_idx].iter().rev() {
                if let Some(question) = earlier.questions.last() {
                    return Adjacent::Question(QuestionRef {
                        space,
                        topic: earlier,
                        question,
                    });
                }
            }
            Adjacent::Boundary
        }
    }
}

/// Compute both adjacency directions and the boundary flags in one call.
#[must_use]
pub fn question_navigation<'a>(
    index: &'a SpacesIndex,
    space_id: &str,
    topic_id: &str,
    question_id: &str,
) -> QuestionNavigation<'a> {
    let (previous, is_first) =
        match adjacent_question(index, space_id, topic_id, question_id, Direction::Previous) {
            Adjacent::Question(neighbor) => (Some(neighbor), false),
            Adjacent::Boundary | Adjacent::Unresolved => (None, true),
        };
    let (next, is_last) =
        match adjacent_question(index, space_id, topic_id, question_id, Direction::Next) {
            Adjacent::Question(neighbor) => (Some(neighbor), false),
            Adjacent::Boundary | Adjacent::Unresolved => (None, true),
        };

    QuestionNavigation {
        previous,
        next,
        is_first,
        is_last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::{question, sample_index};
    use crate::model::{Space, Topic};

    fn topic(id: &str, questions: Vec<crate::model::Question>) -> Topic {
        Topic {
            id: id.to_owned(),
            name: id.to_uppercase(),
            description: String::new(),
            questions,
        }
    }

    /// Space with topics `[t1:[q1,q2], t2:[q3]]`.
    fn two_topic_index() -> SpacesIndex {
        SpacesIndex {
            spaces: vec![Space {
                id: "java".to_owned(),
                name: "Java".to_owned(),
                description: String::new(),
                topics: vec![
                    topic("t1", vec![question("q1", "Q1"), question("q2", "Q2")]),
                    topic("t2", vec![question("q3", "Q3")]),
                ],
            }],
        }
    }

    fn assert_neighbor(adjacent: Adjacent<'_>, topic_id: &str, question_id: &str) {
        match adjacent {
            Adjacent::Question(neighbor) => {
                assert_eq!(neighbor.topic.id, topic_id);
                assert_eq!(neighbor.question.id, question_id);
            }
            other => panic!("expected a neighbor, got {other:?}"),
        }
    }

    #[test]
    fn test_next_within_topic() {
        let index = two_topic_index();

        let adjacent = adjacent_question(&index, "java", "t1", "q1", Direction::Next);

        assert_neighbor(adjacent, "t1", "q2");
    }

    #[test]
    fn test_next_wraps_to_following_topic() {
        let index = two_topic_index();

        let adjacent = adjacent_question(&index, "java", "t1", "q2", Direction::Next);

        assert_neighbor(adjacent, "t2", "q3");
    }

    #[test]
    fn test_next_at_end_of_space_is_boundary() {
        let index = two_topic_index();

        let adjacent = adjacent_question(&index, "java", "t2", "q3", Direction::Next);

        assert_eq!(adjacent, Adjacent::Boundary);
    }

    #[test]
    fn test_previous_wraps_to_preceding_topic() {
        let index = two_topic_index();

        let adjacent = adjacent_question(&index, "java", "t2", "q3", Direction::Previous);

        assert_neighbor(adjacent, "t1", "q2");
    }

    #[test]
    fn test_previous_at_start_of_space_is_boundary() {
        let index = two_topic_index();

        let adjacent = adjacent_question(&index, "java", "t1", "q1", Direction::Previous);

        assert_eq!(adjacent, Adjacent::Boundary);
    }

    #[test]
    fn test_wrapping_skips_empty_topics() {
        let index = SpacesIndex {
            spaces: vec![Space {
                id: "java".to_owned(),
                name: "Java".to_owned(),
                description: String::new(),
                topics: vec![
                    topic("t1", vec![question("q1", "Q1")]),
                    topic("empty", Vec::new()),
                    topic("t3", vec![question("q2", "Q2")]),
                ],
            }],
        };

        let next = adjacent_question(&index, "java", "t1", "q1", Direction::Next);
        assert_neighbor(next, "t3", "q2");

        let previous = adjacent_question(&index, "java", "t3", "q2", Direction::Previous);
        assert_neighbor(previous, "t1", "q1");
    }

    #[test]
    fn test_trailing_empty_topic_is_boundary() {
        let index = SpacesIndex {
            spaces: vec![Space {
                id: "java".to_owned(),
                name: "Java".to_owned(),
                description: String::new(),
                topics: vec![
                    topic("t1", vec![question("q1", "Q1")]),
                    topic("empty", Vec::new()),
                ],
            }],
        };

        let adjacent = adjacent_question(&index, "java", "t1", "q1", Direction::Next);

        assert_eq!(adjacent, Adjacent::Boundary);
    }

    #[test]
    fn test_unresolved_space_id() {
        let index = two_topic_index();

        let adjacent = adjacent_question(&index, "bad", "t1", "q1", Direction::Next);

        assert_eq!(adjacent, Adjacent::Unresolved);
    }

    #[test]
    fn test_unresolved_question_id() {
        let index = two_topic_index();

        let adjacent = adjacent_question(&index, "java", "t1", "bad", Direction::Next);

        assert_eq!(adjacent, Adjacent::Unresolved);
    }

    #[test]
    fn test_no_wrap_across_spaces() {
        let index = sample_index();

        // "collections" is the last topic of the "java" space; the "sql"
        // space that follows must not be reachable.
        let adjacent = adjacent_question(&index, "java", "collections", "arraylist", Direction::Next);

        assert_eq!(adjacent, Adjacent::Boundary);
    }

    #[test]
    fn test_navigation_middle_of_space() {
        let index = two_topic_index();

        let nav = question_navigation(&index, "java", "t1", "q2");

        assert!(!nav.is_first);
        assert!(!nav.is_last);
        assert_eq!(nav.previous.unwrap().question.id, "q1");
        assert_eq!(nav.next.unwrap().question.id, "q3");
    }

    #[test]
    fn test_navigation_at_space_ends() {
        let index = two_topic_index();

        let first = question_navigation(&index, "java", "t1", "q1");
        assert!(first.is_first);
        assert!(first.previous.is_none());
        assert!(!first.is_last);

        let last = question_navigation(&index, "java", "t2", "q3");
        assert!(last.is_last);
        assert!(last.next.is_none());
        assert!(!last.is_first);
    }

    #[test]
    fn test_navigation_unresolved_disables_both_directions() {
        let index = two_topic_index();

        let nav = question_navigation(&index, "java", "t1", "bad");

        assert!(nav.is_first);
        assert!(nav.is_last);
        assert!(nav.previous.is_none());
        assert!(nav.next.is_none());
    }

    #[test]
    fn test_question_ref_route() {
        let index = two_topic_index();

        let Adjacent::Question(neighbor) =
            adjacent_question(&index, "java", "t1", "q1", Direction::Next)
        else {
            panic!("expected a neighbor");
        };

        assert_eq!(neighbor.route(), "/java/t1/q2");
    }
}
