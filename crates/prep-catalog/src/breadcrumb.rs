//! Breadcrumb computation.
//!
//! Builds the ordered `label -> path` trail for whichever prefix of a
//! `space/topic/question` route resolves against the index. Resolution
//! stops at the first segment that does not exist instead of erroring, so
//! a partially-bad route still yields usable navigation.

use crate::model::SpacesIndex;

/// Single breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Display label (space name, topic name or question title).
    pub label: String,
    /// Route path of the entry (e.g. "/java/oop").
    pub path: String,
}

/// Compute breadcrumb entries for a route prefix.
///
/// Each segment is resolved against the index in order; an unresolvable
/// segment ends the trail. Passing `None` for a segment also ends the
/// trail, so `breadcrumb(index, Some("java"), None, None)` yields the
/// space entry only.
///
/// # Returns
///
/// Entries for the longest resolvable prefix, possibly empty.
#[must_use]
pub fn breadcrumb(
    index: &SpacesIndex,
    space_id: Option<&str>,
    topic_id: Option<&str>,
    question_id: Option<&str>,
) -> Vec<Crumb> {
    let mut crumbs = Vec::new();

    let Some(space) = space_id.and_then(|id| index.find_space(id)) else {
        return crumbs;
    };
    crumbs.push(Crumb {
        label: space.name.clone(),
        path: format!("/{}", space.id),
    });

    let Some(topic) = topic_id.and_then(|id| space.find_topic(id)) else {
        return crumbs;
    };
    crumbs.push(Crumb {
        label: topic.name.clone(),
        path: format!("/{}/{}", space.id, topic.id),
    });

    let Some(question) = question_id.and_then(|id| topic.find_question(id)) else {
        return crumbs;
    };
    crumbs.push(Crumb {
        label: question.title.clone(),
        path: format!("/{}/{}/{}", space.id, topic.id, question.id),
    });

    crumbs
}
