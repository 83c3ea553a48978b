//! Navigation tree builder.
//!
//! Builds the space → topic → question tree from a loaded [`SpacesIndex`]
//! for UI presentation. Navigation is a view layer over the catalog
//! hierarchy; the items carry route paths, not content paths.

use serde::Serialize;

use crate::model::SpacesIndex;

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Route path of the item (e.g. "/java/oop").
    pub path: String,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Build the navigation tree for the whole index.
///
/// One item per space, with topics as children and questions as leaves.
/// Ordering follows the index.
#[must_use]
pub fn build_navigation(index: &SpacesIndex) -> Vec<NavItem> {
    index
        .spaces
        .iter()
        .map(|space| NavItem {
            title: space.name.clone(),
            path: format!("/{}", space.id),
            children: space
                .topics
                .iter()
                .map(|topic| NavItem {
                    title: topic.name.clone(),
                    path: format!("/{}/{}", space.id, topic.id),
                    children: topic
                        .questions
                        .iter()
                        .map(|question| NavItem {
                            title: question.title.clone(),
                            path: format!("/{}/{}/{}", space.id, topic.id, question.id),
                            children: Vec::new(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
