//! Catalog model and navigation derivations for prep.
//!
//! This crate provides:
//! - The catalog data model ([`SpacesIndex`] down to [`QuestionContent`])
//! - Pure derivations over a loaded index: id lookups, breadcrumb
//!   computation, previous/next question adjacency, and navigation tree
//!   building
//!
//! Everything here is I/O-free. Loading and caching of catalog documents
//! lives in `prep-content`; this crate only interprets data that is already
//! in memory. Lookups by id return `Option`/sentinel values rather than
//! errors, because absence is a normal, user-reachable state (a stale or
//! mistyped route).

pub mod adjacent;
pub mod breadcrumb;
pub mod model;
pub mod navigation;

pub use adjacent::{Adjacent, Direction, QuestionNavigation, QuestionRef};
pub use adjacent::{adjacent_question, question_navigation};
pub use breadcrumb::{Crumb, breadcrumb};
pub use model::{Question, QuestionContent, Space, SpacesIndex, Topic};
pub use navigation::{NavItem, build_navigation};
