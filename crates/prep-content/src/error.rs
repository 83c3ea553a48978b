//! Error types for content loading.

/// Semantic failure categories for load operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadErrorKind {
    /// Transport-level failure.
    Network,
    /// Document does not exist.
    NotFound,
    /// Document body could not be decoded.
    Malformed,
    /// Content host answered but not with the document.
    Unavailable,
}

/// Error produced when loading the index or a question document.
///
/// `Clone` so a single in-flight failure can be handed to every caller
/// waiting on the same fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Transport-level failure (DNS, refused connection, TLS).
    #[error("network failure fetching {path}: {detail}")]
    Network {
        /// Content path of the failed request.
        path: String,
        /// Transport error description.
        detail: String,
    },

    /// The document does not exist on the content host (HTTP 404).
    #[error("document not found: {path}")]
    NotFound {
        /// Content path of the missing document.
        path: String,
    },

    /// The response body is not well-formed JSON of the expected shape.
    #[error("malformed document {path}: {detail}")]
    Malformed {
        /// Content path of the malformed document.
        path: String,
        /// Decoder error description.
        detail: String,
    },

    /// The content host returned a non-success status or timed out.
    #[error("document unavailable: {path} ({detail})")]
    Unavailable {
        /// Content path of the failed request.
        path: String,
        /// Status or timeout description.
        detail: String,
    },
}

impl LoadError {
    /// Semantic category of this error.
    #[must_use]
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Network { .. } => LoadErrorKind::Network,
            Self::NotFound { .. } => LoadErrorKind::NotFound,
            Self::Malformed { .. } => LoadErrorKind::Malformed,
            Self::Unavailable { .. } => LoadErrorKind::Unavailable,
        }
    }

    /// Content path the failed operation was loading.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Network { path, .. }
            | Self::NotFound { path }
            | Self::Malformed { path, .. }
            | Self::Unavailable { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = LoadError::NotFound {
            path: "spaces-index.json".to_owned(),
        };

        assert_eq!(err.kind(), LoadErrorKind::NotFound);
        assert_eq!(err.path(), "spaces-index.json");
    }

    #[test]
    fn test_display_includes_path() {
        let err = LoadError::Unavailable {
            path: "spaces/java/oop/q.json".to_owned(),
            detail: "status 503".to_owned(),
        };

        let msg = err.to_string();
        assert!(msg.contains("spaces/java/oop/q.json"));
        assert!(msg.contains("503"));
    }
}
