use thiserror::Error;

/// Errors from element tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element with this id exists where it was expected.
    #[error("element '{0}' not found")]
    NotFound(String),

    /// The element holds text and cannot take children.
    #[error("element '{0}' cannot hold children")]
    NotAContainer(String),

    /// Insertion index past the end of the child list.
    #[error("index {index} out of bounds for '{parent}' with {len} children")]
    IndexOutOfBounds {
        parent: String,
        index: usize,
        len: usize,
    },
}
