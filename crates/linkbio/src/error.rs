//! Page construction errors.

use crate::dom::DomError;

/// Error returned when a page component cannot attach to its document.
///
/// Missing structural elements are fatal: a component that cannot find its
/// element fails at construction instead of producing a dead page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// No element carries the theme toggle id.
    #[error("theme toggle element '#{id}' not found")]
    ToggleNotFound { id: String },
    /// The toggle exists but holds no icon element to rewrite.
    #[error("theme toggle '#{id}' has no <{tag}> icon element")]
    ToggleIconNotFound { id: String, tag: String },
    /// No element carries the links container id.
    #[error("links container element '#{id}' not found")]
    ContainerNotFound { id: String },
    /// A document mutation failed after construction.
    #[error(transparent)]
    Dom(#[from] DomError),
}
