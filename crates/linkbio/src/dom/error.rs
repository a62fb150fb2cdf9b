//! Document mutation errors.

use super::NodeId;

/// Error returned when a document operation cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node id does not refer to a live node (never created, or removed).
    #[error("node {0} does not exist in this document")]
    NodeNotFound(NodeId),
    /// The requested insertion would produce an invalid tree.
    #[error("cannot insert node {child} under node {parent}: {reason}")]
    HierarchyRequest {
        parent: NodeId,
        child: NodeId,
        reason: &'static str,
    },
}
