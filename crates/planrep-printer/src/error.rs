use planrep_core::id::PlanNodeId;
use thiserror::Error;

/// Result type local to planrep-printer.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required header field was not supplied (or could not be decoded).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("size of cost and stats list does not match: {cost} cost estimates, {stats} stats estimates")]
    SizeMismatch { cost: usize, stats: usize },

    #[error("node {parent} references missing child {child}")]
    DanglingReference { parent: PlanNodeId, child: PlanNodeId },

    #[error("unknown plan node {0}")]
    UnknownNode(PlanNodeId),

    #[error("duplicate plan node id {0}")]
    DuplicateId(PlanNodeId),

    #[error("arena key {key} holds node {id}")]
    KeyMismatch { key: PlanNodeId, id: PlanNodeId },

    #[error("root node {0} is not in the plan")]
    MissingRoot(PlanNodeId),

    #[error(transparent)]
    Core(#[from] planrep_core::error::Error),
}
