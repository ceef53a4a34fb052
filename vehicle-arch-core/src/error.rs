use thiserror::Error;

/// Failures raised by the graph store and the project import surface.
///
/// Every variant is a local, recoverable condition: the operation that
/// raised it is rejected as a whole and the store is left untouched.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown component kind: {0}")]
    UnknownKind(String),

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("edge not found: {0}")]
    EdgeNotFound(String),

    /// A bulk load would leave the graph inconsistent (dangling edge
    /// endpoint or duplicate node id).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("invalid project JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
