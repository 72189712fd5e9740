use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowError {
    #[error("node {0} already exists")]
    DuplicateNode(String),

    #[error("no such node in this graph: {0}")]
    UnknownNode(String),

    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("internal consistency violated: {0}")]
    InternalConsistency(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),
}
