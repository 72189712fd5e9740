//! Flow network algorithms over a mutable, name-addressed graph.
//!
//! A caller builds a [`Graph`], hands it to one solver and reads back the
//! `load` annotations (or the returned cut) afterwards.

pub mod error;
pub mod graph;
pub mod maximum_flow;
pub mod minimum_cost_flow;
pub mod minimum_cut;
pub mod path_search;
pub mod status;

pub use error::FlowError;
pub use graph::{Edge, EdgeAttributes, EdgeId, EdgeKind, EdgeOrigin, Graph, Node, NodeId, NodeOrigin, NodeRef, Path};
pub use status::Status;
