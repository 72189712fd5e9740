use crate::error::FlowError;
use crate::graph::{Edge, EdgeId, Graph, NodeId};
use num_traits::NumAssign;

/// Walk along directed edges. `nodes.len() == edges.len() + 1` always holds and
/// `edges[i]` leads from `nodes[i]` to `nodes[i + 1]`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Path {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
}

impl Path {
    pub fn new(start: NodeId) -> Self {
        Self { nodes: vec![start], edges: Vec::new() }
    }

    #[inline]
    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// number of edges
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn is_cycle(&self) -> bool {
        !self.is_empty() && self.start() == self.end()
    }

    /// Appends `edge` and its destination. The edge has to be directed and leave the current end.
    pub fn append<Flow>(&mut self, graph: &Graph<Flow>, edge: EdgeId) -> Result<(), FlowError>
    where
        Flow: NumAssign + Ord + Copy,
    {
        let e = graph.edge(edge).ok_or_else(|| FlowError::InvalidPath(format!("edge {edge} is not in the graph")))?;
        match (e.source(), e.destination()) {
            (Some(source), Some(destination)) if source == self.end() => {
                self.nodes.push(destination);
                self.edges.push(edge);
                Ok(())
            }
            (Some(_), Some(_)) => Err(FlowError::InvalidPath(format!("edge {edge} does not leave node {}", self.end()))),
            _ => Err(FlowError::InvalidPath(format!("edge {edge} is undirected"))),
        }
    }

    /// Removes the last (edge, node) pair. The start node is never removed.
    pub fn pop(&mut self) -> Option<(EdgeId, NodeId)> {
        let edge = self.edges.pop()?;
        let node = self.nodes.pop()?;
        Some((edge, node))
    }

    /// The part of this path beginning at the first occurrence of `node`.
    pub fn sub_path_from(&self, node: NodeId) -> Option<Path> {
        let position = self.nodes.iter().position(|&u| u == node)?;
        Some(Path { nodes: self.nodes[position..].to_vec(), edges: self.edges[position..].to_vec() })
    }

    /// Minimum of `f` over the edges, `None` for an empty path.
    pub fn bottleneck<Flow, F>(&self, graph: &Graph<Flow>, f: F) -> Option<Flow>
    where
        Flow: NumAssign + Ord + Copy,
        F: Fn(&Edge<Flow>) -> Flow,
    {
        self.edges.iter().map(|&e| f(&graph[e])).min()
    }
}
