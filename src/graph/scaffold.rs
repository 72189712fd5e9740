use crate::error::FlowError;
use crate::graph::{EdgeAttributes, EdgeId, EdgeKind, EdgeOrigin, Graph, NodeId, NodeOrigin};
use num_traits::NumAssign;
use std::ops::{Deref, DerefMut};

/// Exclusive handle on a graph that records every node and edge added through it.
/// Dropping the handle removes them again, whichever way the solver leaves.
pub struct Scaffold<'g, Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    graph: &'g mut Graph<Flow>,
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
}

impl<'g, Flow> Scaffold<'g, Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(graph: &'g mut Graph<Flow>) -> Self {
        Self { graph, nodes: Vec::new(), edges: Vec::new() }
    }

    pub fn add_node(&mut self, name: &str) -> Result<NodeId, FlowError> {
        let node = self.graph.insert_node(name, NodeOrigin::Synthetic)?;
        self.nodes.push(node);
        Ok(node)
    }

    pub fn add_edge(&mut self, source: NodeId, destination: NodeId, origin: EdgeOrigin, attributes: EdgeAttributes<Flow>) -> Result<EdgeId, FlowError> {
        let edge = self.graph.insert_edge(EdgeKind::Directed { source, destination }, origin, attributes)?;
        self.edges.push(edge);
        Ok(edge)
    }

    pub fn is_scaffolding(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }
}

impl<Flow> Deref for Scaffold<'_, Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    type Target = Graph<Flow>;

    fn deref(&self) -> &Self::Target {
        self.graph
    }
}

impl<Flow> DerefMut for Scaffold<'_, Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.graph
    }
}

impl<Flow> Drop for Scaffold<'_, Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    fn drop(&mut self) {
        for &edge in self.edges.iter() {
            self.graph.remove_edge(edge);
        }
        for &node in self.nodes.iter() {
            // already gone if the solver removed it itself
            if self.graph.node(node).is_some() {
                let _ = self.graph.remove_node(node);
            }
        }
    }
}
