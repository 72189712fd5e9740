use crate::graph::{EdgeId, NodeId};
use num_traits::Zero;
use std::collections::{BTreeMap, HashMap};

#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeOrigin {
    #[default]
    Original,
    Synthetic,
}

/// neighbor -> edge view of one direction.
/// `by_edge` holds every incident edge in insertion order, `by_neighbor` the most
/// recent edge per neighbor for lookup.
#[derive(Default, Debug, Clone)]
pub(crate) struct Adjacency {
    by_neighbor: HashMap<NodeId, EdgeId>,
    by_edge: BTreeMap<EdgeId, NodeId>,
}

impl Adjacency {
    pub(crate) fn insert(&mut self, neighbor: NodeId, edge: EdgeId) {
        self.by_neighbor.insert(neighbor, edge);
        self.by_edge.insert(edge, neighbor);
    }

    pub(crate) fn remove(&mut self, neighbor: NodeId, edge: EdgeId) {
        if self.by_edge.remove(&edge).is_none() {
            return;
        }
        if self.by_neighbor.get(&neighbor) == Some(&edge) {
            // fall back to the newest remaining parallel edge
            match self.by_edge.iter().rev().find(|&(_, &n)| n == neighbor) {
                Some((&previous, _)) => self.by_neighbor.insert(neighbor, previous),
                None => self.by_neighbor.remove(&neighbor),
            };
        }
    }

    #[inline]
    pub(crate) fn get(&self, neighbor: NodeId) -> Option<EdgeId> {
        self.by_neighbor.get(&neighbor).copied()
    }

    #[inline]
    pub(crate) fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.by_edge.keys().copied()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.by_edge.len()
    }
}

#[derive(Debug, Clone)]
pub struct Node<Flow> {
    name: String,
    origin: NodeOrigin,
    /// negative = supply, positive = demand
    pub demand: Flow,
    pub(crate) outgoing: Adjacency,
    pub(crate) incoming: Adjacency,
}

impl<Flow> Node<Flow>
where
    Flow: Zero + Copy,
{
    pub(crate) fn new(name: String, origin: NodeOrigin) -> Self {
        Self { name, origin, demand: Flow::zero(), outgoing: Adjacency::default(), incoming: Adjacency::default() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn origin(&self) -> NodeOrigin {
        self.origin
    }

    /// Edges leaving this node, in insertion order.
    /// Undirected edges appear here and in `incoming_edges`.
    pub fn outgoing_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing.edges()
    }

    pub fn incoming_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.incoming.edges()
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    #[inline]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Most recent edge to `node`, parallel edges are reachable through `outgoing_edges`.
    #[inline]
    pub fn edge_to(&self, node: NodeId) -> Option<EdgeId> {
        self.outgoing.get(node)
    }

    #[inline]
    pub fn edge_from(&self, node: NodeId) -> Option<EdgeId> {
        self.incoming.get(node)
    }

    pub fn has_edge_to(&self, node: NodeId) -> bool {
        self.edge_to(node).is_some()
    }

    pub fn has_edge_from(&self, node: NodeId) -> bool {
        self.edge_from(node).is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.demand = Flow::zero();
    }
}
