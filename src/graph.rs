mod edge;
mod node;
mod path;
mod scaffold;

pub use edge::{Edge, EdgeAttributes, EdgeKind, EdgeOrigin};
pub use node::{Node, NodeOrigin};
pub use path::Path;
pub use scaffold::Scaffold;

use crate::error::FlowError;
use num_traits::NumAssign;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct NodeId(usize);

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct EdgeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A node given either by name or by handle.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Name(&'a str),
    Id(NodeId),
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(name: &'a str) -> Self {
        NodeRef::Name(name)
    }
}

impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(name: &'a String) -> Self {
        NodeRef::Name(name.as_str())
    }
}

impl From<NodeId> for NodeRef<'_> {
    fn from(id: NodeId) -> Self {
        NodeRef::Id(id)
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Name(name) => f.write_str(name),
            NodeRef::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Arena of named nodes and edges.
///
/// Handles stay valid until the node or edge is removed and are never reused,
/// so solvers can keep side tables indexed by [`NodeId::index`] / [`EdgeId::index`]
/// sized with [`Graph::node_bound`] / [`Graph::edge_bound`].
/// Nodes and edges iterate in insertion order.
#[derive(Debug, Clone)]
pub struct Graph<Flow> {
    nodes: Vec<Option<Node<Flow>>>,
    edges: Vec<Option<Edge<Flow>>>,
    names: HashMap<String, NodeId>,
    num_nodes: usize,
    num_edges: usize,
}

impl<Flow> Default for Graph<Flow> {
    fn default() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new(), names: HashMap::new(), num_nodes: 0, num_edges: 0 }
    }
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// upper bound (exclusive) of every live `NodeId::index`
    #[inline]
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    /// upper bound (exclusive) of every live `EdgeId::index`
    #[inline]
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    pub fn lookup<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, FlowError> {
        match node.into() {
            NodeRef::Name(name) => self.names.get(name).copied().ok_or_else(|| FlowError::UnknownNode(name.to_string())),
            NodeRef::Id(id) => match self.nodes.get(id.0) {
                Some(Some(_)) => Ok(id),
                _ => Err(FlowError::UnknownNode(id.to_string())),
            },
        }
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn node<'a>(&self, node: impl Into<NodeRef<'a>>) -> Option<&Node<Flow>> {
        let id = self.lookup(node).ok()?;
        self.nodes[id.0].as_ref()
    }

    pub fn node_mut<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Option<&mut Node<Flow>> {
        let id = self.lookup(node).ok()?;
        self.nodes[id.0].as_mut()
    }

    pub fn has_node<'a>(&self, node: impl Into<NodeRef<'a>>) -> bool {
        self.lookup(node).is_ok()
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge<Flow>> {
        self.edges.get(edge.0).and_then(|e| e.as_ref())
    }

    pub fn edge_mut(&mut self, edge: EdgeId) -> Option<&mut Edge<Flow>> {
        self.edges.get_mut(edge.0).and_then(|e| e.as_mut())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<Flow>)> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, node)| node.as_ref().map(|node| (NodeId(i), node)))
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes().map(|(id, _)| id).collect()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<Flow>)> + '_ {
        self.edges.iter().enumerate().filter_map(|(i, edge)| edge.as_ref().map(|edge| (EdgeId(i), edge)))
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges().map(|(id, _)| id).collect()
    }

    pub fn outgoing_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.nodes.get(node.0).and_then(|n| n.as_ref()).map(|n| n.outgoing_edges().collect()).unwrap_or_default()
    }

    pub fn incoming_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.nodes.get(node.0).and_then(|n| n.as_ref()).map(|n| n.incoming_edges().collect()).unwrap_or_default()
    }

    pub fn add_node(&mut self, name: &str) -> Result<NodeId, FlowError> {
        self.insert_node(name, NodeOrigin::Original)
    }

    pub fn add_node_with_demand(&mut self, name: &str, demand: Flow) -> Result<NodeId, FlowError> {
        let id = self.insert_node(name, NodeOrigin::Original)?;
        self[id].demand = demand;
        Ok(id)
    }

    pub fn add_nodes(&mut self, names: &[&str]) -> Result<Vec<NodeId>, FlowError> {
        names.iter().map(|name| self.add_node(name)).collect()
    }

    pub(crate) fn insert_node(&mut self, name: &str, origin: NodeOrigin) -> Result<NodeId, FlowError> {
        if self.names.contains_key(name) {
            return Err(FlowError::DuplicateNode(name.to_string()));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(name.to_string(), origin)));
        self.names.insert(name.to_string(), id);
        self.num_nodes += 1;
        Ok(id)
    }

    /// Removes the node together with every edge touching it.
    pub fn remove_node<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Result<Node<Flow>, FlowError> {
        let id = self.lookup(node)?;
        let mut incident: Vec<EdgeId> = self[id].outgoing_edges().chain(self[id].incoming_edges()).collect();
        incident.sort_unstable();
        incident.dedup();
        for edge in incident {
            self.remove_edge(edge);
        }

        let removed = self.nodes[id.0].take().ok_or_else(|| FlowError::UnknownNode(id.to_string()))?;
        self.names.remove(removed.name());
        self.num_nodes -= 1;
        Ok(removed)
    }

    pub fn remove_nodes<'a, I, N>(&mut self, nodes: I) -> Result<(), FlowError>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeRef<'a>>,
    {
        for node in nodes {
            self.remove_node(node)?;
        }
        Ok(())
    }

    /// Adds a directed edge, returns its handle.
    pub fn add_edge<'a, 'b>(&mut self, source: impl Into<NodeRef<'a>>, destination: impl Into<NodeRef<'b>>, attributes: EdgeAttributes<Flow>) -> Result<EdgeId, FlowError> {
        let (source, destination) = (self.lookup(source)?, self.lookup(destination)?);
        self.insert_edge(EdgeKind::Directed { source, destination }, EdgeOrigin::Original, attributes)
    }

    pub fn add_undirected_edge<'a, 'b>(&mut self, a: impl Into<NodeRef<'a>>, b: impl Into<NodeRef<'b>>, attributes: EdgeAttributes<Flow>) -> Result<EdgeId, FlowError> {
        let (a, b) = (self.lookup(a)?, self.lookup(b)?);
        self.insert_edge(EdgeKind::Undirected(a, b), EdgeOrigin::Original, attributes)
    }

    pub(crate) fn insert_edge(&mut self, kind: EdgeKind, origin: EdgeOrigin, attributes: EdgeAttributes<Flow>) -> Result<EdgeId, FlowError> {
        let id = EdgeId(self.edges.len());
        match kind {
            EdgeKind::Directed { source, destination } => {
                self.lookup(source)?;
                self.lookup(destination)?;
                self[source].outgoing.insert(destination, id);
                self[destination].incoming.insert(source, id);
            }
            EdgeKind::Undirected(a, b) => {
                self.lookup(a)?;
                self.lookup(b)?;
                for (u, v) in [(a, b), (b, a)] {
                    self[u].outgoing.insert(v, id);
                    self[u].incoming.insert(v, id);
                }
            }
        }
        self.edges.push(Some(Edge::new(kind, origin, attributes)));
        self.num_edges += 1;
        Ok(id)
    }

    /// Removes the edge and returns it; `None` if it is not (or no longer) part of the graph.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Option<Edge<Flow>> {
        let removed = self.edges.get_mut(edge.0)?.take()?;
        match removed.kind() {
            EdgeKind::Directed { source, destination } => {
                if let Some(node) = self.nodes[source.0].as_mut() {
                    node.outgoing.remove(destination, edge);
                }
                if let Some(node) = self.nodes[destination.0].as_mut() {
                    node.incoming.remove(source, edge);
                }
            }
            EdgeKind::Undirected(a, b) => {
                for (u, v) in [(a, b), (b, a)] {
                    if let Some(node) = self.nodes[u.0].as_mut() {
                        node.outgoing.remove(v, edge);
                        node.incoming.remove(v, edge);
                    }
                }
            }
        }
        self.num_edges -= 1;
        Some(removed)
    }

    /// The edge leading from `from` to `to`, if any.
    pub fn edge_between<'a, 'b>(&self, from: impl Into<NodeRef<'a>>, to: impl Into<NodeRef<'b>>) -> Result<Option<EdgeId>, FlowError> {
        let (from, to) = (self.lookup(from)?, self.lookup(to)?);
        Ok(self[from].edge_to(to))
    }

    pub fn has_edge<'a, 'b>(&self, from: impl Into<NodeRef<'a>>, to: impl Into<NodeRef<'b>>) -> Result<bool, FlowError> {
        Ok(self.edge_between(from, to)?.is_some())
    }

    /// The directed edge destination -> source of the given directed edge.
    pub fn reverse_edge(&self, edge: EdgeId) -> Option<EdgeId> {
        let (source, destination) = {
            let e = self.edge(edge)?;
            (e.source()?, e.destination()?)
        };
        let reverse = self.nodes[destination.0].as_ref()?.edge_to(source)?;
        self.edge(reverse)?.is_directed().then_some(reverse)
    }

    pub fn has_reverse_edge(&self, edge: EdgeId) -> bool {
        self.reverse_edge(edge).is_some()
    }

    pub fn is_directed(&self) -> bool {
        self.edges().all(|(_, e)| e.is_directed())
    }

    pub fn is_undirected(&self) -> bool {
        self.edges().all(|(_, e)| !e.is_directed())
    }

    /// Drops every node and edge.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Zeroes every attribute of every node and edge, keeping the topology.
    pub fn reset(&mut self) {
        self.edges.iter_mut().flatten().for_each(|e| e.clear());
        self.nodes.iter_mut().flatten().for_each(|n| n.clear());
    }

    /// Net load leaving `source`.
    pub fn maximum_flow(&self, source: NodeId) -> Flow {
        self.edges().fold(Flow::zero(), |mut flow, (_, edge)| {
            if edge.source() == Some(source) {
                flow += edge.load;
            } else if edge.destination() == Some(source) {
                flow -= edge.load;
            }
            flow
        })
    }

    pub fn total_load(&self) -> Flow {
        self.edges().fold(Flow::zero(), |load, (_, edge)| load + edge.load)
    }

    pub fn total_cost(&self) -> Flow {
        self.edges().fold(Flow::zero(), |cost, (_, edge)| cost + edge.load * edge.cost)
    }

    /// Every node satisfies `demand == incoming load - outgoing load`.
    pub fn is_valid_flow(&self) -> bool {
        self.nodes().all(|(_, node)| {
            let mut balance = node.demand;
            for edge in node.outgoing_edges() {
                balance += self[edge].load;
            }
            for edge in node.incoming_edges() {
                balance -= self[edge].load;
            }
            balance == Flow::zero()
        })
    }
}

impl<Flow> Index<NodeId> for Graph<Flow> {
    type Output = Node<Flow>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("node {id} is not in the graph"),
        }
    }
}

impl<Flow> IndexMut<NodeId> for Graph<Flow> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("node {id} is not in the graph"),
        }
    }
}

impl<Flow> Index<EdgeId> for Graph<Flow> {
    type Output = Edge<Flow>;

    fn index(&self, id: EdgeId) -> &Self::Output {
        match self.edges.get(id.0) {
            Some(Some(edge)) => edge,
            _ => panic!("edge {id} is not in the graph"),
        }
    }
}

impl<Flow> IndexMut<EdgeId> for Graph<Flow> {
    fn index_mut(&mut self, id: EdgeId) -> &mut Self::Output {
        match self.edges.get_mut(id.0) {
            Some(Some(edge)) => edge,
            _ => panic!("edge {id} is not in the graph"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn triangle() -> Graph<i64> {
        let mut graph = Graph::new();
        graph.add_nodes(&["a", "b", "c"]).unwrap();
        graph.add_edge("a", "b", EdgeAttributes::with_capacity(3).cost(2)).unwrap();
        graph.add_edge("b", "c", EdgeAttributes::with_capacity(4).load(1)).unwrap();
        graph.add_edge("c", "a", EdgeAttributes::with_capacity(5)).unwrap();
        graph
    }

    #[rstest]
    fn add_node_rejects_duplicate_name(mut triangle: Graph<i64>) {
        assert_eq!(triangle.add_node("a"), Err(FlowError::DuplicateNode("a".to_string())));
        assert_eq!(triangle.num_nodes(), 3);
    }

    #[rstest]
    fn add_edge_requires_both_endpoints(mut triangle: Graph<i64>) {
        assert_eq!(triangle.add_edge("a", "x", EdgeAttributes::default()), Err(FlowError::UnknownNode("x".to_string())));
        assert_eq!(triangle.add_undirected_edge("y", "a", EdgeAttributes::default()), Err(FlowError::UnknownNode("y".to_string())));
        assert_eq!(triangle.num_edges(), 3);
    }

    #[rstest]
    fn lookup_resolves_names_and_ids(triangle: Graph<i64>) {
        let b = triangle.lookup("b").unwrap();
        assert_eq!(triangle.lookup(b), Ok(b));
        assert_eq!(triangle[b].name(), "b");
        assert!(triangle.lookup("z").is_err());
    }

    #[rstest]
    fn edge_and_reverse_lookup(mut triangle: Graph<i64>) {
        let ab = triangle.edge_between("a", "b").unwrap().unwrap();
        assert_eq!(triangle.edge_between("b", "a").unwrap(), None);
        assert!(!triangle.has_reverse_edge(ab));

        let ba = triangle.add_edge("b", "a", EdgeAttributes::default()).unwrap();
        assert_eq!(triangle.reverse_edge(ab), Some(ba));
        assert_eq!(triangle.reverse_edge(ba), Some(ab));
        assert!(triangle.edge_between("a", "q").is_err());
    }

    #[rstest]
    fn remove_edge_updates_views_and_ignores_absent(mut triangle: Graph<i64>) {
        let ab = triangle.edge_between("a", "b").unwrap().unwrap();
        assert!(triangle.remove_edge(ab).is_some());
        assert!(triangle.remove_edge(ab).is_none());
        assert_eq!(triangle.num_edges(), 2);
        assert!(!triangle.has_edge("a", "b").unwrap());
        let a = triangle.lookup("a").unwrap();
        assert_eq!(triangle[a].out_degree(), 0);
        assert_eq!(triangle[a].in_degree(), 1);
    }

    #[rstest]
    fn remove_node_drops_incident_edges(mut triangle: Graph<i64>) {
        let removed = triangle.remove_node("b").unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(triangle.num_nodes(), 2);
        assert_eq!(triangle.num_edges(), 1);
        assert!(!triangle.has_node("b"));
        assert_eq!(triangle.remove_node("b").unwrap_err(), FlowError::UnknownNode("b".to_string()));
        // the name can be taken again
        assert!(triangle.add_node("b").is_ok());
    }

    #[rstest]
    fn remove_node_drops_every_parallel_edge() {
        let mut graph: Graph<i64> = Graph::new();
        graph.add_nodes(&["a", "b", "c"]).unwrap();
        graph.add_edge("a", "b", EdgeAttributes::with_capacity(1)).unwrap();
        graph.add_edge("a", "b", EdgeAttributes::with_capacity(2)).unwrap();
        graph.add_undirected_edge("b", "c", EdgeAttributes::with_weight(1)).unwrap();
        graph.add_undirected_edge("c", "b", EdgeAttributes::with_weight(2)).unwrap();
        graph.add_edge("a", "c", EdgeAttributes::with_capacity(3)).unwrap();

        graph.remove_node("b").unwrap();
        assert_eq!(graph.num_edges(), 1);
        let (a, c) = (graph.lookup("a").unwrap(), graph.lookup("c").unwrap());
        assert_eq!(graph[a].out_degree(), 1);
        assert_eq!(graph[c].in_degree(), 1);
        assert_eq!(graph[c].out_degree(), 0);
    }

    #[rstest]
    fn removing_newer_parallel_edge_uncovers_older(mut triangle: Graph<i64>) {
        let first = triangle.edge_between("a", "b").unwrap().unwrap();
        let second = triangle.add_edge("a", "b", EdgeAttributes::with_capacity(7)).unwrap();
        let a = triangle.lookup("a").unwrap();
        assert_eq!(triangle.outgoing_edges(a), vec![first, second]);
        assert_eq!(triangle.edge_between("a", "b").unwrap(), Some(second));

        triangle.remove_edge(second);
        assert_eq!(triangle.edge_between("a", "b").unwrap(), Some(first));
        assert_eq!(triangle.outgoing_edges(a), vec![first]);

        triangle.remove_edge(first);
        assert!(!triangle.has_edge("a", "b").unwrap());
    }

    #[rstest]
    fn outgoing_edges_follow_insertion_order(mut triangle: Graph<i64>) {
        triangle.add_node("d").unwrap();
        let ad = triangle.add_edge("a", "d", EdgeAttributes::default()).unwrap();
        let ac = triangle.add_edge("a", "c", EdgeAttributes::default()).unwrap();
        let ab = triangle.edge_between("a", "b").unwrap().unwrap();
        let a = triangle.lookup("a").unwrap();
        assert_eq!(triangle.outgoing_edges(a), vec![ab, ad, ac]);
    }

    #[rstest]
    fn undirected_edge_is_visible_from_both_ends() {
        let mut graph: Graph<i64> = Graph::new();
        let (a, b) = (graph.add_node("a").unwrap(), graph.add_node("b").unwrap());
        let e = graph.add_undirected_edge(a, b, EdgeAttributes::with_weight(7)).unwrap();
        assert_eq!(graph.edge_between(a, b).unwrap(), Some(e));
        assert_eq!(graph.edge_between(b, a).unwrap(), Some(e));
        assert_eq!(graph[b].edge_from(a), Some(e));
        assert_eq!(graph[e].source(), None);
        assert_eq!(graph[e].destination(), None);
        assert_eq!(graph[e].opposite(b), Some(a));
        assert_eq!(graph.reverse_edge(e), None);
        assert!(graph.is_undirected());
        assert!(!graph.is_directed());

        graph.remove_edge(e);
        assert_eq!(graph[a].out_degree(), 0);
        assert_eq!(graph[b].in_degree(), 0);
    }

    #[rstest]
    fn mixed_graph_is_neither(mut triangle: Graph<i64>) {
        assert!(triangle.is_directed());
        triangle.add_undirected_edge("a", "c", EdgeAttributes::default()).unwrap();
        assert!(!triangle.is_directed());
        assert!(!triangle.is_undirected());
    }

    #[rstest]
    fn reset_is_idempotent(mut triangle: Graph<i64>) {
        triangle.node_mut("a").unwrap().demand = -3;
        triangle.reset();
        let once = format!("{triangle:?}");
        triangle.reset();
        assert_eq!(format!("{triangle:?}"), once);

        assert!(triangle.edges().all(|(_, e)| e.capacity == 0 && e.load == 0 && e.cost == 0 && e.weight == 0));
        assert!(triangle.nodes().all(|(_, n)| n.demand == 0));
        assert_eq!(triangle.num_edges(), 3);
    }

    #[rstest]
    fn flow_helpers(mut triangle: Graph<i64>) {
        let a = triangle.lookup("a").unwrap();
        let ab = triangle.edge_between("a", "b").unwrap().unwrap();
        triangle[ab].load = 2;
        assert_eq!(triangle.total_load(), 3);
        assert_eq!(triangle.total_cost(), 4);
        assert_eq!(triangle.maximum_flow(a), 2);
        assert!(!triangle.is_valid_flow());
    }

    #[rstest]
    fn clear_drops_everything(mut triangle: Graph<i64>) {
        triangle.clear();
        assert_eq!(triangle.num_nodes(), 0);
        assert_eq!(triangle.num_edges(), 0);
        assert!(triangle.add_node("a").is_ok());
    }

    #[rstest]
    fn scaffold_removes_what_it_added(mut triangle: Graph<i64>) {
        {
            let mut scaffold = Scaffold::new(&mut triangle);
            let s = scaffold.add_node("s").unwrap();
            let a = scaffold.lookup("a").unwrap();
            let b = scaffold.lookup("b").unwrap();
            scaffold.add_edge(s, a, EdgeOrigin::SyntheticSourceSink, EdgeAttributes::with_capacity(1)).unwrap();
            let ba = scaffold.add_edge(b, a, EdgeOrigin::SyntheticReverse, EdgeAttributes::default()).unwrap();
            assert!(scaffold.is_scaffolding(ba));
            assert_eq!(scaffold.num_nodes(), 4);
            assert_eq!(scaffold.num_edges(), 5);
        }
        assert_eq!(triangle.num_nodes(), 3);
        assert_eq!(triangle.num_edges(), 3);
        assert!(triangle.edges().all(|(_, e)| e.origin() == EdgeOrigin::Original));
    }

    #[rstest]
    fn path_enforces_connection(triangle: Graph<i64>) {
        let (a, b, c) = (triangle.lookup("a").unwrap(), triangle.lookup("b").unwrap(), triangle.lookup("c").unwrap());
        let ab = triangle.edge_between(a, b).unwrap().unwrap();
        let bc = triangle.edge_between(b, c).unwrap().unwrap();
        let ca = triangle.edge_between(c, a).unwrap().unwrap();

        let mut path = Path::new(a);
        assert!(path.append(&triangle, bc).is_err());
        path.append(&triangle, ab).unwrap();
        path.append(&triangle, bc).unwrap();
        assert_eq!(path.nodes(), &[a, b, c]);
        assert_eq!(path.bottleneck(&triangle, |e| e.residual_capacity()), Some(3));

        let tail = path.sub_path_from(b).unwrap();
        assert_eq!(tail.start(), b);
        assert_eq!(tail.edges(), &[bc]);

        path.append(&triangle, ca).unwrap();
        assert!(path.is_cycle());
        assert_eq!(path.pop(), Some((ca, a)));
        assert_eq!(path.end(), c);
        path.pop();
        path.pop();
        assert_eq!(path.pop(), None);
        assert_eq!(path.nodes(), &[a]);
    }
}
