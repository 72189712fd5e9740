use crate::graph::NodeId;
use num_traits::{NumAssign, Zero};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum EdgeKind {
    Directed { source: NodeId, destination: NodeId },
    Undirected(NodeId, NodeId),
}

/// Who put the edge into the graph. Solvers only ever remove what they tagged.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum EdgeOrigin {
    #[default]
    Original,
    SyntheticReverse,
    SyntheticSourceSink,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct EdgeAttributes<Flow> {
    pub capacity: Flow,
    pub load: Flow,
    pub cost: Flow,
    pub weight: Flow,
}

impl<Flow> Default for EdgeAttributes<Flow>
where
    Flow: Zero,
{
    fn default() -> Self {
        Self { capacity: Flow::zero(), load: Flow::zero(), cost: Flow::zero(), weight: Flow::zero() }
    }
}

impl<Flow> EdgeAttributes<Flow>
where
    Flow: Zero,
{
    pub fn with_capacity(capacity: Flow) -> Self {
        Self { capacity, ..Self::default() }
    }

    pub fn with_weight(weight: Flow) -> Self {
        Self { weight, ..Self::default() }
    }

    pub fn capacity(mut self, capacity: Flow) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn load(mut self, load: Flow) -> Self {
        self.load = load;
        self
    }

    pub fn cost(mut self, cost: Flow) -> Self {
        self.cost = cost;
        self
    }

    pub fn weight(mut self, weight: Flow) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Edge<Flow> {
    kind: EdgeKind,
    origin: EdgeOrigin,
    pub capacity: Flow,
    pub load: Flow,
    pub cost: Flow,
    pub weight: Flow,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub(crate) fn new(kind: EdgeKind, origin: EdgeOrigin, attributes: EdgeAttributes<Flow>) -> Self {
        let EdgeAttributes { capacity, load, cost, weight } = attributes;
        Self { kind, origin, capacity, load, cost, weight }
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    #[inline]
    pub fn origin(&self) -> EdgeOrigin {
        self.origin
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        matches!(self.kind, EdgeKind::Directed { .. })
    }

    /// `None` for undirected edges.
    #[inline]
    pub fn source(&self) -> Option<NodeId> {
        match self.kind {
            EdgeKind::Directed { source, .. } => Some(source),
            EdgeKind::Undirected(..) => None,
        }
    }

    /// `None` for undirected edges.
    #[inline]
    pub fn destination(&self) -> Option<NodeId> {
        match self.kind {
            EdgeKind::Directed { destination, .. } => Some(destination),
            EdgeKind::Undirected(..) => None,
        }
    }

    /// (source, destination) for directed edges, the two ends in insertion order otherwise.
    #[inline]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        match self.kind {
            EdgeKind::Directed { source, destination } => (source, destination),
            EdgeKind::Undirected(a, b) => (a, b),
        }
    }

    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        let (a, b) = self.endpoints();
        if a == node {
            Some(b)
        } else if b == node {
            Some(a)
        } else {
            None
        }
    }

    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.load
    }

    pub(crate) fn clear(&mut self) {
        self.capacity = Flow::zero();
        self.load = Flow::zero();
        self.cost = Flow::zero();
        self.weight = Flow::zero();
    }
}
