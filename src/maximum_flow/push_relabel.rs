use crate::error::FlowError;
use crate::graph::{EdgeId, Graph, NodeId, NodeRef, Scaffold};
use crate::maximum_flow::{cancel_opposing_loads, pair_reverse_edges, require_directed, MaximumFlowSolver};
use crate::status::Status;
use log::{debug, trace};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::ops::Neg;

/// Which active node is discharged next. Both orders are correct, they differ in
/// the number of pushes and relabels.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ActiveNodeSelection {
    /// queue of active nodes
    #[default]
    Fifo,
    /// first active node in graph insertion order
    NodeOrder,
}

/// Generic push-relabel (preflow) algorithm.
///
/// Loads are kept skew symmetric: every edge gets its own reverse edge as scaffolding
/// and a push of `d` over `u -> v` adds `d` to its load and subtracts
/// `d` from the load of `v -> u`. The residual capacity of an edge is `capacity - load`.
pub struct PushRelabel<Flow> {
    selection: ActiveNodeSelection,
    distances: Vec<usize>,
    excesses: Vec<Flow>,
    reverse: Vec<Option<EdgeId>>,
    active_nodes: VecDeque<NodeId>,
    queued: Vec<bool>,
    pushes: usize,
    relabels: usize,
}

impl<Flow> Default for PushRelabel<Flow> {
    fn default() -> Self {
        Self::new(ActiveNodeSelection::default())
    }
}

impl<Flow> PushRelabel<Flow> {
    pub fn new(selection: ActiveNodeSelection) -> Self {
        Self { selection, distances: Vec::new(), excesses: Vec::new(), reverse: Vec::new(), active_nodes: VecDeque::new(), queued: Vec::new(), pushes: 0, relabels: 0 }
    }

    #[inline]
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    #[inline]
    pub fn relabels(&self) -> usize {
        self.relabels
    }
}

impl<Flow> PushRelabel<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    pub fn solve<'a, 'b>(&mut self, graph: &mut Graph<Flow>, source: impl Into<NodeRef<'a>>, sink: impl Into<NodeRef<'b>>) -> Result<Status, FlowError> {
        let (source, sink) = (graph.lookup(source)?, graph.lookup(sink)?);
        if source == sink {
            return Ok(Status::BadInput);
        }
        require_directed(graph)?;

        let originals = graph.edge_ids();
        let mut scaffold = Scaffold::new(graph);
        self.pre_process(&mut scaffold, &originals, source, sink)?;

        while let Some(u) = self.next_active_node(&scaffold, source, sink) {
            if !self.push(&mut scaffold, u)? {
                self.relabel(&scaffold, u)?;
            }
            if self.selection == ActiveNodeSelection::Fifo && self.excesses[u.index()] > Flow::zero() {
                self.activate(u);
            }
        }

        // an antiparallel pair carries the net flow on one edge only
        cancel_opposing_loads(&mut scaffold, &originals);
        debug!("maximum flow {:?} after {} pushes and {} relabels", scaffold.maximum_flow(source), self.pushes, self.relabels);

        Ok(Status::Optimal)
    }

    fn pre_process(&mut self, graph: &mut Scaffold<'_, Flow>, originals: &[EdgeId], source: NodeId, sink: NodeId) -> Result<(), FlowError> {
        let bound = graph.node_bound();
        self.distances = vec![0; bound];
        self.excesses = vec![Flow::zero(); bound];
        self.queued = vec![false; bound];
        self.active_nodes.clear();
        self.pushes = 0;
        self.relabels = 0;

        for &edge in originals.iter() {
            graph[edge].load = Flow::zero();
        }
        self.reverse = pair_reverse_edges(graph, originals.iter().copied())?;

        // every node is at most n - 1 steps away from the sink
        self.distances[source.index()] = graph.num_nodes();

        for edge in graph.outgoing_edges(source) {
            let capacity = graph[edge].capacity;
            let (_, v) = graph[edge].endpoints();
            let reverse = self.reverse_of(edge)?;
            graph[edge].load = capacity;
            graph[reverse].load = -capacity;
            self.excesses[v.index()] += capacity;
            self.excesses[source.index()] -= capacity;
        }

        for u in graph.node_ids() {
            if u != source && u != sink && self.excesses[u.index()] > Flow::zero() {
                self.activate(u);
            }
        }
        Ok(())
    }

    fn next_active_node(&mut self, graph: &Graph<Flow>, source: NodeId, sink: NodeId) -> Option<NodeId> {
        match self.selection {
            ActiveNodeSelection::Fifo => {
                while let Some(u) = self.active_nodes.pop_front() {
                    self.queued[u.index()] = false;
                    if u != source && u != sink && self.excesses[u.index()] > Flow::zero() {
                        return Some(u);
                    }
                }
                None
            }
            ActiveNodeSelection::NodeOrder => graph.nodes().map(|(u, _)| u).find(|&u| u != source && u != sink && self.excesses[u.index()] > Flow::zero()),
        }
    }

    fn activate(&mut self, u: NodeId) {
        if self.selection == ActiveNodeSelection::Fifo && !self.queued[u.index()] {
            self.queued[u.index()] = true;
            self.active_nodes.push_back(u);
        }
    }

    /// Pushes excess of `u` over admissible edges. `false` if there was none.
    fn push(&mut self, graph: &mut Graph<Flow>, u: NodeId) -> Result<bool, FlowError> {
        let mut success = false;
        for edge in graph.outgoing_edges(u) {
            let (_, v) = graph[edge].endpoints();
            if self.distances[u.index()] != self.distances[v.index()] + 1 || graph[edge].load >= graph[edge].capacity {
                continue;
            }
            success = true;

            let reverse = self.reverse_of(edge)?;
            let delta = graph[edge].residual_capacity().min(self.excesses[u.index()]);
            graph[edge].load += delta;
            graph[reverse].load -= delta;
            self.excesses[v.index()] += delta;
            self.excesses[u.index()] -= delta;
            self.pushes += 1;
            trace!("pushing {:?} from {} to {}", delta, graph[u].name(), graph[v].name());

            self.activate(v);
            if self.excesses[u.index()] == Flow::zero() {
                break;
            }
        }
        Ok(success)
    }

    fn reverse_of(&self, edge: EdgeId) -> Result<EdgeId, FlowError> {
        self.reverse
            .get(edge.index())
            .copied()
            .flatten()
            .ok_or_else(|| FlowError::InternalConsistency(format!("edge {edge} has no reverse edge")))
    }

    fn relabel(&mut self, graph: &Graph<Flow>, u: NodeId) -> Result<(), FlowError> {
        let lowest = graph[u]
            .outgoing_edges()
            .filter(|&edge| graph[edge].load < graph[edge].capacity)
            .filter_map(|edge| graph[edge].destination())
            .map(|v| self.distances[v.index()])
            .min()
            .ok_or_else(|| FlowError::InternalConsistency(format!("active node {} has no residual edge", graph[u].name())))?;

        self.distances[u.index()] = lowest + 1;
        self.relabels += 1;
        debug_assert!(self.distances[u.index()] < 2 * graph.num_nodes());
        trace!("relabeling {} to dist {}", graph[u].name(), self.distances[u.index()]);
        Ok(())
    }
}

impl<Flow> MaximumFlowSolver<Flow> for PushRelabel<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    fn run(&mut self, graph: &mut Graph<Flow>, source: NodeId, sink: NodeId) -> Result<Status, FlowError> {
        self.solve(graph, source, sink)
    }
}
