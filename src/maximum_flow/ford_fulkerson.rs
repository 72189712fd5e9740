use crate::error::FlowError;
use crate::graph::{EdgeId, Graph, NodeId, NodeRef, Scaffold};
use crate::maximum_flow::{cancel_opposing_loads, pair_reverse_edges, require_directed, MaximumFlowSolver};
use crate::path_search::depth_first_search;
use crate::status::Status;
use log::debug;
use num_traits::NumAssign;
use std::fmt::Debug;

/// Augments along depth first search paths until the sink is cut off.
///
/// While running, `capacity` holds the residual capacity of every edge. Each edge gets
/// its own reverse edge as scaffolding, so parallel and antiparallel edges keep their
/// loads apart.
pub struct FordFulkerson<Flow> {
    nominal: Vec<(EdgeId, Flow)>,
    reverse: Vec<Option<EdgeId>>,
    augmentations: usize,
}

impl<Flow> Default for FordFulkerson<Flow> {
    fn default() -> Self {
        Self { nominal: Vec::new(), reverse: Vec::new(), augmentations: 0 }
    }
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug,
{
    pub fn solve<'a, 'b>(&mut self, graph: &mut Graph<Flow>, source: impl Into<NodeRef<'a>>, sink: impl Into<NodeRef<'b>>) -> Result<Status, FlowError> {
        let (source, sink) = (graph.lookup(source)?, graph.lookup(sink)?);
        if source == sink {
            return Ok(Status::BadInput);
        }
        require_directed(graph)?;

        self.nominal = graph.edges().map(|(id, edge)| (id, edge.capacity)).collect();
        self.augmentations = 0;

        let mut scaffold = Scaffold::new(graph);
        self.reverse = pair_reverse_edges(&mut scaffold, self.nominal.iter().map(|&(edge, _)| edge))?;
        for &(edge, _) in self.nominal.iter() {
            scaffold[edge].load = Flow::zero();
        }

        while let Some(path) = depth_first_search(&*scaffold, source, sink)? {
            let bottleneck = path
                .bottleneck(&*scaffold, |e| e.residual_capacity())
                .ok_or_else(|| FlowError::InternalConsistency("augmenting path without edges".to_string()))?;
            debug!("augmenting {:?} along {} edges", bottleneck, path.len());

            for &edge in path.edges() {
                let reverse = self.reverse[edge.index()].ok_or_else(|| FlowError::InternalConsistency(format!("edge {edge} has no reverse edge")))?;
                scaffold[edge].capacity -= bottleneck;
                scaffold[reverse].capacity += bottleneck;
            }
            self.augmentations += 1;
        }

        // what is missing from the nominal capacity went through the edge
        let originals: Vec<EdgeId> = self.nominal.iter().map(|&(edge, _)| edge).collect();
        for &(edge, capacity) in self.nominal.iter() {
            let residual = scaffold[edge].capacity;
            scaffold[edge].load = (capacity - residual).max(Flow::zero());
            scaffold[edge].capacity = capacity;
        }
        cancel_opposing_loads(&mut scaffold, &originals);
        debug!("maximum flow {:?} after {} augmentations", scaffold.maximum_flow(source), self.augmentations);

        Ok(Status::Optimal)
    }

    #[inline]
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }
}

impl<Flow> MaximumFlowSolver<Flow> for FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug,
{
    fn run(&mut self, graph: &mut Graph<Flow>, source: NodeId, sink: NodeId) -> Result<Status, FlowError> {
        self.solve(graph, source, sink)
    }
}
