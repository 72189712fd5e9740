use crate::error::FlowError;
use crate::graph::{EdgeAttributes, EdgeId, EdgeKind, EdgeOrigin, Graph, Scaffold};
use crate::maximum_flow::{require_directed, MaximumFlowSolver, PushRelabel};
use crate::minimum_cost_flow::bellman_ford::bellman_ford_cycle;
use crate::status::Status;
use log::{debug, info};
use num_traits::NumAssign;
use std::collections::HashMap;
use std::fmt::Debug;
use std::ops::Neg;

pub const SUPER_SOURCE: &str = "~super-source";
pub const SUPER_SINK: &str = "~super-sink";

/// Cycle canceling for the minimum cost flow problem.
///
/// Phase 1 routes every supply to every demand with a maximum flow between a super
/// source and a super sink. Phase 2 cancels negative cost cycles of the residual graph
/// until none is left.
pub struct CycleCanceling<Flow, M = PushRelabel<Flow>> {
    max_flow: M,
    feasible_cost: Option<Flow>,
    cancellations: usize,
}

impl<Flow, M> Default for CycleCanceling<Flow, M>
where
    M: Default,
{
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<Flow, M> CycleCanceling<Flow, M> {
    pub fn new(max_flow: M) -> Self {
        Self { max_flow, feasible_cost: None, cancellations: 0 }
    }
}

impl<Flow, M> CycleCanceling<Flow, M>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
    M: MaximumFlowSolver<Flow>,
{
    pub fn solve(&mut self, graph: &mut Graph<Flow>) -> Result<Status, FlowError> {
        require_directed(graph)?;
        self.feasible_cost = None;
        self.cancellations = 0;

        let balance = graph.nodes().fold(Flow::zero(), |sum, (_, node)| sum + node.demand);
        if balance != Flow::zero() {
            return Ok(Status::Unbalanced);
        }

        if !self.route_feasible_flow(graph)? {
            // no partial routing is left behind
            for edge in graph.edge_ids() {
                graph[edge].load = Flow::zero();
            }
            return Ok(Status::Infeasible);
        }
        info!("feasible flow: total load {:?} total cost {:?}", graph.total_load(), graph.total_cost());
        self.feasible_cost = Some(graph.total_cost());

        loop {
            let (residual, reversed) = residual_network(graph)?;
            let Some(cycle) = bellman_ford_cycle(&residual)? else {
                break;
            };

            let delta = cycle
                .bottleneck(&residual, |e| e.capacity)
                .ok_or_else(|| FlowError::InternalConsistency("negative cycle without edges".to_string()))?;
            debug!("negative cost cycle through {} edges, moving {:?}", cycle.len(), delta);

            for &edge in cycle.edges() {
                match reversed.get(&edge) {
                    Some(&original) => graph[original].load -= delta,
                    None => {
                        let forward = graph
                            .edge_mut(edge)
                            .ok_or_else(|| FlowError::InternalConsistency(format!("residual edge {edge} has no counterpart")))?;
                        forward.load += delta;
                    }
                }
            }
            self.cancellations += 1;
        }

        info!("no negative cost cycle left after {} cancellations: total load {:?} total cost {:?}", self.cancellations, graph.total_load(), graph.total_cost());
        Ok(Status::Optimal)
    }

    /// Saturates supplies and demands through temporary super source and sink.
    /// `false` if some supply could not be routed.
    fn route_feasible_flow(&mut self, graph: &mut Graph<Flow>) -> Result<bool, FlowError> {
        let mut scaffold = Scaffold::new(graph);
        let source = scaffold.add_node(SUPER_SOURCE)?;
        let sink = scaffold.add_node(SUPER_SINK)?;

        let mut supplies = Vec::new();
        for u in scaffold.node_ids() {
            if u == source || u == sink {
                continue;
            }
            let demand = scaffold[u].demand;
            if demand < Flow::zero() {
                supplies.push(scaffold.add_edge(source, u, EdgeOrigin::SyntheticSourceSink, EdgeAttributes::with_capacity(-demand))?);
            } else if demand > Flow::zero() {
                scaffold.add_edge(u, sink, EdgeOrigin::SyntheticSourceSink, EdgeAttributes::with_capacity(demand))?;
            }
        }

        self.max_flow.run(&mut scaffold, source, sink)?;
        Ok(supplies.iter().all(|&edge| scaffold[edge].load == scaffold[edge].capacity))
    }

    /// total cost after phase 1 of the last run
    #[inline]
    pub fn feasible_cost(&self) -> Option<Flow> {
        self.feasible_cost
    }

    #[inline]
    pub fn cancellations(&self) -> usize {
        self.cancellations
    }
}

/// Copy of the graph holding the residual network of its current loads.
///
/// An edge carrying load gets a reverse edge with the load as capacity and the negated
/// cost, its own capacity shrinks by the load. Edges without residual capacity are dropped.
/// Fails if a loaded edge already has a reverse edge, i.e. the graph is residual itself
/// or carries load on an antiparallel pair.
pub fn residual_graph<Flow>(graph: &Graph<Flow>) -> Result<Graph<Flow>, FlowError>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    Ok(residual_network(graph)?.0)
}

/// The residual graph and, for each reverse edge added to it, the loaded edge it undoes.
/// Every other residual edge keeps the id of its edge in `graph`.
fn residual_network<Flow>(graph: &Graph<Flow>) -> Result<(Graph<Flow>, HashMap<EdgeId, EdgeId>), FlowError>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    let mut residual = graph.clone();
    let mut reversed = HashMap::new();

    for edge in graph.edge_ids() {
        let (load, cost) = (residual[edge].load, residual[edge].cost);
        if load > Flow::zero() {
            if graph.has_reverse_edge(edge) {
                return Err(FlowError::InternalConsistency("reverse edge found in residual graph construction".to_string()));
            }
            let (u, v) = residual[edge].endpoints();
            debug!("adding reverse edge {} --> {}", residual[v].name(), residual[u].name());
            let reverse = residual.insert_edge(EdgeKind::Directed { source: v, destination: u }, EdgeOrigin::SyntheticReverse, EdgeAttributes::with_capacity(load).cost(-cost))?;
            reversed.insert(reverse, edge);
            residual[edge].capacity -= load;
        }
        if residual[edge].capacity <= Flow::zero() {
            residual.remove_edge(edge);
        }
    }

    Ok((residual, reversed))
}
