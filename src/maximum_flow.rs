pub mod ford_fulkerson;
pub mod push_relabel;

pub use ford_fulkerson::FordFulkerson;
pub use push_relabel::{ActiveNodeSelection, PushRelabel};

use crate::error::FlowError;
use crate::graph::{EdgeAttributes, EdgeId, EdgeOrigin, Graph, NodeId, Scaffold};
use crate::status::Status;
use num_traits::NumAssign;

/// Common entry point of the maximum flow solvers, used where the algorithm is pluggable.
///
/// After `Status::Optimal` every edge that existed before the call carries its share of the
/// flow in `load`, capacities are the nominal ones again and no helper edge is left behind.
pub trait MaximumFlowSolver<Flow> {
    fn run(&mut self, graph: &mut Graph<Flow>, source: NodeId, sink: NodeId) -> Result<Status, FlowError>;
}

pub(crate) fn require_directed<Flow>(graph: &Graph<Flow>) -> Result<(), FlowError>
where
    Flow: NumAssign + Ord + Copy,
{
    if graph.is_directed() {
        Ok(())
    } else {
        Err(FlowError::InvalidGraph("maximum flow needs a directed graph".to_string()))
    }
}

/// Adds a zero capacity reverse edge for each of `edges` as scaffolding.
/// The result maps both an edge and its reverse to each other by `EdgeId::index`.
pub(crate) fn pair_reverse_edges<Flow>(graph: &mut Scaffold<'_, Flow>, edges: impl IntoIterator<Item = EdgeId>) -> Result<Vec<Option<EdgeId>>, FlowError>
where
    Flow: NumAssign + Ord + Copy,
{
    let mut reverse = Vec::new();
    for edge in edges {
        let (u, v) = graph[edge].endpoints();
        let added = graph.add_edge(v, u, EdgeOrigin::SyntheticReverse, EdgeAttributes::default())?;
        reverse.resize(graph.edge_bound(), None);
        reverse[edge.index()] = Some(added);
        reverse[added.index()] = Some(edge);
    }
    Ok(reverse)
}

/// Cancels flow running both ways between two nodes, so that of two opposite edges
/// at most one carries load. Flow value and conservation are unchanged.
pub(crate) fn cancel_opposing_loads<Flow>(graph: &mut Graph<Flow>, edges: &[EdgeId])
where
    Flow: NumAssign + Ord + Copy,
{
    let mut included = vec![false; graph.edge_bound()];
    for &edge in edges {
        included[edge.index()] = true;
    }

    for &edge in edges {
        let (u, v) = graph[edge].endpoints();
        let opposite: Vec<EdgeId> = graph[v].outgoing_edges().filter(|&other| other != edge && included[other.index()] && graph[other].destination() == Some(u)).collect();
        for other in opposite {
            let common = graph[edge].load.min(graph[other].load);
            if common > Flow::zero() {
                graph[edge].load -= common;
                graph[other].load -= common;
            }
        }
    }
}
