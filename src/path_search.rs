use crate::error::FlowError;
use crate::graph::{Graph, NodeId, NodeRef, Path};
use log::trace;
use num_traits::NumAssign;

/// Finds a path from `source` to `target` by depth first search.
///
/// Only directed edges with positive residual capacity (`capacity - load`) are followed,
/// neighbors are tried in edge insertion order. Returns `None` if `target` is unreachable.
pub fn depth_first_search<'a, 'b, Flow>(graph: &Graph<Flow>, source: impl Into<NodeRef<'a>>, target: impl Into<NodeRef<'b>>) -> Result<Option<Path>, FlowError>
where
    Flow: NumAssign + Ord + Copy,
{
    let (source, target) = (graph.lookup(source)?, graph.lookup(target)?);
    let mut visited = vec![false; graph.node_bound()];
    let mut path = Path::new(source);

    if dfs(graph, source, target, &mut visited, &mut path)? {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

fn dfs<Flow>(graph: &Graph<Flow>, u: NodeId, target: NodeId, visited: &mut [bool], path: &mut Path) -> Result<bool, FlowError>
where
    Flow: NumAssign + Ord + Copy,
{
    visited[u.index()] = true;

    for edge_id in graph[u].outgoing_edges() {
        let edge = &graph[edge_id];
        let Some(v) = edge.destination() else {
            continue;
        };
        if visited[v.index()] || edge.residual_capacity() <= Flow::zero() {
            continue;
        }

        path.append(graph, edge_id)?;
        if v == target || dfs(graph, v, target, visited, path)? {
            return Ok(true);
        }
        // dead end, try the next neighbor
        trace!("backtracking from {}", graph[v].name());
        path.pop();
    }
    Ok(false)
}

#[derive(PartialEq, Eq, Clone, Copy)]
enum Color {
    White,
    Grey,
    Black,
}

/// Whether the directed edges of the graph contain a cycle.
pub fn has_cycle<Flow>(graph: &Graph<Flow>) -> bool
where
    Flow: NumAssign + Ord + Copy,
{
    let mut color = vec![Color::White; graph.node_bound()];
    graph.node_ids().into_iter().any(|u| color[u.index()] == Color::White && visit(graph, u, &mut color))
}

fn visit<Flow>(graph: &Graph<Flow>, u: NodeId, color: &mut [Color]) -> bool
where
    Flow: NumAssign + Ord + Copy,
{
    color[u.index()] = Color::Grey;
    for edge_id in graph[u].outgoing_edges() {
        let Some(v) = graph[edge_id].destination() else {
            continue;
        };
        let state = color[v.index()];
        match state {
            Color::Grey => return true,
            Color::White => {
                if visit(graph, v, color) {
                    return true;
                }
            }
            Color::Black => {}
        }
    }
    color[u.index()] = Color::Black;
    false
}
