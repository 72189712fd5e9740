use crate::error::FlowError;
use crate::graph::{EdgeId, Graph, NodeId, Path};
use num_traits::NumAssign;

/// Searches a negative cost cycle over the directed edges by `cost`.
///
/// All distances start at zero, as if a virtual source reached every node for free,
/// so a cycle is found wherever it lies. After |V| rounds of relaxation one more scan
/// looks for an edge that still relaxes; the predecessor chain from there runs into
/// the cycle that is returned. This is some negative cycle, not the most negative one.
pub fn bellman_ford_cycle<Flow>(graph: &Graph<Flow>) -> Result<Option<Path>, FlowError>
where
    Flow: NumAssign + Ord + Copy,
{
    let bound = graph.node_bound();
    let edges: Vec<(EdgeId, NodeId, NodeId, Flow)> = graph
        .edges()
        .filter_map(|(id, edge)| Some((id, edge.source()?, edge.destination()?, edge.cost)))
        .collect();

    let mut dist = vec![Flow::zero(); bound];
    let mut prev: Vec<Option<(NodeId, EdgeId)>> = vec![None; bound];

    for _ in 0..graph.num_nodes() {
        let mut updated = false;
        for &(edge, u, v, cost) in edges.iter() {
            if dist[u.index()] + cost < dist[v.index()] {
                dist[v.index()] = dist[u.index()] + cost;
                prev[v.index()] = Some((u, edge));
                updated = true;
            }
        }
        if !updated {
            return Ok(None);
        }
    }

    let Some(&(edge, u, v, cost)) = edges.iter().find(|&&(_, u, v, cost)| dist[u.index()] + cost < dist[v.index()]) else {
        return Ok(None);
    };
    dist[v.index()] = dist[u.index()] + cost;
    prev[v.index()] = Some((u, edge));

    // walk back until a node repeats, that node lies on the cycle
    let mut visited = vec![false; bound];
    let mut x = v;
    while !visited[x.index()] {
        visited[x.index()] = true;
        x = predecessor(graph, &prev, x)?.0;
    }

    let mut cycle = Vec::new();
    let mut y = x;
    loop {
        let (p, edge) = predecessor(graph, &prev, y)?;
        cycle.push(edge);
        y = p;
        if y == x {
            break;
        }
    }

    let mut path = Path::new(x);
    for &edge in cycle.iter().rev() {
        path.append(graph, edge)?;
    }
    Ok(Some(path))
}

fn predecessor<Flow>(graph: &Graph<Flow>, prev: &[Option<(NodeId, EdgeId)>], node: NodeId) -> Result<(NodeId, EdgeId), FlowError>
where
    Flow: NumAssign + Ord + Copy,
{
    prev[node.index()].ok_or_else(|| FlowError::InternalConsistency(format!("predecessor chain ends at {}", graph[node].name())))
}
