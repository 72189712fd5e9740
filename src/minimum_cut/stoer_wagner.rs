use crate::error::FlowError;
use crate::graph::{EdgeAttributes, Graph, NodeId};
use crate::minimum_cut::MinimumCut;
use log::{debug, info};
use num_traits::NumAssign;
use std::collections::HashMap;
use std::fmt::Debug;

/// Stoer-Wagner minimum cut on the `weight` of undirected edges.
///
/// Every phase grows a node set from the first node by repeatedly taking the most
/// tightly connected remaining node. The weight around the last node taken is the
/// cut of the phase, then the last two nodes are merged in a fresh copy of the graph.
/// The input graph is never modified.
#[derive(Default)]
pub struct StoerWagner {
    phases: usize,
}

impl StoerWagner {
    pub fn solve<Flow>(&mut self, graph: &Graph<Flow>) -> Result<MinimumCut<Flow>, FlowError>
    where
        Flow: NumAssign + Ord + Copy + Debug,
    {
        if !graph.is_undirected() {
            return Err(FlowError::InvalidGraph("graph must be undirected".to_string()));
        }
        if graph.num_nodes() < 2 {
            return Err(FlowError::InvalidGraph("graph needs at least two nodes to be cut".to_string()));
        }

        let mut current = graph.clone();
        let mut members: HashMap<NodeId, Vec<String>> = current.nodes().map(|(u, node)| (u, vec![node.name().to_string()])).collect();
        let mut phases = Vec::with_capacity(graph.num_nodes() - 1);
        let mut best: Option<Flow> = None;
        let mut partition = Vec::new();

        while current.num_nodes() > 1 {
            let (second_last, last, cut) = minimum_cut_phase(&current);
            phases.push(cut);
            info!("result from phase {}: {:?}", phases.len(), cut);

            if best.map_or(true, |value| cut < value) {
                best = Some(cut);
                partition = members.get(&last).cloned().unwrap_or_default();
            }

            let (next, merged) = merge(&current, second_last, last)?;
            let mut combined = members.remove(&second_last).unwrap_or_default();
            combined.extend(members.remove(&last).unwrap_or_default());
            members.insert(merged, combined);
            current = next;
        }
        self.phases = phases.len();

        let value = best.ok_or_else(|| FlowError::InternalConsistency("no phase was run".to_string()))?;
        info!("minimum cut found: {:?}", value);
        Ok(MinimumCut { value, phases, partition })
    }

    /// number of phases of the last run
    #[inline]
    pub fn phases(&self) -> usize {
        self.phases
    }
}

/// Returns the last two nodes added to the growing set and the cut of the phase.
fn minimum_cut_phase<Flow>(graph: &Graph<Flow>) -> (NodeId, NodeId, Flow)
where
    Flow: NumAssign + Ord + Copy + Debug,
{
    let nodes = graph.node_ids();
    let mut in_set = vec![false; graph.node_bound()];
    let mut connectivity = vec![Flow::zero(); graph.node_bound()];
    let mut order = Vec::with_capacity(nodes.len());

    let mut next = Some(nodes[0]);
    while let Some(u) = next {
        in_set[u.index()] = true;
        order.push(u);
        for edge in graph[u].outgoing_edges() {
            if let Some(v) = graph[edge].opposite(u) {
                if !in_set[v.index()] {
                    connectivity[v.index()] += graph[edge].weight;
                }
            }
        }

        // most tightly connected node, the first one on ties
        next = None;
        for &v in nodes.iter().filter(|v| !in_set[v.index()]) {
            if next.map_or(true, |w: NodeId| connectivity[v.index()] > connectivity[w.index()]) {
                next = Some(v);
            }
        }
    }

    let last = order[order.len() - 1];
    let second_last = order[order.len() - 2];
    (second_last, last, connectivity[last.index()])
}

/// Copy of `graph` with `a` and `b` replaced by one node, parallel edges summed up.
fn merge<Flow>(graph: &Graph<Flow>, a: NodeId, b: NodeId) -> Result<(Graph<Flow>, NodeId), FlowError>
where
    Flow: NumAssign + Ord + Copy + Debug,
{
    let mut merged = graph.clone();
    let mut name = format!("{}{}", graph[a].name(), graph[b].name());
    while merged.has_node(name.as_str()) {
        name.push('\'');
    }
    let m = merged.add_node(&name)?;
    debug!("merging {} and {} into {}", graph[a].name(), graph[b].name(), name);

    for u in [a, b] {
        for edge in graph[u].outgoing_edges() {
            let Some(other) = graph[edge].opposite(u) else {
                continue;
            };
            if other == a || other == b {
                continue;
            }
            let weight = graph[edge].weight;
            match merged[m].edge_to(other) {
                Some(existing) => merged[existing].weight += weight,
                None => {
                    merged.add_undirected_edge(m, other, EdgeAttributes::with_weight(weight))?;
                }
            }
        }
    }

    merged.remove_nodes([a, b])?;
    Ok((merged, m))
}
