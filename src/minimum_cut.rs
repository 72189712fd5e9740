pub mod stoer_wagner;

pub use stoer_wagner::StoerWagner;

/// Global minimum cut of an undirected weighted graph.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MinimumCut<Flow> {
    /// total weight of the edges crossing the cut
    pub value: Flow,
    /// cut-of-the-phase values in the order the phases ran
    pub phases: Vec<Flow>,
    /// names of the nodes on one side of the cut
    pub partition: Vec<String>,
}
