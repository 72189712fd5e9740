/// Outcome of a solver run that did not fail with a `FlowError`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    /// source and sink are the same node
    BadInput,
    /// demands do not sum up to zero
    Unbalanced,
    /// the supplies cannot be routed to the demands
    Infeasible,
    Optimal,
}
