pub mod bellman_ford;
pub mod cycle_canceling;

pub use bellman_ford::bellman_ford_cycle;
pub use cycle_canceling::{residual_graph, CycleCanceling};
