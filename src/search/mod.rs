pub mod algorithm;
pub mod minimax;
pub mod monte_carlo;
mod node;
mod tree;

pub use node::{GameNode, NodeId};
pub use tree::{GameTree, TreeStats};

// Exploitation/exploration balance used whenever the tree scores a child.
const UCB_ALPHA: f64 = 1.0;
