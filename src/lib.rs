//! A game-agnostic decision core for two-player, turn-based games.
//!
//! Given any game that can enumerate its legal moves, apply them, classify
//! terminal states and statically score positions, this crate picks a move
//! either by depth-limited minimax with alpha-beta pruning or by Monte
//! Carlo Tree Search with UCB-based leaf selection.
//!
//! Implement [`Game`] for a concrete game, then either drive a
//! [`GameTree`] directly (`minimax_move`, or `iterate` followed by
//! `best_move`) or use one of the [`Strategy`] implementations:
//! [`MinimaxStrategy`] for the alpha-beta path, [`MctsStrategy`] for the
//! sampling path.
//!
//! Everything is single-threaded and synchronous; all randomness flows
//! through an injectable [`rand::Rng`], so searches are reproducible under
//! a seeded generator.

pub mod interface;
mod search;
#[cfg(test)]
mod test_games;

pub use interface::{Game, Outcome, Strategy};
pub use search::algorithm::{MctsOptions, MctsStrategy, DEFAULT_ROLLOUT_CAP};
pub use search::minimax::{MinimaxStrategy, DEFAULT_MINIMAX_DEPTH};
pub use search::monte_carlo;
pub use search::{GameNode, GameTree, NodeId, TreeStats};
