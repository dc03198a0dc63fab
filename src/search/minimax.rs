use log::debug;

use super::node::NodeId;
use super::tree::GameTree;
use crate::interface::{Game, Strategy};

/// Search depth used by [`MinimaxStrategy::default`].
pub const DEFAULT_MINIMAX_DEPTH: u32 = 3;

// Initial alpha/beta window, wide enough to dominate any heuristic. A node
// whose expansion yields no children reports the untouched bound.
const SCORE_CEILING: f64 = 1e9;
const SCORE_FLOOR: f64 = -SCORE_CEILING;

impl<G: Game> GameTree<G> {
    /// Run a depth-limited minimax pass with alpha-beta pruning from the
    /// root and return the move of the first root child whose value equals
    /// the root's, or `None` if the root has no children.
    ///
    /// The maximizing identity is fixed to the root's turn owner for the
    /// whole pass: each level maximizes or minimizes according to whether
    /// its own turn owner equals that identity, not according to ply
    /// parity, so games where a player can move twice in a row keep the
    /// right orientation at every level.
    pub fn minimax_move(&mut self, depth: u32) -> Option<G::Move> {
        let original = G::turn_owner(self.get(self.root()).state());
        let value = self.minimax_value(self.root(), depth, SCORE_FLOOR, SCORE_CEILING, original);
        debug!("minimax pass finished with root value {value}");

        for &child in self.get(self.root()).children() {
            if self.get(child).minimax_value() == Some(value) {
                return self.get(child).mv().cloned();
            }
        }
        None
    }

    fn minimax_value(
        &mut self,
        id: NodeId,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        original: G::Player,
    ) -> f64 {
        if depth == 0 {
            let heuristic = self.evaluate_heuristic(id);
            // The heuristic is defined from the first player's perspective;
            // flip it when the search runs for the other player.
            let value = if original == G::first_player() {
                heuristic
            } else {
                -heuristic
            };
            self.get_mut(id).minimax_value = Some(value);
            return value;
        }

        if !self.get(id).is_expanded() {
            self.expand(id, 1);
        }
        let children = self.get(id).children().to_vec();

        let value = if G::turn_owner(self.get(id).state()) == original {
            let mut best = SCORE_FLOOR;
            for child in children {
                let eval = self.minimax_value(child, depth - 1, alpha, beta, original);
                best = best.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut worst = SCORE_CEILING;
            for child in children {
                let eval = self.minimax_value(child, depth - 1, alpha, beta, original);
                worst = worst.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            worst
        };
        self.get_mut(id).minimax_value = Some(value);
        value
    }
}

/// Chooses moves with a fixed-depth alpha-beta minimax pass over a fresh
/// tree per position.
pub struct MinimaxStrategy {
    depth: u32,
}

impl MinimaxStrategy {
    pub fn new(depth: u32) -> Self {
        MinimaxStrategy { depth }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMAX_DEPTH)
    }
}

impl<G: Game> Strategy<G> for MinimaxStrategy {
    fn choose_move(&mut self, state: &G::State) -> Option<G::Move> {
        let mut tree = GameTree::<G>::new(state.clone());
        tree.minimax_move(self.depth)
    }
}
