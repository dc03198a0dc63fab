//! Stateless rollout simulation and UCB scoring.

use rand::seq::SliceRandom;
use rand::Rng;

use super::node::GameNode;
use crate::interface::{Game, Outcome};

/// Play uniformly random legal moves from `node`'s state until the game
/// ends or `cap_plies` moves have been made.
///
/// Scoring: 1 when the final outcome counts as a win for the node's root
/// player — `MoverWins` with the node's own turn owner being the root
/// player, or `MoverLoses` with it being the opponent. A draw, or running
/// into the cap with the game still open, scores a uniformly random 0 or 1.
/// Everything else scores 0. The turn owner tested is the one at the
/// starting node, not at the final simulated state; games with asymmetric
/// result conventions should pin down this mapping before relying on it.
pub fn simulate<G: Game>(node: &GameNode<G>, cap_plies: u32, rng: &mut impl Rng) -> u32 {
    let mut state = node.state().clone();
    let mut plies = 0;
    while G::outcome(&state) == Outcome::Ongoing && plies < cap_plies {
        let moves = G::legal_moves(&state);
        let mv = moves
            .choose(rng)
            .expect("ongoing state produced no legal moves");
        state = G::apply(&state, mv);
        plies += 1;
    }

    let mover_is_root = G::turn_owner(node.state()) == node.root_player;
    match G::outcome(&state) {
        Outcome::MoverWins if mover_is_root => 1,
        Outcome::MoverLoses if !mover_is_root => 1,
        Outcome::Ongoing | Outcome::Draw => rng.gen_range(0..=1),
        _ => 0,
    }
}

/// The UCB score used for leaf selection.
///
/// The exploration term is `alpha * ln(parent_simulations) / simulations`,
/// not the square-root UCB1 form; child ranking depends on this exact
/// shape. `simulations` must be nonzero.
pub fn ucb(wins: u32, simulations: u32, parent_simulations: u32, alpha: f64) -> f64 {
    assert!(simulations > 0, "ucb requires at least one simulation");
    wins as f64 / simulations as f64
        + alpha * ((parent_simulations as f64).ln() / simulations as f64)
}
