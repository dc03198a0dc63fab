use log::{debug, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

use super::tree::GameTree;
use crate::interface::{Game, Strategy};

/// Default number of random plies a rollout may run before it is cut off.
pub const DEFAULT_ROLLOUT_CAP: u32 = 200;

/// Options for the Monte Carlo tree search path.
#[derive(Clone)]
pub struct MctsOptions {
    pub(super) rollout_cap: u32,
}

impl Default for MctsOptions {
    fn default() -> Self {
        Self {
            rollout_cap: DEFAULT_ROLLOUT_CAP,
        }
    }
}

impl MctsOptions {
    /// Set the ply cap for rollouts. A rollout that hits the cap scores as
    /// a coin flip, like a draw.
    pub fn with_rollout_cap(mut self, cap: u32) -> Self {
        self.rollout_cap = cap;
        self
    }
}

impl<G: Game> GameTree<G> {
    /// Run exactly `iterations` select/expand/rollout/backpropagate cycles
    /// from the root.
    ///
    /// Stops early only if the root itself turns out to be terminal, in
    /// which case no statistics can ever accumulate and
    /// [`GameTree::best_move`] will report no move.
    pub fn iterate(&mut self, iterations: u32, options: &MctsOptions, rng: &mut impl Rng) {
        for i in 0..iterations {
            if i % 10 == 0 {
                trace!("mcts iteration {i} of {iterations}");
            }

            // A fresh root is expanded once and its statistics seeded
            // through its first child.
            if !self.get(self.root()).is_expanded() {
                self.expand(self.root(), 1);
                let Some(&first) = self.get(self.root()).children().first() else {
                    debug!("root is terminal, stopping after {i} iterations");
                    return;
                };
                let outcome = self.rollout(first, options.rollout_cap, rng);
                self.backpropagate(first, outcome);
                continue;
            }

            let current = self.select_leaf(self.root());

            // A leaf that already has a sample gets expanded one ply before
            // it is sampled again.
            if self.get(current).simulations() != 0 {
                self.expand(current, 1);
                if !self.get(current).is_expanded() {
                    // Terminal leaf. This playout's result is dropped.
                    let _ = self.rollout(current, options.rollout_cap, rng);
                }
            }

            let outcome = self.rollout(current, options.rollout_cap, rng);
            self.backpropagate(current, outcome);
        }
        self.log_stats("mcts iterate");
    }

    /// The move of the root child with the highest observed win rate, ties
    /// going to the earliest child. An unvisited child counts as rate 0.
    /// `None` if the root has no children.
    pub fn best_move(&self) -> Option<G::Move> {
        let mut best_rate = f64::NEG_INFINITY;
        let mut best_move = None;
        for &child in self.get(self.root()).children() {
            let rate = self.get(child).win_rate();
            if rate > best_rate {
                best_rate = rate;
                best_move = self.get(child).mv().cloned();
            }
        }
        best_move
    }
}

/// Chooses moves by running MCTS over a fresh tree per position.
pub struct MctsStrategy<R: Rng = ThreadRng> {
    iterations: u32,
    options: MctsOptions,
    rng: R,
}

impl MctsStrategy<ThreadRng> {
    pub fn new(iterations: u32) -> Self {
        Self::with_rng(iterations, rand::thread_rng())
    }
}

impl<R: Rng> MctsStrategy<R> {
    /// Use an explicit randomness source, e.g. a seeded rng for
    /// reproducible searches.
    pub fn with_rng(iterations: u32, rng: R) -> Self {
        MctsStrategy {
            iterations,
            options: MctsOptions::default(),
            rng,
        }
    }

    pub fn with_options(mut self, options: MctsOptions) -> Self {
        self.options = options;
        self
    }
}

impl<G: Game, R: Rng> Strategy<G> for MctsStrategy<R> {
    fn choose_move(&mut self, state: &G::State) -> Option<G::Move> {
        let mut tree = GameTree::<G>::new(state.clone());
        tree.iterate(self.iterations, &self.options, &mut self.rng);
        tree.best_move()
    }
}
