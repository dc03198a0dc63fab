use log::debug;
use rand::Rng;

use super::monte_carlo;
use super::node::{GameNode, NodeId};
use super::UCB_ALPHA;
use crate::interface::Game;

/// A search tree over the states of a game `G`.
///
/// Nodes are stored in a contiguous arena and addressed by [`NodeId`];
/// the root is always index 0. The tree owns every node it ever allocates
/// and never prunes, so ids stay valid for the life of the tree. All
/// structural operations are iterative so stack use does not grow with
/// tree depth or iteration count.
pub struct GameTree<G: Game> {
    nodes: Vec<GameNode<G>>,
    root: NodeId,
}

impl<G: Game> GameTree<G> {
    /// Create a tree with the given root state. The root's turn owner
    /// becomes the player whose wins the MCTS statistics count.
    pub fn new(root_state: G::State) -> Self {
        let root_player = G::turn_owner(&root_state);
        GameTree {
            nodes: vec![GameNode::new_root(root_state, root_player)],
            root: NodeId(0),
        }
    }

    /// Create a tree and pre-expand it to the given depth.
    pub fn with_depth(root_state: G::State, depth: u32) -> Self {
        let mut tree = Self::new(root_state);
        tree.expand(tree.root, depth);
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> &GameNode<G> {
        &self.nodes[id.index()]
    }

    pub(super) fn get_mut(&mut self, id: NodeId) -> &mut GameNode<G> {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn add_child(&mut self, parent: NodeId, mv: G::Move, state: G::State) -> NodeId {
        let root_player = self.get(parent).root_player;
        let id = NodeId(self.nodes.len() as u32);
        self.nodes
            .push(GameNode::new_child(parent, mv, state, root_player));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Grow the subtree under `id` to the given depth: one child per legal
    /// move, in enumeration order, recursively until `depth` runs out or a
    /// terminal state is reached.
    ///
    /// Must not be called on a node that already has children; callers
    /// check [`GameNode::is_expanded`] first.
    pub fn expand(&mut self, id: NodeId, depth: u32) {
        assert!(
            !self.get(id).is_expanded(),
            "expand called on a node that already has children"
        );

        let mut frontier = vec![(id, depth)];
        while let Some((id, depth)) = frontier.pop() {
            if depth == 0 || G::outcome(&self.get(id).state).is_terminal() {
                continue;
            }
            for mv in G::legal_moves(&self.get(id).state) {
                let state = G::apply(&self.get(id).state, &mv);
                let child = self.add_child(id, mv, state);
                frontier.push((child, depth - 1));
            }
        }
    }

    /// Evaluate the node's state, cache the result and return it.
    /// May be called repeatedly; each call overwrites the cache.
    pub fn evaluate_heuristic(&mut self, id: NodeId) -> f64 {
        let value = G::heuristic(&self.get(id).state);
        self.get_mut(id).heuristic = Some(value);
        value
    }

    /// Run one random playout from this node's state.
    /// Returns 1 if the outcome counts as a win for the root player, else 0.
    pub fn rollout(&self, id: NodeId, cap_plies: u32, rng: &mut impl Rng) -> u32 {
        monte_carlo::simulate(self.get(id), cap_plies, rng)
    }

    /// Record a rollout outcome (0 or 1) on this node and every ancestor
    /// up to and including the root.
    pub fn backpropagate(&mut self, id: NodeId, outcome: u32) {
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.simulations += 1;
            node.wins += outcome;
            current = node.parent;
        }
    }

    /// UCB score of this node against its parent's visit count.
    /// The node must have a parent and at least one simulation.
    pub fn ucb_score(&self, id: NodeId) -> f64 {
        let node = self.get(id);
        let parent = node.parent.expect("ucb_score called on the root node");
        monte_carlo::ucb(
            node.wins,
            node.simulations,
            self.get(parent).simulations,
            UCB_ALPHA,
        )
    }

    /// Walk down from `id` to the node the next rollout should start from.
    ///
    /// A childless node is its own leaf. At each level, an unvisited child
    /// is taken immediately (earliest first); otherwise the child with the
    /// highest UCB score, ties going to the earliest.
    pub fn select_leaf(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            let node = self.get(current);
            if node.children.is_empty() {
                return current;
            }
            if let Some(&fresh) = node
                .children
                .iter()
                .find(|&&child| self.get(child).simulations == 0)
            {
                return fresh;
            }

            let mut best = node.children[0];
            let mut best_score = self.ucb_score(best);
            for &child in &node.children[1..] {
                let score = self.ucb_score(child);
                if score > best_score {
                    best = child;
                    best_score = score;
                }
            }
            current = best;
        }
    }

    /// Summary of the tree's current shape, for diagnostics.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            total_nodes: self.nodes.len(),
            root_simulations: self.get(self.root).simulations,
            max_depth: self.max_depth(),
        }
    }

    fn max_depth(&self) -> u32 {
        let mut deepest = 0;
        let mut frontier = vec![(self.root, 0)];
        while let Some((id, depth)) = frontier.pop() {
            deepest = deepest.max(depth);
            for &child in &self.get(id).children {
                frontier.push((child, depth + 1));
            }
        }
        deepest
    }

    pub(super) fn log_stats(&self, label: &str) {
        let stats = self.stats();
        debug!(
            "{label}: {} nodes, {} root simulations, depth {}",
            stats.total_nodes, stats.root_simulations, stats.max_depth
        );
    }
}

/// Statistics about a [`GameTree`].
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_simulations: u32,
    pub max_depth: u32,
}
