use crate::interface::Game;

/// Index into the tree's node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) u32);

impl NodeId {
    pub(super) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One explored position in a [`GameTree`](super::GameTree).
///
/// A node owns its state and is addressed by [`NodeId`]; parent and child
/// links are indices into the same arena, so the tree stays a simple rooted
/// structure without ownership cycles. Nodes live exactly as long as the
/// tree that allocated them.
pub struct GameNode<G: Game> {
    /// Parent index. `None` only at the root.
    pub(super) parent: Option<NodeId>,
    /// The move that produced this state from the parent. `None` only at
    /// the root.
    pub(super) mv: Option<G::Move>,
    /// The state reached at this node. Never mutated after creation.
    pub(super) state: G::State,
    /// Child indices, in legal-move enumeration order.
    pub(super) children: Vec<NodeId>,
    /// Cached static evaluation. `None` until evaluated.
    pub(super) heuristic: Option<f64>,
    /// Cached value from the last minimax pass that visited this node.
    pub(super) minimax_value: Option<f64>,
    /// Number of rollouts backpropagated through this node.
    pub(super) simulations: u32,
    /// Rollouts won, out of `simulations`. Never exceeds it.
    pub(super) wins: u32,
    /// The player whose wins this subtree counts. Copied unchanged from the
    /// root at construction.
    pub(super) root_player: G::Player,
}

impl<G: Game> GameNode<G> {
    pub(super) fn new_root(state: G::State, root_player: G::Player) -> Self {
        GameNode {
            parent: None,
            mv: None,
            state,
            children: Vec::new(),
            heuristic: None,
            minimax_value: None,
            simulations: 0,
            wins: 0,
            root_player,
        }
    }

    pub(super) fn new_child(
        parent: NodeId,
        mv: G::Move,
        state: G::State,
        root_player: G::Player,
    ) -> Self {
        GameNode {
            parent: Some(parent),
            mv: Some(mv),
            state,
            children: Vec::new(),
            heuristic: None,
            minimax_value: None,
            simulations: 0,
            wins: 0,
            root_player,
        }
    }

    /// The state reached at this node.
    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// The move that produced this node from its parent, `None` at the root.
    pub fn mv(&self) -> Option<&G::Move> {
        self.mv.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node has been expanded already.
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn simulations(&self) -> u32 {
        self.simulations
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Cached minimax value, `None` until a pass has visited this node.
    pub fn minimax_value(&self) -> Option<f64> {
        self.minimax_value
    }

    /// Cached heuristic, `None` until evaluated.
    pub fn heuristic(&self) -> Option<f64> {
        self.heuristic
    }

    /// Observed win rate of this node, counting 0 for an unvisited node.
    pub fn win_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.wins as f64 / self.simulations as f64
        }
    }
}
