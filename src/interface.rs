//! The common structures and traits.

/// The result of classifying a game state, relative to the player whose
/// turn it is at that state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The game is not over yet.
    Ongoing,
    /// The winning side is the player whose turn it is at this state.
    MoverWins,
    /// The winning side is the other player.
    MoverLoses,
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// True for every variant except [`Outcome::Ongoing`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Defines the rules for a two-player, perfect-knowledge game.
///
/// A game ties together types for the state, moves and player identity,
/// generates the possible moves from a particular state, and classifies
/// terminal states. The search core is generic over this trait and never
/// over a concrete game.
///
/// This is meant to be defined on an empty newtype so that a game engine
/// can be implemented in a separate crate.
pub trait Game: Sized {
    /// The type of the game state.
    type State: Clone;
    /// The type of game moves.
    type Move: Clone;
    /// The type identifying one of the two players.
    type Player: Copy + PartialEq;

    /// Generate all legal moves at the given state, without repetition.
    ///
    /// The order of the returned moves is not otherwise meaningful, but it
    /// fixes the enumeration order of child nodes and therefore how the
    /// search breaks ties.
    fn legal_moves(state: &Self::State) -> Vec<Self::Move>;

    /// Apply a move to a state, producing the successor state.
    ///
    /// Must be pure: the input state is never mutated. The search only ever
    /// passes moves obtained from [`Game::legal_moves`] on the same state;
    /// anything else is a caller error.
    fn apply(state: &Self::State, m: &Self::Move) -> Self::State;

    /// Classify the state relative to the player whose turn it is there.
    fn outcome(state: &Self::State) -> Outcome;

    /// Whose turn it is at the given state.
    fn turn_owner(state: &Self::State) -> Self::Player;

    /// The player from whose perspective [`Game::heuristic`] is defined.
    fn first_player() -> Self::Player;

    /// Static evaluation of the state in `[-1, 1]`, from
    /// [`Game::first_player`]'s perspective. Higher is better for them.
    fn heuristic(state: &Self::State) -> f64;
}

/// Defines a method of choosing a move for the current player.
pub trait Strategy<G: Game> {
    /// Pick a move at the given state, or `None` if no move is available.
    fn choose_move(&mut self, state: &G::State) -> Option<G::Move>;
}
