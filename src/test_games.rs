//! Tiny games the unit tests run the search against.

use crate::interface::{Game, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A one-ply game with two moves: `A` wins for the player making it,
/// `B` loses.
pub struct TwoChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoChoiceState {
    Start,
    WinForFirst,
    WinForSecond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoChoiceMove {
    A,
    B,
}

impl Game for TwoChoice {
    type State = TwoChoiceState;
    type Move = TwoChoiceMove;
    type Player = Player;

    fn legal_moves(state: &TwoChoiceState) -> Vec<TwoChoiceMove> {
        match state {
            TwoChoiceState::Start => vec![TwoChoiceMove::A, TwoChoiceMove::B],
            _ => Vec::new(),
        }
    }

    fn apply(_state: &TwoChoiceState, m: &TwoChoiceMove) -> TwoChoiceState {
        match m {
            TwoChoiceMove::A => TwoChoiceState::WinForFirst,
            TwoChoiceMove::B => TwoChoiceState::WinForSecond,
        }
    }

    fn outcome(state: &TwoChoiceState) -> Outcome {
        match state {
            TwoChoiceState::Start => Outcome::Ongoing,
            // After either move it is the second player's turn.
            TwoChoiceState::WinForFirst => Outcome::MoverLoses,
            TwoChoiceState::WinForSecond => Outcome::MoverWins,
        }
    }

    fn turn_owner(state: &TwoChoiceState) -> Player {
        match state {
            TwoChoiceState::Start => Player::One,
            _ => Player::Two,
        }
    }

    fn first_player() -> Player {
        Player::One
    }

    fn heuristic(state: &TwoChoiceState) -> f64 {
        match state {
            TwoChoiceState::Start => 0.0,
            TwoChoiceState::WinForFirst => 1.0,
            TwoChoiceState::WinForSecond => -1.0,
        }
    }
}

/// Plain 3x3 tic-tac-toe. `Player::One` is X and moves first.
pub struct TicTacToe;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TttState {
    pub cells: [Option<Player>; 9],
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Build a board from the cells X and O occupy.
pub fn ttt_state(xs: &[usize], os: &[usize]) -> TttState {
    let mut cells = [None; 9];
    for &i in xs {
        cells[i] = Some(Player::One);
    }
    for &i in os {
        cells[i] = Some(Player::Two);
    }
    TttState { cells }
}

fn ttt_winner(state: &TttState) -> Option<Player> {
    LINES.iter().find_map(|line| {
        let first = state.cells[line[0]]?;
        (state.cells[line[1]] == Some(first) && state.cells[line[2]] == Some(first))
            .then_some(first)
    })
}

impl Game for TicTacToe {
    type State = TttState;
    type Move = usize;
    type Player = Player;

    fn legal_moves(state: &TttState) -> Vec<usize> {
        if Self::outcome(state).is_terminal() {
            return Vec::new();
        }
        (0..9).filter(|&i| state.cells[i].is_none()).collect()
    }

    fn apply(state: &TttState, m: &usize) -> TttState {
        let mut next = state.clone();
        next.cells[*m] = Some(Self::turn_owner(state));
        next
    }

    fn outcome(state: &TttState) -> Outcome {
        match ttt_winner(state) {
            Some(winner) if winner == Self::turn_owner(state) => Outcome::MoverWins,
            Some(_) => Outcome::MoverLoses,
            None if state.cells.iter().all(Option::is_some) => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    fn turn_owner(state: &TttState) -> Player {
        if state.cells.iter().flatten().count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    fn first_player() -> Player {
        Player::One
    }

    fn heuristic(state: &TttState) -> f64 {
        let for_first = |won: bool| if won { 1.0 } else { -1.0 };
        match Self::outcome(state) {
            Outcome::Draw => 0.0,
            Outcome::MoverWins => for_first(Self::turn_owner(state) == Player::One),
            Outcome::MoverLoses => for_first(Self::turn_owner(state) != Player::One),
            Outcome::Ongoing => {
                // Lines still open to each side, from X's perspective.
                let open = |p: Player| {
                    LINES
                        .iter()
                        .filter(|line| line.iter().all(|&i| state.cells[i] != Some(p.other())))
                        .count() as f64
                };
                (open(Player::One) - open(Player::Two)) / 8.0
            }
        }
    }
}

/// Subtraction game: take 1 or 2 from a shared pile, taking the last
/// object wins.
pub struct Nim;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NimState {
    pub remaining: u32,
    pub turn: Player,
}

impl NimState {
    pub fn new(remaining: u32) -> Self {
        NimState {
            remaining,
            turn: Player::One,
        }
    }
}

impl Game for Nim {
    type State = NimState;
    type Move = u32;
    type Player = Player;

    fn legal_moves(state: &NimState) -> Vec<u32> {
        (1..=state.remaining.min(2)).collect()
    }

    fn apply(state: &NimState, m: &u32) -> NimState {
        NimState {
            remaining: state.remaining - m,
            turn: state.turn.other(),
        }
    }

    fn outcome(state: &NimState) -> Outcome {
        if state.remaining == 0 {
            // The opponent took the last object.
            Outcome::MoverLoses
        } else {
            Outcome::Ongoing
        }
    }

    fn turn_owner(state: &NimState) -> Player {
        state.turn
    }

    fn first_player() -> Player {
        Player::One
    }

    fn heuristic(state: &NimState) -> f64 {
        if state.remaining == 0 {
            if state.turn == Player::One {
                -1.0
            } else {
                1.0
            }
        } else {
            0.0
        }
    }
}

/// A game that never ends; exercises the rollout ply cap.
pub struct Endless;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndlessState {
    pub step: u32,
}

impl Game for Endless {
    type State = EndlessState;
    type Move = ();
    type Player = Player;

    fn legal_moves(_state: &EndlessState) -> Vec<()> {
        vec![()]
    }

    fn apply(state: &EndlessState, _m: &()) -> EndlessState {
        EndlessState {
            step: state.step + 1,
        }
    }

    fn outcome(_state: &EndlessState) -> Outcome {
        Outcome::Ongoing
    }

    fn turn_owner(state: &EndlessState) -> Player {
        if state.step % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    fn first_player() -> Player {
        Player::One
    }

    fn heuristic(_state: &EndlessState) -> f64 {
        0.0
    }
}
