use crate::board::Board;
use crate::pieces::Side;
use crate::rings::RingPresence;
use derive_more::Display;

/// The current status of the game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Display)]
pub enum GameStatus {
    /// Game is still ongoing.
    #[display("in progress")]
    InProgress,
    /// Game has been won by the given side.
    #[display("{_0} wins")]
    Won(Side),
}

impl GameStatus {
    /// Decide the status of a game from which sides still have a ring. `mover` is the side whose
    /// move is being (or has just been) made; if neither side has a ring, its opponent wins.
    pub fn from_rings(rings: RingPresence, mover: Side) -> Self {
        match (rings.a, rings.b) {
            (true, true) => GameStatus::InProgress,
            (false, true) => GameStatus::Won(Side::B),
            (true, false) => GameStatus::Won(Side::A),
            (false, false) => GameStatus::Won(mover.other()),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(side) => Some(*side),
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// All the state of a game that changes from move to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Board state, ie, the current stones on the board.
    pub board: Board,
    /// The side whose turn it is.
    pub side_to_play: Side,
    /// Current status of the game.
    pub status: GameStatus,
    /// Number of moves that have been made by either side.
    pub turn: usize,
}

impl GameState {
    pub fn new(board: Board, side_to_play: Side) -> Self {
        Self {
            board,
            side_to_play,
            status: GameStatus::InProgress,
            turn: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game::state::GameStatus;
    use crate::game::state::GameStatus::{InProgress, Won};
    use crate::pieces::Side::{A, B};
    use crate::rings::RingPresence;

    #[test]
    fn test_from_rings() {
        let both = RingPresence { a: true, b: true };
        let only_a = RingPresence { a: true, b: false };
        let only_b = RingPresence { a: false, b: true };
        let neither = RingPresence { a: false, b: false };
        for mover in [A, B] {
            assert_eq!(GameStatus::from_rings(both, mover), InProgress);
            assert_eq!(GameStatus::from_rings(only_a, mover), Won(A));
            assert_eq!(GameStatus::from_rings(only_b, mover), Won(B));
        }
        assert_eq!(GameStatus::from_rings(neither, A), Won(B));
        assert_eq!(GameStatus::from_rings(neither, B), Won(A));
    }

    #[test]
    fn test_display() {
        assert_eq!(InProgress.to_string(), "in progress");
        assert_eq!(Won(A).to_string(), "A wins");
        assert_eq!(Won(B).winner(), Some(B));
        assert!(!InProgress.is_over());
    }
}
