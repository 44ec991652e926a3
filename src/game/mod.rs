pub mod logic;
pub mod state;

use crate::board::Board;
use crate::error::RejectReason::GameOver;
use crate::error::{IllegalMove, ParseError};
use crate::game::logic::GameLogic;
use crate::game::state::{GameState, GameStatus};
use crate::pieces::Side;
use crate::play::Play;
use crate::preset;
use crate::rules::Ruleset;
use crate::tiles::Coords;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// A struct representing a single game, including all state and associated information (such as
/// rules) needed to play.
///
/// The state is only ever replaced as a whole by a fully validated move; a rejected move leaves
/// it exactly as it was.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    logic: GameLogic,
    state: GameState,
}

impl Game {
    /// Create a new [`Game`] from the given rules and starting positions.
    pub fn new(rules: Ruleset, starting_board: &str) -> Result<Self, ParseError> {
        Ok(Self::with_board(rules, Board::from_str(starting_board)?))
    }

    /// Create a new [`Game`] from the given rules and an already built board.
    pub fn with_board(rules: Ruleset, board: Board) -> Self {
        Self::with_state(rules, GameState::new(board, rules.starting_side))
    }

    /// Resume a game from an arbitrary state.
    pub fn with_state(rules: Ruleset, state: GameState) -> Self {
        Self {
            logic: GameLogic::new(rules),
            state,
        }
    }

    /// Attempt to move the piece centred on `(from_x, from_y)` so that it is centred on
    /// `(to_x, to_y)`. Returns the status of the game after the move.
    #[instrument(skip(self))]
    pub fn attempt_move(
        &mut self,
        from_x: i8,
        from_y: i8,
        to_x: i8,
        to_y: i8,
    ) -> Result<GameStatus, IllegalMove> {
        self.do_play(Play::new(
            Coords::new(from_x, from_y),
            Coords::new(to_x, to_y),
        ))
    }

    /// Actually "do" a play: reject malformed coordinates, confirm the game is still undecided,
    /// check validity, walk the piece along its path, switch side to play and return the game
    /// status following the move.
    #[instrument(skip(self), fields(side = %self.state.side_to_play))]
    pub fn do_play(&mut self, play: Play) -> Result<GameStatus, IllegalMove> {
        if let Err(e) = self.logic.check_coords(play, &self.state) {
            debug!(reason = %e.reason, "move rejected");
            return Err(e);
        }
        let before = self.logic.status_before_play(&self.state);
        if before.is_over() {
            info!(status = %before, "ring missing before move");
            self.state.status = before;
            return Err(GameOver.into());
        }
        match self.logic.do_play(play, &self.state) {
            Ok(state) => {
                self.state = state;
                if let GameStatus::Won(side) = self.state.status {
                    info!(winner = %side, turn = self.state.turn, "game won");
                }
                Ok(self.state.status)
            }
            Err(e) => {
                debug!(reason = %e.reason, "move rejected");
                Err(e)
            }
        }
    }

    /// Every play the side to play could make with the piece centred on `center`. Order is not
    /// guaranteed.
    pub fn legal_plays_from(&self, center: Coords) -> Vec<Play> {
        self.logic.legal_plays_from(&self.state, center)
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn side_to_play(&self) -> Side {
        self.state.side_to_play
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Number of moves that have been made so far.
    pub fn turn(&self) -> usize {
        self.state.turn
    }

    pub fn rules(&self) -> Ruleset {
        self.logic.rules
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_board(preset::rules::STANDARD, Board::standard())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::error::RejectReason::{GameOver, NoDisplacement, NotOwned, OutOfBounds, TooFar};
    use crate::game::state::GameStatus::{InProgress, Won};
    use crate::game::Game;
    use crate::pieces::Side::{A, B};
    use crate::preset::{boards, rules};
    use crate::tiles::Coords;

    #[test]
    fn test_new() {
        let game = Game::new(rules::STANDARD, boards::STANDARD).unwrap();
        assert_eq!(game, Game::default());
        assert_eq!(game.side_to_play(), A);
        assert_eq!(game.status(), InProgress);
        assert_eq!(game.turn(), 0);
        assert!(Game::new(rules::STANDARD, "...").is_err());

        let game = Game::new(rules::DIRECTIONAL, boards::FORWARD_STONES).unwrap();
        assert!(game.rules().directional_stones);
        assert_eq!(game.board().count(B), 43);
    }

    #[test]
    fn test_attempt_move() {
        let mut game = Game::default();
        assert_eq!(game.attempt_move(3, 15, 8, 10), Ok(InProgress));
        assert_eq!(game.side_to_play(), B);
        assert_eq!(game.turn(), 1);

        // B cannot move A's stones.
        let before = game.clone();
        assert_eq!(game.attempt_move(8, 10, 8, 11).map_err(|e| e.reason), Err(NotOwned));
        assert_eq!(game, before);

        // (7, 2) has a stone in its centre.
        assert_eq!(game.attempt_move(7, 2, 7, 6).map_err(|e| e.reason), Err(TooFar));
        assert_eq!(game.attempt_move(7, 2, 7, 5), Ok(InProgress));
        assert_eq!(game.side_to_play(), A);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_missing_ring_before_move() {
        let mut board = Board::standard();
        board.clear(Coords::new(11, 1));
        let mut game = Game::with_board(rules::STANDARD, board.clone());
        assert_eq!(game.status(), InProgress);
        assert_eq!(game.attempt_move(3, 15, 8, 10).map_err(|e| e.reason), Err(GameOver));
        assert_eq!(game.status(), Won(A));
        assert_eq!(game.board(), &board);
        assert_eq!(game.side_to_play(), A);
        assert_eq!(game.turn(), 0);

        // Further attempts are rejected without changing anything.
        assert_eq!(game.attempt_move(0, 0, 19, 19).map_err(|e| e.reason), Err(GameOver));
        assert_eq!(game.attempt_move(4, 17, 4, 15).map_err(|e| e.reason), Err(GameOver));
        assert_eq!(game.status(), Won(A));
    }

    #[test]
    fn test_malformed_coords_before_ring_check() {
        let mut board = Board::standard();
        board.clear(Coords::new(11, 1));
        let mut game = Game::with_board(rules::STANDARD, board);
        let before = game.clone();
        assert_eq!(game.attempt_move(0, 0, 19, 19).map_err(|e| e.reason), Err(OutOfBounds));
        assert_eq!(game.attempt_move(4, 17, 4, 17).map_err(|e| e.reason), Err(NoDisplacement));
        assert_eq!(game, before);
        assert_eq!(game.status(), InProgress);

        // A well-formed attempt then finds the broken ring.
        assert_eq!(game.attempt_move(4, 17, 4, 15).map_err(|e| e.reason), Err(GameOver));
        assert_eq!(game.status(), Won(A));
    }

    #[test]
    fn test_legal_plays_from() {
        let game = Game::default();
        let plays = game.legal_plays_from(Coords::new(3, 15));
        assert!(plays.iter().any(|p| p.to == Coords::new(8, 10)));
        for play in plays {
            let mut g = game.clone();
            assert!(g.do_play(play).is_ok(), "{play}");
        }
        assert!(game.legal_plays_from(Coords::new(7, 2)).is_empty());
    }
}
