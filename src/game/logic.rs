use crate::direction::Direction;
use crate::error::IllegalMove;
use crate::error::RejectReason::{
    GameOver, NoDisplacement, NoStoneInDirection, NotOwned, OutOfBounds, TooFar,
};
use crate::game::state::{GameState, GameStatus};
use crate::mover::apply_move;
use crate::pieces::Piece;
use crate::play::Play;
use crate::rings::find_rings;
use crate::rules::Ruleset;
use crate::tiles::Coords;
use tracing::trace;

/// This struct contains the information necessary to implement the game logic, namely the rules
/// in force. It provides methods for evaluating a given play against a game state.
///
/// It does not contain the current game state itself; its methods take references to such state
/// and return new state rather than modifying it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct GameLogic {
    pub rules: Ruleset,
}

impl GameLogic {
    pub fn new(rules: Ruleset) -> Self {
        Self { rules }
    }

    /// The status the game should have before the side to play makes its next move. This is
    /// [`GameStatus::InProgress`] unless a side has somehow been left without a ring (for
    /// example, because the game was started from such a position).
    pub fn status_before_play(&self, state: &GameState) -> GameStatus {
        if state.status.is_over() {
            return state.status;
        }
        GameStatus::from_rings(find_rings(&state.board), state.side_to_play)
    }

    /// Reject plays that could never be made from any position: both centres must be in the
    /// playable area and differ from each other. A game that is already over accepts nothing.
    pub fn check_coords(&self, play: Play, state: &GameState) -> Result<(), IllegalMove> {
        if state.status.is_over() {
            return Err(GameOver.into());
        }
        if !(play.from.is_valid_center() && play.to.is_valid_center()) {
            return Err(OutOfBounds.into());
        }
        if play.from == play.to {
            return Err(NoDisplacement.into());
        }
        Ok(())
    }

    /// Check whether a play is valid for the side to play, without walking the piece's path.
    /// Returns the piece that would be moved.
    pub fn check_play(&self, play: Play, state: &GameState) -> Result<Piece, IllegalMove> {
        self.check_coords(play, state)?;
        let side = state.side_to_play;
        let piece = Piece::extract(&state.board, play.from);
        if !piece.is_owned_by(side) {
            return Err(NotOwned.into());
        }
        let (direction, distance) = play.direction_and_distance()?;
        if distance > self.rules.anchored_range && !piece.is_unanchored() {
            return Err(TooFar.into());
        }
        if self.rules.directional_stones && !piece.has_stone_toward(direction, side) {
            return Err(NoStoneInDirection.into());
        }
        Ok(piece)
    }

    /// Evaluate a play, returning the state of the game after it has been made. The given state
    /// is not modified.
    pub fn do_play(&self, play: Play, state: &GameState) -> Result<GameState, IllegalMove> {
        self.check_play(play, state)?;
        let side = state.side_to_play;
        let (direction, distance) = play.direction_and_distance()?;
        let board = apply_move(&state.board, play.from, direction, distance, side)?;
        let status = GameStatus::from_rings(find_rings(&board), side);
        trace!(%play, %status, "play accepted");
        Ok(GameState {
            board,
            side_to_play: side.other(),
            status,
            turn: state.turn + 1,
        })
    }

    /// Every play the side to play could make with the piece centred on `center`. The list is
    /// empty if there is no such piece or the game is over.
    pub fn legal_plays_from(&self, state: &GameState, center: Coords) -> Vec<Play> {
        let mut plays = Vec::new();
        if self.status_before_play(state).is_over() {
            return plays;
        }
        for direction in Direction::ALL {
            for distance in 1.. {
                let to = center.step(direction, distance);
                if !to.is_valid_center() {
                    break;
                }
                let play = Play::new(center, to);
                // Whatever stops a piece short of a destination (distance limit, a stone in the
                // way, a ring broken on the way) also stops it going any further.
                if self.do_play(play, state).is_err() {
                    break;
                }
                plays.push(play);
            }
        }
        plays
    }
}
