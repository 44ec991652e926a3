use crate::error::ParseError::BadInt;
use derive_more::{Display, Error};
use std::num::ParseIntError;

/// An error encountered while parsing a board, coordinates or a play from a string.
#[derive(Debug, Clone, Eq, PartialEq, Display, Error)]
pub enum ParseError {
    /// A line of a board string was not the expected length. The given `usize` is the actual
    /// length.
    #[display("expected 20 cells per row, found {_0}")]
    BadLineLen(#[error(not(source))] usize),
    /// A board string did not have the expected number of lines. The given `usize` is the actual
    /// number.
    #[display("expected 20 rows, found {_0}")]
    BadLineCount(#[error(not(source))] usize),
    /// Encountered an unexpected character in a string.
    #[display("unexpected character {_0:?}")]
    BadChar(#[error(not(source))] char),
    /// Tried to parse an empty string.
    #[display("empty string")]
    EmptyString,
    /// Could not parse an integer from a string. This variant wraps the [`ParseIntError`] that was
    /// returned when trying to parse.
    #[display("bad integer: {_0}")]
    BadInt(ParseIntError),
    /// A generic error type where the given string could not be parsed for some reason.
    #[display("could not parse {_0:?}")]
    BadString(#[error(not(source))] String),
}

impl From<ParseIntError> for ParseError {
    fn from(value: ParseIntError) -> Self {
        BadInt(value)
    }
}

/// Why a move was refused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum RejectReason {
    /// The game has already been won.
    #[display("the game is over")]
    GameOver,
    /// The source or destination centre is not at least one cell in from the edge of the board.
    #[display("piece centres must lie in rows and columns 1 to 18")]
    OutOfBounds,
    /// The source and destination are the same.
    #[display("the piece does not move")]
    NoDisplacement,
    /// The 3x3 window at the source holds an opponent's stone, or none of the mover's stones.
    #[display("the piece does not belong to the player to move")]
    NotOwned,
    /// The destination does not lie on a row, column or diagonal through the source.
    #[display("moves must follow a row, column or diagonal")]
    BadDirection,
    /// An anchored piece tried to travel further than the rules permit.
    #[display("an anchored piece cannot travel that far")]
    TooFar,
    /// The piece has no stone on the side of its perimeter facing the direction of travel. Only
    /// checked when [`crate::Ruleset::directional_stones`] is set.
    #[display("the piece has no stone in that direction")]
    NoStoneInDirection,
    /// A stone lies in the piece's path before its final step.
    #[display("the path is blocked")]
    Blocked,
    /// Part way through or at the end of the move, the mover would be left without a ring.
    #[display("the move would break the mover's last ring")]
    SelfRingLoss,
}

/// A move that the rules do not allow. Rejected moves never change the state of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
#[display("illegal move: {reason}")]
pub struct IllegalMove {
    pub reason: RejectReason,
}

impl From<RejectReason> for IllegalMove {
    fn from(reason: RejectReason) -> Self {
        Self { reason }
    }
}
