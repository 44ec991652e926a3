use crate::direction::Direction;
use crate::error::RejectReason::{BadDirection, NoDisplacement};
use crate::error::{ParseError, RejectReason};
use crate::error::ParseError::BadString;
use crate::tiles::Coords;
use derive_more::Display;
use std::str::FromStr;

/// A single move of a piece, identified by the centre of the piece before and after the move.
/// (Named "Play" rather than "Move" as the lower-cased version of the latter would clash with the
/// Rust keyword.)
///
/// Nothing about a `Play` is guaranteed to be legal, or even on the board; see
/// [`crate::Game::do_play`].
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Display)]
#[display("{from}-{to}")]
pub struct Play {
    pub from: Coords,
    pub to: Coords,
}

impl Play {
    pub fn new(from: Coords, to: Coords) -> Self {
        Self { from, to }
    }

    /// The direction of travel and the number of cells travelled. Fails if the play does not
    /// move the piece, or moves it along something other than a row, column or diagonal.
    pub fn direction_and_distance(&self) -> Result<(Direction, u8), RejectReason> {
        let dx = i16::from(self.to.x) - i16::from(self.from.x);
        let dy = i16::from(self.to.y) - i16::from(self.from.y);
        if dx == 0 && dy == 0 {
            return Err(NoDisplacement);
        }
        Direction::from_delta(dx, dy).ok_or(BadDirection)
    }
}

impl FromStr for Play {
    type Err = ParseError;

    /// Parse a play written as `x1,y1-x2,y2`, eg, `3,15-8,10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::EmptyString);
        }
        let Some((from, to)) = s.split_once('-') else {
            return Err(BadString(String::from(s)));
        };
        Ok(Self::new(Coords::from_str(from)?, Coords::from_str(to)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction::{Down, UpRight};
    use crate::error::ParseError;
    use crate::error::RejectReason::{BadDirection, NoDisplacement};
    use crate::play::Play;
    use crate::tiles::Coords;
    use std::str::FromStr;

    #[test]
    fn test_from_str() {
        let play = Play::from_str("3,15-8,10").unwrap();
        assert_eq!(play, Play::new(Coords::new(3, 15), Coords::new(8, 10)));
        assert_eq!(play.to_string(), "3,15-8,10");
        assert_eq!(Play::from_str(""), Err(ParseError::EmptyString));
        assert!(matches!(Play::from_str("3,15"), Err(ParseError::BadString(_))));
        assert!(matches!(Play::from_str("3,15-8"), Err(ParseError::BadString(_))));
        assert!(matches!(Play::from_str("3,15-x,10"), Err(ParseError::BadInt(_))));
    }

    #[test]
    fn test_direction_and_distance() {
        let play = Play::new(Coords::new(3, 15), Coords::new(8, 10));
        assert_eq!(play.direction_and_distance(), Ok((UpRight, 5)));
        let play = Play::new(Coords::new(4, 4), Coords::new(4, 7));
        assert_eq!(play.direction_and_distance(), Ok((Down, 3)));
        let play = Play::new(Coords::new(4, 4), Coords::new(4, 4));
        assert_eq!(play.direction_and_distance(), Err(NoDisplacement));
        let play = Play::new(Coords::new(4, 4), Coords::new(6, 5));
        assert_eq!(play.direction_and_distance(), Err(BadDirection));
    }
}
