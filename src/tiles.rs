use crate::direction::Direction;
use crate::error::ParseError;
use crate::error::ParseError::BadString;
use derive_more::Display;
use std::str::FromStr;

/// The number of rows (and columns) on the board.
pub const SIDE_LEN: i8 = 20;

/// The lowest coordinate a piece may be centred on. Anything lower would put part of the piece
/// off the board.
pub const MIN_CENTER: i8 = 1;

/// The highest coordinate a piece may be centred on.
pub const MAX_CENTER: i8 = SIDE_LEN - 2;

/// Offsets of the nine cells of a 3x3 window relative to its centre, in row-major order.
pub(crate) const WINDOW: [(i8, i8); 9] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (0, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// The location of a single cell, as a column (`x`) and row (`y`). Row 0 is the top of the board.
///
/// The fields are signed so that positions off the board (such as user input that has not been
/// validated yet) can still be represented. Use [`Coords::on_board`] or
/// [`Coords::is_valid_center`] before relying on a value being in range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[display("{x},{y}")]
pub struct Coords {
    pub x: i8,
    pub y: i8,
}

impl Coords {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether the coordinates refer to a cell on the 20x20 grid (border included).
    pub fn on_board(&self) -> bool {
        (0..SIDE_LEN).contains(&self.x) && (0..SIDE_LEN).contains(&self.y)
    }

    /// Whether the coordinates refer to a cell in the outermost row or column.
    pub fn on_border(&self) -> bool {
        self.on_board()
            && (self.x == 0 || self.y == 0 || self.x == SIDE_LEN - 1 || self.y == SIDE_LEN - 1)
    }

    /// Whether a 3x3 piece centred here would lie entirely on the board.
    pub fn is_valid_center(&self) -> bool {
        (MIN_CENTER..=MAX_CENTER).contains(&self.x) && (MIN_CENTER..=MAX_CENTER).contains(&self.y)
    }

    /// The coordinates displaced by the given column and row offsets.
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// The coordinates reached by travelling `distance` cells in `direction`.
    pub fn step(&self, direction: Direction, distance: u8) -> Self {
        let n = i8::try_from(distance).unwrap_or(i8::MAX);
        let (dx, dy) = direction.offset();
        self.offset(dx.saturating_mul(n), dy.saturating_mul(n))
    }
}

impl FromStr for Coords {
    type Err = ParseError;

    /// Parse coordinates written as `x,y`, eg, `3,15`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((x, y)) = s.trim().split_once(',') else {
            return Err(BadString(String::from(s)));
        };
        Ok(Self::new(x.trim().parse()?, y.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction::{DownLeft, Right, Up};
    use crate::error::ParseError;
    use crate::tiles::Coords;
    use std::str::FromStr;

    #[test]
    fn test_bounds() {
        assert!(Coords::new(0, 0).on_board());
        assert!(Coords::new(19, 19).on_board());
        assert!(!Coords::new(20, 5).on_board());
        assert!(!Coords::new(-1, 5).on_board());

        assert!(Coords::new(0, 7).on_border());
        assert!(Coords::new(7, 19).on_border());
        assert!(!Coords::new(1, 18).on_border());

        assert!(Coords::new(1, 1).is_valid_center());
        assert!(Coords::new(18, 18).is_valid_center());
        assert!(!Coords::new(0, 9).is_valid_center());
        assert!(!Coords::new(9, 19).is_valid_center());
    }

    #[test]
    fn test_step() {
        let c = Coords::new(5, 10);
        assert_eq!(c.step(Up, 3), Coords::new(5, 7));
        assert_eq!(c.step(Right, 1), Coords::new(6, 10));
        assert_eq!(c.step(DownLeft, 4), Coords::new(1, 14));
        assert!(!c.step(Up, 200).on_board());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Coords::from_str("3,15"), Ok(Coords::new(3, 15)));
        assert_eq!(Coords::from_str(" 12 , 4 "), Ok(Coords::new(12, 4)));
        assert_eq!(Coords::from_str("-1,4"), Ok(Coords::new(-1, 4)));
        assert!(matches!(Coords::from_str("3;15"), Err(ParseError::BadString(_))));
        assert!(matches!(Coords::from_str("a,15"), Err(ParseError::BadInt(_))));
        assert_eq!(Coords::new(3, 15).to_string(), "3,15");
    }
}
