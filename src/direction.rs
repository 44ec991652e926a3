use crate::tiles::WINDOW;
use derive_more::Display;

/// One of the eight compass directions a piece can travel in. Up is towards row 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// The column and row displacement of a single step in this direction.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    /// Determine the direction and distance of a displacement. Returns `None` if the displacement
    /// is zero or does not lie along a row, column or 45-degree diagonal.
    pub fn from_delta(dx: i16, dy: i16) -> Option<(Self, u8)> {
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return None;
        }
        let direction = match (dx.signum(), dy.signum()) {
            (-1, -1) => Direction::UpLeft,
            (0, -1) => Direction::Up,
            (1, -1) => Direction::UpRight,
            (-1, 0) => Direction::Left,
            (1, 0) => Direction::Right,
            (-1, 1) => Direction::DownLeft,
            (0, 1) => Direction::Down,
            (1, 1) => Direction::DownRight,
            _ => return None,
        };
        let distance = u8::try_from(dx.abs().max(dy.abs())).ok()?;
        Some((direction, distance))
    }

    /// Offsets, relative to a piece's current centre, of the cells its footprint enters when it
    /// takes one step in this direction. Three cells for an axis-aligned step, five for a
    /// diagonal one.
    pub fn leading_edge(self) -> impl Iterator<Item = (i8, i8)> {
        let (dx, dy) = self.offset();
        WINDOW
            .into_iter()
            .map(move |(wx, wy)| (wx + dx, wy + dy))
            .filter(|(x, y)| x.abs() == 2 || y.abs() == 2)
    }

    /// Offsets, relative to a piece's current centre, of the cells its footprint leaves behind
    /// when it takes one step in this direction.
    pub fn trailing_edge(self) -> impl Iterator<Item = (i8, i8)> {
        let (dx, dy) = self.offset();
        WINDOW
            .into_iter()
            .filter(move |(wx, wy)| (wx - dx).abs() == 2 || (wy - dy).abs() == 2)
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction;
    use crate::direction::Direction::{Down, DownLeft, Left, Right, Up, UpLeft, UpRight};
    use std::collections::HashSet;

    fn edge_set(cells: impl Iterator<Item = (i8, i8)>) -> HashSet<(i8, i8)> {
        cells.collect()
    }

    #[test]
    fn test_from_delta() {
        assert_eq!(Direction::from_delta(5, -5), Some((UpRight, 5)));
        assert_eq!(Direction::from_delta(0, 3), Some((Down, 3)));
        assert_eq!(Direction::from_delta(-2, 0), Some((Left, 2)));
        assert_eq!(Direction::from_delta(-1, 1), Some((DownLeft, 1)));
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 1), None);
        assert_eq!(Direction::from_delta(-3, 4), None);
    }

    #[test]
    fn test_offsets_round_trip() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert_eq!(Direction::from_delta(dx.into(), dy.into()), Some((d, 1)));
            assert_eq!(d.is_diagonal(), dx != 0 && dy != 0);
        }
    }

    #[test]
    fn test_edge_sizes() {
        for d in Direction::ALL {
            let expected = if d.is_diagonal() { 5 } else { 3 };
            assert_eq!(d.leading_edge().count(), expected, "{d}");
            assert_eq!(d.trailing_edge().count(), expected, "{d}");
        }
    }

    #[test]
    fn test_edge_cells() {
        assert_eq!(
            edge_set(Up.leading_edge()),
            HashSet::from([(-1, -2), (0, -2), (1, -2)])
        );
        assert_eq!(
            edge_set(Up.trailing_edge()),
            HashSet::from([(-1, 1), (0, 1), (1, 1)])
        );
        assert_eq!(
            edge_set(Right.leading_edge()),
            HashSet::from([(2, -1), (2, 0), (2, 1)])
        );
        assert_eq!(
            edge_set(UpLeft.leading_edge()),
            HashSet::from([(-2, -2), (-1, -2), (0, -2), (-2, -1), (-2, 0)])
        );
        assert_eq!(
            edge_set(UpLeft.trailing_edge()),
            HashSet::from([(1, -1), (1, 0), (-1, 1), (0, 1), (1, 1)])
        );
        assert_eq!(
            edge_set(UpRight.leading_edge()),
            HashSet::from([(0, -2), (1, -2), (2, -2), (2, -1), (2, 0)])
        );
        assert_eq!(
            edge_set(UpRight.trailing_edge()),
            HashSet::from([(-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 1)])
        );
    }
}
