use crate::board::Board;
use crate::direction::Direction;
use crate::error::ParseError;
use crate::tiles::{Coords, WINDOW};
use derive_more::Display;

/// The two players. `A` plays the `x` stones, starts at the bottom of the board and moves first
/// under every preset ruleset; `B` plays the `o` stones from the top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The opposing side.
    pub fn other(&self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// The character used for this side's stones in board strings.
    pub fn stone_char(&self) -> char {
        match self {
            Side::A => 'x',
            Side::B => 'o',
        }
    }
}

/// The contents of a single cell of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Side),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn is_stone_of(&self, side: Side) -> bool {
        *self == Cell::Stone(side)
    }
}

impl TryFrom<char> for Cell {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Cell::Empty),
            'x' => Ok(Cell::Stone(Side::A)),
            'o' => Ok(Cell::Stone(Side::B)),
            other => Err(ParseError::BadChar(other)),
        }
    }
}

impl From<Cell> for char {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Empty => '.',
            Cell::Stone(side) => side.stone_char(),
        }
    }
}

/// A snapshot of the 3x3 window of cells centred on a point of the board. This is the unit a
/// player picks up and moves; which player (if any) may move it depends on which stones it holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    center: Coords,
    /// Indexed as `cells[dy + 1][dx + 1]`.
    cells: [[Cell; 3]; 3],
}

impl Piece {
    /// Read the piece centred on `center`. Cells off the grid read as empty, but callers are
    /// expected to pass a centre for which [`Coords::is_valid_center`] holds.
    pub fn extract(board: &Board, center: Coords) -> Self {
        let mut cells = [[Cell::Empty; 3]; 3];
        for (dx, dy) in WINDOW {
            cells[(dy + 1) as usize][(dx + 1) as usize] = board.get(center.offset(dx, dy));
        }
        Self { center, cells }
    }

    pub fn center(&self) -> Coords {
        self.center
    }

    /// The cell at the given offset from the centre. Offsets outside `-1..=1` read as empty.
    pub fn get(&self, dx: i8, dy: i8) -> Cell {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
            return Cell::Empty;
        }
        self.cells[(dy + 1) as usize][(dx + 1) as usize]
    }

    /// Iterate over the nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// The player who owns the piece, if any. A piece is owned by a side if it holds at least one
    /// of that side's stones and none of the opponent's.
    pub fn owner(&self) -> Option<Side> {
        [Side::A, Side::B].into_iter().find(|&side| self.is_owned_by(side))
    }

    pub fn is_owned_by(&self, side: Side) -> bool {
        let mut own_stone = false;
        for cell in self.cells() {
            match cell {
                Cell::Empty => {}
                Cell::Stone(s) if s == side => own_stone = true,
                Cell::Stone(_) => return false,
            }
        }
        own_stone
    }

    /// Whether the centre cell is empty. Unanchored pieces are not limited in how far they travel.
    pub fn is_unanchored(&self) -> bool {
        self.get(0, 0).is_empty()
    }

    /// Whether the perimeter cell lying in `direction` holds one of `side`'s stones.
    pub fn has_stone_toward(&self, direction: Direction, side: Side) -> bool {
        let (dx, dy) = direction.offset();
        self.get(dx, dy).is_stone_of(side)
    }
}
