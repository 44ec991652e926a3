use crate::error::ParseError;
use crate::error::ParseError::{BadLineCount, BadLineLen, EmptyString};
use crate::pieces::{Cell, Side};
use crate::tiles::{Coords, SIDE_LEN};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const SIDE: usize = SIDE_LEN as usize;

/// Stone pattern of each side's three home rows, listed from the edge of the board inwards.
/// The pattern is left-right symmetric.
const HOME_ROWS: [&[u8; SIDE]; 3] = [
    b"..#.#.########.#.#..",
    b".###.#.####.#.#.###.",
    b"..#.#.########.#.#..",
];

/// The 20x20 grid of cells. Rows and columns 0 and 19 form a border on which stones never
/// survive a move; see [`Board::clear_border`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    /// Indexed as `cells[y][x]`.
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// A board with no stones on it.
    pub fn empty() -> Self {
        Self { cells: [[Cell::Empty; SIDE]; SIDE] }
    }

    /// The starting layout: the home rows (1 to 3) of side B at the top of the board and the
    /// mirror image for side A on rows 16 to 18. Every other cell is empty.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (i, row) in HOME_ROWS.iter().enumerate() {
            for (x, &b) in row.iter().enumerate() {
                if b == b'#' {
                    board.cells[1 + i][x] = Cell::Stone(Side::B);
                    board.cells[SIDE - 2 - i][x] = Cell::Stone(Side::A);
                }
            }
        }
        board
    }

    fn index(c: Coords) -> Option<(usize, usize)> {
        if c.on_board() {
            Some((c.x as usize, c.y as usize))
        } else {
            None
        }
    }

    /// Get the contents of a cell. Positions off the grid read as empty.
    pub fn get(&self, c: Coords) -> Cell {
        match Self::index(c) {
            Some((x, y)) => self.cells[y][x],
            None => Cell::Empty,
        }
    }

    /// Set the contents of a cell. Positions off the grid are ignored.
    pub fn set(&mut self, c: Coords, cell: Cell) {
        if let Some((x, y)) = Self::index(c) {
            self.cells[y][x] = cell;
        }
    }

    pub fn clear(&mut self, c: Coords) {
        self.set(c, Cell::Empty)
    }

    /// Remove every stone from the outermost rows and columns.
    pub fn clear_border(&mut self) {
        for i in 0..SIDE {
            self.cells[0][i] = Cell::Empty;
            self.cells[SIDE - 1][i] = Cell::Empty;
            self.cells[i][0] = Cell::Empty;
            self.cells[i][SIDE - 1] = Cell::Empty;
        }
    }

    /// Check that no stone sits on the border.
    pub fn border_is_clear(&self) -> bool {
        self.iter().all(|(c, cell)| !c.on_border() || cell.is_empty())
    }

    /// Iterate over every cell of the board, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coords, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Coords::new(x as i8, y as i8), cell))
        })
    }

    /// Count the stones belonging to the given side.
    pub fn count(&self, side: Side) -> usize {
        self.iter().filter(|(_, cell)| cell.is_stone_of(side)).count()
    }

    /// Parse a board from the format output by [`Self::to_display_str`]: twenty lines of twenty
    /// characters, where `.` is an empty cell, `x` a stone of side A and `o` a stone of side B.
    /// Whitespace around each line is ignored. Stones placed on the border are removed.
    pub fn from_display_str(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmptyString);
        }
        let lines: Vec<&str> = s.lines().map(str::trim).collect();
        if lines.len() != SIDE {
            return Err(BadLineCount(lines.len()));
        }
        let mut board = Self::empty();
        for (y, line) in lines.into_iter().enumerate() {
            let n_chars = line.chars().count();
            if n_chars != SIDE {
                return Err(BadLineLen(n_chars));
            }
            for (x, chr) in line.chars().enumerate() {
                board.cells[y][x] = Cell::try_from(chr)?;
            }
        }
        board.clear_border();
        Ok(board)
    }

    /// Return a string representing the board, one line per row.
    pub fn to_display_str(&self) -> String {
        let mut s = String::with_capacity(SIDE * (SIDE + 1));
        for row in &self.cells {
            s.extend(row.iter().map(|&cell| char::from(cell)));
            s.push('\n');
        }
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_str(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_str())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board(\n{})", self.to_display_str())
    }
}
