use crate::board::Board;
use crate::pieces::{Cell, Piece, Side};
use crate::tiles::{Coords, MAX_CENTER, MIN_CENTER};

/// Which sides have at least one ring on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct RingPresence {
    pub a: bool,
    pub b: bool,
}

impl RingPresence {
    pub fn has(&self, side: Side) -> bool {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    fn set(&mut self, side: Side) {
        match side {
            Side::A => self.a = true,
            Side::B => self.b = true,
        }
    }

    pub fn both(&self) -> bool {
        self.a && self.b
    }
}

/// If the window is a ring (empty centre surrounded by eight stones of one side), return the side
/// it belongs to.
pub fn ring_owner(piece: &Piece) -> Option<Side> {
    if !piece.is_unanchored() {
        return None;
    }
    let Cell::Stone(side) = piece.get(-1, -1) else {
        return None;
    };
    piece
        .cells()
        .enumerate()
        .all(|(i, cell)| i == 4 || cell.is_stone_of(side))
        .then_some(side)
}

/// Scan every empty interior cell for a ring around it. Only existence matters, so the scan
/// stops as soon as both sides have been found to have one.
pub fn find_rings(board: &Board) -> RingPresence {
    let mut found = RingPresence::default();
    for y in MIN_CENTER..=MAX_CENTER {
        for x in MIN_CENTER..=MAX_CENTER {
            let center = Coords::new(x, y);
            if !board.get(center).is_empty() {
                continue;
            }
            if let Some(side) = ring_owner(&Piece::extract(board, center)) {
                found.set(side);
                if found.both() {
                    return found;
                }
            }
        }
    }
    found
}
