//! Simulation of a piece travelling across the board.
//!
//! A move is carried out one cell at a time. Every step produces a fresh board from the previous
//! one, so a rejected move never leaves a half-updated board behind; the caller's board is only
//! ever read.

use crate::board::Board;
use crate::direction::Direction;
use crate::error::RejectReason;
use crate::error::RejectReason::{Blocked, NoDisplacement, OutOfBounds, SelfRingLoss};
use crate::pieces::{Cell, Piece, Side};
use crate::rings::find_rings;
use crate::tiles::{Coords, WINDOW};
use tracing::{instrument, trace};

/// Move the piece centred on `center` `distance` cells in `direction` on behalf of `side`,
/// returning the resulting board.
///
/// The piece is assumed to have been checked already (ownership, distance limit). This function
/// enforces what can only be known by walking the path: the piece may not pass through stones
/// before its final step, and `side` must still have a ring after every step. Stones on the
/// final footprint are overwritten, which is how captures happen.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(
    board: &Board,
    center: Coords,
    direction: Direction,
    distance: u8,
    side: Side,
) -> Result<Board, RejectReason> {
    if distance == 0 {
        return Err(NoDisplacement);
    }
    if !center.is_valid_center() || !center.step(direction, distance).is_valid_center() {
        return Err(OutOfBounds);
    }
    let piece = Piece::extract(board, center);
    let mut current = board.clone();
    let mut at = center;
    for remaining in (1..=distance).rev() {
        current = step(&current, &piece, at, direction, remaining == 1)?;
        if !find_rings(&current).has(side) {
            trace!(%at, remaining, "step would leave mover without a ring");
            return Err(SelfRingLoss);
        }
        at = at.step(direction, 1);
    }
    Ok(current)
}

/// Advance the footprint centred on `at` by a single cell, writing `piece` into the new
/// footprint. Unless this is the `last` step, every cell the footprint enters must be empty.
pub fn step(
    board: &Board,
    piece: &Piece,
    at: Coords,
    direction: Direction,
    last: bool,
) -> Result<Board, RejectReason> {
    if !last
        && direction
            .leading_edge()
            .any(|(dx, dy)| !board.get(at.offset(dx, dy)).is_empty())
    {
        trace!(%at, %direction, "path blocked");
        return Err(Blocked);
    }
    let mut next = board.clone();
    let target = at.step(direction, 1);
    for (dx, dy) in WINDOW {
        next.set(target.offset(dx, dy), piece.get(dx, dy));
    }
    for (dx, dy) in direction.trailing_edge() {
        next.set(at.offset(dx, dy), Cell::Empty);
    }
    next.clear_border();
    Ok(next)
}
