use crate::pieces::Side;

/// A set of rules for a game. The rules of the board geometry, captures and rings are fixed;
/// this struct holds the parts that vary between rule variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ruleset {
    /// How far a piece with a stone in its centre may travel in one move. Pieces with an empty
    /// centre may travel any distance.
    pub anchored_range: u8,
    /// Whether a piece may only travel in a direction in which its perimeter holds one of the
    /// mover's stones (eg, a piece can only move up-left if its top-left cell is one of the
    /// mover's stones).
    pub directional_stones: bool,
    /// The side that makes the first move.
    pub starting_side: Side,
}

impl Default for Ruleset {
    fn default() -> Self {
        crate::preset::rules::STANDARD
    }
}
