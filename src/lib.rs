mod board;
mod direction;
mod error;
pub mod game;
mod mover;
mod pieces;
pub mod play;
pub mod preset;
mod rings;
mod rules;
mod tiles;

pub use crate::{
    board::Board,
    direction::Direction,
    error::{
        IllegalMove,
        ParseError,
        RejectReason,
    },
    game::{
        logic::GameLogic,
        state::{
            GameState,
            GameStatus,
        },
        Game,
    },
    mover::apply_move,
    pieces::{
        Cell,
        Piece,
        Side,
    },
    play::Play,
    rings::{
        find_rings,
        RingPresence,
    },
    rules::Ruleset,
    tiles::{
        Coords,
        MAX_CENTER,
        MIN_CENTER,
        SIDE_LEN,
    },
};
