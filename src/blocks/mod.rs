/*
 *  A rules engine for the four-corner polyomino game on a 20x20 board.
 */

pub(crate) mod board;
pub mod consts;
pub mod coords;
pub mod game;
pub mod notation;
pub mod polyomino;
pub mod rejection;
pub mod sets;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, LegalMove},
        consts::*,
        coords::{self, *},
        game::{Action, Direction, GameSession, Phase, Placement, PassOutcome, ScoreLine, Selection},
        notation::*,
        polyomino::{PieceCatalog, PieceDefinition, Shape, Transform},
        rejection::Rejection,
        sets::*,
    };

    pub use super::sets::SetOps;
}
