//! Error types for the rules engine.
//!
//! Two families of failures exist:
//! - [`MoveError`]: a rejected move. Recoverable, the board is unchanged.
//! - Everything else in [`GoError`]: caller mistakes (bad tokens, bad config)
//!   or broken board invariants. A board that returned `MissingLiberty`,
//!   `StaleGroup` or `Corrupted` must be discarded.

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::group::GroupId;
use crate::point::Point;

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Point lies outside the playable grid
    #[error("illegal move: {0:?} is off the board")]
    OffBoard(Point),
    /// Point is not empty
    #[error("illegal move: {0:?} is not empty")]
    Occupied(Point),
    /// Point is not part of the current legal-move set
    #[error("illegal move: {0:?} is not a legal action")]
    NotLegal(Point),
    /// Stone would have no liberties and captures nothing
    #[error("illegal move: {0:?} is suicide")]
    Suicide(Point),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid board size {0}: expected {}..={}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    InvalidSize(usize),

    #[error("invalid point: {0}")]
    InvalidPoint(String),

    #[error(transparent)]
    IllegalMove(#[from] MoveError),

    #[error("liberty {point:?} is not registered on group {group:?}")]
    MissingLiberty { group: GroupId, point: Point },

    #[error("group handle {0:?} does not refer to a live group")]
    StaleGroup(GroupId),

    #[error("board invariant violated: {0}")]
    Corrupted(String),
}

impl GoError {
    /// True for rejected moves, which leave the board untouched.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GoError::IllegalMove(_))
    }
}
