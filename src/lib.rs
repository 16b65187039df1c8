//! Capture-Go: a rules engine for Go where the first capture wins.
//!
//! This crate is the state/rules layer behind a front end: it places stones,
//! tracks groups (chains) and their liberties incrementally, detects atari
//! and captures, and derives the legal-move set. Rendering, input handling
//! and networking live elsewhere and only call into [`board::Board`].
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and rendering characters
//! - [`color`] - Stone colors and the opponent lookup
//! - [`point`] - Coordinates and their text form
//! - [`group`] - Chains of stones and their liberties
//! - [`legal`] - The legal-move set as a tagged value
//! - [`board`] - The board state machine
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use capture_go::board::Board;
//! use capture_go::color::Color;
//! use capture_go::legal::LegalAction;
//!
//! let mut board = Board::new(Color::Black);
//! board.put_stone((10, 10), false).unwrap();
//! for pt in [(9, 10), (11, 10), (10, 9)] {
//!     board.put_stone(pt, false).unwrap();
//!     board.put_stone((1, pt.0), false).unwrap();
//! }
//! // The black stone is in atari and White to move can take it.
//! assert_eq!(board.get_legal_action(), LegalAction::Win((10, 11)));
//! ```

pub mod board;
pub mod color;
pub mod constants;
pub mod error;
pub mod group;
pub mod legal;
pub mod point;

pub use board::{Board, BoardConfig, MoveResult};
pub use color::{Color, opponent_color};
pub use error::{GoError, MoveError};
pub use group::{Group, GroupId};
pub use legal::LegalAction;
pub use point::Point;
