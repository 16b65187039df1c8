//! Constants for board dimensions and defaults.
//!
//! The board size is no longer a compile-time choice: every [`Board`] carries
//! its own [`BoardConfig`], and these values only provide the defaults.
//!
//! [`Board`]: crate::board::Board
//! [`BoardConfig`]: crate::board::BoardConfig

use crate::color::Color;

// =============================================================================
// Board Geometry
// =============================================================================

/// Default grid extent. Playable rows and columns are `1..DEFAULT_BOARD_SIZE`,
/// so the default board is 19x19.
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// Smallest accepted grid extent (a single playable point).
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest accepted grid extent. Keeps the per-point indexes small.
pub const MAX_BOARD_SIZE: usize = 64;

// =============================================================================
// Game Defaults
// =============================================================================

/// Color that moves first on a fresh board.
pub const DEFAULT_INITIAL_COLOR: Color = Color::Black;

/// Default cap on the number of moves in a self-play game.
pub const MAX_SELFPLAY_MOVES: usize = 1000;

// =============================================================================
// Rendering
// =============================================================================

/// Black stone in the text dump.
pub const STONE_BLACK: char = 'X';

/// White stone in the text dump.
pub const STONE_WHITE: char = 'O';

/// Empty point in the text dump.
pub const EMPTY: char = '.';
