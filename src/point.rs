//! Board coordinates.
//!
//! A point is a plain `(row, col)` pair. Playable coordinates run from 1 to
//! `size - 1` on both axes; row 0 and column 0 are never used.

use crate::error::GoError;

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

/// Parse a coordinate such as `"10,10"`, `"(9, 11)"` or `"3 4"`.
///
/// Only the syntax is checked here. Whether the point lies on a given board
/// is decided by [`Board::is_on_board`](crate::board::Board::is_on_board).
pub fn parse_point(s: &str) -> Result<Point, GoError> {
    let inner = s
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let mut parts = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());

    let mut next = || -> Result<usize, GoError> {
        parts
            .next()
            .and_then(|p| p.parse::<usize>().ok())
            .ok_or_else(|| GoError::InvalidPoint(s.to_string()))
    };
    let row = next()?;
    let col = next()?;
    if parts.next().is_some() {
        return Err(GoError::InvalidPoint(s.to_string()));
    }
    Ok((row, col))
}

/// Format a point as `"row,col"`, the form accepted by [`parse_point`].
pub fn str_point(pt: Point) -> String {
    format!("{},{}", pt.0, pt.1)
}
