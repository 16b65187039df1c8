//! Groups (chains) of connected same-color stones.
//!
//! A [`Group`] only knows its own stones and liberties. The board owns every
//! group in an arena and refers to them by [`GroupId`]; the per-point indexes
//! store handles, never references, so groups can be merged and removed
//! without aliasing concerns.

use std::collections::BTreeSet;
use std::fmt;

use crate::color::Color;
use crate::error::GoError;
use crate::point::Point;

/// Stable handle of a group inside one board.
///
/// Handles are handed out in creation order and never reused, so two handles
/// compare equal exactly when they name the same group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A chain of same-color stones and the empty points around it.
///
/// `Group` deliberately has no `PartialEq`: identity is the [`GroupId`].
#[derive(Clone, Debug)]
pub struct Group {
    color: Color,
    /// Stones in the order they joined the group
    stones: Vec<Point>,
    /// Empty points adjacent to any stone, never overlapping `stones`
    liberties: BTreeSet<Point>,
}

impl Group {
    /// A single-stone group with its initial liberties.
    pub fn new(color: Color, point: Point, liberties: BTreeSet<Point>) -> Self {
        Self {
            color,
            stones: vec![point],
            liberties,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    #[inline]
    pub fn liberties(&self) -> &BTreeSet<Point> {
        &self.liberties
    }

    #[inline]
    pub fn num_liberty(&self) -> usize {
        self.liberties.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// True when exactly one liberty is left (atari).
    #[inline]
    pub fn is_endangered(&self) -> bool {
        self.liberties.len() == 1
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    pub fn has_liberty(&self, point: Point) -> bool {
        self.liberties.contains(&point)
    }

    /// Append a stone without touching liberties.
    pub(crate) fn add_stone(&mut self, point: Point) {
        debug_assert!(!self.stones.contains(&point), "stone {point:?} added twice");
        self.stones.push(point);
    }

    /// Add a liberty. Returns `true` if it was not already present.
    pub(crate) fn add_liberty(&mut self, point: Point) -> bool {
        self.liberties.insert(point)
    }

    /// Remove a liberty that must be present.
    ///
    /// A missing liberty means the board's liberty index and this group have
    /// drifted apart, so it is reported instead of ignored.
    pub(crate) fn remove_liberty(&mut self, id: GroupId, point: Point) -> Result<(), GoError> {
        if self.liberties.remove(&point) {
            Ok(())
        } else {
            Err(GoError::MissingLiberty { group: id, point })
        }
    }

    /// Move all stones and liberties of `other` into this group, then drop
    /// `occupied` from the liberty set.
    pub(crate) fn absorb(&mut self, other: Group, occupied: Point) {
        debug_assert_eq!(self.color, other.color);
        self.stones.extend(other.stones);
        self.liberties.extend(other.liberties);
        self.liberties.remove(&occupied);
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.color)?;
        for (i, (row, col)) in self.stones.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({row}, {col})")?;
        }
        Ok(())
    }
}
