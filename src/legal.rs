//! The legal-move set, as seen by the player to move.

use std::collections::BTreeSet;
use std::fmt;

use crate::point::Point;

/// What the player to move may (or must) do.
///
/// The variant tells the caller which situation the board is in; the points
/// inside are the moves that situation allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegalAction {
    /// An opponent group is in atari. Playing here captures it and wins.
    Win(Point),
    /// Two or more of the mover's liberties-in-atari cannot all be saved.
    /// Any of these points may still be played.
    Lose(BTreeSet<Point>),
    /// A single own group is in atari and this is its last liberty.
    MustPlay(Point),
    /// No atari on the board: any of these points is legal.
    Choices(BTreeSet<Point>),
}

impl LegalAction {
    /// Whether `point` is an allowed move.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            LegalAction::Win(p) | LegalAction::MustPlay(p) => *p == point,
            LegalAction::Lose(set) | LegalAction::Choices(set) => set.contains(&point),
        }
    }

    /// All allowed moves, in ascending order.
    pub fn points(&self) -> Vec<Point> {
        match self {
            LegalAction::Win(p) | LegalAction::MustPlay(p) => vec![*p],
            LegalAction::Lose(set) | LegalAction::Choices(set) => set.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LegalAction::Win(_) | LegalAction::MustPlay(_) => 1,
            LegalAction::Lose(set) | LegalAction::Choices(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_win(&self) -> bool {
        matches!(self, LegalAction::Win(_))
    }

    pub fn is_lose(&self) -> bool {
        matches!(self, LegalAction::Lose(_))
    }
}

impl fmt::Display for LegalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            LegalAction::Win(_) => "win",
            LegalAction::Lose(_) => "lose",
            LegalAction::MustPlay(_) => "must-play",
            LegalAction::Choices(_) => "choices",
        };
        write!(f, "{kind}:")?;
        for (row, col) in self.points() {
            write!(f, " ({row}, {col})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_by_kind() {
        assert!(LegalAction::Win((3, 3)).contains((3, 3)));
        assert!(!LegalAction::MustPlay((3, 3)).contains((3, 4)));

        let set: BTreeSet<Point> = [(1, 1), (2, 2)].into_iter().collect();
        assert!(LegalAction::Lose(set.clone()).contains((2, 2)));
        assert!(!LegalAction::Choices(set).contains((3, 3)));
    }

    #[test]
    fn test_points_are_sorted() {
        let set: BTreeSet<Point> = [(4, 1), (1, 9), (1, 2)].into_iter().collect();
        let action = LegalAction::Choices(set);
        assert_eq!(action.points(), vec![(1, 2), (1, 9), (4, 1)]);
        assert_eq!(action.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(LegalAction::Win((9, 10)).to_string(), "win: (9, 10)");
        assert_eq!(
            LegalAction::Choices(BTreeSet::new()).to_string(),
            "choices:"
        );
    }
}
