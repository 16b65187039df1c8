//! Board state machine.
//!
//! The board owns every [`Group`] in an arena addressed by [`GroupId`] and
//! keeps three per-color indexes in sync with them:
//! - the stone index (point → owning group),
//! - the liberty index (point → groups that have the point as a liberty),
//! - the group list (live groups in creation order).
//!
//! On top of that it tracks the endangered set (groups in atari), whose turn
//! it is, and the winner. [`Board::put_stone`] is the only mutating entry
//! point; everything else is a query.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info, warn};

use crate::color::Color;
use crate::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_INITIAL_COLOR, EMPTY, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STONE_BLACK,
    STONE_WHITE,
};
use crate::error::{GoError, MoveError};
use crate::group::{Group, GroupId};
use crate::legal::LegalAction;
use crate::point::Point;

/// Construction-time settings of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Grid extent. Playable coordinates are `1..size` on both axes.
    pub size: usize,
    /// Color that moves first.
    pub initial_color: Color,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            initial_color: DEFAULT_INITIAL_COLOR,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), GoError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(GoError::InvalidSize(self.size))
        }
    }
}

/// What a successful [`Board::put_stone`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// Stones removed from the board by this move
    pub captured_stones: usize,
    /// Winner after this move, if the game is decided
    pub winner: Option<Color>,
    /// The move left the mover's own group without liberties
    pub self_capture: bool,
    /// This move set the winner; later moves leave it `false`
    pub decisive: bool,
}

#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    next: Color,
    winner: Option<Color>,
    /// Group arena; dead slots are `None` and never reused
    arena: Vec<Option<Group>>,
    stone_index: [Vec<Option<GroupId>>; 2],
    liberty_index: [Vec<BTreeSet<GroupId>>; 2],
    group_list: [Vec<GroupId>; 2],
    endangered: BTreeSet<GroupId>,
    removed_group: Option<Group>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_COLOR)
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl Board {
    /// An empty board of the default size.
    pub fn new(initial_color: Color) -> Self {
        Self::empty(BoardConfig {
            initial_color,
            ..BoardConfig::default()
        })
    }

    pub fn with_config(config: BoardConfig) -> Result<Self, GoError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: BoardConfig) -> Self {
        let area = config.size * config.size;
        Self {
            config,
            next: config.initial_color,
            winner: None,
            arena: Vec::new(),
            stone_index: [vec![None; area], vec![None; area]],
            liberty_index: [vec![BTreeSet::new(); area], vec![BTreeSet::new(); area]],
            group_list: [Vec::new(), Vec::new()],
            endangered: BTreeSet::new(),
            removed_group: None,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn next_to_move(&self) -> Color {
        self.next
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// The group whose capture decided the game. Captures after the game
    /// is decided do not replace it.
    pub fn removed_group(&self) -> Option<&Group> {
        self.removed_group.as_ref()
    }

    pub fn is_on_board(&self, (row, col): Point) -> bool {
        let range = 1..self.config.size;
        range.contains(&row) && range.contains(&col)
    }

    #[inline]
    fn idx(&self, (row, col): Point) -> usize {
        row * self.config.size + col
    }

    /// Orthogonal neighbors inside the playable area (up, down, left, right).
    pub fn neighbors(&self, (row, col): Point) -> Vec<Point> {
        let s = self.config.size;
        let mut v = Vec::with_capacity(4);
        if row > 1 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 1 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v
    }

    pub fn group_id_at(&self, point: Point) -> Option<GroupId> {
        if !self.is_on_board(point) {
            return None;
        }
        let i = self.idx(point);
        self.stone_index[0][i].or(self.stone_index[1][i])
    }

    pub fn group_at(&self, point: Point) -> Option<&Group> {
        self.group_id_at(point).and_then(|id| self.group(id))
    }

    pub fn stone_at(&self, point: Point) -> Option<Color> {
        self.group_at(point).map(Group::color)
    }

    /// True if `point` holds a stone of either color.
    pub fn search(&self, point: Point) -> bool {
        self.group_id_at(point).is_some()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.arena.get(id.0).and_then(Option::as_ref)
    }

    /// Live groups of one color, oldest first.
    pub fn groups(&self, color: Color) -> impl Iterator<Item = (GroupId, &Group)> + '_ {
        self.group_list[color.index()]
            .iter()
            .filter_map(|&id| self.group(id).map(|g| (id, g)))
    }

    /// Groups of both colors with exactly one liberty, by handle.
    pub fn endangered(&self) -> impl Iterator<Item = (GroupId, &Group)> + '_ {
        self.endangered
            .iter()
            .filter_map(|&id| self.group(id).map(|g| (id, g)))
    }

    pub fn is_endangered(&self, id: GroupId) -> bool {
        self.endangered.contains(&id)
    }

    /// Groups of `color` that currently count `point` as a liberty.
    pub fn groups_with_liberty(&self, point: Point, color: Color) -> Vec<GroupId> {
        if !self.is_on_board(point) {
            return Vec::new();
        }
        self.liberty_index[color.index()][self.idx(point)]
            .iter()
            .copied()
            .collect()
    }

    /// Empty orthogonal neighbors of `point`.
    pub fn liberties_of(&self, point: Point) -> BTreeSet<Point> {
        self.neighbors(point)
            .into_iter()
            .filter(|&n| !self.search(n))
            .collect()
    }

    pub fn empty_points(&self) -> BTreeSet<Point> {
        let s = self.config.size;
        (1..s)
            .flat_map(|row| (1..s).map(move |col| (row, col)))
            .filter(|&pt| !self.search(pt))
            .collect()
    }

    /// Whether the player to move would be left without liberties at
    /// `point` and capture nothing.
    pub fn is_suicide(&self, point: Point) -> bool {
        if !self.liberties_of(point).is_empty() {
            return false;
        }
        let mover = self.next;
        for n in self.neighbors(point) {
            if let Some(g) = self.group_at(n) {
                // A friend with another liberty keeps the new stone alive;
                // an enemy on its last liberty gets captured.
                if g.color() == mover && g.num_liberty() > 1 {
                    return false;
                }
                if g.color() != mover && g.num_liberty() == 1 {
                    return false;
                }
            }
        }
        true
    }

    /// The legal-move set for the player to move.
    ///
    /// When several enemy groups are in atari, `Win` carries the smallest of
    /// their liberties so the answer does not depend on iteration order.
    pub fn get_legal_action(&self) -> LegalAction {
        let mover = self.next;
        let mut win: Option<Point> = None;
        let mut own = BTreeSet::new();

        for (_, group) in self.endangered() {
            if group.color() == mover {
                own.extend(group.liberties().iter().copied());
            } else if let Some(&lib) = group.liberties().first() {
                win = Some(win.map_or(lib, |w| w.min(lib)));
            }
        }

        if let Some(point) = win {
            return LegalAction::Win(point);
        }
        if own.len() > 1 {
            return LegalAction::Lose(own);
        }
        if let Some(&point) = own.first() {
            return LegalAction::MustPlay(point);
        }

        let mut choices: BTreeSet<Point> = self
            .groups(mover.opponent())
            .flat_map(|(_, g)| g.liberties().iter().copied())
            .collect();
        if choices.is_empty() {
            // Nothing to attack yet, e.g. the opening move.
            choices = self.empty_points();
        }
        LegalAction::Choices(choices)
    }

    /// A uniformly random legal move, preferring moves that are not suicide.
    pub fn random_move(&self, rng: &mut fastrand::Rng) -> Option<Point> {
        let action = self.get_legal_action();
        if let LegalAction::Win(point) = action {
            return Some(point);
        }
        let points = action.points();
        let safe: Vec<Point> = points
            .iter()
            .copied()
            .filter(|&p| !self.is_suicide(p))
            .collect();
        let pool = if safe.is_empty() { &points } else { &safe };
        if pool.is_empty() {
            None
        } else {
            Some(pool[rng.usize(..pool.len())])
        }
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Place a stone for the player to move.
    ///
    /// Off-board and occupied points are always rejected. With `check_legal`
    /// the point must also be in [`get_legal_action`](Self::get_legal_action)
    /// and must not be suicide. A rejected move returns
    /// [`GoError::IllegalMove`] and leaves the board unchanged.
    ///
    /// Capturing an enemy group ends the game in the mover's favor. A move
    /// that leaves the mover's own group without liberties (only reachable
    /// without `check_legal`) removes that group and hands the win to the
    /// opponent.
    pub fn put_stone(&mut self, point: Point, check_legal: bool) -> Result<MoveResult, GoError> {
        let mover = self.next;
        if !self.is_on_board(point) {
            return Err(self.reject(MoveError::OffBoard(point)));
        }
        if self.search(point) {
            return Err(self.reject(MoveError::Occupied(point)));
        }
        if check_legal {
            if !self.get_legal_action().contains(point) {
                return Err(self.reject(MoveError::NotLegal(point)));
            }
            if self.is_suicide(point) {
                return Err(self.reject(MoveError::Suicide(point)));
            }
        }

        let i = self.idx(point);
        let own_touching: Vec<GroupId> = self.liberty_index[mover.index()][i]
            .iter()
            .copied()
            .collect();

        // Capture pass: nobody keeps `point` as a liberty.
        let mut captured = Vec::new();
        for color in Color::ALL {
            let touching = std::mem::take(&mut self.liberty_index[color.index()][i]);
            for id in touching {
                let group = self.group_mut(id)?;
                group.remove_liberty(id, point)?;
                if group.num_liberty() == 0 && group.color() != mover {
                    captured.push(id);
                }
                self.refresh_endangered(id)?;
            }
        }

        // Only the first capture of the game decides it.
        let decided = self.winner.is_some();
        let mut result = MoveResult::default();
        for id in captured {
            let group = self.remove_group(id)?;
            info!(group = %id, stones = group.len(), by = %mover, "group captured");
            result.captured_stones += group.len();
            self.release_stones(&group)?;
            if !decided {
                self.removed_group = Some(group);
                self.winner = Some(mover);
            }
        }

        let placed = match own_touching.as_slice() {
            [] => self.create_group(point, mover),
            [id] => {
                self.extend_group(*id, point)?;
                *id
            }
            ids => self.merge_groups(ids, point)?,
        };

        if self.group_ref(placed)?.num_liberty() == 0 {
            let group = self.remove_group(placed)?;
            warn!(group = %placed, stones = group.len(), color = %mover, "self-capture");
            self.release_stones(&group)?;
            if !decided {
                self.removed_group = Some(group);
                self.winner = Some(mover.opponent());
            }
            result.self_capture = true;
        }

        self.next = mover.opponent();
        result.winner = self.winner;
        result.decisive = !decided && self.winner.is_some();
        if let (true, Some(winner)) = (result.decisive, self.winner) {
            info!(%winner, "game decided");
        }
        Ok(result)
    }

    /// A copy of this board with `point` played (no legality check).
    pub fn generate_successor_state(&self, point: Point) -> Result<Board, GoError> {
        let mut board = self.copy();
        board.put_stone(point, false)?;
        Ok(board)
    }

    /// Deep copy: every group is cloned and both indexes are rebuilt from
    /// the clones. Group handles keep their values in the copy.
    pub fn copy(&self) -> Board {
        let mut board = Board::empty(self.config);
        board.next = self.next;
        board.winner = self.winner;
        board.removed_group = self.removed_group.clone();
        board.arena = vec![None; self.arena.len()];
        for color in Color::ALL {
            for (id, group) in self.groups(color) {
                board.register(id, group.clone());
            }
        }
        board
    }

    fn reject(&self, err: MoveError) -> GoError {
        warn!(next = %self.next, "{err}");
        err.into()
    }

    // =========================================================================
    // Group bookkeeping
    // =========================================================================

    fn group_ref(&self, id: GroupId) -> Result<&Group, GoError> {
        self.group(id).ok_or(GoError::StaleGroup(id))
    }

    fn group_mut(&mut self, id: GroupId) -> Result<&mut Group, GoError> {
        self.arena
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(GoError::StaleGroup(id))
    }

    fn refresh_endangered(&mut self, id: GroupId) -> Result<(), GoError> {
        if self.group_ref(id)?.is_endangered() {
            self.endangered.insert(id);
        } else {
            self.endangered.remove(&id);
        }
        Ok(())
    }

    /// Store `group` under `id` and index its stones and liberties.
    fn register(&mut self, id: GroupId, group: Group) {
        let c = group.color().index();
        for &stone in group.stones() {
            let i = self.idx(stone);
            self.stone_index[c][i] = Some(id);
        }
        for &lib in group.liberties() {
            let i = self.idx(lib);
            self.liberty_index[c][i].insert(id);
        }
        if group.is_endangered() {
            self.endangered.insert(id);
        }
        self.group_list[c].push(id);
        self.arena[id.0] = Some(group);
    }

    fn create_group(&mut self, point: Point, color: Color) -> GroupId {
        let id = GroupId(self.arena.len());
        self.arena.push(None);
        let liberties = self.liberties_of(point);
        self.register(id, Group::new(color, point, liberties));
        debug!(group = %id, %color, ?point, "group created");
        id
    }

    /// Add the stone at `point` to group `id` and take over its liberties.
    fn extend_group(&mut self, id: GroupId, point: Point) -> Result<(), GoError> {
        let c = self.group_ref(id)?.color().index();
        let i = self.idx(point);
        self.stone_index[c][i] = Some(id);

        let candidates = self.liberties_of(point);
        let group = self.group_mut(id)?;
        group.add_stone(point);
        let gained: Vec<Point> = candidates
            .into_iter()
            .filter(|&lib| group.add_liberty(lib))
            .collect();
        for lib in gained {
            let li = self.idx(lib);
            self.liberty_index[c][li].insert(id);
        }
        self.refresh_endangered(id)?;
        debug!(group = %id, ?point, "group extended");
        Ok(())
    }

    /// Join every group in `ids` through the stone at `point`. The first
    /// (oldest) handle survives; the others die.
    fn merge_groups(&mut self, ids: &[GroupId], point: Point) -> Result<GroupId, GoError> {
        let (&survivor, absorbed) = ids
            .split_first()
            .ok_or_else(|| GoError::Corrupted(format!("merge at {point:?} without groups")))?;
        self.extend_group(survivor, point)?;

        for &id in absorbed {
            let group = self.remove_group(id)?;
            let c = group.color().index();
            for &stone in group.stones() {
                let i = self.idx(stone);
                self.stone_index[c][i] = Some(survivor);
            }
            for &lib in group.liberties() {
                let i = self.idx(lib);
                self.liberty_index[c][i].insert(survivor);
            }
            self.group_mut(survivor)?.absorb(group, point);
        }

        self.refresh_endangered(survivor)?;
        debug!(group = %survivor, merged = absorbed.len() + 1, ?point, "groups merged");
        Ok(survivor)
    }

    /// Take a group out of the arena and every index.
    fn remove_group(&mut self, id: GroupId) -> Result<Group, GoError> {
        let group = self
            .arena
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GoError::StaleGroup(id))?;
        let c = group.color().index();
        self.group_list[c].retain(|&g| g != id);
        self.endangered.remove(&id);
        for &stone in group.stones() {
            let i = self.idx(stone);
            if self.stone_index[c][i] == Some(id) {
                self.stone_index[c][i] = None;
            }
        }
        for &lib in group.liberties() {
            let i = self.idx(lib);
            self.liberty_index[c][i].remove(&id);
        }
        Ok(group)
    }

    /// Hand the points of a removed group back to its neighbors as liberties.
    fn release_stones(&mut self, group: &Group) -> Result<(), GoError> {
        for &stone in group.stones() {
            for n in self.neighbors(stone) {
                let Some(id) = self.group_id_at(n) else {
                    continue;
                };
                let neighbor = self.group_mut(id)?;
                if neighbor.add_liberty(stone) {
                    let c = neighbor.color().index();
                    let i = self.idx(stone);
                    self.liberty_index[c][i].insert(id);
                }
                self.refresh_endangered(id)?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Consistency
    // =========================================================================

    /// Check that the groups and every index agree.
    ///
    /// Returns [`GoError::Corrupted`] describing the first mismatch found.
    pub fn validate(&self) -> Result<(), GoError> {
        let s = self.config.size;
        for color in Color::ALL {
            let c = color.index();
            let other = color.opponent().index();

            for &id in &self.group_list[c] {
                let Some(group) = self.group(id) else {
                    return Err(GoError::Corrupted(format!(
                        "{color} group list holds dead handle {id}"
                    )));
                };
                if group.color() != color {
                    return Err(GoError::Corrupted(format!(
                        "group {id} is {} but listed under {color}",
                        group.color()
                    )));
                }
                if group.num_liberty() == 0 {
                    return Err(GoError::Corrupted(format!("group {id} has no liberties")));
                }
                if group.is_endangered() != self.endangered.contains(&id) {
                    return Err(GoError::Corrupted(format!(
                        "group {id} with {} liberties has wrong endangered status",
                        group.num_liberty()
                    )));
                }
                for &stone in group.stones() {
                    let i = self.idx(stone);
                    if self.stone_index[c][i] != Some(id) || self.stone_index[other][i].is_some() {
                        return Err(GoError::Corrupted(format!(
                            "stone {stone:?} of group {id} is not indexed to it alone"
                        )));
                    }
                }
                let expected: BTreeSet<Point> = group
                    .stones()
                    .iter()
                    .flat_map(|&stone| self.neighbors(stone))
                    .filter(|&n| !self.search(n))
                    .collect();
                if &expected != group.liberties() {
                    return Err(GoError::Corrupted(format!(
                        "group {id} has liberties {:?}, expected {expected:?}",
                        group.liberties()
                    )));
                }
                for &lib in group.liberties() {
                    if !self.liberty_index[c][self.idx(lib)].contains(&id) {
                        return Err(GoError::Corrupted(format!(
                            "liberty {lib:?} of group {id} missing from the index"
                        )));
                    }
                }
            }

            for (i, ids) in self.liberty_index[c].iter().enumerate() {
                let point = (i / s, i % s);
                for &id in ids {
                    match self.group(id) {
                        Some(g) if g.color() == color && g.has_liberty(point) => {}
                        _ => {
                            return Err(GoError::Corrupted(format!(
                                "liberty index of {color} at {point:?} lists {id} wrongly"
                            )));
                        }
                    }
                }
            }

            for (i, slot) in self.stone_index[c].iter().enumerate() {
                let point = (i / s, i % s);
                if let Some(id) = *slot {
                    match self.group(id) {
                        Some(g) if g.color() == color && g.contains(point) => {}
                        _ => {
                            return Err(GoError::Corrupted(format!(
                                "stone index of {color} at {point:?} lists {id} wrongly"
                            )));
                        }
                    }
                }
            }
        }

        for &id in &self.endangered {
            if !self.group(id).is_some_and(Group::is_endangered) {
                return Err(GoError::Corrupted(format!(
                    "endangered set holds {id} which is not in atari"
                )));
            }
        }
        Ok(())
    }
}

/// Diagnostic dump: side to move, winner, the grid, every group with its
/// liberties, and the endangered groups. The layout is not stable.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "next: {}", self.next)?;
        match self.winner {
            Some(winner) => writeln!(f, "winner: {winner}")?,
            None => writeln!(f, "winner: none")?,
        }

        let s = self.config.size;
        write!(f, "   ")?;
        for col in 1..s {
            write!(f, "{} ", col % 10)?;
        }
        writeln!(f)?;
        for row in 1..s {
            write!(f, "{row:>2} ")?;
            for col in 1..s {
                let ch = match self.stone_at((row, col)) {
                    Some(Color::Black) => STONE_BLACK,
                    Some(Color::White) => STONE_WHITE,
                    None => EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "groups:")?;
        for color in Color::ALL {
            for (id, group) in self.groups(color) {
                write!(f, "  {id} {group} liberties:")?;
                for (row, col) in group.liberties() {
                    write!(f, " ({row}, {col})")?;
                }
                writeln!(f)?;
            }
        }

        write!(f, "endangered:")?;
        for id in &self.endangered {
            write!(f, " {id}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[Point]) {
        for &pt in moves {
            board
                .put_stone(pt, false)
                .unwrap_or_else(|e| panic!("move {pt:?} failed: {e}"));
        }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new(Color::White);
        assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
        assert_eq!(board.next_to_move(), Color::White);
        assert_eq!(board.winner(), None);
        assert_eq!(board.groups(Color::Black).count(), 0);
        assert_eq!(board.empty_points().len(), 19 * 19);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_size() {
        for size in [0, 1, MAX_BOARD_SIZE + 1] {
            let config = BoardConfig {
                size,
                ..BoardConfig::default()
            };
            assert_eq!(
                Board::with_config(config).unwrap_err(),
                GoError::InvalidSize(size)
            );
        }
    }

    #[test]
    fn test_neighbors_are_clipped() {
        let board = Board::with_config(BoardConfig {
            size: 6,
            ..BoardConfig::default()
        })
        .unwrap();
        assert_eq!(board.neighbors((1, 1)), vec![(2, 1), (1, 2)]);
        assert_eq!(board.neighbors((5, 5)), vec![(4, 5), (5, 4)]);
        assert_eq!(board.neighbors((3, 3)).len(), 4);
    }

    #[test]
    fn test_liberties_of_ignores_both_colors() {
        let mut board = Board::default();
        play(&mut board, &[(5, 5), (5, 6)]);
        let libs = board.liberties_of((4, 6));
        assert_eq!(libs, [(3, 6), (4, 5), (4, 7)].into_iter().collect());
    }

    #[test]
    fn test_extend_registers_new_liberties() {
        let mut board = Board::default();
        play(&mut board, &[(5, 5), (1, 1), (5, 6)]);
        let id = board.group_id_at((5, 5)).unwrap();
        assert_eq!(board.group_id_at((5, 6)), Some(id));
        assert_eq!(board.group(id).unwrap().num_liberty(), 6);
        assert_eq!(board.groups_with_liberty((5, 7), Color::Black), vec![id]);
        assert!(board.groups_with_liberty((5, 6), Color::Black).is_empty());
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_merge_keeps_oldest_handle() {
        let mut board = Board::default();
        // Black (5,5) and (5,7), joined by (5,6).
        play(&mut board, &[(5, 5), (1, 1), (5, 7), (1, 3), (5, 6)]);
        let id = board.group_id_at((5, 6)).unwrap();
        assert_eq!(board.group_id_at((5, 5)), Some(id));
        assert_eq!(board.group_id_at((5, 7)), Some(id));
        assert_eq!(board.groups(Color::Black).count(), 1);
        assert_eq!(board.groups(Color::Black).next().unwrap().0, id);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_missing_liberty_is_reported() {
        let mut board = Board::default();
        play(&mut board, &[(5, 5)]);
        let id = board.group_id_at((5, 5)).unwrap();
        // Corrupt the group behind the index's back.
        board.group_mut(id).unwrap().remove_liberty(id, (4, 5)).unwrap();
        assert!(board.validate().is_err());

        let err = board.put_stone((4, 5), false).unwrap_err();
        assert_eq!(
            err,
            GoError::MissingLiberty {
                group: id,
                point: (4, 5)
            }
        );
        assert!(!err.is_illegal_move());
    }

    #[test]
    fn test_validate_catches_stale_liberty_entry() {
        let mut board = Board::default();
        play(&mut board, &[(5, 5)]);
        let id = board.group_id_at((5, 5)).unwrap();
        let i = board.idx((9, 9));
        board.liberty_index[Color::Black.index()][i].insert(id);
        assert!(matches!(board.validate(), Err(GoError::Corrupted(_))));
    }

    #[test]
    fn test_display_dump() {
        let mut board = Board::with_config(BoardConfig {
            size: 4,
            ..BoardConfig::default()
        })
        .unwrap();
        play(&mut board, &[(1, 1), (3, 3)]);
        let dump = board.to_string();
        assert!(dump.starts_with("next: BLACK\nwinner: none\n"));
        assert!(dump.contains(" 1 X . . \n"));
        assert!(dump.contains(" 3 . . O \n"));
        assert!(dump.contains("#0 BLACK - (1, 1) liberties: (1, 2) (2, 1)"));
        assert!(dump.ends_with("endangered:\n"));
    }
}
