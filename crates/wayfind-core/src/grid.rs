//! The obstacle grid and its start/end role assignments.
//!
//! [`Grid`] owns a fixed rows×cols array of [`Cell`]s plus the (at most one)
//! Start and End selections. Storing the roles on the grid rather than on
//! individual cells makes the "at most one of each, never on a wall"
//! invariant structural: there is nothing to scan and nothing to get out of
//! sync.

use crate::coord::Coord;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

/// A fixed-size 4-connected obstacle grid.
///
/// Cells are stored row-major. Mutation happens only through the explicit
/// toggle operations below; search engines read the grid and never change it.
/// `Grid` is `Clone` so a concurrent host can snapshot it per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Grid {
    /// Create an all-open grid with no roles assigned.
    ///
    /// Non-positive dimensions yield an empty grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); (rows * cols) as usize],
            start: None,
            end: None,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Convert a coordinate to its row-major flat index.
    ///
    /// Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }

    /// The current Start selection, if any.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The current End selection, if any.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Whether `c` is a wall. Out-of-bounds coordinates are not walls.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.idx(c).is_some_and(|i| self.cells[i] == Cell::Wall)
    }

    /// Whether `c` is the Start cell.
    #[inline]
    pub fn is_start(&self, c: Coord) -> bool {
        self.start == Some(c)
    }

    /// Whether `c` is the End cell.
    #[inline]
    pub fn is_end(&self, c: Coord) -> bool {
        self.end == Some(c)
    }

    /// Set or clear the wall flag at `c`.
    ///
    /// A cell currently holding the Start or End role is left untouched, as
    /// are out-of-bounds coordinates. Returns whether the change was applied.
    pub fn set_wall(&mut self, c: Coord, on: bool) -> bool {
        let Some(i) = self.idx(c) else {
            return false;
        };
        if self.start == Some(c) || self.end == Some(c) {
            return false;
        }
        self.cells[i] = if on { Cell::Wall } else { Cell::Open };
        true
    }

    /// Assign the Start role to `c`.
    ///
    /// Rejected (no state change, returns `false`) if `c` is out of bounds,
    /// a wall, the End cell, or Start is already assigned elsewhere. Roles
    /// move only via [`clear_roles`](Self::clear_roles) or
    /// [`reset`](Self::reset); re-assigning the current Start is a `true`
    /// no-op.
    pub fn set_start(&mut self, c: Coord) -> bool {
        if !self.contains(c) || self.is_wall(c) || self.end == Some(c) {
            return false;
        }
        match self.start {
            Some(cur) => cur == c,
            None => {
                self.start = Some(c);
                true
            }
        }
    }

    /// Assign the End role to `c`. Same rejection rules as
    /// [`set_start`](Self::set_start), with the roles swapped.
    pub fn set_end(&mut self, c: Coord) -> bool {
        if !self.contains(c) || self.is_wall(c) || self.start == Some(c) {
            return false;
        }
        match self.end {
            Some(cur) => cur == c,
            None => {
                self.end = Some(c);
                true
            }
        }
    }

    /// Clear the Start and End selections, leaving walls untouched.
    pub fn clear_roles(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Return the grid to its initial all-open, role-free state.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Open);
        self.start = None;
        self.end = None;
    }

    /// Append the passable 4-neighbours of `c` into `buf`: in-bounds,
    /// non-wall, in up/right/down/left order. The caller clears `buf`.
    pub fn push_neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.contains(n) && !self.is_wall(n) {
                buf.push(n);
            }
        }
    }

    /// Internal: place a wall during maze construction, bypassing role checks
    /// (the parser validates roles itself and never overlaps them).
    pub(crate) fn set_cell_raw(&mut self, i: usize, cell: Cell) {
        self.cells[i] = cell;
    }

    /// Internal: assign roles during maze construction.
    pub(crate) fn set_roles_raw(&mut self, start: Coord, end: Coord) {
        self.start = Some(start);
        self.end = Some(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_open() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        for i in 0..g.len() {
            assert!(!g.is_wall(g.coord(i)));
        }
    }

    #[test]
    fn idx_coord_round_trip() {
        let g = Grid::new(5, 7);
        let c = Coord::new(3, 2);
        let i = g.idx(c).unwrap();
        assert_eq!(i, 23);
        assert_eq!(g.coord(i), c);
        assert_eq!(g.idx(Coord::new(5, 0)), None);
        assert_eq!(g.idx(Coord::new(0, -1)), None);
    }

    #[test]
    fn wall_toggle() {
        let mut g = Grid::new(3, 3);
        let c = Coord::new(1, 1);
        assert!(g.set_wall(c, true));
        assert!(g.is_wall(c));
        assert!(g.set_wall(c, false));
        assert!(!g.is_wall(c));
        // Out of bounds is a rejected no-op.
        assert!(!g.set_wall(Coord::new(9, 9), true));
    }

    #[test]
    fn wall_rejected_on_roles() {
        let mut g = Grid::new(3, 3);
        assert!(g.set_start(Coord::new(0, 0)));
        assert!(g.set_end(Coord::new(2, 2)));
        assert!(!g.set_wall(Coord::new(0, 0), true));
        assert!(!g.set_wall(Coord::new(2, 2), true));
        assert!(!g.is_wall(Coord::new(0, 0)));
        assert!(!g.is_wall(Coord::new(2, 2)));
    }

    #[test]
    fn roles_rejected_on_walls_and_duplicates() {
        let mut g = Grid::new(3, 3);
        g.set_wall(Coord::new(1, 1), true);
        assert!(!g.set_start(Coord::new(1, 1)));

        assert!(g.set_start(Coord::new(0, 0)));
        // Start already assigned elsewhere: must clear first.
        assert!(!g.set_start(Coord::new(0, 1)));
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        // Re-asserting the same assignment is fine.
        assert!(g.set_start(Coord::new(0, 0)));

        // End may not land on Start.
        assert!(!g.set_end(Coord::new(0, 0)));
        assert!(g.set_end(Coord::new(2, 2)));
        assert!(!g.set_start(Coord::new(2, 2)));
    }

    #[test]
    fn clear_roles_keeps_walls() {
        let mut g = Grid::new(3, 3);
        g.set_wall(Coord::new(1, 0), true);
        g.set_start(Coord::new(0, 0));
        g.set_end(Coord::new(2, 2));
        g.clear_roles();
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert!(g.is_wall(Coord::new(1, 0)));
        // Roles can now be assigned anew.
        assert!(g.set_start(Coord::new(2, 2)));
    }

    #[test]
    fn reset_clears_everything() {
        let mut g = Grid::new(3, 3);
        g.set_wall(Coord::new(1, 0), true);
        g.set_start(Coord::new(0, 0));
        g.set_end(Coord::new(2, 2));
        g.reset();
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert!(!g.is_wall(Coord::new(1, 0)));
        assert_eq!(g, Grid::new(3, 3));
    }

    #[test]
    fn neighbors_filter_bounds_and_walls() {
        let mut g = Grid::new(3, 3);
        g.set_wall(Coord::new(0, 1), true);
        let mut buf = Vec::new();
        g.push_neighbors(Coord::new(0, 0), &mut buf);
        // Up and left are out of bounds, right is a wall; only down remains.
        assert_eq!(buf, vec![Coord::new(1, 0)]);

        buf.clear();
        g.push_neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Coord::new(1, 2), Coord::new(2, 1), Coord::new(1, 0)]
        );
    }
}
