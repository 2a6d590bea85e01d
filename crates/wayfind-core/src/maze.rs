//! Maze text parsing.
//!
//! A maze is given as rows of single-character tokens: `1` wall, `0` open,
//! `A` start and `B` end (exactly one of each). Parsing validates the whole
//! input before a [`Grid`] is returned; no partial grid escapes on error.

use std::fmt;

use crate::coord::Coord;
use crate::grid::{Cell, Grid};

impl Grid {
    /// Build a grid from maze text.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines; every line must have the same width.
    pub fn from_maze(s: &str) -> Result<Grid, MazeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MazeError::Empty);
        }

        let lines: Vec<&str> = s.split('\n').collect();
        let rows = lines.len() as i32;
        let cols = lines[0].chars().count() as i32;

        let mut grid = Grid::new(rows, cols);
        let mut start: Option<Coord> = None;
        let mut end: Option<Coord> = None;

        for (r, line) in lines.iter().enumerate() {
            let mut c: i32 = 0;
            for ch in line.chars() {
                let at = Coord::new(r as i32, c);
                if c >= cols {
                    return Err(MazeError::InconsistentWidth { row: r as i32 });
                }
                let i = (at.row * cols + at.col) as usize;
                match ch {
                    '1' => grid.set_cell_raw(i, Cell::Wall),
                    '0' => {}
                    'A' => {
                        if let Some(prev) = start {
                            return Err(MazeError::DuplicateStart { first: prev, second: at });
                        }
                        start = Some(at);
                    }
                    'B' => {
                        if let Some(prev) = end {
                            return Err(MazeError::DuplicateEnd { first: prev, second: at });
                        }
                        end = Some(at);
                    }
                    _ => return Err(MazeError::InvalidToken { ch, at }),
                }
                c += 1;
            }
            if c != cols {
                return Err(MazeError::InconsistentWidth { row: r as i32 });
            }
        }

        let Some(start) = start else {
            return Err(MazeError::MissingStart);
        };
        let Some(end) = end else {
            return Err(MazeError::MissingEnd);
        };
        grid.set_roles_raw(start, end);
        Ok(grid)
    }
}

/// Errors that can occur when parsing maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The input was empty (or whitespace only).
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth { row: i32 },
    /// A character outside the `1`/`0`/`A`/`B` token set was found.
    InvalidToken { ch: char, at: Coord },
    /// No `A` marker present.
    MissingStart,
    /// No `B` marker present.
    MissingEnd,
    /// More than one `A` marker present.
    DuplicateStart { first: Coord, second: Coord },
    /// More than one `B` marker present.
    DuplicateEnd { first: Coord, second: Coord },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty input"),
            Self::InconsistentWidth { row } => {
                write!(f, "maze: line {row} has a different width than line 0")
            }
            Self::InvalidToken { ch, at } => {
                write!(f, "maze: invalid token \u{201c}{ch}\u{201d} at {at}")
            }
            Self::MissingStart => write!(f, "maze: no start marker (A)"),
            Self::MissingEnd => write!(f, "maze: no end marker (B)"),
            Self::DuplicateStart { first, second } => {
                write!(f, "maze: start marker (A) at both {first} and {second}")
            }
            Self::DuplicateEnd { first, second } => {
                write!(f, "maze: end marker (B) at both {first} and {second}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
