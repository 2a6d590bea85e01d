//! The interactive search session.

use std::fmt;

use wayfind_core::{Coord, Grid, MazeError};
use wayfind_search::{SearchResult, Searcher};

/// The three interchangeable search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// All algorithms, in display order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dijkstra, Self::AStar];

    fn index(self) -> usize {
        match self {
            Self::Bfs => 0,
            Self::Dijkstra => 1,
            Self::AStar => 2,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        })
    }
}

/// Owns the grid, the start/end selection and the per-algorithm results.
///
/// The session dispatches one engine run at a time against the grid it owns;
/// engines only ever read the grid. Every mutation clears the cached results,
/// so stale paths never survive a grid change.
pub struct Session {
    grid: Grid,
    searcher: Searcher,
    results: [Option<SearchResult>; 3],
}

impl Session {
    /// Create a session over an all-open grid with no selection.
    pub fn new(rows: i32, cols: i32) -> Self {
        let grid = Grid::new(rows, cols);
        let searcher = Searcher::new(grid.rows(), grid.cols());
        Self {
            grid,
            searcher,
            results: [None, None, None],
        }
    }

    /// Create a session from maze text (`1`/`0`/`A`/`B`).
    pub fn from_maze(s: &str) -> Result<Self, MazeError> {
        let grid = Grid::from_maze(s)?;
        let searcher = Searcher::new(grid.rows(), grid.cols());
        Ok(Self {
            grid,
            searcher,
            results: [None, None, None],
        })
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Apply a selection event at `c`.
    ///
    /// One-way assignment policy: the first selection sets Start, the second
    /// sets End, every further selection toggles a wall. Selections on the
    /// assigned Start/End cells do nothing; roles move only via
    /// [`clear_roles`](Self::clear_roles) or [`reset`](Self::reset).
    pub fn select(&mut self, c: Coord) {
        if self.grid.start().is_none() && !self.grid.is_wall(c) {
            self.grid.set_start(c);
        } else if self.grid.end().is_none() && !self.grid.is_wall(c) && !self.grid.is_start(c) {
            self.grid.set_end(c);
        } else if !self.grid.is_start(c) && !self.grid.is_end(c) {
            self.grid.set_wall(c, !self.grid.is_wall(c));
        }
        self.clear_results();
    }

    /// Set or clear a wall. Clears cached results.
    pub fn set_wall(&mut self, c: Coord, on: bool) -> bool {
        self.clear_results();
        self.grid.set_wall(c, on)
    }

    /// Assign the Start role. Clears cached results.
    pub fn set_start(&mut self, c: Coord) -> bool {
        self.clear_results();
        self.grid.set_start(c)
    }

    /// Assign the End role. Clears cached results.
    pub fn set_end(&mut self, c: Coord) -> bool {
        self.clear_results();
        self.grid.set_end(c)
    }

    /// Clear the Start/End selection, keeping walls. Clears cached results.
    pub fn clear_roles(&mut self) {
        self.grid.clear_roles();
        self.clear_results();
    }

    /// Return the grid to its all-open state and drop all results.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.clear_results();
    }

    /// Drop all cached results.
    pub fn clear_results(&mut self) {
        self.results = [None, None, None];
    }

    /// Run one engine against the current grid.
    ///
    /// With start or end unset this is a silent no-op returning an empty
    /// result, the permissive behaviour an interactive host expects; nothing
    /// is cached in that case.
    pub fn run(&mut self, algo: Algorithm) -> SearchResult {
        let (Some(from), Some(to)) = (self.grid.start(), self.grid.end()) else {
            log::debug!("{algo}: run skipped, start/end unset");
            return SearchResult::empty();
        };
        let result = match algo {
            Algorithm::Bfs => self.searcher.bfs_path(&self.grid, from, to),
            Algorithm::Dijkstra => self.searcher.dijkstra_path(&self.grid, from, to),
            Algorithm::AStar => self.searcher.astar_path(&self.grid, from, to),
        };
        if result.found() {
            log::info!(
                "{algo}: explored {} cells, {} path steps",
                result.explored,
                result.path_len()
            );
        } else {
            log::info!("{algo}: no path, explored {} cells", result.explored);
        }
        self.results[algo.index()] = Some(result.clone());
        result
    }

    /// Run the BFS engine.
    pub fn run_bfs(&mut self) -> SearchResult {
        self.run(Algorithm::Bfs)
    }

    /// Run the Dijkstra engine.
    pub fn run_dijkstra(&mut self) -> SearchResult {
        self.run(Algorithm::Dijkstra)
    }

    /// Run the A* engine.
    pub fn run_astar(&mut self) -> SearchResult {
        self.run(Algorithm::AStar)
    }

    /// The cached result of the last `algo` run, if any.
    pub fn result(&self, algo: Algorithm) -> Option<&SearchResult> {
        self.results[algo.index()].as_ref()
    }

    /// One display line for `algo`: explored count and path steps as plain
    /// text, or just the algorithm name before its first run.
    pub fn stats_line(&self, algo: Algorithm) -> String {
        match self.result(algo) {
            None => format!("{algo}:"),
            Some(r) if r.found() => {
                format!("{algo}: explored {}, steps {}", r.explored, r.path_len())
            }
            Some(r) => format!("{algo}: no path (explored {})", r.explored),
        }
    }
}
