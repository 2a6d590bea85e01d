use std::collections::BinaryHeap;

use wayfind_core::Coord;

use crate::Searcher;
use crate::searcher::{HeapEntry, SearchResult, UNREACHABLE};
use crate::traits::Pather;

impl Searcher {
    /// Compute the least-cost path from `from` to `to` by uniform-cost
    /// search.
    ///
    /// The frontier is a min-priority queue keyed by `(distance, insertion
    /// sequence)` with lazy deletion: relaxing a cell pushes a new entry
    /// without removing the stale one, and stale entries are discarded at
    /// pop time against the closed set. `explored` counts only the first,
    /// closing pop of each cell — discarded stale pops do not count.
    ///
    /// Under unit edge weights this subsumes BFS; it is kept as a distinct
    /// engine so non-unit weights remain a frontier-bookkeeping change, not
    /// an algorithm swap.
    pub fn dijkstra_path<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> SearchResult {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::empty();
        };

        let cur_gen = self.begin_run();

        {
            let n = &mut self.nodes[start_idx];
            n.g = 0;
            n.parent = usize::MAX;
            n.generation = cur_gen;
            n.open = true;
        }

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        let mut seq: u32 = 0;
        open.push(HeapEntry {
            idx: start_idx,
            f: 0,
            seq,
        });

        let mut explored = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Lazy deletion: entries for already-closed cells are stale.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            self.nodes[ci].open = false;
            explored += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;
            let cp = self.coord(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative;
                n.parent = ci;
                n.open = true;
                seq += 1;
                open.push(HeapEntry {
                    idx: ni,
                    f: tentative,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        let path = if found {
            self.reconstruct(goal_idx)
        } else {
            Vec::new()
        };
        SearchResult { path, explored }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::Grid;

    #[test]
    fn finds_shortest_path_in_corridor() {
        let grid = Grid::from_maze("A10\n000\n01B").unwrap();
        let mut s = Searcher::new(3, 3);
        let r = s.dijkstra_path(&grid, grid.start().unwrap(), grid.end().unwrap());
        assert_eq!(
            r.path,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ]
        );
        // Each of the seven reachable cells is closed exactly once.
        assert_eq!(r.explored, 7);
    }

    #[test]
    fn explored_counts_closed_cells() {
        // An open 3×3 room: the goal is the unique farthest cell, so all
        // nine cells close exactly once before the goal pop ends the run.
        let grid = Grid::from_maze("A00\n000\n00B").unwrap();
        let mut s = Searcher::new(3, 3);
        let r = s.dijkstra_path(&grid, grid.start().unwrap(), grid.end().unwrap());
        assert_eq!(r.path_len(), 4);
        assert_eq!(r.explored, 9);
    }

    #[test]
    fn unreachable_goal_exhausts_frontier() {
        let grid = Grid::from_maze("A01\n111\n10B").unwrap();
        let mut s = Searcher::new(3, 3);
        let r = s.dijkstra_path(&grid, grid.start().unwrap(), grid.end().unwrap());
        assert!(r.path.is_empty());
        assert_eq!(r.path_len(), 0);
        assert_eq!(r.explored, 2);
    }
}
