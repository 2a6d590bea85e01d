use std::collections::BinaryHeap;

use wayfind_core::Coord;

use crate::Searcher;
use crate::distance::manhattan;
use crate::searcher::{HeapEntry, SearchResult, UNREACHABLE};
use crate::traits::Pather;

impl Searcher {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// The frontier is keyed by `f = g + manhattan(cell, to)` with the
    /// insertion sequence as secondary key. An explicit open-set membership
    /// flag tracks which cells are live in the frontier; when a strictly
    /// better `g` is found for a neighbour, `g`/`f`/predecessor are updated
    /// and an updated entry is pushed even if the neighbour is already
    /// flagged — a duplicate-tolerant update, since a binary heap cannot
    /// decrease keys in place. The superseded entry is recognised at pop
    /// time by its cleared flag and skipped.
    ///
    /// `explored` counts every pop, stale entries included. This differs
    /// from [`dijkstra_path`](Self::dijkstra_path), which counts only
    /// closing pops; the two countings are separate contracts and are not
    /// unified.
    pub fn astar_path<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> SearchResult {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::empty();
        };

        let cur_gen = self.begin_run();

        {
            let n = &mut self.nodes[start_idx];
            n.g = 0;
            n.f = manhattan(from, to);
            n.parent = usize::MAX;
            n.generation = cur_gen;
            n.open = true;
        }

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        let mut seq: u32 = 0;
        open.push(HeapEntry {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            seq,
        });

        let mut explored = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Every pop counts, stale entries included.
            explored += 1;

            if ci == goal_idx {
                break 'search true;
            }

            // A superseded or re-popped entry: the cell already left the
            // open set under a better key.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            self.nodes[ci].open = false;

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
                n.f = tentative + manhattan(np, to);
                n.parent = ci;
                seq += 1;
                open.push(HeapEntry {
                    idx: ni,
                    f: n.f,
                    seq,
                });
                // An already-flagged neighbour keeps its flag; the updated
                // entry simply supersedes the stale one in the heap.
                n.open = true;
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
        let r = s.astar_path(&grid, grid.start().unwrap(), grid.end().unwrap());
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
        // The heuristic prunes (0,2): six pops against Dijkstra's seven.
        assert_eq!(r.explored, 6);
    }

    #[test]
    fn heuristic_guides_straight_to_an_unobstructed_goal() {
        // Start and goal on the top row of an open 2×6 strip: f is minimal
        // along the straight line, so the bottom row is never popped.
        let grid = Grid::from_maze("A0000B\n000000").unwrap();
        let mut s = Searcher::new(2, 6);
        let r = s.astar_path(&grid, grid.start().unwrap(), grid.end().unwrap());
        assert_eq!(r.path_len(), 5);
        assert_eq!(r.explored, 6);
    }

    #[test]
    fn equal_f_ties_pop_in_insertion_order() {
        // On an open square every cell has the same f, so expansion follows
        // insertion order exactly and reruns cannot diverge.
        let grid = Grid::from_maze("A00\n000\n00B").unwrap();
        let mut s = Searcher::new(3, 3);
        let a = s.astar_path(&grid, grid.start().unwrap(), grid.end().unwrap());
        let b = s.astar_path(&grid, grid.start().unwrap(), grid.end().unwrap());
        assert_eq!(a.path, b.path);
        assert_eq!(a.path_len(), 4);
        // Up/right/down/left neighbour order with FIFO ties fixes the path.
        assert_eq!(a.path[1], Coord::new(0, 1));
    }

    #[test]
    fn unreachable_goal_explores_reachable_cells() {
        let grid = Grid::from_maze("A01\n111\n10B").unwrap();
        let mut s = Searcher::new(3, 3);
        let r = s.astar_path(&grid, grid.start().unwrap(), grid.end().unwrap());
        assert!(r.path.is_empty());
        assert_eq!(r.explored, 2);
    }
}
