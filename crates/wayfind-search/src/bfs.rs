use std::collections::VecDeque;

use wayfind_core::Coord;

use crate::Searcher;
use crate::searcher::SearchResult;
use crate::traits::Pather;

impl Searcher {
    /// Compute the fewest-edges path from `from` to `to` by breadth-first
    /// search.
    ///
    /// Every edge has unit cost, so BFS order is cost order and the first
    /// path to reach the goal is shortest. A cell is marked visited at the
    /// moment it is enqueued, never producing duplicate frontier entries;
    /// `explored` counts dequeues, and the search stops the moment the goal
    /// is dequeued.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> SearchResult {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::empty();
        };

        let cur_gen = self.begin_run();

        // Visited-at-enqueue: touching a node's generation marks it seen.
        {
            let n = &mut self.nodes[start_idx];
            n.generation = cur_gen;
            n.parent = usize::MAX;
        }

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start_idx);

        let mut explored = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search false;
            };
            explored += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let cp = self.coord(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already enqueued.
                    continue;
                }
                n.generation = cur_gen;
                n.parent = ci;
                queue.push_back(ni);
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
