use wayfind_core::{Coord, Grid};

/// Neighbour enumeration seam between a map and the search engines.
///
/// Every edge has unit cost; an implementor only decides which moves exist.
pub trait Pather {
    /// Append neighbours of `c` into `buf`. The caller clears `buf` before
    /// calling. The order must be stable for a given map state: engines
    /// inherit their determinism from it.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

impl Pather for Grid {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        self.push_neighbors(c, buf);
    }
}
