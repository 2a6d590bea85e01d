use wayfind_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// On a 4-connected unit-cost grid this is admissible and consistent: it
/// never overestimates the true remaining cost, which A* relies on for its
/// optimality guarantee.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
