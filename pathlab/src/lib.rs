//! pathlab — run and compare grid shortest-path engines.
//!
//! The [`Session`] owns an obstacle [`wayfind_core::Grid`] together with the
//! current start/end selection, dispatches one engine run at a time, and
//! keeps the last result of each algorithm for display. [`explog`] writes a
//! finished path as two-column CSV.

pub mod explog;
pub mod session;

pub use session::{Algorithm, Session};

/// The built-in demo maze: a 19×16 labyrinth with one start (`A`) and one
/// end (`B`) marker.
pub const DEMO_MAZE: &str = "\
1111111111111111
1A001000100010B1
1110111010101011
1010001000100001
1011101111111101
1000100000000101
1110111110110101
1000000010100101
1011111010101101
1010001000100001
1010101111111111
1010100000000001
1010111110111101
1000000010000101
1111111011110101
1000001000010001
1011101111011111
1000100000000001
1111111111111111";
