//! **wayfind-core** — grid model for shortest-path search (core types).
//!
//! This crate provides the foundational types used across the *wayfind*
//! workspace: the [`Coord`] value type, the wall/role [`Grid`] with its
//! toggle operations, and the `1`/`0`/`A`/`B` maze text format.

pub mod coord;
pub mod grid;
pub mod maze;

pub use coord::Coord;
pub use grid::{Cell, Grid};
pub use maze::MazeError;
