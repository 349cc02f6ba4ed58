//! Core data structures for Latin-square constraint solving.
//!
//! This crate provides the fundamental, efficient data structures shared by
//! the gridsieve engine: puzzle geometry, the cell grid, and the bit-level
//! containers the deduction strategies operate on.
//!
//! # Overview
//!
//! - [`layout`]: puzzle geometry parameterized by box width/height, with
//!   conversions between linear cell indices, `(x, y)` coordinates, and box
//!   indices.
//! - [`grid`]: the cell-value container with fill and house-uniqueness
//!   checks, plus text parsing for fixtures.
//! - [`bitvec`]: a runtime-width bit-vector ([`BitVec`]) with full set
//!   algebra and an ordered set-bit iterator ([`SetBits`]).
//! - [`value_set`]: a one-word set of cell values ([`ValueSet`]).
//! - [`house`]: the [`House`] kinds (row, column, box) and their precomputed
//!   cell masks ([`HouseMasks`]).
//! - [`descriptor`]: the possibility space ([`Descriptor`]) tracking, for
//!   every cell, the set of values still logically possible.
//!
//! # Examples
//!
//! ```
//! use gridsieve_core::{Grid, Layout};
//!
//! let layout = Layout::CLASSIC; // 9x9 with 3x3 boxes
//! let grid = Grid::new(layout);
//!
//! assert_eq!(layout.cell_count(), 81);
//! assert!(!grid.is_filled());
//! ```

pub mod bitvec;
pub mod descriptor;
pub mod grid;
pub mod house;
pub mod layout;
pub mod value_set;

pub use self::{
    bitvec::{BitVec, SetBits},
    descriptor::Descriptor,
    grid::{Grid, GridError},
    house::{House, HouseMasks},
    layout::{Layout, LayoutError},
    value_set::ValueSet,
};
