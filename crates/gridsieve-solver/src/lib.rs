//! Deduction strategies for Latin-square possibility spaces.
//!
//! This crate applies logical elimination strategies to a
//! [`Descriptor`](gridsieve_core::Descriptor) until a puzzle is solved or no
//! further deduction is possible. It never guesses: every elimination is a
//! provably correct consequence of the row/column/box constraints.
//!
//! # Strategies
//!
//! - [`NakedSingle`](strategy::NakedSingle): a cell with exactly one
//!   remaining candidate is fixed and propagated.
//! - [`HiddenTuple`](strategy::HiddenTuple): k values confined to at most k
//!   cells of a house pin those cells to the k values (k = 1 is the classic
//!   hidden single).
//! - [`LockedCandidates`](strategy::LockedCandidates): a value confined to a
//!   box/line crossing disappears from the rest of the box or line.
//! - [`BasicFish`](strategy::BasicFish): a value confined to the crossing of
//!   k rows and k columns disappears from the rest of those lines (k = 2 is
//!   the X-Wing).
//!
//! # Examples
//!
//! ```
//! use gridsieve_core::{Descriptor, Grid, Layout};
//! use gridsieve_solver::StrategySolver;
//!
//! let grid = Grid::parse(
//!     Layout::CLASSIC,
//!     "
//!     ___ 1_5 ___
//!     14_ ___ 67_
//!     _8_ __2 4__
//!     _63 _7_ _1_
//!     9__ ___ __3
//!     _1_ _9_ 52_
//!     __7 2__ _8_
//!     _26 ___ _35
//!     ___ 4_9 ___
//!     ",
//! )?;
//!
//! let mut space = Descriptor::from_grid(&grid);
//! let solver = StrategySolver::with_all_strategies();
//! let (solved, stats) = solver.solve(&mut space)?;
//!
//! assert!(solved);
//! assert!(stats.has_progress());
//! assert!(space.to_grid().is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::SolverError,
    strategy_solver::{StrategySolver, StrategySolverStats},
};

mod combinatorics;
mod error;
pub mod strategy;
mod strategy_solver;

#[cfg(test)]
mod testing;
