//! Deduction strategies.
//!
//! Each strategy implements the [`Strategy`] trait and exposes a single
//! operation: attempt one deduction pass against a shared
//! [`Descriptor`](gridsieve_core::Descriptor). Strategies never communicate
//! with each other; all coordination happens through the possibility space
//! they shrink.

use std::fmt::Debug;

use gridsieve_core::Descriptor;

pub use self::{
    basic_fish::BasicFish, hidden_tuple::HiddenTuple, locked_candidates::LockedCandidates,
    naked_single::NakedSingle,
};
use crate::SolverError;

mod basic_fish;
mod hidden_tuple;
mod locked_candidates;
mod naked_single;

/// Returns all available strategies, ordered from easiest to hardest.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenTuple::single()),
        Box::new(LockedCandidates::new()),
        Box::new(HiddenTuple::pair()),
        Box::new(HiddenTuple::triple()),
        Box::new(BasicFish::x_wing()),
    ]
}

/// Returns the fundamental strategies: naked and hidden singles.
///
/// These two suffice for a large class of easy puzzles. The set remains
/// stable over time, serving as a consistent baseline even as
/// [`all_strategies`] grows.
#[must_use]
pub fn fundamental_strategies() -> Vec<BoxedStrategy> {
    vec![Box::new(NakedSingle::new()), Box::new(HiddenTuple::single())]
}

/// A deduction strategy over a possibility space.
pub trait Strategy: Debug {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Attempts one deduction pass.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - at least one candidate or missing bit changed
    /// * `Ok(false)` - the pass found nothing; the space is untouched
    ///
    /// # Errors
    ///
    /// The provided strategies are total over well-formed state and always
    /// return `Ok`; the error channel exists so drivers can thread
    /// [`SolverError`] through uniformly.
    fn apply(&self, space: &mut Descriptor) -> Result<bool, SolverError>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
