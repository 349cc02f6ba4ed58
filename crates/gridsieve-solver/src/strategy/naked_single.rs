use gridsieve_core::Descriptor;

use super::{BoxedStrategy, Strategy};
use crate::SolverError;

const NAME: &str = "naked single";

/// Finds cells with exactly one remaining candidate and fixes them.
///
/// Every found cell is assigned its sole candidate, which removes that value
/// from all peers in the same row, column, and box and clears the cell from
/// the missing set. All naked singles of a pass are collected up front and
/// applied together, so the result does not depend on discovery order.
///
/// This is the only strategy that determines cells; the others merely narrow
/// candidates until a naked single appears.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Strategy for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, space: &mut Descriptor) -> Result<bool, SolverError> {
        let singles = space.single_candidate_cells() & space.missing();
        if singles.is_empty() {
            return Ok(false);
        }

        for value in 1..=space.layout().max_value() {
            let found = space.value_positions(value) & &singles;
            for cell in found.iter_ones() {
                space.assign(cell, value);
            }
        }

        Ok(true)
    }
}
