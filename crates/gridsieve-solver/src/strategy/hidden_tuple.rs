use gridsieve_core::{BitVec, Descriptor, House};

use super::{BoxedStrategy, Strategy};
use crate::{
    SolverError,
    combinatorics::{advance_combination, first_combination},
};

/// Finds hidden tuples of a fixed size within each house.
///
/// A hidden tuple of size k is a set of k values that, within one house, can
/// only appear in at most k cells. Those cells must then hold exactly those
/// values, so every other candidate in them can be removed. The tuple is
/// "hidden" because the cells may still show unrelated candidates even
/// though the values are already confined.
///
/// Size 1 is the classic hidden single: a value with only one place left in
/// a house. Note that even size 1 only narrows the cell's candidates; the
/// cell is determined by the next [`NakedSingle`](super::NakedSingle) pass.
///
/// A pass visits every house and every k-subset of values and reports
/// progress only when an elimination actually removed a candidate, so
/// repeated invocation terminates.
#[derive(Debug, Clone, Copy)]
pub struct HiddenTuple {
    size: usize,
}

impl HiddenTuple {
    /// Creates a hidden tuple strategy of the given size.
    ///
    /// Sizes that do not fit the puzzle (`size >= N`) make the pass a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        assert!(size > 0, "tuple size must be at least 1");
        Self { size }
    }

    /// The hidden single strategy (size 1).
    #[must_use]
    pub const fn single() -> Self {
        Self::new(1)
    }

    /// The hidden pair strategy (size 2).
    #[must_use]
    pub const fn pair() -> Self {
        Self::new(2)
    }

    /// The hidden triple strategy (size 3).
    #[must_use]
    pub const fn triple() -> Self {
        Self::new(3)
    }

    /// Restricts the cells of one house holding any of the chosen values,
    /// provided there are no more such cells than values.
    fn reduce_house(space: &mut Descriptor, house_mask: &BitVec, values: &[u8]) -> bool {
        let mut tuple_cells = BitVec::zeros(house_mask.width());
        for &index in values {
            tuple_cells |= space.value_positions(index + 1);
        }
        tuple_cells &= house_mask;

        let found = tuple_cells.len();
        if found == 0 || found > values.len() {
            return false;
        }

        let mut changed = false;
        for value in 1..=space.layout().max_value() {
            if !values.contains(&(value - 1)) {
                changed |= space.eliminate(value, &tuple_cells);
            }
        }
        changed
    }
}

impl Strategy for HiddenTuple {
    fn name(&self) -> &'static str {
        match self.size {
            1 => "hidden single",
            2 => "hidden pair",
            3 => "hidden triple",
            4 => "hidden quad",
            _ => "hidden tuple",
        }
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, space: &mut Descriptor) -> Result<bool, SolverError> {
        let side = space.layout().side();
        if self.size >= side {
            return Ok(false);
        }

        let mut changed = false;
        for house in House::all(side) {
            let house_mask = space.house_mask(house).clone();
            let mut values = first_combination(self.size);
            loop {
                changed |= Self::reduce_house(space, &house_mask, &values);
                if !advance_combination(side, &mut values) {
                    break;
                }
            }
        }

        Ok(changed)
    }
}
