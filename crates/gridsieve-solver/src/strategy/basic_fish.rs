use gridsieve_core::{BitVec, Descriptor};

use super::{BoxedStrategy, Strategy};
use crate::{
    SolverError,
    combinatorics::{advance_combination, first_combination},
};

/// Finds basic fish patterns of a fixed size.
///
/// A fish of size k exists for a value when its candidates within some k
/// rows all lie in k columns (or the transpose): the k placements of the
/// value in those rows must use up exactly those columns, so the value can
/// be eliminated from the columns outside the chosen rows. Size 2 is the
/// X-Wing, sizes 3 and 4 the swordfish and jellyfish.
///
/// A pass enumerates every pair of k-row and k-column combinations through
/// the combination generator and checks all values against each. Crossings
/// that are empty or already cover the whole row/column union are degenerate
/// and skipped.
#[derive(Debug, Clone, Copy)]
pub struct BasicFish {
    size: usize,
}

impl BasicFish {
    /// Creates a fish strategy of the given size.
    ///
    /// Sizes that do not fit the puzzle (`2 * size >= N`) make the pass a
    /// no-op: any larger pattern is the complement of a smaller one.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        assert!(size > 0, "fish size must be at least 1");
        Self { size }
    }

    /// The X-Wing strategy (size 2).
    #[must_use]
    pub const fn x_wing() -> Self {
        Self::new(2)
    }

    /// Checks every value against one pair of row/column unions.
    fn reduce_lines(space: &mut Descriptor, rows_mask: &BitVec, columns_mask: &BitVec) -> bool {
        let mut changed = false;

        for value in 1..=space.layout().max_value() {
            let plane = space.value_positions(value);
            let in_rows = plane & rows_mask;
            let in_columns = plane & columns_mask;
            let fish = &in_rows & &in_columns;
            if fish.is_empty() || fish == &in_rows | &in_columns {
                continue;
            }

            if in_rows == fish {
                let outside = in_columns ^ &fish;
                changed |= space.eliminate(value, &outside);
            } else if in_columns == fish {
                let outside = in_rows ^ &fish;
                changed |= space.eliminate(value, &outside);
            }
        }

        changed
    }
}

impl Strategy for BasicFish {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "x-wing",
            3 => "swordfish",
            4 => "jellyfish",
            _ => "basic fish",
        }
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, space: &mut Descriptor) -> Result<bool, SolverError> {
        let layout = space.layout();
        let side = layout.side();
        if self.size * 2 >= side {
            return Ok(false);
        }

        let mut changed = false;
        let mut rows = first_combination(self.size);
        loop {
            let mut rows_mask = BitVec::zeros(layout.cell_count());
            for &y in rows.iter() {
                rows_mask |= space.row_mask(usize::from(y));
            }

            let mut columns = first_combination(self.size);
            loop {
                let mut columns_mask = BitVec::zeros(layout.cell_count());
                for &x in columns.iter() {
                    columns_mask |= space.column_mask(usize::from(x));
                }

                changed |= Self::reduce_lines(space, &rows_mask, &columns_mask);

                if !advance_combination(side, &mut columns) {
                    break;
                }
            }

            if !advance_combination(side, &mut rows) {
                break;
            }
        }

        Ok(changed)
    }
}
