//! The possibility space.
//!
//! A [`Descriptor`] tracks, for one puzzle instance, which values are still
//! logically possible in which cells. It is the shared mutable state every
//! deduction strategy reads and shrinks: candidates only ever disappear
//! after construction, so repeated strategy passes terminate.
//!
//! # Layout
//!
//! Candidates are stored value-major: one [`BitVec`] of `cell_count` bits per
//! value ("where can this value still go?"). The complementary cell-major
//! view ("what can this cell still be?") is served by
//! [`candidates_at`](Descriptor::candidates_at). A separate `missing`
//! bit-vector marks the cells whose value is not yet determined.

use crate::{BitVec, Grid, House, HouseMasks, Layout, ValueSet};

/// The mutable candidate/missing state for one puzzle instance.
///
/// # Examples
///
/// ```
/// use gridsieve_core::{Descriptor, Grid, Layout};
///
/// let mut space = Descriptor::new(Layout::CLASSIC);
/// assert_eq!(space.candidates_at(0).len(), 9);
///
/// // Placing a value propagates to the cell's row, column, and box.
/// space.assign(0, 5);
/// assert_eq!(space.candidates_at(0).as_single(), Some(5));
/// assert!(!space.candidates_at(1).contains(5));
/// assert!(!space.candidates_at(9).contains(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    layout: Layout,
    masks: HouseMasks,
    /// Bit set means the cell's value is not yet determined.
    missing: BitVec,
    /// `planes[v - 1]` holds the cells where value `v` remains possible.
    planes: Vec<BitVec>,
}

impl Descriptor {
    /// Creates an unconstrained space: every value possible in every cell,
    /// every cell missing.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let cells = layout.cell_count();
        Self {
            layout,
            masks: HouseMasks::new(layout),
            missing: BitVec::ones(cells),
            planes: vec![BitVec::ones(cells); layout.side()],
        }
    }

    /// Builds the possibility space of a grid: full seeding followed by
    /// propagation of every already-placed value.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut space = Self::new(grid.layout());
        for (cell, value) in grid.cells() {
            if value > 0 {
                space.assign(cell, value);
            }
        }
        space
    }

    /// Converts back to a grid.
    ///
    /// Every cell whose `missing` bit is clear is emitted with the value
    /// whose plane still holds it; cells still missing stay unknown. This is
    /// a pure read and never repairs inconsistent state.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new(self.layout);
        let known = !&self.missing;
        for (value, plane) in (1u8..).zip(&self.planes) {
            for cell in (plane & &known).iter_ones() {
                grid.set(cell, value);
            }
        }
        grid
    }

    /// Returns the layout of this space.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the cells whose value is not yet determined.
    #[must_use]
    pub fn missing(&self) -> &BitVec {
        &self.missing
    }

    /// Returns the cells where `value` remains possible.
    #[must_use]
    pub fn value_positions(&self, value: u8) -> &BitVec {
        &self.planes[Self::plane_index(self.layout, value)]
    }

    /// Returns the set of values still possible at `cell`.
    #[must_use]
    pub fn candidates_at(&self, cell: usize) -> ValueSet {
        let mut set = ValueSet::new();
        for (value, plane) in (1u8..).zip(&self.planes) {
            if plane.contains(cell) {
                set.insert(value);
            }
        }
        set
    }

    /// Returns the cell mask of a house.
    #[must_use]
    pub fn house_mask(&self, house: House) -> &BitVec {
        self.masks.mask(house)
    }

    /// Returns the cell mask of row `y`.
    #[must_use]
    pub fn row_mask(&self, y: usize) -> &BitVec {
        self.masks.row_mask(y)
    }

    /// Returns the cell mask of column `x`.
    #[must_use]
    pub fn column_mask(&self, x: usize) -> &BitVec {
        self.masks.column_mask(x)
    }

    /// Returns the cell mask of a box.
    #[must_use]
    pub fn box_mask(&self, index: usize) -> &BitVec {
        self.masks.box_mask(index)
    }

    /// Returns a mask with only `cell` set.
    #[must_use]
    pub fn cell_mask(&self, cell: usize) -> BitVec {
        self.masks.cell_mask(cell)
    }

    /// Returns the union of the three houses containing `cell`.
    #[must_use]
    pub fn cell_houses_mask(&self, cell: usize) -> BitVec {
        self.masks.cell_houses_mask(cell)
    }

    /// Removes `value` as a candidate from every cell in `mask`, reporting
    /// whether any candidate bit actually cleared.
    ///
    /// This is the sole mutation primitive strategies use: it only ever
    /// clears bits, so candidate state shrinks monotonically.
    pub fn eliminate(&mut self, value: u8, mask: &BitVec) -> bool {
        let index = Self::plane_index(self.layout, value);
        self.planes[index].subtract(mask)
    }

    /// Fixes `value` in `cell`: the cell keeps only that value, the value
    /// disappears from all peers sharing a house with the cell, and the cell
    /// is no longer missing.
    pub fn assign(&mut self, cell: usize, value: u8) {
        let index = Self::plane_index(self.layout, value);
        let mut peers = self.masks.cell_houses_mask(cell);
        peers.remove(cell);

        for (other, plane) in self.planes.iter_mut().enumerate() {
            if other == index {
                plane.subtract(&peers);
            } else {
                plane.remove(cell);
            }
        }
        self.missing.remove(cell);
    }

    /// Classifies cells by candidate count in one bit-parallel pass.
    ///
    /// Returns `(empty, single)`: the cells with no remaining candidate and
    /// the cells with exactly one.
    #[must_use]
    pub fn classify_cells(&self) -> (BitVec, BitVec) {
        let cells = self.layout.cell_count();
        let mut empty = BitVec::ones(cells);
        let mut single = BitVec::zeros(cells);
        for plane in &self.planes {
            single.subtract(plane);
            let first_seen = empty.clone() & plane;
            single |= &first_seen;
            empty.subtract(plane);
        }
        (empty, single)
    }

    /// Returns the cells with exactly one remaining candidate.
    #[must_use]
    pub fn single_candidate_cells(&self) -> BitVec {
        self.classify_cells().1
    }

    /// Checks whether the space is free of contradictions: every cell keeps
    /// at least one candidate and no two determined cells in one house carry
    /// the same value.
    ///
    /// Strategies never call this; it exists for driver layers that want to
    /// fail fast instead of working on from an impossible state.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let (empty, _) = self.classify_cells();
        if !empty.is_empty() {
            return false;
        }
        let known = !&self.missing;
        for plane in &self.planes {
            let placed = plane & &known;
            for house in House::all(self.layout.side()) {
                if (&placed & self.masks.mask(house)).len() > 1 {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every cell is determined and the resulting grid is
    /// a valid solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.missing.is_empty() && self.to_grid().is_solved()
    }

    fn plane_index(layout: Layout, value: u8) -> usize {
        assert!(
            (1..=layout.max_value()).contains(&value),
            "value {value} out of range 1..={}",
            layout.max_value()
        );
        usize::from(value - 1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn classic(text: &str) -> Grid {
        Grid::parse(Layout::CLASSIC, text).unwrap()
    }

    #[test]
    fn test_new_space_is_unconstrained() {
        let space = Descriptor::new(Layout::CLASSIC);
        assert_eq!(space.missing().len(), 81);
        for value in 1..=9 {
            assert_eq!(space.value_positions(value).len(), 81);
        }
        assert_eq!(space.candidates_at(40), ValueSet::full(9));
    }

    #[test]
    fn test_assign_propagates_to_houses() {
        let mut space = Descriptor::new(Layout::CLASSIC);
        space.assign(40, 5); // centre cell (4, 4)

        assert!(!space.missing().contains(40));
        assert_eq!(space.candidates_at(40).as_single(), Some(5));

        let layout = space.layout();
        for cell in 0..layout.cell_count() {
            if cell == 40 {
                continue;
            }
            let same_house = layout.cell_x(cell) == 4
                || layout.cell_y(cell) == 4
                || layout.cell_box(cell) == 4;
            assert_eq!(!space.candidates_at(cell).contains(5), same_house);
            // Other values are untouched everywhere else.
            assert!(space.candidates_at(cell).contains(1));
        }
    }

    #[test]
    fn test_eliminate_reports_change_and_never_sets() {
        let mut space = Descriptor::new(Layout::CLASSIC);
        let mask = space.row_mask(0).clone();

        assert!(space.eliminate(3, &mask));
        assert_eq!(space.value_positions(3).len(), 72);
        // Same elimination again is a no-op.
        assert!(!space.eliminate(3, &mask));
    }

    #[test]
    fn test_classify_cells() {
        let mut space = Descriptor::new(Layout::CLASSIC);
        let (empty, single) = space.classify_cells();
        assert!(empty.is_empty());
        assert!(single.is_empty());

        // Narrow cell 0 down to a single candidate, cell 1 down to none.
        let first = space.cell_mask(0);
        let second = space.cell_mask(1);
        for value in 2..=9 {
            space.eliminate(value, &first);
        }
        for value in 1..=9 {
            space.eliminate(value, &second);
        }

        let (empty, single) = space.classify_cells();
        assert_eq!(empty.iter_ones().collect::<Vec<_>>(), vec![1]);
        assert_eq!(single.iter_ones().collect::<Vec<_>>(), vec![0]);
        assert!(!space.is_consistent());
    }

    #[test]
    fn test_round_trip_preserves_grid() {
        let grid = classic(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
            ",
        );
        let space = Descriptor::from_grid(&grid);
        assert_eq!(space.to_grid(), grid);
        assert!(space.is_consistent());
        assert!(!space.is_solved());
    }

    #[test]
    fn test_from_grid_restricts_peer_candidates() {
        let grid = classic(
            "
            5__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        );
        let space = Descriptor::from_grid(&grid);

        // 5 is gone from the first row, first column, and top-left box.
        assert!(!space.candidates_at(1).contains(5));
        assert!(!space.candidates_at(9).contains(5));
        assert!(!space.candidates_at(10).contains(5));
        // The placed cell lost everything except 5.
        assert_eq!(space.candidates_at(0).as_single(), Some(5));
        // Unrelated cells are untouched.
        assert_eq!(space.candidates_at(40).len(), 9);
    }

    #[test]
    fn test_solved_space() {
        let grid = Grid::parse(
            Layout::new(2, 2).unwrap(),
            "
            12 34
            34 12
            21 43
            43 21
            ",
        )
        .unwrap();
        let space = Descriptor::from_grid(&grid);
        assert!(space.missing().is_empty());
        assert!(space.is_solved());
        assert_eq!(space.to_grid(), grid);
    }

    /// Random sparse classic grids that respect house uniqueness.
    fn arb_valid_grid() -> impl Strategy<Value = Grid> {
        proptest::collection::vec((0..81usize, 1..=9u8), 0..24).prop_map(|placements| {
            let mut grid = Grid::new(Layout::CLASSIC);
            for (cell, value) in placements {
                let mut attempt = grid.clone();
                attempt.set(cell, value);
                if attempt.is_valid() {
                    grid = attempt;
                }
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn prop_round_trip(grid in arb_valid_grid()) {
            let space = Descriptor::from_grid(&grid);
            prop_assert_eq!(space.to_grid(), grid);
        }

        #[test]
        fn prop_missing_matches_unknown_cells(grid in arb_valid_grid()) {
            let space = Descriptor::from_grid(&grid);
            for (cell, value) in grid.cells() {
                prop_assert_eq!(space.missing().contains(cell), value == 0);
            }
        }
    }
}
