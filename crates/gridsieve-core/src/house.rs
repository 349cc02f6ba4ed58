//! Houses and their cell masks.
//!
//! A house is any set of `N` cells that must contain each value exactly
//! once: a row, a column, or a box. Houses are pure geometry, derived from a
//! [`Layout`] and never changing, so their cell masks are computed once and
//! shared.

use crate::{BitVec, Layout};

/// A house identified by kind and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate.
    Row {
        /// Row index in `0..side`.
        y: usize,
    },
    /// A column identified by its x coordinate.
    Column {
        /// Column index in `0..side`.
        x: usize,
    },
    /// A box identified by its index, left to right, top to bottom.
    Box {
        /// Box index in `0..side`.
        index: usize,
    },
}

impl House {
    /// Returns an iterator over every house of a puzzle with the given side
    /// length, in row, column, box order.
    pub fn all(side: usize) -> impl Iterator<Item = Self> {
        (0..side)
            .map(|y| Self::Row { y })
            .chain((0..side).map(|x| Self::Column { x }))
            .chain((0..side).map(|index| Self::Box { index }))
    }
}

/// Precomputed cell masks for every house of a layout.
///
/// Each mask is a [`BitVec`] of `cell_count` bits with the house's cells set.
/// Strategies intersect these masks with candidate planes to scope their
/// deductions.
///
/// # Examples
///
/// ```
/// use gridsieve_core::{House, HouseMasks, Layout};
///
/// let masks = HouseMasks::new(Layout::CLASSIC);
///
/// assert_eq!(masks.row_mask(0).len(), 9);
/// assert!(masks.row_mask(0).contains(8));
/// assert!(!masks.row_mask(0).contains(9));
///
/// // A cell's houses cover the cell itself plus its 20 peers.
/// assert_eq!(masks.cell_houses_mask(40).len(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseMasks {
    layout: Layout,
    rows: Vec<BitVec>,
    columns: Vec<BitVec>,
    boxes: Vec<BitVec>,
}

impl HouseMasks {
    /// Builds the masks for all `3 * side` houses of a layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let side = layout.side();
        let cells = layout.cell_count();
        let mut rows = vec![BitVec::zeros(cells); side];
        let mut columns = vec![BitVec::zeros(cells); side];
        let mut boxes = vec![BitVec::zeros(cells); side];

        for cell in 0..cells {
            rows[layout.cell_y(cell)].insert(cell);
            columns[layout.cell_x(cell)].insert(cell);
            boxes[layout.cell_box(cell)].insert(cell);
        }

        Self {
            layout,
            rows,
            columns,
            boxes,
        }
    }

    /// Returns the layout these masks were built for.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the mask of the given house.
    #[must_use]
    pub fn mask(&self, house: House) -> &BitVec {
        match house {
            House::Row { y } => self.row_mask(y),
            House::Column { x } => self.column_mask(x),
            House::Box { index } => self.box_mask(index),
        }
    }

    /// Returns the mask of row `y`.
    #[must_use]
    pub fn row_mask(&self, y: usize) -> &BitVec {
        &self.rows[y]
    }

    /// Returns the mask of column `x`.
    #[must_use]
    pub fn column_mask(&self, x: usize) -> &BitVec {
        &self.columns[x]
    }

    /// Returns the mask of the box with the given index.
    #[must_use]
    pub fn box_mask(&self, index: usize) -> &BitVec {
        &self.boxes[index]
    }

    /// Returns a mask with only `cell` set.
    #[must_use]
    pub fn cell_mask(&self, cell: usize) -> BitVec {
        BitVec::singleton(self.layout.cell_count(), cell)
    }

    /// Returns the union of the three houses containing `cell`.
    #[must_use]
    pub fn cell_houses_mask(&self, cell: usize) -> BitVec {
        self.row_mask(self.layout.cell_y(cell)).clone()
            | self.column_mask(self.layout.cell_x(cell))
            | self.box_mask(self.layout.cell_box(cell))
    }
}
