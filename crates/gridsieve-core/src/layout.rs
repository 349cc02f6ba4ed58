//! Puzzle geometry.
//!
//! A [`Layout`] fixes the shape of a regular Latin-square puzzle: boxes of
//! `box_width x box_height` cells tile a square of side
//! `box_width * box_height`. All other dimensions (cell count, house size,
//! maximum value) derive from the two box dimensions.
//!
//! Cells are addressed three ways, with pure conversions between them:
//!
//! - a linear index in `0..cell_count`, row-major;
//! - `(x, y)` coordinates with `x` the column and `y` the row;
//! - a box index in `0..side`, left to right, top to bottom.

use derive_more::{Display, Error};

/// Errors produced when constructing a [`Layout`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Both box dimensions must be at least 1.
    #[display("box dimensions must be non-zero")]
    ZeroBoxDimension,
    /// The side length must fit in one machine word of value flags.
    #[display("side length {side} exceeds the supported maximum of 64")]
    SideTooLarge {
        /// The rejected side length.
        side: usize,
    },
}

/// Geometry of a regular `N x N` puzzle with `box_width x box_height` boxes,
/// where `N = box_width * box_height`.
///
/// A `Layout` is fixed at construction and shared by every component working
/// on the same puzzle. It carries no puzzle state.
///
/// # Examples
///
/// ```
/// use gridsieve_core::Layout;
///
/// let layout = Layout::new(3, 3)?; // classic sudoku
/// assert_eq!(layout.side(), 9);
/// assert_eq!(layout.cell_count(), 81);
///
/// // row-major linear indexing
/// assert_eq!(layout.cell_at(7, 0), 7);
/// assert_eq!(layout.cell_at(0, 1), 9);
/// assert_eq!(layout.cell_coords(40), (4, 4));
///
/// // box 4 is the centre box; its top-left cell is (3, 3)
/// assert_eq!(layout.cell_box(40), 4);
/// assert_eq!(layout.box_origin(4), layout.cell_at(3, 3));
/// # Ok::<(), gridsieve_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    box_width: usize,
    box_height: usize,
}

impl Layout {
    /// The classic 9x9 layout with 3x3 boxes.
    pub const CLASSIC: Self = Self {
        box_width: 3,
        box_height: 3,
    };

    /// Creates a layout from box dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroBoxDimension`] if either dimension is zero,
    /// and [`LayoutError::SideTooLarge`] if `box_width * box_height`
    /// exceeds 64.
    pub const fn new(box_width: usize, box_height: usize) -> Result<Self, LayoutError> {
        if box_width == 0 || box_height == 0 {
            return Err(LayoutError::ZeroBoxDimension);
        }
        let side = box_width * box_height;
        if side > 64 {
            return Err(LayoutError::SideTooLarge { side });
        }
        Ok(Self {
            box_width,
            box_height,
        })
    }

    /// Returns the box width.
    #[must_use]
    pub const fn box_width(self) -> usize {
        self.box_width
    }

    /// Returns the box height.
    #[must_use]
    pub const fn box_height(self) -> usize {
        self.box_height
    }

    /// Returns the side length `N`: the number of rows, columns, boxes, and
    /// also the maximum cell value.
    #[must_use]
    pub const fn side(self) -> usize {
        self.box_width * self.box_height
    }

    /// Returns the total number of cells, `N * N`.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Returns the largest cell value as a `u8`.
    ///
    /// Values range over `1..=max_value()`, with `0` meaning "unknown".
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn max_value(self) -> u8 {
        self.side() as u8
    }

    /// Converts `(x, y)` coordinates to a linear cell index.
    #[must_use]
    pub const fn cell_at(self, x: usize, y: usize) -> usize {
        x + y * self.side()
    }

    /// Returns the column of a cell.
    #[must_use]
    pub const fn cell_x(self, cell: usize) -> usize {
        cell % self.side()
    }

    /// Returns the row of a cell.
    #[must_use]
    pub const fn cell_y(self, cell: usize) -> usize {
        cell / self.side()
    }

    /// Returns the `(x, y)` coordinates of a cell.
    #[must_use]
    pub const fn cell_coords(self, cell: usize) -> (usize, usize) {
        (self.cell_x(cell), self.cell_y(cell))
    }

    /// Returns the index of the box containing a cell.
    #[must_use]
    pub const fn cell_box(self, cell: usize) -> usize {
        let (x, y) = self.cell_coords(cell);
        (x / self.box_width) + (y / self.box_height) * self.boxes_per_row()
    }

    /// Returns the linear index of a box's top-left cell.
    #[must_use]
    pub const fn box_origin(self, index: usize) -> usize {
        let x = (index % self.boxes_per_row()) * self.box_width;
        let y = (index / self.boxes_per_row()) * self.box_height;
        self.cell_at(x, y)
    }

    /// Number of boxes tiling one band of rows; equals `box_height` since
    /// `side = box_width * box_height`.
    const fn boxes_per_row(self) -> usize {
        self.side() / self.box_width
    }
}
