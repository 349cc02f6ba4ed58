//! The cell-value container.
//!
//! A [`Grid`] holds one value per cell, with `0` meaning "unknown". It is the
//! exchange format at the engine boundary: a grid seeds a possibility space
//! and a (partially) solved possibility space converts back into one.

use std::fmt;

use derive_more::{Display, Error};

use crate::{Layout, ValueSet};

/// Errors produced when constructing or parsing a [`Grid`].
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input had the wrong number of cells.
    #[display("expected {expected} cells, got {actual}")]
    WrongCellCount {
        /// Cell count required by the layout.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
    /// A cell value was outside `0..=max_value`.
    #[display("cell value {value} out of range 0..={max_value}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// Largest value the layout allows.
        max_value: u8,
    },
    /// The grid text contained a character with no cell meaning.
    #[display("unrecognized character {character:?} in grid text")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
    },
    /// Single-character grid text only covers sides up to 9.
    #[display("grid text is not supported for side length {side}")]
    TextUnsupported {
        /// Side length of the rejected layout.
        side: usize,
    },
}

/// An `N x N` grid of cell values in `0..=N`, where `0` is "unknown".
///
/// # Examples
///
/// ```
/// use gridsieve_core::{Grid, Layout};
///
/// let grid = Grid::parse(
///     Layout::CLASSIC,
///     "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
///     ",
/// )?;
///
/// assert_eq!(grid.value(0), 5);
/// assert_eq!(grid.value(2), 0);
/// assert!(grid.is_valid());
/// assert!(!grid.is_filled());
/// # Ok::<(), gridsieve_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    layout: Layout,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a grid with every cell unknown.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            cells: vec![0; layout.cell_count()],
        }
    }

    /// Creates a grid from a slice of cell values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WrongCellCount`] if `values` does not have
    /// exactly `cell_count` entries, and [`GridError::ValueOutOfRange`] if
    /// any value exceeds the layout's maximum.
    pub fn from_values(layout: Layout, values: &[u8]) -> Result<Self, GridError> {
        if values.len() != layout.cell_count() {
            return Err(GridError::WrongCellCount {
                expected: layout.cell_count(),
                actual: values.len(),
            });
        }
        if let Some(&value) = values.iter().find(|&&v| v > layout.max_value()) {
            return Err(GridError::ValueOutOfRange {
                value,
                max_value: layout.max_value(),
            });
        }
        Ok(Self {
            layout,
            cells: values.to_vec(),
        })
    }

    /// Parses a grid from text.
    ///
    /// Digits `1`-`9` are cell values; `.`, `_`, and `0` are unknown cells;
    /// whitespace is ignored. Only layouts with a side length of at most 9
    /// can be written this way.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TextUnsupported`] for wider layouts,
    /// [`GridError::UnrecognizedCharacter`] for stray characters, and the
    /// [`Grid::from_values`] errors for wrong counts or out-of-range digits.
    pub fn parse(layout: Layout, text: &str) -> Result<Self, GridError> {
        if layout.side() > 9 {
            return Err(GridError::TextUnsupported {
                side: layout.side(),
            });
        }
        let mut values = Vec::with_capacity(layout.cell_count());
        for character in text.chars().filter(|c| !c.is_whitespace()) {
            let value = match character {
                '.' | '_' | '0' => 0,
                '1'..='9' => character as u8 - b'0',
                _ => return Err(GridError::UnrecognizedCharacter { character }),
            };
            values.push(value);
        }
        Self::from_values(layout, &values)
    }

    /// Returns the layout of this grid.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the value at a cell, `0` if unknown.
    #[must_use]
    pub fn value(&self, cell: usize) -> u8 {
        self.cells[cell]
    }

    /// Sets the value at a cell.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds the layout's maximum.
    pub fn set(&mut self, cell: usize, value: u8) {
        assert!(
            value <= self.layout.max_value(),
            "cell value {value} out of range"
        );
        self.cells[cell] = value;
    }

    /// Returns the cell values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.cells
    }

    /// Returns an iterator over `(cell, value)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, u8)> {
        self.cells.iter().copied().enumerate()
    }

    /// Returns `true` if no cell is unknown.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Returns `true` if no value repeats within any row, column, or box.
    ///
    /// Unknown cells are ignored, so a partially filled grid can be valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let side = self.layout.side();
        let mut rows = vec![ValueSet::new(); side];
        let mut columns = vec![ValueSet::new(); side];
        let mut boxes = vec![ValueSet::new(); side];

        for (cell, value) in self.cells() {
            if value == 0 {
                continue;
            }
            let (x, y) = self.layout.cell_coords(cell);
            let seen = [&mut rows[y], &mut columns[x], &mut boxes[self.layout.cell_box(cell)]];
            for house in seen {
                if house.contains(value) {
                    return false;
                }
                house.insert(value);
            }
        }
        true
    }

    /// Returns `true` if the grid is completely filled and valid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.is_valid()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.layout.side();
        for y in 0..side {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..side {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.value(self.layout.cell_at(x, y)) {
                    0 => write!(f, "_")?,
                    value => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}
