//! Test utilities for strategy implementations.
//!
//! [`StrategyTester`] tracks the initial and current state of a possibility
//! space, applies strategies, and asserts the changes they produce. All
//! methods return `self` for fluent chaining, and assertion failures report
//! the caller's location.

use gridsieve_core::{Descriptor, Grid, Layout, ValueSet};

use crate::strategy::Strategy;

/// A fluent test harness for strategy passes.
#[derive(Debug)]
pub struct StrategyTester {
    initial: Descriptor,
    current: Descriptor,
    last_changed: Option<bool>,
}

impl StrategyTester {
    /// Creates a tester from an initial possibility space.
    pub fn new(initial: Descriptor) -> Self {
        let current = initial.clone();
        Self {
            initial,
            current,
            last_changed: None,
        }
    }

    /// Creates a tester from grid text in [`Grid::parse`] format.
    ///
    /// # Panics
    ///
    /// Panics if the text cannot be parsed.
    #[track_caller]
    pub fn from_text(layout: Layout, text: &str) -> Self {
        let grid = Grid::parse(layout, text).unwrap();
        Self::new(Descriptor::from_grid(&grid))
    }

    /// Applies the strategy once.
    ///
    /// # Panics
    ///
    /// Panics if the strategy returns an error, or if it reports no progress
    /// while having mutated the space.
    #[track_caller]
    pub fn apply_once<S: Strategy>(mut self, strategy: &S) -> Self {
        let before = self.current.clone();
        let changed = strategy.apply(&mut self.current).unwrap();
        if !changed {
            assert_eq!(
                before, self.current,
                "{} reported no progress but mutated the space",
                strategy.name()
            );
        }
        self.last_changed = Some(changed);
        self
    }

    /// Applies the strategy until it reports no further progress.
    ///
    /// # Panics
    ///
    /// Panics if the strategy returns an error.
    #[track_caller]
    pub fn apply_until_stuck<S: Strategy>(mut self, strategy: &S) -> Self {
        let mut any = false;
        while strategy.apply(&mut self.current).unwrap() {
            any = true;
        }
        self.last_changed = Some(any);
        self
    }

    /// Returns the current possibility space.
    pub fn space(&self) -> &Descriptor {
        &self.current
    }

    /// Asserts that the last application reported progress.
    #[track_caller]
    pub fn assert_progress(self) -> Self {
        assert_eq!(self.last_changed, Some(true), "expected progress");
        self
    }

    /// Asserts that the last application reported no progress.
    #[track_caller]
    pub fn assert_no_progress(self) -> Self {
        assert_eq!(self.last_changed, Some(false), "expected no progress");
        self
    }

    /// Asserts the exact candidate set at a cell.
    #[track_caller]
    pub fn assert_candidates(self, cell: usize, expected: ValueSet) -> Self {
        assert_eq!(
            self.current.candidates_at(cell),
            expected,
            "unexpected candidates at cell {cell}"
        );
        self
    }

    /// Asserts that a value has been removed from a cell since the initial
    /// state.
    #[track_caller]
    pub fn assert_removed(self, cell: usize, value: u8) -> Self {
        assert!(
            self.initial.candidates_at(cell).contains(value),
            "cell {cell} never had candidate {value}"
        );
        assert!(
            !self.current.candidates_at(cell).contains(value),
            "cell {cell} still has candidate {value}"
        );
        self
    }

    /// Asserts that a cell still carries a candidate.
    #[track_caller]
    pub fn assert_has_candidate(self, cell: usize, value: u8) -> Self {
        assert!(
            self.current.candidates_at(cell).contains(value),
            "cell {cell} lost candidate {value}"
        );
        self
    }

    /// Asserts that a cell's candidates are unchanged from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, cell: usize) -> Self {
        assert_eq!(
            self.current.candidates_at(cell),
            self.initial.candidates_at(cell),
            "candidates at cell {cell} changed"
        );
        self
    }

    /// Asserts that a cell has been determined with the given value.
    #[track_caller]
    pub fn assert_solved(self, cell: usize, value: u8) -> Self {
        assert!(
            !self.current.missing().contains(cell),
            "cell {cell} is still missing"
        );
        assert_eq!(
            self.current.candidates_at(cell).as_single(),
            Some(value),
            "cell {cell} not determined as {value}"
        );
        self
    }

    /// Asserts that a cell is still undetermined.
    #[track_caller]
    pub fn assert_missing(self, cell: usize) -> Self {
        assert!(
            self.current.missing().contains(cell),
            "cell {cell} is unexpectedly determined"
        );
        self
    }
}
