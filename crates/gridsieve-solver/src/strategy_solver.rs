use std::collections::HashMap;

use gridsieve_core::Descriptor;

use crate::{
    SolverError,
    strategy::{self, BoxedStrategy},
};

/// Statistics collected while driving strategies.
///
/// Tracks which strategies made progress and how often, plus the total
/// number of solving steps taken.
///
/// # Examples
///
/// ```
/// use gridsieve_core::{Descriptor, Layout};
/// use gridsieve_solver::StrategySolver;
///
/// let solver = StrategySolver::with_all_strategies();
/// let mut space = Descriptor::new(Layout::CLASSIC);
///
/// let (_solved, stats) = solver.solve(&mut space)?;
/// println!("total steps: {}", stats.total_steps);
/// println!("naked singles: {}", stats.count("naked single"));
/// # Ok::<(), gridsieve_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct StrategySolverStats {
    /// Map of strategy names to how many passes of each made progress.
    pub applications: HashMap<&'static str, usize>,
    /// Total number of progressing passes across all strategies.
    pub total_steps: usize,
}

impl StrategySolverStats {
    /// Creates an empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many passes of a strategy made progress.
    #[must_use]
    pub fn count(&self, strategy_name: &str) -> usize {
        self.applications.get(strategy_name).copied().unwrap_or(0)
    }

    /// Returns `true` if any strategy made progress at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// Drives an ordered list of strategies against a possibility space.
///
/// Each step tries the strategies in order and stops at the first one that
/// makes progress, so cheap deductions are always exhausted before expensive
/// ones run. Solving repeats steps until the space is solved or no strategy
/// can move.
///
/// # Examples
///
/// ```
/// use gridsieve_core::{Descriptor, Grid, Layout};
/// use gridsieve_solver::StrategySolver;
///
/// let grid = Grid::parse(
///     Layout::CLASSIC,
///     "
///     ___ 1_5 ___
///     14_ ___ 67_
///     _8_ __2 4__
///     _63 _7_ _1_
///     9__ ___ __3
///     _1_ _9_ 52_
///     __7 2__ _8_
///     _26 ___ _35
///     ___ 4_9 ___
///     ",
/// )?;
/// let mut space = Descriptor::from_grid(&grid);
///
/// let solver = StrategySolver::with_all_strategies();
/// let (solved, _stats) = solver.solve(&mut space)?;
/// assert!(solved);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct StrategySolver {
    strategies: Vec<BoxedStrategy>,
}

impl StrategySolver {
    /// Creates a solver with the given strategies, tried in order.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates a solver with all available strategies, easiest first.
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self {
            strategies: strategy::all_strategies(),
        }
    }

    /// Tries each strategy in order, applying the first one that makes
    /// progress.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - a strategy made progress and was recorded in `stats`
    /// * `Ok(false)` - no strategy can move; the solver is stuck
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the space is inconsistent
    /// after a progressing pass, which only happens for puzzles that were
    /// contradictory to begin with.
    pub fn step(
        &self,
        space: &mut Descriptor,
        stats: &mut StrategySolverStats,
    ) -> Result<bool, SolverError> {
        for strategy in &self.strategies {
            if strategy.apply(space)? {
                *stats.applications.entry(strategy.name()).or_default() += 1;
                stats.total_steps += 1;
                if !space.is_consistent() {
                    return Err(SolverError::Contradiction);
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Applies strategies until the space is solved or no progress is
    /// possible.
    ///
    /// Returns `(solved, stats)`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the space becomes
    /// inconsistent during solving.
    pub fn solve(
        &self,
        space: &mut Descriptor,
    ) -> Result<(bool, StrategySolverStats), SolverError> {
        let mut stats = StrategySolverStats::default();
        while self.step(space, &mut stats)? {
            if space.is_solved() {
                return Ok((true, stats));
            }
        }
        Ok((false, stats))
    }
}
