use derive_more::{Display, Error};

/// Errors surfaced while driving strategies over a possibility space.
///
/// Individual strategy passes are total functions and never construct an
/// error themselves; the driver raises [`Contradiction`] when its post-step
/// consistency check finds the space in an impossible state, which can only
/// happen for puzzles that were contradictory to begin with.
///
/// [`Contradiction`]: SolverError::Contradiction
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// The possibility space reached a state with no solution.
    #[display("possibility space reached a contradictory state")]
    Contradiction,
}
