//! Error types shared by the frontier, problem definitions and the engine.

use std::fmt::Debug;

use thiserror::Error;

/// Raised when a frontier is asked for a node it does not have.
///
/// The engine always checks `is_empty` before peeking, so seeing this
/// error means an invariant was broken somewhere.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    #[error("frontier is empty")]
    Empty,
}

/// Raised by a [`Problem`](crate::problem::Problem) implementation that was
/// handed a state or action outside its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// The state is not part of the problem's graph.
    #[error("unrecognized state {state}")]
    UnrecognizedState { state: String },
    /// The action cannot be taken from the given state.
    #[error("unrecognized action {action} in state {state}")]
    UnrecognizedAction { state: String, action: String },
}

impl ProblemError {
    pub fn unrecognized_state(state: &impl Debug) -> Self {
        Self::UnrecognizedState {
            state: format!("{state:?}"),
        }
    }

    pub fn unrecognized_action(state: &impl Debug, action: &impl Debug) -> Self {
        Self::UnrecognizedAction {
            state: format!("{state:?}"),
            action: format!("{action:?}"),
        }
    }
}

/// Everything a search or a reconstruction can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `solution()` or `path()` was called without a successful search.
    #[error("no solution is available; run a successful search first")]
    NoSolution,
    #[error(transparent)]
    Frontier(#[from] FrontierError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
}
