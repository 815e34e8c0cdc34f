//! The capability contract a caller implements to describe a search domain.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ProblemError;

/// A deterministic, unit-cost state graph explored implicitly.
///
/// Both methods must be pure functions of their arguments: the engine may
/// call them in any order and expects the same answer for the same input.
pub trait Problem {
    /// A point in the graph. Hashed for explored-set and goal membership.
    type State: Clone + Eq + Hash + Debug;
    /// A labeled edge out of a state.
    type Action: Clone + Eq + Debug;

    /// Lists every legal action from `state`, possibly none.
    ///
    /// Implementations should return [`ProblemError::UnrecognizedState`] for
    /// states outside their domain.
    fn actions(&self, state: &Self::State) -> Result<Vec<Self::Action>, ProblemError>;

    /// Returns the unique successor of taking `action` in `state`.
    ///
    /// Implementations should return [`ProblemError::UnrecognizedAction`]
    /// when `action` is not among `actions(state)`.
    fn result(&self, state: &Self::State, action: &Self::Action)
        -> Result<Self::State, ProblemError>;

    /// Pairs each legal action from `state` with the state it leads to, in
    /// the order `actions` lists them.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<(Self::Action, Self::State)>, ProblemError> {
        self.actions(state)?
            .into_iter()
            .map(|action| {
                let next = self.result(state, &action)?;
                Ok((action, next))
            })
            .collect()
    }
}
