//! Solution and path reconstruction from an expansion history.
//!
//! The last entry of a successful history holds a goal state. Following
//! `parent_index` links back from it reaches the root at index 0; both
//! walks collect goal-to-start and reverse at the end.

use std::fmt::Debug;

use crate::node::Node;

/// Collects the actions leading from the root to the last history entry.
///
/// Empty when the root itself was the goal (or the history is empty).
pub fn solution<S, A: Clone>(history: &[Node<S, A>]) -> Vec<A> {
    let Some(mut index) = history.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut actions = Vec::new();
    while let Some(action) = &history[index].origin {
        actions.push(action.clone());
        index = history[index].parent_index;
    }

    actions.reverse();
    actions
}

/// Collects the states from the root to the last history entry, inclusive.
pub fn path<S: Clone, A>(history: &[Node<S, A>]) -> Vec<S> {
    let Some(mut index) = history.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut states = Vec::new();
    while index > 0 {
        states.push(history[index].state.clone());
        index = history[index].parent_index;
    }
    states.push(history[0].state.clone());

    states.reverse();
    states
}

/// Renders a path and its solution as `s0 --a0--> s1 --a1--> s2`.
pub fn format_trace<S: Debug, A: Debug>(path: &[S], solution: &[A]) -> String {
    let mut output = String::new();

    for (step, state) in path.iter().enumerate() {
        if step > 0 {
            match solution.get(step - 1) {
                Some(action) => output.push_str(&format!(" --{action:?}--> ")),
                None => output.push_str(" --?--> "),
            }
        }
        output.push_str(&format!("{state:?}"));
    }

    output
}
