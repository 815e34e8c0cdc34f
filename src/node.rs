//! Search tree nodes.

/// A state together with how the search reached it.
///
/// `parent_index` points into the engine's expansion history and only ever
/// refers to an earlier entry. The root node points at itself (index 0) and
/// has no originating action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S, A> {
    pub state: S,
    pub parent_index: usize,
    /// The action that produced `state`; `None` for the root.
    pub origin: Option<A>,
}

impl<S, A> Node<S, A> {
    /// Creates the node for the initial state of a search.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent_index: 0,
            origin: None,
        }
    }

    pub fn child(state: S, parent_index: usize, action: A) -> Self {
        Self {
            state,
            parent_index,
            origin: Some(action),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.origin.is_none()
    }
}
