//! Frontier strategies for the graph search.
//!
//! A frontier holds discovered nodes that have not been expanded yet. The
//! engine only talks to the [`Frontier`] trait, so the exploration order is
//! decided entirely by which implementation the caller hands in:
//! - [`DepthFirstFrontier`]: last-in-first-out, dives deep before backtracking
//! - [`BreadthFirstFrontier`]: first-in-first-out, expands layer by layer

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::FrontierError;

/// The four-operation contract the search engine is written against.
pub trait Frontier<T> {
    /// Inserts an item. Never rejects input.
    fn add(&mut self, item: T);

    /// Returns the item that would be expanded next, without removing it.
    fn peek(&self) -> Result<&T, FrontierError>;

    /// Discards the item last returned by [`peek`](Frontier::peek).
    fn remove(&mut self) -> Result<(), FrontierError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Drops every pending item.
    fn clear(&mut self);
}

/// Retrieval policy for an [`OrderedFrontier`].
///
/// Items are always appended at the back; a policy only decides which end
/// of the deque is served next.
pub trait Retrieval {
    fn next<T>(items: &VecDeque<T>) -> Option<&T>;
    fn take<T>(items: &mut VecDeque<T>) -> Option<T>;
}

/// Serves the most recently added item.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifo;

/// Serves the earliest added item.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl Retrieval for Lifo {
    #[inline]
    fn next<T>(items: &VecDeque<T>) -> Option<&T> {
        items.back()
    }

    #[inline]
    fn take<T>(items: &mut VecDeque<T>) -> Option<T> {
        items.pop_back()
    }
}

impl Retrieval for Fifo {
    #[inline]
    fn next<T>(items: &VecDeque<T>) -> Option<&T> {
        items.front()
    }

    #[inline]
    fn take<T>(items: &mut VecDeque<T>) -> Option<T> {
        items.pop_front()
    }
}

/// A deque-backed frontier whose retrieval order is fixed by `O`.
#[derive(Debug, Clone)]
pub struct OrderedFrontier<T, O> {
    items: VecDeque<T>,
    order: PhantomData<O>,
}

/// Last-in-first-out frontier for depth-first search.
pub type DepthFirstFrontier<T> = OrderedFrontier<T, Lifo>;

/// First-in-first-out frontier for breadth-first search.
pub type BreadthFirstFrontier<T> = OrderedFrontier<T, Fifo>;

impl<T, O> OrderedFrontier<T, O> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            order: PhantomData,
        }
    }
}

impl<T, O> Default for OrderedFrontier<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: Retrieval> Frontier<T> for OrderedFrontier<T, O> {
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn peek(&self) -> Result<&T, FrontierError> {
        O::next(&self.items).ok_or(FrontierError::Empty)
    }

    fn remove(&mut self) -> Result<(), FrontierError> {
        O::take(&mut self.items)
            .map(drop)
            .ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
