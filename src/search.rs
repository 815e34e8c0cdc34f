//! Generic uninformed graph search.
//!
//! The engine repeatedly peeks the next node off a [`Frontier`], records it
//! in an append-only expansion history, and either stops on a goal or queues
//! the node's unexplored successors. Which node comes next is decided
//! entirely by the frontier, so the same loop runs depth-first and
//! breadth-first search.
//!
//! Key properties:
//! - A state is queued at most once per search (first discovery wins)
//! - Goal membership is a hash-set lookup, never a scan
//! - Goal nodes are not expanded; an empty goal set exhausts the reachable graph
//! - History indices double as parent links for reconstruction

use std::collections::HashSet;
use std::hash::BuildHasher;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::frontier::{BreadthFirstFrontier, DepthFirstFrontier, Frontier};
use crate::node::Node;
use crate::problem::Problem;
use crate::reconstruct;

/// The node type a search over `P` records.
pub type SearchNode<P> = Node<<P as Problem>::State, <P as Problem>::Action>;

/// Exploration order used by [`GraphSearch::search_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

/// Where the engine stands after its most recent `search` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No search has completed, or the last one failed with an error.
    #[default]
    Idle,
    /// The last search reached a goal; `solution()` and `path()` are valid.
    SolutionFound,
    /// The last search emptied its frontier without reaching a goal.
    Exhausted,
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes taken off the frontier, including a final goal node.
    pub expanded: usize,
    /// Successor nodes produced by the problem, before explored-set filtering.
    pub generated: usize,
    /// Largest number of nodes pending on the frontier at once.
    pub max_frontier: usize,
}

/// A search engine bound to one problem.
///
/// Each `search*` call resets the history, statistics and status, so one
/// engine can run any number of independent searches in sequence. Results
/// of a search stay readable until the next one starts.
pub struct GraphSearch<P: Problem> {
    problem: P,
    history: Vec<SearchNode<P>>,
    status: SearchStatus,
    stats: SearchStats,
}

impl<P: Problem> GraphSearch<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            history: Vec::new(),
            status: SearchStatus::Idle,
            stats: SearchStats::default(),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Every node examined by the most recent search, in expansion order.
    pub fn history(&self) -> &[SearchNode<P>] {
        &self.history
    }

    /// Searches from `initial` until a state in `goals` is reached or
    /// `frontier` runs dry.
    ///
    /// Returns `Ok(true)` on success. Any nodes left in `frontier` from an
    /// earlier use are discarded first. A [`ProblemError`] raised by the
    /// problem aborts the search and leaves the engine [`SearchStatus::Idle`].
    ///
    /// [`ProblemError`]: crate::error::ProblemError
    pub fn search<F, H>(
        &mut self,
        initial: P::State,
        goals: &HashSet<P::State, H>,
        frontier: &mut F,
    ) -> Result<bool, SearchError>
    where
        F: Frontier<SearchNode<P>>,
        H: BuildHasher,
    {
        self.history.clear();
        self.status = SearchStatus::Idle;
        self.stats = SearchStats::default();
        frontier.clear();

        debug!(initial = ?initial, goals = goals.len(), "starting search");

        let mut explored: FxHashSet<P::State> = FxHashSet::default();
        explored.insert(initial.clone());
        frontier.add(Node::root(initial));
        self.stats.max_frontier = frontier.len();

        while !frontier.is_empty() {
            let current_index = self.history.len();
            self.history.push(frontier.peek()?.clone());
            self.stats.expanded += 1;

            let current = &self.history[current_index];
            trace!(index = current_index, state = ?current.state, "expanding");

            if goals.contains(&current.state) {
                self.status = SearchStatus::SolutionFound;
                debug!(
                    goal = ?current.state,
                    expanded = self.stats.expanded,
                    generated = self.stats.generated,
                    "goal reached"
                );
                return Ok(true);
            }

            let successors = self.problem.successors(&current.state)?;
            self.stats.generated += successors.len();

            // drop the current node before queueing, or a lone successor
            // would be peeked again in its place
            frontier.remove()?;

            for (action, state) in successors {
                if explored.insert(state.clone()) {
                    frontier.add(Node::child(state, current_index, action));
                }
            }
            self.stats.max_frontier = self.stats.max_frontier.max(frontier.len());
        }

        self.status = SearchStatus::Exhausted;
        debug!(
            expanded = self.stats.expanded,
            generated = self.stats.generated,
            "frontier exhausted without reaching a goal"
        );
        Ok(false)
    }

    /// Depth-first search: always expands the most recently discovered node.
    pub fn search_depth_first<H: BuildHasher>(
        &mut self,
        initial: P::State,
        goals: &HashSet<P::State, H>,
    ) -> Result<bool, SearchError> {
        let mut frontier = DepthFirstFrontier::new();
        self.search(initial, goals, &mut frontier)
    }

    /// Breadth-first search: expands nodes in order of distance from
    /// `initial`, so a found solution uses the fewest actions possible.
    pub fn search_breadth_first<H: BuildHasher>(
        &mut self,
        initial: P::State,
        goals: &HashSet<P::State, H>,
    ) -> Result<bool, SearchError> {
        let mut frontier = BreadthFirstFrontier::new();
        self.search(initial, goals, &mut frontier)
    }

    pub fn search_with<H: BuildHasher>(
        &mut self,
        strategy: Strategy,
        initial: P::State,
        goals: &HashSet<P::State, H>,
    ) -> Result<bool, SearchError> {
        match strategy {
            Strategy::DepthFirst => self.search_depth_first(initial, goals),
            Strategy::BreadthFirst => self.search_breadth_first(initial, goals),
        }
    }

    /// The actions leading from the initial state to the goal found by the
    /// last search. Empty when the initial state was itself a goal.
    pub fn solution(&self) -> Result<Vec<P::Action>, SearchError> {
        self.ensure_solved()?;
        Ok(reconstruct::solution(&self.history))
    }

    /// The states from the initial state to the goal, both inclusive.
    pub fn path(&self) -> Result<Vec<P::State>, SearchError> {
        self.ensure_solved()?;
        Ok(reconstruct::path(&self.history))
    }

    fn ensure_solved(&self) -> Result<(), SearchError> {
        match self.status {
            SearchStatus::SolutionFound => Ok(()),
            SearchStatus::Idle | SearchStatus::Exhausted => Err(SearchError::NoSolution),
        }
    }
}
