//! Generic Graph Search Library
//!
//! Finds a path from an initial state to any state in a goal set over an
//! implicit, possibly cyclic state graph. Callers describe the graph by
//! implementing [`Problem`]; the exploration order is chosen by the
//! [`Frontier`] the search runs with (depth-first or breadth-first).

pub mod error;
pub mod frontier;
pub mod node;
pub mod problem;
pub mod problems;
pub mod reconstruct;
pub mod search;

pub use error::{FrontierError, ProblemError, SearchError};
pub use frontier::{BreadthFirstFrontier, DepthFirstFrontier, Frontier};
pub use node::Node;
pub use problem::Problem;
pub use search::{GraphSearch, SearchStats, SearchStatus, Strategy};
