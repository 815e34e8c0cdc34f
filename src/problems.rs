//! Sample problem definitions.
//!
//! Small hand-checkable graphs used by the CLI, the tests and the
//! benchmarks. All of them share the four-direction [`Move`] action type.

use crate::error::ProblemError;
use crate::problem::Problem;

/// A step in one of four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// A line of states `1 - 2 - ... - length` joined by single edges.
///
/// `Right` adds one, `Left` subtracts one; no cycles.
#[derive(Debug, Clone, Copy)]
pub struct LinearChain {
    pub length: i32,
}

impl LinearChain {
    pub const fn new(length: i32) -> Self {
        Self { length }
    }

    fn contains(&self, state: i32) -> bool {
        (1..=self.length).contains(&state)
    }
}

impl Default for LinearChain {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Problem for LinearChain {
    type State = i32;
    type Action = Move;

    fn actions(&self, state: &i32) -> Result<Vec<Move>, ProblemError> {
        if !self.contains(*state) {
            return Err(ProblemError::unrecognized_state(state));
        }

        let mut actions = Vec::with_capacity(2);
        if *state < self.length {
            actions.push(Move::Right);
        }
        if *state > 1 {
            actions.push(Move::Left);
        }
        Ok(actions)
    }

    fn result(&self, state: &i32, action: &Move) -> Result<i32, ProblemError> {
        if !self.contains(*state) {
            return Err(ProblemError::unrecognized_action(state, action));
        }

        let next = match action {
            Move::Right => state.checked_add(1),
            Move::Left => state.checked_sub(1),
            Move::Up | Move::Down => None,
        };

        match next {
            Some(next) if self.contains(next) => Ok(next),
            _ => Err(ProblemError::unrecognized_action(state, action)),
        }
    }
}

/// An eleven-state graph with several cycles:
///
/// ```text
/// 1 - 2 - 3
/// |       |
/// 4       5 - 6 - 7
/// |       |       |
/// 8 - 9 - 10      |
/// |               |
/// ------- 11 -----+
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleGrid;

impl CycleGrid {
    /// Every state in the grid.
    pub const STATES: [i32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

    /// Outgoing edges of each state, in the order they are offered.
    fn edges(state: i32) -> Option<&'static [(Move, i32)]> {
        use Move::*;

        let edges: &'static [(Move, i32)] = match state {
            1 => &[(Down, 4), (Right, 2)],
            2 => &[(Left, 1), (Right, 3)],
            3 => &[(Down, 5), (Left, 2)],
            4 => &[(Down, 8), (Up, 1)],
            5 => &[(Down, 10), (Up, 3), (Right, 6)],
            6 => &[(Left, 5), (Right, 7)],
            7 => &[(Down, 11), (Left, 6)],
            8 => &[(Down, 11), (Up, 4), (Right, 9)],
            9 => &[(Left, 8), (Right, 10)],
            10 => &[(Up, 5), (Left, 9)],
            11 => &[(Left, 8), (Right, 7)],
            _ => return None,
        };
        Some(edges)
    }
}

impl Problem for CycleGrid {
    type State = i32;
    type Action = Move;

    fn actions(&self, state: &i32) -> Result<Vec<Move>, ProblemError> {
        let edges = Self::edges(*state).ok_or_else(|| ProblemError::unrecognized_state(state))?;
        Ok(edges.iter().map(|&(action, _)| action).collect())
    }

    fn result(&self, state: &i32, action: &Move) -> Result<i32, ProblemError> {
        let edges = Self::edges(*state).ok_or_else(|| ProblemError::unrecognized_state(state))?;
        edges
            .iter()
            .find(|(candidate, _)| candidate == action)
            .map(|&(_, next)| next)
            .ok_or_else(|| ProblemError::unrecognized_action(state, action))
    }
}

/// A position on a [`Ring`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(pub i32);

/// Slots `1..=size` arranged in a loop; the last slot wraps to the first.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    pub size: i32,
}

impl Ring {
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    fn contains(&self, slot: Slot) -> bool {
        (1..=self.size).contains(&slot.0)
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Problem for Ring {
    type State = Slot;
    type Action = Move;

    fn actions(&self, state: &Slot) -> Result<Vec<Move>, ProblemError> {
        if !self.contains(*state) {
            return Err(ProblemError::unrecognized_state(state));
        }
        Ok(vec![Move::Left, Move::Right])
    }

    fn result(&self, state: &Slot, action: &Move) -> Result<Slot, ProblemError> {
        if !self.contains(*state) {
            return Err(ProblemError::unrecognized_state(state));
        }

        let Slot(x) = *state;
        match action {
            Move::Left if x == 1 => Ok(Slot(self.size)),
            Move::Left => Ok(Slot(x - 1)),
            Move::Right if x == self.size => Ok(Slot(1)),
            Move::Right => Ok(Slot(x + 1)),
            Move::Up | Move::Down => Err(ProblemError::unrecognized_action(state, action)),
        }
    }
}

/// A cell on a [`Lattice`], as `(column, row)`.
pub type Cell = (i32, i32);

/// An open `width` x `height` grid. `Up` decreases the row, `Down`
/// increases it; moves off the edge are not offered.
#[derive(Debug, Clone, Copy)]
pub struct Lattice {
    pub width: i32,
    pub height: i32,
}

impl Lattice {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, (column, row): Cell) -> bool {
        (0..self.width).contains(&column) && (0..self.height).contains(&row)
    }

    /// Number of cells in the lattice.
    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

impl Problem for Lattice {
    type State = Cell;
    type Action = Move;

    fn actions(&self, state: &Cell) -> Result<Vec<Move>, ProblemError> {
        if !self.contains(*state) {
            return Err(ProblemError::unrecognized_state(state));
        }

        let (column, row) = *state;
        let mut actions = Vec::with_capacity(4);
        if column > 0 {
            actions.push(Move::Left);
        }
        if column < self.width - 1 {
            actions.push(Move::Right);
        }
        if row > 0 {
            actions.push(Move::Up);
        }
        if row < self.height - 1 {
            actions.push(Move::Down);
        }
        Ok(actions)
    }

    fn result(&self, state: &Cell, action: &Move) -> Result<Cell, ProblemError> {
        if !self.contains(*state) {
            return Err(ProblemError::unrecognized_action(state, action));
        }

        let (column, row) = *state;
        let next = match action {
            Move::Left => column.checked_sub(1).map(|column| (column, row)),
            Move::Right => column.checked_add(1).map(|column| (column, row)),
            Move::Up => row.checked_sub(1).map(|row| (column, row)),
            Move::Down => row.checked_add(1).map(|row| (column, row)),
        };

        match next {
            Some(next) if self.contains(next) => Ok(next),
            _ => Err(ProblemError::unrecognized_action(state, action)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_ends_offer_one_action() {
        let chain = LinearChain::default();
        assert_eq!(chain.actions(&1), Ok(vec![Move::Right]));
        assert_eq!(chain.actions(&5), Ok(vec![Move::Left]));
        assert_eq!(chain.actions(&3), Ok(vec![Move::Right, Move::Left]));
    }

    #[test]
    fn test_chain_rejects_foreign_input() {
        let chain = LinearChain::default();
        assert!(chain.actions(&0).is_err());
        assert!(chain.result(&5, &Move::Right).is_err());
        assert!(chain.result(&3, &Move::Up).is_err());
    }

    #[test]
    fn test_cycle_grid_edges_are_symmetric() {
        // every edge a -> b has a matching edge b -> a
        let grid = CycleGrid;
        for state in CycleGrid::STATES {
            for (_, next) in grid.successors(&state).unwrap() {
                let back: Vec<i32> = grid
                    .successors(&next)
                    .unwrap()
                    .into_iter()
                    .map(|(_, s)| s)
                    .collect();
                assert!(back.contains(&state), "Edge {state} -> {next} has no reverse");
            }
        }
    }

    #[test]
    fn test_cycle_grid_rejects_unknown_moves() {
        let grid = CycleGrid;
        assert_eq!(grid.result(&1, &Move::Right), Ok(2));
        assert_eq!(
            grid.result(&1, &Move::Up),
            Err(ProblemError::UnrecognizedAction {
                state: "1".to_string(),
                action: "Up".to_string(),
            })
        );
        assert!(grid.actions(&12).is_err());
    }

    #[test]
    fn test_ring_wraps_around() {
        let ring = Ring::default();
        assert_eq!(ring.result(&Slot(5), &Move::Right), Ok(Slot(1)));
        assert_eq!(ring.result(&Slot(1), &Move::Left), Ok(Slot(5)));
        assert_eq!(ring.result(&Slot(3), &Move::Left), Ok(Slot(2)));
        assert!(ring.result(&Slot(3), &Move::Down).is_err());
    }

    #[test]
    fn test_lattice_corners_and_edges() {
        let lattice = Lattice::new(3, 2);
        assert_eq!(lattice.actions(&(0, 0)), Ok(vec![Move::Right, Move::Down]));
        assert_eq!(
            lattice.actions(&(1, 1)),
            Ok(vec![Move::Left, Move::Right, Move::Up])
        );
        assert_eq!(lattice.result(&(1, 1), &Move::Up), Ok((1, 0)));
        assert!(lattice.result(&(0, 0), &Move::Left).is_err());
        assert_eq!(lattice.cell_count(), 6);
    }

    #[test]
    fn test_results_at_integer_limits_are_rejected() {
        let lattice = Lattice::new(3, 3);
        assert!(lattice.result(&(i32::MAX, 0), &Move::Right).is_err());
        assert!(lattice.result(&(0, i32::MIN), &Move::Up).is_err());

        let chain = LinearChain::default();
        assert_eq!(
            chain.result(&i32::MIN, &Move::Left),
            Err(ProblemError::UnrecognizedAction {
                state: i32::MIN.to_string(),
                action: "Left".to_string(),
            })
        );
        assert!(chain.result(&i32::MAX, &Move::Right).is_err());

        // a chain long enough to end at i32::MAX still refuses to step past it
        let long = LinearChain::new(i32::MAX);
        assert!(long.result(&i32::MAX, &Move::Right).is_err());
        assert_eq!(long.result(&i32::MAX, &Move::Left), Ok(i32::MAX - 1));
    }
}
