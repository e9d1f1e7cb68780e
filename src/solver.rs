//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [CspSolver](struct.CspSolver.html), which treats the puzzle as a
//! constraint satisfaction problem: every cell is a variable, its domain is
//! the set of digits it can still hold, and every pair of peer cells is
//! bound by an inequality constraint. The solver runs a backtracking search
//! whose branching is guided by the [heuristic] module and whose domains are
//! pruned after every assignment by the [propagation] module.

pub mod heuristic;
pub mod propagation;

use crate::{GRID_SIZE, SudokuGrid};
use crate::constraint::PeerGraph;
use crate::domain::{Domain, DomainStore};

/// The result of a solver run. The search stops at the first complete
/// assignment it finds, so a puzzle with more than one solution yields one
/// of them - which one is deterministic, since all heuristic tie-breaks are.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the puzzle has no solution at all. This is also the
    /// result for contradictory inputs, such as a grid with two equal clues
    /// in one row.
    Impossible,

    /// Indicates that a complete assignment was found, which is wrapped in
    /// this instance. Every cell of the contained grid holds a digit.
    Solved(SudokuGrid)
}

/// A trait for structs which have the ability to solve Sudoku. The provided
/// grid is the puzzle; blank cells are the variables to fill.
pub trait Solver {

    /// Solves, or attempts to solve, the provided puzzle. Implementations
    /// shall return `Solution::Impossible` if and only if no complete
    /// consistent assignment extends the given clues.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// A [Solver](trait.Solver.html) which models the puzzle as a constraint
/// satisfaction problem and searches for a solution by backtracking.
///
/// Each search step selects the most constrained unassigned cell (fewest
/// remaining candidates, ties broken towards the cell constraining the most
/// unassigned peers), tries its candidates in least-constraining-value
/// order, and after every tentative assignment enforces arc consistency
/// over the affected part of the constraint graph. Failed branches are
/// undone by restoring a snapshot of all domains, so sibling branches never
/// observe each other's prunings.
pub struct CspSolver;

impl CspSolver {
    fn consistent(graph: &PeerGraph, store: &DomainStore, column: usize,
            row: usize, digit: usize) -> bool {
        graph.peers(column, row).iter()
            .all(|&(peer_column, peer_row)|
                store.domain(peer_column, peer_row).fixed_value()
                    != Some(digit))
    }

    // Two equal clues are both Fixed from the start, so no revised arc ever
    // compares them. They have to be rejected before the search begins or
    // an invalid grid could be completed around them.
    fn clues_consistent(graph: &PeerGraph, store: &DomainStore) -> bool {
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if let Domain::Fixed(digit) = store.domain(column, row) {
                    if !CspSolver::consistent(graph, store, column, row,
                            digit) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn backtrack(graph: &PeerGraph, store: &mut DomainStore) -> bool {
        if store.is_complete() {
            return true;
        }

        let (column, row) = match heuristic::select_cell(graph, store) {
            Some(cell) => cell,
            None => return true
        };

        for digit in heuristic::order_values(graph, store, column, row) {
            if !CspSolver::consistent(graph, store, column, row, digit) {
                continue;
            }

            let snapshot = store.clone();
            store.assign(column, row, digit);

            if propagation::propagate(graph, store, column, row) &&
                    CspSolver::backtrack(graph, store) {
                return true;
            }

            *store = snapshot;
        }

        false
    }

    fn solve(graph: &PeerGraph, store: &mut DomainStore) -> Solution {
        if !CspSolver::clues_consistent(graph, store) {
            return Solution::Impossible;
        }

        if CspSolver::backtrack(graph, store) {
            Solution::Solved(store.to_grid())
        }
        else {
            Solution::Impossible
        }
    }
}

impl Solver for CspSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let graph = PeerGraph::new();
        let mut store = DomainStore::from_grid(grid, &graph);
        CspSolver::solve(&graph, &mut store)
    }
}
