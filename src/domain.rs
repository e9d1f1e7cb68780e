//! This module contains the mutable state of a solver run: the domain of
//! every cell together with a counter of cells that still await a digit.
//!
//! The [DomainStore] is the only data the search mutates. Snapshots for
//! backtracking are plain clones - since a [Domain] is a small `Copy` value,
//! cloning the store copies a fixed-size vector and never aliases the state
//! of a sibling search branch.

use crate::{GRID_SIZE, SudokuGrid};
use crate::constraint::PeerGraph;
use crate::util::DigitSet;

/// The domain of a single cell during search. A cell is either fixed to one
/// digit - because it was given as a clue or assigned during search - or it
/// carries the set of digits still consistent with the fixed cells around
/// it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Domain {

    /// The cell holds this digit. Fixed domains are never revised.
    Fixed(usize),

    /// The cell is unassigned and any digit of the contained set may still
    /// be entered. The set is non-empty as long as the surrounding
    /// assignment is consistent; an empty set signals a contradiction.
    Candidates(DigitSet)
}

impl Domain {

    /// Returns the digit this domain is fixed to, or `None` if the cell is
    /// still unassigned.
    pub fn fixed_value(&self) -> Option<usize> {
        match self {
            Domain::Fixed(digit) => Some(*digit),
            Domain::Candidates(_) => None
        }
    }

    /// Returns the candidate set of this domain, or `None` if the cell is
    /// fixed.
    pub fn candidates(&self) -> Option<DigitSet> {
        match self {
            Domain::Fixed(_) => None,
            Domain::Candidates(set) => Some(*set)
        }
    }
}

/// The per-cell domains of a solver run plus the number of cells that are
/// still unassigned. The search terminates successfully exactly when that
/// counter reaches 0, at which point every cell is [Domain::Fixed].
#[derive(Clone)]
pub struct DomainStore {
    domains: Vec<Domain>,
    unassigned: usize
}

impl DomainStore {

    /// Initializes the domains for the given grid. Cells with a clue become
    /// [Domain::Fixed] with that digit. Blank cells become
    /// [Domain::Candidates] containing every digit from 1 to 9 except those
    /// given as a clue in one of the cell's peers. This mirrors the initial
    /// constraint tightening a human solver performs before searching; full
    /// arc consistency is only established during search.
    pub fn from_grid(grid: &SudokuGrid, graph: &PeerGraph) -> DomainStore {
        let mut domains = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        let mut unassigned = 0;

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                let domain = match grid.get_cell(column, row).unwrap() {
                    Some(digit) => Domain::Fixed(digit),
                    None => {
                        let mut candidates = DigitSet::full();

                        for &(peer_column, peer_row) in
                                graph.peers(column, row) {
                            let peer_cell = grid
                                .get_cell(peer_column, peer_row)
                                .unwrap();

                            if let Some(digit) = peer_cell {
                                candidates.remove(digit);
                            }
                        }

                        unassigned += 1;
                        Domain::Candidates(candidates)
                    }
                };

                domains.push(domain);
            }
        }

        DomainStore {
            domains,
            unassigned
        }
    }

    /// Gets the current domain of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    pub fn domain(&self, column: usize, row: usize) -> Domain {
        self.domains[crate::index(column, row)]
    }

    /// Fixes the cell at the specified position to the given digit and
    /// decrements the unassigned counter. The cell must currently be in the
    /// [Domain::Candidates] state.
    pub fn assign(&mut self, column: usize, row: usize, digit: usize) {
        let index = crate::index(column, row);
        debug_assert!(matches!(self.domains[index], Domain::Candidates(_)),
            "assigning an already fixed cell");
        self.domains[index] = Domain::Fixed(digit);
        self.unassigned -= 1;
    }

    /// Replaces the candidate set of the cell at the specified position. The
    /// cell must currently be in the [Domain::Candidates] state. This is the
    /// primitive by which propagation shrinks domains; it never turns a
    /// candidate cell into a fixed one.
    pub(crate) fn replace_candidates(&mut self, column: usize, row: usize,
            candidates: DigitSet) {
        let index = crate::index(column, row);
        debug_assert!(matches!(self.domains[index], Domain::Candidates(_)),
            "revising an already fixed cell");
        self.domains[index] = Domain::Candidates(candidates);
    }

    /// Returns the number of cells that are still in the
    /// [Domain::Candidates] state.
    pub fn unassigned(&self) -> usize {
        self.unassigned
    }

    /// Indicates whether every cell is fixed, i.e. the search has found a
    /// complete assignment.
    pub fn is_complete(&self) -> bool {
        self.unassigned == 0
    }

    /// Copies every fixed digit into a [SudokuGrid]. Cells which are still
    /// unassigned stay blank, so the result is a full grid if and only if
    /// this store [is complete](DomainStore::is_complete).
    pub fn to_grid(&self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if let Domain::Fixed(digit) = self.domain(column, row) {
                    grid.set_cell(column, row, digit).unwrap();
                }
            }
        }

        grid
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;

    fn store_for(code: &str) -> DomainStore {
        let grid = SudokuGrid::parse(code).unwrap();
        DomainStore::from_grid(&grid, &PeerGraph::new())
    }

    #[test]
    fn empty_grid_has_full_domains() {
        let store = store_for(&"0".repeat(81));

        assert_eq!(81, store.unassigned());
        assert!(!store.is_complete());

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                assert_eq!(Domain::Candidates(DigitSet::full()),
                    store.domain(column, row));
            }
        }
    }

    #[test]
    fn clues_become_fixed_domains() {
        let mut code = "0".repeat(81);
        code.replace_range(0..1, "5");
        let store = store_for(&code);

        assert_eq!(80, store.unassigned());
        assert_eq!(Domain::Fixed(5), store.domain(0, 0));
    }

    #[test]
    fn initial_candidates_exclude_given_peers() {
        // 1 and 2 in the first row, 3 below in the first column, 4 in the
        // box of the top-left cell.
        let mut code = "0".repeat(81);
        code.replace_range(1..3, "12");
        code.replace_range(9..11, "04");
        code.replace_range(18..19, "3");
        let store = store_for(&code);

        assert_eq!(Domain::Candidates(digits!(5, 6, 7, 8, 9)),
            store.domain(0, 0));

        // A cell outside the top-left box only sees the row clues.
        assert_eq!(Domain::Candidates(digits!(3, 4, 5, 6, 7, 8, 9)),
            store.domain(5, 0));
    }

    #[test]
    fn assign_fixes_cell_and_decrements_counter() {
        let mut store = store_for(&"0".repeat(81));
        store.assign(3, 4, 7);

        assert_eq!(80, store.unassigned());
        assert_eq!(Domain::Fixed(7), store.domain(3, 4));
    }

    #[test]
    fn snapshots_are_independent() {
        let mut store = store_for(&"0".repeat(81));
        let snapshot = store.clone();

        store.assign(0, 0, 1);
        store.replace_candidates(1, 0, digits!(2));

        assert_eq!(81, snapshot.unassigned());
        assert_eq!(Domain::Candidates(DigitSet::full()),
            snapshot.domain(0, 0));
        assert_eq!(Domain::Candidates(DigitSet::full()),
            snapshot.domain(1, 0));
    }

    #[test]
    fn to_grid_copies_fixed_digits() {
        let mut store = store_for(&"0".repeat(81));
        store.assign(2, 1, 6);
        let grid = store.to_grid();

        assert_eq!(Some(6), grid.get_cell(2, 1).unwrap());
        assert_eq!(None, grid.get_cell(0, 0).unwrap());
    }
}
