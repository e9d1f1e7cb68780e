//! This module contains the ordering heuristics that guide the backtracking
//! search.
//!
//! Two decisions are made at every branching point: which unassigned cell to
//! fill next ([select_cell]) and in which order to try its candidate digits
//! ([order_values]). Neither decision affects correctness - any ordering
//! eventually explores the same search space - but both drastically shrink
//! the number of dead ends visited in practice.

use crate::GRID_SIZE;
use crate::constraint::{Cell, PeerGraph};
use crate::domain::{Domain, DomainStore};

fn live_peers(graph: &PeerGraph, store: &DomainStore, column: usize,
        row: usize) -> usize {
    graph.peers(column, row).iter()
        .filter(|&&(peer_column, peer_row)|
            matches!(store.domain(peer_column, peer_row),
                Domain::Candidates(_)))
        .count()
}

/// Selects the unassigned cell the search should branch on next, or `None`
/// if every cell is already fixed.
///
/// The most constrained cell wins: among all cells still holding a candidate
/// set, those with the fewest candidates are collected. Ties are broken by
/// the most constraining cell, i.e. the one with the most peers that are
/// themselves still unassigned, since fixing it prunes the most neighbor
/// domains. If that count ties as well, the cell encountered last wins.
///
/// All scans run in row-major order (row by row, left to right), which makes
/// both tie-breaks reproducible: the same store always yields the same cell.
pub fn select_cell(graph: &PeerGraph, store: &DomainStore) -> Option<Cell> {
    let mut most_constrained: Vec<Cell> = Vec::new();
    let mut fewest_candidates = usize::MAX;

    for row in 0..GRID_SIZE {
        for column in 0..GRID_SIZE {
            if let Domain::Candidates(candidates) = store.domain(column, row) {
                let len = candidates.len();

                if len < fewest_candidates {
                    most_constrained.clear();
                    fewest_candidates = len;
                }

                if len == fewest_candidates {
                    most_constrained.push((column, row));
                }
            }
        }
    }

    let mut selected = None;
    let mut most_constraining = 0;

    for &(column, row) in &most_constrained {
        let constrained_peers = live_peers(graph, store, column, row);

        if constrained_peers >= most_constraining {
            selected = Some((column, row));
            most_constraining = constrained_peers;
        }
    }

    selected
}

/// Orders the candidate digits of the cell at the specified position by the
/// least-constraining-value heuristic: for every candidate, the number of
/// unassigned peers whose candidate set also contains it is counted, and
/// digits with lower counts come first, since they leave the neighbors the
/// most options. Digits with equal counts keep their ascending order.
///
/// If the cell is already fixed, an empty vector is returned.
pub fn order_values(graph: &PeerGraph, store: &DomainStore, column: usize,
        row: usize) -> Vec<usize> {
    let candidates = match store.domain(column, row) {
        Domain::Fixed(_) => return Vec::new(),
        Domain::Candidates(candidates) => candidates
    };

    let mut ordered: Vec<(usize, usize)> = candidates.iter()
        .map(|digit| {
            let affected = graph.peers(column, row).iter()
                .filter(|&&(peer_column, peer_row)|
                    match store.domain(peer_column, peer_row) {
                        Domain::Candidates(peer_candidates) =>
                            peer_candidates.contains(digit),
                        Domain::Fixed(_) => false
                    })
                .count();
            (digit, affected)
        })
        .collect();

    // Vec::sort_by_key is stable, so ties keep the ascending digit order.
    ordered.sort_by_key(|&(_, affected)| affected);
    ordered.into_iter()
        .map(|(digit, _)| digit)
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::SudokuGrid;

    fn setup(code: &str) -> (PeerGraph, DomainStore) {
        let grid = SudokuGrid::parse(code).unwrap();
        let graph = PeerGraph::new();
        let store = DomainStore::from_grid(&grid, &graph);
        (graph, store)
    }

    #[test]
    fn select_cell_on_complete_store_is_none() {
        let (graph, store) = setup(&"123456789".repeat(9));
        assert_eq!(None, select_cell(&graph, &store));
    }

    #[test]
    fn select_cell_prefers_fewest_candidates() {
        // The first row contains 1 to 7, so only its last two cells have
        // two candidates left while every other blank cell has more. They
        // tie on both counts, so the later one wins.
        let mut code = String::from("123456700");
        code.push_str(&"0".repeat(72));
        let (graph, store) = setup(&code);

        assert_eq!(Some((8, 0)), select_cell(&graph, &store));
    }

    #[test]
    fn select_cell_breaks_candidate_ties_by_live_peer_count() {
        // (7, 0) and (8, 0) both have the candidates {8, 9}. The clue in
        // column 8 fixes one of the peers of (8, 0), so (7, 0) has more
        // unassigned peers and must win despite coming first.
        let mut code = String::from("123456700");
        code.push_str(&"0".repeat(36));
        code.push_str("000000001");
        code.push_str(&"0".repeat(27));
        let (graph, store) = setup(&code);

        assert_eq!(Some((7, 0)), select_cell(&graph, &store));
    }

    #[test]
    fn select_cell_breaks_full_ties_by_last_in_row_major_order() {
        // On an empty grid every cell has nine candidates and twenty
        // unassigned peers, so the tie-break falls through to the last cell
        // scanned.
        let (graph, store) = setup(&"0".repeat(81));
        assert_eq!(Some((8, 8)), select_cell(&graph, &store));
    }

    #[test]
    fn order_values_of_fixed_cell_is_empty() {
        let mut code = String::from("5");
        code.push_str(&"0".repeat(80));
        let (graph, store) = setup(&code);

        assert!(order_values(&graph, &store, 0, 0).is_empty());
    }

    #[test]
    fn order_values_ties_keep_ascending_order() {
        let (graph, store) = setup(&"0".repeat(81));
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
            order_values(&graph, &store, 0, 0));
    }

    #[test]
    fn order_values_puts_least_constraining_digit_first() {
        // (8, 0) has the candidates {8, 9}. The clue 9 in row 5 removes 9
        // from the options of (8, 5), a peer of (8, 0), so fewer peers are
        // affected by a 9 than by an 8.
        let mut code = String::from("123456700");
        code.push_str(&"0".repeat(36));
        code.push_str("900000000");
        code.push_str(&"0".repeat(27));
        let (graph, store) = setup(&code);

        assert_eq!(vec![9, 8], order_values(&graph, &store, 8, 0));
    }
}
