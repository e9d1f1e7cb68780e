//! This module contains the arc-consistency propagation that runs after
//! every assignment the search makes.
//!
//! The constraints of Sudoku are binary inequalities between peer cells, so
//! the classical AC-3 worklist algorithm applies directly: a directed arc
//! `(Xi, Xj)` demands that every candidate of `Xi` is compatible with *some*
//! value `Xj` can still take. Since the only relation is inequality, a
//! candidate of `Xi` loses its support exactly when `Xj` can hold nothing
//! but that digit.

use crate::constraint::{Cell, PeerGraph};
use crate::domain::{Domain, DomainStore};

use std::collections::VecDeque;

fn revise(store: &mut DomainStore, x_i: Cell, x_j: Cell) -> bool {
    let (i_column, i_row) = x_i;
    let (j_column, j_row) = x_j;
    let candidates = match store.domain(i_column, i_row) {
        Domain::Fixed(_) => return false,
        Domain::Candidates(candidates) => candidates
    };
    let mut revised = candidates;

    for digit in candidates.iter() {
        let supported = match store.domain(j_column, j_row) {
            Domain::Fixed(value) => value != digit,
            Domain::Candidates(neighbor) => {
                let mut others = neighbor;
                others.remove(digit);
                !others.is_empty()
            }
        };

        if !supported {
            revised.remove(digit);
        }
    }

    if revised == candidates {
        false
    }
    else {
        store.replace_candidates(i_column, i_row, revised);
        true
    }
}

/// Restores arc consistency after the domain of the cell at the specified
/// position has been reduced, typically by fixing it to a digit.
///
/// A worklist is seeded with the arcs `(peer, cell)` for every peer that is
/// still unassigned. Each popped arc `(Xi, Xj)` is revised: candidates of
/// `Xi` without support in the domain of `Xj` are removed. If a revision
/// shrinks a domain without emptying it, the arcs `(Xk, Xi)` of all other
/// unassigned peers `Xk` of `Xi` are enqueued again, since the smaller
/// domain may now constrain them further.
///
/// Returns `false` as soon as any domain becomes empty, meaning the current
/// partial assignment is contradictory. The domains already shrunk by then
/// are *not* restored - rolling back to a snapshot is the caller's
/// responsibility. Returns `true` once the worklist drains without a
/// contradiction; the surviving domains have been tightened in place.
pub fn propagate(graph: &PeerGraph, store: &mut DomainStore, column: usize,
        row: usize) -> bool {
    let mut worklist: VecDeque<(Cell, Cell)> = VecDeque::new();

    for &peer in graph.peers(column, row) {
        if matches!(store.domain(peer.0, peer.1), Domain::Candidates(_)) {
            worklist.push_back((peer, (column, row)));
        }
    }

    while let Some((x_i, x_j)) = worklist.pop_front() {
        if revise(store, x_i, x_j) {
            let (i_column, i_row) = x_i;

            match store.domain(i_column, i_row) {
                Domain::Candidates(candidates) if candidates.is_empty() =>
                    return false,
                _ => {}
            }

            for &x_k in graph.peers(i_column, i_row) {
                if x_k != x_j && matches!(store.domain(x_k.0, x_k.1),
                        Domain::Candidates(_)) {
                    worklist.push_back((x_k, x_i));
                }
            }
        }
    }

    true
}
