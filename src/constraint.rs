//! This module defines the constraint structure of a 9x9 Sudoku grid.
//!
//! The rules of Sudoku are pairwise inequality constraints: a cell must
//! differ from every other cell in its row, its column, and its 3x3 box.
//! Cells related to a given cell in this way are called its *peers*. The
//! [PeerGraph] computed here is the only constraint representation the
//! solver needs - an arc of the constraint graph is simply an ordered pair
//! of peer cells.

use crate::{BLOCK_SIZE, GRID_SIZE};

/// A cell of the grid, represented by its coordinates in the form
/// `(column, row)`, each in the range `[0, 9[`.
pub type Cell = (usize, usize);

/// The number of peers every cell has: 8 in its row, 8 in its column, and
/// the 4 cells of its box that share neither row nor column with it.
pub const PEERS_PER_CELL: usize = 20;

/// The constraint graph of a 9x9 Sudoku grid. For every cell it stores the
/// set of peer cells which must hold a different digit. The graph is fixed
/// at construction and never mutated; every peer list contains exactly
/// [PEERS_PER_CELL] distinct cells and never the cell itself.
pub struct PeerGraph {
    peers: Vec<Vec<Cell>>
}

fn block_origin(column: usize, row: usize) -> (usize, usize) {
    (column - column % BLOCK_SIZE, row - row % BLOCK_SIZE)
}

fn peers_of(column: usize, row: usize) -> Vec<Cell> {
    let mut peers = Vec::with_capacity(PEERS_PER_CELL);

    for peer_column in 0..GRID_SIZE {
        if peer_column != column {
            peers.push((peer_column, row));
        }
    }

    for peer_row in 0..GRID_SIZE {
        if peer_row != row {
            peers.push((column, peer_row));
        }
    }

    let (origin_column, origin_row) = block_origin(column, row);

    for peer_row in origin_row..(origin_row + BLOCK_SIZE) {
        for peer_column in origin_column..(origin_column + BLOCK_SIZE) {
            // Box cells sharing the row or column are already present.
            if peer_column != column && peer_row != row {
                peers.push((peer_column, peer_row));
            }
        }
    }

    peers
}

impl PeerGraph {

    /// Creates the peer graph of the 9x9 grid. The peer lists are built in a
    /// deterministic order: row peers by ascending column, then column peers
    /// by ascending row, then the remaining box peers in row-major order.
    pub fn new() -> PeerGraph {
        let mut peers = Vec::with_capacity(GRID_SIZE * GRID_SIZE);

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                peers.push(peers_of(column, row));
            }
        }

        PeerGraph {
            peers
        }
    }

    /// Gets the peers of the cell at the specified position, that is, all
    /// cells which share a row, column, or box with it, excluding the cell
    /// itself.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cell. Must be in the
    /// range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cell. Must be in the range
    /// `[0, 9[`.
    pub fn peers(&self, column: usize, row: usize) -> &[Cell] {
        &self.peers[crate::index(column, row)]
    }
}

impl Default for PeerGraph {
    fn default() -> PeerGraph {
        PeerGraph::new()
    }
}
