//! Open-boundary square lattices used to lay out two-dimensional spin
//! models on qubits. Sites are numbered row-major, `row * cols + col`.

use serde::{Deserialize, Serialize};

/// Square lattice stored as an adjacency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareLattice {
    rows: usize,
    cols: usize,
    adjacency: Vec<Vec<usize>>,
}

impl SquareLattice {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut adjacency = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                adjacency.push(open_neighbors(rows, cols, row, col));
            }
        }
        Self {
            rows,
            cols,
            adjacency,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_sites(&self) -> usize {
        self.rows * self.cols
    }

    /// Neighbors of `site` in the order up, down, left, right.
    pub fn neighbors(&self, site: usize) -> Option<&[usize]> {
        self.adjacency.get(site).map(Vec::as_slice)
    }

    pub fn adjacency_list(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Number of directed (site, neighbor) entries; each bond counts twice.
    pub fn num_directed_bonds(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// Square lattice stored as a dense 0/1 adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareLatticeMatrix {
    rows: usize,
    cols: usize,
    adjacency: Vec<u8>,
}

impl SquareLatticeMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        let n = rows * cols;
        let mut adjacency = vec![0u8; n * n];
        for row in 0..rows {
            for col in 0..cols {
                let index = row * cols + col;
                for nb in open_neighbors(rows, cols, row, col) {
                    adjacency[index * n + nb] = 1;
                }
            }
        }
        Self {
            rows,
            cols,
            adjacency,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_sites(&self) -> usize {
        self.rows * self.cols
    }

    /// Matrix entry (a, b); 0 for indices outside the lattice.
    pub fn entry(&self, a: usize, b: usize) -> u8 {
        let n = self.num_sites();
        if a >= n || b >= n {
            return 0;
        }
        self.adjacency[a * n + b]
    }

    pub fn are_neighbors(&self, a: usize, b: usize) -> bool {
        self.entry(a, b) == 1
    }

    /// Row-major copy of the adjacency matrix.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let n = self.num_sites();
        if n == 0 {
            return Vec::new();
        }
        self.adjacency.chunks(n).map(<[u8]>::to_vec).collect()
    }
}

fn open_neighbors(rows: usize, cols: usize, row: usize, col: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(4);
    if row > 0 {
        out.push((row - 1) * cols + col);
    }
    if row + 1 < rows {
        out.push((row + 1) * cols + col);
    }
    if col > 0 {
        out.push(row * cols + col - 1);
    }
    if col + 1 < cols {
        out.push(row * cols + col + 1);
    }
    out
}
