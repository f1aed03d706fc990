use serde::{Deserialize, Serialize};

use crate::cost::Cost;

/// Optimal assignment returned by [`lapjv`](crate::lapjv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<T> {
    /// Sum of the assigned matrix entries.
    pub cost: f64,
    /// Column assigned to each row.
    pub row_to_col: Vec<usize>,
    /// Row assigned to each column; the inverse of `row_to_col`.
    pub col_to_row: Vec<usize>,
    /// Row potentials `u` of the final dual solution.
    pub row_duals: Vec<T>,
    /// Column potentials `v` of the final dual solution.
    pub col_duals: Vec<T>,
}

impl<T: Cost> Solution<T> {
    /// Solution of the empty problem.
    pub fn empty() -> Self {
        Self {
            cost: 0.0,
            row_to_col: Vec::new(),
            col_to_row: Vec::new(),
            row_duals: Vec::new(),
            col_duals: Vec::new(),
        }
    }

    /// Dimension of the solved problem.
    pub fn len(&self) -> usize {
        self.row_to_col.len()
    }

    /// Returns `true` for the solution of a 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.row_to_col.is_empty()
    }

    /// Iterates over `(row, column)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col.iter().copied().enumerate()
    }

    /// Checks that both assignment arrays encode the same permutation.
    pub fn is_bijection(&self) -> bool {
        let n = self.row_to_col.len();
        if self.col_to_row.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for (row, col) in self.pairs() {
            if col >= n || seen[col] || self.col_to_row[col] != row {
                return false;
            }
            seen[col] = true;
        }
        true
    }
}
