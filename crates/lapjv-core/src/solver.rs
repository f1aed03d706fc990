//! Jonker-Volgenant shortest augmenting path solver.
//!
//! The routine runs four phases in order: column reduction, reduction
//! transfer, two passes of augmenting row reduction and finally a shortest
//! augmenting path search for every row still free. Iteration order is
//! significant when several optimal permutations exist. Columns are reduced
//! from last to first, rows are always visited from first to last and ties
//! keep the lowest index, so the returned permutation is reproducible.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::cost::Cost;
use crate::errors::LapError;
use crate::solution::Solution;
use crate::validate::{check_admissible, check_square};

/// Dual variables and the partial assignment shared by all phases.
struct DualState<T> {
    v: Vec<T>,
    row_to_col: Vec<Option<usize>>,
    col_to_row: Vec<Option<usize>>,
}

impl<T: Cost> DualState<T> {
    fn new(dim: usize) -> Self {
        Self {
            v: vec![T::ZERO; dim],
            row_to_col: vec![None; dim],
            col_to_row: vec![None; dim],
        }
    }

    fn assign(&mut self, row: usize, col: usize) {
        self.row_to_col[row] = Some(col);
        self.col_to_row[col] = Some(row);
    }
}

/// Solves the assignment problem for a square cost matrix.
///
/// The matrix must be square: every row has exactly `matrix.len()` entries.
/// Use [`to_square`](crate::to_square) on rectangular input and [`solve`] when
/// the shape has not been checked. Integer entries must leave headroom below
/// `T::MAX`, since reduced costs are formed by plain subtraction.
///
/// ```
/// let matrix = vec![vec![5, 2, 9, 2], vec![6, 4, 6, 2], vec![2, 4, 5, 1], vec![2, 4, 5, 1]];
/// let solution = lapjv_core::lapjv(&matrix);
/// assert_eq!(solution.cost, 11.0);
/// assert_eq!(solution.row_to_col, vec![1, 2, 3, 0]);
/// ```
pub fn lapjv<T, R>(matrix: &[R]) -> Solution<T>
where
    T: Cost,
    R: AsRef<[T]>,
{
    let dim = matrix.len();
    if dim == 0 {
        return Solution::empty();
    }
    debug!(dim, "solving assignment problem");

    let mut state = DualState::new(dim);
    let matches = column_reduction(matrix, &mut state);
    let mut free = reduction_transfer(matrix, &mut state, &matches);
    debug!(free = free.len(), "column reduction complete");

    for pass in 0..2 {
        free = augmenting_row_reduction(matrix, &mut state, free);
        debug!(pass, free = free.len(), "augmenting row reduction pass complete");
    }

    let mut search = PathSearch::new(dim);
    for &row in &free {
        search.augment(matrix, &mut state, row);
    }

    let solution = finalize(matrix, state);
    debug!(cost = solution.cost, "assignment solved");
    solution
}

/// Validates the matrix and solves it with [`lapjv`].
///
/// Rejects ragged or non-square input with [`LapError::Shape`] and entries
/// that cannot be ordered (NaN, infinities) with [`LapError::Domain`].
pub fn solve<T, R>(matrix: &[R]) -> Result<Solution<T>, LapError>
where
    T: Cost,
    R: AsRef<[T]>,
{
    check_square(matrix)?;
    check_admissible(matrix)?;
    Ok(lapjv(matrix))
}

/// Seeds `v` with column minima and assigns each row the first column that
/// claims it. Returns the per-row claim counters.
fn column_reduction<T: Cost, R: AsRef<[T]>>(matrix: &[R], state: &mut DualState<T>) -> Vec<usize> {
    let dim = matrix.len();
    let mut matches = vec![0usize; dim];
    for j in (0..dim).rev() {
        let mut min = matrix[0].as_ref()[j];
        let mut imin = 0;
        for (i, row) in matrix.iter().enumerate().skip(1) {
            let value = row.as_ref()[j];
            if value < min {
                min = value;
                imin = i;
            }
        }

        state.v[j] = min;
        matches[imin] += 1;
        if matches[imin] == 1 {
            state.assign(imin, j);
        } else {
            state.col_to_row[j] = None;
        }
    }
    matches
}

/// Tightens `v` for rows claimed exactly once and collects unclaimed rows.
fn reduction_transfer<T: Cost, R: AsRef<[T]>>(
    matrix: &[R],
    state: &mut DualState<T>,
    matches: &[usize],
) -> Vec<usize> {
    let mut free = Vec::new();
    for (i, row) in matrix.iter().enumerate() {
        match matches[i] {
            0 => free.push(i),
            1 => {
                let Some(j1) = state.row_to_col[i] else {
                    continue;
                };
                let row = row.as_ref();
                let mut min = T::INFINITY;
                for (j, (&value, &dual)) in row.iter().zip(&state.v).enumerate() {
                    let reduced = value - dual;
                    if j != j1 && reduced < min {
                        min = reduced;
                    }
                }
                // A 1×1 matrix has no competing column.
                if min < T::INFINITY {
                    state.v[j1] -= min;
                }
            }
            _ => {}
        }
    }
    free
}

/// One pass of augmenting row reduction.
///
/// A row displaced after a strict improvement is retried at once; a row
/// displaced on a tie is returned for the next pass.
fn augmenting_row_reduction<T: Cost, R: AsRef<[T]>>(
    matrix: &[R],
    state: &mut DualState<T>,
    free: Vec<usize>,
) -> Vec<usize> {
    let dim = matrix.len();
    let mut queue = VecDeque::from(free);
    let mut deferred = Vec::new();

    while let Some(i) = queue.pop_front() {
        let row = matrix[i].as_ref();
        let mut umin = row[0] - state.v[0];
        let mut usubmin = T::INFINITY;
        let mut j1 = 0;
        let mut j2 = 0;
        for j in 1..dim {
            let h = row[j] - state.v[j];
            if h < usubmin {
                if h >= umin {
                    usubmin = h;
                    j2 = j;
                } else {
                    usubmin = umin;
                    umin = h;
                    j2 = j1;
                    j1 = j;
                }
            }
        }

        let improved = umin < usubmin;
        let mut i0 = state.col_to_row[j1];
        if improved {
            state.v[j1] -= usubmin - umin;
        } else if i0.is_some() {
            j1 = j2;
            i0 = state.col_to_row[j2];
        }

        state.assign(i, j1);
        if let Some(i0) = i0 {
            if improved {
                queue.push_front(i0);
            } else {
                deferred.push(i0);
            }
        }
    }
    deferred
}

/// Scratch space for the shortest augmenting path search.
///
/// `cols` is a permutation of the column indices split by `low` and `up`:
/// `cols[..low]` are scanned, `cols[low..up]` form the frontier at distance
/// `min` and `cols[up..]` are not reached yet. The buffers are allocated once
/// per solve and reset for every free row.
struct PathSearch<T> {
    dist: Vec<T>,
    pred: Vec<usize>,
    cols: Vec<usize>,
    low: usize,
    up: usize,
    /// Length of the scanned prefix when the current bucket was opened; only
    /// these columns receive the dual update.
    settled: usize,
    min: T,
}

impl<T: Cost> PathSearch<T> {
    fn new(dim: usize) -> Self {
        Self {
            dist: vec![T::ZERO; dim],
            pred: vec![0; dim],
            cols: (0..dim).collect(),
            low: 0,
            up: 0,
            settled: 0,
            min: T::ZERO,
        }
    }

    fn reset(&mut self, row: &[T], v: &[T], free_row: usize) {
        for (j, (&value, &dual)) in row.iter().zip(v).enumerate() {
            self.dist[j] = value - dual;
            self.pred[j] = free_row;
            self.cols[j] = j;
        }
        self.low = 0;
        self.up = 0;
        self.settled = 0;
    }

    /// Finds a shortest augmenting path from `free_row`, updates the duals and
    /// flips the assignments along it.
    fn augment<R: AsRef<[T]>>(&mut self, matrix: &[R], state: &mut DualState<T>, free_row: usize) {
        self.reset(matrix[free_row].as_ref(), &state.v, free_row);

        let end_of_path = loop {
            if self.low == self.up {
                if let Some(col) = self.open_bucket(&state.col_to_row) {
                    break col;
                }
            }
            if let Some(col) = self.scan(matrix, state) {
                break col;
            }
        };

        for &col in &self.cols[..self.settled] {
            state.v[col] += self.dist[col] - self.min;
        }

        let mut col = end_of_path;
        loop {
            let row = self.pred[col];
            state.col_to_row[col] = Some(row);
            let previous = state.row_to_col[row].replace(col);
            if row == free_row {
                break;
            }
            match previous {
                Some(next) => col = next,
                None => break,
            }
        }
        trace!(free_row, end_of_path, "augmented");
    }

    /// Moves every unreached column at the minimum distance into the frontier.
    /// Returns an unassigned frontier column if there is one.
    fn open_bucket(&mut self, col_to_row: &[Option<usize>]) -> Option<usize> {
        let dim = self.cols.len();
        self.settled = self.low;
        self.min = self.dist[self.cols[self.up]];
        self.up += 1;

        for k in self.up..dim {
            let col = self.cols[k];
            let h = self.dist[col];
            if h <= self.min {
                if h < self.min {
                    self.up = self.low;
                    self.min = h;
                }
                self.cols.swap(k, self.up);
                self.up += 1;
            }
        }

        self.cols[self.low..self.up]
            .iter()
            .copied()
            .find(|&col| col_to_row[col].is_none())
    }

    /// Scans the next frontier column through its assigned row and relaxes
    /// the unreached columns. Returns an unassigned column reached at the
    /// frontier distance.
    fn scan<R: AsRef<[T]>>(&mut self, matrix: &[R], state: &DualState<T>) -> Option<usize> {
        let dim = self.cols.len();
        let j1 = self.cols[self.low];
        self.low += 1;
        let Some(i) = state.col_to_row[j1] else {
            return Some(j1);
        };

        let row = matrix[i].as_ref();
        let h = row[j1] - state.v[j1] - self.min;
        for k in self.up..dim {
            let col = self.cols[k];
            let v2 = row[col] - state.v[col] - h;
            if v2 < self.dist[col] {
                self.pred[col] = i;
                if v2 == self.min {
                    if state.col_to_row[col].is_none() {
                        return Some(col);
                    }
                    self.cols.swap(k, self.up);
                    self.up += 1;
                }
                self.dist[col] = v2;
            }
        }
        None
    }
}

/// Derives the row duals and the total cost from the final assignment.
fn finalize<T: Cost, R: AsRef<[T]>>(matrix: &[R], state: DualState<T>) -> Solution<T> {
    let row_to_col: Vec<usize> = state.row_to_col.into_iter().flatten().collect();
    let col_to_row: Vec<usize> = state.col_to_row.into_iter().flatten().collect();
    debug_assert_eq!(row_to_col.len(), matrix.len());
    debug_assert_eq!(col_to_row.len(), matrix.len());

    let mut cost = 0.0;
    let mut row_duals = Vec::with_capacity(row_to_col.len());
    for (row, &col) in matrix.iter().zip(&row_to_col) {
        let value = row.as_ref()[col];
        row_duals.push(value - state.v[col]);
        cost += value.to_f64();
    }

    Solution {
        cost,
        row_to_col,
        col_to_row,
        row_duals,
        col_duals: state.v,
    }
}
