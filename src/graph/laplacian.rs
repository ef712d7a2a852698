//! Spanning-tree counts by Kirchhoff's matrix-tree theorem.
//!
//! The number of spanning trees of a connected graph equals the determinant of
//! its Laplacian with any one row and the matching column deleted. Small graphs
//! use that determinant directly; large ones accumulate its logarithm from the
//! LU pivots, since the count itself overflows any float long before districts
//! reach realistic sizes. A zero determinant means the graph is disconnected.

use ndarray::{Array2, Axis, s};

use crate::graph::Graph;

/// Pivots this small (relative to the largest entry) are treated as zero.
const SINGULAR_EPSILON: f64 = 1e-9;

impl Graph {
    /// Laplacian (degree minus adjacency) with the last row and column removed.
    pub(crate) fn reduced_laplacian(&self) -> Array2<f64> {
        let n = self.node_count().saturating_sub(1);
        let mut laplacian = Array2::<f64>::zeros((n, n));
        for u in 0..n {
            laplacian[[u, u]] = self.degree(u) as f64;
            for v in self.edges(u).filter(|&v| v < n) {
                laplacian[[u, v]] -= 1.0;
            }
        }
        laplacian
    }

    /// Exact number of spanning trees, or `None` if the graph is empty or disconnected.
    ///
    /// Only exact while the count fits in an f64 mantissa; use
    /// [`Graph::log_spanning_trees`] for anything beyond a few dozen vertices.
    pub fn spanning_trees(&self) -> Option<u128> {
        if self.node_count() == 0 { return None }
        let det = determinant(self.reduced_laplacian());
        (det >= 0.5).then(|| det.round() as u128)
    }

    /// Natural log of the number of spanning trees, or `None` if the graph is empty or disconnected.
    pub fn log_spanning_trees(&self) -> Option<f64> {
        if self.node_count() == 0 { return None }
        let (sign, log_abs) = signed_log_det(self.reduced_laplacian());
        (sign > 0.0).then_some(log_abs)
    }

    /// Spanning tree score: the natural log of the spanning tree count.
    /// Graphs with more than `threshold` vertices take the log-determinant path.
    pub fn spanning_tree_score(&self, threshold: usize) -> Option<f64> {
        if self.node_count() <= threshold {
            self.spanning_trees().map(|count| (count as f64).ln())
        } else {
            self.log_spanning_trees()
        }
    }
}

/// Determinant of a square matrix; zero if singular.
pub(crate) fn determinant(matrix: Array2<f64>) -> f64 {
    match lu_pivots(matrix) {
        Some((sign, pivots)) => sign * pivots.iter().product::<f64>(),
        None => 0.0,
    }
}

/// Sign and natural log of the absolute determinant, like `numpy.linalg.slogdet`.
/// A singular matrix yields `(0.0, -inf)`.
pub(crate) fn signed_log_det(matrix: Array2<f64>) -> (f64, f64) {
    match lu_pivots(matrix) {
        Some((sign, pivots)) => pivots.iter()
            .fold((sign, 0.0), |(sign, log_abs), &p| (sign * p.signum(), log_abs + p.abs().ln())),
        None => (0.0, f64::NEG_INFINITY),
    }
}

/// LU decomposition with partial pivoting, returning the row-swap parity and the
/// diagonal of U, or `None` if a pivot vanishes.
fn lu_pivots(mut a: Array2<f64>) -> Option<(f64, Vec<f64>)> {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "matrix must be square");

    let scale = a.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
    let mut sign = 1.0;
    let mut pivots = Vec::with_capacity(n);

    for k in 0..n {
        let p = (k..n).max_by(|&i, &j| a[[i, k]].abs().total_cmp(&a[[j, k]].abs()))?;
        let pivot = a[[p, k]];
        if pivot.abs() <= SINGULAR_EPSILON * scale { return None }

        if p != k {
            for j in 0..n { a.swap([k, j], [p, j]) }
            sign = -sign;
        }
        pivots.push(pivot);

        // Eliminate column k below the pivot.
        let (top, mut bottom) = a.view_mut().split_at(Axis(0), k + 1);
        let pivot_row = top.slice(s![k, k + 1..]);
        for mut row in bottom.outer_iter_mut() {
            let factor = row[k] / pivot;
            if factor != 0.0 {
                row.slice_mut(s![k + 1..]).scaled_add(-factor, &pivot_row);
            }
        }
    }

    Some((sign, pivots))
}
