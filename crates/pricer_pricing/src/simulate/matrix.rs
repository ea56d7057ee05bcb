//! Simulated trajectory storage.
//!
//! # Memory Layout
//!
//! Trajectories are stored in a single row-major buffer:
//! `data[path_idx * n_cols + step_idx]`, where column 0 holds the initial
//! spot price. Row-major layout keeps each path contiguous for the
//! cache-friendly per-path update loop and for rayon's chunked row
//! parallelism.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A matrix of simulated price trajectories.
///
/// Shape is `[n_paths][n_cols]`: one row per trajectory, one column per
/// time index, column 0 pinned to the spot price. The matrix is mutated
/// only during generation; once returned from a [`PathScheme`] it is
/// immutable (no public mutators).
///
/// Serialises as a nested numeric array, row by row, which is the shape
/// the visualisation layer consumes.
///
/// [`PathScheme`]: super::scheme::PathScheme
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    n_paths: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Allocates a zero-filled matrix for the generators to populate.
    pub(crate) fn zeroed(n_paths: usize, n_cols: usize) -> Self {
        Self {
            n_paths,
            n_cols,
            data: vec![0.0; n_paths * n_cols],
        }
    }

    /// Mutable view of the full buffer, generation-time only.
    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Number of trajectories (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time indices per trajectory (columns).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// One trajectory as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `path_idx >= n_paths()`.
    #[inline]
    pub fn row(&self, path_idx: usize) -> &[f64] {
        let offset = path_idx * self.n_cols;
        &self.data[offset..offset + self.n_cols]
    }

    /// Iterates over trajectories.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_cols)
    }

    /// The terminal column: one price per path at the final time index.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.rows().map(|row| row[self.n_cols - 1]).collect()
    }

    /// The full buffer in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Serialize for PathMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.n_paths))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
