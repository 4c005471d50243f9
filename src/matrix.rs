//! Pairwise distances over a set of threads.
//!
//! Bucketing duplicate crashes needs the distance of every thread to every other thread; this
//! module computes all pairs up front (in parallel) and hands out symmetric lookups.

use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    distance::DistanceType,
    error::{ErrorKind, StackSimError},
    thread::ThreadSequence,
};

/// A symmetric matrix of pairwise distances between threads.
///
/// Only the strict lower triangle is stored (condensed layout). Whatever the metric, the stored
/// values are *distances*: for [DistanceType::JaroWinkler] the similarity `s` is stored as
/// `1 - s`, so that smaller always means more similar and the diagonal is always 0. The engine
/// itself keeps the original polarity; the conversion happens only here.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    distance_type: DistanceType,
    size: usize,
    distances: Vec<f32>,
}

impl DistanceMatrix {
    /// Compute all pairwise distances between the given threads.
    ///
    /// Fails with [ErrorKind::InvalidArgument] when fewer than two threads are given; there is
    /// nothing to compare then.
    pub fn new(
        distance_type: DistanceType,
        threads: &[ThreadSequence],
    ) -> Result<Self, StackSimError> {
        (threads.len() >= 2).then_some(()).ok_or(error!(
            ErrorKind::InvalidArgument,
            "cannot build a distance matrix from {} thread(s); at least 2 are needed.",
            threads.len()
        ))?;

        let pairs: Vec<(usize, usize)> = (0..threads.len()).tuple_combinations().collect();
        let distances = pairs
            .par_iter()
            .map(|&(index1, index2)| {
                let dist = distance_type.dist(&threads[index1], &threads[index2]);
                match distance_type.is_similarity() {
                    true => 1.0 - dist,
                    false => dist,
                }
            })
            .collect();

        Ok(DistanceMatrix {
            distance_type,
            size: threads.len(),
            distances,
        })
    }

    /// The number of threads the matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The metric the matrix was computed with.
    pub fn distance_type(&self) -> DistanceType {
        self.distance_type
    }

    /// The distance between threads `index1` and `index2`.
    ///
    /// Symmetric in its arguments; the diagonal is 0. Fails with [ErrorKind::InvalidArgument]
    /// when either index is out of range.
    pub fn get(&self, index1: usize, index2: usize) -> Result<f32, StackSimError> {
        (index1 < self.size && index2 < self.size)
            .then_some(())
            .ok_or(error!(
                ErrorKind::InvalidArgument,
                "thread index out of range: ({}, {}) in a matrix of {} threads.",
                index1,
                index2,
                self.size
            ))?;

        if index1 == index2 {
            return Ok(0.0);
        }

        let (row, column) = match index1 < index2 {
            true => (index1, index2),
            false => (index2, index1),
        };

        // Condensed index of (row, column) in the strict upper triangle, row-major.
        Ok(self.distances[row * (2 * self.size - row - 1) / 2 + (column - row - 1)])
    }
}
