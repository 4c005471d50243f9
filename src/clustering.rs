//! Bucketing of similar threads.
//!
//! Crash deduplication groups threads whose pairwise distance stays under a threshold. The
//! merging is single-linkage agglomerative: every thread starts in its own cluster, and the two
//! closest clusters keep merging while the smallest distance between any of their members is at
//! most the threshold.

use crate::{error::StackSimError, matrix::DistanceMatrix};

/// A cluster of similar threads.
#[derive(Clone, Debug)]
pub struct Cluster {
    /// The unique ID of the cluster.
    pub uid: String,
    /// The indices of the member threads, into the thread set the matrix was built from.
    pub members: Vec<usize>,
}

/// Group threads into clusters of duplicates.
///
/// `threshold` is the largest distance at which two threads still land in the same bucket; 0
/// only merges threads the metric considers identical, 1 merges everything. The matrix already
/// stores every metric with distance polarity, so the threshold means the same thing for all
/// four metrics.
pub fn cluster_threads(
    matrix: &DistanceMatrix,
    threshold: f32,
) -> Result<Vec<Cluster>, StackSimError> {
    let mut clusters: Vec<Vec<usize>> = (0..matrix.size()).map(|index| vec![index]).collect();

    loop {
        // Find the closest pair of clusters.
        let mut closest: Option<(usize, usize, f32)> = None;
        for index1 in 0..clusters.len() {
            for index2 in (index1 + 1)..clusters.len() {
                let link = single_link(matrix, &clusters[index1], &clusters[index2])?;
                if closest.map_or(true, |(_, _, distance)| link < distance) {
                    closest = Some((index1, index2, link));
                }
            }
        }

        match closest {
            Some((index1, index2, link)) if link <= threshold => {
                // `index1 < index2`, so `index1` stays valid after the removal.
                let merged = clusters.swap_remove(index2);
                clusters[index1].extend(merged);
            }
            _ => break,
        }
    }

    Ok(clusters
        .into_iter()
        .enumerate()
        .map(|(index, mut members)| {
            members.sort_unstable();
            Cluster {
                uid: format!("cluster_{:0>6}", index),
                members,
            }
        })
        .collect())
}

/// The smallest pairwise distance between the members of two clusters.
fn single_link(
    matrix: &DistanceMatrix,
    cluster1: &[usize],
    cluster2: &[usize],
) -> Result<f32, StackSimError> {
    let mut link = f32::INFINITY;
    for &member1 in cluster1 {
        for &member2 in cluster2 {
            link = link.min(matrix.get(member1, member2)?);
        }
    }

    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        distance::DistanceType,
        thread::{FrameKey, ThreadSequence},
    };

    fn seq(names: &[&str]) -> ThreadSequence {
        ThreadSequence::from_keys(
            names
                .iter()
                .map(|name| FrameKey::Name(name.to_string()))
                .collect(),
        )
    }

    fn matrix(threads: &[ThreadSequence]) -> DistanceMatrix {
        DistanceMatrix::new(DistanceType::Levenshtein, threads).unwrap()
    }

    /// At threshold 0, only threads at distance 0 share a bucket.
    #[test]
    fn zero_threshold_merges_only_identical_threads() {
        let threads = [
            seq(&["main", "foo"]),
            seq(&["main", "foo"]),
            seq(&["main", "bar"]),
        ];
        let clusters = cluster_threads(&matrix(&threads), 0.0).unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].members, vec![0, 1]);
        assert_eq!(clusters[1].members, vec![2]);
    }

    /// At threshold 1, everything collapses into one bucket.
    #[test]
    fn full_threshold_merges_everything() {
        let threads = [seq(&["a"]), seq(&["b"]), seq(&["c"])];
        let clusters = cluster_threads(&matrix(&threads), 1.0).unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members, vec![0, 1, 2]);
    }

    /// Single linkage chains: if A is close to B and B is close to C, all three merge even when
    /// A and C are far apart.
    #[test]
    fn single_linkage_chains_through_intermediates() {
        let threads = [
            seq(&["a", "b", "c", "d"]),
            seq(&["a", "b", "c", "x"]),
            seq(&["a", "b", "x", "y"]),
        ];
        // d(0,1) = 0.25, d(1,2) = 0.5, d(0,2) = 0.5.
        let clusters = cluster_threads(&matrix(&threads), 0.5).unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members, vec![0, 1, 2]);
    }

    #[test]
    fn cluster_uids_are_stable() {
        let threads = [seq(&["a"]), seq(&["b"])];
        let clusters = cluster_threads(&matrix(&threads), 0.0).unwrap();

        assert_eq!(clusters[0].uid, "cluster_000000");
        assert_eq!(clusters[1].uid, "cluster_000001");
    }
}
