//! The Jaccard distance metric.
//!
//! This metric implements the [Jaccard distance](
//! https://en.wikipedia.org/wiki/Jaccard_index) over the *sets* of frame keys of two threads;
//! frame positions and duplicate frames play no role.

use std::collections::HashSet;

use crate::thread::{FrameKey, ThreadSequence};

/// Jaccard distance of two key sequences: 0 = identical key sets, 1 = no shared keys.
pub(super) fn distance(thread1: &ThreadSequence, thread2: &ThreadSequence) -> f32 {
    let set1: HashSet<&FrameKey> = thread1.keys().iter().collect();
    let set2: HashSet<&FrameKey> = thread2.keys().iter().collect();

    let union = set1.union(&set2).count();
    if union == 0 {
        // Two empty threads are identical.
        return 0.0;
    }
    let intersection = set1.intersection(&set2).count();

    1.0 - intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(names: &[&str]) -> ThreadSequence {
        ThreadSequence::from_keys(
            names
                .iter()
                .map(|name| match *name {
                    "?" => FrameKey::Unknown,
                    name => FrameKey::Name(name.to_string()),
                })
                .collect(),
        )
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn identical_threads_score_zero() {
        let thread = seq(&["main", "foo", "bar"]);
        assert_close(distance(&thread, &thread), 0.0);
    }

    #[test]
    fn disjoint_threads_score_one() {
        assert_close(distance(&seq(&["a", "b"]), &seq(&["c", "d"])), 1.0);
    }

    #[test]
    fn two_empty_threads_score_zero() {
        assert_close(distance(&seq(&[]), &seq(&[])), 0.0);
    }

    /// Positions and duplicates are discarded: a reordered, repeated stack has the same key set.
    #[test]
    fn order_and_multiplicity_are_ignored() {
        let a = seq(&["main", "foo", "bar"]);
        let b = seq(&["bar", "bar", "foo", "main"]);

        assert_close(distance(&a, &b), 0.0);
    }

    #[test]
    fn partial_overlap() {
        // Union {a, b, c}, intersection {b}.
        assert_close(distance(&seq(&["a", "b"]), &seq(&["b", "c"])), 1.0 - 1.0 / 3.0);
    }

    /// Unnamed frames collapse to one shared key, so they count as overlap.
    #[test]
    fn unknown_frames_overlap() {
        assert_close(distance(&seq(&["?", "main"]), &seq(&["?", "main"])), 0.0);
        assert_close(distance(&seq(&["?"]), &seq(&["?", "main"])), 0.5);
    }
}
