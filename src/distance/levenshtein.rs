//! The Levenshtein distance metric.
//!
//! This metric implements the [Levenshtein distance](
//! https://en.wikipedia.org/wiki/Levenshtein_distance) over frame-key sequences: the minimum
//! number of key insertions, deletions and substitutions turning one thread into the other,
//! normalized by the frame count of the longer thread. The dynamic program keeps two rolling
//! rows sized by the shorter thread, so auxiliary memory stays linear even on pathological
//! stack depths.

use std::mem;

use crate::thread::{FrameKey, ThreadSequence};

/// Normalized Levenshtein distance: 0 = identical threads, 1 = no shared keys at any position.
pub(super) fn distance(thread1: &ThreadSequence, thread2: &ThreadSequence) -> f32 {
    let (longer, shorter) = match thread1.frame_count() >= thread2.frame_count() {
        true => (thread1.keys(), thread2.keys()),
        false => (thread2.keys(), thread1.keys()),
    };

    if longer.is_empty() {
        // Two empty threads are identical.
        return 0.0;
    }

    raw_distance(longer, shorter) as f32 / longer.len() as f32
}

/// Unit-cost edit distance over two rolling rows.
fn raw_distance(longer: &[FrameKey], shorter: &[FrameKey]) -> usize {
    let mut previous: Vec<usize> = (0..=shorter.len()).collect();
    let mut current = vec![0; shorter.len() + 1];

    for (index1, key1) in longer.iter().enumerate() {
        current[0] = index1 + 1;
        for (index2, key2) in shorter.iter().enumerate() {
            let substitution = previous[index2] + usize::from(key1 != key2);
            let deletion = previous[index2 + 1] + 1;
            let insertion = current[index2] + 1;
            current[index2 + 1] = substitution.min(deletion).min(insertion);
        }
        mem::swap(&mut previous, &mut current);
    }

    previous[shorter.len()]
}
