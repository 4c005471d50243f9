//! The Damerau-Levenshtein distance metric.
//!
//! Like the [Levenshtein distance](super::levenshtein), but swapping two adjacent distinct keys
//! counts as a single operation (the restricted, adjacent-transposition form of the
//! [Damerau-Levenshtein distance](
//! https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance)). The transposition can
//! only lower the cost, so this distance never exceeds the Levenshtein distance of the same
//! pair. The dynamic program needs one extra rolling row for the transposition lookback; memory
//! stays linear in the shorter thread.

use std::mem;

use crate::thread::{FrameKey, ThreadSequence};

/// Normalized Damerau-Levenshtein distance: 0 = identical threads, 1 = no similarity.
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

/// Edit distance with unit-cost adjacent transpositions, over three rolling rows.
fn raw_distance(longer: &[FrameKey], shorter: &[FrameKey]) -> usize {
    let width = shorter.len() + 1;
    let mut before_previous = vec![0; width];
    let mut previous: Vec<usize> = (0..width).collect();
    let mut current = vec![0; width];

    for (index1, key1) in longer.iter().enumerate() {
        current[0] = index1 + 1;
        for (index2, key2) in shorter.iter().enumerate() {
            let substitution = previous[index2] + usize::from(key1 != key2);
            let deletion = previous[index2 + 1] + 1;
            let insertion = current[index2] + 1;
            let mut cost = substitution.min(deletion).min(insertion);

            // Swapping two adjacent distinct keys counts as one operation.
            if index1 > 0
                && index2 > 0
                && *key1 == shorter[index2 - 1]
                && longer[index1 - 1] == *key2
                && key1 != key2
            {
                cost = cost.min(before_previous[index2 - 1] + 1);
            }

            current[index2 + 1] = cost;
        }
        mem::swap(&mut before_previous, &mut previous);
        mem::swap(&mut previous, &mut current);
    }

    previous[width - 1]
}
