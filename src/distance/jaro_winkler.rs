//! The Jaro-Winkler similarity metric.
//!
//! This metric implements the [Jaro-Winkler similarity](
//! https://en.wikipedia.org/wiki/Jaro%E2%80%93Winkler_distance) over frame-key sequences:
//! bounded-window matching with a boost for a shared stack prefix. Unlike the other metrics in
//! this crate, 1 means identical threads and 0 means no similarity, and the triangle inequality
//! does not hold.

use crate::thread::ThreadSequence;

/// Longest shared stack prefix rewarded by the Winkler boost.
pub const WINKLER_PREFIX_CAP: usize = 4;

/// Scaling factor applied per shared-prefix frame by the Winkler boost.
pub const WINKLER_SCALING: f32 = 0.1;

/// Jaro-Winkler similarity with the default prefix cap and scaling.
pub(super) fn similarity(thread1: &ThreadSequence, thread2: &ThreadSequence) -> f32 {
    jaro_winkler_similarity(thread1, thread2, WINKLER_PREFIX_CAP, WINKLER_SCALING)
}

/// Jaro-Winkler similarity with explicit prefix cap and scaling.
///
/// [WINKLER_PREFIX_CAP] and [WINKLER_SCALING] are the conventional constants; deployments that
/// need to reproduce the scores of an existing crash corpus can calibrate them here.
pub fn jaro_winkler_similarity(
    thread1: &ThreadSequence,
    thread2: &ThreadSequence,
    prefix_cap: usize,
    scaling: f32,
) -> f32 {
    let keys1 = thread1.keys();
    let keys2 = thread2.keys();
    let (count1, count2) = (keys1.len(), keys2.len());

    if count1 == 0 && count2 == 0 {
        // Two empty threads are identical.
        return 1.0;
    }

    // Keys only match within this positional distance of each other.
    let window = (count1.max(count2) / 2).saturating_sub(1);

    // Greedily match each key of thread 1 to an unused equal key of thread 2.
    let mut used2 = vec![false; count2];
    let mut matched1 = Vec::new();
    for (index1, key) in keys1.iter().enumerate() {
        let start = index1.saturating_sub(window);
        let stop = (index1 + window + 1).min(count2);
        for index2 in start..stop {
            if !used2[index2] && keys2[index2] == *key {
                used2[index2] = true;
                matched1.push(index1);
                break;
            }
        }
    }

    let match_count = matched1.len();
    if match_count == 0 {
        return 0.0;
    }

    // The matched keys of either thread, in stack order; half the positions where they disagree
    // are transpositions.
    let matches1 = matched1.iter().map(|&index| &keys1[index]);
    let matches2 = keys2
        .iter()
        .zip(&used2)
        .filter_map(|(key, &used)| used.then_some(key));
    let transpositions = matches1.zip(matches2).filter(|(key1, key2)| key1 != key2).count() as f32
        / 2.0;

    let matches = match_count as f32;
    let jaro = (matches / count1 as f32
        + matches / count2 as f32
        + (matches - transpositions) / matches)
        / 3.0;

    let prefix = keys1
        .iter()
        .zip(keys2)
        .take(prefix_cap)
        .take_while(|(key1, key2)| key1 == key2)
        .count();

    jaro + prefix as f32 * scaling * (1.0 - jaro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::FrameKey;

    fn seq(names: &[&str]) -> ThreadSequence {
        ThreadSequence::from_keys(
            names
                .iter()
                .map(|name| FrameKey::Name(name.to_string()))
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
    fn identical_threads_score_one() {
        let thread = seq(&["main", "foo", "bar"]);
        assert_close(similarity(&thread, &thread), 1.0);
    }

    #[test]
    fn disjoint_threads_score_zero() {
        assert_close(similarity(&seq(&["a", "b"]), &seq(&["c", "d"])), 0.0);
    }

    #[test]
    fn one_empty_thread_scores_zero() {
        assert_close(similarity(&seq(&[]), &seq(&["main"])), 0.0);
        assert_close(similarity(&seq(&["main"]), &seq(&[])), 0.0);
    }

    #[test]
    fn two_empty_threads_score_one() {
        assert_close(similarity(&seq(&[]), &seq(&[])), 1.0);
    }

    /// One shared key at the top of three-frame stacks: the window of `3 / 2 - 1 = 0` only
    /// matches `main` in place, and the Winkler boost rewards the shared single-frame prefix.
    #[test]
    fn shared_prefix_is_boosted() {
        let jaro = (1.0 / 3.0 + 1.0 / 3.0 + 1.0) / 3.0;
        let expected = jaro + 1.0 * WINKLER_SCALING * (1.0 - jaro);

        assert_close(
            similarity(&seq(&["main", "a", "b"]), &seq(&["main", "c", "d"])),
            expected,
        );
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = seq(&["raise", "abort", "main"]);
        let b = seq(&["abort", "raise", "handler", "main"]);

        assert_close(similarity(&a, &b), similarity(&b, &a));
    }

    /// A larger prefix cap rewards deep shared prefixes that the default cap ignores.
    #[test]
    fn prefix_cap_is_calibratable() {
        let a = seq(&["a", "b", "c", "d", "e", "x"]);
        let b = seq(&["a", "b", "c", "d", "e", "y"]);

        let capped = jaro_winkler_similarity(&a, &b, WINKLER_PREFIX_CAP, WINKLER_SCALING);
        let uncapped = jaro_winkler_similarity(&a, &b, 5, WINKLER_SCALING);

        assert!(uncapped > capped);
    }
}
