//! Distance metrics between crash threads.
//!
//! The four metrics all operate on the frame-key sequences of two threads and return a value in
//! `[0, 1]`. Watch out for polarity: Jaro-Winkler is a *similarity* (1 = identical threads),
//! while the other three are *distances* (0 = identical threads).

use std::{fmt, str};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ErrorKind, StackSimError},
    thread::{StackThread, ThreadSequence},
};

mod damerau_levenshtein;
mod jaccard;
mod jaro_winkler;
mod levenshtein;

pub use jaro_winkler::{jaro_winkler_similarity, WINKLER_PREFIX_CAP, WINKLER_SCALING};

/// A distance metric over two crash threads.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceType {
    /// Jaro-Winkler similarity.
    ///
    /// Matches equal frame keys between the two threads within a bounded positional window,
    /// counts in-place transpositions among the matches, and boosts the result for a shared
    /// stack prefix. Returns a number between 0 and 1: 0 = no similarity, 1 = identical
    /// threads. NOTE: not a metric distance, as it does not satisfy the triangle inequality.
    JaroWinkler,
    /// Jaccard distance.
    ///
    /// The difference of the sizes of the intersection and the union of the two threads' key
    /// sets, divided by the size of the union; frame positions are not taken into account.
    /// Returns a number between 0 and 1: 0 = identical threads, 1 = no similarity.
    Jaccard,
    /// Levenshtein distance.
    ///
    /// How many frame keys need to be inserted, deleted or substituted in one thread to obtain
    /// the other, normalized by the frame count of the longer thread. Returns a number between
    /// 0 and 1: 0 = identical threads, 1 = no shared keys at any position.
    Levenshtein,
    /// Damerau-Levenshtein distance.
    ///
    /// Like the Levenshtein distance, but swapping two adjacent distinct keys counts as a
    /// single operation. Never exceeds the Levenshtein distance of the same pair.
    DamerauLevenshtein,
}

impl DistanceType {
    /// All supported metrics, in display order.
    pub const fn all() -> [DistanceType; 4] {
        [
            Self::JaroWinkler,
            Self::Jaccard,
            Self::Levenshtein,
            Self::DamerauLevenshtein,
        ]
    }

    /// Whether 1 means identical threads (similarity polarity) rather than 0.
    pub const fn is_similarity(&self) -> bool {
        matches!(self, Self::JaroWinkler)
    }

    /// Score two key sequences under this metric.
    pub fn dist(&self, thread1: &ThreadSequence, thread2: &ThreadSequence) -> f32 {
        match self {
            Self::JaroWinkler => jaro_winkler::similarity(thread1, thread2),
            Self::Jaccard => jaccard::distance(thread1, thread2),
            Self::Levenshtein => levenshtein::distance(thread1, thread2),
            Self::DamerauLevenshtein => damerau_levenshtein::distance(thread1, thread2),
        }
    }
}

impl fmt::Display for DistanceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::JaroWinkler => "jaro-winkler",
                Self::Jaccard => "jaccard",
                Self::Levenshtein => "levenshtein",
                Self::DamerauLevenshtein => "damerau-levenshtein",
            }
        )
    }
}

impl str::FromStr for DistanceType {
    type Err = StackSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jaro-winkler" => Ok(Self::JaroWinkler),
            "jaccard" => Ok(Self::Jaccard),
            "levenshtein" => Ok(Self::Levenshtein),
            "damerau-levenshtein" => Ok(Self::DamerauLevenshtein),
            unknown => fail!(
                ErrorKind::UnsupportedDistanceType,
                "unsupported distance metric '{}'.",
                unknown
            ),
        }
    }
}

/// Score two backend threads under the given metric.
///
/// This is the single entry point behind every backend binding: both threads are reduced to
/// their frame-key sequences and handed to the metric. The threads are only borrowed for the
/// duration of the call and are never mutated; the metric set is closed, so an unsupported
/// selector cannot reach this point (rejecting one is the job of
/// [DistanceType::from_str](str::FromStr::from_str) at the textual boundary).
pub fn thread_distance<T: StackThread>(
    distance_type: DistanceType,
    thread1: &T,
    thread2: &T,
) -> f32 {
    distance_type.dist(
        &ThreadSequence::from_thread(thread1),
        &ThreadSequence::from_thread(thread2),
    )
}
