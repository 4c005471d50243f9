//! Backend-agnostic view of a crash thread.
//!
//! Every debugging backend represents stack frames differently; the distance engine only ever
//! sees an ordered sequence of comparable frame keys. A backend plugs in by implementing
//! [StackFrame] for its frame type and [StackThread] for its thread type, and the engine builds a
//! [ThreadSequence] from those.

use std::fmt;

/// The comparable identity of a single stack frame.
///
/// All frames without a resolved function name collapse to [FrameKey::Unknown], which compares
/// equal to itself: two unnamed frames count as the same key for every metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameKey {
    /// A normalized function or symbol name.
    Name(String),
    /// A frame without a resolved name.
    Unknown,
}

impl FrameKey {
    /// Build a key from an optional function name.
    ///
    /// Missing and empty names both map to [FrameKey::Unknown]; an empty string is never a valid
    /// key.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => FrameKey::Name(name.to_string()),
            _ => FrameKey::Unknown,
        }
    }
}

impl fmt::Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Unknown => write!(f, "??"),
        }
    }
}

/// A single call-stack entry produced by some debugging backend.
pub trait StackFrame {
    /// The function or symbol name of the frame, if the backend could resolve one.
    ///
    /// Must be deterministic and side-effect-free.
    fn function_name(&self) -> Option<&str>;

    /// The comparable key of the frame.
    fn frame_key(&self) -> FrameKey {
        FrameKey::from_name(self.function_name())
    }
}

/// An ordered stack of frames captured from one execution context.
pub trait StackThread {
    /// The backend-native frame type.
    type Frame: StackFrame;

    /// The frames of the thread, innermost first.
    fn frames(&self) -> &[Self::Frame];
}

/// An ordered, read-only sequence of frame keys.
///
/// Built once per comparison by running the key extraction over a thread's frames in their
/// original order; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSequence {
    keys: Vec<FrameKey>,
}

impl ThreadSequence {
    /// Extract the key sequence of a backend thread.
    pub fn from_thread<T: StackThread>(thread: &T) -> Self {
        ThreadSequence {
            keys: thread
                .frames()
                .iter()
                .map(|frame| frame.frame_key())
                .collect(),
        }
    }

    /// Build a sequence directly from frame keys.
    pub fn from_keys(keys: Vec<FrameKey>) -> Self {
        ThreadSequence { keys }
    }

    /// The number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.keys.len()
    }

    /// Whether the sequence contains no frames at all.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The frame keys, innermost first.
    pub fn keys(&self) -> &[FrameKey] {
        &self.keys
    }
}
