//! Error definition for the stacksim library and tools.

use std::{error, fmt};

/// The class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument that cannot be computed on (e.g. a distance matrix over fewer than two
    /// threads, or an unreadable stack listing).
    InvalidArgument,
    /// A distance metric name outside the supported set.
    UnsupportedDistanceType,
}

/// An error raised by the stacksim library or tools.
#[derive(Debug, Clone)]
pub struct StackSimError {
    /// The class of the failure.
    pub kind: ErrorKind,
    /// The module in which the error was raised.
    pub function: String,
    /// The line at which the error was raised.
    pub line: u32,
    /// The file in which the error was raised.
    pub file: String,
    /// The full error message.
    pub message: String,
}

impl error::Error for StackSimError {}
impl fmt::Display for StackSimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Construct a [StackSimError] of the given kind, with a formatted message.
#[macro_export]
macro_rules! error {
    ( $kind:expr, $( $arg:expr ),+ ) => {{
        $crate::error::StackSimError {
            kind: $kind,
            message: format!($( $arg ),+),
            function: module_path!().to_string(),
            file: file!().to_string(),
            line: line!(),
        }
    }};
}

/// Construct an `Err` holding a [StackSimError] of the given kind.
#[macro_export]
macro_rules! fail {
    ( $kind:expr, $( $arg:expr ),+ ) => {{
        Err($crate::error!($kind, $( $arg ),+))
    }};
}
