//! Kernel oops stack traces.
//!
//! The kernel marks frames it is not sure about with a `?` in the oops text; such frames keep
//! their `reliable` flag here but still contribute their function name to the comparison.

use serde::{Deserialize, Serialize};

use crate::{
    distance::{thread_distance, DistanceType},
    thread::{StackFrame, StackThread},
};

/// A single frame of a kernel oops stack trace.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KoopsFrame {
    /// The address of the frame.
    pub address: Option<u64>,
    /// Whether the kernel considered this frame reliable (no `?` marker).
    pub reliable: bool,
    /// The name of the function.
    pub function_name: Option<String>,
    /// The offset into the function.
    pub function_offset: Option<u64>,
    /// The module the symbol belongs to, if not built in.
    pub module_name: Option<String>,
}

/// The stack trace of a kernel oops.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KoopsStacktrace {
    /// The frames of the oops, innermost first.
    pub frames: Vec<KoopsFrame>,
}

impl StackFrame for KoopsFrame {
    fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }
}

impl StackThread for KoopsStacktrace {
    type Frame = KoopsFrame;

    fn frames(&self) -> &[KoopsFrame] {
        &self.frames
    }
}

/// Score two kernel oops stack traces under the given metric.
pub fn distance(
    distance_type: DistanceType,
    stacktrace1: &KoopsStacktrace,
    stacktrace2: &KoopsStacktrace,
) -> f32 {
    thread_distance(distance_type, stacktrace1, stacktrace2)
}
