//! Stack traces produced by the GNU debugger.
//!
//! GDB prints `??` in place of a function name when no symbol is available; such frames carry
//! the marker in `function_name` but map to the unknown key like any other unnamed frame.

use serde::{Deserialize, Serialize};

use crate::{
    distance::{thread_distance, DistanceType},
    thread::{StackFrame, StackThread},
};

/// A single frame of a GDB backtrace.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GdbFrame {
    /// The position of the frame in the stack, innermost first.
    pub number: u32,
    /// The name of the function, if the debugger resolved one (`??` counts as unresolved).
    pub function_name: Option<String>,
    /// The source file the frame points into.
    pub source_file: Option<String>,
    /// The line in the source file.
    pub source_line: Option<u32>,
    /// The address of the frame.
    pub address: Option<u64>,
    /// The binary or library the symbol comes from.
    pub library_name: Option<String>,
}

/// One thread of a GDB backtrace.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GdbThread {
    /// The number of the thread in the trace.
    pub number: u32,
    /// The frames of the thread, innermost first.
    pub frames: Vec<GdbFrame>,
}

impl StackFrame for GdbFrame {
    fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref().filter(|name| *name != "??")
    }
}

impl StackThread for GdbThread {
    type Frame = GdbFrame;

    fn frames(&self) -> &[GdbFrame] {
        &self.frames
    }
}

/// Score two GDB threads under the given metric.
pub fn distance(distance_type: DistanceType, thread1: &GdbThread, thread2: &GdbThread) -> f32 {
    thread_distance(distance_type, thread1, thread2)
}
