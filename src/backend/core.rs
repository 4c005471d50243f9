//! Stack traces recovered from core dumps.
//!
//! Core-dump frames are identified primarily by address and build id; a function name is only
//! present when the unwinder found matching symbols.

use serde::{Deserialize, Serialize};

use crate::{
    distance::{thread_distance, DistanceType},
    thread::{StackFrame, StackThread},
};

/// A single frame recovered from a core dump.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CoreFrame {
    /// The address the frame was executing at.
    pub address: u64,
    /// The build id of the mapped binary.
    pub build_id: Option<String>,
    /// The offset of `address` inside the mapped binary.
    pub build_id_offset: Option<u64>,
    /// The name of the function, if symbols were available.
    pub function_name: Option<String>,
    /// The path of the mapped binary.
    pub file_name: Option<String>,
}

/// One thread recovered from a core dump.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CoreThread {
    /// The frames of the thread, innermost first.
    pub frames: Vec<CoreFrame>,
}

impl StackFrame for CoreFrame {
    fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }
}

impl StackThread for CoreThread {
    type Frame = CoreFrame;

    fn frames(&self) -> &[CoreFrame] {
        &self.frames
    }
}

/// Score two core-dump threads under the given metric.
pub fn distance(distance_type: DistanceType, thread1: &CoreThread, thread2: &CoreThread) -> f32 {
    thread_distance(distance_type, thread1, thread2)
}
