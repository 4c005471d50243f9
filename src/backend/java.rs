//! Stack traces thrown by Java exceptions.
//!
//! Frames carry fully qualified method names (`package.Class.method`), which are the comparable
//! identity; native frames and missing line information make no difference to scoring.

use serde::{Deserialize, Serialize};

use crate::{
    distance::{thread_distance, DistanceType},
    thread::{StackFrame, StackThread},
};

/// A single frame of a Java stack trace.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JavaFrame {
    /// The fully qualified method name, if known.
    pub name: Option<String>,
    /// The source file, if recorded in the trace.
    pub file_name: Option<String>,
    /// The line in the source file.
    pub file_line: Option<u32>,
    /// Whether the frame belongs to a native (JNI) method.
    pub is_native: bool,
}

/// One thread of a Java stack trace.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JavaThread {
    /// The name of the thread, as reported by the JVM.
    pub name: Option<String>,
    /// The frames of the thread, innermost first.
    pub frames: Vec<JavaFrame>,
}

impl StackFrame for JavaFrame {
    fn function_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl StackThread for JavaThread {
    type Frame = JavaFrame;

    fn frames(&self) -> &[JavaFrame] {
        &self.frames
    }
}

/// Score two Java threads under the given metric.
pub fn distance(distance_type: DistanceType, thread1: &JavaThread, thread2: &JavaThread) -> f32 {
    thread_distance(distance_type, thread1, thread2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(name: &str) -> JavaFrame {
        JavaFrame {
            name: Some(name.to_string()),
            file_name: None,
            file_line: None,
            is_native: false,
        }
    }

    fn thread(names: &[&str]) -> JavaThread {
        JavaThread {
            name: Some("main".to_string()),
            frames: names.iter().map(|name| frame(name)).collect(),
        }
    }

    /// Methods with the same simple name in different classes are different keys.
    #[test]
    fn qualified_names_are_the_identity() {
        let thread1 = thread(&["com.example.Foo.run", "com.example.Main.main"]);
        let thread2 = thread(&["com.example.Bar.run", "com.example.Main.main"]);

        assert_eq!(
            distance(DistanceType::Levenshtein, &thread1, &thread2),
            0.5
        );
    }

    #[test]
    fn swapped_calls_cost_one_transposition() {
        let thread1 = thread(&["A.a", "B.b", "C.c"]);
        let thread2 = thread(&["A.a", "C.c", "B.b"]);

        let swapped = distance(DistanceType::DamerauLevenshtein, &thread1, &thread2);
        assert!((swapped - 1.0 / 3.0).abs() < 1e-6);
    }
}
