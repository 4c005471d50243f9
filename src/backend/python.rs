//! Python exception stack traces.
//!
//! Module-level code shows up as the pseudo-function `<module>`; it is a real, comparable name
//! shared by all module-level frames, not an unknown frame.

use serde::{Deserialize, Serialize};

use crate::{
    distance::{thread_distance, DistanceType},
    thread::{StackFrame, StackThread},
};

/// A single frame of a Python traceback.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PythonFrame {
    /// The file the frame points into.
    pub file_name: Option<String>,
    /// The line in the file.
    pub file_line: Option<u32>,
    /// The function name, or `<module>` for module-level code.
    pub function_name: Option<String>,
    /// The source line, if the traceback included it.
    pub line_contents: Option<String>,
}

/// The stack trace of a Python exception.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PythonStacktrace {
    /// The frames of the traceback, innermost first.
    pub frames: Vec<PythonFrame>,
}

impl StackFrame for PythonFrame {
    fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }
}

impl StackThread for PythonStacktrace {
    type Frame = PythonFrame;

    fn frames(&self) -> &[PythonFrame] {
        &self.frames
    }
}

/// Score two Python tracebacks under the given metric.
pub fn distance(
    distance_type: DistanceType,
    stacktrace1: &PythonStacktrace,
    stacktrace2: &PythonStacktrace,
) -> f32 {
    thread_distance(distance_type, stacktrace1, stacktrace2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::{FrameKey, StackFrame};

    fn frame(function_name: &str) -> PythonFrame {
        PythonFrame {
            file_name: Some("app.py".to_string()),
            file_line: Some(1),
            function_name: Some(function_name.to_string()),
            line_contents: None,
        }
    }

    /// `<module>` is a comparable name of its own, not an unknown frame.
    #[test]
    fn module_level_code_is_a_real_key() {
        assert_eq!(
            frame("<module>").frame_key(),
            FrameKey::Name("<module>".to_string())
        );
    }

    #[test]
    fn one_extra_frame_is_one_insertion() {
        let stacktrace1 = PythonStacktrace {
            frames: vec![frame("handler"), frame("<module>")],
        };
        let stacktrace2 = PythonStacktrace {
            frames: vec![frame("validate"), frame("handler"), frame("<module>")],
        };

        let dist = distance(DistanceType::Levenshtein, &stacktrace1, &stacktrace2);
        assert!((dist - 1.0 / 3.0).abs() < 1e-6);
    }
}
