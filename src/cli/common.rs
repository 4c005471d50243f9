//! Common functions and elements used by the binaries in the stacksim toolchain.

use std::{fs, path::Path};

use stacksim::{
    error::{ErrorKind, StackSimError},
    thread::{FrameKey, ThreadSequence},
};

// Reset SIGPIPE, so that the output may be piped to other stuff.
// See https://stackoverflow.com/q/65755853/.
pub fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Load a stack listing: one function name per line, with `?` or `??` marking a frame without a
/// resolved name. Blank lines are skipped; an otherwise empty file is an empty thread.
pub fn load_stack_listing(file: &Path) -> Result<ThreadSequence, StackSimError> {
    let contents = fs::read_to_string(file).map_err(|err| {
        stacksim::error!(
            ErrorKind::InvalidArgument,
            "could not read stack listing '{}': {}.",
            file.display(),
            err
        )
    })?;

    Ok(ThreadSequence::from_keys(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match line {
                "?" | "??" => FrameKey::Unknown,
                name => FrameKey::Name(name.to_string()),
            })
            .collect(),
    ))
}
