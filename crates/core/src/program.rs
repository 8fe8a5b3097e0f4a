//! Entry point wrapper turning an operation into a process exit status.
//!
//! An operation returning `Ok` exits with the status its output maps to. An
//! operation returning `Err` prints one diagnostic line to stderr and exits
//! with status 1:
//!
//! ```text
//! build_misc: IO error with config file at `./autogen.conf`: No such file or directory (os error 2) [line 47]
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use log::debug;

use crate::autogen::{CleanSummary, GenerateSummary};
use crate::error::{Error, Result};

/// Prefix of every diagnostic line
pub const PROGRAM_NAME: &str = "build_misc";

/// Exit status used when an operation fails
pub const FAILURE_STATUS: u8 = 1;

/// Maps an operation's successful output to a process exit status.
///
/// Integers are used as the status; anything else means success.
pub trait ProgramOutput {
    fn exit_status(&self) -> u8;
}

impl ProgramOutput for () {
    fn exit_status(&self) -> u8 {
        0
    }
}

impl ProgramOutput for u8 {
    fn exit_status(&self) -> u8 {
        *self
    }
}

impl ProgramOutput for i32 {
    /// Only the low byte reaches the parent process.
    fn exit_status(&self) -> u8 {
        (*self & 0xff) as u8
    }
}

impl ProgramOutput for GenerateSummary {
    fn exit_status(&self) -> u8 {
        0
    }
}

impl ProgramOutput for CleanSummary {
    fn exit_status(&self) -> u8 {
        0
    }
}

/// The diagnostic line for `error`, without the trailing newline.
pub fn format_diagnostic(error: &Error) -> String {
    format!("{PROGRAM_NAME}: {error} [line {}]", error.line())
}

/// Writes the diagnostic line for `error` and flushes `writer`.
pub fn write_diagnostic<W: Write>(writer: &mut W, error: &Error) -> io::Result<()> {
    writeln!(writer, "{}", format_diagnostic(error))?;
    writer.flush()
}

pub fn exit_status<T: ProgramOutput>(result: &Result<T>) -> u8 {
    match result {
        Ok(output) => output.exit_status(),
        Err(_) => FAILURE_STATUS,
    }
}

/// Runs `operation` and converts its outcome into an [`ExitCode`].
///
/// # Examples
///
/// ```
/// use build_misc_core::program::run_program;
///
/// fn main() -> std::process::ExitCode {
///     run_program(|| Ok(0_i32))
/// }
/// ```
pub fn run_program<T, F>(operation: F) -> ExitCode
where
    T: ProgramOutput,
    F: FnOnce() -> Result<T>,
{
    let result = operation();

    if let Err(e) = &result {
        debug!("Operation failed at {}: {e:?}", e.location());
        // Nothing is left to report a failure on stderr to.
        let _ = write_diagnostic(&mut io::stderr().lock(), e);
    }

    ExitCode::from(exit_status(&result))
}
