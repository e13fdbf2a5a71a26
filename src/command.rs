//! External command execution
//!
//! Time-series preprocessing shells out to the GDAL command-line tools
//! (`gdalbuildvrt`, `gdalwarp`, ...). The runner here spawns the program
//! directly with argument-list semantics, so arguments are never subject to
//! shell interpretation, and surfaces exit code and stderr on failure.

use std::process::Command;

use crate::errors::{RastimeError, Result};

/// Executes an external command and blocks until it completes.
///
/// Returns `Ok(())` on a zero exit status, discarding any output. On a
/// non-zero status the error carries the rendered command line, the exit
/// code when the OS reports one, and whatever the process wrote to stderr.
/// A command that cannot be spawned at all surfaces as an I/O error.
///
/// Single attempt, no timeout: a hung command blocks the caller.
pub fn run_command(program: &str, args: &[&str]) -> Result<()> {
    let output = Command::new(program).args(args).output()?;

    if !output.status.success() {
        return Err(RastimeError::CommandFailed {
            command: render_command(program, args),
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
