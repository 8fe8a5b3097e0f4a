//! Build Misc CLI Library
//!
//! This crate provides the command-line interface for build-misc. It parses
//! arguments, builds the core settings and hands the selected operation to the
//! program runner.
//!
//! # Examples
//!
//! ```bash
//! # Render autogen/*.auto using autogen.conf
//! build-misc generate
//!
//! # Remove everything generate wrote
//! build-misc clean
//!
//! # Run from elsewhere against a project root
//! build-misc --root ~/src/alpha generate
//!
//! # Show what would be written
//! build-misc --dry-run generate
//! ```

pub mod cli_args;

use build_misc_core::autogen;
use build_misc_core::program::run_program;
use log::debug;
use std::process::ExitCode;

use crate::cli_args::{Args, Operation};

/// Runs the operation selected by `args`.
pub fn execute(args: &Args) -> ExitCode {
    let settings = args.settings();
    debug!("Settings: {:?}", settings);

    match args.operation {
        Operation::Generate => run_program(|| autogen::generate(&settings)),
        Operation::Clean => run_program(|| autogen::clean(&settings)),
    }
}
