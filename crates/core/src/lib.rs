//! Build Misc Core Library
//!
//! This crate provides the core of build-misc, a build-time code generation
//! helper. It reads `key = value` pairs from a configuration file and renders
//! every template in a template directory to the output path named on the
//! template's first line, replacing `%%KEY%%` tokens with configured values.
//! A companion operation removes the generated files again.
//!
//! # Key Features
//!
//! - **Config Loading**: Flat `key = value` files with `#` comments
//! - **Template Splitting**: First line is the output path, the rest is the body
//! - **Generate / Clean**: Write or remove every declared output
//! - **Program Runner**: One diagnostic line and exit status 1 on failure
//!
//! # Examples
//!
//! Generating all outputs of a project:
//!
//! ```no_run
//! use build_misc_core::autogen::generate;
//! use build_misc_core::settings::Settings;
//!
//! let summary = generate(&Settings::new("."))?;
//! println!("Wrote {} file(s)", summary.outputs.len());
//! # Ok::<(), build_misc_core::error::Error>(())
//! ```

pub mod autogen;
pub mod config_file;
pub mod error;
pub mod file_handling;
pub mod interpolation;
pub mod program;
pub mod settings;
pub mod template;
