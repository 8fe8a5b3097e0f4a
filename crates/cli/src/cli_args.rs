//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and converts parsed arguments into core [`Settings`].

use build_misc_core::settings::{get_config_path, get_root_path, get_template_dir, Settings};
use clap::{Parser, Subcommand};

/// Command-line arguments for the `build-misc` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use build_misc_cli::cli_args::Args;
///
/// let args = Args::parse_from(["build-misc", "--root", "/src/alpha", "generate"]);
/// assert_eq!(args.settings().root, std::path::PathBuf::from("/src/alpha"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "build-misc", version, about = "Build-time template generation helper")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Project root that relative paths are resolved against.
    ///
    /// If not provided, defaults to the current directory.
    #[arg(long, short = 'C', global = true)]
    pub root: Option<String>,

    /// Path to the `key = value` configuration file.
    ///
    /// If not provided, defaults to `autogen.conf` under the project root.
    #[arg(long, short = 'c', env = "BUILD_MISC_CONFIG", global = true)]
    pub config_path: Option<String>,

    /// Directory holding the template files.
    ///
    /// If not provided, defaults to `autogen` under the project root.
    #[arg(long, short = 't', global = true)]
    pub template_dir: Option<String>,

    /// File name suffix that marks a template.
    #[arg(long, default_value = build_misc_core::settings::DEFAULT_TEMPLATE_SUFFIX, global = true)]
    pub suffix: String,

    /// Print what would be written or removed without touching any file.
    #[arg(long, short = 'd', action, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Render every template to the output path named on its first line.
    #[command(alias = "autogen")]
    Generate,

    /// Remove every output file named by a template.
    #[command(alias = "autogen-clean")]
    Clean,
}

impl Args {
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new(get_root_path(self.root.as_deref()));
        settings.config_file = get_config_path(self.config_path.as_deref());
        settings.template_dir = get_template_dir(self.template_dir.as_deref());
        settings.template_suffix.clone_from(&self.suffix);
        settings.dry_run = self.dry_run;

        settings
    }
}
