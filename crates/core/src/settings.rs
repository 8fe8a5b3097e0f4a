//! Settings and path resolution for build-misc.
//!
//! Both operations receive an explicit [`Settings`] value. Relative paths are
//! resolved against the project root rather than the process working
//! directory.

use std::path::{Path, PathBuf};

/// Default project root, the directory the tool is run from
pub const DEFAULT_ROOT: &str = ".";
/// Default path of the key/value configuration file, relative to the root
pub const DEFAULT_CONFIG_PATH: &str = "autogen.conf";
/// Default template directory, relative to the root
pub const DEFAULT_TEMPLATE_DIR: &str = "autogen";
/// File name suffix marking a template
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".auto";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub template_dir: PathBuf,
    pub template_suffix: String,
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl Settings {
    /// Settings with the default layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_file: PathBuf::from(DEFAULT_CONFIG_PATH),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            template_suffix: DEFAULT_TEMPLATE_SUFFIX.to_string(),
            dry_run: false,
        }
    }

    /// Resolves `path` against the project root. Absolute paths are returned
    /// unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn config_path(&self) -> PathBuf {
        self.resolve(&self.config_file)
    }

    pub fn template_dir_path(&self) -> PathBuf {
        self.resolve(&self.template_dir)
    }

    pub fn is_template(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.template_suffix)
    }
}

/// Expands a leading `~` in a user supplied path.
///
/// # Examples
///
/// ```
/// use build_misc_core::settings::expand_path;
///
/// let expanded = expand_path("~/project");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Resolves the project root, falling back to [`DEFAULT_ROOT`].
pub fn get_root_path(root_arg: Option<&str>) -> PathBuf {
    expand_path(root_arg.unwrap_or(DEFAULT_ROOT))
}

/// Resolves the configuration file path, falling back to [`DEFAULT_CONFIG_PATH`].
pub fn get_config_path(config_path_arg: Option<&str>) -> PathBuf {
    expand_path(config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH))
}

/// Resolves the template directory, falling back to [`DEFAULT_TEMPLATE_DIR`].
pub fn get_template_dir(template_dir_arg: Option<&str>) -> PathBuf {
    expand_path(template_dir_arg.unwrap_or(DEFAULT_TEMPLATE_DIR))
}
