use std::panic::Location;
use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the generate and clean operations.
///
/// Every variant records the source location it was raised from, so the
/// program runner can point at the failing step.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} at `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
        location: &'static Location<'static>,
    },

    #[error("Template `{}` declares an empty output path", .template)]
    EmptyOutputPath {
        template: String,
        location: &'static Location<'static>,
    },
}

impl Error {
    #[track_caller]
    pub fn io_error(file_description: &str, path: &Path, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.display().to_string(),
            original,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub fn empty_output_path(template: &Path) -> Self {
        Self::EmptyOutputPath {
            template: template.display().to_string(),
            location: Location::caller(),
        }
    }

    pub fn location(&self) -> &'static Location<'static> {
        match self {
            Self::Io { location, .. } | Self::EmptyOutputPath { location, .. } => location,
        }
    }

    /// Line the error was raised from.
    pub fn line(&self) -> u32 {
        self.location().line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_message() {
        let error = Error::io_error(
            "config file",
            Path::new("autogen.conf"),
            std::io::Error::new(ErrorKind::NotFound, "not found"),
        );

        assert_eq!(
            error.to_string(),
            "IO error with config file at `autogen.conf`: not found"
        );
    }

    #[test]
    fn test_location_is_construction_site() {
        let expected_line = line!() + 1;
        let error = Error::empty_output_path(Path::new("autogen/x.auto"));

        assert_eq!(error.line(), expected_line);
        assert!(error.location().file().ends_with("error.rs"));
    }

    #[test]
    fn test_empty_output_path_message() {
        let error = Error::empty_output_path(Path::new("autogen/x.auto"));
        assert_eq!(
            error.to_string(),
            "Template `autogen/x.auto` declares an empty output path"
        );
    }
}
