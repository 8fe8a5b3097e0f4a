//! The generate and clean operations.
//!
//! Each template in the template directory names its output file on its first
//! line. `generate` writes the substituted body there; `clean` removes it.
//! The first error aborts the operation and outputs already written are left
//! in place.

use std::path::PathBuf;

use log::{debug, info};

use crate::config_file::load_config;
use crate::error::{Error, Result};
use crate::file_handling::{list_templates, read_file, remove_file_if_exists, write_file};
use crate::interpolation::{get_tokens, substitute};
use crate::settings::Settings;
use crate::template::split;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of templates processed
    pub templates: usize,
    /// Output files written, or that would be written in a dry run
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    /// Number of templates processed
    pub templates: usize,
    /// Output files removed, or that would be removed in a dry run
    pub removed: Vec<PathBuf>,
}

/// Renders every template and writes it to its declared path.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The template directory or a template file cannot be read
/// - A template declares an empty output path
/// - An output file cannot be written
pub fn generate(settings: &Settings) -> Result<GenerateSummary> {
    let config_path = settings.config_path();
    debug!("Config path: `{}`", config_path.display());
    let keys = load_config(&config_path)?;

    let mut summary = GenerateSummary::default();

    for template_path in list_templates(settings)? {
        let record = split(&read_file("template file", &template_path)?);
        let Some(path) = record.output_path() else {
            return Err(Error::empty_output_path(&template_path));
        };

        let output_path = settings.resolve(path);
        let text = substitute(&record.body, &keys);

        let unresolved = get_tokens(&text);
        if !unresolved.is_empty() {
            debug!(
                "Template `{}` leaves tokens without a configured value: {:?}",
                template_path.display(),
                unresolved
            );
        }

        if settings.dry_run {
            println!("would write {}", output_path.display());
        } else {
            debug!(
                "Writing `{}` from `{}`",
                output_path.display(),
                template_path.display()
            );
            write_file("output file", &output_path, &text)?;
        }

        summary.templates += 1;
        summary.outputs.push(output_path);
    }

    info!(
        "Generated {} output(s) from {} template(s)",
        summary.outputs.len(),
        summary.templates
    );

    Ok(summary)
}

/// Removes every output file declared by a template.
///
/// Missing outputs are skipped, so running it twice is harmless. Templates
/// with an empty first line name no output and are skipped as well.
///
/// # Errors
///
/// Returns an error if the template directory or a template file cannot be
/// read, or if an existing output cannot be removed.
pub fn clean(settings: &Settings) -> Result<CleanSummary> {
    let mut summary = CleanSummary::default();

    for template_path in list_templates(settings)? {
        let record = split(&read_file("template file", &template_path)?);
        summary.templates += 1;

        let Some(path) = record.output_path() else {
            debug!(
                "Template `{}` names no output, skipping",
                template_path.display()
            );
            continue;
        };

        let output_path = settings.resolve(path);
        if settings.dry_run {
            if output_path.is_file() {
                println!("would remove {}", output_path.display());
                summary.removed.push(output_path);
            }
        } else if remove_file_if_exists("output file", &output_path)? {
            debug!("Removed `{}`", output_path.display());
            summary.removed.push(output_path);
        }
    }

    info!(
        "Removed {} output(s) for {} template(s)",
        summary.removed.len(),
        summary.templates
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(config: &str, templates: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("autogen.conf"), config).unwrap();
        fs::create_dir(dir.path().join("autogen")).unwrap();
        for (name, contents) in templates {
            fs::write(dir.path().join("autogen").join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_generate_writes_substituted_body() {
        let dir = project("GREETING = hi\n", &[("x.auto", "x.txt\n%%GREETING%% there")]);
        let settings = Settings::new(dir.path());

        let summary = generate(&settings).unwrap();

        assert_eq!(summary.templates, 1);
        assert_eq!(summary.outputs, vec![dir.path().join("x.txt")]);
        assert_eq!(
            fs::read_to_string(dir.path().join("x.txt")).unwrap(),
            "hi there"
        );
    }

    #[test]
    fn test_generate_empty_output_path() {
        let dir = project("", &[("x.auto", "\nbody")]);
        let result = generate(&Settings::new(dir.path()));

        assert!(matches!(result, Err(Error::EmptyOutputPath { .. })));
    }

    #[test]
    fn test_generate_error_points_at_operation() {
        let dir = TempDir::new().unwrap();
        let error = generate(&Settings::new(dir.path())).unwrap_err();

        assert!(error.location().file().ends_with("autogen.rs"));
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let dir = project("A = 1\n", &[("x.auto", "x.txt\n%%A%%")]);
        let mut settings = Settings::new(dir.path());
        settings.dry_run = true;

        let summary = generate(&settings).unwrap();

        assert_eq!(summary.outputs, vec![dir.path().join("x.txt")]);
        assert!(!dir.path().join("x.txt").exists());
    }

    #[test]
    fn test_generate_converts_carriage_returns() {
        let dir = project(
            "A = 1\rB = 2\n",
            &[
                ("crlf.auto", "out.txt\r\nv=%%A%%\r\nw=%%B%%\r\n"),
                ("lone.auto", "cr.txt\rbody\n"),
            ],
        );

        generate(&Settings::new(dir.path())).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("out.txt")).unwrap(),
            "v=1\nw=2\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("cr.txt")).unwrap(),
            "body\n"
        );
        assert!(!dir.path().join("cr.txt\rbody").exists());
    }

    #[test]
    fn test_clean_dry_run_skips_directory_output() {
        let dir = project("", &[("x.auto", "out\nbody")]);
        fs::create_dir(dir.path().join("out")).unwrap();
        let mut settings = Settings::new(dir.path());
        settings.dry_run = true;

        let summary = clean(&settings).unwrap();
        assert!(summary.removed.is_empty());

        settings.dry_run = false;
        assert!(clean(&settings).is_err());
    }

    #[test]
    fn test_clean_removes_outputs() {
        let dir = project("", &[("x.auto", "x.txt\nbody")]);
        fs::write(dir.path().join("x.txt"), "body").unwrap();

        let summary = clean(&Settings::new(dir.path())).unwrap();

        assert_eq!(summary.removed, vec![dir.path().join("x.txt")]);
        assert!(!dir.path().join("x.txt").exists());
    }

    #[test]
    fn test_clean_does_not_need_config() {
        let dir = project("", &[("x.auto", "x.txt\nbody")]);
        fs::remove_file(dir.path().join("autogen.conf")).unwrap();

        let summary = clean(&Settings::new(dir.path())).unwrap();
        assert_eq!(summary.templates, 1);
        assert!(summary.removed.is_empty());
    }

    #[test]
    fn test_clean_skips_empty_output_path() {
        let dir = project("", &[("x.auto", "")]);

        let summary = clean(&Settings::new(dir.path())).unwrap();
        assert_eq!(summary.templates, 1);
        assert!(summary.removed.is_empty());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_clean_dry_run_keeps_outputs() {
        let dir = project("", &[("x.auto", "x.txt\nbody")]);
        fs::write(dir.path().join("x.txt"), "body").unwrap();
        let mut settings = Settings::new(dir.path());
        settings.dry_run = true;

        let summary = clean(&settings).unwrap();

        assert_eq!(summary.removed, vec![dir.path().join("x.txt")]);
        assert!(dir.path().join("x.txt").exists());
    }
}
