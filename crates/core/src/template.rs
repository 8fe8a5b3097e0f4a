//! Template record splitting.
//!
//! A template's first line names the output file; the rest is the body.

/// Output path and body of one template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    pub path: String,
    pub body: String,
}

impl TemplateRecord {
    /// The declared output path, or `None` if the first line is empty.
    pub fn output_path(&self) -> Option<&str> {
        if self.path.is_empty() {
            None
        } else {
            Some(&self.path)
        }
    }
}

/// Splits raw template text at the first `\n`.
///
/// Without a line break the whole text is the path and the body is empty.
/// Expects text read through [`crate::file_handling::read_file`], whose line
/// breaks are already `\n`.
///
/// # Examples
///
/// ```
/// use build_misc_core::template::split;
///
/// let record = split("out.txt\nHello %%NAME%%");
/// assert_eq!(record.path, "out.txt");
/// assert_eq!(record.body, "Hello %%NAME%%");
/// ```
pub fn split(raw_text: &str) -> TemplateRecord {
    let (path, body) = raw_text.split_once('\n').unwrap_or((raw_text, ""));

    TemplateRecord {
        path: path.to_string(),
        body: body.to_string(),
    }
}
