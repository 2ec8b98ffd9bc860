//! Rule requiring a `@copyright` tag in the file-level doc.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for file-has-copyright.
pub const CODE: &str = "filehascopyright";

/// Requires a non-empty `@copyright` tag in the file-level doc.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHasCopyright;

impl FileHasCopyright {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FileHasCopyright {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Files must have a @copyright tag"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        match file.file_phpdocs() {
            Some(doc) if doc.non_empty_tags("copyright").next().is_none() => {
                vec![ViolationArgs::new().at_line(doc.line_of("@copyright"))]
            }
            _ => Vec::new(),
        }
    }
}
