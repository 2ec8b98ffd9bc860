//! Rule requiring a file-level phpdoc block.

use phpdoc_check_core::{PhpFile, Rule, ViolationArgs};

/// Rule code for file-phpdoc-present.
pub const CODE: &str = "filephpdocpresent";

/// Requires a phpdoc block before the first line of code.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePhpdocPresent;

impl FilePhpdocPresent {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FilePhpdocPresent {
    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "File-level phpdocs block is present"
    }

    fn validate(&self, file: &PhpFile) -> Vec<ViolationArgs> {
        if file.file_phpdocs().is_some() {
            return Vec::new();
        }
        vec![ViolationArgs::new()]
    }
}
