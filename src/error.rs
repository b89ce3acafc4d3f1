//! Input file validation errors

use thiserror::Error;

/// Reasons the input path is rejected before any processing
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputFileError {
    #[error("The file {0} does not exist!")]
    NotFound(String),

    #[error("The file {0} should end with .md")]
    NotMarkdown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputFileError::NotFound("notes.md".to_string()).to_string(),
            "The file notes.md does not exist!"
        );
        assert_eq!(
            InputFileError::NotMarkdown("notes.txt".to_string()).to_string(),
            "The file notes.txt should end with .md"
        );
    }
}
