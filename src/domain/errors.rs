use thiserror::Error;

/// Render a byte count as mebibytes, e.g. `100.0`
fn mebibytes(bytes: &u64) -> String {
    format!("{:.1}", *bytes as f64 / (1024.0 * 1024.0))
}

/// Rejections raised by the domain before any store call is made.
///
/// The display strings are the messages returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("No file selected")]
    EmptyFilename,

    #[error("File type not allowed. Only jpg, jpeg, and mp4 are supported")]
    InvalidExtension { filename: String },

    #[error("File too large. Maximum size is {}MB", mebibytes(.max))]
    FileTooLarge { size: u64, max: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_message_uses_mebibytes() {
        let err = DomainError::FileTooLarge {
            size: 100 * 1024 * 1024 + 1,
            max: 100 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "File too large. Maximum size is 100.0MB");
    }

    #[test]
    fn test_invalid_extension_message() {
        let err = DomainError::InvalidExtension {
            filename: "notes.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "File type not allowed. Only jpg, jpeg, and mp4 are supported"
        );
    }

    #[test]
    fn test_empty_filename_message() {
        assert_eq!(DomainError::EmptyFilename.to_string(), "No file selected");
    }
}
