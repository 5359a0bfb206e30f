//! Upload admission rules
//!
//! These checks run on request metadata only, before any hashing or store
//! call, so a rejected upload never costs a network round trip.

use crate::domain::errors::DomainError;

/// Extensions accepted by the relay (compared lowercased)
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "mp4"];

/// Upload size ceiling: 100 MiB
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validation result type
pub type ValidationResult<T> = Result<T, DomainError>;

/// Stateless validator for incoming uploads
pub struct UploadValidator;

impl UploadValidator {
    /// Validate filename and payload size.
    ///
    /// Returns the lowercased extension on success so callers do not have to
    /// parse the filename a second time.
    pub fn validate(filename: &str, size: u64) -> ValidationResult<String> {
        if filename.is_empty() {
            return Err(DomainError::EmptyFilename);
        }

        let extension = Self::allowed_extension(filename).ok_or_else(|| {
            DomainError::InvalidExtension {
                filename: filename.to_string(),
            }
        })?;

        if size > MAX_FILE_SIZE {
            return Err(DomainError::FileTooLarge {
                size,
                max: MAX_FILE_SIZE,
            });
        }

        Ok(extension)
    }

    /// Lowercased suffix after the last `.`, if any
    pub fn extension_of(filename: &str) -> Option<String> {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }

    fn allowed_extension(filename: &str) -> Option<String> {
        Self::extension_of(filename).filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_extensions_case_insensitively() {
        assert_eq!(UploadValidator::validate("photo.jpg", 10).unwrap(), "jpg");
        assert_eq!(UploadValidator::validate("photo.JPEG", 10).unwrap(), "jpeg");
        assert_eq!(UploadValidator::validate("clip.Mp4", 10).unwrap(), "mp4");
    }

    #[test]
    fn test_rejects_empty_filename() {
        assert_eq!(
            UploadValidator::validate("", 10),
            Err(DomainError::EmptyFilename)
        );
    }

    #[test]
    fn test_rejects_missing_dot() {
        assert!(matches!(
            UploadValidator::validate("jpg", 10),
            Err(DomainError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_rejects_disallowed_extension() {
        for name in ["doc.pdf", "archive.tar.gz", "image.png", "photo.jpg.exe", "trailing."] {
            assert!(
                matches!(
                    UploadValidator::validate(name, 10),
                    Err(DomainError::InvalidExtension { .. })
                ),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_size_boundary() {
        assert!(UploadValidator::validate("a.mp4", MAX_FILE_SIZE).is_ok());
        assert_eq!(
            UploadValidator::validate("a.mp4", MAX_FILE_SIZE + 1),
            Err(DomainError::FileTooLarge {
                size: MAX_FILE_SIZE + 1,
                max: MAX_FILE_SIZE,
            })
        );
    }

    #[test]
    fn test_extension_checked_before_size() {
        assert!(matches!(
            UploadValidator::validate("big.png", MAX_FILE_SIZE * 2),
            Err(DomainError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(UploadValidator::extension_of("a.b.JPG"), Some("jpg".to_string()));
        assert_eq!(UploadValidator::extension_of("noext"), None);
    }
}
