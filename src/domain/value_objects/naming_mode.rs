use serde::{Deserialize, Serialize};

/// How the basename of a storage key is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NamingMode {
    /// Basename is the truncated content hash; repeat uploads are no-ops
    #[default]
    ContentAddressed,
    /// Basename is the caller's sanitized filename; uploads overwrite
    OriginalName,
}

impl NamingMode {
    /// Map the `use_original_name` form flag onto a mode
    pub fn from_use_original_name(use_original_name: bool) -> Self {
        if use_original_name {
            NamingMode::OriginalName
        } else {
            NamingMode::ContentAddressed
        }
    }

    /// Parse the raw `use_original_name` form value.
    ///
    /// Only a case-insensitive `true` selects original-name mode.
    pub fn from_form_value(value: &str) -> Self {
        Self::from_use_original_name(value.trim().eq_ignore_ascii_case("true"))
    }

    pub fn is_deduplicated(self) -> bool {
        self == NamingMode::ContentAddressed
    }
}

impl std::fmt::Display for NamingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingMode::ContentAddressed => write!(f, "content_addressed"),
            NamingMode::OriginalName => write!(f, "original_name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_content_addressed() {
        assert_eq!(NamingMode::default(), NamingMode::ContentAddressed);
        assert!(NamingMode::default().is_deduplicated());
    }

    #[test]
    fn test_from_form_value() {
        assert_eq!(NamingMode::from_form_value("true"), NamingMode::OriginalName);
        assert_eq!(NamingMode::from_form_value(" TRUE "), NamingMode::OriginalName);
        assert_eq!(
            NamingMode::from_form_value("false"),
            NamingMode::ContentAddressed
        );
        assert_eq!(NamingMode::from_form_value("yes"), NamingMode::ContentAddressed);
        assert_eq!(NamingMode::from_form_value(""), NamingMode::ContentAddressed);
    }
}
