use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Characters that survive filename sanitization
static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("Invalid filename regex"));

/// Stem used when sanitization leaves nothing of the original name
const FALLBACK_STEM: &str = "file";

/// Path of a blob inside the bucket: `[folder/]basename.extension`.
///
/// Never starts or ends with `/` and never contains empty, `.` or `..`
/// segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageKey(String);

impl StorageKey {
    /// Build a key from an optional folder and an already-safe file name
    pub fn new(folder: Option<&str>, file_name: &str) -> Self {
        match folder.and_then(normalize_folder) {
            Some(folder) => Self(format!("{}/{}", folder, file_name)),
            None => Self(file_name.to_string()),
        }
    }

    /// Wrap a key reported by the store
    pub fn from_stored(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment (basename with extension)
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split on `/` and `\` and sanitize each segment like a filename.
///
/// Segments left empty (blank, `.`, `..`, or nothing but unsafe characters)
/// are dropped, so the result is already a valid object name prefix.
/// Returns `None` when nothing usable remains.
pub fn normalize_folder(folder: &str) -> Option<String> {
    let segments: Vec<String> = folder
        .split(['/', '\\'])
        .map(secure_segment)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Make a client-supplied filename safe to use as a key segment.
///
/// Unicode is NFKD-folded to ASCII (`café` becomes `cafe`), path separators and whitespace runs
/// become `_`, anything outside `[A-Za-z0-9_.-]` is removed and leading or
/// trailing `.`/`_` are stripped. The extension is sanitized on its own so
/// it always survives.
pub fn sanitize_filename(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, extension)) => {
            let stem = secure_segment(stem);
            let extension = secure_segment(extension);
            let stem = if stem.is_empty() {
                FALLBACK_STEM.to_string()
            } else {
                stem
            };

            if extension.is_empty() {
                stem
            } else {
                format!("{}.{}", stem, extension)
            }
        }
        None => {
            let name = secure_segment(filename);
            if name.is_empty() {
                FALLBACK_STEM.to_string()
            } else {
                name
            }
        }
    }
}

fn secure_segment(input: &str) -> String {
    let ascii: String = input
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    UNSAFE_FILENAME_CHARS
        .replace_all(&joined, "")
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
