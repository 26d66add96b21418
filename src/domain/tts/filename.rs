use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fmt;

/// Key used when sanitizing leaves nothing behind
pub const PLACEHOLDER_KEY: &str = "unnamed";

/// Default bound on sanitized keys, in characters
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 50;

/// Smallest bound the sanitizing policies can honour: the placeholder must fit
pub fn min_filename_length() -> usize {
    PLACEHOLDER_KEY.chars().count()
}

static ILLEGAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("illegal character pattern is valid"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Filesystem-safe name of a cached audio file, without extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey(String);

impl FileKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a text (and optional user-supplied name) becomes a [`FileKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenamePolicy {
    /// SHA-256 hex digest of the text.
    Hash,
    /// Strip illegal characters from the user-supplied name; use the text
    /// hash when no usable name was given or the name is too long.
    StripOrHash { max_len: usize },
    /// Replace illegal characters in the text itself with underscores and
    /// truncate to `max_len`. Never hashes.
    ReplaceAndTruncate { max_len: usize },
}

impl FilenamePolicy {
    /// Derive the cache key for `text`.
    ///
    /// Total: every input yields a non-empty key free of path separators and
    /// control characters.
    pub fn derive(&self, text: &str, user_supplied_name: Option<&str>) -> FileKey {
        match *self {
            FilenamePolicy::Hash => hash_key(text),
            FilenamePolicy::StripOrHash { max_len } => {
                let name = user_supplied_name.filter(|name| !name.trim().is_empty());
                match name {
                    Some(name) if name.chars().count() <= max_len => strip_illegal(name),
                    Some(name) => {
                        tracing::debug!(
                            name_length = name.chars().count(),
                            max_len,
                            "Filename too long, using text hash"
                        );
                        Self::Hash.derive(text, None)
                    }
                    None => Self::Hash.derive(text, None),
                }
            }
            FilenamePolicy::ReplaceAndTruncate { max_len } => {
                replace_illegal(user_supplied_name.unwrap_or(text), max_len)
            }
        }
    }
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`.
pub fn hash_key(text: &str) -> FileKey {
    let digest = Sha256::digest(text.as_bytes());
    FileKey(format!("{:x}", digest))
}

/// Keep alphanumerics, spaces, underscores and hyphens; drop everything else.
pub fn strip_illegal(name: &str) -> FileKey {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    non_empty(kept.trim_end().to_string())
}

/// Replace illegal characters with `_`, collapse whitespace runs into a single
/// `_`, trim surrounding underscores and cap the length at `max_len` chars.
pub fn replace_illegal(name: &str, max_len: usize) -> FileKey {
    let replaced = ILLEGAL_CHARS.replace_all(name, "_");
    let collapsed = WHITESPACE_RUNS.replace_all(&replaced, "_");
    let trimmed = collapsed.trim_matches('_');

    let truncated: String = trimmed.chars().take(max_len).collect();
    // a cut can land right after an underscore
    non_empty(truncated.trim_end_matches('_').to_string())
}

fn non_empty(candidate: String) -> FileKey {
    if candidate.is_empty() {
        FileKey(PLACEHOLDER_KEY.to_string())
    } else {
        FileKey(candidate)
    }
}
