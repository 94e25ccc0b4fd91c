//! Error types for rubrix.
//!
//! Library crates use [`RubrixError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Only a malformed entry is fatal to an extraction run. A missing Contents
//! heading yields an empty result, an advertised section without a matching
//! body list is silently dropped, and a heading with no following list is
//! recorded as empty — none of those are errors.

use std::path::PathBuf;

/// Top-level error type for all rubrix operations.
#[derive(Debug, thiserror::Error)]
pub enum RubrixError {
    /// A list item carries no `<a href>` descendant to name it.
    #[error("malformed entry: list item has no link: {item_text:?}")]
    MalformedEntry { item_text: String },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON export serialization or parsing error.
    #[error("export error: {0}")]
    Export(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RubrixError>;

impl RubrixError {
    /// Create a malformed-entry error carrying the offending item's text.
    pub fn malformed_entry(item_text: impl Into<String>) -> Self {
        Self::MalformedEntry {
            item_text: item_text.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = RubrixError::malformed_entry("dangling item");
        assert_eq!(
            err.to_string(),
            "malformed entry: list item has no link: \"dangling item\""
        );

        let err = RubrixError::config("bad spacing value");
        assert_eq!(err.to_string(), "config error: bad spacing value");
    }

    #[test]
    fn io_error_carries_path() {
        let err = RubrixError::io(
            "/tmp/missing.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("missing.md"));
    }
}
