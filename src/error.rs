//! Central error types for docstring-renderer.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic
//! `Display` implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum LocatorError {
    /// Target file does not exist or could not be read as UTF-8 text
    #[error("Cannot read {path}: {error}")]
    Input {
        error: std::io::Error,
        path: PathBuf,
    },

    /// File content is not valid source for the grammar
    #[error("Parse error in {file} at line {line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    /// No declared name contains the keyword
    #[error(
        "Among all defined methods/funcs/classes, no objects could be found \
         with the keyword `{keyword}` in the name."
    )]
    NotFound { keyword: String },

    /// Grammar could not be loaded into the parser
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}

/// Convenience type alias for Results using LocatorError.
pub type Result<T> = std::result::Result<T, LocatorError>;

impl LocatorError {
    /// Create an input error with path context.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let source = std::fs::read_to_string(path)
    ///     .map_err(|e| LocatorError::io_with_path(e, path))?;
    /// ```
    #[inline]
    pub fn io_with_path(error: std::io::Error, path: impl AsRef<Path>) -> Self {
        LocatorError::Input {
            error,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a not-found error for `keyword`.
    pub fn not_found(keyword: impl Into<String>) -> Self {
        LocatorError::NotFound {
            keyword: keyword.into(),
        }
    }
}
