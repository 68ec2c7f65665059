//! Core Language trait definition.
//!
//! The [`Language`] trait is the seam between a tree-sitter grammar and the
//! typed [`SyntaxTree`]. Each language provides a configured parser and the
//! lowering from its concrete syntax tree into [`Declaration`]s.
//!
//! [`Declaration`]: crate::ast::types::Declaration

use tree_sitter::{Parser, Tree};

use crate::ast::types::SyntaxTree;
use crate::error::Result;

/// Trait for language-specific operations.
pub trait Language: Send + Sync {
    /// Language identifier (e.g., "python").
    fn name(&self) -> &'static str;

    /// Get a configured tree-sitter parser for this language.
    fn parser(&self) -> Result<Parser>;

    /// Lower a parsed tree into its top-level declarations.
    ///
    /// `file` is only used to label errors. Fails with
    /// [`LocatorError::Parse`](crate::error::LocatorError::Parse) when the
    /// tree contains syntax errors.
    fn lower(&self, tree: &Tree, source: &[u8], file: &str) -> Result<SyntaxTree>;

    /// Parse `source` and lower it in one step.
    fn parse(&self, source: &str, file: &str) -> Result<SyntaxTree> {
        let mut parser = self.parser()?;
        let tree = parser.parse(source, None).ok_or_else(|| {
            crate::error::LocatorError::Parse {
                file: file.to_string(),
                line: 1,
                message: "parser produced no tree".to_string(),
            }
        })?;
        self.lower(&tree, source.as_bytes(), file)
    }
}
