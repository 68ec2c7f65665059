//! docstring-renderer - find declarations in Python source by keyword.
//!
//! Parses one Python file with tree-sitter, lists its top-level functions,
//! classes and class methods, and resolves a keyword to the shortest
//! declared name containing it.
//!
//! # Architecture
//!
//! - **Language Layer** ([`lang`]): tree-sitter parser and lowering into typed declarations
//! - **AST Layer** ([`ast`]): typed syntax tree and name extraction
//! - **Locator** ([`locator`]): shortest-match keyword search
//!
//! # Quick Start
//!
//! ```no_run
//! use docstring_renderer::KeywordLocator;
//!
//! let locator = KeywordLocator::new("./src/module.py", "render")?;
//! println!("{}", locator.find_keyword()?);
//! # Ok::<(), docstring_renderer::LocatorError>(())
//! ```

pub mod ast;
pub mod cli;
pub mod error;
pub mod lang;
pub mod locator;

pub use ast::{AstExtractor, DeclarationKind, Listing, NameLists, SyntaxTree};
pub use error::{LocatorError, Result};
pub use locator::{shortest_match, shortest_match_by, KeywordLocator, KeywordMatch};
