//! AST extraction of declared names.
//!
//! # Main API
//!
//! - [`AstExtractor`] - List functions, methods and classes of a parsed file
//! - [`types::SyntaxTree`] - Typed top-level structure the extractor reads
//!
//! # Example
//!
//! ```no_run
//! use docstring_renderer::ast::AstExtractor;
//!
//! let extractor = AstExtractor::from_file("./src/module.py")?;
//! for name in extractor.list_methods() {
//!     println!("{}", name);
//! }
//! # Ok::<(), docstring_renderer::error::LocatorError>(())
//! ```

pub mod extractor;
pub mod types;

pub use extractor::AstExtractor;
pub use types::{
    ClassDecl, Declaration, DeclarationKind, FunctionDecl, Listing, NameLists, SyntaxTree,
};
