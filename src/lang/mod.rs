//! Language abstraction layer.
//!
//! Provides the [`Language`] trait and its tree-sitter backed
//! implementations.

pub mod python;
pub mod traits;

pub use python::Python;
pub use traits::Language;
