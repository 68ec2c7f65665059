//! Name extraction over a typed syntax tree.
//!
//! Only direct children of the module body count: nested functions,
//! classes inside functions and definitions under compound statements are
//! never listed. Methods are the functions directly inside a top-level
//! class body, qualified as `Class.method`.

use std::path::Path;

use tracing::debug;

use crate::ast::types::{DeclarationKind, Listing, NameLists, SyntaxTree};
use crate::error::{LocatorError, Result};
use crate::lang::{Language, Python};

/// Lists declared names of one parsed source file.
#[derive(Debug, Clone)]
pub struct AstExtractor {
    tree: SyntaxTree,
}

impl AstExtractor {
    /// Wrap an already lowered tree.
    pub fn new(tree: SyntaxTree) -> Self {
        Self { tree }
    }

    /// Read and parse a Python file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, &Python)
    }

    /// Read and parse a file with an explicit language.
    pub fn from_file_with(path: impl AsRef<Path>, lang: &dyn Language) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| LocatorError::io_with_path(e, path))?;
        debug!(path = %path.display(), bytes = source.len(), "read source");
        Self::from_source_with(&source, &path.display().to_string(), lang)
    }

    /// Parse in-memory Python source. `file` labels parse errors.
    pub fn from_source(source: &str, file: &str) -> Result<Self> {
        Self::from_source_with(source, file, &Python)
    }

    pub fn from_source_with(source: &str, file: &str, lang: &dyn Language) -> Result<Self> {
        lang.parse(source, file).map(Self::new)
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Names of top-level functions, in declaration order.
    pub fn list_functions(&self) -> Vec<String> {
        self.tree.functions().map(|f| f.name.clone()).collect()
    }

    /// `Class.method` for every function directly in a top-level class
    /// body. Classes in declaration order, then methods in declaration
    /// order.
    pub fn list_methods(&self) -> Vec<String> {
        self.tree
            .classes()
            .flat_map(|class| {
                class
                    .methods()
                    .map(move |method| format!("{}.{}", class.name, method.name))
            })
            .collect()
    }

    /// Names of top-level classes, in declaration order.
    pub fn list_classes(&self) -> Vec<String> {
        self.tree.classes().map(|c| c.name.clone()).collect()
    }

    /// Functions, then methods, then classes. No deduplication.
    pub fn list_all(&self) -> Vec<String> {
        self.name_lists().into_all()
    }

    pub fn name_lists(&self) -> NameLists {
        NameLists {
            functions: self.list_functions(),
            methods: self.list_methods(),
            classes: self.list_classes(),
        }
    }

    /// Grouped names together with the typed declarations, for `--list`
    /// JSON output.
    pub fn listing(&self) -> Listing<'_> {
        Listing {
            names: self.name_lists(),
            declarations: &self.tree.body,
        }
    }

    /// `list_all` order with each name tagged by what it declares.
    pub fn declarations(&self) -> Vec<(DeclarationKind, String)> {
        self.name_lists()
            .iter()
            .map(|(kind, name)| (kind, name.to_string()))
            .collect()
    }
}
