//! AST type definitions.
//!
//! Typed representation of a source file's top-level declarations. Parsers
//! lower their concrete syntax tree into these types once; every listing
//! operation then pattern-matches on [`Declaration`] instead of inspecting
//! node kinds.

use serde::Serialize;

/// A function definition (`def` or `async def`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDecl {
    /// Function name as written in source
    pub name: String,
    /// Starting line number (1-indexed)
    pub line: usize,
    /// Whether this is an async function
    pub is_async: bool,
    /// Decorator expressions applied, without the leading `@`
    pub decorators: Vec<String>,
}

/// A class definition and its directly nested body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDecl {
    /// Class name as written in source
    pub name: String,
    /// Starting line number (1-indexed)
    pub line: usize,
    /// Decorator expressions applied, without the leading `@`
    pub decorators: Vec<String>,
    /// Statements directly inside the class body
    pub body: Vec<Declaration>,
}

impl ClassDecl {
    /// Functions declared directly in the class body, in source order.
    pub fn methods(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.body.iter().filter_map(Declaration::as_function)
    }
}

/// One statement of a module or class body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Declaration {
    Function(FunctionDecl),
    Class(ClassDecl),
    /// Anything else: imports, assignments, compound statements, ...
    Other { kind: String, line: usize },
}

impl Declaration {
    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match self {
            Declaration::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDecl> {
        match self {
            Declaration::Class(class) => Some(class),
            _ => None,
        }
    }
}

/// Parsed top-level structure of one source file.
///
/// Built once from source and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyntaxTree {
    /// Language the tree was parsed with (e.g. "python")
    pub language: &'static str,
    /// Statements directly in the module body, in source order
    pub body: Vec<Declaration>,
}

impl SyntaxTree {
    pub fn new(language: &'static str, body: Vec<Declaration>) -> Self {
        Self { language, body }
    }

    /// Top-level function definitions, in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.body.iter().filter_map(Declaration::as_function)
    }

    /// Top-level class definitions, in source order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.body.iter().filter_map(Declaration::as_class)
    }
}

/// What a declared name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Function,
    Method,
    Class,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Function => "function",
            DeclarationKind::Method => "method",
            DeclarationKind::Class => "class",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared names of a file, grouped by kind.
///
/// Methods are qualified as `<ClassName>.<MethodName>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameLists {
    pub functions: Vec<String>,
    pub methods: Vec<String>,
    pub classes: Vec<String>,
}

impl NameLists {
    /// Total number of names across all three lists.
    pub fn len(&self) -> usize {
        self.functions.len() + self.methods.len() + self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Functions, then methods, then classes, each tagged with its kind.
    pub fn iter(&self) -> impl Iterator<Item = (DeclarationKind, &str)> {
        let functions = self
            .functions
            .iter()
            .map(|n| (DeclarationKind::Function, n.as_str()));
        let methods = self
            .methods
            .iter()
            .map(|n| (DeclarationKind::Method, n.as_str()));
        let classes = self
            .classes
            .iter()
            .map(|n| (DeclarationKind::Class, n.as_str()));
        functions.chain(methods).chain(classes)
    }

    /// Flatten into `list_all` order. No deduplication.
    pub fn into_all(self) -> Vec<String> {
        let mut all = self.functions;
        all.extend(self.methods);
        all.extend(self.classes);
        all
    }
}

/// Full listing of a file: the grouped names plus the typed top-level
/// declarations they were derived from.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<'a> {
    #[serde(flatten)]
    pub names: NameLists,
    pub declarations: &'a [Declaration],
}
