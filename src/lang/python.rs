//! Python language support.
//!
//! Implements the Language trait for Python using tree-sitter-python.
//! Lowers module and class bodies into typed declarations.

use tracing::{debug, trace};
use tree_sitter::{Node, Parser, Tree};

use crate::ast::types::{ClassDecl, Declaration, FunctionDecl, SyntaxTree};
use crate::error::{LocatorError, Result};
use crate::lang::traits::Language;

/// Longest source excerpt quoted in a parse error message.
const MAX_ERROR_SNIPPET: usize = 40;

/// Python 2 statement rules the grammar still accepts but Python 3 rejects.
const PYTHON2_STATEMENTS: &[(&str, &str)] = &[
    ("print_statement", "print"),
    ("exec_statement", "exec"),
];

/// Python language implementation.
pub struct Python;

impl Python {
    /// Get text from a node, handling UTF-8 safely.
    fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
        std::str::from_utf8(&source[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    /// 1-indexed line where `node` starts.
    fn line(node: Node) -> usize {
        node.start_position().row + 1
    }

    fn other(node: Node) -> Declaration {
        Declaration::Other {
            kind: node.kind().to_string(),
            line: Self::line(node),
        }
    }

    /// Lower every statement of a `module` or `block` node. Comments are
    /// extras in the grammar and never count as statements.
    fn lower_block(block: Node, source: &[u8]) -> Vec<Declaration> {
        let mut cursor = block.walk();
        block
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .map(|child| Self::lower_statement(child, source))
            .collect()
    }

    fn lower_statement(node: Node, source: &[u8]) -> Declaration {
        match node.kind() {
            "function_definition" => Self::lower_function(node, source, Vec::new()),
            "class_definition" => Self::lower_class(node, source, Vec::new()),
            "decorated_definition" => {
                // The decorators belong to the wrapped definition
                let decorators = Self::extract_decorators(node, source);
                match node.child_by_field_name("definition") {
                    Some(def) if def.kind() == "function_definition" => {
                        Self::lower_function(def, source, decorators)
                    }
                    Some(def) if def.kind() == "class_definition" => {
                        Self::lower_class(def, source, decorators)
                    }
                    _ => Self::other(node),
                }
            }
            _ => Self::other(node),
        }
    }

    fn lower_function(node: Node, source: &[u8], decorators: Vec<String>) -> Declaration {
        let Some(name_node) = node.child_by_field_name("name") else {
            return Self::other(node);
        };
        let func = FunctionDecl {
            name: Self::node_text(name_node, source).to_string(),
            line: Self::line(node),
            is_async: Self::is_async_function(node),
            decorators,
        };
        trace!(name = %func.name, line = func.line, "function");
        Declaration::Function(func)
    }

    fn lower_class(node: Node, source: &[u8], decorators: Vec<String>) -> Declaration {
        let Some(name_node) = node.child_by_field_name("name") else {
            return Self::other(node);
        };
        let body = node
            .child_by_field_name("body")
            .map(|block| Self::lower_block(block, source))
            .unwrap_or_default();
        let class = ClassDecl {
            name: Self::node_text(name_node, source).to_string(),
            line: Self::line(node),
            decorators,
            body,
        };
        trace!(name = %class.name, line = class.line, members = class.body.len(), "class");
        Declaration::Class(class)
    }

    /// Check a `function_definition` for the `async` keyword, which always
    /// precedes `def`.
    fn is_async_function(node: Node) -> bool {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "async" => return true,
                "def" => return false,
                _ => {}
            }
        }
        false
    }

    /// Decorator expressions of a `decorated_definition`, without the `@`.
    fn extract_decorators(node: Node, source: &[u8]) -> Vec<String> {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .filter(|child| child.kind() == "decorator")
            .map(|dec| {
                Self::node_text(dec, source)
                    .trim_start_matches('@')
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Depth-first search for the first ERROR or MISSING node, pruning
    /// subtrees without errors.
    fn find_syntax_error(node: Node) -> Option<Node> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.has_error() || child.is_missing() {
                if let Some(found) = Self::find_syntax_error(child) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// First Python 2 only statement anywhere in the tree, in document order.
    fn find_python2_statement(node: Node) -> Option<(Node, &'static str)> {
        if let Some((_, keyword)) = PYTHON2_STATEMENTS
            .iter()
            .find(|(kind, _)| *kind == node.kind())
        {
            return Some((node, *keyword));
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if let Some(found) = Self::find_python2_statement(child) {
                return Some(found);
            }
        }
        None
    }

    fn syntax_error(root: Node, source: &[u8], file: &str) -> LocatorError {
        let Some(node) = Self::find_syntax_error(root) else {
            return LocatorError::Parse {
                file: file.to_string(),
                line: Self::line(root),
                message: "invalid syntax".to_string(),
            };
        };

        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let snippet: String = Self::node_text(node, source)
                .lines()
                .next()
                .unwrap_or("")
                .trim()
                .chars()
                .take(MAX_ERROR_SNIPPET)
                .collect();
            if snippet.is_empty() {
                "invalid syntax".to_string()
            } else {
                format!("invalid syntax near `{}`", snippet)
            }
        };

        LocatorError::Parse {
            file: file.to_string(),
            line: Self::line(node),
            message,
        }
    }
}

impl Language for Python {
    fn name(&self) -> &'static str {
        "python"
    }

    fn parser(&self) -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| LocatorError::TreeSitter(e.to_string()))?;
        Ok(parser)
    }

    fn lower(&self, tree: &Tree, source: &[u8], file: &str) -> Result<SyntaxTree> {
        let root = tree.root_node();
        if root.has_error() {
            return Err(Self::syntax_error(root, source, file));
        }
        if let Some((node, keyword)) = Self::find_python2_statement(root) {
            return Err(LocatorError::Parse {
                file: file.to_string(),
                line: Self::line(node),
                message: format!("Python 2 `{}` statement is not valid Python 3", keyword),
            });
        }

        let body = Self::lower_block(root, source);
        debug!(file, statements = body.len(), "lowered python module");
        Ok(SyntaxTree::new(self.name(), body))
    }
}
