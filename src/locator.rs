//! Keyword lookup over declared names.
//!
//! [`KeywordLocator`] owns the parsed file and the keyword, and resolves the
//! keyword to the single shortest declared name containing it.

use std::path::Path;

use tracing::{debug, info};

use crate::ast::types::{DeclarationKind, SyntaxTree};
use crate::ast::AstExtractor;
use crate::error::{LocatorError, Result};
use crate::lang::Language;

/// Shortest name in `names` that contains `keyword`.
///
/// Length counts characters, not bytes. On equal length the name seen first
/// wins. An empty keyword matches every name. `None` means nothing matched.
pub fn shortest_match<'a, I>(names: I, keyword: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    shortest_match_by(names, keyword, |name| *name)
}

/// [`shortest_match`] over arbitrary items, reading each item's name
/// through `name_of`. The winning item is returned whole.
pub fn shortest_match_by<T, I, F>(items: I, keyword: &str, name_of: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    items
        .into_iter()
        .filter(|item| name_of(item).contains(keyword))
        .fold(None, |best: Option<(T, usize)>, candidate| {
            let len = name_of(&candidate).chars().count();
            match best {
                Some((_, best_len)) if len >= best_len => best,
                _ => Some((candidate, len)),
            }
        })
        .map(|(item, _)| item)
}

/// A file's declared names together with the keyword to look for.
#[derive(Debug, Clone)]
pub struct KeywordLocator {
    extractor: AstExtractor,
    keyword: String,
}

/// Successful lookup: the matched name and what it declares.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct KeywordMatch {
    pub name: String,
    pub kind: DeclarationKind,
}

impl KeywordLocator {
    /// Read and parse the Python file at `path`.
    pub fn new(path: impl AsRef<Path>, keyword: impl Into<String>) -> Result<Self> {
        Ok(Self::from_extractor(AstExtractor::from_file(path)?, keyword))
    }

    /// Like [`KeywordLocator::new`] with an explicit language.
    pub fn with_language(
        path: impl AsRef<Path>,
        keyword: impl Into<String>,
        lang: &dyn Language,
    ) -> Result<Self> {
        Ok(Self::from_extractor(
            AstExtractor::from_file_with(path, lang)?,
            keyword,
        ))
    }

    /// Parse in-memory Python source. `file` labels parse errors.
    pub fn from_source(source: &str, file: &str, keyword: impl Into<String>) -> Result<Self> {
        Ok(Self::from_extractor(
            AstExtractor::from_source(source, file)?,
            keyword,
        ))
    }

    pub fn from_extractor(extractor: AstExtractor, keyword: impl Into<String>) -> Self {
        Self {
            extractor,
            keyword: keyword.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn tree(&self) -> &SyntaxTree {
        self.extractor.tree()
    }

    pub fn list_functions(&self) -> Vec<String> {
        self.extractor.list_functions()
    }

    pub fn list_methods(&self) -> Vec<String> {
        self.extractor.list_methods()
    }

    pub fn list_classes(&self) -> Vec<String> {
        self.extractor.list_classes()
    }

    pub fn list_all(&self) -> Vec<String> {
        self.extractor.list_all()
    }

    pub fn extractor(&self) -> &AstExtractor {
        &self.extractor
    }

    /// Shortest declared name containing the keyword.
    ///
    /// Fails with [`LocatorError::NotFound`] when no name contains it.
    pub fn find_keyword(&self) -> Result<String> {
        self.find_match().map(|found| found.name)
    }

    /// Same lookup as [`find_keyword`](Self::find_keyword), also reporting
    /// whether the name is a function, method or class.
    pub fn find_match(&self) -> Result<KeywordMatch> {
        let declarations = self.extractor.declarations();
        debug!(
            keyword = %self.keyword,
            candidates = declarations.len(),
            "searching declared names"
        );

        let (kind, name) = shortest_match_by(declarations, &self.keyword, |(_, name)| {
            name.as_str()
        })
        .ok_or_else(|| LocatorError::not_found(&self.keyword))?;

        info!(keyword = %self.keyword, name = %name, %kind, "keyword matched");
        Ok(KeywordMatch { name, kind })
    }
}
