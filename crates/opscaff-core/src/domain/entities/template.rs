//! Template units and the path/content resolver.
//!
//! A template unit is anything that can answer three questions against a
//! [`Universe`]: where does my file go, what bytes does it contain, and what
//! happens if a file is already there. The executor only ever sees the
//! [`Template`] trait, so catalogs are free to mix declarative
//! [`FileTemplate`]s with hand-written kinds.
//!
//! ```text
//! ┌──────────────┐   resolve(unit, universe)   ┌──────────────┐
//! │ dyn Template │ ──────────────────────────▶ │ RenderedFile │
//! │  path()      │   {{VAR}} substitution      │  path        │
//! │  content     │   (strict: unknown var      │  content     │
//! │  policy()    │    is an error)             │  policy      │
//! └──────────────┘                             └──────────────┘
//! ```
//!
//! ## Placeholder Syntax
//!
//! `{{NAME}}` where `NAME` is `[A-Z][A-Z0-9_]*`, optionally padded with
//! spaces. Anything else between double braces is copied through untouched;
//! there are no conditionals, loops or filters.
//!
//! ## Edge Cases
//!
//! - `{{UNKNOWN}}` → error naming `UNKNOWN`
//! - `{{REPO}}{{REPO}}` → both replaced
//! - `{{{REPO}}}` → outer braces preserved, inner replaced
//! - substituted values are never rescanned, so a boilerplate containing
//!   `{{` cannot inject further placeholders

use std::fmt;

use crate::domain::{
    entities::{common::RelativePath, universe::Universe},
    error::DomainError,
    value_objects::ExistencePolicy,
};

/// Capability set every template unit provides.
///
/// Implementors normally supply [`Template::path`], [`Template::policy`] and
/// [`Template::resolve_content`]; path resolution has a default that
/// substitutes the declared path against the universe.
pub trait Template: fmt::Debug + Send + Sync {
    /// Declared path, possibly containing placeholders.
    ///
    /// This is what error reports show when the unit fails.
    fn path(&self) -> &str;

    /// Behaviour when the target file already exists.
    fn policy(&self) -> ExistencePolicy;

    /// Resolve the output path relative to the project root.
    fn resolve_path(&self, universe: &Universe) -> Result<RelativePath, DomainError> {
        let raw = substitute(self.path(), universe).map_err(|variable| {
            DomainError::PathResolution {
                path: self.path().to_string(),
                variable,
            }
        })?;
        RelativePath::parse(&raw)
    }

    /// Produce the file body.
    fn resolve_content(&self, universe: &Universe) -> Result<Vec<u8>, DomainError>;
}

/// Output of resolving one unit. Not retained after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: RelativePath,
    pub content: Vec<u8>,
    pub policy: ExistencePolicy,
}

/// Resolve a unit against a universe.
///
/// Pure: the same `(unit, universe)` always yields the same file.
pub fn resolve(unit: &dyn Template, universe: &Universe) -> Result<RenderedFile, DomainError> {
    let path = unit.resolve_path(universe)?;
    let content = unit.resolve_content(universe)?;
    Ok(RenderedFile {
        path,
        content,
        policy: unit.policy(),
    })
}

/// Replace every `{{NAME}}` in `template` with its universe value.
///
/// Returns the name of the first undefined variable on failure.
pub fn substitute(template: &str, universe: &Universe) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) if is_placeholder_name(after[..end].trim()) => {
                let name = after[..end].trim();
                let value = universe.get(name).ok_or_else(|| name.to_string())?;
                out.push_str(value);
                rest = &after[end + 2..];
            }
            _ => {
                // Not a placeholder; emit one brace and rescan from the next
                // character so `{{{NAME}}}` still finds the inner `{{NAME}}`.
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

// ============================================================================
// Declarative File Template
// ============================================================================

/// The common template kind: a declared path, a body, and a policy.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    path: TemplateSource,
    content: TemplateContent,
    policy: ExistencePolicy,
}

impl FileTemplate {
    pub fn new(path: impl Into<TemplateSource>, content: TemplateContent) -> Self {
        Self {
            path: path.into(),
            content,
            policy: ExistencePolicy::Overwrite,
        }
    }

    /// Body with `{{VARIABLE}}` placeholders.
    pub fn parameterized(path: impl Into<TemplateSource>, body: impl Into<TemplateSource>) -> Self {
        Self::new(path, TemplateContent::Parameterized(body.into()))
    }

    /// Body copied verbatim.
    pub fn literal(path: impl Into<TemplateSource>, body: impl Into<TemplateSource>) -> Self {
        Self::new(path, TemplateContent::Literal(body.into()))
    }

    /// Already-rendered bytes supplied by the caller.
    pub fn raw(path: impl Into<TemplateSource>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(path, TemplateContent::Raw(bytes.into()))
    }

    pub fn with_policy(mut self, policy: ExistencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn skip_if_exists(self) -> Self {
        self.with_policy(ExistencePolicy::SkipIfExists)
    }

    pub fn error_if_exists(self) -> Self {
        self.with_policy(ExistencePolicy::ErrorIfExists)
    }

    /// Box for inclusion in a heterogeneous batch.
    pub fn boxed(self) -> Box<dyn Template> {
        Box::new(self)
    }
}

impl Template for FileTemplate {
    fn path(&self) -> &str {
        self.path.as_str()
    }

    fn policy(&self) -> ExistencePolicy {
        self.policy
    }

    fn resolve_content(&self, universe: &Universe) -> Result<Vec<u8>, DomainError> {
        self.content.render(self.path(), universe)
    }
}

// ============================================================================
// Content Types
// ============================================================================

/// Body of a file, literal or parameterized.
#[derive(Debug, Clone)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(TemplateSource),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(TemplateSource),

    /// Externally supplied bytes, passed through unchanged.
    Raw(Vec<u8>),
}

impl TemplateContent {
    /// Render to bytes. `declared_path` only feeds the error report.
    pub fn render(&self, declared_path: &str, universe: &Universe) -> Result<Vec<u8>, DomainError> {
        match self {
            Self::Literal(source) => Ok(source.as_str().as_bytes().to_vec()),
            Self::Parameterized(source) => substitute(source.as_str(), universe)
                .map(String::into_bytes)
                .map_err(|variable| DomainError::ContentResolution {
                    path: declared_path.to_string(),
                    variable,
                }),
            Self::Raw(bytes) => Ok(bytes.clone()),
        }
    }
}

/// Source of template text: either compile-time or runtime.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g. a catalog constant)
    Static(&'static str),

    /// Runtime-owned string (heap-allocated)
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}
