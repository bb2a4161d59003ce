//! Conversion errors.
//!
//! Two structured kinds: [`UnsupportedError`] for constructs that are
//! recognized but not translatable, and [`MalformedError`] for input that
//! cannot satisfy the requested options at all. Both carry an [`ErrorMeta`]
//! pointing at the offending source.

use crate::config::ConfigError;
use crate::ir::{Location, SourceRange};
use crate::traits::ReadError;

/// Where an error or warning originated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorMeta {
    /// Byte-offset range in the source text.
    pub loc: Option<Location>,
    /// `loc` resolved to 1-based lines and columns.
    pub range: Option<SourceRange>,
    /// The offending source text.
    pub snippet: Option<String>,
    /// Declaration name path (e.g. `["Foo", "bar"]`).
    pub path: Vec<String>,
}

impl ErrorMeta {
    /// Metadata for a location inside `source`, resolving line/column and snippet.
    pub fn at(source: &str, loc: Location) -> Self {
        Self {
            loc: Some(loc),
            range: Some(loc.resolve(source)),
            snippet: loc.snippet(source).map(str::to_string),
            path: Vec::new(),
        }
    }

    /// Metadata carrying only the IR node location (encode direction has no source text).
    pub fn from_loc(loc: Option<Location>) -> Self {
        Self {
            loc,
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }

    /// `line:column` of the start, when known.
    fn position(&self) -> String {
        match (&self.range, &self.loc) {
            (Some(range), _) => format!(" at {}:{}", range.start.line, range.start.column),
            (None, Some(loc)) => format!(" at offset {}", loc.start),
            (None, None) => String::new(),
        }
    }
}

/// A construct that is intentionally not translatable.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}{}", .meta.position())]
pub struct UnsupportedError {
    pub message: String,
    pub meta: ErrorMeta,
}

impl UnsupportedError {
    pub fn new(message: impl Into<String>, meta: ErrorMeta) -> Self {
        Self {
            message: message.into(),
            meta,
        }
    }
}

/// Input that is structurally invalid for the requested options.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}{}", .meta.position())]
pub struct MalformedError {
    pub message: String,
    pub meta: ErrorMeta,
}

impl MalformedError {
    pub fn new(message: impl Into<String>, meta: ErrorMeta) -> Self {
        Self {
            message: message.into(),
            meta,
        }
    }
}

/// Any error a conversion can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported: {0}")]
    Unsupported(#[from] UnsupportedError),

    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn unsupported(message: impl Into<String>, meta: ErrorMeta) -> Self {
        Error::Unsupported(UnsupportedError::new(message, meta))
    }

    pub fn malformed(message: impl Into<String>, meta: ErrorMeta) -> Self {
        Error::Malformed(MalformedError::new(message, meta))
    }

    /// Metadata of a structured error.
    pub fn meta(&self) -> Option<&ErrorMeta> {
        match self {
            Error::Unsupported(e) => Some(&e.meta),
            Error::Malformed(e) => Some(&e.meta),
            Error::Read(_) | Error::Config(_) => None,
        }
    }
}
