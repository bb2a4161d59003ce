//! Parser and printer seams.
//!
//! Conversions never touch a concrete grammar: a [`Reader`] lowers source
//! text into [`crate::syntax`], a [`Writer`] prints it back.

use std::path::Path;

use crate::syntax::{SourceFile, Statement};

/// Error that can occur when reading source code into surface syntax.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to load {language} grammar: {message}")]
    Grammar {
        language: &'static str,
        message: String,
    },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Lowers source text into declarations.
pub trait Reader: Send + Sync {
    /// Language identifier (e.g., "typescript").
    fn language(&self) -> &'static str;

    /// File extensions this reader handles (e.g., &["ts", "mts"]).
    fn extensions(&self) -> &'static [&'static str];

    /// Parse source code into declarations.
    fn read(&self, source: &str) -> Result<SourceFile, ReadError>;

    /// Does `path` look like a file for this reader?
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }
}

/// Prints declarations as source code.
pub trait Writer: Send + Sync {
    fn language(&self) -> &'static str;

    /// File extension for output (e.g., "ts").
    fn extension(&self) -> &'static str;

    /// Print one statement with its leading doc comment, without a trailing newline.
    fn write(&self, statement: &Statement) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TYPESCRIPT_READER;
    use crate::output::TYPESCRIPT_WRITER;

    #[test]
    fn test_reader_accepts_extensions() {
        assert!(TYPESCRIPT_READER.accepts(Path::new("types/user.ts")));
        assert!(TYPESCRIPT_READER.accepts(Path::new("mod.mts")));
        assert!(!TYPESCRIPT_READER.accepts(Path::new("schema.json")));
        assert!(!TYPESCRIPT_READER.accepts(Path::new("README")));
    }

    #[test]
    fn test_read_then_write() {
        let file = TYPESCRIPT_READER
            .read("export type Id = string | number;")
            .unwrap();
        assert_eq!(TYPESCRIPT_WRITER.extension(), "ts");
        assert_eq!(
            TYPESCRIPT_WRITER.write(&file.statements[0]),
            "export type Id = string | number;"
        );
    }
}
