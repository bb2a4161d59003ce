//! Conversion between core-types and TypeScript type declarations.
//!
//! `normalize-core-types` converts a language-agnostic type schema (the
//! core-types IR: primitives, objects, arrays, tuples, unions, intersections,
//! references and literal constants, plus documentation) to TypeScript
//! `type`/`interface` declarations, and reads such declarations back.
//!
//! # Architecture
//!
//! ```text
//!                 encode            Writer
//! Document ────────────────> syntax ───────> TypeScript text
//!  (ir.rs)  <────────────────  (syntax.rs) <─────── TypeScript text
//!            decode + collect           Reader
//! ```
//!
//! Both directions go through [`syntax`], a closed model of the declaration
//! subset of TypeScript. The tree-sitter grammar is only seen by the reader.
//!
//! # Example
//!
//! ```ignore
//! use normalize_core_types::{convert_typescript_to_core_types, FromTsOptions};
//!
//! let result = convert_typescript_to_core_types(
//!     "export interface User { name: string; age?: number }",
//!     &FromTsOptions::default(),
//! )?;
//! assert_eq!(result.converted_types, vec!["User"]);
//! ```
//!
//! # Round trips
//!
//! Decoding encoded output reproduces the document up to titles (which are
//! re-inferred from position) and source locations; compare with
//! [`StructureEq`].

pub mod annotations;
pub mod config;
pub mod error;
pub mod input;
pub mod ir;
pub mod options;
pub mod output;
pub mod syntax;
pub mod traits;

mod collect;
mod decode;
mod emit;
mod encode;

use serde::Serialize;

// Re-exports: IR types
pub use ir::{
    Additional, Annotations, DOCUMENT_VERSION, Document, Location, NamedType, Node, NodeKind,
    OneOrMany, Property, StructureEq,
};

// Re-exports: options and errors
pub use config::{ConfigError, CoreTypesConfig};
pub use error::{Error, ErrorMeta, MalformedError, UnsupportedError};
pub use options::{
    FromTsOptions, NamespacePolicy, NamespaceSplit, NonExportedPolicy, ToTsOptions,
    UnsupportedPolicy, WarnFn,
};

// Re-exports: traits and built-in reader/writer
pub use encode::convert_single_core_type;
pub use input::{TYPESCRIPT_READER, read_typescript};
pub use output::{TYPESCRIPT_WRITER, TypeScriptWriter};
pub use traits::{ReadError, Reader, Writer};

/// Output of a conversion in either direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult<T> {
    pub data: T,
    /// Names of the types present in `data`.
    pub converted_types: Vec<String>,
    /// Names of top-level types that were skipped.
    pub not_converted_types: Vec<String>,
}

/// Convert a core-types document to TypeScript source.
#[tracing::instrument(level = "debug", skip_all)]
pub fn convert_core_types_to_typescript(
    document: &Document,
    options: &ToTsOptions,
) -> Result<ConversionResult<String>, Error> {
    emit::emit_document(document, options, &TYPESCRIPT_WRITER)
}

/// [`convert_core_types_to_typescript`] with a custom printer.
pub fn convert_core_types_with_writer(
    document: &Document,
    options: &ToTsOptions,
    writer: &dyn Writer,
) -> Result<ConversionResult<String>, Error> {
    emit::emit_document(document, options, writer)
}

/// Convert TypeScript source to a core-types document.
#[tracing::instrument(level = "debug", skip_all)]
pub fn convert_typescript_to_core_types(
    source: &str,
    options: &FromTsOptions,
) -> Result<ConversionResult<Document>, Error> {
    convert_with_reader(source, options, &TYPESCRIPT_READER)
}

/// [`convert_typescript_to_core_types`] with a custom parser.
pub fn convert_with_reader(
    source: &str,
    options: &FromTsOptions,
    reader: &dyn Reader,
) -> Result<ConversionResult<Document>, Error> {
    let file = reader.read(source)?;
    collect::convert_source_file(&file, source, options)
}
