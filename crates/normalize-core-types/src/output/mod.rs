//! Output writers - emit surface syntax as source code.

pub mod typescript;

pub use typescript::{TYPESCRIPT_WRITER, TypeScriptWriter, TypeScriptWriterImpl, is_safe_name};
