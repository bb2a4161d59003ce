//! Input readers - parse source code into surface syntax.

pub mod typescript;

pub use typescript::{TYPESCRIPT_READER, TypeScriptReader, read_typescript};
