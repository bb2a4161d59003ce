//! Conversion options for both directions.
//!
//! Both option structs deserialize from the `[to-ts]` / `[from-ts]` tables of
//! a configuration file (see [`crate::config`]); every field is optional.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ErrorMeta;

/// Callback receiving non-fatal diagnostics.
///
/// When no callback is configured, warnings go to `tracing::warn!`.
#[derive(Clone)]
pub struct WarnFn(Arc<dyn Fn(&str, &ErrorMeta) + Send + Sync>);

impl WarnFn {
    pub fn new(f: impl Fn(&str, &ErrorMeta) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, message: &str, meta: &ErrorMeta) {
        (self.0)(message, meta)
    }
}

impl fmt::Debug for WarnFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WarnFn(..)")
    }
}

/// Emit a warning through `warn`, or through tracing when unset.
pub(crate) fn emit_warning(warn: Option<&WarnFn>, message: &str, meta: &ErrorMeta) {
    match warn {
        Some(warn) => warn.call(message, meta),
        None => {
            let position = meta
                .range
                .map(|r| format!("{}:{}", r.start.line, r.start.column));
            tracing::warn!(
                position = position.as_deref().unwrap_or(""),
                snippet = meta.snippet.as_deref().unwrap_or(""),
                "{}",
                message
            );
        }
    }
}

/// What to do with a construct that cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum UnsupportedPolicy {
    /// Skip silently.
    #[default]
    Ignore,
    /// Skip and report through the warn callback.
    Warn,
    /// Fail the conversion.
    Error,
}

/// How type names are split into namespaces when writing TypeScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NamespaceSplit {
    /// Keep names as-is.
    #[default]
    Ignore,
    /// `A.B.C` becomes `namespace A { namespace B { C } }`.
    Dot,
    /// `A_B_C` becomes `namespace A { namespace B { C } }`.
    Underscore,
    /// Split on both `.` and `_`.
    All,
}

impl NamespaceSplit {
    /// Split `name` into its namespace path and local name.
    pub fn split<'a>(&self, name: &'a str) -> (Vec<&'a str>, &'a str) {
        let is_separator = |c: char| match self {
            NamespaceSplit::Ignore => false,
            NamespaceSplit::Dot => c == '.',
            NamespaceSplit::Underscore => c == '_',
            NamespaceSplit::All => c == '.' || c == '_',
        };
        let mut parts: Vec<&str> = name.split(is_separator).filter(|p| !p.is_empty()).collect();
        match parts.pop() {
            Some(local) => (parts, local),
            None => (Vec::new(), name),
        }
    }
}

/// Options for IR -> TypeScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToTsOptions {
    /// Name of the file the output is written to.
    pub filename: Option<String>,
    /// Name of the file the input was read from.
    pub source_filename: Option<String>,
    /// Write `unknown` instead of `any`.
    pub use_unknown: bool,
    /// Write a declaration file (`export declare ...`).
    pub declaration: bool,
    /// Package performing the conversion through this crate.
    pub user_package: Option<String>,
    pub user_package_url: Option<String>,
    /// Don't write the lint-disable comments.
    pub no_disable_lint_header: bool,
    /// Don't write the "generated by" comment.
    pub no_descriptive_header: bool,
    pub namespaces: NamespaceSplit,
    /// No effect when encoding: unknown node types always fail.
    pub unsupported: UnsupportedPolicy,
    /// No effect when encoding: nothing is reported as a warning.
    #[serde(skip)]
    pub warn: Option<WarnFn>,
}

impl Default for ToTsOptions {
    fn default() -> Self {
        Self {
            filename: None,
            source_filename: None,
            use_unknown: false,
            declaration: false,
            user_package: None,
            user_package_url: None,
            no_disable_lint_header: false,
            no_descriptive_header: false,
            namespaces: NamespaceSplit::Ignore,
            unsupported: UnsupportedPolicy::Warn,
            warn: None,
        }
    }
}

/// How namespaced declarations are named when reading TypeScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NamespacePolicy {
    /// Only read top-level declarations.
    #[default]
    Ignore,
    /// Read nested declarations under their local name. On conflict the
    /// shallower declaration wins; on equal depth the first declared wins.
    Hoist,
    /// `namespace A { type B }` becomes `A.B`.
    JoinDot,
    /// `namespace A { type B }` becomes `A_B`.
    JoinUnderscore,
}

impl NamespacePolicy {
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            NamespacePolicy::JoinDot => Some("."),
            NamespacePolicy::JoinUnderscore => Some("_"),
            NamespacePolicy::Ignore | NamespacePolicy::Hoist => None,
        }
    }
}

/// What to do with declarations lacking an `export` modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NonExportedPolicy {
    /// Fail the conversion.
    Fail,
    /// Leave them out; references stay plain refs.
    Ignore,
    /// Convert them like exported declarations.
    Include,
    /// Expand references to them in place. Cycles fail.
    Inline,
    /// Append them to the output when the output references them.
    #[default]
    IncludeIfReferenced,
}

/// Options for TypeScript -> IR.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FromTsOptions {
    pub namespaces: NamespacePolicy,
    pub non_exported: NonExportedPolicy,
    pub unsupported: UnsupportedPolicy,
    #[serde(skip)]
    pub warn: Option<WarnFn>,
}
