//! Declaration collector and reference policy.
//!
//! Gathers the interfaces and type aliases of a source file into a flat,
//! ordered table (applying the namespace policy), decides which of them
//! become output types, and resolves references to non-exported
//! declarations according to the non-exported policy.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::ConversionResult;
use crate::decode::DecodeContext;
use crate::error::{Error, ErrorMeta};
use crate::ir::{Document, NamedType, Node};
use crate::options::{FromTsOptions, NamespacePolicy, NonExportedPolicy};
use crate::syntax::*;

/// The declaration behind a table entry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DeclKind<'a> {
    Interface(&'a InterfaceDecl),
    TypeAlias(&'a TypeAliasDecl),
}

/// A type declaration under its flattened name.
#[derive(Debug, Clone)]
pub(crate) struct Declaration<'a> {
    pub name: String,
    /// Enclosing namespaces, outermost first.
    pub namespace: Vec<String>,
    pub exported: bool,
    pub kind: DeclKind<'a>,
}

impl Declaration<'_> {
    pub fn span(&self) -> Option<Span> {
        match self.kind {
            DeclKind::Interface(d) => d.span,
            DeclKind::TypeAlias(d) => d.span,
        }
    }

    pub fn doc(&self) -> Option<&str> {
        match self.kind {
            DeclKind::Interface(d) => d.doc.as_deref(),
            DeclKind::TypeAlias(d) => d.doc.as_deref(),
        }
    }

    pub fn type_params(&self) -> &[String] {
        match self.kind {
            DeclKind::Interface(d) => &d.type_params,
            DeclKind::TypeAlias(d) => &d.type_params,
        }
    }

    fn local_name(&self) -> &str {
        match self.kind {
            DeclKind::Interface(d) => &d.name,
            DeclKind::TypeAlias(d) => &d.name,
        }
    }

    /// `A.B.Name`, regardless of policy.
    fn dotted_name(&self) -> String {
        let mut parts = self.namespace.clone();
        parts.push(self.local_name().to_string());
        parts.join(".")
    }
}

/// All declarations of a source file, in declaration order.
pub(crate) struct DeclarationTable<'a> {
    declarations: IndexMap<String, Declaration<'a>>,
    policy: NamespacePolicy,
}

impl<'a> DeclarationTable<'a> {
    /// Collect declarations. Also returns the dotted names of declarations
    /// that lost a hoisting conflict.
    pub fn collect(file: &'a SourceFile, policy: NamespacePolicy) -> (Self, Vec<String>) {
        let mut table = Self {
            declarations: IndexMap::new(),
            policy,
        };
        let mut hoisted_away = Vec::new();
        table.visit(&file.statements, &mut Vec::new(), &mut hoisted_away);
        (table, hoisted_away)
    }

    fn visit(
        &mut self,
        statements: &'a [Statement],
        namespace: &mut Vec<String>,
        hoisted_away: &mut Vec<String>,
    ) {
        for statement in statements {
            let (kind, exported) = match statement {
                Statement::Interface(d) => (DeclKind::Interface(d), d.exported),
                Statement::TypeAlias(d) => (DeclKind::TypeAlias(d), d.exported),
                Statement::Namespace(ns) => {
                    if self.policy != NamespacePolicy::Ignore {
                        let depth = namespace.len();
                        namespace.extend(ns.path.iter().cloned());
                        self.visit(&ns.body, namespace, hoisted_away);
                        namespace.truncate(depth);
                    }
                    continue;
                }
            };

            let mut declaration = Declaration {
                name: String::new(),
                namespace: namespace.clone(),
                exported,
                kind,
            };
            declaration.name = match self.policy.separator() {
                Some(separator) => {
                    let mut parts = namespace.clone();
                    parts.push(declaration.local_name().to_string());
                    parts.join(separator)
                }
                None => declaration.local_name().to_string(),
            };

            self.insert(declaration, hoisted_away);
        }
    }

    fn insert(&mut self, declaration: Declaration<'a>, hoisted_away: &mut Vec<String>) {
        let Some(existing) = self.declarations.get_mut(&declaration.name) else {
            self.declarations
                .insert(declaration.name.clone(), declaration);
            return;
        };

        if self.policy == NamespacePolicy::Hoist {
            // Shallower wins; on equal depth the first declared stays.
            let (winner, loser) = if declaration.namespace.len() < existing.namespace.len() {
                let loser = std::mem::replace(existing, declaration);
                (existing.dotted_name(), loser.dotted_name())
            } else {
                (existing.dotted_name(), declaration.dotted_name())
            };
            tracing::debug!(%winner, %loser, "hoisting conflict");
            hoisted_away.push(loser);
        } else {
            tracing::debug!(name = %declaration.name, "duplicate declaration, keeping the first");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Declaration<'a>> {
        self.declarations.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration<'a>> {
        self.declarations.values()
    }

    /// Look up a reference written inside namespace `scope`.
    ///
    /// With joined names the innermost enclosing namespace is tried first.
    pub fn resolve(&self, name: &str, scope: &[String]) -> Option<&Declaration<'a>> {
        let Some(separator) = self.policy.separator() else {
            return self.get(name);
        };
        (0..=scope.len()).rev().find_map(|depth| {
            let mut parts: Vec<&str> = scope[..depth].iter().map(String::as_str).collect();
            parts.push(name);
            self.get(&parts.join(separator))
        })
    }
}

/// Outcome of resolving a type reference.
pub(crate) enum Resolved {
    /// Emit a `ref` to this (flattened) name.
    Ref(String),
    /// The target was expanded in place; `None` if it could not be converted.
    Inlined(Option<Node>),
}

impl DecodeContext<'_> {
    /// Apply the non-exported policy to a reference.
    pub(crate) fn resolve_reference(
        &mut self,
        name: &str,
        span: Option<Span>,
    ) -> Result<Resolved, Error> {
        let table = self.table;
        let Some(declaration) = table.resolve(name, &self.scope) else {
            return Ok(Resolved::Ref(name.to_string()));
        };
        let target = declaration.name.clone();

        if declaration.exported {
            return Ok(Resolved::Ref(target));
        }

        match self.options.non_exported {
            NonExportedPolicy::IncludeIfReferenced => {
                self.extras.insert(target.clone());
                Ok(Resolved::Ref(target))
            }
            NonExportedPolicy::Inline => {
                self.enter(&target, "inline", span)?;
                let saved = self.enter_scope(&declaration.namespace);
                let result = self.decode_declaration(declaration);
                self.scope = saved;
                self.leave();
                Ok(Resolved::Inlined(result?))
            }
            NonExportedPolicy::Fail | NonExportedPolicy::Ignore | NonExportedPolicy::Include => {
                Ok(Resolved::Ref(target))
            }
        }
    }
}

/// Convert a parsed source file into a core-types document.
pub(crate) fn convert_source_file(
    file: &SourceFile,
    source: &str,
    options: &FromTsOptions,
) -> Result<ConversionResult<Document>, Error> {
    let (table, mut not_converted) = DeclarationTable::collect(file, options.namespaces);

    if options.non_exported == NonExportedPolicy::Fail {
        if let Some(declaration) = table.iter().find(|d| !d.exported) {
            let meta = match declaration.span() {
                Some(span) => ErrorMeta::at(source, span),
                None => ErrorMeta::default(),
            };
            return Err(Error::malformed(
                "Found non-exported type when 'nonExported' is 'fail'",
                meta.with_path(vec![declaration.name.clone()]),
            ));
        }
    }

    let mut ctx = DecodeContext::new(source, options, &table);
    let mut types: Vec<NamedType> = Vec::new();

    let selected = table
        .iter()
        .filter(|d| options.non_exported == NonExportedPolicy::Include || d.exported);
    for declaration in selected {
        match ctx.decode_top_level(declaration)? {
            Some(node) => types.push(NamedType::new(declaration.name.clone(), node)),
            None => not_converted.push(declaration.name.clone()),
        }
    }

    // Referenced non-exported declarations, until nothing new is referenced.
    let mut done: HashSet<String> = types.iter().map(|t| t.name.clone()).collect();
    loop {
        let pending: Vec<String> = ctx
            .extras
            .iter()
            .filter(|name| !done.contains(*name))
            .filter(|name| types.iter().any(|t| t.node.references(name)))
            .cloned()
            .collect();
        if pending.is_empty() {
            break;
        }
        for name in pending {
            done.insert(name.clone());
            let Some(declaration) = table.get(&name) else {
                continue;
            };
            match ctx.decode_top_level(declaration)? {
                Some(node) => types.push(NamedType::new(name, node)),
                None => not_converted.push(name),
            }
        }
    }

    tracing::debug!(
        converted = types.len(),
        not_converted = not_converted.len(),
        "decoded typescript"
    );

    Ok(ConversionResult {
        converted_types: types.iter().map(|t| t.name.clone()).collect(),
        not_converted_types: not_converted,
        data: Document::new(types),
    })
}
