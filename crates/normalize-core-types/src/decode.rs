//! Node decoder: TypeScript syntax to IR nodes.
//!
//! Every decode returns `Ok(None)` for a construct the unsupported policy says
//! to skip; errors are reserved for the `error` policy and for input that
//! cannot be converted under any policy (cycles).

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::annotations::{self, Ancestor};
use crate::collect::{DeclKind, Declaration, DeclarationTable, Resolved};
use crate::error::{Error, ErrorMeta};
use crate::ir::{Additional, Node, NodeKind, Property};
use crate::options::{FromTsOptions, UnsupportedPolicy, emit_warning};
use crate::syntax::*;

/// Object properties and additional properties of a decoded object.
type Members = (IndexMap<String, Property>, Additional);

/// Type-level utilities evaluated during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Pick,
    Omit,
    Partial,
}

impl Operator {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Pick" => Some(Operator::Pick),
            "Omit" => Some(Operator::Omit),
            "Partial" => Some(Operator::Partial),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Operator::Pick => "Pick",
            Operator::Omit => "Omit",
            Operator::Partial => "Partial",
        }
    }

    fn arity(&self) -> usize {
        match self {
            Operator::Partial => 1,
            Operator::Pick | Operator::Omit => 2,
        }
    }
}

/// Call-scoped state of one TypeScript -> IR conversion.
pub(crate) struct DecodeContext<'a> {
    source: &'a str,
    pub(crate) options: &'a FromTsOptions,
    pub(crate) table: &'a DeclarationTable<'a>,
    /// Declarations currently being inlined or expanded, innermost last.
    /// Cleared for every top-level declaration.
    cyclic: Vec<String>,
    /// Non-exported declarations referenced so far.
    pub(crate) extras: IndexSet<String>,
    /// Namespace path references are resolved from.
    pub(crate) scope: Vec<String>,
    /// Top-level declaration being converted, for diagnostics.
    path: Vec<String>,
}

impl<'a> DecodeContext<'a> {
    pub fn new(source: &'a str, options: &'a FromTsOptions, table: &'a DeclarationTable<'a>) -> Self {
        Self {
            source,
            options,
            table,
            cyclic: Vec::new(),
            extras: IndexSet::new(),
            scope: Vec::new(),
            path: Vec::new(),
        }
    }

    fn meta(&self, span: Option<Span>) -> ErrorMeta {
        let meta = match span {
            Some(span) => ErrorMeta::at(self.source, span),
            None => ErrorMeta::default(),
        };
        meta.with_path(self.path.clone())
    }

    /// Route an unsupported construct through the policy.
    fn unsupported(
        &self,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Result<Option<Node>, Error> {
        let message = message.into();
        match self.options.unsupported {
            UnsupportedPolicy::Ignore => Ok(None),
            UnsupportedPolicy::Warn => {
                emit_warning(self.options.warn.as_ref(), &message, &self.meta(span));
                Ok(None)
            }
            UnsupportedPolicy::Error => Err(Error::unsupported(message, self.meta(span))),
        }
    }

    /// Mark `name` as being expanded. Fails if it already is.
    pub(crate) fn enter(&mut self, name: &str, action: &str, span: Option<Span>) -> Result<(), Error> {
        if self.cyclic.iter().any(|n| n == name) {
            return Err(Error::malformed(
                format!("Cyclic type found when trying to {} type {}", action, name),
                self.meta(span),
            ));
        }
        self.cyclic.push(name.to_string());
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.cyclic.pop();
    }

    /// Switch to `namespace`, returning the previous scope.
    pub(crate) fn enter_scope(&mut self, namespace: &[String]) -> Vec<String> {
        std::mem::replace(&mut self.scope, namespace.to_vec())
    }

    /// Decode a declaration selected for output.
    pub fn decode_top_level(&mut self, declaration: &Declaration<'_>) -> Result<Option<Node>, Error> {
        self.cyclic.clear();
        self.scope = declaration.namespace.clone();
        self.path = vec![declaration.name.clone()];
        self.decode_declaration(declaration)
    }

    /// Decode an interface or type alias, with its own annotations on top.
    pub(crate) fn decode_declaration(
        &mut self,
        declaration: &Declaration<'_>,
    ) -> Result<Option<Node>, Error> {
        if !declaration.type_params().is_empty() {
            return self.unsupported("Generic types are not supported", declaration.span());
        }

        let mut chain = vec![Ancestor::Declaration(declaration.name.clone())];
        let annotations = annotations::decorate(declaration.doc(), &chain);

        let mut node = match declaration.kind {
            DeclKind::TypeAlias(alias) => self
                .decode_type(&alias.value, &mut chain)?
                .unwrap_or_else(Node::any),
            DeclKind::Interface(interface) => {
                let mut and = Vec::with_capacity(interface.heritage.len() + 1);
                chain.push(Ancestor::Other);
                for parent in &interface.heritage {
                    if let Some(node) = self.decode_type(parent, &mut chain)? {
                        and.push(node);
                    }
                }
                chain.pop();

                let (properties, additional) = self.decode_members(&interface.members, &mut chain)?;
                let own = Node::object(properties, additional);
                if and.is_empty() {
                    own
                } else {
                    and.push(own);
                    Node::and(and)
                }
            }
        };

        node.annotations.layer(annotations);
        Ok(Some(node))
    }

    /// Decode a type expression. `chain` holds the ancestors of `ty`.
    pub fn decode_type(
        &mut self,
        ty: &TypeExpr,
        chain: &mut Vec<Ancestor>,
    ) -> Result<Option<Node>, Error> {
        chain.push(frame(&ty.kind));
        let result = self.decode_framed(ty, chain);
        chain.pop();
        result
    }

    fn decode_framed(
        &mut self,
        ty: &TypeExpr,
        chain: &mut Vec<Ancestor>,
    ) -> Result<Option<Node>, Error> {
        let annotations = annotations::decorate(ty.doc.as_deref(), chain);

        let node = match &ty.kind {
            TypeKind::Union(members) => Some(Node::or(self.decode_all(members, chain)?)),
            TypeKind::Intersection(members) => Some(Node::and(self.decode_all(members, chain)?)),
            TypeKind::Parenthesized(inner) => self.decode_type(inner, chain)?,
            TypeKind::Keyword(keyword) => match keyword {
                Keyword::Any | Keyword::Unknown => Some(Node::any()),
                Keyword::String => Some(Node::string()),
                Keyword::Number => Some(Node::number()),
                Keyword::Boolean => Some(Node::boolean()),
                Keyword::Object => Some(Node::object(IndexMap::new(), Additional::Bool(true))),
                other => {
                    return self.unsupported(
                        format!("Unimplemented type ({})", other.as_str()),
                        ty.span,
                    );
                }
            },
            TypeKind::Array(element) => Some(Node::array(
                self.decode_type(element, chain)?.unwrap_or_else(Node::any),
            )),
            TypeKind::Reference {
                name,
                qualified,
                args,
            } => {
                if *qualified {
                    return self.unsupported("Qualified reference names not supported", ty.span);
                }
                if name == "Array" && args.len() <= 1 {
                    let element = match args.first() {
                        Some(arg) => self.decode_type(arg, chain)?.unwrap_or_else(Node::any),
                        None => Node::any(),
                    };
                    Some(Node::array(element))
                } else if let Some(operator) = Operator::from_name(name) {
                    self.decode_operator(operator, args, ty.span, chain)?
                } else if !args.is_empty() {
                    return self.unsupported("Generic types are not supported", ty.span);
                } else {
                    match self.resolve_reference(name, ty.span)? {
                        Resolved::Ref(target) => Some(Node::reference(target)),
                        // Inlined declarations carry their own annotations.
                        Resolved::Inlined(node) => return Ok(node),
                    }
                }
            }
            TypeKind::Tuple(elements) => self.decode_tuple(elements, chain)?,
            TypeKind::Literal(literal) => match literal {
                Literal::Number(n) => Some(Node::number().with_const(Value::Number(n.clone()))),
                Literal::String(s) => Some(Node::string().with_const(s.clone())),
                Literal::Boolean(b) => Some(Node::boolean().with_const(*b)),
                Literal::Null => Some(Node::null()),
                Literal::Other(_) => {
                    return self.unsupported("Literal type not understood", ty.span);
                }
            },
            TypeKind::Object(members) => {
                let (properties, additional) = self.decode_members(members, chain)?;
                Some(Node::object(properties, additional))
            }
            TypeKind::Unsupported(kind) => {
                return self.unsupported(format!("Unimplemented type ({})", kind), ty.span);
            }
        };

        Ok(node.map(|mut node| {
            node.annotations.layer(annotations);
            node
        }))
    }

    /// Decode union/intersection members, dropping skipped ones.
    fn decode_all(
        &mut self,
        members: &[TypeExpr],
        chain: &mut Vec<Ancestor>,
    ) -> Result<Vec<Node>, Error> {
        let mut nodes = Vec::with_capacity(members.len());
        for member in members {
            if let Some(node) = self.decode_type(member, chain)? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    fn decode_tuple(
        &mut self,
        elements: &[TupleElement],
        chain: &mut Vec<Ancestor>,
    ) -> Result<Option<Node>, Error> {
        let mut element_types = Vec::with_capacity(elements.len());
        let mut additional = Additional::Bool(false);
        let mut first_optional = None;

        for (i, element) in elements.iter().enumerate() {
            if let Some(Ancestor::Tuple(position)) = chain.last_mut() {
                *position = Some(i);
            }

            match element.kind {
                TupleElementKind::Rest => {
                    if i + 1 != elements.len() {
                        self.unsupported(
                            "Rest elements are only supported at the end of a tuple",
                            element.ty.span,
                        )?;
                        continue;
                    }
                    chain.push(Ancestor::Rest);
                    let decoded = self.decode_type(&element.ty, chain);
                    chain.pop();
                    let rest = match decoded? {
                        Some(Node {
                            kind: NodeKind::Array { element_type },
                            ..
                        }) => Some(*element_type),
                        Some(_) => self.unsupported(
                            "Rest elements must be array types",
                            element.ty.span,
                        )?,
                        None => None,
                    };
                    additional = match rest {
                        Some(node) if !matches!(node.kind, NodeKind::Any) => {
                            Additional::Node(Box::new(node))
                        }
                        _ => Additional::Bool(true),
                    };
                }
                TupleElementKind::Optional => {
                    first_optional.get_or_insert(element_types.len());
                    chain.push(Ancestor::Optional);
                    let decoded = self.decode_type(&element.ty, chain);
                    chain.pop();
                    element_types.push(decoded?.unwrap_or_else(Node::any));
                }
                TupleElementKind::Required => {
                    element_types.push(self.decode_type(&element.ty, chain)?.unwrap_or_else(Node::any));
                }
            }
        }

        let min_items = first_optional.unwrap_or(element_types.len());
        Ok(Some(Node::tuple(element_types, additional, min_items)))
    }

    /// Properties and index signature of an interface body or object literal.
    pub(crate) fn decode_members(
        &mut self,
        members: &[Member],
        chain: &mut Vec<Ancestor>,
    ) -> Result<Members, Error> {
        let mut properties = IndexMap::new();
        let mut additional = Additional::Bool(false);

        for member in members {
            match member {
                Member::Property(property) => {
                    let Some(ty) = &property.ty else {
                        continue;
                    };
                    chain.push(Ancestor::Property(property.name.clone()));
                    let decoded = self.decode_type(ty, chain);
                    let annotations = annotations::decorate(property.doc.as_deref(), chain);
                    chain.pop();

                    let mut node = decoded?.unwrap_or_else(Node::any);
                    node.annotations.layer(annotations);
                    properties.insert(
                        property.name.clone(),
                        Property {
                            node,
                            required: !property.optional,
                        },
                    );
                }
                Member::Index(index) => {
                    if !matches!(index.key.kind, TypeKind::Keyword(Keyword::String)) {
                        emit_warning(
                            self.options.warn.as_ref(),
                            "Will not convert non-string index signature",
                            &self.meta(index.key.span.or(index.span)),
                        );
                        continue;
                    }
                    chain.push(Ancestor::Other);
                    let decoded = self.decode_type(&index.value, chain);
                    chain.pop();
                    // A value that failed to convert still admits some properties.
                    additional = Additional::Node(Box::new(decoded?.unwrap_or_else(Node::any)));
                }
                Member::Other(_) => {}
            }
        }

        Ok((properties, additional))
    }

    /// Evaluate `Pick<T, K>`, `Omit<T, K>` or `Partial<T>` to a plain object.
    fn decode_operator(
        &mut self,
        operator: Operator,
        args: &[TypeExpr],
        span: Option<Span>,
        chain: &mut Vec<Ancestor>,
    ) -> Result<Option<Node>, Error> {
        if args.len() != operator.arity() {
            return self.unsupported(
                format!(
                    "{} takes {} type argument(s), found {}",
                    operator.name(),
                    operator.arity(),
                    args.len()
                ),
                span,
            );
        }

        let Some(subject) = self.decode_type(&args[0], chain)? else {
            return Ok(None);
        };
        let (mut properties, mut additional) = match subject.kind {
            NodeKind::Object {
                properties,
                additional_properties,
            } => (properties, additional_properties),
            NodeKind::Ref { reference } => match self.expand_object(&reference, args[0].span)? {
                Some(members) => members,
                None => {
                    return self.unsupported(
                        format!("{} of {} cannot be evaluated", operator.name(), reference),
                        span,
                    );
                }
            },
            other => {
                return self.unsupported(
                    format!("{} of {} type not supported", operator.name(), other.tag()),
                    span,
                );
            }
        };

        match operator {
            Operator::Partial => {
                for property in properties.values_mut() {
                    property.required = false;
                }
            }
            Operator::Pick | Operator::Omit => {
                let mut keys = Vec::new();
                if !string_keys(&args[1], &mut keys) {
                    return self.unsupported(
                        format!("{} keys must be string literals", operator.name()),
                        args[1].span,
                    );
                }
                let pick = operator == Operator::Pick;
                properties.retain(|name, _| keys.contains(name) == pick);
                if pick {
                    additional = Additional::Bool(false);
                }
            }
        }

        Ok(Some(Node::object(properties, additional)))
    }

    /// Members of the interface-like declaration `name`, inherited ones
    /// first. `None` if `name` is unknown or not object-shaped.
    fn expand_object(&mut self, name: &str, span: Option<Span>) -> Result<Option<Members>, Error> {
        let table = self.table;
        let Some(declaration) = table.get(name) else {
            return Ok(None);
        };

        self.enter(name, "expand", span)?;
        let saved = self.enter_scope(&declaration.namespace);
        let result = self.declaration_members(declaration);
        self.scope = saved;
        self.leave();
        result
    }

    fn declaration_members(&mut self, declaration: &Declaration<'_>) -> Result<Option<Members>, Error> {
        match declaration.kind {
            DeclKind::Interface(interface) => {
                if !interface.type_params.is_empty() {
                    return Ok(None);
                }
                let mut properties = IndexMap::new();
                let mut additional = Additional::Bool(false);

                let table = self.table;
                for parent in &interface.heritage {
                    let TypeKind::Reference { name, .. } = &parent.kind else {
                        continue;
                    };
                    let Some(target) = table.resolve(name, &self.scope) else {
                        tracing::debug!(%name, "unknown base interface, skipping its members");
                        continue;
                    };
                    if let Some((inherited, inherited_additional)) =
                        self.expand_object(&target.name, parent.span)?
                    {
                        properties.extend(inherited);
                        if inherited_additional.is_allowed() {
                            additional = inherited_additional;
                        }
                    }
                }

                let mut chain = vec![Ancestor::Declaration(declaration.name.clone())];
                let (own, own_additional) = self.decode_members(&interface.members, &mut chain)?;
                properties.extend(own);
                if own_additional.is_allowed() {
                    additional = own_additional;
                }
                Ok(Some((properties, additional)))
            }
            DeclKind::TypeAlias(_) => match self.decode_declaration(declaration)? {
                Some(Node {
                    kind:
                        NodeKind::Object {
                            properties,
                            additional_properties,
                        },
                    ..
                }) => Ok(Some((properties, additional_properties))),
                _ => Ok(None),
            },
        }
    }
}

/// Ancestor frame pushed while decoding a node of this kind.
fn frame(kind: &TypeKind) -> Ancestor {
    match kind {
        TypeKind::Array(_) => Ancestor::Array,
        TypeKind::Tuple(_) => Ancestor::Tuple(None),
        TypeKind::Union(_) => Ancestor::Union,
        TypeKind::Object(_) => Ancestor::ObjectLiteral,
        TypeKind::Parenthesized(_) => Ancestor::Parenthesized,
        TypeKind::Keyword(_)
        | TypeKind::Literal(_)
        | TypeKind::Reference { .. }
        | TypeKind::Intersection(_)
        | TypeKind::Unsupported(_) => Ancestor::Other,
    }
}

/// Collect `'a' | 'b'` into `keys`. `false` for anything else.
fn string_keys(ty: &TypeExpr, keys: &mut Vec<String>) -> bool {
    match &ty.kind {
        TypeKind::Literal(Literal::String(key)) => {
            keys.push(key.clone());
            true
        }
        TypeKind::Union(members) => members.iter().all(|m| string_keys(m, keys)),
        TypeKind::Parenthesized(inner) => string_keys(inner, keys),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_typescript;
    use crate::options::{NamespacePolicy, NonExportedPolicy, WarnFn};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Decode the type alias `T` of `source`.
    fn decode_alias(source: &str, options: &FromTsOptions) -> Result<Option<Node>, Error> {
        let file = read_typescript(source).unwrap();
        let (table, _) = DeclarationTable::collect(&file, NamespacePolicy::Ignore);
        let mut ctx = DecodeContext::new(source, options, &table);
        ctx.decode_top_level(table.get("T").unwrap())
    }

    fn decode_json(source: &str) -> serde_json::Value {
        let node = decode_alias(source, &FromTsOptions::default()).unwrap().unwrap();
        serde_json::to_value(node).unwrap()
    }

    fn recording() -> (WarnFn, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let warn = WarnFn::new(move |msg, _| sink.lock().unwrap().push(msg.to_string()));
        (warn, seen)
    }

    #[test]
    fn test_union_members_share_title() {
        assert_eq!(
            decode_json("export type T = string | number;"),
            json!({
                "type": "or",
                "or": [
                    { "type": "string", "title": "T" },
                    { "type": "number", "title": "T" }
                ],
                "title": "T"
            })
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            decode_json("export type T = 'a' | -1 | 2.5 | true | null;"),
            json!({
                "type": "or",
                "or": [
                    { "type": "string", "const": "a", "title": "T" },
                    { "type": "number", "const": -1, "title": "T" },
                    { "type": "number", "const": 2.5, "title": "T" },
                    { "type": "boolean", "const": true, "title": "T" },
                    { "type": "null", "title": "T" }
                ],
                "title": "T"
            })
        );
    }

    #[test]
    fn test_tuple() {
        assert_eq!(
            decode_json("export type T = [string, number?, ...boolean[]];"),
            json!({
                "type": "tuple",
                "elementTypes": [
                    { "type": "string", "title": "T.0" },
                    { "type": "number", "title": "T.1" }
                ],
                "additionalItems": { "type": "boolean", "title": "T.2" },
                "minItems": 1,
                "title": "T"
            })
        );
    }

    #[test]
    fn test_tuple_rest_any_collapses() {
        assert_eq!(
            decode_json("export type T = [string, ...any[]];"),
            json!({
                "type": "tuple",
                "elementTypes": [{ "type": "string", "title": "T.0" }],
                "additionalItems": true,
                "minItems": 1,
                "title": "T"
            })
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            decode_json("export type T = { a: string[]; b: Array<number>; c: Array };"),
            json!({
                "type": "object",
                "properties": {
                    "a": {
                        "node": {
                            "type": "array",
                            "elementType": { "type": "string", "title": "T.a.[]" },
                            "title": "T.a"
                        },
                        "required": true
                    },
                    "b": {
                        "node": {
                            "type": "array",
                            "elementType": { "type": "number" },
                            "title": "T.b"
                        },
                        "required": true
                    },
                    "c": {
                        "node": { "type": "array", "elementType": { "type": "any" }, "title": "T.c" },
                        "required": true
                    }
                },
                "additionalProperties": false,
                "title": "T"
            })
        );
    }

    #[test]
    fn test_object_keyword_and_index_signature() {
        assert_eq!(
            decode_json("export type T = { o: object; [key: string]: number };"),
            json!({
                "type": "object",
                "properties": {
                    "o": {
                        "node": {
                            "type": "object",
                            "properties": {},
                            "additionalProperties": true,
                            "title": "T.o"
                        },
                        "required": true
                    }
                },
                "additionalProperties": { "type": "number" },
                "title": "T"
            })
        );
    }

    #[test]
    fn test_unsupported_policies() {
        let source = "export type T = symbol;";

        let ignored = decode_alias(source, &FromTsOptions::default()).unwrap().unwrap();
        assert!(ignored.is_plain_any());

        let (warn, seen) = recording();
        let options = FromTsOptions {
            unsupported: UnsupportedPolicy::Warn,
            warn: Some(warn),
            ..Default::default()
        };
        decode_alias(source, &options).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["Unimplemented type (symbol)"]);

        let options = FromTsOptions {
            unsupported: UnsupportedPolicy::Error,
            ..Default::default()
        };
        let err = decode_alias(source, &options).unwrap_err();
        assert_eq!(err.to_string(), "unsupported: Unimplemented type (symbol) at 1:17");
        assert_eq!(err.meta().unwrap().path, vec!["T"]);
    }

    #[test]
    fn test_qualified_reference_unsupported() {
        let options = FromTsOptions {
            unsupported: UnsupportedPolicy::Error,
            ..Default::default()
        };
        let err = decode_alias("export type T = A.B;", &options).unwrap_err();
        assert!(err.to_string().contains("Qualified reference names not supported"));
    }

    #[test]
    fn test_non_string_index_always_warns() {
        let (warn, seen) = recording();
        let options = FromTsOptions {
            warn: Some(warn),
            ..Default::default()
        };
        let node = decode_alias("export type T = { [n: number]: string };", &options)
            .unwrap()
            .unwrap();
        assert!(matches!(
            node.kind,
            NodeKind::Object {
                additional_properties: Additional::Bool(false),
                ..
            }
        ));
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["Will not convert non-string index signature"]
        );
    }

    #[test]
    fn test_generic_declaration() {
        let options = FromTsOptions {
            unsupported: UnsupportedPolicy::Error,
            ..Default::default()
        };
        let err = decode_alias("export type T<X> = X;", &options).unwrap_err();
        assert!(err.to_string().contains("Generic types are not supported"));
        assert!(decode_alias("export type T<X> = X;", &FromTsOptions::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_inline_cycle() {
        let options = FromTsOptions {
            non_exported: NonExportedPolicy::Inline,
            ..Default::default()
        };
        let err = decode_alias("type U = T; type T = string | U;", &options).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
        assert!(err.to_string().contains("Cyclic type found when trying to inline type U"));
    }

    #[test]
    fn test_inline_same_type_twice() {
        let options = FromTsOptions {
            non_exported: NonExportedPolicy::Inline,
            ..Default::default()
        };
        let node = decode_alias("type U = 1; export type T = [U, U];", &options)
            .unwrap()
            .unwrap();
        assert_eq!(
            serde_json::to_value(node).unwrap(),
            json!({
                "type": "tuple",
                "elementTypes": [
                    { "type": "number", "const": 1, "title": "U" },
                    { "type": "number", "const": 1, "title": "U" }
                ],
                "additionalItems": false,
                "minItems": 2,
                "title": "T"
            })
        );
    }

    #[test]
    fn test_operator_keys_must_be_literals() {
        let options = FromTsOptions {
            unsupported: UnsupportedPolicy::Error,
            ..Default::default()
        };
        let err = decode_alias(
            "export interface Foo { a: string } export type T = Pick<Foo, string>;",
            &options,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Pick keys must be string literals"));
    }

    #[test]
    fn test_string_keys() {
        let union = TypeExpr::new(TypeKind::Union(vec![
            TypeExpr::literal(Literal::String("a".into())),
            TypeExpr::new(TypeKind::Parenthesized(Box::new(TypeExpr::literal(
                Literal::String("b".into()),
            )))),
        ]));
        let mut keys = Vec::new();
        assert!(string_keys(&union, &mut keys));
        assert_eq!(keys, vec!["a", "b"]);
        assert!(!string_keys(&TypeExpr::keyword(Keyword::String), &mut Vec::new()));
    }
}
