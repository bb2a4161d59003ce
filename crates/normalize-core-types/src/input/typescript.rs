//! Tree-sitter based TypeScript reader.
//!
//! Lowers the TypeScript grammar into the reduced [`crate::syntax`] model:
//! interfaces, type aliases and namespaces, with their leading JSDoc
//! comments. Everything else in the file is skipped.

use crate::syntax::*;
use crate::traits::{ReadError, Reader};
use tree_sitter::{Node, Parser};

/// Static instance of the TypeScript reader.
pub static TYPESCRIPT_READER: TypeScriptReader = TypeScriptReader;

/// TypeScript reader using tree-sitter.
pub struct TypeScriptReader;

impl Reader for TypeScriptReader {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["ts", "mts", "cts"]
    }

    fn read(&self, source: &str) -> Result<SourceFile, ReadError> {
        read_typescript(source)
    }
}

/// Parse TypeScript source into declarations.
pub fn read_typescript(source: &str) -> Result<SourceFile, ReadError> {
    let mut parser = Parser::new();
    parser
        .set_language(&arborium_typescript::language().into())
        .map_err(|err| ReadError::Grammar {
            language: "typescript",
            message: err.to_string(),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ReadError::Parse("failed to parse".into()))?;

    let root = tree.root_node();
    if root.has_error() {
        // Declarations around the error are still usable.
        tracing::debug!("syntax error in TypeScript source, reading what parsed");
    }

    let ctx = ReadContext::new(source);
    Ok(SourceFile {
        statements: ctx.read_block(root),
    })
}

struct ReadContext<'a> {
    source: &'a str,
}

/// Modifiers collected while unwrapping `export` / `declare`.
#[derive(Clone, Copy, Default)]
struct Modifiers {
    exported: bool,
    declare: bool,
}

impl<'a> ReadContext<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn span(&self, node: Node) -> Span {
        Span::new(node.start_byte(), node.end_byte())
    }

    /// The first `/** */` comment in the run of comments directly above `node`.
    ///
    /// Comments separated from the node by a blank line don't count.
    fn leading_doc(&self, node: Node) -> Option<String> {
        let mut doc = None;
        let mut row = node.start_position().row;
        let mut current = node.prev_sibling();
        while let Some(sibling) = current {
            if sibling.kind() != "comment" || sibling.end_position().row + 1 < row {
                break;
            }
            let text = self.node_text(sibling);
            if text.starts_with("/**") {
                doc = Some(text);
            }
            row = sibling.start_position().row;
            current = sibling.prev_sibling();
        }
        doc.map(str::to_string)
    }

    fn read_block(&self, node: Node) -> Vec<Statement> {
        let mut statements = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.is_named() {
                self.read_statement(child, child, Modifiers::default(), &mut statements);
            }
        }
        statements
    }

    /// `outer` is the node the doc comment is attached to (the `export`
    /// statement for exported declarations).
    fn read_statement(
        &self,
        node: Node,
        outer: Node,
        modifiers: Modifiers,
        out: &mut Vec<Statement>,
    ) {
        match node.kind() {
            "export_statement" => {
                // `export default ...`, `export { a }` and re-exports carry no declaration.
                if let Some(decl) = node.child_by_field_name("declaration") {
                    let modifiers = Modifiers {
                        exported: true,
                        ..modifiers
                    };
                    self.read_statement(decl, outer, modifiers, out);
                }
            }
            "ambient_declaration" => {
                let modifiers = Modifiers {
                    declare: true,
                    ..modifiers
                };
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.is_named() {
                        self.read_statement(child, outer, modifiers, out);
                    }
                }
            }
            "expression_statement" => {
                // `namespace A {}` at statement level parses as an expression.
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if matches!(child.kind(), "internal_module" | "module") {
                        self.read_statement(child, outer, modifiers, out);
                    }
                }
            }
            "interface_declaration" => {
                out.push(Statement::Interface(
                    self.read_interface(node, outer, modifiers),
                ));
            }
            "type_alias_declaration" => {
                if let Some(alias) = self.read_type_alias(node, outer, modifiers) {
                    out.push(Statement::TypeAlias(alias));
                }
            }
            "internal_module" | "module" => {
                if let Some(namespace) = self.read_namespace(node, outer, modifiers) {
                    out.push(Statement::Namespace(namespace));
                }
            }
            _ => {}
        }
    }

    fn type_params(&self, node: Node) -> Vec<String> {
        let Some(params) = node.child_by_field_name("type_parameters") else {
            return Vec::new();
        };
        let mut names = Vec::new();
        let mut cursor = params.walk();
        for param in params.children(&mut cursor) {
            if param.kind() == "type_parameter" {
                let name = param
                    .child_by_field_name("name")
                    .map(|n| self.node_text(n))
                    .unwrap_or_else(|| self.node_text(param));
                names.push(name.to_string());
            }
        }
        names
    }

    fn read_interface(&self, node: Node, outer: Node, modifiers: Modifiers) -> InterfaceDecl {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.node_text(n).to_string())
            .unwrap_or_default();

        let mut heritage = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "extends_type_clause" {
                let mut inner = child.walk();
                for ty in child.children(&mut inner) {
                    if ty.is_named() && ty.kind() != "comment" {
                        heritage.push(self.read_type(ty));
                    }
                }
            }
        }

        let members = node
            .child_by_field_name("body")
            .map(|body| self.read_members(body))
            .unwrap_or_default();

        InterfaceDecl {
            name,
            exported: modifiers.exported,
            declare: modifiers.declare,
            type_params: self.type_params(node),
            heritage,
            members,
            doc: self.leading_doc(outer),
            span: Some(self.span(outer)),
        }
    }

    fn read_type_alias(
        &self,
        node: Node,
        outer: Node,
        modifiers: Modifiers,
    ) -> Option<TypeAliasDecl> {
        let name = node.child_by_field_name("name")?;
        let value = node.child_by_field_name("value")?;

        Some(TypeAliasDecl {
            name: self.node_text(name).to_string(),
            exported: modifiers.exported,
            declare: modifiers.declare,
            type_params: self.type_params(node),
            value: self.read_type(value),
            doc: self.leading_doc(outer),
            span: Some(self.span(outer)),
        })
    }

    fn read_namespace(
        &self,
        node: Node,
        outer: Node,
        modifiers: Modifiers,
    ) -> Option<NamespaceDecl> {
        let name = node.child_by_field_name("name")?;
        // `declare module "foo"` is a module declaration, not a namespace.
        if name.kind() == "string" {
            return None;
        }
        let path = self
            .node_text(name)
            .split('.')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let body = node
            .child_by_field_name("body")
            .map(|body| self.read_block(body))
            .unwrap_or_default();

        Some(NamespaceDecl {
            path,
            exported: modifiers.exported,
            body,
            span: Some(self.span(outer)),
        })
    }

    /// Members of an `object_type` / `interface_body`.
    fn read_members(&self, body: Node) -> Vec<Member> {
        let mut members = Vec::new();
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                "property_signature" => members.push(self.read_property(child)),
                "index_signature" => members.push(self.read_index_signature(child)),
                "method_signature" | "call_signature" | "construct_signature" => {
                    members.push(Member::Other(Some(self.span(child))));
                }
                _ => {}
            }
        }
        members
    }

    fn read_property(&self, node: Node) -> Member {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.property_name(n))
            .unwrap_or_default();

        let ty = node
            .child_by_field_name("type")
            .and_then(|annotation| self.annotated_type(annotation))
            .map(|ty| self.read_type(ty));

        Member::Property(PropertySignature {
            name,
            optional: self.has_question_mark(node),
            ty,
            doc: self.leading_doc(node),
            span: Some(self.span(node)),
        })
    }

    fn property_name(&self, node: Node) -> String {
        let text = self.node_text(node);
        match node.kind() {
            "string" => unquote(text),
            _ => text.to_string(),
        }
    }

    fn has_question_mark(&self, node: Node) -> bool {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !child.is_named() && self.node_text(child) == "?" {
                return true;
            }
        }
        false
    }

    /// The type inside a `type_annotation` (`: T`).
    fn annotated_type<'t>(&self, annotation: Node<'t>) -> Option<Node<'t>> {
        if annotation.kind() != "type_annotation" {
            return Some(annotation);
        }
        let mut cursor = annotation.walk();
        let ty = annotation
            .children(&mut cursor)
            .find(|child| child.is_named() && child.kind() != "comment");
        ty
    }

    fn read_index_signature(&self, node: Node) -> Member {
        let param = node
            .child_by_field_name("name")
            .map(|n| self.node_text(n).to_string())
            .unwrap_or_default();

        let key = match node.child_by_field_name("index_type") {
            Some(key) => self.read_type(key),
            // Mapped type clause (`[K in Keys]`)
            None => TypeExpr::new(TypeKind::Unsupported("mapped_type_clause".into()))
                .with_span(self.span(node)),
        };

        let value = node
            .child_by_field_name("type")
            .and_then(|annotation| self.annotated_type(annotation))
            .map(|ty| self.read_type(ty))
            .unwrap_or_else(|| TypeExpr::keyword(Keyword::Any));

        Member::Index(IndexSignature {
            param,
            key,
            value,
            doc: self.leading_doc(node),
            span: Some(self.span(node)),
        })
    }

    fn first_named_child<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let child = node
            .children(&mut cursor)
            .find(|child| child.is_named() && child.kind() != "comment");
        child
    }

    fn read_type(&self, node: Node) -> TypeExpr {
        let kind = match node.kind() {
            "predefined_type" => {
                let text = self.node_text(node);
                match Keyword::from_name(text) {
                    Some(keyword) => TypeKind::Keyword(keyword),
                    None => TypeKind::Unsupported(format!("predefined_type {}", text)),
                }
            }

            "type_identifier" => TypeKind::Reference {
                name: self.node_text(node).to_string(),
                qualified: false,
                args: Vec::new(),
            },

            "nested_type_identifier" => TypeKind::Reference {
                name: self.node_text(node).to_string(),
                qualified: true,
                args: Vec::new(),
            },

            "generic_type" => {
                let name = node.child_by_field_name("name");
                let args = node
                    .child_by_field_name("type_arguments")
                    .map(|args| self.read_type_list(args))
                    .unwrap_or_default();
                TypeKind::Reference {
                    name: name.map(|n| self.node_text(n).to_string()).unwrap_or_default(),
                    qualified: name.is_some_and(|n| n.kind() == "nested_type_identifier"),
                    args,
                }
            }

            "union_type" => {
                let mut members = Vec::new();
                self.flatten(node, "union_type", &mut members);
                TypeKind::Union(members)
            }

            "intersection_type" => {
                let mut members = Vec::new();
                self.flatten(node, "intersection_type", &mut members);
                TypeKind::Intersection(members)
            }

            "array_type" => match self.first_named_child(node) {
                Some(element) => TypeKind::Array(Box::new(self.read_type(element))),
                None => TypeKind::Unsupported("array_type".into()),
            },

            "parenthesized_type" => match self.first_named_child(node) {
                Some(inner) => TypeKind::Parenthesized(Box::new(self.read_type(inner))),
                None => TypeKind::Unsupported("parenthesized_type".into()),
            },

            "object_type" => TypeKind::Object(self.read_members(node)),

            "tuple_type" => TypeKind::Tuple(self.read_tuple(node)),

            "literal_type" => match self.first_named_child(node) {
                Some(literal) => TypeKind::Literal(self.read_literal(literal)),
                None => TypeKind::Unsupported("literal_type".into()),
            },

            other => TypeKind::Unsupported(other.to_string()),
        };

        // `flatten` already handed a union's doc to its first member.
        let doc = match kind {
            TypeKind::Union(_) | TypeKind::Intersection(_) => None,
            _ => self.leading_doc(node),
        };

        TypeExpr {
            kind,
            doc,
            span: Some(self.span(node)),
        }
    }

    /// Named children of a `type_arguments` node.
    fn read_type_list(&self, node: Node) -> Vec<TypeExpr> {
        let mut types = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.is_named() && child.kind() != "comment" {
                types.push(self.read_type(child));
            }
        }
        types
    }

    /// Flatten left-nested binary `union_type` / `intersection_type` nodes.
    ///
    /// A doc comment in front of the whole expression belongs to its first
    /// member.
    fn flatten(&self, node: Node, kind: &str, out: &mut Vec<TypeExpr>) {
        let start = out.len();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !child.is_named() || child.kind() == "comment" {
                continue;
            }
            if child.kind() == kind {
                self.flatten(child, kind, out);
            } else {
                out.push(self.read_type(child));
            }
        }
        if let Some(first) = out.get_mut(start) {
            if first.doc.is_none() {
                first.doc = self.leading_doc(node);
            }
        }
    }

    fn read_tuple(&self, node: Node) -> Vec<TupleElement> {
        let mut elements = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !child.is_named() || child.kind() == "comment" {
                continue;
            }
            let element = match child.kind() {
                "optional_type" => self.first_named_child(child).map(|inner| TupleElement {
                    kind: TupleElementKind::Optional,
                    ty: self.read_type(inner),
                    label: None,
                }),
                "rest_type" => self.first_named_child(child).map(|inner| TupleElement {
                    kind: TupleElementKind::Rest,
                    ty: self.read_type(inner),
                    label: None,
                }),
                // Named members: `[name: T]`, `[name?: T]`, `[...rest: T[]]`
                "required_parameter" | "optional_parameter" => {
                    let label = child.child_by_field_name("name");
                    let rest = label.is_some_and(|l| l.kind() == "rest_pattern");
                    let kind = if rest {
                        TupleElementKind::Rest
                    } else if child.kind() == "optional_parameter" {
                        TupleElementKind::Optional
                    } else {
                        TupleElementKind::Required
                    };
                    child
                        .child_by_field_name("type")
                        .and_then(|annotation| self.annotated_type(annotation))
                        .map(|ty| TupleElement {
                            kind,
                            ty: self.read_type(ty),
                            label: label.map(|l| {
                                self.node_text(l).trim_start_matches("...").to_string()
                            }),
                        })
                }
                _ => Some(TupleElement {
                    kind: TupleElementKind::Required,
                    ty: self.read_type(child),
                    label: None,
                }),
            };
            elements.extend(element);
        }
        elements
    }

    fn read_literal(&self, node: Node) -> Literal {
        let text = self.node_text(node);
        match node.kind() {
            "string" => Literal::String(unquote(text)),
            "number" => parse_number(text, false)
                .map(Literal::Number)
                .unwrap_or_else(|| Literal::Other(text.to_string())),
            "true" => Literal::Boolean(true),
            "false" => Literal::Boolean(false),
            "null" => Literal::Null,
            "unary_expression" => {
                let operator = node.child_by_field_name("operator").map(|o| self.node_text(o));
                let argument = node.child_by_field_name("argument");
                match (operator, argument) {
                    (Some(op @ ("-" | "+")), Some(arg)) if arg.kind() == "number" => {
                        parse_number(self.node_text(arg), op == "-")
                            .map(Literal::Number)
                            .unwrap_or_else(|| Literal::Other(text.to_string()))
                    }
                    _ => Literal::Other(text.to_string()),
                }
            }
            _ => Literal::Other(text.to_string()),
        }
    }
}

/// Parse a TypeScript numeric literal, keeping integral values as integers.
fn parse_number(text: &str, negative: bool) -> Option<serde_json::Number> {
    let text = text.replace('_', "");
    let lower = text.to_ascii_lowercase();

    let radix = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| lower.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix {
        let value = i64::from_str_radix(digits, radix).ok()?;
        return Some(serde_json::Number::from(if negative { -value } else { value }));
    }

    if let Ok(value) = lower.parse::<i64>() {
        return Some(serde_json::Number::from(if negative { -value } else { value }));
    }

    let value: f64 = lower.parse().ok()?;
    let value = if negative { -value } else { value };
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        return Some(serde_json::Number::from(value as i64));
    }
    serde_json::Number::from_f64(value)
}

/// Strip quotes from a string literal and resolve escapes.
fn unquote(text: &str) -> String {
    let inner = text
        .strip_prefix(['"', '\''])
        .and_then(|s| s.strip_suffix(['"', '\'']))
        .unwrap_or(text);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                if let Some(ch) = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    out.push(ch);
                }
            }
            Some('u') => {
                let hex: String = if chars.peek() == Some(&'{') {
                    chars.next();
                    chars.by_ref().take_while(|c| *c != '}').collect()
                } else {
                    chars.by_ref().take(4).collect()
                };
                if let Some(ch) = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    out.push(ch);
                }
            }
            // Line continuation
            Some('\n') => {}
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(source: &str) -> Vec<Statement> {
        read_typescript(source).unwrap().statements
    }

    fn alias_value(source: &str) -> TypeKind {
        match read(source).into_iter().next() {
            Some(Statement::TypeAlias(alias)) => alias.value.kind,
            other => panic!("expected type alias, got {:?}", other),
        }
    }

    #[test]
    fn test_interface_with_heritage_and_doc() {
        let statements = read(
            r#"
/** A user */
export interface User extends Base, Named {
    /** The name */
    name: string;
    "quoted-key"?: number;
    [key: string]: any;
    method(): void;
}
"#,
        );
        let Some(Statement::Interface(decl)) = statements.first() else {
            panic!("expected interface, got {:?}", statements);
        };
        assert_eq!(decl.name, "User");
        assert!(decl.exported);
        assert!(!decl.declare);
        assert_eq!(decl.doc.as_deref(), Some("/** A user */"));
        assert_eq!(decl.heritage.len(), 2);
        assert_eq!(decl.members.len(), 4);

        match &decl.members[0] {
            Member::Property(p) => {
                assert_eq!(p.name, "name");
                assert!(!p.optional);
                assert_eq!(p.doc.as_deref(), Some("/** The name */"));
                assert!(matches!(
                    p.ty.as_ref().map(|t| &t.kind),
                    Some(TypeKind::Keyword(Keyword::String))
                ));
            }
            other => panic!("expected property, got {:?}", other),
        }
        match &decl.members[1] {
            Member::Property(p) => {
                assert_eq!(p.name, "quoted-key");
                assert!(p.optional);
            }
            other => panic!("expected property, got {:?}", other),
        }
        assert!(matches!(&decl.members[2], Member::Index(i) if i.param == "key"));
        assert!(matches!(&decl.members[3], Member::Other(_)));
    }

    #[test]
    fn test_doc_separated_by_blank_line_is_ignored() {
        let statements = read("/** header */\n\nexport type A = string;\n");
        let Some(Statement::TypeAlias(alias)) = statements.first() else {
            panic!("expected type alias");
        };
        assert_eq!(alias.doc, None);
    }

    #[test]
    fn test_first_of_stacked_docs_wins() {
        let statements = read("/** first block */\n/** second block */\nexport type A = string;\n");
        let Some(Statement::TypeAlias(alias)) = statements.first() else {
            panic!("expected type alias");
        };
        assert_eq!(alias.doc.as_deref(), Some("/** first block */"));

        let statements = read("/** header */\n\n/** A */\n// note\nexport type A = string;\n");
        let Some(Statement::TypeAlias(alias)) = statements.first() else {
            panic!("expected type alias");
        };
        assert_eq!(alias.doc.as_deref(), Some("/** A */"));
    }

    #[test]
    fn test_declare_and_generics() {
        let statements = read("export declare type Foo<T, U> = T | U;\ninterface Bar {}\n");
        match &statements[..] {
            [Statement::TypeAlias(foo), Statement::Interface(bar)] => {
                assert!(foo.exported);
                assert!(foo.declare);
                assert_eq!(foo.type_params, vec!["T".to_string(), "U".to_string()]);
                assert!(!bar.exported);
            }
            other => panic!("unexpected statements {:?}", other),
        }
    }

    #[test]
    fn test_namespaces() {
        let statements = read(
            "namespace Foo {\n    namespace Bar.Baz {\n        export type A = 1;\n    }\n}\n",
        );
        let Some(Statement::Namespace(foo)) = statements.first() else {
            panic!("expected namespace, got {:?}", statements);
        };
        assert_eq!(foo.path, vec!["Foo".to_string()]);
        let Some(Statement::Namespace(inner)) = foo.body.first() else {
            panic!("expected nested namespace, got {:?}", foo.body);
        };
        assert_eq!(inner.path, vec!["Bar".to_string(), "Baz".to_string()]);
        assert!(matches!(inner.body.first(), Some(Statement::TypeAlias(a)) if a.exported));
    }

    #[test]
    fn test_union_is_flattened() {
        match alias_value("type A = string | number | boolean;") {
            TypeKind::Union(members) => assert_eq!(members.len(), 3),
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_literal() {
        match alias_value("type A = -1;") {
            TypeKind::Literal(Literal::Number(n)) => assert_eq!(n.as_i64(), Some(-1)),
            other => panic!("expected number literal, got {:?}", other),
        }
    }

    #[test]
    fn test_string_literal_unescaped() {
        match alias_value(r#"type A = 'it\'s "x"';"#) {
            TypeKind::Literal(Literal::String(s)) => assert_eq!(s, "it's \"x\""),
            other => panic!("expected string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_tuple_elements() {
        match alias_value("type T = [string, number?, ...boolean[]];") {
            TypeKind::Tuple(elements) => {
                let kinds: Vec<_> = elements.iter().map(|e| e.kind).collect();
                assert_eq!(
                    kinds,
                    vec![
                        TupleElementKind::Required,
                        TupleElementKind::Optional,
                        TupleElementKind::Rest
                    ]
                );
                assert!(matches!(elements[2].ty.kind, TypeKind::Array(_)));
            }
            other => panic!("expected tuple, got {:?}", other),
        }
    }

    #[test]
    fn test_generic_reference() {
        match alias_value("type T = Pick<Foo, 'a' | 'b'>;") {
            TypeKind::Reference {
                name,
                qualified,
                args,
            } => {
                assert_eq!(name, "Pick");
                assert!(!qualified);
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected reference, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1000", false).unwrap().as_i64(), Some(1000));
        assert_eq!(parse_number("0x10", false).unwrap().as_i64(), Some(16));
        assert_eq!(parse_number("1e3", false).unwrap().as_i64(), Some(1000));
        assert_eq!(parse_number("1.5", true).unwrap().as_f64(), Some(-1.5));
    }
}
