//! Node encoder: IR nodes to TypeScript syntax.

use crate::annotations::{self, Ancestor};
use crate::error::{Error, ErrorMeta};
use crate::ir::{Additional, NamedType, Node, NodeKind};
use crate::options::ToTsOptions;
use crate::syntax::*;
use serde_json::Value;

/// State shared by one encoding pass.
pub(crate) struct EncodeContext<'a> {
    pub use_unknown: bool,
    /// Types of the document being converted, for heritage detection.
    pub root_types: &'a [NamedType],
}

/// Result of encoding one node.
pub(crate) enum Encoded {
    /// A plain type expression.
    Value(TypeExpr),
    /// An object shape, which at top level becomes an interface.
    Record {
        members: Vec<Member>,
        inherits: Vec<String>,
    },
}

impl Encoded {
    pub fn into_type(self) -> TypeExpr {
        match self {
            Encoded::Value(ty) => ty,
            Encoded::Record { members, .. } => TypeExpr::new(TypeKind::Object(members)),
        }
    }
}

impl EncodeContext<'_> {
    fn any(&self) -> TypeExpr {
        TypeExpr::keyword(if self.use_unknown {
            Keyword::Unknown
        } else {
            Keyword::Any
        })
    }

    /// Encode a node as a type expression carrying its annotations as a doc comment.
    fn annotated(&self, node: &Node, chain: &mut Vec<Ancestor>) -> Result<TypeExpr, Error> {
        chain.push(frame(node));
        let inferred = annotations::infer_title(chain);
        let encoded = self.encode(node, false, chain);
        chain.pop();
        let doc = annotations::stringify(&node.annotations, inferred.as_deref());
        Ok(encoded?.into_type().with_doc(doc))
    }

    fn value(&self, node: &Node, chain: &mut Vec<Ancestor>) -> Result<TypeExpr, Error> {
        chain.push(frame(node));
        let encoded = self.encode(node, false, chain);
        chain.pop();
        Ok(encoded?.into_type())
    }

    /// Encode a node. `chain` holds the ancestors the reader will see when
    /// it reads the result back, ending with the node's own frame; titles
    /// that match what it infers from them are not written.
    pub fn encode(
        &self,
        node: &Node,
        top_level: bool,
        chain: &mut Vec<Ancestor>,
    ) -> Result<Encoded, Error> {
        if top_level {
            if let NodeKind::And { and } = &node.kind {
                if let Some((object, refs)) = self.object_with_heritage(and) {
                    let members = match object {
                        Some(object) => self.object_members(object, chain)?,
                        None => Vec::new(),
                    };
                    return Ok(Encoded::Record {
                        members,
                        inherits: refs,
                    });
                }
            }
        }

        match &node.kind {
            NodeKind::And { and } => {
                let members = and
                    .iter()
                    .map(|member| self.annotated(member, chain))
                    .collect::<Result<_, _>>()?;
                return Ok(Encoded::Value(TypeExpr::new(TypeKind::Intersection(members))));
            }
            NodeKind::Or { or } => {
                let members = or
                    .iter()
                    .map(|member| self.annotated(member, chain))
                    .collect::<Result<_, _>>()?;
                return Ok(Encoded::Value(TypeExpr::new(TypeKind::Union(members))));
            }
            NodeKind::Null => return Ok(Encoded::Value(TypeExpr::literal(Literal::Null))),
            _ => {}
        }

        if let Some(value) = &node.constant {
            return Ok(Encoded::Value(self.const_type(value)));
        }
        if let Some(values) = &node.enumeration {
            let members = values.iter().map(|v| self.const_type(v)).collect();
            return Ok(Encoded::Value(TypeExpr::new(TypeKind::Union(members))));
        }

        let ty = match &node.kind {
            NodeKind::String => TypeExpr::keyword(Keyword::String),
            NodeKind::Number | NodeKind::Integer => TypeExpr::keyword(Keyword::Number),
            NodeKind::Boolean => TypeExpr::keyword(Keyword::Boolean),
            NodeKind::Any => self.any(),
            NodeKind::Ref { reference } => TypeExpr::reference(reference.clone()),
            NodeKind::Object { .. } => {
                return Ok(Encoded::Record {
                    members: self.object_members(node, chain)?,
                    inherits: Vec::new(),
                });
            }
            NodeKind::Array { element_type } => {
                TypeExpr::new(TypeKind::Array(Box::new(self.value(element_type, chain)?)))
            }
            NodeKind::Tuple {
                element_types,
                additional_items,
                ..
            } => {
                // minItems is not expressed: trailing elements stay required.
                let mut elements = Vec::with_capacity(element_types.len() + 1);
                for (i, element) in element_types.iter().enumerate() {
                    set_position(chain, i);
                    elements.push(TupleElement {
                        kind: TupleElementKind::Required,
                        ty: self.value(element, chain)?,
                        label: None,
                    });
                }
                let rest = match additional_items {
                    Additional::Bool(false) => None,
                    Additional::Bool(true) => Some(self.any()),
                    Additional::Node(rest) => {
                        // Read back as `...T[]`: a rest frame around an array.
                        set_position(chain, element_types.len());
                        chain.push(Ancestor::Rest);
                        chain.push(Ancestor::Array);
                        let rest = self.value(rest, chain);
                        chain.truncate(chain.len() - 2);
                        Some(rest?)
                    }
                };
                if let Some(rest) = rest {
                    elements.push(TupleElement {
                        kind: TupleElementKind::Rest,
                        ty: TypeExpr::new(TypeKind::Array(Box::new(rest))),
                        label: None,
                    });
                }
                TypeExpr::new(TypeKind::Tuple(elements))
            }
            other => {
                return Err(Error::unsupported(
                    format!("Type {} not supported", other.tag()),
                    ErrorMeta::from_loc(node.loc),
                ));
            }
        };

        Ok(Encoded::Value(ty))
    }

    /// Literal type for a `const` / `enum` value.
    fn const_type(&self, value: &Value) -> TypeExpr {
        match value {
            Value::Null => TypeExpr::literal(Literal::Null),
            Value::Bool(b) => TypeExpr::literal(Literal::Boolean(*b)),
            Value::Number(n) => TypeExpr::literal(Literal::Number(n.clone())),
            Value::String(s) => TypeExpr::literal(Literal::String(s.clone())),
            Value::Array(items) => TypeExpr::new(TypeKind::Tuple(
                items
                    .iter()
                    .map(|item| TupleElement {
                        kind: TupleElementKind::Required,
                        ty: self.const_type(item),
                        label: None,
                    })
                    .collect(),
            )),
            Value::Object(map) => TypeExpr::new(TypeKind::Object(
                map.iter()
                    .map(|(name, item)| {
                        Member::Property(PropertySignature {
                            name: name.clone(),
                            optional: false,
                            ty: Some(self.const_type(item)),
                            doc: None,
                            span: None,
                        })
                    })
                    .collect(),
            )),
        }
    }

    fn object_members(&self, node: &Node, chain: &mut Vec<Ancestor>) -> Result<Vec<Member>, Error> {
        let NodeKind::Object {
            properties,
            additional_properties,
        } = &node.kind
        else {
            return Ok(Vec::new());
        };

        let mut members = Vec::with_capacity(properties.len() + 1);
        for (name, property) in properties {
            chain.push(Ancestor::Property(name.clone()));
            let inferred = annotations::infer_title(chain);
            let ty = self.value(&property.node, chain);
            chain.pop();
            members.push(Member::Property(PropertySignature {
                name: name.clone(),
                optional: !property.required,
                ty: Some(ty?),
                doc: annotations::stringify(&property.node.annotations, inferred.as_deref()),
                span: None,
            }));
        }

        let index_value = match additional_properties {
            Additional::Bool(false) => None,
            Additional::Bool(true) => Some(self.any()),
            Additional::Node(value) => {
                chain.push(Ancestor::Other);
                let value = self.value(value, chain);
                chain.pop();
                Some(value?)
            }
        };
        if let Some(value) = index_value {
            members.push(Member::Index(IndexSignature {
                param: "key".to_string(),
                key: TypeExpr::keyword(Keyword::String),
                value,
                doc: None,
                span: None,
            }));
        }

        Ok(members)
    }

    /// Split an intersection into at most one object and refs to root object
    /// types. `None` if anything else is in it.
    fn object_with_heritage<'n>(&self, and: &'n [Node]) -> Option<(Option<&'n Node>, Vec<String>)> {
        let mut object = None;
        let mut refs = Vec::new();

        for member in and {
            match &member.kind {
                NodeKind::Object { .. } if object.is_none() => object = Some(member),
                NodeKind::Ref { reference } if self.is_root_object(reference) => {
                    refs.push(reference.clone())
                }
                _ => return None,
            }
        }

        Some((object, refs))
    }

    fn is_root_object(&self, name: &str) -> bool {
        self.root_types
            .iter()
            .any(|t| t.name == name && matches!(t.node.kind, NodeKind::Object { .. }))
    }

    /// Whether a top-level node becomes an interface.
    fn is_record(&self, node: &Node) -> bool {
        match &node.kind {
            NodeKind::And { and } => self.object_with_heritage(and).is_some(),
            NodeKind::Object { .. } => node.constant.is_none() && node.enumeration.is_none(),
            _ => false,
        }
    }
}

/// Ancestor frame of the type expression a node encodes to.
fn frame(node: &Node) -> Ancestor {
    match &node.kind {
        NodeKind::Or { .. } => return Ancestor::Union,
        NodeKind::And { .. } | NodeKind::Null => return Ancestor::Other,
        _ => {}
    }
    if let Some(value) = &node.constant {
        return match value {
            Value::Array(_) => Ancestor::Tuple(None),
            Value::Object(_) => Ancestor::ObjectLiteral,
            _ => Ancestor::Other,
        };
    }
    if node.enumeration.is_some() {
        return Ancestor::Union;
    }
    match &node.kind {
        NodeKind::Object { .. } => Ancestor::ObjectLiteral,
        NodeKind::Array { .. } => Ancestor::Array,
        NodeKind::Tuple { .. } => Ancestor::Tuple(None),
        _ => Ancestor::Other,
    }
}

fn set_position(chain: &mut [Ancestor], position: usize) {
    if let Some(Ancestor::Tuple(slot)) = chain.last_mut() {
        *slot = Some(position);
    }
}

/// Encode a named type as a top-level declaration.
///
/// Returns the declaration and the namespaces it should be nested in.
pub(crate) fn encode_declaration(
    named: &NamedType,
    options: &ToTsOptions,
    root_types: &[NamedType],
) -> Result<(Statement, Vec<String>), Error> {
    let ctx = EncodeContext {
        use_unknown: options.use_unknown,
        root_types,
    };

    let (namespaces, local) = options.namespaces.split(&named.name);
    let namespaces = namespaces.into_iter().map(str::to_string).collect();
    let doc = annotations::stringify(&named.node.annotations, Some(&named.name));

    // Interface members sit directly under the declaration; an alias value
    // gets its own frame.
    let mut chain = vec![Ancestor::Declaration(named.name.clone())];
    if !ctx.is_record(&named.node) {
        chain.push(frame(&named.node));
    }

    let statement = match ctx.encode(&named.node, true, &mut chain)? {
        Encoded::Value(value) => Statement::TypeAlias(TypeAliasDecl {
            name: local.to_string(),
            exported: true,
            declare: options.declaration,
            type_params: Vec::new(),
            value,
            doc,
            span: None,
        }),
        Encoded::Record { members, inherits } => Statement::Interface(InterfaceDecl {
            name: local.to_string(),
            exported: true,
            declare: options.declaration,
            type_params: Vec::new(),
            heritage: inherits.into_iter().map(TypeExpr::reference).collect(),
            members,
            doc,
            span: None,
        }),
    };

    Ok((statement, namespaces))
}

/// Encode a single named type without a document around it.
///
/// Intersections only become `extends` clauses when the referenced types are
/// known, so without a document they always stay intersections.
pub fn convert_single_core_type(
    named: &NamedType,
    options: &ToTsOptions,
) -> Result<(Statement, Vec<String>), Error> {
    encode_declaration(named, options, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Annotations, Property};
    use crate::options::NamespaceSplit;
    use crate::output::TypeScriptWriter;
    use indexmap::IndexMap;
    use serde_json::json;

    fn emit(named: &NamedType, options: &ToTsOptions, roots: &[NamedType]) -> String {
        let (statement, _) = encode_declaration(named, options, roots).unwrap();
        TypeScriptWriter::emit(&statement)
    }

    fn object(props: Vec<(&str, Property)>, additional: Additional) -> Node {
        Node::object(
            props
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<IndexMap<_, _>>(),
            additional,
        )
    }

    #[test]
    fn test_primitive_alias() {
        let named = NamedType::new("foo", Node::string());
        assert_eq!(
            emit(&named, &ToTsOptions::default(), &[]),
            "export type foo = string;"
        );
        let options = ToTsOptions {
            declaration: true,
            ..Default::default()
        };
        assert_eq!(
            emit(&named, &options, &[]),
            "export declare type foo = string;"
        );
    }

    #[test]
    fn test_enum_and_const() {
        let named = NamedType::new(
            "foo",
            Node::string().with_enum(vec![json!("foo"), json!("bar"), json!(-1)]),
        );
        assert_eq!(
            emit(&named, &ToTsOptions::default(), &[]),
            r#"export type foo = "foo" | "bar" | -1;"#
        );

        let falsy = NamedType::new("zero", Node::number().with_const(0));
        assert_eq!(
            emit(&falsy, &ToTsOptions::default(), &[]),
            "export type zero = 0;"
        );

        let tuple = NamedType::new("pair", Node::any().with_const(json!([1, "a", null])));
        assert_eq!(
            emit(&tuple, &ToTsOptions::default(), &[]),
            r#"export type pair = [1, "a", null];"#
        );
    }

    #[test]
    fn test_complex_object() {
        let named = NamedType::new(
            "foo",
            object(
                vec![
                    ("bar", Property::optional(Node::string())),
                    (
                        "baz",
                        Property::required(Node::or(vec![
                            Node::number(),
                            object(vec![], Additional::Node(Box::new(Node::boolean()))),
                        ])),
                    ),
                    ("bak", Property::required(object(vec![], Additional::Bool(true)))),
                    (
                        "tupleWithAdditionals",
                        Property::required(Node::tuple(
                            vec![Node::string()],
                            Additional::Node(Box::new(Node::number())),
                            1,
                        )),
                    ),
                    (
                        "with-dash",
                        Property::required(Node::any().with_description("Anything")),
                    ),
                ],
                Additional::Bool(false),
            ),
        );
        let options = ToTsOptions {
            declaration: true,
            use_unknown: true,
            ..Default::default()
        };
        insta::assert_snapshot!(emit(&named, &options, &[]), @r#"
        export declare interface foo {
            bar?: string;
            baz: number | {
                [key: string]: boolean;
            };
            bak: {
                [key: string]: unknown;
            };
            tupleWithAdditionals: [string, ...number[]];
            /** Anything */
            "with-dash": unknown;
        }
        "#);
    }

    #[test]
    fn test_union_members_annotated() {
        let named = NamedType::new(
            "Thingy",
            Node::or(vec![
                Node::reference("Thing").with_annotations(Annotations {
                    title: Some("Thingy".into()),
                    description: Some("Thing is the preferred type".into()),
                    ..Default::default()
                }),
                Node::number().with_description("Just a number"),
            ])
            .with_description("Thing ref"),
        );
        insta::assert_snapshot!(emit(&named, &ToTsOptions::default(), &[]), @r"
        /** Thing ref */
        export type Thingy = /** Thing is the preferred type */ Thing | /** Just a number */ number;
        ");
    }

    #[test]
    fn test_explicit_titles() {
        let named = NamedType::new(
            "User",
            object(
                vec![
                    (
                        "name",
                        Property::required(Node::string().with_annotations(Annotations {
                            title: Some("The real name".into()),
                            ..Default::default()
                        })),
                    ),
                    (
                        "tags",
                        Property::optional(Node::array(Node::string().with_annotations(
                            Annotations {
                                title: Some("User.tags.[]".into()),
                                ..Default::default()
                            },
                        ))),
                    ),
                    (
                        "id",
                        Property::required(Node::number().with_annotations(Annotations {
                            title: Some("User.id".into()),
                            ..Default::default()
                        })),
                    ),
                ],
                Additional::Bool(false),
            )
            .with_annotations(Annotations {
                title: Some("User type".into()),
                description: Some("Someone".into()),
                ..Default::default()
            }),
        );
        insta::assert_snapshot!(emit(&named, &ToTsOptions::default(), &[]), @r"
        /**
         * Someone
         *
         * @title User type
         */
        export interface User {
            /** @title The real name */
            name: string;
            tags?: string[];
            id: number;
        }
        ");
    }

    #[test]
    fn test_heritage() {
        let bar = NamedType::new(
            "bar",
            object(vec![("b", Property::required(Node::number()))], Additional::Bool(false)),
        );
        let baz = NamedType::new(
            "baz",
            object(vec![("z", Property::required(Node::boolean()))], Additional::Bool(false)),
        );
        let foo = NamedType::new(
            "foo",
            Node::and(vec![
                object(vec![("f", Property::required(Node::string()))], Additional::Bool(false)),
                Node::reference("bar"),
                Node::reference("baz"),
            ]),
        );
        let roots = vec![foo.clone(), bar, baz];
        insta::assert_snapshot!(emit(&foo, &ToTsOptions::default(), &roots), @r"
        export interface foo extends bar, baz {
            f: string;
        }
        ");
    }

    #[test]
    fn test_intersection_with_non_object_ref() {
        let bar = NamedType::new("bar", Node::null());
        let foo = NamedType::new(
            "foo",
            Node::and(vec![
                object(vec![("f", Property::optional(Node::string()))], Additional::Bool(false)),
                Node::reference("bar"),
            ]),
        );
        let roots = vec![foo.clone(), bar];
        insta::assert_snapshot!(emit(&foo, &ToTsOptions::default(), &roots), @r"
        export type foo = {
            f?: string;
        } & bar;
        ");
    }

    #[test]
    fn test_single_type_has_no_heritage() {
        let foo = NamedType::new(
            "foo",
            Node::and(vec![
                object(vec![], Additional::Bool(false)),
                Node::reference("bar"),
            ]),
        );
        let (statement, namespaces) =
            convert_single_core_type(&foo, &ToTsOptions::default()).unwrap();
        assert!(namespaces.is_empty());
        assert_eq!(TypeScriptWriter::emit(&statement), "export type foo = {} & bar;");
    }

    #[test]
    fn test_namespaces_split() {
        let named = NamedType::new("Foo_Bar_Baz", Node::number().with_const(42));
        let options = ToTsOptions {
            namespaces: NamespaceSplit::Underscore,
            ..Default::default()
        };
        let (statement, namespaces) = encode_declaration(&named, &options, &[]).unwrap();
        assert_eq!(namespaces, vec!["Foo".to_string(), "Bar".to_string()]);
        assert_eq!(TypeScriptWriter::emit(&statement), "export type Baz = 42;");
    }

    #[test]
    fn test_unknown_type_fails() {
        let node: Node = serde_json::from_value(json!({
            "type": "function",
            "loc": { "start": 4, "end": 9 }
        }))
        .unwrap();
        let err = encode_declaration(&NamedType::new("f", node), &ToTsOptions::default(), &[])
            .unwrap_err();
        match err {
            Error::Unsupported(e) => {
                assert_eq!(e.message, "Type unsupported not supported");
                assert_eq!(e.meta.loc.map(|l| l.start), Some(4));
            }
            other => panic!("expected unsupported error, got {:?}", other),
        }
    }
}
