use normalize_core_types::{
    Document, FromTsOptions, NamespacePolicy, NamespaceSplit, NodeKind, StructureEq, ToTsOptions,
    convert_core_types_to_typescript, convert_typescript_to_core_types,
};
use serde_json::json;

fn bare() -> ToTsOptions {
    ToTsOptions {
        no_disable_lint_header: true,
        no_descriptive_header: true,
        ..Default::default()
    }
}

fn round_trip(document: &Document, to_ts: &ToTsOptions, from_ts: &FromTsOptions) -> Document {
    let ts = convert_core_types_to_typescript(document, to_ts).unwrap();
    convert_typescript_to_core_types(&ts.data, from_ts)
        .unwrap()
        .data
}

#[test]
fn test_round_trip_preserves_structure() {
    let document: Document = serde_json::from_value(json!({
        "version": 1,
        "types": [
            {
                "name": "Base",
                "type": "object",
                "properties": {
                    "id": { "node": { "type": "string" }, "required": true }
                },
                "additionalProperties": false
            },
            {
                "name": "Post",
                "description": "A blog post",
                "examples": "{ id: 'p1' }",
                "type": "and",
                "and": [
                    { "type": "ref", "ref": "Base" },
                    {
                        "type": "object",
                        "properties": {
                            "title": {
                                "node": { "type": "string", "description": "Headline" },
                                "required": true
                            },
                            "tags": {
                                "node": { "type": "array", "elementType": { "type": "string" } },
                                "required": false
                            },
                            "author": {
                                "node": { "type": "or", "or": [{ "type": "ref", "ref": "Base" }, { "type": "null" }] },
                                "required": true
                            },
                            "position": {
                                "node": {
                                    "type": "tuple",
                                    "elementTypes": [{ "type": "number" }, { "type": "number" }],
                                    "additionalItems": false,
                                    "minItems": 2
                                },
                                "required": true
                            },
                            "extra": {
                                "node": {
                                    "type": "object",
                                    "properties": {},
                                    "additionalProperties": { "type": "boolean" }
                                },
                                "required": false
                            },
                            "status": {
                                "node": {
                                    "type": "or",
                                    "or": [
                                        { "type": "string", "const": "draft" },
                                        { "type": "string", "const": "published" }
                                    ]
                                },
                                "required": true
                            }
                        },
                        "additionalProperties": false
                    }
                ]
            }
        ]
    }))
    .unwrap();

    let back = round_trip(&document, &bare(), &FromTsOptions::default());
    assert!(
        back.structure_eq(&document),
        "round trip changed the document:\n{}",
        serde_json::to_string_pretty(&back).unwrap()
    );
}

#[test]
fn test_namespaces_round_trip() {
    let document: Document = serde_json::from_value(json!({
        "version": 1,
        "types": [
            { "name": "Foo_Bar_Baz", "type": "number", "const": 42 },
            { "name": "Bak", "type": "number", "const": 17 }
        ]
    }))
    .unwrap();

    let to_ts = ToTsOptions {
        namespaces: NamespaceSplit::Underscore,
        ..bare()
    };
    let ts = convert_core_types_to_typescript(&document, &to_ts).unwrap();
    assert_eq!(
        ts.data,
        "namespace Foo { namespace Bar {\nexport type Baz = 42;\n} }\n\nexport type Bak = 17;\n"
    );

    let from_ts = FromTsOptions {
        namespaces: NamespacePolicy::JoinUnderscore,
        ..Default::default()
    };
    let back = convert_typescript_to_core_types(&ts.data, &from_ts).unwrap();
    assert_eq!(back.converted_types, vec!["Foo_Bar_Baz", "Bak"]);
    assert!(back.data.structure_eq(&document));
}

#[test]
fn test_negative_literals_round_trip() {
    let source = "export type Num = 1000 | -1;\n";
    let document = convert_typescript_to_core_types(source, &FromTsOptions::default())
        .unwrap()
        .data;
    assert_eq!(
        serde_json::to_value(&document).unwrap(),
        json!({
            "version": 1,
            "types": [{
                "name": "Num",
                "type": "or",
                "or": [
                    { "type": "number", "const": 1000, "title": "Num" },
                    { "type": "number", "const": -1, "title": "Num" }
                ],
                "title": "Num"
            }]
        })
    );

    let ts = convert_core_types_to_typescript(&document, &bare()).unwrap();
    assert_eq!(ts.data, source);
}

#[test]
fn test_titles_round_trip() {
    let document: Document = serde_json::from_value(json!({
        "version": 1,
        "types": [
            {
                "name": "User",
                "title": "User type",
                "description": "Someone with an account",
                "type": "object",
                "properties": {
                    "name": {
                        "node": { "type": "string", "title": "The real name" },
                        "required": true
                    },
                    "tags": {
                        "node": {
                            "type": "array",
                            "elementType": { "type": "string", "title": "User.tags.[]" },
                            "title": "User.tags"
                        },
                        "required": false
                    },
                    "role": {
                        "node": {
                            "type": "or",
                            "or": [
                                { "type": "string", "const": "admin", "title": "Administrator" },
                                { "type": "string", "const": "member", "title": "User.role" }
                            ]
                        },
                        "required": true
                    }
                },
                "additionalProperties": false
            },
            { "name": "Plain", "title": "Plain", "type": "boolean" }
        ]
    }))
    .unwrap();

    let ts = convert_core_types_to_typescript(&document, &bare()).unwrap();
    // Titles the reader infers on its own are not written.
    assert_eq!(ts.data.matches("@title").count(), 3);
    assert!(!ts.data.contains("@title User.tags"));
    assert!(!ts.data.contains("@title User.role"));
    assert!(!ts.data.contains("@title Plain"));

    let back = convert_typescript_to_core_types(&ts.data, &FromTsOptions::default())
        .unwrap()
        .data;
    assert!(back.structure_eq(&document));

    let user = back.get("User").unwrap();
    assert_eq!(user.node.annotations.title.as_deref(), Some("User type"));
    assert_eq!(
        user.node.annotations.description.as_deref(),
        Some("Someone with an account")
    );
    let NodeKind::Object { properties, .. } = &user.node.kind else {
        panic!("expected object");
    };
    assert_eq!(
        properties["name"].node.annotations.title.as_deref(),
        Some("The real name")
    );
    assert_eq!(properties["tags"].node.annotations.title.as_deref(), Some("User.tags"));
    let NodeKind::Array { element_type } = &properties["tags"].node.kind else {
        panic!("expected array");
    };
    assert_eq!(element_type.annotations.title.as_deref(), Some("User.tags.[]"));
    let NodeKind::Or { or } = &properties["role"].node.kind else {
        panic!("expected union");
    };
    assert_eq!(or[0].annotations.title.as_deref(), Some("Administrator"));
    assert_eq!(or[1].annotations.title.as_deref(), Some("User.role"));

    assert_eq!(
        back.get("Plain").unwrap().node.annotations.title.as_deref(),
        Some("Plain")
    );
}
