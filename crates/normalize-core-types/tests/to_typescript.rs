use std::sync::{Arc, Mutex};

use normalize_core_types::{
    Document, Error, ToTsOptions, UnsupportedPolicy, WarnFn, convert_core_types_to_typescript,
};
use serde_json::json;

fn document(value: serde_json::Value) -> Document {
    serde_json::from_value(value).unwrap()
}

fn bare() -> ToTsOptions {
    ToTsOptions {
        no_disable_lint_header: true,
        no_descriptive_header: true,
        ..Default::default()
    }
}

fn user_doc() -> Document {
    document(json!({
        "version": 1,
        "types": [
            {
                "name": "Entity",
                "type": "object",
                "properties": {
                    "id": { "node": { "type": "integer" }, "required": true }
                },
                "additionalProperties": false
            },
            {
                "name": "User",
                "description": "A registered user",
                "type": "and",
                "and": [
                    { "type": "ref", "ref": "Entity" },
                    {
                        "type": "object",
                        "properties": {
                            "name": {
                                "node": { "type": "string", "description": "Display name" },
                                "required": true
                            },
                            "email": {
                                "node": { "type": "or", "or": [{ "type": "string" }, { "type": "null" }] },
                                "required": false
                            },
                            "meta": { "node": { "type": "any" }, "required": false }
                        },
                        "additionalProperties": false
                    }
                ]
            },
            {
                "name": "Role",
                "type": "string",
                "enum": ["admin", "member"]
            }
        ]
    }))
}

#[test]
fn test_document_to_typescript() {
    let result = convert_core_types_to_typescript(&user_doc(), &bare()).unwrap();
    assert_eq!(result.converted_types, vec!["Entity", "User", "Role"]);
    insta::assert_snapshot!(result.data, @r#"
    export interface Entity {
        id: number;
    }

    /** A registered user */
    export interface User extends Entity {
        /** Display name */
        name: string;
        email?: string | null;
        meta?: any;
    }

    export type Role = "admin" | "member";
    "#);
}

#[test]
fn test_declaration_file_with_unknown() {
    let options = ToTsOptions {
        declaration: true,
        use_unknown: true,
        ..bare()
    };
    let result = convert_core_types_to_typescript(&user_doc(), &options).unwrap();
    insta::assert_snapshot!(result.data, @r#"
    export declare interface Entity {
        id: number;
    }

    /** A registered user */
    export declare interface User extends Entity {
        /** Display name */
        name: string;
        email?: string | null;
        meta?: unknown;
    }

    export declare type Role = "admin" | "member";
    "#);
}

#[test]
fn test_headers() {
    let doc = document(json!({
        "version": 1,
        "types": [{ "name": "Flag", "type": "boolean" }]
    }));
    let options = ToTsOptions {
        filename: Some("flags.ts".into()),
        user_package: Some("flagger".into()),
        user_package_url: Some("https://example.com/flagger".into()),
        ..Default::default()
    };
    let result = convert_core_types_to_typescript(&doc, &options).unwrap();
    insta::assert_snapshot!(result.data, @r"
    /* tslint:disable */
    /* eslint-disable */
    /**
     * This file (flags.ts) is auto-generated by normalize-core-types on behalf of flagger, DO NOT EDIT.
     *
     * For more information, see:
     *  - {@link https://github.com/rhi-zone/normalize}
     *  - {@link https://example.com/flagger}
     */

    export type Flag = boolean;
    ");
}

#[test]
fn test_unknown_type_is_reported_with_its_path() {
    let doc = document(json!({
        "version": 1,
        "types": [
            { "name": "Ok", "type": "string" },
            { "name": "Callback", "type": "function" }
        ]
    }));
    let err = convert_core_types_to_typescript(&doc, &bare()).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
    assert_eq!(err.meta().unwrap().path, vec!["Callback"]);
}

#[test]
fn test_warn_callback_is_not_used_for_valid_input() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = seen.clone();
    let options = ToTsOptions {
        unsupported: UnsupportedPolicy::Warn,
        warn: Some(WarnFn::new(move |msg, _| sink.lock().unwrap().push(msg.to_string()))),
        ..bare()
    };
    convert_core_types_to_typescript(&user_doc(), &options).unwrap();
    assert!(seen.lock().unwrap().is_empty());
}
