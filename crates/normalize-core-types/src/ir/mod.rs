//! Core-types intermediate representation.
//!
//! A [`Document`] is an ordered list of [`NamedType`]s. Each type is a tree of
//! [`Node`]s: a [`NodeKind`] tag plus optional `const`/`enum` values and
//! documentation [`Annotations`].
//!
//! The serde representation is the JSON form shared by every core-types
//! converter:
//!
//! ```json
//! {
//!   "version": 1,
//!   "types": [
//!     {
//!       "name": "User",
//!       "type": "object",
//!       "properties": {
//!         "name": { "node": { "type": "string" }, "required": true }
//!       },
//!       "additionalProperties": false
//!     }
//!   ]
//! }
//! ```

mod structure_eq;

pub use structure_eq::StructureEq;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only document version this crate reads and writes.
pub const DOCUMENT_VERSION: u32 = 1;

/// A set of named types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: u32,
    pub types: Vec<NamedType>,
}

impl Document {
    pub fn new(types: Vec<NamedType>) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            types,
        }
    }

    /// Find a type by name.
    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// A node with a unique name, the unit of a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    #[serde(flatten)]
    pub node: Node,
}

impl NamedType {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

/// One node of a type tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,

    /// Fixes the type to exactly this value.
    #[serde(rename = "const", default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,

    /// Restricts the type to one of these values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<Value>>,

    #[serde(flatten)]
    pub annotations: Annotations,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// The type tag of a [`Node`] and its variant-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Any,
    Null,
    String,
    Number,
    Integer,
    Boolean,
    Object {
        #[serde(default)]
        properties: IndexMap<String, Property>,
        #[serde(rename = "additionalProperties", default)]
        additional_properties: Additional,
    },
    Array {
        #[serde(rename = "elementType")]
        element_type: Box<Node>,
    },
    Tuple {
        #[serde(rename = "elementTypes", default)]
        element_types: Vec<Node>,
        #[serde(rename = "additionalItems", default)]
        additional_items: Additional,
        #[serde(rename = "minItems", default)]
        min_items: usize,
    },
    Or {
        or: Vec<Node>,
    },
    And {
        and: Vec<Node>,
    },
    Ref {
        #[serde(rename = "ref")]
        reference: String,
    },
    /// Any `type` tag this crate does not know. Rejected by the encoder.
    #[serde(other)]
    Unsupported,
}

impl NodeKind {
    /// The JSON `type` tag.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Any => "any",
            NodeKind::Null => "null",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Integer => "integer",
            NodeKind::Boolean => "boolean",
            NodeKind::Object { .. } => "object",
            NodeKind::Array { .. } => "array",
            NodeKind::Tuple { .. } => "tuple",
            NodeKind::Or { .. } => "or",
            NodeKind::And { .. } => "and",
            NodeKind::Ref { .. } => "ref",
            NodeKind::Unsupported => "unsupported",
        }
    }
}

/// An object property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub node: Node,
    pub required: bool,
}

impl Property {
    pub fn required(node: Node) -> Self {
        Self {
            node,
            required: true,
        }
    }

    pub fn optional(node: Node) -> Self {
        Self {
            node,
            required: false,
        }
    }
}

/// `additionalProperties` of objects and `additionalItems` of tuples:
/// forbidden (`false`), anything (`true`), or a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Additional {
    Bool(bool),
    Node(Box<Node>),
}

impl Default for Additional {
    fn default() -> Self {
        Additional::Bool(false)
    }
}

impl Additional {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Additional::Bool(false))
    }
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            constant: None,
            enumeration: None,
            annotations: Annotations::default(),
            loc: None,
        }
    }

    pub fn any() -> Self {
        Self::new(NodeKind::Any)
    }

    pub fn null() -> Self {
        Self::new(NodeKind::Null)
    }

    pub fn string() -> Self {
        Self::new(NodeKind::String)
    }

    pub fn number() -> Self {
        Self::new(NodeKind::Number)
    }

    pub fn integer() -> Self {
        Self::new(NodeKind::Integer)
    }

    pub fn boolean() -> Self {
        Self::new(NodeKind::Boolean)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Ref {
            reference: name.into(),
        })
    }

    pub fn array(element: Node) -> Self {
        Self::new(NodeKind::Array {
            element_type: Box::new(element),
        })
    }

    pub fn object(properties: IndexMap<String, Property>, additional: Additional) -> Self {
        Self::new(NodeKind::Object {
            properties,
            additional_properties: additional,
        })
    }

    pub fn tuple(element_types: Vec<Node>, additional: Additional, min_items: usize) -> Self {
        Self::new(NodeKind::Tuple {
            element_types,
            additional_items: additional,
            min_items,
        })
    }

    pub fn or(members: Vec<Node>) -> Self {
        Self::new(NodeKind::Or { or: members })
    }

    pub fn and(members: Vec<Node>) -> Self {
        Self::new(NodeKind::And { and: members })
    }

    pub fn with_const(mut self, value: impl Into<Value>) -> Self {
        self.constant = Some(value.into());
        self
    }

    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.enumeration = Some(values);
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.annotations.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.annotations.description = Some(description.into());
        self
    }

    pub fn with_loc(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    /// `true` for a bare `any` with nothing attached but annotations.
    pub fn is_plain_any(&self) -> bool {
        matches!(self.kind, NodeKind::Any) && self.constant.is_none() && self.enumeration.is_none()
    }

    /// Does this tree contain a `ref` to `name`?
    ///
    /// Walks `and`/`or`, array elements, tuple elements and object properties
    /// (including additional properties/items).
    pub fn references(&self, name: &str) -> bool {
        match &self.kind {
            NodeKind::Ref { reference } => reference == name,
            NodeKind::And { and: members } | NodeKind::Or { or: members } => {
                members.iter().any(|m| m.references(name))
            }
            NodeKind::Array { element_type } => element_type.references(name),
            NodeKind::Tuple {
                element_types,
                additional_items,
                ..
            } => {
                element_types.iter().any(|e| e.references(name))
                    || matches!(additional_items, Additional::Node(n) if n.references(name))
            }
            NodeKind::Object {
                properties,
                additional_properties,
            } => {
                properties.values().any(|p| p.node.references(name))
                    || matches!(additional_properties, Additional::Node(n) if n.references(name))
            }
            _ => false,
        }
    }
}

/// Documentation attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see: Option<OneOrMany>,
}

impl Annotations {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.examples.is_none()
            && self.default.is_none()
            && self.see.is_none()
    }

    /// Overlay `top` onto `self`: every field present in `top` wins.
    pub fn layer(&mut self, top: Annotations) {
        if top.title.is_some() {
            self.title = top.title;
        }
        if top.description.is_some() {
            self.description = top.description;
        }
        if top.examples.is_some() {
            self.examples = top.examples;
        }
        if top.default.is_some() {
            self.default = top.default;
        }
        if top.see.is_some() {
            self.see = top.see;
        }
    }

    /// Combine several annotation sets into one.
    ///
    /// Titles join with `", "`, descriptions and defaults with newlines;
    /// examples and see-links concatenate. Duplicates are dropped and a
    /// single-element list collapses to a plain string.
    pub fn merge(sets: &[Annotations]) -> Annotations {
        fn join(parts: Vec<String>, separator: &str) -> Option<String> {
            let mut unique: Vec<String> = Vec::new();
            for part in parts {
                if !part.is_empty() && !unique.contains(&part) {
                    unique.push(part);
                }
            }
            let joined = unique.join(separator);
            let joined = joined.trim();
            (!joined.is_empty()).then(|| joined.to_string())
        }

        fn concat(lists: impl Iterator<Item = Vec<String>>) -> Option<OneOrMany> {
            let mut unique: Vec<String> = Vec::new();
            for item in lists.flatten() {
                if !item.is_empty() && !unique.contains(&item) {
                    unique.push(item);
                }
            }
            OneOrMany::from_vec(unique)
        }

        let default_text = |value: &Value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Annotations {
            title: join(sets.iter().filter_map(|a| a.title.clone()).collect(), ", "),
            description: join(
                sets.iter().filter_map(|a| a.description.clone()).collect(),
                "\n",
            ),
            examples: concat(sets.iter().map(|a| {
                a.examples.as_ref().map(OneOrMany::to_vec).unwrap_or_default()
            })),
            default: join(
                sets.iter()
                    .filter_map(|a| a.default.as_ref().map(default_text))
                    .collect(),
                "\n",
            )
            .map(Value::String),
            see: concat(
                sets.iter()
                    .map(|a| a.see.as_ref().map(OneOrMany::to_vec).unwrap_or_default()),
            ),
        }
    }
}

/// A string or a list of strings (`examples`, `see`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s.clone()],
            OneOrMany::Many(v) => v.clone(),
        }
    }

    /// `None` for an empty list, a plain string for a single element.
    pub fn from_vec(mut items: Vec<String>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(OneOrMany::One),
            _ => Some(OneOrMany::Many(items)),
        }
    }
}

/// Byte-offset range in a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: usize,
    pub end: usize,
}

impl Location {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Resolve the offsets to line/column positions in `source`.
    pub fn resolve(&self, source: &str) -> SourceRange {
        SourceRange {
            start: Position::at(source, self.start),
            end: Position::at(source, self.end),
        }
    }

    /// The source text covered by this location, if it lies within `source`.
    pub fn snippet<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

/// A resolved position: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    fn at(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Self {
            offset,
            line,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

/// A resolved [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}
