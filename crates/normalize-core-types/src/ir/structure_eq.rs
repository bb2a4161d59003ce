//! Structural equality for IR types.
//!
//! `structure_eq` compares IR trees ignoring fields that a conversion through
//! TypeScript does not carry verbatim.
//!
//! # Ignored Fields
//!
//! - `Annotations::title` - re-inferred from syntactic position on decode
//! - `Node::loc` - source offsets of whichever text the node came from
//!
//! # Core Fields (must match exactly)
//!
//! - Type tags, property names and `required` flags
//! - `const` / `enum` values
//! - Descriptions, examples, defaults, see-links

use super::{Additional, Annotations, Document, NamedType, Node, NodeKind, Property};

/// Trait for structural equality comparison.
///
/// Unlike `PartialEq`, this ignores titles and source locations.
pub trait StructureEq {
    /// Compare two values for structural equality.
    fn structure_eq(&self, other: &Self) -> bool;
}

impl StructureEq for Document {
    fn structure_eq(&self, other: &Self) -> bool {
        self.version == other.version && vec_structure_eq(&self.types, &other.types)
    }
}

impl StructureEq for NamedType {
    fn structure_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.node.structure_eq(&other.node)
    }
}

impl StructureEq for Node {
    fn structure_eq(&self, other: &Self) -> bool {
        self.kind.structure_eq(&other.kind)
            && self.constant == other.constant
            && self.enumeration == other.enumeration
            && self.annotations.structure_eq(&other.annotations)
    }
}

impl StructureEq for Annotations {
    // Ignore `title`
    fn structure_eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.examples == other.examples
            && self.default == other.default
            && self.see == other.see
    }
}

impl StructureEq for NodeKind {
    fn structure_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                NodeKind::Object {
                    properties: p1,
                    additional_properties: a1,
                },
                NodeKind::Object {
                    properties: p2,
                    additional_properties: a2,
                },
            ) => {
                p1.len() == p2.len()
                    && p1
                        .iter()
                        .zip(p2)
                        .all(|((k1, v1), (k2, v2))| k1 == k2 && v1.structure_eq(v2))
                    && a1.structure_eq(a2)
            }

            (NodeKind::Array { element_type: e1 }, NodeKind::Array { element_type: e2 }) => {
                e1.structure_eq(e2)
            }

            (
                NodeKind::Tuple {
                    element_types: e1,
                    additional_items: a1,
                    min_items: m1,
                },
                NodeKind::Tuple {
                    element_types: e2,
                    additional_items: a2,
                    min_items: m2,
                },
            ) => vec_structure_eq(e1, e2) && a1.structure_eq(a2) && m1 == m2,

            (NodeKind::Or { or: a }, NodeKind::Or { or: b })
            | (NodeKind::And { and: a }, NodeKind::And { and: b }) => vec_structure_eq(a, b),

            (a, b) => a == b,
        }
    }
}

impl StructureEq for Property {
    fn structure_eq(&self, other: &Self) -> bool {
        self.required == other.required && self.node.structure_eq(&other.node)
    }
}

impl StructureEq for Additional {
    fn structure_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Additional::Bool(a), Additional::Bool(b)) => a == b,
            (Additional::Node(a), Additional::Node(b)) => a.structure_eq(b),
            // `true` and an `any` node admit the same values
            (Additional::Bool(true), Additional::Node(n))
            | (Additional::Node(n), Additional::Bool(true)) => n.is_plain_any(),
            _ => false,
        }
    }
}

fn vec_structure_eq<T: StructureEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structure_eq(y))
}
