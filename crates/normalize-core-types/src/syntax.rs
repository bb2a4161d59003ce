//! Reduced TypeScript surface syntax.
//!
//! The subset of TypeScript that carries type declarations, as a closed set
//! of variants. Readers lower a full grammar into these types; writers print
//! them. Conversion code only ever matches on these types.

use crate::ir::Location;

/// Byte-offset range of a syntax node in its source text.
pub type Span = Location;

/// A parsed source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFile {
    pub statements: Vec<Statement>,
}

/// Top-level or namespace-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Interface(InterfaceDecl),
    TypeAlias(TypeAliasDecl),
    Namespace(NamespaceDecl),
}

impl Statement {
    pub fn span(&self) -> Option<Span> {
        match self {
            Statement::Interface(d) => d.span,
            Statement::TypeAlias(d) => d.span,
            Statement::Namespace(d) => d.span,
        }
    }
}

/// `interface Name<T> extends A, B { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: String,
    pub exported: bool,
    pub declare: bool,
    /// Names of the type parameters, if any.
    pub type_params: Vec<String>,
    pub heritage: Vec<TypeExpr>,
    pub members: Vec<Member>,
    /// Raw leading `/** ... */` comment.
    pub doc: Option<String>,
    pub span: Option<Span>,
}

/// `type Name<T> = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub name: String,
    pub exported: bool,
    pub declare: bool,
    pub type_params: Vec<String>,
    pub value: TypeExpr,
    pub doc: Option<String>,
    pub span: Option<Span>,
}

/// `namespace A.B { ... }` (also `module`).
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    /// Dotted names are split: `namespace A.B` has path `["A", "B"]`.
    pub path: Vec<String>,
    pub exported: bool,
    pub body: Vec<Statement>,
    pub span: Option<Span>,
}

/// Member of an interface body or object literal type.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property(PropertySignature),
    Index(IndexSignature),
    /// Methods, call and construct signatures.
    Other(Option<Span>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    /// Unquoted property name.
    pub name: String,
    pub optional: bool,
    /// Absent for `foo;` without an annotation.
    pub ty: Option<TypeExpr>,
    pub doc: Option<String>,
    pub span: Option<Span>,
}

/// `[param: key]: value`
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    pub param: String,
    pub key: TypeExpr,
    pub value: TypeExpr,
    pub doc: Option<String>,
    pub span: Option<Span>,
}

/// A type expression with its own leading doc comment.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    pub kind: TypeKind,
    pub doc: Option<String>,
    pub span: Option<Span>,
}

impl TypeExpr {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            doc: None,
            span: None,
        }
    }

    pub fn keyword(keyword: Keyword) -> Self {
        Self::new(TypeKind::Keyword(keyword))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Reference {
            name: name.into(),
            qualified: false,
            args: Vec::new(),
        })
    }

    pub fn literal(literal: Literal) -> Self {
        Self::new(TypeKind::Literal(literal))
    }

    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Keyword(Keyword),
    Literal(Literal),
    /// `Name`, `A.B` (qualified) or `Name<Args>`.
    Reference {
        name: String,
        qualified: bool,
        args: Vec<TypeExpr>,
    },
    /// `T[]`
    Array(Box<TypeExpr>),
    Tuple(Vec<TupleElement>),
    Union(Vec<TypeExpr>),
    Intersection(Vec<TypeExpr>),
    /// `{ ... }`
    Object(Vec<Member>),
    /// `( T )`
    Parenthesized(Box<TypeExpr>),
    /// Anything else, named by its grammar kind.
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Any,
    Unknown,
    String,
    Number,
    Boolean,
    Object,
    Never,
    Void,
    Undefined,
    Symbol,
    BigInt,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Any => "any",
            Keyword::Unknown => "unknown",
            Keyword::String => "string",
            Keyword::Number => "number",
            Keyword::Boolean => "boolean",
            Keyword::Object => "object",
            Keyword::Never => "never",
            Keyword::Void => "void",
            Keyword::Undefined => "undefined",
            Keyword::Symbol => "symbol",
            Keyword::BigInt => "bigint",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "any" => Keyword::Any,
            "unknown" => Keyword::Unknown,
            "string" => Keyword::String,
            "number" => Keyword::Number,
            "boolean" => Keyword::Boolean,
            "object" => Keyword::Object,
            "never" => Keyword::Never,
            "void" => Keyword::Void,
            "undefined" => Keyword::Undefined,
            "symbol" => Keyword::Symbol,
            "bigint" => Keyword::BigInt,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    /// Negative numbers included (`-1`).
    Number(serde_json::Number),
    Boolean(bool),
    Null,
    /// Template literals, bigint literals, ... kept as source text.
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleElement {
    pub kind: TupleElementKind,
    /// For `...T[]`, the whole `T[]` array expression.
    pub ty: TypeExpr,
    /// Label of a named member (`[name: string]`).
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleElementKind {
    Required,
    /// `T?`
    Optional,
    /// `...T`
    Rest,
}
