//! TypeScript writer for surface syntax.
//!
//! Prints declarations with 4-space indentation, one member per line and
//! leading doc comments.

use crate::syntax::*;
use crate::traits::Writer;

/// Static instance of the TypeScript writer.
pub static TYPESCRIPT_WRITER: TypeScriptWriterImpl = TypeScriptWriterImpl;

/// TypeScript writer implementing the Writer trait.
pub struct TypeScriptWriterImpl;

impl Writer for TypeScriptWriterImpl {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn write(&self, statement: &Statement) -> String {
        TypeScriptWriter::emit(statement)
    }
}

/// Emits surface syntax as TypeScript source code.
pub struct TypeScriptWriter {
    output: String,
    indent: usize,
}

impl Default for TypeScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScriptWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    /// Emit one statement, without a trailing newline.
    pub fn emit(statement: &Statement) -> String {
        let mut writer = Self::new();
        writer.write_statement(statement);
        writer.output
    }

    /// Emit a type expression on its own.
    pub fn emit_type(ty: &TypeExpr) -> String {
        let mut writer = Self::new();
        writer.write_type(ty);
        writer.output
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    /// A doc comment on its own line(s) at the current indentation.
    fn write_doc_block(&mut self, doc: Option<&str>) {
        let Some(doc) = doc else {
            return;
        };
        for line in doc.lines() {
            self.write_indent();
            self.output.push_str(line.trim_end());
            self.output.push('\n');
        }
    }

    /// A doc comment in front of a type expression, continuing its line.
    fn write_doc_inline(&mut self, doc: Option<&str>) {
        let Some(doc) = doc else {
            return;
        };
        for (i, line) in doc.lines().enumerate() {
            if i > 0 {
                self.output.push('\n');
                self.write_indent();
            }
            self.output.push_str(line.trim_end());
        }
        self.output.push(' ');
    }

    fn write_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::TypeAlias(alias) => {
                self.write_doc_block(alias.doc.as_deref());
                self.write_modifiers(alias.exported, alias.declare);
                self.output.push_str("type ");
                self.output.push_str(&alias.name);
                self.write_type_params(&alias.type_params);
                self.output.push_str(" = ");
                self.write_type(&alias.value);
                self.output.push(';');
            }

            Statement::Interface(interface) => {
                self.write_doc_block(interface.doc.as_deref());
                self.write_modifiers(interface.exported, interface.declare);
                self.output.push_str("interface ");
                self.output.push_str(&interface.name);
                self.write_type_params(&interface.type_params);
                if !interface.heritage.is_empty() {
                    self.output.push_str(" extends ");
                    for (i, parent) in interface.heritage.iter().enumerate() {
                        if i > 0 {
                            self.output.push_str(", ");
                        }
                        self.write_type(parent);
                    }
                }
                if interface.members.iter().all(|m| matches!(m, Member::Other(_))) {
                    self.output.push_str(" {}");
                } else {
                    self.output.push_str(" {\n");
                    self.write_members(&interface.members);
                    self.write_indent();
                    self.output.push('}');
                }
            }

            Statement::Namespace(namespace) => {
                self.write_indent();
                if namespace.exported {
                    self.output.push_str("export ");
                }
                self.output.push_str("namespace ");
                self.output.push_str(&namespace.path.join("."));
                self.output.push_str(" {\n");
                self.indent += 1;
                for (i, inner) in namespace.body.iter().enumerate() {
                    if i > 0 {
                        self.output.push('\n');
                    }
                    self.write_statement(inner);
                    self.output.push('\n');
                }
                self.indent -= 1;
                self.write_indent();
                self.output.push('}');
            }
        }
    }

    fn write_modifiers(&mut self, exported: bool, declare: bool) {
        if self.output.is_empty() || self.output.ends_with('\n') {
            self.write_indent();
        }
        if exported {
            self.output.push_str("export ");
        }
        if declare {
            self.output.push_str("declare ");
        }
    }

    fn write_type_params(&mut self, params: &[String]) {
        if !params.is_empty() {
            self.output.push('<');
            self.output.push_str(&params.join(", "));
            self.output.push('>');
        }
    }

    /// Members one per line, followed by a newline; indentation increases.
    fn write_members(&mut self, members: &[Member]) {
        self.indent += 1;
        for member in members {
            match member {
                Member::Property(property) => {
                    self.write_doc_block(property.doc.as_deref());
                    self.write_indent();
                    self.output.push_str(&property_name(&property.name));
                    if property.optional {
                        self.output.push('?');
                    }
                    if let Some(ty) = &property.ty {
                        self.output.push_str(": ");
                        self.write_type(ty);
                    }
                    self.output.push_str(";\n");
                }
                Member::Index(index) => {
                    self.write_doc_block(index.doc.as_deref());
                    self.write_indent();
                    self.output.push('[');
                    self.output.push_str(&index.param);
                    self.output.push_str(": ");
                    self.write_type(&index.key);
                    self.output.push_str("]: ");
                    self.write_type(&index.value);
                    self.output.push_str(";\n");
                }
                Member::Other(_) => {}
            }
        }
        self.indent -= 1;
    }

    fn write_type(&mut self, ty: &TypeExpr) {
        self.write_doc_inline(ty.doc.as_deref());

        match &ty.kind {
            TypeKind::Keyword(keyword) => self.output.push_str(keyword.as_str()),

            TypeKind::Literal(literal) => self.write_literal(literal),

            TypeKind::Reference { name, args, .. } => {
                self.output.push_str(name);
                if !args.is_empty() {
                    self.output.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            self.output.push_str(", ");
                        }
                        self.write_type(arg);
                    }
                    self.output.push('>');
                }
            }

            TypeKind::Array(element) => {
                let wrap = needs_parens_in_array(element);
                if wrap {
                    self.output.push('(');
                }
                self.write_type(element);
                if wrap {
                    self.output.push(')');
                }
                self.output.push_str("[]");
            }

            TypeKind::Tuple(elements) => {
                self.output.push('[');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.write_tuple_element(element);
                }
                self.output.push(']');
            }

            TypeKind::Union(members) => {
                self.write_operands(members, " | ", |m| matches!(m, TypeKind::Union(_)))
            }

            TypeKind::Intersection(members) => self.write_operands(members, " & ", |m| {
                matches!(m, TypeKind::Union(_) | TypeKind::Intersection(_))
            }),

            TypeKind::Object(members) => {
                if members.iter().all(|m| matches!(m, Member::Other(_))) {
                    self.output.push_str("{}");
                } else {
                    self.output.push_str("{\n");
                    self.write_members(members);
                    self.write_indent();
                    self.output.push('}');
                }
            }

            TypeKind::Parenthesized(inner) => {
                self.output.push('(');
                self.write_type(inner);
                self.output.push(')');
            }

            TypeKind::Unsupported(_) => self.output.push_str("any"),
        }
    }

    fn write_operands(
        &mut self,
        members: &[TypeExpr],
        separator: &str,
        needs_parens: impl Fn(&TypeKind) -> bool,
    ) {
        if members.is_empty() {
            // An empty union has no values; an empty intersection accepts anything.
            self.output
                .push_str(if separator == " | " { "never" } else { "unknown" });
            return;
        }
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                self.output.push_str(separator);
            }
            if needs_parens(&member.kind) {
                self.write_doc_inline(member.doc.as_deref());
                self.output.push('(');
                self.write_type(&TypeExpr {
                    doc: None,
                    ..member.clone()
                });
                self.output.push(')');
            } else {
                self.write_type(member);
            }
        }
    }

    fn write_tuple_element(&mut self, element: &TupleElement) {
        if element.kind == TupleElementKind::Rest {
            self.output.push_str("...");
        }
        match &element.label {
            Some(label) => {
                self.output.push_str(label);
                if element.kind == TupleElementKind::Optional {
                    self.output.push('?');
                }
                self.output.push_str(": ");
                self.write_type(&element.ty);
            }
            None => {
                self.write_type(&element.ty);
                if element.kind == TupleElementKind::Optional {
                    self.output.push('?');
                }
            }
        }
    }

    fn write_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::String(s) => self.output.push_str(&quote(s)),
            Literal::Number(n) => self.output.push_str(&n.to_string()),
            Literal::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Literal::Null => self.output.push_str("null"),
            Literal::Other(text) => self.output.push_str(text),
        }
    }
}

fn needs_parens_in_array(element: &TypeExpr) -> bool {
    matches!(
        element.kind,
        TypeKind::Union(_) | TypeKind::Intersection(_)
    ) || element.doc.is_some()
}

/// Double-quoted string literal.
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

/// Is `name` usable as a bare property name?
pub fn is_safe_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn property_name(name: &str) -> String {
    if is_safe_name(name) {
        name.to_string()
    } else {
        quote(name)
    }
}
