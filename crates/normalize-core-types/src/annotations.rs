//! Annotation codec.
//!
//! Maps IR [`Annotations`] to and from JSDoc comment blocks, and infers
//! titles from where a node sits in its declaration.

use crate::ir::{Annotations, OneOrMany};
use serde_json::Value;

/// One step of the path from a declaration down to a type node.
///
/// The decoder keeps a stack of these while it descends; the last entry is
/// the node being decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ancestor {
    /// Interface or type alias (flattened name).
    Declaration(String),
    /// Property signature.
    Property(String),
    /// `T[]`
    Array,
    /// Tuple, with the index of the element being descended into.
    Tuple(Option<usize>),
    /// `...T`
    Rest,
    /// `T?` inside a tuple.
    Optional,
    Union,
    Parenthesized,
    /// `{ ... }`
    ObjectLiteral,
    /// Any other node (keywords, references, intersections, index signatures, ...).
    Other,
}

/// Infer a dotted title from the ancestor chain, e.g. `Foo.bar.[]`.
pub fn infer_title(chain: &[Ancestor]) -> Option<String> {
    let mut names: Vec<String> = Vec::new();

    for i in (0..chain.len()).rev() {
        let parent = i.checked_sub(1).map(|p| &chain[p]);
        match &chain[i] {
            Ancestor::Array if matches!(parent, Some(Ancestor::Rest)) => {}
            Ancestor::Rest
            | Ancestor::Optional
            | Ancestor::Union
            | Ancestor::Parenthesized
            | Ancestor::ObjectLiteral => {}
            Ancestor::Array => names.push("[]".to_string()),
            Ancestor::Tuple(position) => {
                if let Some(position) = position {
                    names.push(position.to_string());
                }
            }
            Ancestor::Declaration(name) | Ancestor::Property(name) => names.push(name.clone()),
            Ancestor::Other => {
                // Unnamed nodes only pass their title through from containers
                // that don't name their children.
                let transparent = matches!(
                    parent,
                    Some(
                        Ancestor::Array
                            | Ancestor::Tuple(_)
                            | Ancestor::Optional
                            | Ancestor::Rest
                            | Ancestor::Union
                    )
                );
                if !transparent {
                    break;
                }
            }
        }
    }

    if names.is_empty() {
        return None;
    }
    names.reverse();
    Some(names.join("."))
}

/// Annotations for a node: its doc comment merged with the inferred title.
///
/// A `@title` tag replaces the inferred title.
pub fn decorate(doc: Option<&str>, chain: &[Ancestor]) -> Annotations {
    let parsed = doc.map(parse_doc);
    let explicit = parsed.as_ref().is_some_and(|p| p.tags.title.is_some());
    let title = Annotations {
        title: if explicit { None } else { infer_title(chain) },
        ..Default::default()
    };

    match parsed {
        Some(parsed) => Annotations::merge(&[
            Annotations {
                description: parsed.description,
                ..Default::default()
            },
            title,
            parsed.tags,
        ]),
        None => title,
    }
}

struct ParsedDoc {
    description: Option<String>,
    tags: Annotations,
}

/// Parse a raw `/** ... */` comment.
fn parse_doc(raw: &str) -> ParsedDoc {
    let inner = raw
        .trim()
        .strip_prefix("/**")
        .and_then(|s| s.strip_suffix("*/"))
        .unwrap_or(raw);
    let inner = inner.replace("*\\/", "*/");

    let lines: Vec<&str> = inner
        .lines()
        .map(|line| {
            let line = line.trim_start();
            match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            }
        })
        .collect();

    let mut description: Vec<&str> = Vec::new();
    // (tag, first line, continuation lines)
    let mut tags: Vec<(&str, &str, Vec<&str>)> = Vec::new();

    for line in lines {
        let trimmed = line.trim_start();
        let is_tag = trimmed
            .strip_prefix('@')
            .and_then(|s| s.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic());
        if is_tag {
            let body = &trimmed[1..];
            let (name, rest) = match body.find(char::is_whitespace) {
                Some(i) => (&body[..i], body[i..].trim()),
                None => (body, ""),
            };
            tags.push((name, rest, Vec::new()));
        } else if let Some((_, _, continuation)) = tags.last_mut() {
            continuation.push(line);
        } else {
            description.push(line);
        }
    }

    let mut title = None;
    let mut descriptions = Vec::new();
    let mut examples = Vec::new();
    let mut defaults = Vec::new();
    let mut see = Vec::new();

    for (name, first, continuation) in tags {
        let text = tag_text(first, &continuation);
        if text.is_empty() {
            continue;
        }
        match name {
            // Only the first line is the title; the rest is description.
            "title" => {
                let (first, rest) = text.split_once('\n').unwrap_or((&text, ""));
                title.get_or_insert_with(|| first.trim().to_string());
                if !rest.trim().is_empty() {
                    descriptions.push(rest.trim().to_string());
                }
            }
            "example" => examples.push(text),
            "default" => defaults.push(text),
            "see" => see.push(text),
            other => descriptions.push(format!("@{} {}", other, text)),
        }
    }

    let description = description.join("\n");
    let description = description.trim();

    ParsedDoc {
        description: (!description.is_empty()).then(|| description.to_string()),
        tags: Annotations {
            title,
            description: (!descriptions.is_empty()).then(|| descriptions.join("\n")),
            examples: OneOrMany::from_vec(examples),
            default: (!defaults.is_empty()).then(|| Value::String(defaults.join("\n"))),
            see: OneOrMany::from_vec(see),
        },
    }
}

/// Tag text with continuation lines de-indented by their common indentation.
fn tag_text(first: &str, continuation: &[&str]) -> String {
    let indent = continuation
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut lines = vec![first.to_string()];
    lines.extend(
        continuation
            .iter()
            .map(|l| l.get(indent..).unwrap_or("").trim_end().to_string()),
    );
    lines.join("\n").trim().to_string()
}

/// Render annotations as a comment block. `None` when there is nothing to say.
///
/// `inferred` is the title [`infer_title`] will give the node when it is read
/// back; a title equal to it is left out, any other becomes a `@title` tag.
pub fn stringify(annotations: &Annotations, inferred: Option<&str>) -> Option<String> {
    let mut sections: Vec<String> = Vec::new();

    if let Some(description) = &annotations.description {
        sections.push(description.clone());
    }
    if let Some(title) = &annotations.title {
        if Some(title.as_str()) != inferred {
            sections.push(format!("@title {}", title));
        }
    }
    if let Some(examples) = &annotations.examples {
        for example in examples.to_vec() {
            let body: Vec<String> = example.lines().map(|l| format!("    {}", l)).collect();
            sections.push(format!("@example\n{}", body.join("\n")));
        }
    }
    if let Some(default) = &annotations.default {
        let text = match default {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        sections.push(format!("@default {}", text));
    }
    if let Some(see) = &annotations.see {
        for link in see.to_vec() {
            sections.push(format!("@see {}", link));
        }
    }

    let text = sections.join("\n\n");
    let text = text.trim().replace("*/", "*\\/");
    if text.is_empty() {
        return None;
    }

    if text.contains('\n') {
        let body: Vec<String> = text
            .lines()
            .map(|line| {
                if line.is_empty() {
                    " *".to_string()
                } else {
                    format!(" * {}", line)
                }
            })
            .collect();
        Some(format!("/**\n{}\n */", body.join("\n")))
    } else {
        Some(format!("/** {} */", text))
    }
}
