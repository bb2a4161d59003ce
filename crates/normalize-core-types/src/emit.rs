//! Declaration emitter: a whole [`Document`] to TypeScript source text.

use crate::ConversionResult;
use crate::encode::encode_declaration;
use crate::error::{Error, ErrorMeta};
use crate::ir::{DOCUMENT_VERSION, Document};
use crate::options::ToTsOptions;
use crate::traits::Writer;

const GENERATOR: &str = "normalize-core-types";
const GENERATOR_URL: &str = "https://github.com/rhi-zone/normalize";

/// Convert every type of `document`, in order.
pub fn emit_document(
    document: &Document,
    options: &ToTsOptions,
    writer: &dyn Writer,
) -> Result<ConversionResult<String>, Error> {
    if document.version != DOCUMENT_VERSION {
        return Err(Error::malformed(
            format!("core-types version {} not supported", document.version),
            ErrorMeta::default(),
        ));
    }

    let mut blocks = Vec::with_capacity(document.types.len());
    for named in &document.types {
        let (statement, namespaces) = encode_declaration(named, options, &document.types)
            .map_err(|e| with_path(e, &named.name))?;
        blocks.push(wrap_namespaces(&writer.write(&statement), &namespaces));
    }

    let mut body = blocks.join("\n\n");
    if !body.ends_with('\n') {
        body.push('\n');
    }

    let data = format!("{}{}", prologue(options), body);
    tracing::debug!(types = document.types.len(), "emitted typescript");

    Ok(ConversionResult {
        data,
        converted_types: document.types.iter().map(|t| t.name.clone()).collect(),
        not_converted_types: Vec::new(),
    })
}

fn with_path(err: Error, name: &str) -> Error {
    match err {
        Error::Unsupported(mut e) => {
            e.meta.path.insert(0, name.to_string());
            Error::Unsupported(e)
        }
        other => other,
    }
}

/// `namespace A { namespace B {\n<code>\n} }`
fn wrap_namespaces(code: &str, namespaces: &[String]) -> String {
    if namespaces.is_empty() {
        return code.to_string();
    }
    let open: Vec<String> = namespaces
        .iter()
        .map(|ns| format!("namespace {} {{", ns))
        .collect();
    let close = vec!["}"; namespaces.len()];
    format!("{}\n{}\n{}", open.join(" "), code, close.join(" "))
}

/// Lint-disable markers and the "generated by" comment, each optional.
fn prologue(options: &ToTsOptions) -> String {
    let mut out = String::new();

    if !options.no_disable_lint_header {
        out.push_str("/* tslint:disable */\n/* eslint-disable */\n");
    }

    if !options.no_descriptive_header {
        let mut line = String::from("This file");
        if let Some(filename) = &options.filename {
            line.push_str(&format!(" ({})", filename));
        }
        line.push_str(" is auto-generated");
        if let Some(source) = &options.source_filename {
            line.push_str(&format!(" from {}", source));
        }
        line.push_str(&format!(" by {}", GENERATOR));
        if let Some(package) = &options.user_package {
            line.push_str(&format!(" on behalf of {}", package));
        }
        line.push_str(", DO NOT EDIT.");

        out.push_str("/**\n");
        out.push_str(&format!(" * {}\n", line));
        out.push_str(" *\n");
        out.push_str(" * For more information, see:\n");
        out.push_str(&format!(" *  - {{@link {}}}\n", GENERATOR_URL));
        if let Some(url) = &options.user_package_url {
            out.push_str(&format!(" *  - {{@link {}}}\n", url));
        }
        // The blank line keeps readers from attaching the header to the first type.
        out.push_str(" */\n\n");
    }

    out
}
