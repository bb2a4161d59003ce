//! `normalize-core-types` command line.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use normalize_core_types::{
    CoreTypesConfig, Document, FromTsOptions, NamespacePolicy, NamespaceSplit, NonExportedPolicy,
    Reader, TYPESCRIPT_READER, ToTsOptions, UnsupportedPolicy, convert_core_types_to_typescript,
    convert_typescript_to_core_types,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "normalize-core-types",
    version,
    about = "Convert between core-types JSON and TypeScript declarations"
)]
struct Cli {
    /// Config file (default: .normalize/core-types.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Core-types JSON to TypeScript
    ToTs(ToTsArgs),
    /// TypeScript to core-types JSON
    FromTs(FromTsArgs),
}

#[derive(clap::Args)]
struct ToTsArgs {
    /// Input file, or `-` for stdin
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write `unknown` instead of `any`
    #[arg(long)]
    use_unknown: bool,

    /// Write `export declare` declarations
    #[arg(long)]
    declaration: bool,

    #[arg(long, value_enum)]
    namespaces: Option<NamespaceSplit>,

    /// Output file name mentioned in the header
    #[arg(long)]
    filename: Option<String>,

    /// Source file name mentioned in the header
    #[arg(long)]
    source_filename: Option<String>,

    #[arg(long)]
    user_package: Option<String>,

    #[arg(long)]
    user_package_url: Option<String>,

    #[arg(long)]
    no_disable_lint_header: bool,

    #[arg(long)]
    no_descriptive_header: bool,
}

impl ToTsArgs {
    fn apply(&self, options: &mut ToTsOptions) {
        options.use_unknown |= self.use_unknown;
        options.declaration |= self.declaration;
        options.no_disable_lint_header |= self.no_disable_lint_header;
        options.no_descriptive_header |= self.no_descriptive_header;
        if let Some(namespaces) = self.namespaces {
            options.namespaces = namespaces;
        }
        for (target, value) in [
            (&mut options.filename, &self.filename),
            (&mut options.source_filename, &self.source_filename),
            (&mut options.user_package, &self.user_package),
            (&mut options.user_package_url, &self.user_package_url),
        ] {
            if value.is_some() {
                *target = value.clone();
            }
        }
    }
}

#[derive(clap::Args)]
struct FromTsArgs {
    /// Input file, or `-` for stdin
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    namespaces: Option<NamespacePolicy>,

    /// What to do with declarations that are not exported
    #[arg(long, value_enum)]
    non_exported: Option<NonExportedPolicy>,

    /// What to do with constructs that cannot be converted
    #[arg(long, value_enum)]
    unsupported: Option<UnsupportedPolicy>,
}

impl FromTsArgs {
    fn apply(&self, options: &mut FromTsOptions) {
        if let Some(namespaces) = self.namespaces {
            options.namespaces = namespaces;
        }
        if let Some(non_exported) = self.non_exported {
            options.non_exported = non_exported;
        }
        if let Some(unsupported) = self.unsupported {
            options.unsupported = unsupported;
        }
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn report_not_converted(names: &[String]) {
    if !names.is_empty() {
        tracing::warn!(types = %names.join(", "), "some types were not converted");
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CoreTypesConfig::load_file(path)?,
        None => CoreTypesConfig::load(Path::new("."))?,
    };

    match cli.command {
        Command::ToTs(args) => {
            let mut options = config.to_ts;
            args.apply(&mut options);

            let input = read_input(&args.input)?;
            let document: Document = serde_json::from_str(&input)
                .with_context(|| format!("invalid core-types document {}", args.input.display()))?;
            let result = convert_core_types_to_typescript(&document, &options)?;

            report_not_converted(&result.not_converted_types);
            write_output(args.output.as_deref(), &result.data)
        }
        Command::FromTs(args) => {
            let mut options = config.from_ts;
            args.apply(&mut options);

            if args.input.as_os_str() != "-" && !TYPESCRIPT_READER.accepts(&args.input) {
                tracing::warn!(input = %args.input.display(), "input does not look like TypeScript");
            }
            let input = read_input(&args.input)?;
            let result = convert_typescript_to_core_types(&input, &options)?;

            report_not_converted(&result.not_converted_types);
            let mut json = serde_json::to_string_pretty(&result.data)?;
            json.push('\n');
            write_output(args.output.as_deref(), &json)
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
