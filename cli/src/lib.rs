//! hksave-cli
//!
//! File handling and log setup around `hksave-core`.
//! The command functions return the text to print so they can be driven
//! directly from tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hksave_core::document::parse_document;
use hksave_core::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "hksave")]
#[command(about = "Decode, edit and re-encode Hollow Knight save files", long_about = None)]
pub struct Cli {
    /// -v for debug logs and stage tracing, -vv for trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a save container to JSON
    Decode {
        /// Input file (.dat, .bak1 or .json)
        input: PathBuf,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of two-space indentation
        #[arg(long)]
        compact: bool,
    },

    /// Encode a JSON document into a save container
    Encode {
        /// Input JSON file
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Container kind, from the output extension when omitted
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Reformat a JSON document with two-space indentation
    Format {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a container and report how it was decoded
    Validate { input: PathBuf },

    /// Describe the framing of a container without decoding it
    Inspect { input: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Binary,
    Plain,
}

impl From<KindArg> for ContainerKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Binary => ContainerKind::Binary,
            KindArg::Plain => ContainerKind::PlainText,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Default codec; with `verbose` every stage is traced.
pub fn build_codec(verbose: u8) -> SaveCodec {
    let codec = SaveCodec::default();
    if verbose > 0 {
        codec.with_observer(Arc::new(TracingObserver))
    } else {
        codec
    }
}

/// Run one parsed command, returning what to print on stdout.
pub fn run(cli: &Cli) -> Result<String> {
    let codec = build_codec(cli.verbose);
    match &cli.command {
        Command::Decode { input, output, compact } => {
            decode(&codec, input, output.as_deref(), *compact)
        }
        Command::Encode { input, output, kind } => {
            encode(&codec, input, output, kind.map(ContainerKind::from))
        }
        Command::Format { input, output } => format(input, output.as_deref()),
        Command::Validate { input } => validate(&codec, input),
        Command::Inspect { input } => inspect(&codec, input),
    }
}

/// Kind from the file extension, binary when unknown.
fn kind_of(path: &Path) -> ContainerKind {
    ContainerKind::from_path(path).unwrap_or(ContainerKind::Binary)
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

pub fn decode(codec: &SaveCodec, input: &Path, output: Option<&Path>, compact: bool) -> Result<String> {
    let raw = read(input)?;
    let kind = kind_of(input);
    let decoded = codec
        .decode_container(kind, &raw)
        .with_context(|| format!("failed to decode {}", input.display()))?;
    info!(route = %decoded.route, kind = %kind, "decoded {}", input.display());

    let text = if compact {
        serde_json::to_string(&decoded.document)?
    } else {
        serde_json::to_string_pretty(&decoded.document)?
    };

    match output {
        Some(path) => {
            write(path, text.as_bytes())?;
            Ok(format!(
                "decoded {} ({}) to {} via {}",
                input.display(),
                format_size(raw.len() as u64),
                path.display(),
                decoded.route
            ))
        }
        None => Ok(text),
    }
}

pub fn encode(codec: &SaveCodec, input: &Path, output: &Path, kind: Option<ContainerKind>) -> Result<String> {
    let text = read_text(input)?;
    let doc = parse_document(&text)
        .with_context(|| format!("{} is not a valid JSON document", input.display()))?;

    let kind = kind.unwrap_or_else(|| kind_of(output));
    let raw = codec
        .encode_container(kind, &doc)
        .with_context(|| format!("failed to encode {}", input.display()))?;
    write(output, &raw)?;

    Ok(format!(
        "encoded {} to {} ({}, {})",
        input.display(),
        output.display(),
        kind,
        format_size(raw.len() as u64)
    ))
}

pub fn format(input: &Path, output: Option<&Path>) -> Result<String> {
    let text = read_text(input)?;
    let pretty = format_document(&text)
        .with_context(|| format!("failed to format {}", input.display()))?;

    match output {
        Some(path) => {
            write(path, pretty.as_bytes())?;
            Ok(format!("formatted {} to {}", input.display(), path.display()))
        }
        None => Ok(pretty),
    }
}

pub fn validate(codec: &SaveCodec, input: &Path) -> Result<String> {
    let raw = read(input)?;
    let decoded = codec
        .decode_container(kind_of(input), &raw)
        .with_context(|| format!("{} is not a valid save", input.display()))?;

    Ok(format!(
        "{}: valid ({}, {} document)",
        input.display(),
        decoded.route,
        format_size(decoded.text.len() as u64)
    ))
}

pub fn inspect(codec: &SaveCodec, input: &Path) -> Result<String> {
    let raw = read(input)?;
    let info = codec.inspect(&raw);

    let mut lines = vec![
        format!("file:      {}", input.display()),
        format!("kind:      {}", kind_of(input)),
        format!("size:      {} ({} bytes)", format_size(info.total_len as u64), info.total_len),
        format!("preamble:  {}", if info.preamble_found { "found" } else { "absent" }),
    ];
    if let (Some(declared), Some(prefix)) = (info.declared_len, info.prefix_len) {
        lines.push(format!("declared:  {declared} bytes ({prefix}-byte prefix)"));
    }
    lines.push(format!("available: {} bytes", info.payload_available));
    if info.is_truncated() {
        lines.push("status:    truncated".to_string());
    }
    Ok(lines.join("\n"))
}
