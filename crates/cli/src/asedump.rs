//! asedump - Dump the contents of ASEF color swatch files
//!
//! Prints each file as a readable group/color listing, as JSON, or as a
//! stylesheet variable mapping.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asef_core::{
    Color, DecodeOptions, Document, FramingPolicy, OutputMode, Projection, decode_with_options,
};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Output type for the decoded swatches.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Human readable listing (default)
    #[default]
    Raw,
    /// Full document as JSON
    Json,
    /// RGB colors as a name -> rgb() mapping
    Stylesheet,
}

impl From<OutputType> for OutputMode {
    fn from(t: OutputType) -> Self {
        match t {
            OutputType::Raw => OutputMode::Raw,
            OutputType::Json => OutputMode::Json,
            OutputType::Stylesheet => OutputMode::Stylesheet,
        }
    }
}

/// How block length fields are treated.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Framing {
    /// Block payloads must match their declared length
    #[default]
    Strict,
    /// Skip padding up to the declared length
    Padded,
    /// Ignore declared lengths
    Implicit,
}

impl From<Framing> for FramingPolicy {
    fn from(f: Framing) -> Self {
        match f {
            Framing::Strict => FramingPolicy::Strict,
            Framing::Padded => FramingPolicy::Padded,
            Framing::Implicit => FramingPolicy::Implicit,
        }
    }
}

/// Dump the contents of ASEF color swatch files.
#[derive(Parser, Debug)]
#[command(name = "asedump")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to .ase files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "raw")]
    output_type: OutputType,

    /// Block length handling
    #[arg(long, value_enum, default_value = "strict")]
    framing: Framing,

    /// Fail if the header block count does not match the blocks decoded
    #[arg(long = "check-block-count", action = ArgAction::SetTrue)]
    check_block_count: bool,

    /// Indent JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Write a document as an indented group/color listing.
fn dump_document<W: Write>(out: &mut W, path: &Path, doc: &Document) -> io::Result<()> {
    writeln!(out, "{} (version {})", path.display(), doc.version)?;

    for group in &doc.groups {
        writeln!(out, "  group {:?} ({} colors)", group.name, group.len())?;
        for color in doc.group_colors(group) {
            writeln!(out, "    {}", format_color(color))?;
        }
    }

    let ungrouped: Vec<_> = doc.ungrouped_colors().collect();
    if !ungrouped.is_empty() {
        writeln!(out, "  ungrouped ({} colors)", ungrouped.len())?;
        for color in ungrouped {
            writeln!(out, "    {}", format_color(color))?;
        }
    }

    Ok(())
}

fn format_color(color: &Color) -> String {
    let channels: Vec<String> = color.channels.iter().map(|c| c.to_string()).collect();
    format!(
        "{:?} {} [{}] {}",
        color.name,
        color.model,
        channels.join(", "),
        color.color_type
    )
}

fn process_file<W: Write>(path: &Path, writer: &mut W, args: &Args) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), "read swatch file");

    let options = DecodeOptions {
        framing: args.framing.into(),
        check_block_count: args.check_block_count,
    };
    let projection = decode_with_options(&data, Some(args.output_type.into()), Some(options))
        .with_context(|| format!("decoding {}", path.display()))?;

    match projection {
        Projection::Document(doc) => dump_document(writer, path, &doc)?,
        Projection::Json(text) | Projection::Stylesheet(text) if args.pretty => {
            let value: serde_json::Value = serde_json::from_str(&text)?;
            writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        Projection::Json(text) | Projection::Stylesheet(text) => writeln!(writer, "{text}")?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("creating {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        process_file(path, &mut output, &args)?;
    }

    output.flush()?;
    Ok(())
}
