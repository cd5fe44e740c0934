//! bin2c - Convert binary files into C array literals
//!
//! This tool reads a binary file and writes out a C array of hex values,
//! for embedding payloads (firmware loaders, bootloaders, resource blobs)
//! directly in compiled source code.

use anyhow::{bail, Context, Result};
use bin2c_core::{encode_file, ByteOrder, ElementWidth, EncoderConfig};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Extension given to the output file when none is specified
const OUTPUT_EXTENSION: &str = "c";

/// Convert binary files into C array literals
#[derive(Parser, Debug)]
#[command(name = "bin2c")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Binary file to convert
    input: PathBuf,

    /// Output file (defaults to the input path with a .c extension)
    output: Option<PathBuf>,

    /// Size in bytes of each output array element
    #[arg(short, long, default_value = "1")]
    size: u32,

    /// Number of bytes to ignore at the beginning of the binary file
    #[arg(short, long, default_value = "0")]
    ignore: usize,

    /// Encode multi-byte elements least-significant byte first (default)
    #[arg(short, long, conflicts_with = "big_endian")]
    little_endian: bool,

    /// Encode multi-byte elements most-significant byte first
    #[arg(short, long)]
    big_endian: bool,

    /// Array name (defaults to the output file's base name)
    #[arg(short, long)]
    name: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    run(&cli)
}

/// Validate arguments and perform one conversion
fn run(cli: &Cli) -> Result<()> {
    // Width validation happens before touching either file, so an invalid
    // size never creates an output file.
    let width = ElementWidth::try_from(cli.size)?;

    if !cli.input.exists() {
        bail!("Input file does not exist: {}", cli.input.display());
    }
    if !cli.input.is_file() {
        bail!("Input path is not a file: {}", cli.input.display());
    }

    let output = derive_output_path(&cli.input, cli.output.as_deref());
    let array_name = match cli.name {
        Some(ref name) => name.clone(),
        None => derive_array_name(&output),
    };

    let byte_order = if cli.big_endian {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    debug!(
        "converting {} -> {} (width {}, skip {}, {:?} endian, name '{}')",
        cli.input.display(),
        output.display(),
        width.bytes(),
        cli.ignore,
        byte_order,
        array_name
    );

    let config = EncoderConfig::new()
        .width(width)
        .skip(cli.ignore)
        .byte_order(byte_order)
        .array_name(array_name);

    encode_file(&cli.input, &output, config)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    info!("wrote {}", output.display());
    Ok(())
}

/// Resolve the output path: explicit argument, or input with a .c extension
fn derive_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(OUTPUT_EXTENSION),
    }
}

/// Default array name: the output file's base name without extension
fn derive_array_name(output: &Path) -> String {
    output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("data")
        .to_string()
}
