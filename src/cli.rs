use crate::config::{Config, load_config};
use crate::layout::compute_layout;
use crate::layout_dump::ChartDump;
use crate::parser::parse_document;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "lpl", version, about = "Column layout for learning-path prerequisite graphs")]
pub struct Args {
    /// Input document (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (layout geometry and output overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "layout")]
    pub format: OutputFormat,

    /// Emit single-line JSON
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw layout record
    Layout,
    /// Flat node/edge lists for a chart renderer
    Chart,
}

/// Logs go to stderr so stdout stays a clean JSON stream. Filter with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if args.compact {
        config.output.pretty = false;
    }

    let input = read_input(args.input.as_deref())?;
    let rendered = render_document(&input, &config, args.format)?;
    write_output(&rendered, args.output.as_deref())
}

pub fn render_document(input: &str, config: &Config, format: OutputFormat) -> Result<String> {
    let document = parse_document(input).context("failed to parse learning path document")?;
    let layout = compute_layout(&document.items, &document.edges, &config.layout);
    match format {
        OutputFormat::Layout => to_json(&layout, config.output.pretty),
        OutputFormat::Chart => {
            let dump = ChartDump::from_layout(&layout, &document.items);
            to_json(&dump, config.output.pretty)
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
