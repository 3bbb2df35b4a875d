//! EditParser - Edit decision list inspector
//!
//! Entry point: reads an edit list, parses it with the chosen format and
//! prints its events.

use anyhow::{bail, Context, Result};
use editparser_core::Base;
use editparser_edl::{Edit, EditList};
use editparser_formats::{FormatRegistry, ParseOptions, ParseReport};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE: &str = "usage: editparser <path> [--format NAME] [--base FPS] [--start HH:MM:SS:FF] [--config FILE] [--attributes]";

/// Command-line arguments.
#[derive(Debug, Default, PartialEq)]
struct Args {
    path: PathBuf,
    config: Option<PathBuf>,
    format: Option<String>,
    base: Option<u32>,
    start: Option<String>,
    attributes: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{flag} expects a value\n{USAGE}"))
        };
        match arg.as_str() {
            "--format" => parsed.format = Some(value("--format")?),
            "--base" => {
                let raw = value("--base")?;
                let fps = raw
                    .parse()
                    .with_context(|| format!("--base expects a frame rate, got '{raw}'"))?;
                parsed.base = Some(fps);
            }
            "--start" => parsed.start = Some(value("--start")?),
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--attributes" => parsed.attributes = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument '{arg}'\n{USAGE}"),
        }
    }

    parsed.path = path.with_context(|| format!("missing edit list path\n{USAGE}"))?;
    Ok(parsed)
}

/// Options from the config file (if any), overridden by flags.
fn load_options(args: &Args) -> Result<ParseOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_slice(&data)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ParseOptions::default(),
    };

    if let Some(format) = &args.format {
        options.format = format.clone();
    }
    if let Some(fps) = args.base {
        options.base = Base::new(fps)?;
    }
    if let Some(start) = &args.start {
        options.start_timecode = Some(start.clone());
    }
    Ok(options)
}

fn print_edit(edit: &Edit, with_attributes: bool) {
    println!("{:03}  {:<32} {}", edit.number(), edit.name(), edit);
    if with_attributes {
        let mut keys: Vec<&String> = edit.attributes().keys().collect();
        keys.sort();
        for key in keys {
            if let Some(value) = edit.get(key) {
                println!("       {key} = {value}");
            }
        }
    }
}

fn print_list(edl: &EditList, with_attributes: bool) {
    println!("TITLE:  {}", edl.title());
    println!("SOURCE: {}", edl.source_path());
    println!("START:  {} ({})", edl.start_timecode(), edl.base());
    println!("EDITS:  {}", edl.len());
    println!();
    for edit in edl {
        print_edit(edit, with_attributes);
    }
}

fn print_report(report: &ParseReport, with_attributes: bool) {
    print_list(&report.edl, with_attributes);
    if report.has_warnings() {
        println!();
        for warning in &report.warnings {
            println!("warning: {warning}");
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = parse_args(std::env::args().skip(1))?;
    let options = load_options(&args)?;
    info!(path = %args.path.display(), format = %options.format, "EditParser starting");

    let registry = FormatRegistry::new();
    let report = registry
        .parse_file(&args.path, &options)
        .with_context(|| format!("failed to parse {}", args.path.display()))?;

    print_report(&report, args.attributes);
    Ok(())
}
