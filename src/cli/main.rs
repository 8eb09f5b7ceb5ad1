use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use exif_normalize::record::{Field, FieldValue, Record};
use exif_normalize::source::JsonDumpSource;
use exif_normalize::{config, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "exif-normalize",
    version,
    about = "Normalize exiftool tag dumps into canonical photo/video metadata"
)]
struct Cli {
    /// Tag dump files (`exiftool -j -G1`) or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Emit latitude/longitude as decimal text instead of numbers
    #[arg(long)]
    human: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Include the raw tags in the output
    #[arg(long)]
    raw: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    if cli.paths.is_empty() {
        anyhow::bail!("No input files or directories specified. Use --help for usage.");
    }

    let mut config = config::Config::load(cli.config.as_deref())?;
    if cli.human {
        config.mapper.numeric = false;
    }
    if cli.raw {
        config.output.include_raw = true;
    }

    let dumps = pipeline::collect_dumps(&cli.paths);
    if dumps.is_empty() {
        anyhow::bail!("No tag dumps found in the specified paths.");
    }
    log::info!("Found {} dump(s) to process", dumps.len());

    let mapper = config.build_mapper();
    let results = pipeline::normalize_all(&dumps, &JsonDumpSource, &mapper);

    if cli.json {
        let json_results: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                let records: Vec<serde_json::Value> = r
                    .records
                    .iter()
                    .map(|record| {
                        let mut entry = serde_json::json!({ "fields": record.fields() });
                        if config.output.include_raw {
                            entry["raw"] = serde_json::json!(record.raw());
                        }
                        entry
                    })
                    .collect();
                serde_json::json!({
                    "path": r.path.display().to_string(),
                    "records": records,
                    "error": r.error,
                })
            })
            .collect();

        if config.output.pretty {
            println!("{}", serde_json::to_string_pretty(&json_results)?);
        } else {
            println!("{}", serde_json::to_string(&json_results)?);
        }
    } else {
        for result in &results {
            match result.error {
                Some(ref err) => log::error!("{}: {err}", result.path.display()),
                None => {
                    for record in &result.records {
                        print_record(record, config.output.include_raw);
                    }
                }
            }
        }
    }

    let success = results.iter().filter(|r| r.error.is_none()).count();
    let failed = results.len() - success;
    let records: usize = results.iter().map(|r| r.records.len()).sum();
    log::info!(
        "Done: {records} record(s), {success} dump(s) succeeded, {failed} failed"
    );

    Ok(())
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Max width for the value column before wrapping.
const VAL_WIDTH: usize = 46;
/// Indent for continuation lines (tag column width + " : " = 25 chars + 2 leading spaces).
const INDENT: &str = "                           ";

/// Display sections, in print order.
const SECTIONS: &[(&str, &[Field])] = &[
    (
        "Camera / Device",
        &[Field::Make, Field::Camera, Field::Lens, Field::Software],
    ),
    (
        "Capture Settings",
        &[
            Field::CreationDate,
            Field::Exposure,
            Field::Aperture,
            Field::Iso,
            Field::FocalLength,
            Field::FocusDistance,
        ],
    ),
    (
        "Image Properties",
        &[
            Field::Width,
            Field::Height,
            Field::Orientation,
            Field::ColorSpace,
            Field::HorizontalResolution,
            Field::VerticalResolution,
        ],
    ),
    (
        "Video",
        &[
            Field::Framerate,
            Field::Duration,
            Field::ContentIdentifier,
            Field::MicroVideoOffset,
        ],
    ),
    (
        "GPS",
        &[
            Field::Gps,
            Field::Latitude,
            Field::Longitude,
            Field::Altitude,
            Field::ImageDirection,
        ],
    ),
    (
        "Location",
        &[Field::City, Field::Sublocation, Field::State, Field::Country],
    ),
    (
        "Descriptive Metadata",
        &[
            Field::Title,
            Field::Headline,
            Field::Caption,
            Field::Description,
            Field::Keywords,
            Field::Author,
            Field::JobTitle,
            Field::Credit,
            Field::Source,
            Field::Copyright,
        ],
    ),
    (
        "File",
        &[Field::FileName, Field::MimeType, Field::FileSize],
    ),
];

/// Print a canonical record, organized by section.
fn print_record(record: &Record, include_raw: bool) {
    let title = record
        .raw()
        .get("SourceFile")
        .and_then(|v| v.as_text())
        .or_else(|| record.file_name().and_then(|v| v.as_str()))
        .unwrap_or("(unnamed)");

    println!();
    println!("{BOLD}File:{RESET} {title}");
    println!("{DIM}{}{RESET}", "═".repeat(72));

    for (section, fields) in SECTIONS {
        let present: Vec<(Field, &FieldValue)> = fields
            .iter()
            .filter_map(|&field| record.entry(field).map(|slot| (field, slot)))
            .collect();
        if present.is_empty() {
            continue;
        }

        println!("  {BOLD}{section}{RESET}");
        println!("  {DIM}{}{RESET}", "─".repeat(70));
        for (field, slot) in present {
            match slot {
                FieldValue::Present(value) => print_row(field.as_str(), &value.to_string()),
                FieldValue::Absent => print_unusable(field.as_str()),
            }
        }
        println!();
    }

    if record.fields().is_empty() {
        println!("  {DIM}(no recognized metadata found){RESET}");
        println!();
    }

    if include_raw && !record.raw().is_empty() {
        println!("  {BOLD}Raw Tags{RESET}");
        println!("  {DIM}{}{RESET}", "─".repeat(70));
        for (key, value) in record.raw().iter() {
            let text = match serde_json::to_value(value) {
                Ok(serde_json::Value::String(s)) => s,
                Ok(other) => other.to_string(),
                Err(_) => String::new(),
            };
            print_raw_row(key, &text);
        }
        println!();
    }
}

/// Print a single row in the record display table.
fn print_row(tag: &str, val: &str) {
    let tag_col = format!("{:<22}", tag);
    let lines = wrap_text(val, VAL_WIDTH);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            println!("  {GREEN}{tag_col}{RESET} : {line}");
        } else {
            println!("  {INDENT}{line}");
        }
    }
}

/// Print a raw tag row; raw keys are wider than canonical names.
fn print_raw_row(key: &str, val: &str) {
    let lines = wrap_text(val, VAL_WIDTH);
    println!("  {DIM}{key}{RESET}");
    for line in &lines {
        println!("  {INDENT}{line}");
    }
}

/// Print a field recognized in the raw tags whose value could not be used (dimmed).
fn print_unusable(tag: &str) {
    let tag_col = format!("{:<22}", tag);
    println!("  {DIM}{tag_col} : (unusable value){RESET}");
}

/// Wrap text at word boundaries to fit within max_width.
fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in s.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(s.to_string());
    }

    lines
}
