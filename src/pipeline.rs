use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::exif::Mapper;
use crate::record::Record;
use crate::source::TagSource;

/// Supported dump extensions.
const DUMP_EXTENSIONS: &[&str] = &["json"];

/// The result of normalizing one dump file.
///
/// A dump may describe several media files, so `records` holds one
/// [`Record`] per dump entry, in file order.
///
/// # Example
///
/// ```rust,no_run
/// use exif_normalize::exif::Mapper;
/// use exif_normalize::pipeline::normalize_file;
/// use exif_normalize::source::JsonDumpSource;
///
/// let result = normalize_file("dump.json".as_ref(), &JsonDumpSource, &Mapper::new());
/// match result.error {
///     None => println!("{} record(s)", result.records.len()),
///     Some(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug)]
pub struct NormalizeResult {
    pub path: PathBuf,
    pub records: Vec<Record>,
    pub error: Option<String>,
}

/// Collect dump files from the given paths.
///
/// Accepts a mix of file paths and directory paths. Directories are walked
/// recursively (following symlinks); only `.json` files are kept from them.
/// Explicit file paths with another extension are skipped with a warning.
///
/// # Example
///
/// ```rust,no_run
/// use exif_normalize::pipeline::collect_dumps;
/// use std::path::PathBuf;
///
/// let dumps = collect_dumps(&[
///     PathBuf::from("holiday.json"),
///     PathBuf::from("./dumps/"),
/// ]);
/// println!("Found {} dumps", dumps.len());
/// ```
pub fn collect_dumps(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut dumps = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_dump_file(path) {
                dumps.push(path.clone());
            } else {
                log::warn!("Skipping unsupported file: {}", path.display());
            }
        } else if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .map(|e| e.into_path())
                .filter(|p| p.is_file() && is_dump_file(p))
                .collect();
            found.sort();
            dumps.extend(found);
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    dumps
}

/// Check if a file has a supported dump extension.
fn is_dump_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DUMP_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read one file through `source` and map every entry.
///
/// Read failures are reported in [`NormalizeResult::error`] rather than
/// returned, so a batch keeps going past a bad file.
pub fn normalize_file(path: &Path, source: &dyn TagSource, mapper: &Mapper) -> NormalizeResult {
    let mut result = NormalizeResult {
        path: path.to_path_buf(),
        records: Vec::new(),
        error: None,
    };

    match source.read_tags(path) {
        Ok(dumps) => {
            result.records = dumps
                .into_iter()
                .map(|raw| Record::from_raw(raw, mapper))
                .collect();
            log::debug!(
                "{}: {} record(s) via {}",
                path.display(),
                result.records.len(),
                source.name()
            );
        }
        Err(e) => {
            log::warn!("Failed to read {}: {e:#}", path.display());
            result.error = Some(format!("{e:#}"));
        }
    }

    result
}

/// [`normalize_file`] over every path, in order.
pub fn normalize_all(paths: &[PathBuf], source: &dyn TagSource, mapper: &Mapper) -> Vec<NormalizeResult> {
    paths
        .iter()
        .map(|path| normalize_file(path, source, mapper))
        .collect()
}
