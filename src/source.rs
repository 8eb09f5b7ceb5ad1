//! Raw tag sources.
//!
//! A [`TagSource`] produces [`RawTags`] dictionaries for a file. The crate
//! ships with [`JsonDumpSource`], which reads the JSON written by
//! `exiftool -j -G1 <files> > dump.json`.

use anyhow::{Context, Result};
use std::path::Path;

use crate::raw::RawTags;

/// Trait for raw metadata providers.
///
/// Implement this trait to feed the mapper from another extraction backend.
/// One call may yield several dictionaries (a dump covering many files).
///
/// # Example
///
/// ```rust,no_run
/// use exif_normalize::source::{JsonDumpSource, TagSource};
///
/// # fn example() -> anyhow::Result<()> {
/// let source = JsonDumpSource;
/// for tags in source.read_tags("dump.json".as_ref())? {
///     println!("{} tags", tags.len());
/// }
/// # Ok(())
/// # }
/// ```
pub trait TagSource: Send + Sync {
    /// The display name of this source (e.g., "exiftool-json").
    fn name(&self) -> &str;
    /// Read every raw tag dictionary available at `path`.
    fn read_tags(&self, path: &Path) -> Result<Vec<RawTags>>;
}

/// Reads `exiftool -j -G1` dumps: a JSON array of objects, or one object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDumpSource;

impl JsonDumpSource {
    /// Parse dump text that is already in memory.
    pub fn parse(contents: &str) -> Result<Vec<RawTags>> {
        let json: serde_json::Value =
            serde_json::from_str(contents).context("Failed to parse tag dump")?;

        match json {
            serde_json::Value::Array(entries) => {
                let mut dumps = Vec::with_capacity(entries.len());
                for (i, entry) in entries.iter().enumerate() {
                    let tags = RawTags::from_json(entry)
                        .with_context(|| format!("Dump entry {i} is not an object"))?;
                    dumps.push(tags);
                }
                Ok(dumps)
            }
            other => {
                let tags = RawTags::from_json(&other)
                    .context("Tag dump must be an object or an array of objects")?;
                Ok(vec![tags])
            }
        }
    }
}

impl TagSource for JsonDumpSource {
    fn name(&self) -> &str {
        "exiftool-json"
    }

    fn read_tags(&self, path: &Path) -> Result<Vec<RawTags>> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let dumps = Self::parse(&contents)
            .with_context(|| format!("Invalid tag dump {}", path.display()))?;
        log::debug!("{}: {} entries from {}", self.name(), dumps.len(), path.display());
        Ok(dumps)
    }
}
