//! # exif-normalize
//!
//! Normalize photo and video metadata into one canonical record. Raw tag
//! dictionaries from an extraction tool (EXIF, IPTC, XMP, QuickTime, RIFF,
//! Matroska, ...) are mapped onto a fixed vocabulary of fields with
//! consistent formats, whatever container the file came from.
//!
//! ## Quick Start
//!
//! The pipeline module reads `exiftool -j -G1` dumps and maps every entry:
//!
//! ```rust,no_run
//! use exif_normalize::config::Config;
//! use exif_normalize::pipeline::{collect_dumps, normalize_file};
//! use exif_normalize::source::JsonDumpSource;
//! use std::path::PathBuf;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load(Some("config.json".as_ref()))?;
//!     let mapper = config.build_mapper();
//!
//!     for path in collect_dumps(&[PathBuf::from("./dumps")]) {
//!         let result = normalize_file(&path, &JsonDumpSource, &mapper);
//!         if let Some(ref err) = result.error {
//!             eprintln!("Error processing {}: {err}", path.display());
//!             continue;
//!         }
//!         for record in &result.records {
//!             println!("{:?} {:?}", record.camera(), record.creation_date());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! ```rust
//! use exif_normalize::exif::Mapper;
//! use exif_normalize::raw::RawTags;
//! use exif_normalize::record::Record;
//!
//! let mut raw = RawTags::new();
//! raw.insert("GPS:GPSLatitude", "40 deg 20' 0.42857\" N");
//! raw.insert("GPS:GPSLatitudeRef", "North");
//! raw.insert("GPS:GPSLongitude", "20 deg 10' 2.33333\" W");
//! raw.insert("GPS:GPSLongitudeRef", "West");
//!
//! let record = Record::from_raw(raw, &Mapper::new());
//! assert_eq!(
//!     record.gps().and_then(|v| v.as_str()),
//!     Some("40.333452380556,-20.167314813889")
//! );
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration types and loading/saving
//! - [`exif`]: Raw key names, scalar parsers and the field mapper
//! - [`pipeline`]: Dump collection and batch normalization
//! - [`raw`]: Raw tag dictionaries
//! - [`record`]: Canonical fields and the record type
//! - [`source`]: Raw tag sources

pub mod config;
pub mod exif;
pub mod pipeline;
pub mod raw;
pub mod record;
pub mod source;
