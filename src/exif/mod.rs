//! EXIF, XMP, IPTC and container metadata mapping.
//!
//! - [`keys`] names the raw `Group:Tag` keys the mapper understands
//! - [`parse`] holds the scalar parsers (fractions, coordinates, timestamps)
//! - [`Mapper`] turns a [`RawTags`](crate::raw::RawTags) dictionary into canonical fields
//!
//! Latitude and longitude are emitted as numbers or as decimal text depending
//! on the mapper's [`CoordinateFormat`].

pub mod keys;
mod mapper;
pub mod parse;

pub use mapper::Mapper;
pub use parse::CoordinateFormat;
