//! The canonical record: normalized fields plus the raw tags they came from.
//!
//! A [`Record`] is built once from a [`Mapper`](crate::exif::Mapper) result and
//! then read through typed accessors. Accessors return `None` for fields that
//! were never populated *and* for fields stored as the explicit false sentinel
//! ([`FieldValue::Absent`]); use [`Record::entry`] to tell the two apart.
//!
//! ```rust
//! use exif_normalize::exif::Mapper;
//! use exif_normalize::raw::RawTags;
//! use exif_normalize::record::Record;
//!
//! let mut raw = RawTags::new();
//! raw.insert("Composite:Aperture", 2.8);
//! raw.insert("ExifIFD:LensModel", "EF 50mm f/1.8");
//!
//! let record = Record::from_raw(raw, &Mapper::new());
//! assert_eq!(record.aperture().and_then(|v| v.as_str()), Some("f/2.8"));
//! assert!(record.title().is_none());
//! ```

mod field;
mod value;

pub use field::Field;
pub use value::{CreationDate, FieldValue, Value};
pub(crate) use value::serialize_number;

use crate::exif::Mapper;
use crate::exif::parse::parse_fraction;
use crate::raw::RawTags;
use std::collections::BTreeMap;

/// A canonical field mapping, as produced by [`Mapper::map`].
pub type Fields = BTreeMap<Field, FieldValue>;

/// Canonical metadata for one file.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Fields,
    raw: RawTags,
}

macro_rules! field_accessors {
    ($($getter:ident, $setter:ident => $field:ident;)*) => {
        $(
            #[doc = concat!("The `", stringify!($getter), "` field, or `None` when unset.")]
            pub fn $getter(&self) -> Option<&Value> {
                self.get(Field::$field)
            }

            pub fn $setter(&mut self, value: impl Into<Value>) -> &mut Self {
                self.set(Field::$field, value)
            }
        )*
    };
}

impl Record {
    /// Build a record from a canonical mapping.
    pub fn load(fields: Fields) -> Self {
        Self {
            fields,
            raw: RawTags::default(),
        }
    }

    /// Attach the raw tags the mapping was built from.
    pub fn with_raw(mut self, raw: RawTags) -> Self {
        self.raw = raw;
        self
    }

    /// Map `raw` and keep it alongside the result.
    pub fn from_raw(raw: RawTags, mapper: &Mapper) -> Self {
        Self::load(mapper.map(&raw)).with_raw(raw)
    }

    /// The value of `field`, or `None` when it was never set or is the false sentinel.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.fields.get(&field).and_then(FieldValue::value)
    }

    /// The stored slot for `field`, distinguishing "never set" from `Absent`.
    pub fn entry(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Store a value as-is. No format validation is applied; callers are
    /// responsible for passing values in canonical form.
    pub fn set(&mut self, field: Field, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(field, FieldValue::Present(value.into()));
        self
    }

    /// All canonical fields.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// The raw tags, unchanged.
    pub fn raw(&self) -> &RawTags {
        &self.raw
    }

    field_accessors! {
        aperture, set_aperture => Aperture;
        iso, set_iso => Iso;
        exposure, set_exposure => Exposure;
        focus_distance, set_focus_distance => FocusDistance;
        width, set_width => Width;
        height, set_height => Height;
        title, set_title => Title;
        caption, set_caption => Caption;
        copyright, set_copyright => Copyright;
        keywords, set_keywords => Keywords;
        camera, set_camera => Camera;
        make, set_make => Make;
        horizontal_resolution, set_horizontal_resolution => HorizontalResolution;
        vertical_resolution, set_vertical_resolution => VerticalResolution;
        software, set_software => Software;
        focal_length, set_focal_length => FocalLength;
        creation_date, set_creation_date => CreationDate;
        author, set_author => Author;
        credit, set_credit => Credit;
        source, set_source => Source;
        job_title, set_job_title => JobTitle;
        mime_type, set_mime_type => MimeType;
        file_size, set_file_size => FileSize;
        file_name, set_file_name => FileName;
        headline, set_headline => Headline;
        color_space, set_color_space => ColorSpace;
        orientation, set_orientation => Orientation;
        gps, set_gps => Gps;
        latitude, set_latitude => Latitude;
        longitude, set_longitude => Longitude;
        description, set_description => Description;
        altitude, set_altitude => Altitude;
        image_direction, set_image_direction => ImageDirection;
        lens, set_lens => Lens;
        content_identifier, set_content_identifier => ContentIdentifier;
        framerate, set_framerate => Framerate;
        duration, set_duration => Duration;
        micro_video_offset, set_micro_video_offset => MicroVideoOffset;
        city, set_city => City;
        sublocation, set_sublocation => Sublocation;
        state, set_state => State;
        country, set_country => Country;
    }

    /// Exposure time in seconds.
    ///
    /// A stored fraction such as `"1/300"` is evaluated; a stored number is
    /// returned unchanged.
    pub fn exposure_milliseconds(&self) -> Option<f64> {
        match self.exposure()? {
            Value::Number(n) => Some(*n),
            Value::Text(s) => parse_fraction(s).or_else(|| s.trim().parse().ok()),
            _ => None,
        }
    }

    /// The creation date as a typed timestamp.
    pub fn creation_timestamp(&self) -> Option<&CreationDate> {
        self.creation_date().and_then(Value::as_date)
    }

    /// Keywords as a slice.
    pub fn keyword_list(&self) -> Option<&[String]> {
        self.keywords().and_then(Value::as_list)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}
