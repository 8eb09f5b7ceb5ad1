use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical field vocabulary.
///
/// Every raw tag the mapper recognizes lands in exactly one of these fields.
/// The serialized form is the kebab-case name returned by [`Field::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Aperture,
    Iso,
    Exposure,
    FocusDistance,
    Width,
    Height,
    Title,
    Caption,
    Copyright,
    Keywords,
    Camera,
    Make,
    HorizontalResolution,
    VerticalResolution,
    Software,
    FocalLength,
    CreationDate,
    Author,
    Credit,
    Source,
    JobTitle,
    MimeType,
    FileSize,
    FileName,
    Headline,
    ColorSpace,
    Orientation,
    Gps,
    Latitude,
    Longitude,
    Description,
    Altitude,
    ImageDirection,
    Lens,
    ContentIdentifier,
    Framerate,
    Duration,
    MicroVideoOffset,
    City,
    Sublocation,
    State,
    Country,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 42] = [
        Field::Aperture,
        Field::Iso,
        Field::Exposure,
        Field::FocusDistance,
        Field::Width,
        Field::Height,
        Field::Title,
        Field::Caption,
        Field::Copyright,
        Field::Keywords,
        Field::Camera,
        Field::Make,
        Field::HorizontalResolution,
        Field::VerticalResolution,
        Field::Software,
        Field::FocalLength,
        Field::CreationDate,
        Field::Author,
        Field::Credit,
        Field::Source,
        Field::JobTitle,
        Field::MimeType,
        Field::FileSize,
        Field::FileName,
        Field::Headline,
        Field::ColorSpace,
        Field::Orientation,
        Field::Gps,
        Field::Latitude,
        Field::Longitude,
        Field::Description,
        Field::Altitude,
        Field::ImageDirection,
        Field::Lens,
        Field::ContentIdentifier,
        Field::Framerate,
        Field::Duration,
        Field::MicroVideoOffset,
        Field::City,
        Field::Sublocation,
        Field::State,
        Field::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Aperture => "aperture",
            Field::Iso => "iso",
            Field::Exposure => "exposure",
            Field::FocusDistance => "focus-distance",
            Field::Width => "width",
            Field::Height => "height",
            Field::Title => "title",
            Field::Caption => "caption",
            Field::Copyright => "copyright",
            Field::Keywords => "keywords",
            Field::Camera => "camera",
            Field::Make => "make",
            Field::HorizontalResolution => "horizontal-resolution",
            Field::VerticalResolution => "vertical-resolution",
            Field::Software => "software",
            Field::FocalLength => "focal-length",
            Field::CreationDate => "creation-date",
            Field::Author => "author",
            Field::Credit => "credit",
            Field::Source => "source",
            Field::JobTitle => "job-title",
            Field::MimeType => "mime-type",
            Field::FileSize => "file-size",
            Field::FileName => "file-name",
            Field::Headline => "headline",
            Field::ColorSpace => "color-space",
            Field::Orientation => "orientation",
            Field::Gps => "gps",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Description => "description",
            Field::Altitude => "altitude",
            Field::ImageDirection => "image-direction",
            Field::Lens => "lens",
            Field::ContentIdentifier => "content-identifier",
            Field::Framerate => "framerate",
            Field::Duration => "duration",
            Field::MicroVideoOffset => "micro-video-offset",
            Field::City => "city",
            Field::Sublocation => "sublocation",
            Field::State => "state",
            Field::Country => "country",
        }
    }

    /// Look a field up by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("exposure-time"), None);
    }

    #[test]
    fn serde_name_matches_as_str() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }
}
