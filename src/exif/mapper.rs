use crate::raw::{RawTags, RawValue};
use crate::record::{Field, FieldValue, Fields, Value};

use super::keys::*;
use super::parse::{self, CoordinateFormat};

/// How a single raw value is turned into a canonical one.
///
/// Returning `None` from [`Transform::apply`] stores the false sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    /// Trimmed text; numbers and lists are kept as they are.
    Text,
    /// Numbers, with numeric text converted; other text kept as text.
    Numeric,
    Aperture,
    FocusDistance,
    ExposureTime,
    FocalLength,
    Iso,
    ImageDirection,
}

impl Transform {
    fn apply(self, raw: &RawValue) -> Option<Value> {
        match self {
            Transform::Text => Some(passthrough(raw)),
            Transform::Numeric => Some(match raw.as_number() {
                Some(n) => Value::Number(n),
                None => passthrough(raw),
            }),
            Transform::Aperture => parse::format_aperture(raw).map(Value::Text),
            Transform::FocusDistance => parse::format_focus_distance(raw).map(Value::Text),
            Transform::ExposureTime => parse::format_exposure_time(raw).map(Value::Text),
            Transform::FocalLength => parse::leading_number(raw).map(Value::Number),
            Transform::Iso => parse::first_iso_token(raw),
            Transform::ImageDirection => parse::image_direction(raw),
        }
    }
}

fn passthrough(raw: &RawValue) -> Value {
    match raw {
        RawValue::Text(s) => Value::Text(s.trim().to_string()),
        RawValue::Number(n) => Value::Number(*n),
        RawValue::List(items) => Value::List(items.iter().map(|s| s.trim().to_string()).collect()),
    }
}

/// One entry of the mapping table.
struct Rule {
    key: &'static str,
    field: Field,
    transform: Transform,
}

const fn rule(key: &'static str, field: Field, transform: Transform) -> Rule {
    Rule {
        key,
        field,
        transform,
    }
}

/// Single-key rules, applied in order. For aliased fields the generic key
/// comes first so the more specific one overwrites it.
const RULES: &[Rule] = &[
    rule(APERTURE, Field::Aperture, Transform::Aperture),
    rule(APPROXIMATE_FOCUS_DISTANCE, Field::FocusDistance, Transform::FocusDistance),
    rule(EXPOSURE_TIME, Field::Exposure, Transform::ExposureTime),
    rule(FOCAL_LENGTH, Field::FocalLength, Transform::FocalLength),
    rule(ISO, Field::Iso, Transform::Iso),
    rule(LENS_ID, Field::Lens, Transform::Text),
    rule(LENS, Field::Lens, Transform::Text),
    rule(MAKE, Field::Make, Transform::Text),
    rule(MAKE_QUICKTIME, Field::Make, Transform::Text),
    rule(MODEL, Field::Camera, Transform::Text),
    rule(MODEL_QUICKTIME, Field::Camera, Transform::Text),
    rule(SOFTWARE, Field::Software, Transform::Text),
    rule(IMAGE_WIDTH, Field::Width, Transform::Numeric),
    rule(IMAGE_HEIGHT, Field::Height, Transform::Numeric),
    rule(X_RESOLUTION, Field::HorizontalResolution, Transform::Numeric),
    rule(Y_RESOLUTION, Field::VerticalResolution, Transform::Numeric),
    rule(COLOR_SPACE, Field::ColorSpace, Transform::Numeric),
    rule(ORIENTATION, Field::Orientation, Transform::Numeric),
    rule(MIME_TYPE, Field::MimeType, Transform::Text),
    rule(FILE_SIZE, Field::FileSize, Transform::Numeric),
    rule(FILE_NAME, Field::FileName, Transform::Text),
    rule(TITLE_XMP, Field::Title, Transform::Text),
    rule(TITLE, Field::Title, Transform::Text),
    rule(CAPTION, Field::Caption, Transform::Text),
    rule(CAPTION_ABSTRACT, Field::Caption, Transform::Text),
    rule(DESCRIPTION_XMP, Field::Description, Transform::Text),
    rule(DESCRIPTION, Field::Description, Transform::Text),
    rule(HEADLINE, Field::Headline, Transform::Text),
    rule(ARTIST, Field::Author, Transform::Text),
    rule(COPYRIGHT_IPTC, Field::Copyright, Transform::Text),
    rule(COPYRIGHT, Field::Copyright, Transform::Text),
    rule(CREDIT, Field::Credit, Transform::Text),
    rule(SOURCE, Field::Source, Transform::Text),
    rule(JOB_TITLE, Field::JobTitle, Transform::Text),
    rule(CITY_XMP, Field::City, Transform::Text),
    rule(CITY, Field::City, Transform::Text),
    rule(SUBLOCATION_XMP, Field::Sublocation, Transform::Text),
    rule(SUBLOCATION, Field::Sublocation, Transform::Text),
    rule(STATE_XMP, Field::State, Transform::Text),
    rule(STATE, Field::State, Transform::Text),
    rule(COUNTRY_XMP, Field::Country, Transform::Text),
    rule(COUNTRY, Field::Country, Transform::Text),
    rule(GPS_IMG_DIRECTION, Field::ImageDirection, Transform::ImageDirection),
    rule(MEDIA_GROUP_UUID, Field::ContentIdentifier, Transform::Text),
    rule(CONTENT_IDENTIFIER, Field::ContentIdentifier, Transform::Text),
    rule(CONTENT_IDENTIFIER_QUICKTIME, Field::ContentIdentifier, Transform::Text),
    rule(CONTENT_IDENTIFIER_KEYS, Field::ContentIdentifier, Transform::Text),
    rule(MICRO_VIDEO_OFFSET, Field::MicroVideoOffset, Transform::Numeric),
    rule(FRAMERATE, Field::Framerate, Transform::Numeric),
    rule(FRAMERATE_OGG, Field::Framerate, Transform::Numeric),
    rule(FRAMERATE_AVI, Field::Framerate, Transform::Numeric),
    rule(FRAMERATE_QUICKTIME_3, Field::Framerate, Transform::Numeric),
    rule(FRAMERATE_QUICKTIME_2, Field::Framerate, Transform::Numeric),
    rule(FRAMERATE_QUICKTIME_1, Field::Framerate, Transform::Numeric),
    rule(DURATION, Field::Duration, Transform::Numeric),
    rule(DURATION_WMV, Field::Duration, Transform::Numeric),
    rule(DURATION_WEBM, Field::Duration, Transform::Numeric),
    rule(DURATION_QUICKTIME, Field::Duration, Transform::Numeric),
];

/// Store a mapped value. A present value always overwrites; the false
/// sentinel only fills an empty slot.
fn put(fields: &mut Fields, field: Field, value: Option<Value>) {
    match value {
        Some(value) => {
            fields.insert(field, FieldValue::Present(value));
        }
        None => {
            fields.entry(field).or_insert(FieldValue::Absent);
        }
    }
}

/// Maps raw tag dictionaries onto canonical fields.
///
/// The mapper is stateless apart from its [`CoordinateFormat`], so a single
/// instance can be shared freely.
///
/// # Example
///
/// ```rust
/// use exif_normalize::exif::Mapper;
/// use exif_normalize::raw::RawTags;
/// use exif_normalize::record::{Field, Value};
///
/// let mut raw = RawTags::new();
/// raw.insert("ExifIFD:ExposureTime", 1.0 / 250.0);
/// raw.insert("ExifIFD:ISO", "800 0 0");
///
/// let fields = Mapper::new().map(&raw);
/// assert_eq!(fields[&Field::Exposure].value(), Some(&Value::from("1/250")));
/// assert_eq!(fields[&Field::Iso].value(), Some(&Value::from("800")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mapper {
    format: CoordinateFormat,
}

impl Mapper {
    /// A mapper emitting numeric coordinates.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: CoordinateFormat) -> Self {
        Self { format }
    }

    /// Builder form of [`Mapper::set_numeric`].
    pub fn numeric(mut self, numeric: bool) -> Self {
        self.set_numeric(numeric);
        self
    }

    /// `true` emits latitude/longitude as numbers, `false` as decimal text.
    pub fn set_numeric(&mut self, numeric: bool) {
        self.format = if numeric {
            CoordinateFormat::Numeric
        } else {
            CoordinateFormat::Human
        };
    }

    pub fn is_numeric(&self) -> bool {
        self.format == CoordinateFormat::Numeric
    }

    pub fn format(&self) -> CoordinateFormat {
        self.format
    }

    /// Map a raw tag dictionary onto canonical fields.
    ///
    /// Unknown keys are ignored. Malformed values degrade to the false
    /// sentinel, except creation dates, which are left out entirely.
    pub fn map(&self, raw: &RawTags) -> Fields {
        let mut fields = Fields::new();

        for rule in RULES {
            if let Some(value) = raw.get(rule.key) {
                put(&mut fields, rule.field, rule.transform.apply(value));
            }
        }

        map_dimensions(raw, &mut fields);
        map_keywords(raw, &mut fields);
        map_coordinates(raw, &mut fields, self.format);
        map_altitude(raw, &mut fields);
        map_creation_date(raw, &mut fields);

        let unknown = raw
            .iter()
            .filter(|(key, _)| !is_known_key(key))
            .count();
        log::trace!(
            "Mapped {} raw tag(s) to {} field(s), {unknown} unrecognized",
            raw.len(),
            fields.len()
        );

        fields
    }
}

fn is_known_key(key: &str) -> bool {
    RULES.iter().any(|r| r.key == key) || COMPOSITE_KEYS.iter().any(|k| *k == key)
}

/// `Composite:ImageSize` overrides plain width/height, honoring rotation.
fn map_dimensions(raw: &RawTags, fields: &mut Fields) {
    let Some(size) = raw.get(IMAGE_SIZE) else {
        return;
    };

    match parse::resolve_dimensions(size, raw.get(ROTATION)) {
        Some((width, height)) => {
            put(fields, Field::Width, Some(Value::from(width)));
            put(fields, Field::Height, Some(Value::from(height)));
        }
        None => {
            log::debug!("Ignoring malformed image size {size:?}");
            put(fields, Field::Width, None);
            put(fields, Field::Height, None);
        }
    }
}

/// Ordered union of `IPTC:Keywords` and `XMP-dc:Subject`.
fn map_keywords(raw: &RawTags, fields: &mut Fields) {
    let mut keywords: Vec<String> = Vec::new();
    for value in [KEYWORDS, SUBJECT].iter().filter_map(|k| raw.get(k)) {
        let items = match value {
            RawValue::Text(s) => vec![s.trim().to_string()],
            RawValue::Number(n) => vec![n.to_string()],
            RawValue::List(items) => items.iter().map(|s| s.trim().to_string()).collect(),
        };
        for item in items {
            if !item.is_empty() && !keywords.contains(&item) {
                keywords.push(item);
            }
        }
    }

    if !keywords.is_empty() {
        put(fields, Field::Keywords, Some(Value::List(keywords)));
    }
}

fn map_coordinates(raw: &RawTags, fields: &mut Fields, format: CoordinateFormat) {
    let resolve = |candidates: [&str; 2], reference: &str| {
        candidates
            .iter()
            .filter_map(|k| raw.get(k))
            .filter_map(|v| parse::resolve_coordinate(v, raw.get(reference)))
            .last()
    };
    let latitude = resolve([GPS_LATITUDE, GPS_LATITUDE_QUICKTIME], GPS_LATITUDE_REF);
    let longitude = resolve([GPS_LONGITUDE, GPS_LONGITUDE_QUICKTIME], GPS_LONGITUDE_REF);

    if let (Some(lat), Some(lon)) = (&latitude, &longitude) {
        put(fields, Field::Gps, Some(Value::Text(format!("{},{}", lat.text, lon.text))));
    }
    if let Some(lat) = &latitude {
        put(fields, Field::Latitude, Some(lat.to_value(format)));
    }
    if let Some(lon) = &longitude {
        put(fields, Field::Longitude, Some(lon.to_value(format)));
    }
    if latitude.is_some() || longitude.is_some() {
        return;
    }

    let axes = [
        GPS_LATITUDE,
        GPS_LONGITUDE,
        GPS_LATITUDE_QUICKTIME,
        GPS_LONGITUDE_QUICKTIME,
    ];
    if !axes.iter().any(|k| raw.contains_key(k)) {
        return;
    }

    let all_blank = axes
        .iter()
        .chain([GPS_LATITUDE_REF, GPS_LONGITUDE_REF].iter())
        .filter_map(|k| raw.get(k))
        .all(RawValue::is_blank);
    if all_blank {
        put(fields, Field::Gps, None);
    } else {
        log::debug!("Ignoring malformed GPS coordinates");
    }
}

/// Each altitude family pairs with its own reference tag.
fn map_altitude(raw: &RawTags, fields: &mut Fields) {
    let families = [
        (GPS_ALTITUDE, GPS_ALTITUDE_REF),
        (GPS_ALTITUDE_QUICKTIME, GPS_ALTITUDE_REF_QUICKTIME),
    ];
    for (key, reference) in families {
        if let Some(value) = raw.get(key) {
            put(
                fields,
                Field::Altitude,
                parse::resolve_altitude(value, raw.get(reference)),
            );
        }
    }
}

fn map_creation_date(raw: &RawTags, fields: &mut Fields) {
    let parse_key = |key: &str| {
        let value = raw.get(key)?;
        let parsed = value.as_text().and_then(parse::parse_timestamp);
        if parsed.is_none() {
            log::debug!("Ignoring malformed {key}: {value:?}");
        }
        parsed
    };

    let mut date = None;
    for key in CREATION_DATE_KEYS {
        if let Some(parsed) = parse_key(key) {
            date = Some(parsed);
        }
    }
    if let Some(parsed) = parse_key(DATE_TIME_ORIGINAL_APPLE) {
        date = Some(parsed);
    }

    let Some(mut date) = date else {
        return;
    };

    if date.offset.is_none() {
        // Only the first offset tag present counts; a bad one is not skipped.
        let offset = OFFSET_KEYS
            .iter()
            .find_map(|k| raw.get(k))
            .and_then(RawValue::as_text)
            .and_then(parse::parse_offset);
        if let Some(offset) = offset {
            date = date.with_offset(offset);
        }
    }

    put(fields, Field::CreationDate, Some(Value::Date(date)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags<const N: usize>(entries: [(&str, RawValue); N]) -> RawTags {
        entries.into_iter().collect()
    }

    fn text(fields: &Fields, field: Field) -> Option<&str> {
        fields.get(&field)?.value()?.as_str()
    }

    // ── table ─────────────────────────────────────────────────────────

    #[test]
    fn unknown_keys_map_to_nothing() {
        let mapped = Mapper::new().map(&tags([("foo", RawValue::from("bar"))]));
        assert!(mapped.is_empty());
        assert!(Mapper::new().map(&RawTags::new()).is_empty());
    }

    #[test]
    fn plain_rules_map_to_their_fields() {
        for rule in RULES {
            if !matches!(rule.transform, Transform::Text | Transform::Numeric) {
                continue;
            }
            let mapped = Mapper::new().map(&tags([(rule.key, RawValue::from("foo"))]));
            assert_eq!(mapped.len(), 1, "{}", rule.key);
            assert_eq!(text(&mapped, rule.field), Some("foo"), "{}", rule.key);
        }
    }

    #[test]
    fn rules_are_all_known_keys() {
        for rule in RULES {
            assert!(is_known_key(rule.key));
        }
        assert!(!is_known_key("foo"));
    }

    #[test]
    fn mapping_is_deterministic() {
        let raw = tags([
            (MAKE, RawValue::from("Apple")),
            (GPS_LATITUDE, RawValue::from("40 deg 20' 0.42857\" N")),
            (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
            (KEYWORDS, RawValue::from(vec!["a", "b"])),
        ]);
        let mapper = Mapper::new().numeric(false);
        assert_eq!(mapper.map(&raw), mapper.map(&raw));
    }

    #[test]
    fn text_values_are_trimmed() {
        let mapped = Mapper::new().map(&tags([(TITLE, RawValue::from("  Sunset  "))]));
        assert_eq!(text(&mapped, Field::Title), Some("Sunset"));
    }

    #[test]
    fn numeric_rules_convert_numeric_text() {
        let mapped = Mapper::new().map(&tags([
            (IMAGE_WIDTH, RawValue::from("4000")),
            (FILE_SIZE, RawValue::from("2.3 MB")),
        ]));
        assert_eq!(mapped[&Field::Width], FieldValue::Present(Value::Number(4000.0)));
        assert_eq!(text(&mapped, Field::FileSize), Some("2.3 MB"));
    }

    // ── precedence ────────────────────────────────────────────────────

    #[test]
    fn lens_model_beats_lens_id_in_any_order() {
        let lens = "LEICA DG 12-60/F2.8-4.0";
        let lens_id = "LUMIX G VARIO 12-32/F3.5-5.6";
        let forward = tags([(LENS, RawValue::from(lens)), (LENS_ID, RawValue::from(lens_id))]);
        let reverse = tags([(LENS_ID, RawValue::from(lens_id)), (LENS, RawValue::from(lens))]);

        assert_eq!(text(&Mapper::new().map(&forward), Field::Lens), Some(lens));
        assert_eq!(text(&Mapper::new().map(&reverse), Field::Lens), Some(lens));

        let only_id = tags([(LENS_ID, RawValue::from(lens_id))]);
        assert_eq!(text(&Mapper::new().map(&only_id), Field::Lens), Some(lens_id));
    }

    #[test]
    fn container_specific_aliases_win() {
        let mapped = Mapper::new().map(&tags([
            (MODEL_QUICKTIME, RawValue::from("iPhone 12")),
            (MODEL, RawValue::from("Generic")),
        ]));
        assert_eq!(text(&mapped, Field::Camera), Some("iPhone 12"));
    }

    #[test]
    fn false_sentinel_does_not_clobber_a_value() {
        let mapped = Mapper::new().map(&tags([
            (IMAGE_WIDTH, RawValue::from(800)),
            (IMAGE_HEIGHT, RawValue::from(600)),
            (IMAGE_SIZE, RawValue::from("garbage")),
        ]));
        assert_eq!(mapped[&Field::Width], FieldValue::Present(Value::Number(800.0)));
        assert_eq!(mapped[&Field::Height], FieldValue::Present(Value::Number(600.0)));
    }

    // ── formatted fields ──────────────────────────────────────────────

    #[test]
    fn formats_aperture_focus_and_focal_length() {
        let mapped = Mapper::new().map(&tags([
            (APERTURE, RawValue::from(0.123)),
            (APPROXIMATE_FOCUS_DISTANCE, RawValue::from(50)),
            (FOCAL_LENGTH, RawValue::from("15 m")),
        ]));
        assert_eq!(text(&mapped, Field::Aperture), Some("f/0.1"));
        assert_eq!(text(&mapped, Field::FocusDistance), Some("50m"));
        assert_eq!(mapped[&Field::FocalLength], FieldValue::Present(Value::Number(15.0)));
    }

    #[test]
    fn formats_exposure_time() {
        let cases = [
            (10.0 / 300.0, "1/30"),
            (1.0 / 400.0, "1/400"),
            (0.0, "0"),
            (1.0, "1/1"),
            (4.0, "4"),
        ];
        for (value, expected) in cases {
            let mapped = Mapper::new().map(&tags([(EXPOSURE_TIME, RawValue::from(value))]));
            assert_eq!(text(&mapped, Field::Exposure), Some(expected));
        }
    }

    #[test]
    fn iso_keeps_first_reading() {
        for (value, expected) in [("80", "80"), ("800 0 0", "800")] {
            let mapped = Mapper::new().map(&tags([(ISO, RawValue::from(value))]));
            assert_eq!(text(&mapped, Field::Iso), Some(expected));
        }
    }

    #[test]
    fn image_direction_false_when_not_numeric() {
        let bad = Mapper::new().map(&tags([(GPS_IMG_DIRECTION, RawValue::from("undef"))]));
        assert_eq!(bad[&Field::ImageDirection], FieldValue::Absent);

        let good = Mapper::new().map(&tags([(GPS_IMG_DIRECTION, RawValue::from("180.0"))]));
        assert_eq!(text(&good, Field::ImageDirection), Some("180.0"));
    }

    #[test]
    fn malformed_aperture_is_false() {
        let mapped = Mapper::new().map(&tags([(APERTURE, RawValue::from("wide open"))]));
        assert_eq!(mapped[&Field::Aperture], FieldValue::Absent);
    }

    // ── dimensions ────────────────────────────────────────────────────

    #[test]
    fn video_dimensions_follow_rotation() {
        let cases = [
            ("800x600", None, (800.0, 600.0)),
            ("800x600", Some("0"), (800.0, 600.0)),
            ("800x600", Some("90"), (600.0, 800.0)),
            ("800x600", Some("270"), (600.0, 800.0)),
            ("800x600", Some("360"), (800.0, 600.0)),
            ("800x600", Some("180"), (800.0, 600.0)),
            ("800 600", Some("180"), (800.0, 600.0)),
        ];
        for (size, rotation, (width, height)) in cases {
            let mut raw = tags([(IMAGE_SIZE, RawValue::from(size))]);
            if let Some(rotation) = rotation {
                raw.insert(ROTATION, rotation);
            }
            let mapped = Mapper::new().map(&raw);
            assert_eq!(mapped[&Field::Width], FieldValue::Present(Value::Number(width)));
            assert_eq!(mapped[&Field::Height], FieldValue::Present(Value::Number(height)));
        }
    }

    // ── keywords ──────────────────────────────────────────────────────

    #[test]
    fn keyword_text_is_one_element() {
        let mapped = Mapper::new().map(&tags([(KEYWORDS, RawValue::from("Keyword_1 Keyword_2"))]));
        assert_eq!(
            mapped[&Field::Keywords],
            FieldValue::Present(Value::from(vec!["Keyword_1 Keyword_2"]))
        );
    }

    #[test]
    fn keywords_and_subject_are_unioned() {
        let mapped = Mapper::new().map(&tags([
            (SUBJECT, RawValue::from(vec!["Keyword_1", "Keyword_3"])),
            (KEYWORDS, RawValue::from(vec!["Keyword_1", "Keyword_2"])),
        ]));
        assert_eq!(
            mapped[&Field::Keywords],
            FieldValue::Present(Value::from(vec!["Keyword_1", "Keyword_2", "Keyword_3"]))
        );
    }

    // ── gps ───────────────────────────────────────────────────────────

    #[test]
    fn dms_coordinates_in_human_mode() {
        let mapped = Mapper::new().numeric(false).map(&tags([
            (GPS_LATITUDE, RawValue::from("40 deg 20' 0.42857\" N")),
            (GPS_LATITUDE_REF, RawValue::from("North")),
            (GPS_LONGITUDE, RawValue::from("20 deg 10' 2.33333\" W")),
            (GPS_LONGITUDE_REF, RawValue::from("West")),
        ]));

        assert_eq!(mapped.len(), 3);
        assert_eq!(text(&mapped, Field::Gps), Some("40.333452380556,-20.167314813889"));
        assert_eq!(text(&mapped, Field::Latitude), Some("40.333452380556"));
        assert_eq!(text(&mapped, Field::Longitude), Some("-20.167314813889"));
    }

    #[test]
    fn dms_coordinates_in_numeric_mode() {
        let mapped = Mapper::new().map(&tags([
            (GPS_LATITUDE, RawValue::from("40 deg 20' 0.42857\" N")),
            (GPS_LATITUDE_REF, RawValue::from("North")),
            (GPS_LONGITUDE, RawValue::from("20 deg 10' 2.33333\" W")),
            (GPS_LONGITUDE_REF, RawValue::from("West")),
        ]));

        assert_eq!(text(&mapped, Field::Gps), Some("40.333452380556,-20.167314813889"));
        assert_eq!(
            mapped[&Field::Latitude],
            FieldValue::Present(Value::Number(40.333452380556))
        );
        assert_eq!(
            mapped[&Field::Longitude],
            FieldValue::Present(Value::Number(-20.167314813889))
        );
    }

    #[test]
    fn malformed_dms_yields_no_fields() {
        let mapped = Mapper::new().numeric(false).map(&tags([
            (GPS_LATITUDE, RawValue::from("40 degrees 20' 0.42857\" N")),
            (GPS_LATITUDE_REF, RawValue::from("North")),
            (GPS_LONGITUDE, RawValue::from("20 degrees 10' 2.33333\" W")),
            (GPS_LONGITUDE_REF, RawValue::from("West")),
        ]));
        assert!(mapped.is_empty());
    }

    #[test]
    fn decimal_coordinates_keep_precision() {
        let mapped = Mapper::new().map(&tags([
            (GPS_LATITUDE, RawValue::from("40.333452381")),
            (GPS_LATITUDE_REF, RawValue::from("North")),
            (GPS_LONGITUDE, RawValue::from("20.167314814")),
            (GPS_LONGITUDE_REF, RawValue::from("West")),
        ]));
        assert_eq!(mapped.len(), 3);
        assert_eq!(text(&mapped, Field::Gps), Some("40.333452381,-20.167314814"));
        assert_eq!(
            mapped[&Field::Longitude],
            FieldValue::Present(Value::Number(-20.167314814))
        );
    }

    #[test]
    fn quicktime_coordinates() {
        let mapped = Mapper::new().numeric(false).map(&tags([
            (GPS_LATITUDE_QUICKTIME, RawValue::from("40.333")),
            (GPS_LATITUDE_REF, RawValue::from("North")),
            (GPS_LONGITUDE_QUICKTIME, RawValue::from("-20.167")),
            (GPS_LONGITUDE_REF, RawValue::from("West")),
        ]));
        assert_eq!(text(&mapped, Field::Gps), Some("40.333,-20.167"));
        assert_eq!(text(&mapped, Field::Latitude), Some("40.333"));
        assert_eq!(text(&mapped, Field::Longitude), Some("-20.167"));
    }

    #[test]
    fn only_latitude_yields_one_field() {
        let mapped = Mapper::new().map(&tags([
            (GPS_LATITUDE, RawValue::from("40.333452381")),
            (GPS_LATITUDE_REF, RawValue::from("North")),
        ]));
        assert_eq!(mapped.len(), 1);
        assert!(mapped.contains_key(&Field::Latitude));
    }

    #[test]
    fn blank_coordinates_mark_gps_false() {
        let mapped = Mapper::new().map(&tags([
            (GPS_LATITUDE, RawValue::from("")),
            (GPS_LATITUDE_REF, RawValue::from("")),
            (GPS_LONGITUDE, RawValue::from("")),
            (GPS_LONGITUDE_REF, RawValue::from("")),
        ]));
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[&Field::Gps], FieldValue::Absent);
    }

    #[test]
    fn composite_latitude_beats_gps_latitude_in_any_order() {
        let gps = (GPS_LATITUDE, RawValue::from("10.5"));
        let composite = (GPS_LATITUDE_QUICKTIME, RawValue::from("20.25"));

        for raw in [
            tags([gps.clone(), composite.clone()]),
            tags([composite.clone(), gps.clone()]),
        ] {
            let mapped = Mapper::new().map(&raw);
            assert_eq!(mapped[&Field::Latitude], FieldValue::Present(Value::Number(20.25)));
        }
    }

    #[test]
    fn malformed_composite_latitude_keeps_gps_latitude() {
        let mapped = Mapper::new().map(&tags([
            (GPS_LATITUDE, RawValue::from("10.5")),
            (GPS_LATITUDE_QUICKTIME, RawValue::from("somewhere")),
        ]));
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[&Field::Latitude], FieldValue::Present(Value::Number(10.5)));
    }

    // ── altitude ──────────────────────────────────────────────────────

    #[test]
    fn composite_altitude_beats_gps_altitude_in_any_order() {
        let gps = [
            (GPS_ALTITUDE, RawValue::from("100")),
            (GPS_ALTITUDE_REF, RawValue::from("0")),
        ];
        let composite = [
            (GPS_ALTITUDE_QUICKTIME, RawValue::from(250.5)),
            (GPS_ALTITUDE_REF_QUICKTIME, RawValue::from("0")),
        ];

        let forward: RawTags = gps.iter().chain(composite.iter()).cloned().collect();
        let reverse: RawTags = composite.iter().chain(gps.iter()).cloned().collect();
        for raw in [forward, reverse] {
            let mapped = Mapper::new().map(&raw);
            assert_eq!(mapped[&Field::Altitude], FieldValue::Present(Value::Number(250.5)));
        }
    }

    #[test]
    fn altitude_reference() {
        let above = Mapper::new().map(&tags([
            (GPS_ALTITUDE, RawValue::from("122.053")),
            (GPS_ALTITUDE_REF, RawValue::from("0")),
        ]));
        assert_eq!(above[&Field::Altitude], FieldValue::Present(Value::Number(122.053)));

        let below = Mapper::new().map(&tags([
            (GPS_ALTITUDE, RawValue::from("122.053")),
            (GPS_ALTITUDE_REF, RawValue::from("1")),
        ]));
        assert_eq!(text(&below, Field::Altitude), Some("-122.053"));
    }

    #[test]
    fn quicktime_altitude_uses_its_own_reference() {
        let mapped = Mapper::new().map(&tags([
            (GPS_ALTITUDE_QUICKTIME, RawValue::from(122.053)),
            (GPS_ALTITUDE_REF_QUICKTIME, RawValue::from("1")),
            (GPS_ALTITUDE_REF, RawValue::from("0")),
        ]));
        assert_eq!(mapped[&Field::Altitude], FieldValue::Present(Value::Number(-122.053)));
    }

    #[test]
    fn malformed_altitude_is_false() {
        let mapped = Mapper::new().map(&tags([
            (GPS_ALTITUDE, RawValue::from("undef")),
            (GPS_ALTITUDE_REF, RawValue::from("0")),
        ]));
        assert_eq!(mapped[&Field::Altitude], FieldValue::Absent);
    }

    // ── creation date ─────────────────────────────────────────────────

    fn creation_date(mapped: &Fields) -> &crate::record::CreationDate {
        mapped[&Field::CreationDate].value().and_then(Value::as_date).unwrap()
    }

    #[test]
    fn creation_date_without_offset() {
        let mapped = Mapper::new().map(&tags([(DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09"))]));
        let date = creation_date(&mapped);
        assert_eq!(date.format("%Y:%m:%d %H:%M:%S"), "2015:04:01 12:11:09");
        assert!(date.offset.is_none());
    }

    #[test]
    fn creation_date_offset_sources() {
        let cases = [
            tags([(DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09+0200"))]),
            tags([
                (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
                (OFFSET_TIME_ORIGINAL, RawValue::from("+0200")),
            ]),
            tags([
                (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
                (OFFSET_TIME, RawValue::from("+02:00")),
            ]),
            tags([
                (DATE_TIME_ORIGINAL_APPLE, RawValue::from("2015-04-01T12:11:09+0200")),
                (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
                (OFFSET_TIME_ORIGINAL, RawValue::from("+0200")),
            ]),
        ];
        for raw in cases {
            let mapped = Mapper::new().map(&raw);
            let date = creation_date(&mapped);
            assert_eq!(date.format("%Y:%m:%d %H:%M:%S"), "2015:04:01 12:11:09");
            assert_eq!(date.offset_seconds(), Some(7200));
            assert_eq!(date.to_string(), "2015-04-01 12:11:09+02:00");
        }
    }

    #[test]
    fn apple_creation_date_overrides_primary() {
        let mapped = Mapper::new().map(&tags([
            (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
            (DATE_TIME_ORIGINAL_APPLE, RawValue::from("2016-05-02T08:00:00-0500")),
        ]));
        assert_eq!(creation_date(&mapped).to_string(), "2016-05-02 08:00:00-05:00");
    }

    #[test]
    fn malformed_apple_date_keeps_primary() {
        let mapped = Mapper::new().map(&tags([
            (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
            (DATE_TIME_ORIGINAL_APPLE, RawValue::from("2015:04:01")),
        ]));
        assert_eq!(creation_date(&mapped).to_string(), "2015-04-01 12:11:09");
    }

    #[test]
    fn malformed_creation_date_is_omitted() {
        for value in ["2015:04:01", "Invalid Date String"] {
            let mapped = Mapper::new().map(&tags([(DATE_TIME_ORIGINAL, RawValue::from(value))]));
            assert!(mapped.is_empty(), "{value}");
        }
        let mapped = Mapper::new().map(&tags([(DATE_TIME_ORIGINAL_APPLE, RawValue::from("2015:04:01"))]));
        assert!(mapped.is_empty());
    }

    #[test]
    fn malformed_offset_is_ignored() {
        let mapped = Mapper::new().map(&tags([
            (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
            (OFFSET_TIME_ORIGINAL, RawValue::from("   :  ")),
        ]));
        let date = creation_date(&mapped);
        assert_eq!(date.format("%Y:%m:%d %H:%M:%S"), "2015:04:01 12:11:09");
        assert!(date.offset.is_none());
    }

    #[test]
    fn blank_original_offset_blocks_generic_offset() {
        let mapped = Mapper::new().map(&tags([
            (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
            (OFFSET_TIME_ORIGINAL, RawValue::from("   :  ")),
            (OFFSET_TIME, RawValue::from("+0500")),
        ]));
        assert!(creation_date(&mapped).offset.is_none());

        let mapped = Mapper::new().map(&tags([
            (DATE_TIME_ORIGINAL, RawValue::from("2015:04:01 12:11:09")),
            (OFFSET_TIME, RawValue::from("+0500")),
        ]));
        assert_eq!(creation_date(&mapped).offset_seconds(), Some(18000));
    }

    #[test]
    fn exif_date_beats_quicktime_date_in_any_order() {
        let quicktime = (DATE_TIME_ORIGINAL_QUICKTIME, RawValue::from("2020:07:04 18:30:00"));
        let exif = (DATE_TIME_ORIGINAL, RawValue::from("2021:01:02 03:04:05"));

        for raw in [
            tags([quicktime.clone(), exif.clone()]),
            tags([exif.clone(), quicktime.clone()]),
        ] {
            let mapped = Mapper::new().map(&raw);
            assert_eq!(creation_date(&mapped).to_string(), "2021-01-02 03:04:05");
        }
    }

    #[test]
    fn video_container_dates() {
        for key in [
            DATE_TIME_ORIGINAL_QUICKTIME,
            DATE_TIME_ORIGINAL_AVI,
            DATE_TIME_ORIGINAL_WEBM,
            DATE_TIME_ORIGINAL_OGG,
            DATE_TIME_ORIGINAL_WMV,
            DATE_TIME_ORIGINAL_PNG,
        ] {
            let mapped = Mapper::new().map(&tags([(key, RawValue::from("2020:07:04 18:30:00"))]));
            assert_eq!(creation_date(&mapped).to_string(), "2020-07-04 18:30:00", "{key}");
        }
    }

    // ── mode ──────────────────────────────────────────────────────────

    #[test]
    fn numeric_flag() {
        let mut mapper = Mapper::new();
        assert!(mapper.is_numeric());
        mapper.set_numeric(false);
        assert!(!mapper.is_numeric());
        assert_eq!(mapper.format(), CoordinateFormat::Human);
        assert_eq!(Mapper::with_format(CoordinateFormat::Human), mapper);
    }
}
