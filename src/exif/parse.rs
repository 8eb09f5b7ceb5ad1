//! Scalar parsers shared by the mapping rules.
//!
//! Every function here is pure and total: malformed input yields `None`, never
//! a panic or an error.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::raw::RawValue;
use crate::record::{CreationDate, Value};

/// Significant digits used when rendering computed decimal degrees.
const COORDINATE_PRECISION: usize = 14;

static DMS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\d+(?:\.\d+)?) deg (\d+(?:\.\d+)?)' (\d+(?:\.\d+)?)"(?:\s*([NSEWnsew]))?\s*$"#)
        .expect("DMS regex should compile")
});

static FRACTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)\s*$")
        .expect("fraction regex should compile")
});

static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(\d{4})[:-](\d{2})[:-](\d{2})[ T](\d{2}):(\d{2}):(\d{2})",
        r"(?:\.(\d{1,9}))?\s*(Z|[+-]\d{2}:?\d{2})?$",
    ))
    .expect("timestamp regex should compile")
});

static OFFSET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])(\d{2}):?(\d{2})$").expect("offset regex should compile")
});

/// How decimal coordinates are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateFormat {
    /// Latitude and longitude become [`Value::Number`].
    #[default]
    Numeric,
    /// Latitude and longitude become decimal [`Value::Text`].
    Human,
}

/// A resolved coordinate axis: signed value plus its textual rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub value: f64,
    pub text: String,
}

impl Coordinate {
    pub fn to_value(&self, format: CoordinateFormat) -> Value {
        match format {
            CoordinateFormat::Numeric => Value::Number(self.value),
            CoordinateFormat::Human => Value::Text(self.text.clone()),
        }
    }
}

/// Round to `digits` significant digits and render in shortest form.
pub fn format_significant(value: f64, digits: usize) -> String {
    let precision = digits.saturating_sub(1);
    let rounded: f64 = format!("{value:.precision$e}").parse().unwrap_or(value);
    rounded.to_string()
}

/// Evaluate `"a/b"`. Returns `None` for anything else or a zero denominator.
pub fn parse_fraction(text: &str) -> Option<f64> {
    let caps = FRACTION_PATTERN.captures(text)?;
    let numerator: f64 = caps[1].parse().ok()?;
    let denominator: f64 = caps[2].parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// The number at the start of a value such as `"15 m"` or `"4.2 mm"`.
pub fn leading_number(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Number(n) if n.is_finite() => Some(*n),
        RawValue::Text(s) => s
            .split_whitespace()
            .next()?
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite()),
        _ => None,
    }
}

/// `"f/{n:.1}"` for a numeric f-number.
pub fn format_aperture(raw: &RawValue) -> Option<String> {
    raw.as_number().map(|n| format!("f/{n:.1}"))
}

/// `"{n}m"` for a distance in meters.
pub fn format_focus_distance(raw: &RawValue) -> Option<String> {
    leading_number(raw).map(|n| format!("{n}m"))
}

/// Render an exposure time as a shutter-speed fraction.
///
/// Fraction text passes through. Other values become `"1/x"` with
/// `x = round(1 / value)` and zero renders as `"0"`. From two seconds up `x`
/// would round to zero, so those exposures are rendered as plain seconds.
pub fn format_exposure_time(raw: &RawValue) -> Option<String> {
    if let Some(text) = raw.as_text() {
        if FRACTION_PATTERN.is_match(text) {
            return Some(text.to_string());
        }
    }

    let seconds = raw.as_number()?;
    if seconds < 0.0 {
        return None;
    }
    if seconds == 0.0 {
        return Some("0".to_string());
    }
    if seconds >= 2.0 {
        return Some(seconds.to_string());
    }
    Some(format!("1/{}", (1.0 / seconds).round()))
}

/// The first whitespace-separated token of an ISO reading.
pub fn first_iso_token(raw: &RawValue) -> Option<Value> {
    match raw {
        RawValue::Number(n) => Some(Value::Number(*n)),
        RawValue::Text(s) => s.split_whitespace().next().map(Value::from),
        RawValue::List(items) => items
            .first()
            .and_then(|s| s.split_whitespace().next())
            .map(Value::from),
    }
}

/// Keep a compass bearing only if it is a real number.
pub fn image_direction(raw: &RawValue) -> Option<Value> {
    match raw {
        RawValue::Number(n) if n.is_finite() => Some(Value::Number(*n)),
        RawValue::Text(_) => {
            let text = raw.as_text()?;
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|_| Value::from(text))
        }
        _ => None,
    }
}

/// Rotation in whole degrees, normalized to `0..360`.
fn rotation_degrees(raw: &RawValue) -> Option<i64> {
    let degrees = raw.as_number()?;
    Some((degrees.round() as i64).rem_euclid(360))
}

/// Width and height from a `"{w}x{h}"` (or `"{w} {h}"`) size, swapped when the
/// rotation is a quarter turn.
pub fn resolve_dimensions(size: &RawValue, rotation: Option<&RawValue>) -> Option<(u32, u32)> {
    let text = size.as_text()?;
    let mut parts = text
        .split(|c: char| c == 'x' || c == 'X' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let width: u32 = parts.next()?.parse().ok()?;
    let height: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    match rotation.and_then(rotation_degrees) {
        Some(90) | Some(270) => Some((height, width)),
        _ => Some((width, height)),
    }
}

/// Which side of the equator/meridian a coordinate lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hemisphere {
    Positive,
    Negative,
}

fn hemisphere_of(letter: char) -> Option<Hemisphere> {
    match letter.to_ascii_uppercase() {
        'N' | 'E' => Some(Hemisphere::Positive),
        'S' | 'W' => Some(Hemisphere::Negative),
        _ => None,
    }
}

fn hemisphere_from_ref(reference: Option<&RawValue>) -> Option<Hemisphere> {
    let letter = reference?.as_text()?.chars().next()?;
    hemisphere_of(letter)
}

/// Resolve one coordinate axis to signed decimal degrees.
///
/// Decimal input keeps its digits verbatim; DMS text (`40 deg 20' 0.42857" N`)
/// is converted and rendered to 14 significant digits. The sign comes from the
/// reference tag, then the DMS hemisphere letter, then the input's own sign.
pub fn resolve_coordinate(raw: &RawValue, reference: Option<&RawValue>) -> Option<Coordinate> {
    let (magnitude, text, negative_input, suffix) = match raw {
        RawValue::Number(n) if n.is_finite() => (n.abs(), n.abs().to_string(), *n < 0.0, None),
        RawValue::Text(_) => {
            let text = raw.as_text()?;
            if text.is_empty() {
                return None;
            }
            if let Ok(n) = text.parse::<f64>() {
                if !n.is_finite() {
                    return None;
                }
                let digits = text.trim_start_matches(['-', '+']).to_string();
                (n.abs(), digits, n < 0.0, None)
            } else {
                let caps = DMS_PATTERN.captures(text)?;
                let degrees: f64 = caps[1].parse().ok()?;
                let minutes: f64 = caps[2].parse().ok()?;
                let seconds: f64 = caps[3].parse().ok()?;
                let value = degrees + minutes / 60.0 + seconds / 3600.0;
                let suffix = caps
                    .get(4)
                    .and_then(|m| m.as_str().chars().next())
                    .and_then(hemisphere_of);
                (value, format_significant(value, COORDINATE_PRECISION), false, suffix)
            }
        }
        _ => return None,
    };

    let hemisphere = hemisphere_from_ref(reference).or(suffix).unwrap_or(if negative_input {
        Hemisphere::Negative
    } else {
        Hemisphere::Positive
    });

    if hemisphere == Hemisphere::Negative && magnitude != 0.0 {
        let value: f64 = format!("-{text}").parse().unwrap_or(-magnitude);
        Some(Coordinate {
            value,
            text: format!("-{text}"),
        })
    } else {
        let value: f64 = text.parse().unwrap_or(magnitude);
        Some(Coordinate { value, text })
    }
}

fn is_below_sea_level(reference: Option<&RawValue>) -> bool {
    match reference {
        Some(RawValue::Number(n)) => *n == 1.0,
        Some(raw) => raw
            .as_text()
            .is_some_and(|text| text == "1" || text.to_ascii_lowercase().starts_with("below")),
        None => false,
    }
}

/// Apply an altitude reference to a raw altitude.
///
/// Text input that ends up negative stays text with a leading `-`; text that
/// stays positive becomes a number; numeric input stays numeric.
pub fn resolve_altitude(raw: &RawValue, reference: Option<&RawValue>) -> Option<Value> {
    let below = is_below_sea_level(reference);
    match raw {
        RawValue::Number(n) if n.is_finite() => {
            Some(Value::Number(if below { -n.abs() } else { *n }))
        }
        RawValue::Text(_) => {
            let text = raw.as_text()?;
            let n = raw.as_number()?;
            if below {
                Some(Value::Text(format!("-{}", text.trim_start_matches(['-', '+']))))
            } else {
                Some(Value::Number(n))
            }
        }
        _ => None,
    }
}

/// Parse `±HHMM` / `±HH:MM`.
pub fn parse_offset(text: &str) -> Option<FixedOffset> {
    let caps = OFFSET_PATTERN.captures(text.trim())?;
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = caps[3].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let seconds = hours * 3600 + minutes * 60;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(sign * seconds)
}

/// Parse an EXIF-style (`YYYY:MM:DD HH:MM:SS`) or ISO-8601 timestamp with an
/// optional fractional second and UTC offset.
pub fn parse_timestamp(text: &str) -> Option<CreationDate> {
    let caps = TIMESTAMP_PATTERN.captures(text.trim())?;
    let number = |i: usize| caps[i].parse::<u32>().ok();

    let date = NaiveDate::from_ymd_opt(caps[1].parse().ok()?, number(2)?, number(3)?)?;
    let nanos: u32 = match caps.get(7) {
        Some(fraction) => format!("{:0<9}", fraction.as_str()).parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(number(4)?, number(5)?, number(6)?, nanos)?;
    let local = NaiveDateTime::new(date, time);

    let offset = match caps.get(8).map(|m| m.as_str()) {
        Some("Z") => Some(FixedOffset::east_opt(0)?),
        Some(suffix) => Some(parse_offset(suffix)?),
        None => None,
    };
    Some(CreationDate::new(local, offset))
}
