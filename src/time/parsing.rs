//! Parsing EXIF datetime strings and rendering them as calendar dates.

use super::error::TimeError;
use chrono::NaiveDateTime;
use std::fmt::Write;

/// The fixed EXIF datetime layout, `YYYY:MM:DD HH:MM:SS`.
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Default rendering for resolved timestamps, e.g. `Jan 5, 2023`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Parses `value` read from `tag` as a naive EXIF datetime.
///
/// Decoders often hand back ASCII fields with trailing NUL padding, so surrounding
/// whitespace and NULs are stripped before the strict match.
pub fn parse_exif_datetime(tag: &str, value: &str) -> Result<NaiveDateTime, TimeError> {
    let malformed = || TimeError::MalformedDateTime {
        tag: tag.to_string(),
        value: value.to_string(),
    };
    let cleaned = value.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    // chrono accepts single digits and collapsed whitespace, so the layout is checked first.
    if !has_exif_layout(cleaned) {
        return Err(malformed());
    }
    NaiveDateTime::parse_from_str(cleaned, EXIF_DATETIME_FORMAT).map_err(|_| malformed())
}

/// `YYYY:MM:DD HH:MM:SS`, byte for byte.
fn has_exif_layout(value: &str) -> bool {
    value.len() == 19
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 | 13 | 16 => b == b':',
            10 => b == b' ',
            _ => b.is_ascii_digit(),
        })
}

/// Renders the date part of `datetime` with a chrono `strftime` pattern.
pub fn format_date(datetime: &NaiveDateTime, format: &str) -> Result<String, TimeError> {
    let mut rendered = String::new();
    write!(rendered, "{}", datetime.date().format(format))
        .map_err(|_| TimeError::InvalidDisplayFormat(format.to_string()))?;
    Ok(rendered)
}
