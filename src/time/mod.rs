//! Module for resolving the three EXIF timestamps.
pub mod error;
mod parsing;

pub use parsing::{DEFAULT_DATE_FORMAT, EXIF_DATETIME_FORMAT, format_date, parse_exif_datetime};

use crate::metadata_view::MetadataView;
use crate::tags::as_text;
use chrono::NaiveDateTime;
use error::TimeError;

/// Reads `tag` as an EXIF datetime.
///
/// An absent tag is `Ok(None)`. A present value that is not in [`EXIF_DATETIME_FORMAT`]
/// is an error, never a default date.
pub fn resolve_datetime(
    view: &MetadataView,
    tag: &str,
) -> Result<Option<NaiveDateTime>, TimeError> {
    let Some(value) = view.get(tag) else {
        return Ok(None);
    };
    let text = as_text(value).ok_or_else(|| TimeError::MalformedDateTime {
        tag: tag.to_string(),
        value: value.to_string(),
    })?;
    parse_exif_datetime(tag, &text).map(Some)
}

/// Reads `tag` as an EXIF datetime and renders its date with `date_format`.
pub fn resolve_date(
    view: &MetadataView,
    tag: &str,
    date_format: &str,
) -> Result<Option<String>, TimeError> {
    resolve_datetime(view, tag)?
        .map(|dt| format_date(&dt, date_format))
        .transpose()
}
