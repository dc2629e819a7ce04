//! Tag names this crate understands and the single rule deciding whether a tag is present.

use serde_json::Value;
use std::borrow::Cow;

pub const LOCALIZED_CAMERA_MODEL: &str = "LocalizedCameraModel";
pub const UNIQUE_CAMERA_MODEL: &str = "UniqueCameraModel";
pub const CAMERA: &str = "Camera";
pub const MAKE: &str = "Make";
pub const MODEL: &str = "Model";
pub const CAMERA_OWNER_NAME: &str = "CameraOwnerName";
pub const ARTIST: &str = "Artist";
pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";
pub const DATE_TIME_ORIGINAL: &str = "DateTimeOriginal";
pub const DATE_TIME_DIGITIZED: &str = "DateTimeDigitized";
pub const DATE_TIME: &str = "DateTime";
pub const MIME_TYPE: &str = "MimeType";

/// A tag counts as absent when it is `null`, an empty string, or an empty array.
/// Whitespace-only strings, numeric zero and `false` are present values.
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Text of a string-like value. Numbers and booleans render to their canonical form,
/// arrays and objects have no text.
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}
