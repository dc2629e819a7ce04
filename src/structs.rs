use crate::gps::structs::Location;
use serde::{Deserialize, Serialize};

/// Every normalized fact about one image, each independently present or absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifSummary {
    pub camera: Option<String>,
    pub owner: Option<String>,
    pub artist: Option<String>,
    pub location: Option<Location>,
    /// Rendered date of `DateTimeOriginal`.
    pub created: Option<String>,
    /// Rendered date of `DateTimeDigitized`.
    pub scanned: Option<String>,
    /// Rendered date of `DateTime`.
    pub last_modified: Option<String>,
    pub mime_type: Option<String>,
}
