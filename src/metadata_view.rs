use crate::ExifFactsError;
use crate::camera::resolve_camera;
use crate::gps::error::GpsError;
use crate::gps::resolve_location;
use crate::gps::structs::Location;
use crate::structs::ExifSummary;
use crate::tags::{
    ARTIST, CAMERA_OWNER_NAME, DATE_TIME, DATE_TIME_DIGITIZED, DATE_TIME_ORIGINAL, MIME_TYPE,
    as_text, is_absent,
};
use crate::time::error::TimeError;
use crate::time::{DEFAULT_DATE_FORMAT, resolve_date, resolve_datetime};
use bon::bon;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// A read-only view over one image's decoded EXIF tags.
///
/// Every accessor is a pure function of the tags the view was built from. Absent tags come
/// back as `None`; values that are present but malformed come back as errors.
///
/// The quickest way in is [`From`]:
/// ```rust
/// # use exif_facts::MetadataView;
/// # use serde_json::json;
/// let view = MetadataView::from(json!({ "Artist": "Jane Doe" }));
/// assert_eq!(view.artist().as_deref(), Some("Jane Doe"));
/// ```
///
/// Use the builder to change how dates are rendered:
/// ```rust
/// # use exif_facts::MetadataView;
/// # use serde_json::json;
/// let view = MetadataView::builder()
///     .tags(json!({ "DateTime": "2023:01:05 14:30:00" }))
///     .date_format("%Y-%m-%d")
///     .build();
/// assert_eq!(view.last_modified().unwrap().as_deref(), Some("2023-01-05"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataView {
    tags: Map<String, Value>,
    date_format: String,
}

#[bon]
impl MetadataView {
    /// Constructs a `MetadataView` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `tags: Value` - The decoded tag map. Anything other than a JSON object gives an empty view.
    /// * `date_format: Option<String>` - (Default: [`DEFAULT_DATE_FORMAT`]) A chrono `strftime` pattern used by [`Self::created`], [`Self::scanned`] and [`Self::last_modified`]. Only date specifiers are allowed.
    #[builder]
    pub fn new(#[builder(into)] tags: Value, #[builder(into)] date_format: Option<String>) -> Self {
        let tags = match tags {
            Value::Object(map) => map,
            other => {
                log::debug!("tag input is not a mapping ({other}), using an empty view");
                Map::new()
            }
        };
        Self {
            tags,
            date_format: date_format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
        }
    }

    /// Raw tag value, `None` when the tag is missing, `null`, an empty string or an empty list.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tags.get(key).filter(|value| !is_absent(value))
    }

    /// Text of a present, string-like tag. Numbers and booleans are rendered as text.
    pub fn get_str(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(as_text)
    }

    /// The tags this view was built from.
    pub const fn raw(&self) -> &Map<String, Value> {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Camera display name. See [`crate::camera::resolve_camera`] for the fallback order.
    pub fn camera(&self) -> Option<String> {
        resolve_camera(self)
    }

    pub fn owner(&self) -> Option<String> {
        self.get_str(CAMERA_OWNER_NAME).map(Cow::into_owned)
    }

    pub fn artist(&self) -> Option<String> {
        self.get_str(ARTIST).map(Cow::into_owned)
    }

    pub fn mimetype(&self) -> Option<String> {
        self.get_str(MIME_TYPE).map(Cow::into_owned)
    }

    /// GPS location in decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns [`GpsError`] when all four GPS tags are present but a coordinate component is
    /// not a number, has a zero denominator, or the coordinate does not hold exactly three
    /// components.
    pub fn location(&self) -> Result<Option<Location>, GpsError> {
        resolve_location(self)
    }

    /// Date the picture was taken (`DateTimeOriginal`).
    pub fn created(&self) -> Result<Option<String>, TimeError> {
        resolve_date(self, DATE_TIME_ORIGINAL, &self.date_format)
    }

    /// Date the picture was digitized (`DateTimeDigitized`).
    pub fn scanned(&self) -> Result<Option<String>, TimeError> {
        resolve_date(self, DATE_TIME_DIGITIZED, &self.date_format)
    }

    /// Date the file was last changed (`DateTime`).
    pub fn last_modified(&self) -> Result<Option<String>, TimeError> {
        resolve_date(self, DATE_TIME, &self.date_format)
    }

    pub fn created_at(&self) -> Result<Option<NaiveDateTime>, TimeError> {
        resolve_datetime(self, DATE_TIME_ORIGINAL)
    }

    pub fn scanned_at(&self) -> Result<Option<NaiveDateTime>, TimeError> {
        resolve_datetime(self, DATE_TIME_DIGITIZED)
    }

    pub fn last_modified_at(&self) -> Result<Option<NaiveDateTime>, TimeError> {
        resolve_datetime(self, DATE_TIME)
    }

    /// Resolves every fact at once.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed GPS coordinate or timestamp.
    pub fn summary(&self) -> Result<ExifSummary, ExifFactsError> {
        Ok(ExifSummary {
            camera: self.camera(),
            owner: self.owner(),
            artist: self.artist(),
            location: self.location()?,
            created: self.created()?,
            scanned: self.scanned()?,
            last_modified: self.last_modified()?,
            mime_type: self.mimetype(),
        })
    }
}

impl From<Value> for MetadataView {
    fn from(tags: Value) -> Self {
        Self::builder().tags(tags).build()
    }
}

impl From<Map<String, Value>> for MetadataView {
    fn from(tags: Map<String, Value>) -> Self {
        Self::from(Value::Object(tags))
    }
}

impl From<HashMap<String, String>> for MetadataView {
    fn from(tags: HashMap<String, String>) -> Self {
        Self::from(Value::Object(
            tags.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
        ))
    }
}

impl From<BTreeMap<String, String>> for MetadataView {
    fn from(tags: BTreeMap<String, String>) -> Self {
        Self::from(Value::Object(
            tags.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
        ))
    }
}
