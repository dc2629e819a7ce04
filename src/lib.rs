//! # EXIF Facts
//!
//! Turn a flat bag of already-decoded EXIF tags into a handful of typed, human-usable facts.
//!
//! This crate does not read image files. It takes the tag map an EXIF decoder produced
//! (as a `serde_json::Value` object, or a plain string map) and resolves the fields that
//! are ambiguous or awkwardly encoded in raw EXIF.
//!
//! ## Key Features
//!
//! - **Camera**: Picks the most specific camera name tag, falling back to `Make` + `Model`.
//! - **Authorship**: Passes `CameraOwnerName` and `Artist` through untouched.
//! - **GPS Location**: Converts degree/minute/second rationals into signed decimal degrees.
//! - **Timestamps**: Parses `DateTimeOriginal`, `DateTimeDigitized` and `DateTime` and renders them as dates.
//!
//! ## Usage
//!
//! ```rust
//! use exif_facts::MetadataView;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), exif_facts::ExifFactsError> {
//! let view = MetadataView::from(json!({
//!     "Make": "Acme",
//!     "Model": "9000",
//!     "GPSLatitudeRef": "S",
//!     "GPSLatitude": ["10/1", "30/1", "0/1"],
//!     "GPSLongitudeRef": "W",
//!     "GPSLongitude": ["1/1", "0/1", "0/1"],
//!     "DateTimeOriginal": "2023:01:05 14:30:00",
//! }));
//!
//! assert_eq!(view.camera().as_deref(), Some("Acme 9000"));
//! let location = view.location()?.expect("all four GPS tags are set");
//! assert_eq!(location.latitude, -10.5);
//! assert_eq!(location.longitude, -1.0);
//! assert_eq!(view.created()?.as_deref(), Some("Jan 5, 2023"));
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod error;
pub mod gps;
pub mod metadata_view;
pub mod structs;
pub mod tags;
pub mod time;

pub use error::ExifFactsError;
pub use gps::error::{GpsError, RationalError};
pub use gps::structs::{Hemisphere, Location};
pub use metadata_view::MetadataView;
pub use structs::ExifSummary;
pub use time::error::TimeError;
pub use time::{DEFAULT_DATE_FORMAT, EXIF_DATETIME_FORMAT};
