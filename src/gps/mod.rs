//! Resolution of the four `GPS*` tags into a decimal-degree [`Location`].
pub mod error;
pub mod parsing;
pub mod structs;

use crate::metadata_view::MetadataView;
use crate::tags::{GPS_LATITUDE, GPS_LATITUDE_REF, GPS_LONGITUDE, GPS_LONGITUDE_REF, as_text};
use error::GpsError;
use parsing::{dms_to_decimal, parse_dms};
use serde_json::Value;
use structs::{Hemisphere, Location};

/// Every tag that has to be present before a location is attempted.
pub const REQUIRED_GPS_TAGS: [&str; 4] =
    [GPS_LATITUDE_REF, GPS_LATITUDE, GPS_LONGITUDE_REF, GPS_LONGITUDE];

/// Resolves the image location.
///
/// Returns `Ok(None)` when any of [`REQUIRED_GPS_TAGS`] is absent, so a location is never
/// half-populated. A present but unparsable coordinate fails the whole call.
pub fn resolve_location(view: &MetadataView) -> Result<Option<Location>, GpsError> {
    let [Some(lat_ref), Some(lat), Some(lon_ref), Some(lon)] =
        REQUIRED_GPS_TAGS.map(|tag| view.get(tag))
    else {
        log::debug!("no location: one of {REQUIRED_GPS_TAGS:?} is absent");
        return Ok(None);
    };

    Ok(Some(Location {
        latitude: dms_to_decimal(parse_dms(GPS_LATITUDE, lat)?, hemisphere(lat_ref)),
        longitude: dms_to_decimal(parse_dms(GPS_LONGITUDE, lon)?, hemisphere(lon_ref)),
    }))
}

fn hemisphere(reference: &Value) -> Hemisphere {
    as_text(reference).map_or(Hemisphere::Other, |r| Hemisphere::from_ref(&r))
}
