use thiserror::Error;

/// The primary error type for the exif-facts crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExifFactsError {
    #[error("GPS location could not be resolved: {0}")]
    Gps(#[from] crate::gps::error::GpsError),

    #[error("Timestamp could not be resolved: {0}")]
    Time(#[from] crate::time::error::TimeError),
}
