use serde::{Deserialize, Serialize};

/// A GPS position in signed decimal degrees.
///
/// Values are not clamped; out-of-range input passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// The `GPSLatitudeRef` / `GPSLongitudeRef` hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
    /// Anything that is not one of the four letters. Treated like north/east.
    Other,
}

impl Hemisphere {
    /// Exact, case-sensitive match on the reference letter.
    pub fn from_ref(reference: &str) -> Self {
        match reference {
            "N" => Self::North,
            "S" => Self::South,
            "E" => Self::East,
            "W" => Self::West,
            _ => Self::Other,
        }
    }

    pub const fn sign(self) -> f64 {
        match self {
            Self::South | Self::West => -1.0,
            Self::North | Self::East | Self::Other => 1.0,
        }
    }
}
