//! Parsing of EXIF rational strings and degree/minute/second sequences.

use super::error::{GpsError, RationalError};
use super::structs::Hemisphere;
use serde_json::Value;

/// Parses one EXIF rational, either a bare number (`"30"`, `"12.5"`) or `"numerator/denominator"`.
///
/// Non-finite values and zero denominators are rejected.
pub fn parse_rational(component: &str) -> Result<f64, RationalError> {
    let trimmed = component.trim();
    let malformed = || RationalError::Malformed(component.to_string());

    let value = match trimmed.split_once('/') {
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().map_err(|_| malformed())?;
            let den = den.trim().parse::<f64>().map_err(|_| malformed())?;
            if den == 0.0 {
                return Err(RationalError::ZeroDenominator(component.to_string()));
            }
            num / den
        }
        None => trimmed.parse::<f64>().map_err(|_| malformed())?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(malformed())
    }
}

fn parse_component(component: &Value) -> Result<f64, RationalError> {
    match component {
        Value::String(s) => parse_rational(s),
        Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RationalError::Malformed(n.to_string())),
        other => Err(RationalError::Malformed(other.to_string())),
    }
}

/// Reads the three degree/minute/second components stored under `tag`.
///
/// Accepts a JSON array of components or one string with the components separated by
/// commas and/or whitespace.
pub fn parse_dms(tag: &str, value: &Value) -> Result<[f64; 3], GpsError> {
    let components: Vec<Value> = match value {
        Value::Array(items) => items.clone(),
        Value::String(s) => s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| Value::String(part.to_string()))
            .collect(),
        _ => {
            return Err(GpsError::NotASequence {
                tag: tag.to_string(),
            });
        }
    };

    let [degrees, minutes, seconds] = components.as_slice() else {
        return Err(GpsError::WrongComponentCount {
            tag: tag.to_string(),
            found: components.len(),
        });
    };

    let parse = |component: &Value| {
        parse_component(component).map_err(|source| GpsError::InvalidComponent {
            tag: tag.to_string(),
            source,
        })
    };
    Ok([parse(degrees)?, parse(minutes)?, parse(seconds)?])
}

/// Combines degrees, minutes and seconds into signed decimal degrees.
pub fn dms_to_decimal(dms: [f64; 3], hemisphere: Hemisphere) -> f64 {
    let [degrees, minutes, seconds] = dms;
    hemisphere.sign() * (degrees + minutes / 60.0 + seconds / 3600.0)
}
