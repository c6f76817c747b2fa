use std::fmt;
use std::num::ParseFloatError;

use foundation::math::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateParseError {
    /// The text did not split into exactly two comma-separated fields.
    FieldCount { found: usize },
    InvalidNumber {
        field: &'static str,
        text: String,
        source: ParseFloatError,
    },
    /// Parsed, but infinite or NaN. JSON has no way to store these.
    NonFinite { field: &'static str, text: String },
}

impl fmt::Display for CoordinateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateParseError::FieldCount { found } => {
                write!(f, "expected \"lat,lon\", found {found} field(s)")
            }
            CoordinateParseError::InvalidNumber { field, text, source } => {
                write!(f, "invalid {field} {text:?}: {source}")
            }
            CoordinateParseError::NonFinite { field, text } => {
                write!(f, "{field} {text:?} is not a finite number")
            }
        }
    }
}

impl std::error::Error for CoordinateParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoordinateParseError::InvalidNumber { source, .. } => Some(source),
            CoordinateParseError::FieldCount { .. }
            | CoordinateParseError::NonFinite { .. } => None,
        }
    }
}

/// Parse typed text of the form `"lat,lon"` (degrees).
///
/// Whitespace around either number is allowed. Values must be finite but
/// no range check is made.
pub fn parse_coordinate_pair(text: &str) -> Result<Coordinate, CoordinateParseError> {
    let fields: Vec<&str> = text.split(',').collect();
    let [lat, lon] = fields.as_slice() else {
        return Err(CoordinateParseError::FieldCount {
            found: fields.len(),
        });
    };
    Ok(Coordinate::new(
        parse_field("latitude", lat)?,
        parse_field("longitude", lon)?,
    ))
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, CoordinateParseError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|source| CoordinateParseError::InvalidNumber {
            field,
            text: trimmed.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(CoordinateParseError::NonFinite {
            field,
            text: trimmed.to_string(),
        });
    }
    Ok(value)
}
