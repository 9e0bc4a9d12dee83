use crate::math::earth::{EarthHelper, MEAN_EARTH_RADIUS_M};
use serde::{Deserialize, Serialize};

pub use crate::bearing::Bearing;

/// Geographic point in decimal degrees, east and north positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// One call of a deed: a raw bearing and a distance already converted to feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub bearing_text: String,
    pub distance_feet: f64,
}

impl SurveyRecord {
    pub fn new(bearing_text: impl Into<String>, distance_feet: f64) -> Self {
        Self {
            bearing_text: bearing_text.into(),
            distance_feet,
        }
    }
}

/// Earth model shared by every projector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub earth_radius_m: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: MEAN_EARTH_RADIUS_M,
        }
    }
}

impl ProjectionConfig {
    pub fn feet_per_degree_latitude(&self) -> f64 {
        EarthHelper::feet_per_degree_latitude(self.earth_radius_m)
    }

    pub fn radius_feet(&self) -> f64 {
        EarthHelper::meters_to_feet(self.earth_radius_m)
    }
}

/// Failure to resolve a bearing string. Every variant keeps the raw text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty bearing")]
    Empty(String),
    #[error("unrecognized bearing: {0:?}")]
    Unrecognized(String),
    #[error("bearing has no angle: {0:?}")]
    MissingAngle(String),
    #[error("seconds supplied without minutes: {0:?}")]
    SecondsWithoutMinutes(String),
    #[error("angle component marked out of order: {0:?}")]
    MisplacedComponent(String),
    #[error("more than degrees, minutes and seconds: {0:?}")]
    TooManyComponents(String),
    #[error("minutes and seconds must be below 60: {0:?}")]
    ComponentOutOfRange(String),
    #[error("angle out of range for its form: {0:?}")]
    AngleOutOfRange(String),
}

impl ParseError {
    /// The offending bearing text.
    pub fn text(&self) -> &str {
        match self {
            ParseError::Empty(text)
            | ParseError::Unrecognized(text)
            | ParseError::MissingAngle(text)
            | ParseError::SecondsWithoutMinutes(text)
            | ParseError::MisplacedComponent(text)
            | ParseError::TooManyComponents(text)
            | ParseError::ComponentOutOfRange(text)
            | ParseError::AngleOutOfRange(text) => text,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Error raised while folding records into a traverse.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TraverseError {
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: ParseError,
    },
}

pub type TraverseResult<T> = Result<T, TraverseError>;

/// Advances a coordinate along a bearing. Implementations are pure.
pub trait Projector {
    fn project(&self, origin: Coordinate, bearing: Bearing, distance_feet: f64) -> Coordinate;
}

impl<P: Projector + ?Sized> Projector for &P {
    fn project(&self, origin: Coordinate, bearing: Bearing, distance_feet: f64) -> Coordinate {
        (**self).project(origin, bearing, distance_feet)
    }
}

impl<P: Projector + ?Sized> Projector for Box<P> {
    fn project(&self, origin: Coordinate, bearing: Bearing, distance_feet: f64) -> Coordinate {
        (**self).project(origin, bearing, distance_feet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_mean_radius() {
        let config = ProjectionConfig::default();
        assert_eq!(config.earth_radius_m, 6_371_008.8);
        assert!((config.feet_per_degree_latitude() - 364_813.255_359).abs() < 1e-3);
    }

    #[test]
    fn parse_error_keeps_raw_text() {
        let err = ParseError::SecondsWithoutMinutes("S 46° 26\" E".into());
        assert_eq!(err.text(), "S 46° 26\" E");
        assert!(err.to_string().contains("seconds"));
    }

    #[test]
    fn coordinate_serializes_with_named_fields() {
        let json = serde_json::to_string(&Coordinate::new(-75.0, 40.0)).unwrap();
        assert_eq!(json, r#"{"longitude":-75.0,"latitude":40.0}"#);
    }
}
