//! Bearing text recognition and azimuth resolution.
//!
//! Recognition produces a [`ParsedBearing`]; resolving that to an azimuth is a
//! separate pure step so both halves can be tested on their own.

pub mod grammar;
pub mod tokens;

pub use grammar::{Angle, Cardinal, Deflection, Meridian, ParsedBearing};

use crate::math::angles::AngleHelper;
use crate::prelude::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fully resolved direction, in degrees clockwise from true north.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Bearing {
    azimuth_degrees: f64,
}

impl Bearing {
    pub fn from_azimuth(degrees: f64) -> Self {
        Self {
            azimuth_degrees: AngleHelper::normalize(degrees),
        }
    }

    /// Always within [0, 360).
    pub fn azimuth(&self) -> f64 {
        self.azimuth_degrees
    }

    pub fn radians(&self) -> f64 {
        self.azimuth_degrees.to_radians()
    }

    /// The back bearing, pointing the opposite way.
    pub fn reversed(&self) -> Self {
        Self::from_azimuth(self.azimuth_degrees + 180.0)
    }
}

impl From<ParsedBearing> for Bearing {
    fn from(parsed: ParsedBearing) -> Self {
        Self::from_azimuth(parsed.azimuth())
    }
}

impl FromStr for Bearing {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°", self.azimuth_degrees)
    }
}

/// Parses free-form bearing text into an azimuth.
pub fn parse(text: &str) -> ParseResult<Bearing> {
    ParsedBearing::recognize(text).map(Bearing::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azimuth(text: &str) -> f64 {
        parse(text).unwrap().azimuth()
    }

    #[test]
    fn numeric_heading_reads_degrees_minutes_seconds() {
        assert!((azimuth("340 55 03") - 340.9175).abs() < 1e-9);
        assert_eq!(azimuth("360"), 0.0);
    }

    #[test]
    fn due_direction_shortcuts() {
        assert_eq!(azimuth("S"), 180.0);
        assert_eq!(azimuth("north"), 0.0);
        assert_eq!(azimuth("E"), 90.0);
        assert_eq!(azimuth("west"), 270.0);
    }

    #[test]
    fn degenerate_quadrant_collapses_to_north() {
        assert_eq!(azimuth("N 0 E"), 0.0);
        assert_eq!(azimuth("N 0 W"), 0.0);
    }

    #[test]
    fn punctuation_does_not_change_result() {
        let canonical = azimuth("S 46 59 26 E");
        assert_eq!(azimuth("S 46° 59' 26\" E"), canonical);
        assert_eq!(azimuth("S46 59 26E"), canonical);
        assert_eq!(azimuth("s 46 59 26 e"), canonical);
        assert!((canonical - (180.0 - (46.0 + 59.0 / 60.0 + 26.0 / 3600.0))).abs() < 1e-12);
    }

    #[test]
    fn deed_examples_resolve() {
        assert_eq!(azimuth("north 77° 15' 00\" east"), 77.25);
        assert!((azimuth("S 33 10 3 E") - (180.0 - 33.1675)).abs() < 1e-9);
        assert!((azimuth("N 22.1d E") - 22.1).abs() < 1e-12);
        assert!((azimuth("south 88º 27' 0\" west") - 268.45).abs() < 1e-9);
    }

    #[test]
    fn parsing_is_repeatable() {
        let text = "S 12 34 56 W";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
        assert_eq!(text.parse::<Bearing>().unwrap(), parse(text).unwrap());
    }

    #[test]
    fn quadrant_azimuths_stay_in_range() {
        for start in ["N", "S"] {
            for end in ["E", "W"] {
                for degrees in [0, 1, 45, 89, 90] {
                    for minutes in [0, 30, 59] {
                        let text = format!("{start} {degrees} {minutes} 59.9 {end}");
                        if let Ok(bearing) = parse(&text) {
                            assert!((0.0..360.0).contains(&bearing.azimuth()), "{text}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn seconds_without_minutes_is_an_error() {
        assert!(matches!(
            parse("N 12° 30\" W"),
            Err(ParseError::SecondsWithoutMinutes(_))
        ));
    }

    #[test]
    fn reversed_bearing_points_back() {
        assert_eq!(Bearing::from_azimuth(77.25).reversed().azimuth(), 257.25);
        assert_eq!(Bearing::from_azimuth(270.0).reversed().azimuth(), 90.0);
    }

    #[test]
    fn display_shows_four_decimals() {
        assert_eq!(Bearing::from_azimuth(22.1).to_string(), "22.1000°");
    }
}
