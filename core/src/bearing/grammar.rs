use crate::bearing::tokens::{self, NumericToken, UnitMark};
use crate::math::angles::{AngleHelper, MINUTES_PER_DEGREE};
use crate::prelude::{ParseError, ParseResult};
use std::str::FromStr;

const MAX_QUADRANT_DEG: f64 = 90.0;
const MAX_HEADING_DEG: f64 = 360.0;
const MAX_COMPONENTS: usize = 3;

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Accepts the single letter or the full word, in any case.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "n" | "north" => Some(Cardinal::North),
            "e" | "east" => Some(Cardinal::East),
            "s" | "south" => Some(Cardinal::South),
            "w" | "west" => Some(Cardinal::West),
            _ => None,
        }
    }

    pub fn azimuth(self) -> f64 {
        match self {
            Cardinal::North => 0.0,
            Cardinal::East => 90.0,
            Cardinal::South => 180.0,
            Cardinal::West => 270.0,
        }
    }
}

/// Reference end of a quadrant bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridian {
    North,
    South,
}

/// Side a quadrant bearing turns toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deflection {
    East,
    West,
}

/// Angle magnitude as written: degrees, then optional minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub degrees: f64,
    pub minutes: Option<f64>,
    pub seconds: Option<f64>,
}

impl Angle {
    pub fn decimal(&self) -> f64 {
        AngleHelper::from_dms(
            self.degrees,
            self.minutes.unwrap_or(0.0),
            self.seconds.unwrap_or(0.0),
        )
    }

    fn from_tokens(found: &[NumericToken], text: &str) -> ParseResult<Self> {
        if found.is_empty() {
            return Err(ParseError::MissingAngle(text.to_string()));
        }
        if found.len() > MAX_COMPONENTS {
            return Err(ParseError::TooManyComponents(text.to_string()));
        }

        for (slot, token) in found.iter().enumerate() {
            match token.mark {
                Some(UnitMark::Seconds) if slot < UnitMark::Seconds.slot() => {
                    return Err(ParseError::SecondsWithoutMinutes(text.to_string()));
                }
                Some(mark) if mark.slot() != slot => {
                    return Err(ParseError::MisplacedComponent(text.to_string()));
                }
                _ => {}
            }
        }

        let minutes = found.get(1).map(|t| t.value);
        let seconds = found.get(2).map(|t| t.value);
        let in_range = |v: Option<f64>| v.map_or(true, |v| v < MINUTES_PER_DEGREE);
        if !in_range(minutes) || !in_range(seconds) {
            return Err(ParseError::ComponentOutOfRange(text.to_string()));
        }

        Ok(Self {
            degrees: found[0].value,
            minutes,
            seconds,
        })
    }
}

/// A recognized bearing, before any azimuth arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedBearing {
    /// Compass heading measured clockwise from north, e.g. `340 55 03`.
    Heading(Angle),
    /// Bare direction, e.g. `S` or `north`.
    DueDirection(Cardinal),
    /// Surveyor's quadrant form, e.g. `S 46° 59' 26" E`.
    Quadrant {
        start: Meridian,
        angle: Angle,
        end: Deflection,
    },
}

impl ParsedBearing {
    pub fn recognize(text: &str) -> ParseResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty(text.to_string()));
        }
        let unrecognized = || ParseError::Unrecognized(text.to_string());

        // punctuation after the end direction (`N 45 E.`) carries no meaning
        let body = trimmed.trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
        let (leading, rest) = split_leading_word(body);
        if rest.trim().is_empty() {
            return Cardinal::from_word(leading)
                .map(ParsedBearing::DueDirection)
                .ok_or_else(unrecognized);
        }

        let (middle, trailing) = split_trailing_word(rest);

        if leading.is_empty() {
            if !tokens::starts_with_number(trimmed) || Cardinal::from_word(trailing).is_some() {
                return Err(unrecognized());
            }
            let angle = Angle::from_tokens(&tokens::extract(trimmed), text)?;
            if angle.decimal() > MAX_HEADING_DEG {
                return Err(ParseError::AngleOutOfRange(text.to_string()));
            }
            return Ok(ParsedBearing::Heading(angle));
        }

        let start = match Cardinal::from_word(leading) {
            Some(Cardinal::North) => Meridian::North,
            Some(Cardinal::South) => Meridian::South,
            _ => return Err(unrecognized()),
        };
        let end = match Cardinal::from_word(trailing) {
            Some(Cardinal::East) => Deflection::East,
            Some(Cardinal::West) => Deflection::West,
            _ => return Err(unrecognized()),
        };

        let angle = Angle::from_tokens(&tokens::extract(middle), text)?;
        if angle.decimal() > MAX_QUADRANT_DEG {
            return Err(ParseError::AngleOutOfRange(text.to_string()));
        }

        Ok(ParsedBearing::Quadrant { start, angle, end })
    }

    /// Azimuth in degrees clockwise from north, within [0, 360).
    pub fn azimuth(&self) -> f64 {
        let raw = match *self {
            ParsedBearing::Heading(angle) => angle.decimal(),
            ParsedBearing::DueDirection(cardinal) => cardinal.azimuth(),
            ParsedBearing::Quadrant { start, angle, end } => {
                let magnitude = angle.decimal();
                match (start, end) {
                    (Meridian::North, Deflection::East) => magnitude,
                    (Meridian::North, Deflection::West) => 360.0 - magnitude,
                    (Meridian::South, Deflection::East) => 180.0 - magnitude,
                    (Meridian::South, Deflection::West) => 180.0 + magnitude,
                }
            }
        };
        AngleHelper::normalize(raw)
    }
}

impl FromStr for ParsedBearing {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::recognize(s)
    }
}

fn split_leading_word(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    text.split_at(end)
}

fn split_trailing_word(text: &str) -> (&str, &str) {
    let text = text.trim_end();
    let start = text
        .rfind(|c: char| !c.is_ascii_alphabetic())
        .map(|idx| idx + text[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    text.split_at(start)
}
