use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FEET_PER_POLE: f64 = 16.5;

/// Unit a deed's distances are written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Feet,
    Poles,
    Rods,
}

impl DistanceUnit {
    pub fn feet_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Feet => 1.0,
            DistanceUnit::Poles | DistanceUnit::Rods => FEET_PER_POLE,
        }
    }

    pub fn to_feet(self, value: f64) -> f64 {
        value * self.feet_per_unit()
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "feet" => Ok(DistanceUnit::Feet),
            "poles" => Ok(DistanceUnit::Poles),
            "rods" => Ok(DistanceUnit::Rods),
            other => Err(format!("unknown distance unit {other:?}")),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistanceUnit::Feet => "feet",
            DistanceUnit::Poles => "poles",
            DistanceUnit::Rods => "rods",
        };
        f.write_str(name)
    }
}
