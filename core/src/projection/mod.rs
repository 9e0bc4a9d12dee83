pub mod flat;
pub mod spherical;
pub mod traverse;

pub use flat::FlatEarthProjector;
pub use spherical::SphericalProjector;
pub use traverse::{trace, Traverse, Traverser};

use crate::prelude::{ProjectionConfig, Projector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which projector a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    #[default]
    Flat,
    Spherical,
}

impl ProjectionKind {
    pub fn build(self, config: &ProjectionConfig) -> Box<dyn Projector> {
        match self {
            ProjectionKind::Flat => Box::new(FlatEarthProjector::new(config)),
            ProjectionKind::Spherical => Box::new(SphericalProjector::new(config)),
        }
    }
}

impl FromStr for ProjectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(ProjectionKind::Flat),
            "spherical" => Ok(ProjectionKind::Spherical),
            other => Err(format!("unknown projection {other:?}")),
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionKind::Flat => f.write_str("flat"),
            ProjectionKind::Spherical => f.write_str("spherical"),
        }
    }
}
