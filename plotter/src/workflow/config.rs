use crate::output::OutputFormat;
use anyhow::Context;
use deedcore::math::earth::MEAN_EARTH_RADIUS_M;
use deedcore::{DistanceUnit, ProjectionConfig, ProjectionKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub units: DistanceUnit,
    pub projection: ProjectionKind,
    pub earth_radius_m: f64,
    pub format: OutputFormat,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            units: DistanceUnit::Feet,
            projection: ProjectionKind::Flat,
            earth_radius_m: MEAN_EARTH_RADIUS_M,
            format: OutputFormat::Csv,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        anyhow::ensure!(
            config.earth_radius_m.is_finite() && config.earth_radius_m > 0.0,
            "earth_radius_m must be positive in {}",
            path_ref.display()
        );
        Ok(config)
    }

    /// Command-line flags win over anything loaded from YAML.
    pub fn with_overrides(
        mut self,
        units: Option<DistanceUnit>,
        projection: Option<ProjectionKind>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(units) = units {
            self.units = units;
        }
        if let Some(projection) = projection {
            self.projection = projection;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn to_projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            earth_radius_m: self.earth_radius_m,
        }
    }
}
