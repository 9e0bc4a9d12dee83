use crate::input::read_records;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use deedcore::projection::Traverser;
use deedcore::telemetry::MetricsSnapshot;
use deedcore::{Coordinate, SurveyRecord, Traverse};
use std::path::Path;

pub struct WorkflowResult {
    pub traverse: Traverse,
    pub metrics: MetricsSnapshot,
    pub misclosure_feet: f64,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn execute(
        &self,
        origin: Coordinate,
        records: &[SurveyRecord],
    ) -> anyhow::Result<WorkflowResult> {
        let projection_config = self.config.to_projection_config();
        let traverser = Traverser::new(self.config.projection.build(&projection_config));

        let traverse = traverser
            .run(origin, records)
            .with_context(|| format!("plotting with {} projection", self.config.projection))?;
        let misclosure_feet = traverse.misclosure_feet(&projection_config);

        Ok(WorkflowResult {
            traverse,
            metrics: traverser.metrics().snapshot(),
            misclosure_feet,
        })
    }

    pub fn execute_file<P: AsRef<Path>>(
        &self,
        origin: Coordinate,
        path: P,
    ) -> anyhow::Result<WorkflowResult> {
        let path = path.as_ref();
        let records = read_records(path, self.config.units)?;
        self.execute(origin, &records)
            .with_context(|| format!("processing deed file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deedcore::{DistanceUnit, ParseError, ProjectionKind, TraverseError};
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn runner_executes_workflow() {
        let runner = Runner::new(WorkflowConfig::default());
        let records = vec![
            SurveyRecord::new("N 0 E", 50.0),
            SurveyRecord::new("S 0 W", 50.0),
        ];
        let result = runner
            .execute(Coordinate::new(-75.0, 40.0), &records)
            .unwrap();
        assert_eq!(result.traverse.len(), 2);
        assert_eq!(result.metrics.legs, 2);
        assert_eq!(result.metrics.total_feet, 100.0);
        assert!(result.misclosure_feet < 1e-6);
    }

    #[test]
    fn runner_reports_failing_record() {
        let runner = Runner::new(WorkflowConfig::default());
        let records = vec![
            SurveyRecord::new("N 10 E", 50.0),
            SurveyRecord::new("sideways", 50.0),
        ];
        let err = runner
            .execute(Coordinate::new(-75.0, 40.0), &records)
            .err()
            .unwrap();
        let source = err.downcast_ref::<TraverseError>().unwrap();
        assert_eq!(
            source,
            &TraverseError::Record {
                index: 2,
                source: ParseError::Unrecognized("sideways".into()),
            }
        );
    }

    #[test]
    fn runner_converts_units_from_file() {
        let mut temp = Builder::new().suffix(".tsv").tempfile().unwrap();
        temp.write_all(b"bearing\tdistance\nN 45 E\t4\n").unwrap();

        let config = WorkflowConfig {
            units: DistanceUnit::Rods,
            projection: ProjectionKind::Spherical,
            ..Default::default()
        };
        let result = Runner::new(config)
            .execute_file(Coordinate::new(-75.0, 40.0), temp.path())
            .unwrap();
        assert_eq!(result.metrics.total_feet, 66.0);
        assert!(result.traverse.last().latitude > 40.0);
    }
}
