use crate::bearing;
use crate::prelude::{
    Coordinate, ProjectionConfig, Projector, SurveyRecord, TraverseError, TraverseResult,
};
use crate::telemetry::{LogManager, MetricsRecorder};
use serde::Serialize;

/// A plotted deed: the origin plus one coordinate per record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traverse {
    origin: Coordinate,
    points: Vec<Coordinate>,
}

impl Traverse {
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            points: Vec::new(),
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Projected coordinates, one per record, in record order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Origin followed by every projected point.
    pub fn vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        std::iter::once(self.origin).chain(self.points.iter().copied())
    }

    /// Where the next leg would start.
    pub fn last(&self) -> Coordinate {
        self.points.last().copied().unwrap_or(self.origin)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gap in feet between the final point and the origin.
    pub fn misclosure_feet(&self, config: &ProjectionConfig) -> f64 {
        let end = self.last();
        let feet_per_degree = config.feet_per_degree_latitude();
        let north = (end.latitude - self.origin.latitude) * feet_per_degree;
        let east = (end.longitude - self.origin.longitude)
            * feet_per_degree
            * self.origin.latitude.to_radians().cos();
        north.hypot(east)
    }

    fn push(&mut self, point: Coordinate) {
        self.points.push(point);
    }
}

/// Folds survey records into a traverse with a single projector.
pub struct Traverser<P> {
    projector: P,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl<P: Projector> Traverser<P> {
    pub fn new(projector: P) -> Self {
        Self {
            projector,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Stops at the first record whose bearing does not parse; `index` in the
    /// error is 1-based.
    pub fn run(&self, origin: Coordinate, records: &[SurveyRecord]) -> TraverseResult<Traverse> {
        let mut traverse = Traverse::new(origin);

        for (offset, record) in records.iter().enumerate() {
            let index = offset + 1;
            let bearing = bearing::parse(&record.bearing_text).map_err(|source| {
                self.metrics.record_failure();
                self.logger.record_failure(index, &source);
                TraverseError::Record { index, source }
            })?;

            let next = self
                .projector
                .project(traverse.last(), bearing, record.distance_feet);
            self.metrics.record_leg(record.distance_feet);
            self.logger
                .record_leg(index, bearing, record.distance_feet, next);
            traverse.push(next);
        }

        let snapshot = self.metrics.snapshot();
        self.logger.record(&format!(
            "traverse of {} legs, {:.2} ft total",
            snapshot.legs, snapshot.total_feet
        ));
        Ok(traverse)
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

/// Projects every record in order, each leg starting where the last ended.
pub fn trace<P: Projector>(
    origin: Coordinate,
    records: &[SurveyRecord],
    projector: P,
) -> TraverseResult<Traverse> {
    Traverser::new(projector).run(origin, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::ParseError;
    use crate::projection::FlatEarthProjector;

    fn deed() -> Vec<SurveyRecord> {
        vec![
            SurveyRecord::new("north 77° 15' 00\" east", 103.75),
            SurveyRecord::new("S 46° 59' 26\" E", 95.0),
            SurveyRecord::new("S 33 10 3 E", 50.0),
            SurveyRecord::new("N 22.1d E", 60.0),
            SurveyRecord::new("S", 5.7),
            SurveyRecord::new("340 55 03", 5.7),
        ]
    }

    #[test]
    fn one_point_per_record() {
        let traverse = trace(
            Coordinate::new(-75.0, 40.0),
            &deed(),
            FlatEarthProjector::default(),
        )
        .unwrap();
        assert_eq!(traverse.len(), 6);
        assert_eq!(traverse.vertices().count(), 7);
        assert_eq!(traverse.vertices().next(), Some(traverse.origin()));
        assert_eq!(traverse.last(), traverse.points()[5]);
    }

    #[test]
    fn each_leg_starts_at_previous_end() {
        let projector = FlatEarthProjector::default();
        let records = deed();
        let traverse = trace(Coordinate::new(-75.0, 40.0), &records, projector).unwrap();

        let mut current = traverse.origin();
        for (record, point) in records.iter().zip(traverse.points()) {
            let bearing = bearing::parse(&record.bearing_text).unwrap();
            current = projector.project(current, bearing, record.distance_feet);
            assert_eq!(current, *point);
        }
    }

    #[test]
    fn bad_bearing_halts_with_record_index() {
        let mut records = deed();
        records.insert(2, SurveyRecord::new("S 46° 26\" E", 10.0));

        let traverser = Traverser::new(FlatEarthProjector::default());
        let err = traverser
            .run(Coordinate::new(-75.0, 40.0), &records)
            .unwrap_err();
        assert_eq!(
            err,
            TraverseError::Record {
                index: 3,
                source: ParseError::SecondsWithoutMinutes("S 46° 26\" E".into()),
            }
        );
        let snapshot = traverser.metrics().snapshot();
        assert_eq!(snapshot.legs, 2);
        assert_eq!(snapshot.failures, 1);
    }

    #[test]
    fn empty_input_yields_origin_only() {
        let origin = Coordinate::new(10.0, 10.0);
        let traverse = trace(origin, &[], FlatEarthProjector::default()).unwrap();
        assert!(traverse.is_empty());
        assert_eq!(traverse.last(), origin);
        assert_eq!(traverse.misclosure_feet(&ProjectionConfig::default()), 0.0);
    }

    #[test]
    fn square_closes() {
        let records: Vec<_> = ["N 0 E", "N 90 E", "S 0 E", "S 90 W"]
            .iter()
            .map(|b| SurveyRecord::new(*b, 100.0))
            .collect();
        let config = ProjectionConfig::default();
        let traverse = trace(
            Coordinate::new(-80.0, 35.0),
            &records,
            FlatEarthProjector::new(&config),
        )
        .unwrap();
        assert!(traverse.misclosure_feet(&config) < 0.01);
    }
}
