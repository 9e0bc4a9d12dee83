use std::cell::Cell;

/// Counters for one traverse run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub legs: usize,
    pub failures: usize,
    pub total_feet: f64,
}

#[derive(Debug, Default)]
pub struct MetricsRecorder {
    legs: Cell<usize>,
    failures: Cell<usize>,
    total_feet: Cell<f64>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_leg(&self, distance_feet: f64) {
        self.legs.set(self.legs.get() + 1);
        self.total_feet.set(self.total_feet.get() + distance_feet);
    }

    pub fn record_failure(&self) {
        self.failures.set(self.failures.get() + 1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            legs: self.legs.get(),
            failures: self.failures.get(),
            total_feet: self.total_feet.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = MetricsRecorder::new();
        metrics.record_leg(100.0);
        metrics.record_leg(16.5);
        metrics.record_failure();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                legs: 2,
                failures: 1,
                total_feet: 116.5,
            }
        );
    }
}
