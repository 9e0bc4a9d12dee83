use crate::prelude::{Bearing, Coordinate, ParseError};
use log::{debug, info, warn};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_leg(&self, index: usize, bearing: Bearing, distance_feet: f64, to: Coordinate) {
        debug!(
            "leg {} bearing {} distance {:.2} ft -> ({:.8}, {:.8})",
            index, bearing, distance_feet, to.longitude, to.latitude
        );
    }

    pub fn record_failure(&self, index: usize, error: &ParseError) {
        warn!("record {} rejected: {}", index, error);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
