use std::f64::consts::PI;

/// IUGG mean Earth radius in meters.
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;

/// International foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

pub struct EarthHelper;

impl EarthHelper {
    pub fn meters_to_feet(meters: f64) -> f64 {
        meters / METERS_PER_FOOT
    }

    /// Arc length of one degree of latitude on a sphere of the given radius.
    ///
    /// With the mean radius this is about 364,813.26 ft.
    pub fn feet_per_degree_latitude(radius_m: f64) -> f64 {
        Self::meters_to_feet(radius_m) * PI / 180.0
    }
}
