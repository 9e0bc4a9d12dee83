use crate::prelude::{Bearing, Coordinate, ProjectionConfig, Projector};

/// Great-circle destination on a sphere of the configured radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalProjector {
    radius_feet: f64,
}

impl SphericalProjector {
    pub fn new(config: &ProjectionConfig) -> Self {
        Self {
            radius_feet: config.radius_feet(),
        }
    }
}

impl Default for SphericalProjector {
    fn default() -> Self {
        Self::new(&ProjectionConfig::default())
    }
}

impl Projector for SphericalProjector {
    fn project(&self, origin: Coordinate, bearing: Bearing, distance_feet: f64) -> Coordinate {
        let lat1 = origin.latitude.to_radians();
        let lon1 = origin.longitude.to_radians();
        let azimuth = bearing.radians();
        let angular = distance_feet / self.radius_feet;

        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_d, cos_d) = angular.sin_cos();

        let lat2 = (sin_lat1 * cos_d + cos_lat1 * sin_d * azimuth.cos()).asin();
        let lon2 = lon1 + (azimuth.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * lat2.sin());

        let mut longitude = lon2.to_degrees();
        if longitude > 180.0 {
            longitude -= 360.0;
        } else if longitude < -180.0 {
            longitude += 360.0;
        }

        Coordinate::new(longitude, lat2.to_degrees())
    }
}
