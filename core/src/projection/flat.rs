use crate::prelude::{Bearing, Coordinate, ProjectionConfig, Projector};

/// Local tangent-plane projector.
///
/// Splits the leg into north and east offsets in feet, then scales them to
/// degrees. Longitude degrees shrink with the cosine of the origin latitude.
/// Good for the tens-to-hundreds of feet found in deeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatEarthProjector {
    feet_per_degree_latitude: f64,
}

impl FlatEarthProjector {
    pub fn new(config: &ProjectionConfig) -> Self {
        Self {
            feet_per_degree_latitude: config.feet_per_degree_latitude(),
        }
    }

    pub fn feet_per_degree_latitude(&self) -> f64 {
        self.feet_per_degree_latitude
    }
}

impl Default for FlatEarthProjector {
    fn default() -> Self {
        Self::new(&ProjectionConfig::default())
    }
}

impl Projector for FlatEarthProjector {
    fn project(&self, origin: Coordinate, bearing: Bearing, distance_feet: f64) -> Coordinate {
        let azimuth = bearing.radians();
        let north_feet = distance_feet * azimuth.cos();
        let east_feet = distance_feet * azimuth.sin();

        let delta_lat = north_feet / self.feet_per_degree_latitude;
        let delta_lon =
            east_feet / (self.feet_per_degree_latitude * origin.latitude.to_radians().cos());

        Coordinate::new(origin.longitude + delta_lon, origin.latitude + delta_lat)
    }
}
