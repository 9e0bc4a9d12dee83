pub const FULL_TURN_DEG: f64 = 360.0;
pub const MINUTES_PER_DEGREE: f64 = 60.0;
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

pub struct AngleHelper;

impl AngleHelper {
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> f64 {
        degrees + minutes / MINUTES_PER_DEGREE + seconds / SECONDS_PER_DEGREE
    }

    /// Wraps any angle into [0, 360).
    pub fn normalize(degrees: f64) -> f64 {
        let wrapped = degrees.rem_euclid(FULL_TURN_DEG);
        // rem_euclid rounds tiny negatives up to exactly 360
        if wrapped >= FULL_TURN_DEG {
            0.0
        } else {
            wrapped
        }
    }
}
