pub mod angles;
pub mod earth;

pub use angles::AngleHelper;
pub use earth::EarthHelper;
