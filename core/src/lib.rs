//! Core bearing parsing and coordinate projection for plotting land deeds.
//!
//! A deed describes a parcel as an ordered list of calls, each a bearing and
//! a distance. The modules here turn those calls into absolute coordinates
//! starting from a known origin.

pub mod bearing;
pub mod math;
pub mod prelude;
pub mod projection;
pub mod telemetry;
pub mod units;

pub use bearing::{parse, Bearing, ParsedBearing};
pub use prelude::{
    Coordinate, ParseError, ParseResult, ProjectionConfig, Projector, SurveyRecord,
    TraverseError, TraverseResult,
};
pub use projection::{trace, FlatEarthProjector, ProjectionKind, SphericalProjector, Traverse};
pub use units::DistanceUnit;
