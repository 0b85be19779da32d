mod line_style;
mod route;
mod segment;
mod stop;

pub use line_style::{color_of, Color, LineStyle, METRO_SEVEN_EIGHT_LINER};
pub use route::{PayloadError, Route};
pub use segment::{segment_stops, Segment};
pub use stop::Stop;

/// Identifier of a transit line, as issued by the station database
pub type LineCode = i64;
