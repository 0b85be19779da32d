use crate::geometry::LatLng;
use super::{color_of, Color, LineCode, LineStyle, Stop};

/// A maximal run of consecutive stops on the same line
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub line_code: LineCode,
    pub points: Vec<LatLng>,
}

impl Segment {
    fn start(stop: &Stop) -> Self {
        Self {
            line_code: stop.line_code,
            points: vec![stop.position],
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        color_of(self.line_code)
    }

    #[must_use]
    pub fn style(&self) -> LineStyle {
        LineStyle::for_line(self.line_code)
    }
}

/// Splits an ordered stop list into per-line segments.
///
/// The stop at which the line changes opens the new segment and is not
/// repeated at the tail of the closed one, so concatenating the segments'
/// points reproduces the route's coordinates exactly.
#[must_use]
pub fn segment_stops(stops: &[Stop]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;

    for stop in stops {
        if let Some(segment) = current.as_mut().filter(|s| s.line_code == stop.line_code) {
            segment.points.push(stop.position);
            continue;
        }

        if let Some(closed) = current.replace(Segment::start(stop)) {
            segments.push(closed);
        }
    }

    segments.extend(current);
    segments
}
