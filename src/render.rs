mod redraw;

pub use redraw::RouteRenderer;

use crate::config::StationLabels;
use crate::constants::{
    CASING_OPACITY, CASING_WEIGHT, INNER_LINE_OPACITY, INNER_LINE_WEIGHT, LINE_OPACITY, LINE_WEIGHT,
};
use crate::geometry::LatLng;
use crate::models::{Color, LineCode, LineStyle, Route, Segment, Stop};

/// One polyline to draw on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<LatLng>,
    pub color: Color,
    pub weight: f64,
    pub opacity: f64,
}

/// A station marker with its popup label
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub label: String,
}

/// A row of the textual station list shown next to the map
#[derive(Debug, Clone, PartialEq)]
pub struct StationListEntry {
    /// 1-based position along the route
    pub position: usize,
    pub name: String,
    pub line_code: LineCode,
    pub transfer: bool,
}

impl StationListEntry {
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}. {} (路線: {})", self.position, self.name, self.line_code)
    }
}

/// Textual part of a drawn route
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteSummary {
    pub total_distance_km: f64,
    pub entries: Vec<StationListEntry>,
}

impl RouteSummary {
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        Self {
            total_distance_km: route.total_distance_km(),
            entries: station_list(route.stops()),
        }
    }

    #[must_use]
    pub fn distance_text(&self) -> String {
        format!("総距離: {:.2} km", self.total_distance_km)
    }
}

/// Strokes for one segment, in draw order.
///
/// Double-stroke lines get a white casing first so the colored line sits on top.
#[must_use]
pub fn segment_strokes(segment: &Segment) -> Vec<Stroke> {
    let color = segment.color();

    match segment.style() {
        LineStyle::Single => vec![Stroke {
            points: segment.points.clone(),
            color,
            weight: LINE_WEIGHT,
            opacity: LINE_OPACITY,
        }],
        LineStyle::DoubleStroke => vec![
            Stroke {
                points: segment.points.clone(),
                color: Color::WHITE,
                weight: CASING_WEIGHT,
                opacity: CASING_OPACITY,
            },
            Stroke {
                points: segment.points.clone(),
                color,
                weight: INNER_LINE_WEIGHT,
                opacity: INNER_LINE_OPACITY,
            },
        ],
    }
}

#[must_use]
pub fn route_strokes(segments: &[Segment]) -> Vec<Stroke> {
    segments.iter().flat_map(segment_strokes).collect()
}

#[must_use]
pub fn stop_markers(stops: &[Stop], labels: &StationLabels) -> Vec<Marker> {
    stops
        .iter()
        .map(|stop| Marker {
            position: stop.position,
            label: labels.label_for(&stop.name).to_string(),
        })
        .collect()
}

#[must_use]
pub fn station_list(stops: &[Stop]) -> Vec<StationListEntry> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| StationListEntry {
            position: index + 1,
            name: stop.name.clone(),
            line_code: stop.line_code,
            transfer: stop.transfer,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{color_of, METRO_SEVEN_EIGHT_LINER};

    fn segment(line_code: LineCode) -> Segment {
        Segment {
            line_code,
            points: vec![LatLng::new(35.0, 139.0), LatLng::new(35.1, 139.1)],
        }
    }

    #[test]
    fn test_ordinary_segment_single_stroke() {
        let strokes = segment_strokes(&segment(11302));

        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].color, color_of(11302));
        assert_eq!(strokes[0].weight, LINE_WEIGHT);
        assert_eq!(strokes[0].opacity, LINE_OPACITY);
    }

    #[test]
    fn test_liner_segment_double_stroke() {
        let seg = segment(METRO_SEVEN_EIGHT_LINER);
        let strokes = segment_strokes(&seg);

        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].points, seg.points);
        assert_eq!(strokes[1].points, seg.points);

        let (outer, inner) = (&strokes[0], &strokes[1]);
        assert_eq!(outer.color, Color::WHITE);
        assert_eq!(inner.color, color_of(METRO_SEVEN_EIGHT_LINER));
        assert!(outer.weight > inner.weight);
        assert_eq!(outer.opacity, 1.0);
        assert!(inner.opacity < 1.0);
    }

    #[test]
    fn test_route_strokes_counts() {
        let segments = vec![segment(1), segment(METRO_SEVEN_EIGHT_LINER), segment(2)];
        assert_eq!(route_strokes(&segments).len(), 4);
    }

    #[test]
    fn test_stop_markers_apply_label_overrides() {
        let labels = StationLabels::default().with_override("東高円寺", "東高円寺 (制作者の最寄り)");
        let stops = vec![
            Stop::new("新高円寺", 35.698, 139.648, 28001),
            Stop::new("東高円寺", 35.698, 139.657, 28001),
        ];
        let markers = stop_markers(&stops, &labels);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].label, "新高円寺");
        assert_eq!(markers[1].label, "東高円寺 (制作者の最寄り)");
        assert_eq!(markers[1].position, stops[1].position);
    }

    #[test]
    fn test_station_list_positions_are_one_based() {
        let stops = vec![
            Stop::new("A", 35.0, 139.0, 1),
            Stop::new("A", 35.0, 139.0, 2).with_transfer(true),
        ];
        let entries = station_list(&stops);

        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[1].position, 2);
        assert!(!entries[0].transfer);
        assert!(entries[1].transfer);
        assert_eq!(entries[1].text(), "2. A (路線: 2)");
    }

    #[test]
    fn test_station_list_keeps_raw_name() {
        let stops = vec![Stop::new("東高円寺", 35.698, 139.657, 28001)];
        let entries = station_list(&stops);
        assert_eq!(entries[0].name, "東高円寺");
    }

    #[test]
    fn test_distance_text_two_decimals() {
        let summary = RouteSummary { total_distance_km: 12.3456, entries: vec![] };
        assert_eq!(summary.distance_text(), "総距離: 12.35 km");
    }

    #[test]
    fn test_summary_for_route() {
        let route = Route::new(
            vec![
                Stop::new("A", 35.0, 139.0, 1),
                Stop::new("B", 35.1, 139.1, 2).with_transfer(true),
            ],
            3.0,
        )
        .expect("valid route");
        let summary = RouteSummary::for_route(&route);

        assert_eq!(summary.total_distance_km, 3.0);
        assert_eq!(summary.entries, station_list(route.stops()));
        assert_eq!(summary.entries[1].text(), "2. B (路線: 2)");
    }
}
