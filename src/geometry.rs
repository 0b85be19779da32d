use serde::{Deserialize, Serialize};

/// A WGS84 coordinate as used by the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within the valid degree ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Axis-aligned bounding box in latitude/longitude space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Computes the smallest bounds containing every point.
    ///
    /// Returns `None` for an empty input, since there is no region to show.
    /// A single point yields a degenerate box whose corners coincide.
    ///
    /// # Examples
    /// ```
    /// use metro_route_map::geometry::{Bounds, LatLng};
    ///
    /// let bounds = Bounds::fit(&[LatLng::new(35.0, 139.0), LatLng::new(36.0, 140.0)])
    ///     .expect("non-empty input");
    /// assert_eq!(bounds.south_west, LatLng::new(35.0, 139.0));
    /// assert_eq!(bounds.north_east, LatLng::new(36.0, 140.0));
    /// ```
    #[must_use]
    pub fn fit(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        let mut min_lng = first.lng;
        let mut max_lng = first.lng;

        for point in rest {
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
        }

        Some(Self {
            south_west: LatLng::new(min_lat, min_lng),
            north_east: LatLng::new(max_lat, max_lng),
        })
    }

    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}
