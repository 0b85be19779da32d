use crate::geometry::LatLng;
use super::{segment_stops, Segment, Stop};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadError {
    #[error("Total distance is not a finite number: {0}")]
    InvalidDistance(f64),

    #[error("Stop {position} ({name}) has an invalid coordinate: {lat}, {lng}")]
    InvalidCoordinate {
        /// 1-based position in the route
        position: usize,
        name: String,
        lat: f64,
        lng: f64,
    },
}

/// A journey as an ordered list of stops plus its total distance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    stops: Vec<Stop>,
    total_distance_km: f64,
}

impl Route {
    /// Builds a validated route.
    ///
    /// # Errors
    ///
    /// Returns an error if the distance is not finite or any stop has a
    /// coordinate outside the valid latitude/longitude ranges.
    pub fn new(stops: Vec<Stop>, total_distance_km: f64) -> Result<Self, PayloadError> {
        if !total_distance_km.is_finite() {
            return Err(PayloadError::InvalidDistance(total_distance_km));
        }

        if let Some((index, stop)) = stops.iter().enumerate().find(|(_, s)| !s.position.is_valid()) {
            return Err(PayloadError::InvalidCoordinate {
                position: index + 1,
                name: stop.name.clone(),
                lat: stop.position.lat,
                lng: stop.position.lng,
            });
        }

        Ok(Self { stops, total_distance_km })
    }

    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[must_use]
    pub fn coordinates(&self) -> Vec<LatLng> {
        self.stops.iter().map(|s| s.position).collect()
    }

    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        segment_stops(&self.stops)
    }
}
