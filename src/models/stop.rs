use serde::{Deserialize, Serialize};

use crate::geometry::LatLng;
use super::LineCode;

/// One station visit along a route, in visit order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub position: LatLng,
    pub line_code: LineCode,
    /// Set when the rider changes lines at this stop
    #[serde(default)]
    pub transfer: bool,
}

impl Stop {
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, line_code: LineCode) -> Self {
        Self {
            name: name.into(),
            position: LatLng::new(lat, lng),
            line_code,
            transfer: false,
        }
    }

    #[must_use]
    pub fn with_transfer(mut self, transfer: bool) -> Self {
        self.transfer = transfer;
        self
    }
}
