mod leaflet;
mod memory;

pub use leaflet::LeafletMap;
pub use memory::{DrawnLayer, MemorySurface};

use crate::geometry::Bounds;
use crate::render::{Marker, Stroke};

/// The operations the route pipeline needs from a map.
///
/// Only route layers (polylines and markers added through this trait) are
/// reported by [`MapSurface::route_layers`]; base layers such as tiles are
/// never enumerated and so never removed by a redraw.
pub trait MapSurface {
    type Layer;
    type Error: std::fmt::Debug;

    /// # Errors
    ///
    /// Returns an error if the map refuses the layer.
    fn add_polyline(&mut self, stroke: &Stroke) -> Result<Self::Layer, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the map refuses the layer.
    fn add_marker(&mut self, marker: &Marker) -> Result<Self::Layer, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the layer cannot be detached from the map.
    fn remove_layer(&mut self, layer: &Self::Layer) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the map cannot list its layers.
    fn route_layers(&self) -> Result<Vec<Self::Layer>, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the view cannot be changed.
    fn fit_bounds(&mut self, bounds: &Bounds) -> Result<(), Self::Error>;
}
