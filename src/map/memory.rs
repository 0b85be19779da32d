use std::collections::BTreeMap;
use std::convert::Infallible;

use super::MapSurface;
use crate::geometry::Bounds;
use crate::render::{Marker, Stroke};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawnLayer {
    /// A layer that is not part of any route, e.g. a tile layer
    Base(String),
    Polyline(Stroke),
    Marker(Marker),
}

/// Map surface that keeps its layers in memory.
///
/// Used off the browser, in tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    layers: BTreeMap<usize, DrawnLayer>,
    next_id: usize,
    viewport: Option<Bounds>,
    fit_count: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_layer(mut self, name: impl Into<String>) -> Self {
        self.insert(DrawnLayer::Base(name.into()));
        self
    }

    fn insert(&mut self, layer: DrawnLayer) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.layers.insert(id, layer);
        id
    }

    /// All layers in insertion order
    pub fn layers(&self) -> impl Iterator<Item = &DrawnLayer> {
        self.layers.values()
    }

    #[must_use]
    pub fn polylines(&self) -> Vec<&Stroke> {
        self.layers()
            .filter_map(|layer| match layer {
                DrawnLayer::Polyline(stroke) => Some(stroke),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn markers(&self) -> Vec<&Marker> {
        self.layers()
            .filter_map(|layer| match layer {
                DrawnLayer::Marker(marker) => Some(marker),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn base_layer_count(&self) -> usize {
        self.layers().filter(|layer| matches!(layer, DrawnLayer::Base(_))).count()
    }

    /// The last bounds the map was fitted to
    #[must_use]
    pub fn viewport(&self) -> Option<Bounds> {
        self.viewport
    }

    #[must_use]
    pub fn fit_count(&self) -> usize {
        self.fit_count
    }
}

impl MapSurface for MemorySurface {
    type Layer = usize;
    type Error = Infallible;

    fn add_polyline(&mut self, stroke: &Stroke) -> Result<usize, Infallible> {
        Ok(self.insert(DrawnLayer::Polyline(stroke.clone())))
    }

    fn add_marker(&mut self, marker: &Marker) -> Result<usize, Infallible> {
        Ok(self.insert(DrawnLayer::Marker(marker.clone())))
    }

    fn remove_layer(&mut self, layer: &usize) -> Result<(), Infallible> {
        self.layers.remove(layer);
        Ok(())
    }

    fn route_layers(&self) -> Result<Vec<usize>, Infallible> {
        Ok(self
            .layers
            .iter()
            .filter(|(_, layer)| !matches!(layer, DrawnLayer::Base(_)))
            .map(|(id, _)| *id)
            .collect())
    }

    fn fit_bounds(&mut self, bounds: &Bounds) -> Result<(), Infallible> {
        self.viewport = Some(*bounds);
        self.fit_count += 1;
        Ok(())
    }
}
