use super::{route_strokes, stop_markers, RouteSummary};
use crate::config::StationLabels;
use crate::geometry::Bounds;
use crate::map::MapSurface;
use crate::models::Route;

/// Owns a map surface and replaces the drawn route on every redraw
pub struct RouteRenderer<S: MapSurface> {
    surface: S,
    labels: StationLabels,
}

impl<S: MapSurface> RouteRenderer<S> {
    #[must_use]
    pub fn new(surface: S, labels: StationLabels) -> Self {
        Self { surface, labels }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Remove every route layer from the map, leaving base layers alone.
    /// Returns the number of layers removed.
    ///
    /// # Errors
    ///
    /// Returns the surface error if a layer cannot be listed or removed.
    pub fn clear(&mut self) -> Result<usize, S::Error> {
        let layers = self.surface.route_layers()?;
        for layer in &layers {
            self.surface.remove_layer(layer)?;
        }
        Ok(layers.len())
    }

    /// Replace whatever is drawn with `route` and fit the view to it.
    ///
    /// Drawing the same route twice leaves the map in the same state as
    /// drawing it once. An empty route clears the map and keeps the view.
    ///
    /// # Errors
    ///
    /// Returns the surface error of the first map operation that fails.
    pub fn redraw(&mut self, route: &Route) -> Result<RouteSummary, S::Error> {
        let removed = self.clear()?;

        let summary = RouteSummary::for_route(route);

        let segments = route.segments();
        for stroke in route_strokes(&segments) {
            self.surface.add_polyline(&stroke)?;
        }
        for marker in stop_markers(route.stops(), &self.labels) {
            self.surface.add_marker(&marker)?;
        }

        if let Some(bounds) = Bounds::fit(&route.coordinates()) {
            self.surface.fit_bounds(&bounds)?;
        }

        crate::log!(
            "Redrew route: {} stops, {} segments, {} layers removed",
            route.stops().len(),
            segments.len(),
            removed
        );

        Ok(summary)
    }
}
