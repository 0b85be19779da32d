use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::MapSurface;
use crate::config::MapConfig;
use crate::geometry::{Bounds, LatLng};
use crate::render::{Marker, Stroke};

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

/// Calls `target[method](...args)` with `target` bound as `this`
fn call(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let func = get(target, method)?;
    let func = func
        .dyn_ref::<Function>()
        .ok_or_else(|| JsValue::from_str(&format!("{method} is not a function")))?;
    func.apply(target, args)
}

fn lat_lng_array(point: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(point.lat), &JsValue::from_f64(point.lng))
}

/// A Leaflet map (`window.L`) with a dedicated layer group for route layers
pub struct LeafletMap {
    leaflet: JsValue,
    map: JsValue,
    route_layer: JsValue,
}

impl LeafletMap {
    /// Create the map in `container` with the configured tile layer and view.
    ///
    /// # Errors
    ///
    /// Returns an error if Leaflet is not loaded or rejects any of the calls.
    pub fn mount(container: &web_sys::HtmlElement, config: &MapConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let leaflet = get(&window, "L")?;
        if leaflet.is_undefined() {
            return Err(JsValue::from_str("Leaflet is not loaded"));
        }

        // L.map(container).setView([lat, lng], zoom)
        let map = call(&leaflet, "map", &Array::of1(container))?;
        call(
            &map,
            "setView",
            &Array::of2(&lat_lng_array(config.center), &JsValue::from_f64(config.zoom)),
        )?;

        // L.tileLayer(url, options).addTo(map)
        let tile_options = Object::new();
        set(&tile_options, "attribution", &JsValue::from_str(&config.tile_attribution))?;
        set(&tile_options, "minZoom", &JsValue::from_f64(config.min_zoom))?;
        set(&tile_options, "maxZoom", &JsValue::from_f64(config.max_zoom))?;
        let tile_layer = call(
            &leaflet,
            "tileLayer",
            &Array::of2(&JsValue::from_str(&config.tile_url), &tile_options),
        )?;
        call(&tile_layer, "addTo", &Array::of1(&map))?;

        // Route layers live in their own group so clearing never touches the tiles
        let route_layer = call(&leaflet, "layerGroup", &Array::new())?;
        call(&route_layer, "addTo", &Array::of1(&map))?;

        Ok(Self { leaflet, map, route_layer })
    }

    /// Recompute the map size after its container changed dimensions
    pub fn invalidate_size(&self) {
        if let Err(e) = call(&self.map, "invalidateSize", &Array::new()) {
            leptos::logging::error!("Failed to invalidate map size: {:?}", e);
        }
    }

    fn add_to_route_layer(&self, layer: &JsValue) -> Result<(), JsValue> {
        call(layer, "addTo", &Array::of1(&self.route_layer)).map(|_| ())
    }
}

impl MapSurface for LeafletMap {
    type Layer = JsValue;
    type Error = JsValue;

    fn add_polyline(&mut self, stroke: &Stroke) -> Result<JsValue, JsValue> {
        let points: Array = stroke.points.iter().map(|p| lat_lng_array(*p)).collect();

        let options = Object::new();
        set(&options, "color", &JsValue::from_str(&stroke.color.to_string()))?;
        set(&options, "weight", &JsValue::from_f64(stroke.weight))?;
        set(&options, "opacity", &JsValue::from_f64(stroke.opacity))?;

        let polyline = call(&self.leaflet, "polyline", &Array::of2(&points, &options))?;
        self.add_to_route_layer(&polyline)?;
        Ok(polyline)
    }

    fn add_marker(&mut self, marker: &Marker) -> Result<JsValue, JsValue> {
        let leaflet_marker = call(&self.leaflet, "marker", &Array::of1(&lat_lng_array(marker.position)))?;
        call(&leaflet_marker, "bindPopup", &Array::of1(&JsValue::from_str(&marker.label)))?;
        self.add_to_route_layer(&leaflet_marker)?;
        Ok(leaflet_marker)
    }

    fn remove_layer(&mut self, layer: &JsValue) -> Result<(), JsValue> {
        call(&self.route_layer, "removeLayer", &Array::of1(layer)).map(|_| ())
    }

    fn route_layers(&self) -> Result<Vec<JsValue>, JsValue> {
        let layers = call(&self.route_layer, "getLayers", &Array::new())?;
        let layers = layers.dyn_into::<Array>()?;
        Ok(layers.iter().collect())
    }

    fn fit_bounds(&mut self, bounds: &Bounds) -> Result<(), JsValue> {
        // map.fitBounds([[south, west], [north, east]])
        let corners = Array::of2(&lat_lng_array(bounds.south_west), &lat_lng_array(bounds.north_east));
        call(&self.map, "fitBounds", &Array::of1(&corners)).map(|_| ())
    }
}
