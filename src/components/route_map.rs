use leptos::{component, create_effect, create_node_ref, store_value, view, IntoView, ReadSignal, SignalGet};

use crate::config::{MapConfig, StationLabels};
use crate::map::LeafletMap;
use crate::models::Route;
use crate::render::RouteRenderer;

#[component]
#[must_use]
pub fn RouteMap(
    config: MapConfig,
    route: ReadSignal<Option<Route>>,
) -> impl IntoView {
    let map_container_ref = create_node_ref::<leptos::html::Div>();
    let renderer = store_value(None::<RouteRenderer<LeafletMap>>);
    let config = store_value(config);

    create_effect(move |_| {
        let Some(container) = map_container_ref.get() else { return };

        if renderer.with_value(Option::is_none) {
            let container_element: &web_sys::HtmlElement = &container;
            match config.with_value(|config| LeafletMap::mount(container_element, config)) {
                Ok(map) => {
                    map.invalidate_size();
                    renderer.set_value(Some(RouteRenderer::new(map, StationLabels::builtin())));
                    crate::log!("Leaflet map initialized");
                }
                Err(e) => {
                    leptos::logging::error!("Failed to initialize Leaflet map: {:?}", e);
                    return;
                }
            }
        }

        let Some(route) = route.get() else { return };

        renderer.update_value(|renderer| {
            let Some(renderer) = renderer else { return };
            if let Err(e) = renderer.redraw(&route) {
                leptos::logging::error!("Failed to draw route: {:?}", e);
            }
        });
    });

    view! {
        <div id="mapid" class="map-container" node_ref=map_container_ref></div>
    }
}
