use leptos::{component, create_signal, spawn_local, store_value, view, Callback, IntoView, SignalSet};
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use crate::api::{RequestSequence, RouteClient, RouteRequest};
use crate::components::route_form::RouteForm;
use crate::components::route_info::RouteInfo;
use crate::components::route_map::RouteMap;
use crate::config::MapConfig;
use crate::models::Route;
use crate::render::RouteSummary;

/// Blocking notification, matching how the page reports failed searches
fn notify_user(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = MapConfig::default();
    let client = store_value(RouteClient::for_page(&config.route_endpoint));
    let sequence = store_value(RequestSequence::new());

    let (route, set_route) = create_signal(None::<Route>);
    let (summary, set_summary) = create_signal(None::<RouteSummary>);
    let (is_loading, set_is_loading) = create_signal(false);

    let on_search = Callback::new(move |request: RouteRequest| {
        let mut issued = None;
        sequence.update_value(|sequence| issued = Some(sequence.issue()));
        let Some(ticket) = issued else { return };

        crate::log!(
            "Requesting route {} -> {} (allow78: {})",
            request.start_cd,
            request.end_cd,
            request.allow78
        );
        set_is_loading.set(true);

        let client = client.get_value();
        spawn_local(async move {
            let result = client.fetch_route(&request).await;

            if !sequence.with_value(|sequence| sequence.is_current(ticket)) {
                crate::log!("Dropping response to superseded request {:?}", ticket);
                return;
            }
            set_is_loading.set(false);

            match result {
                Ok(route) => {
                    set_summary.set(Some(RouteSummary::for_route(&route)));
                    set_route.set(Some(route));
                }
                // The previous route and summary stay on screen
                Err(e) => {
                    leptos::logging::error!("Route request failed: {}", e);
                    notify_user(e.user_message());
                }
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/metro_route_map.css"/>
        <Title text="Metro Route Map"/>

        <div class="app">
            <aside class="sidebar">
                <RouteForm on_search=on_search is_loading=is_loading />
                <RouteInfo summary=summary />
            </aside>
            <RouteMap config=config route=route />
        </div>
    }
}
