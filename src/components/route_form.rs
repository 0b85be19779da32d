use leptos::{component, view, Callable, Callback, IntoView, ReadSignal, SignalGet, SignalSet, create_signal, event_target_value};
use leptos::ev::SubmitEvent;

use crate::api::RouteRequest;

#[component]
#[must_use]
pub fn RouteForm(
    on_search: Callback<RouteRequest>,
    is_loading: ReadSignal<bool>,
) -> impl IntoView {
    let (start_station, set_start_station) = create_signal(String::new());
    let (end_station, set_end_station) = create_signal(String::new());
    let (allow78, set_allow78) = create_signal(true);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_search.call(RouteRequest::from_form(
            &start_station.get(),
            &end_station.get(),
            allow78.get(),
        ));
    };

    view! {
        <form class="route-form" on:submit=handle_submit>
            <label>
                "From (station code)"
                <input
                    type="text"
                    required=true
                    prop:value=start_station
                    on:input=move |ev| set_start_station.set(event_target_value(&ev))
                />
            </label>
            <label>
                "To (station code)"
                <input
                    type="text"
                    required=true
                    prop:value=end_station
                    on:input=move |ev| set_end_station.set(event_target_value(&ev))
                />
            </label>
            <fieldset class="allow78">
                <legend>"Metro Seven/Eight Liner"</legend>
                <label>
                    <input
                        type="radio"
                        name="allow78"
                        value="true"
                        prop:checked=move || allow78.get()
                        on:change=move |_| set_allow78.set(true)
                    />
                    "On"
                </label>
                <label>
                    <input
                        type="radio"
                        name="allow78"
                        value="false"
                        prop:checked=move || !allow78.get()
                        on:change=move |_| set_allow78.set(false)
                    />
                    "Off"
                </label>
            </fieldset>
            <button class="primary" type="submit">
                {move || if is_loading.get() { "Searching..." } else { "Search" }}
            </button>
        </form>
    }
}
