use leptos::{component, view, IntoView, ReadSignal, SignalGet};

use crate::render::RouteSummary;

#[component]
#[must_use]
pub fn RouteInfo(summary: ReadSignal<Option<RouteSummary>>) -> impl IntoView {
    view! {
        <div class="route-info">
            {move || {
                summary.get().map(|summary| {
                    let distance = summary.distance_text();
                    view! {
                        <h3>"経路案内"</h3>
                        <p>{distance}</p>
                        <div class="station-list">
                            {summary.entries.into_iter().map(|entry| {
                                let text = entry.text();
                                view! {
                                    <div class="station">
                                        {text}
                                        {entry.transfer.then(|| view! {
                                            <div class="transfer">"※ 乗り換え"</div>
                                        })}
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
