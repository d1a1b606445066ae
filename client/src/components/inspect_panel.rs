//! Cell inspection panel: terrain metadata, energy counters, organism.

use leptos::prelude::*;

use crate::state::sim::{Inspection, SimState};

/// Shows the last inspected cell, or a hint when nothing has been clicked.
#[component]
pub fn InspectPanel() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimState>>();

    view! {
        <section class="panel inspect-panel">
            <h3 class="panel__title">"Cell"</h3>
            {move || match sim.get().inspection {
                None => view! { <p class="panel__empty">"Click a cell to inspect it."</p> }.into_any(),
                Some(inspection) => view! { <InspectionDetail inspection/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn InspectionDetail(inspection: Inspection) -> impl IntoView {
    let organism = inspection.organism.clone();
    let counters = inspection.counters.clone();

    view! {
        <dl class="inspect-panel__facts">
            {inspection
                .metadata
                .iter()
                .map(|(key, value)| {
                    view! {
                        <div class="inspect-panel__fact">
                            <dt>{key.clone()}</dt>
                            <dd>{value.clone()}</dd>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </dl>

        <Show when={
            let counters = counters.clone();
            move || !counters.is_empty()
        }>
            <h4 class="panel__subtitle">"Counters"</h4>
            <dl class="inspect-panel__facts">
                {counters
                    .iter()
                    .map(|(key, value)| {
                        view! {
                            <div class="inspect-panel__fact">
                                <dt>{key.clone()}</dt>
                                <dd>{value.clone()}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </Show>

        {organism
            .map(|name| {
                view! {
                    <p class="inspect-panel__organism">"Organism: " <strong>{name}</strong></p>
                }
            })}
    }
}
