//! Tick/day counter readout for the simulation header.

use leptos::prelude::*;

use crate::state::sim::SimState;

/// Shows the current tick, day, and total tick count, with placeholders
/// until the first snapshot arrives.
#[component]
pub fn CounterBar() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimState>>();

    let tick = move || counter_text(sim.get().current_tick);
    let day = move || counter_text(sim.get().total_days);
    let total = move || counter_text(sim.get().total_ticks);

    view! {
        <div class="counter-bar">
            <span class="counter-bar__item">"Tick " {tick}</span>
            <span class="counter-bar__divider">"|"</span>
            <span class="counter-bar__item">"Day " {day}</span>
            <span class="counter-bar__divider">"|"</span>
            <span class="counter-bar__item">{total} " ticks total"</span>
        </div>
    }
}

fn counter_text(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| v.to_string())
}
