//! Simulation page: canvas view, counters, step controls, inspection.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::canvas_host::CanvasHost;
use crate::components::counter_bar::CounterBar;
use crate::components::genome_panel::GenomePanel;
use crate::components::inspect_panel::InspectPanel;
use crate::components::step_controls::StepControls;
use crate::components::toast::{Toast, show_error};
use crate::net::api::ApiClient;
use crate::state::requests::RequestGuard;
use crate::state::sim::SimState;
use crate::state::toast::ToastState;

/// Simulation page. Reads the world name from the route, fetches state on
/// mount and after every tick advance, and guards all fetches against
/// stale responses.
#[component]
pub fn SimulationPage() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let api = ApiClient::new();

    // Snapshot fetches (state and frames) race each other; inspections
    // race separately.
    let snapshot_guard = RwSignal::new(RequestGuard::default());
    let inspect_guard = RwSignal::new(RequestGuard::default());

    let world = move || params.read().get("world").unwrap_or_default();

    let load_state = Rc::new({
        let api = api.clone();
        let navigate = navigate.clone();
        move || {
            let world = world();
            if world.is_empty() {
                return;
            }
            let Some(token) = snapshot_guard.try_update(RequestGuard::issue) else {
                return;
            };
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.fetch_state(&world).await {
                    Ok(resp) => {
                        if snapshot_guard.get_untracked().is_current(token) {
                            sim.update(|s| s.apply_state(&resp));
                        }
                    }
                    Err(err) if err.is_not_found() => {
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => show_error(toast, err.to_string()),
                }
            });
        }
    });

    // Reset state and fetch when the route's world changes (incl. mount).
    Effect::new({
        let load_state = Rc::clone(&load_state);
        move || {
            let w = world();
            if w.is_empty() {
                return;
            }
            if sim.get_untracked().world != w {
                sim.update(|s| s.reset_for(&w));
            }
            load_state();
        }
    });

    let on_advance = UnsyncCallback::new({
        let api = api.clone();
        let load_state = Rc::clone(&load_state);
        move |ticks: u32| {
            let world = world();
            if world.is_empty() {
                return;
            }
            let api = api.clone();
            let load_state = Rc::clone(&load_state);
            leptos::task::spawn_local(async move {
                match api.advance_ticks(&world, ticks).await {
                    Ok(()) => load_state(),
                    Err(err) => show_error(toast, err.to_string()),
                }
            });
        }
    });

    let on_frame = UnsyncCallback::new({
        let api = api.clone();
        move |step: i64| {
            let world = world();
            if world.is_empty() {
                return;
            }
            let Some(token) = snapshot_guard.try_update(RequestGuard::issue) else {
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.fetch_frame(&world, step).await {
                    Ok(resp) => {
                        if snapshot_guard.get_untracked().is_current(token) {
                            sim.update(|s| s.apply_frame(&resp));
                        }
                    }
                    Err(err) => show_error(toast, err.to_string()),
                }
            });
        }
    });

    let on_inspect = UnsyncCallback::new({
        let api = api.clone();
        move |(x, y): (u32, u32)| {
            let world = world();
            if world.is_empty() {
                return;
            }
            let Some(token) = inspect_guard.try_update(RequestGuard::issue) else {
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.inspect(&world, x, y).await {
                    Ok(resp) => {
                        if inspect_guard.get_untracked().is_current(token) {
                            sim.update(|s| s.apply_inspection(x, y, &resp));
                        }
                    }
                    Err(err) => show_error(toast, err.to_string()),
                }
            });
        }
    });

    view! {
        <div class="sim-page">
            <header class="sim-page__header">
                <a href="/" class="sim-page__back">"New world"</a>
                <h1 class="sim-page__title">{move || sim.get().world.clone()}</h1>
                <CounterBar/>
            </header>

            <div class="sim-page__canvas">
                <CanvasHost on_cell_click=on_inspect/>
            </div>

            <div class="sim-page__controls">
                <StepControls on_advance=on_advance on_frame=on_frame/>
            </div>

            <aside class="sim-page__panels">
                <InspectPanel/>
                <GenomePanel/>
            </aside>

            <Toast/>
        </div>
    }
}
