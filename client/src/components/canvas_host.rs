//! Bridge component between the Leptos UI and the imperative `canvas::Engine`.
//!
//! Mounts a square `<canvas>` inside a sizing container. Redraws are
//! reactive on the simulation snapshot; window resizes re-sync the canvas
//! size and redraw, coalesced to one repaint per animation frame. Clicks
//! are mapped back to grid cells and handed to the caller.

use std::rc::Rc;

use canvas::engine::Engine;
use leptos::prelude::*;

use crate::state::sim::SimState;
use crate::util::raf::RafThrottle;

#[component]
pub fn CanvasHost(#[prop(into)] on_cell_click: UnsyncCallback<(u32, u32)>) -> impl IntoView {
    let sim = expect_context::<RwSignal<SimState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Shared by the reactive effect and the resize path. Reads untracked;
    // the effect below decides when a redraw happens.
    let draw_now = move || {
        let (Some(container), Some(canvas_el)) = (container_ref.get_untracked(), canvas_ref.get_untracked())
        else {
            return;
        };
        let engine = Engine::new(canvas_el);
        if engine.sync_size(&container).is_err() {
            return;
        }
        let state = sim.get_untracked();
        if let Err(err) = engine.render(&state.cells, state.grid) {
            log::warn!("canvas render failed: {err:?}");
        }
    };

    // Full repaint whenever the snapshot (cells, grid) changes.
    Effect::new(move || {
        sim.track();
        draw_now();
    });

    // Resize bursts coalesce into one repaint per frame.
    let throttle = Rc::new(RafThrottle::new());
    let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
        throttle.schedule(draw_now);
    });
    on_cleanup(move || resize_handle.remove());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(canvas_el) = canvas_ref.get_untracked() else {
            return;
        };
        let engine = Engine::new(canvas_el);
        let grid = sim.get_untracked().grid;
        if let Some(cell) = engine.cell_at(f64::from(ev.client_x()), f64::from(ev.client_y()), grid) {
            on_cell_click.run(cell);
        }
    };

    view! {
        <div class="canvas-host" node_ref=container_ref>
            <canvas node_ref=canvas_ref on:click=on_click>
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
