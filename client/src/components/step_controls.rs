//! Advance-ticks and view-frame controls.

use leptos::prelude::*;

/// Step controls: a tick-count input with an advance button, and a frame
/// step input for viewing a historical frame. Inputs that do not parse to
/// a usable number are ignored rather than erroring.
#[component]
pub fn StepControls(
    #[prop(into)] on_advance: UnsyncCallback<u32>,
    #[prop(into)] on_frame: UnsyncCallback<i64>,
) -> impl IntoView {
    let ticks = RwSignal::new("1".to_owned());
    let frame_step = RwSignal::new(String::new());

    let advance = move |_| {
        if let Ok(n) = ticks.get().trim().parse::<u32>() {
            if n >= 1 {
                on_advance.run(n);
            }
        }
    };

    let view_frame = move |_| {
        if let Ok(step) = frame_step.get().trim().parse::<i64>() {
            if step >= 0 {
                on_frame.run(step);
            }
        }
    };

    view! {
        <div class="step-controls">
            <label class="step-controls__field">
                "Ticks"
                <input
                    class="step-controls__input"
                    type="number"
                    min="1"
                    prop:value=move || ticks.get()
                    on:input=move |ev| ticks.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=advance>
                "Advance"
            </button>

            <span class="step-controls__divider"></span>

            <label class="step-controls__field">
                "Frame"
                <input
                    class="step-controls__input"
                    type="number"
                    min="0"
                    placeholder="step"
                    prop:value=move || frame_step.get()
                    on:input=move |ev| frame_step.set(event_target_value(&ev))
                />
            </label>
            <button class="btn" on:click=view_frame>
                "View frame"
            </button>
        </div>
    }
}
