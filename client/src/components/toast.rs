//! Single-slot error toast overlay.

use leptos::prelude::*;

use crate::state::toast::ToastState;
#[cfg(feature = "csr")]
use crate::state::toast::TOAST_TIMEOUT_MS;

/// Show an error message, replacing any current toast, and schedule an
/// auto-dismiss. The timer checks its generation on expiry so it never
/// dismisses a message that replaced its own.
pub fn show_error(toast: RwSignal<ToastState>, message: impl Into<String>) {
    let mut generation = 0;
    toast.update(|t| generation = t.show(message.into()));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        toast.update(|t| t.dismiss_generation(generation));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = generation;
    }
}

/// Toast display: renders the current message with a dismiss button.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        {move || {
            toast
                .get()
                .message
                .map(|message| {
                    view! {
                        <div class="toast toast--error" role="alert">
                            <span class="toast__message">{message}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toast.update(ToastState::dismiss)
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
