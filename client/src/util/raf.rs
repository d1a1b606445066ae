//! Resize coalescing via `requestAnimationFrame`.
//!
//! A window-resize burst fires dozens of events per second; each one would
//! trigger a full-canvas repaint. The throttle keeps at most one pending
//! redraw: scheduling cancels any previously queued frame and queues the
//! new callback for the next paint.

#[cfg(test)]
#[path = "raf_test.rs"]
mod raf_test;

#[cfg(feature = "csr")]
use std::cell::Cell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

/// One-slot animation-frame scheduler.
#[derive(Default)]
pub struct RafThrottle {
    #[cfg(feature = "csr")]
    pending: Rc<Cell<Option<i32>>>,
}

impl RafThrottle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `callback` for the next animation frame, replacing any
    /// callback queued earlier in the same frame.
    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(handle) = self.pending.take() {
                let _ = window.cancel_animation_frame(handle);
            }
            let pending = Rc::clone(&self.pending);
            let closure = Closure::once_into_js(move |_timestamp: f64| {
                pending.set(None);
                callback();
            });
            if let Ok(handle) = window.request_animation_frame(closure.unchecked_ref()) {
                self.pending.set(Some(handle));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            // No frame clock outside the browser; run synchronously.
            callback();
        }
    }
}
