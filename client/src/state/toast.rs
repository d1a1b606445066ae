//! Single-slot error toast.
//!
//! Newer messages replace the current one wholesale. Each shown message
//! gets a generation number so a delayed auto-dismiss timer can tell
//! whether its message is still the one on screen.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Auto-dismiss delay in milliseconds.
pub const TOAST_TIMEOUT_MS: u32 = 60_000;

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub message: Option<String>,
    generation: u64,
}

impl ToastState {
    /// Show a message, replacing any current one. Returns the generation
    /// the caller's dismiss timer should hold.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = Some(message.into());
        self.generation += 1;
        self.generation
    }

    /// Manual dismiss.
    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Timer-driven dismiss: only clears if the message from `generation`
    /// is still showing.
    pub fn dismiss_generation(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }
}
