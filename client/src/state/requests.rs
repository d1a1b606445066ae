//! Stale-response guard for fire-and-forget fetches.
//!
//! The backend endpoints are polled with no in-flight cancellation, so a
//! slow response can arrive after a newer one. Each fetch takes a token
//! from the guard before sending and checks it on arrival; only the most
//! recently issued token may mutate state.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

/// Proof that a fetch was the latest issued at some point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic request sequencer, one per independently raced endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestGuard {
    issued: u64,
}

impl RequestGuard {
    /// Issue a token for a new request, invalidating all earlier ones.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Whether a response holding `token` is still the freshest.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.issued == token.0
    }
}
