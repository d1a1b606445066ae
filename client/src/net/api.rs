//! Typed client for the genetics REST endpoints.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`. Native (tests,
//! tooling): stubs returning [`ApiError::offline`] since the endpoints only
//! exist in the browser.
//!
//! Every request is announced through an injectable [`DebugSink`] so call
//! tracing is a property of the client instance, not a global. The default
//! sink forwards to `log::debug!`, which `console_log` routes to the
//! browser console.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, ApiError>` instead of panics; HTTP status errors
//! stay distinguishable from transport failures so a 404 on state fetch
//! can route home while everything else feeds the toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::rc::Rc;

use canvas::snapshot::{FrameResponse, StateResponse};

use super::types::{CreateWorldRequest, CreateWorldResponse, Ecosystem, InspectResponse};

/// Destination for per-request debug lines.
pub trait DebugSink {
    fn debug(&self, tag: &str, message: &str);
}

/// Default sink: `log::debug!` with the tag in brackets.
pub struct ConsoleSink;

impl DebugSink for ConsoleSink {
    fn debug(&self, tag: &str, message: &str) {
        log::debug!("[{tag}] {message}");
    }
}

/// Why an API call failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Status(u16),
    /// The request never completed or the body did not decode.
    Transport(String),
}

impl ApiError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }

    #[cfg(not(feature = "csr"))]
    fn offline() -> Self {
        Self::Transport("not available outside the browser".to_owned())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "request failed: HTTP {code}"),
            Self::Transport(message) => write!(f, "request failed: {message}"),
        }
    }
}

/// Handle on the genetics backend. Cheap to clone; clones share the sink.
#[derive(Clone)]
pub struct ApiClient {
    sink: Rc<dyn DebugSink>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new() -> Self {
        Self { sink: Rc::new(ConsoleSink) }
    }

    #[must_use]
    pub fn with_sink(sink: Rc<dyn DebugSink>) -> Self {
        Self { sink }
    }

    /// Fetch the current full world state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on HTTP or transport failure; a 404 means the
    /// world does not exist.
    pub async fn fetch_state(&self, world: &str) -> Result<StateResponse, ApiError> {
        self.sink.debug("state", &format!("fetch world={world}"));
        get_json(&format!("/genetics/v1/state/{world}")).await
    }

    /// Advance the world by `ticks` ticks. The response body is ignored;
    /// callers refetch state afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on HTTP or transport failure.
    pub async fn advance_ticks(&self, world: &str, ticks: u32) -> Result<(), ApiError> {
        self.sink.debug("tick", &format!("advance world={world} ticks={ticks}"));
        get_unit(&format!("/genetics/v1/tick/{world}?ticks={ticks}")).await
    }

    /// Inspect the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on HTTP or transport failure.
    pub async fn inspect(&self, world: &str, x: u32, y: u32) -> Result<InspectResponse, ApiError> {
        self.sink.debug("inspect", &format!("world={world} x={x} y={y}"));
        get_json(&format!("/genetics/v1/inspect/{world}?x={x}&y={y}")).await
    }

    /// Fetch a historical frame at `step`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on HTTP or transport failure.
    pub async fn fetch_frame(&self, world: &str, step: i64) -> Result<FrameResponse, ApiError> {
        self.sink.debug("frame", &format!("world={world} step={step}"));
        get_json(&format!("/genetics/v1.0/world/{world}/frame?step={step}")).await
    }

    /// Create a world, returning the identifier to route to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on HTTP or transport failure.
    pub async fn create_world(
        &self,
        request: &CreateWorldRequest,
    ) -> Result<CreateWorldResponse, ApiError> {
        self.sink.debug("world", &format!("create world={}", request.world));
        post_json("/genetics/v1.0/world", request).await
    }

    /// Load the bundled ecosystem catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on HTTP or transport failure.
    pub async fn fetch_ecosystems(&self) -> Result<Vec<Ecosystem>, ApiError> {
        self.sink.debug("ecosystems", "fetch catalogue");
        get_json("/assets/ecosystems.json").await
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "csr")]
async fn get_unit(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn get_json<T: serde::de::DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
    Err(ApiError::offline())
}

#[cfg(not(feature = "csr"))]
async fn get_unit(_url: &str) -> Result<(), ApiError> {
    Err(ApiError::offline())
}

#[cfg(not(feature = "csr"))]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    _url: &str,
    _body: &B,
) -> Result<T, ApiError> {
    Err(ApiError::offline())
}
