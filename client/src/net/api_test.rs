use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use leptos::prelude::Callable;

use super::*;

/// Sink that records every debug line for assertions.
#[derive(Default)]
struct CapturingSink {
    lines: RefCell<Vec<(String, String)>>,
}

impl DebugSink for CapturingSink {
    fn debug(&self, tag: &str, message: &str) {
        self.lines.borrow_mut().push((tag.to_owned(), message.to_owned()));
    }
}

/// The native stubs complete without awaiting anything, so a single poll
/// with a no-op waker resolves them.
fn resolve<T>(fut: impl Future<Output = T>) -> T {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(value) => value,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}

#[test]
fn requests_announce_themselves_through_the_sink() {
    let sink = Rc::new(CapturingSink::default());
    let client = ApiClient::with_sink(Rc::clone(&sink) as Rc<dyn DebugSink>);

    let result = resolve(client.fetch_state("petri"));
    assert!(result.is_err());

    let lines = sink.lines.borrow();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, "state");
    assert!(lines[0].1.contains("world=petri"));
}

#[test]
fn every_endpoint_tags_its_debug_line() {
    let sink = Rc::new(CapturingSink::default());
    let client = ApiClient::with_sink(Rc::clone(&sink) as Rc<dyn DebugSink>);

    let _ = resolve(client.advance_ticks("petri", 5));
    let _ = resolve(client.inspect("petri", 3, 4));
    let _ = resolve(client.fetch_frame("petri", 42));
    let _ = resolve(client.fetch_ecosystems());

    let tags: Vec<String> = sink.lines.borrow().iter().map(|(tag, _)| tag.clone()).collect();
    assert_eq!(tags, vec!["tick", "inspect", "frame", "ecosystems"]);
}

#[test]
fn native_stubs_report_offline_transport_errors() {
    let client = ApiClient::new();
    let err = resolve(client.fetch_state("petri")).expect_err("stub must fail");
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.is_not_found());
}

#[test]
fn client_fits_inside_unsync_callbacks() {
    // ApiClient holds an Rc sink, so the page wires it through
    // UnsyncCallback rather than the Send + Sync Callback.
    let client = ApiClient::new();
    let cb = leptos::prelude::UnsyncCallback::new(move |ticks: u32| {
        resolve(client.advance_ticks("petri", ticks)).is_err()
    });
    assert!(cb.run(3));
}

#[test]
fn not_found_is_distinguishable() {
    assert!(ApiError::Status(404).is_not_found());
    assert!(!ApiError::Status(500).is_not_found());
    assert!(!ApiError::Transport("boom".to_owned()).is_not_found());
}

#[test]
fn errors_render_for_the_toast() {
    assert_eq!(ApiError::Status(500).to_string(), "request failed: HTTP 500");
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
}
