use super::*;

#[test]
fn first_token_is_current() {
    let mut guard = RequestGuard::default();
    let token = guard.issue();
    assert!(guard.is_current(token));
}

#[test]
fn newer_request_invalidates_older_tokens() {
    let mut guard = RequestGuard::default();
    let stale = guard.issue();
    let fresh = guard.issue();

    assert!(!guard.is_current(stale));
    assert!(guard.is_current(fresh));
}

#[test]
fn slow_response_after_a_burst_is_discarded() {
    let mut guard = RequestGuard::default();
    let first = guard.issue();
    let second = guard.issue();
    let third = guard.issue();

    // Responses arrive out of order; only the last request may apply.
    assert!(!guard.is_current(second));
    assert!(!guard.is_current(first));
    assert!(guard.is_current(third));
}
