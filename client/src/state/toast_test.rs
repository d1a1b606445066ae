use super::*;

#[test]
fn show_sets_the_message() {
    let mut toast = ToastState::default();
    toast.show("world not found");
    assert_eq!(toast.message.as_deref(), Some("world not found"));
}

#[test]
fn newer_message_replaces_the_current_one() {
    let mut toast = ToastState::default();
    toast.show("first");
    toast.show("second");
    assert_eq!(toast.message.as_deref(), Some("second"));
}

#[test]
fn manual_dismiss_clears_the_message() {
    let mut toast = ToastState::default();
    toast.show("oops");
    toast.dismiss();
    assert_eq!(toast.message, None);
}

#[test]
fn stale_timer_does_not_dismiss_a_newer_message() {
    let mut toast = ToastState::default();
    let first = toast.show("first");
    toast.show("second");

    toast.dismiss_generation(first);
    assert_eq!(toast.message.as_deref(), Some("second"));
}

#[test]
fn current_timer_dismisses_its_own_message() {
    let mut toast = ToastState::default();
    let generation = toast.show("transient");
    toast.dismiss_generation(generation);
    assert_eq!(toast.message, None);
}
