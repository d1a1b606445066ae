use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn native_stub_runs_callbacks_synchronously() {
    let throttle = RafThrottle::new();
    let ran = Rc::new(Cell::new(0u32));

    let counter = Rc::clone(&ran);
    throttle.schedule(move || counter.set(counter.get() + 1));
    let counter = Rc::clone(&ran);
    throttle.schedule(move || counter.set(counter.get() + 1));

    assert_eq!(ran.get(), 2);
}
