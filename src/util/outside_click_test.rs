use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn dropping_subscription_releases_once() {
    let released = Rc::new(Cell::new(0));
    let counter = Rc::clone(&released);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    assert!(sub.is_active());
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn unsubscribe_releases_once() {
    let released = Rc::new(Cell::new(0));
    let counter = Rc::clone(&released);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    sub.unsubscribe();
    assert_eq!(released.get(), 1);
}

#[test]
fn noop_subscription_is_inactive() {
    let sub = Subscription::noop();
    assert!(!sub.is_active());
    sub.unsubscribe();
}

#[test]
fn is_outside_requires_mounted_boundary() {
    assert!(!is_outside(false, false));
    assert!(!is_outside(false, true));
}

#[test]
fn is_outside_ignores_targets_inside_boundary() {
    assert!(!is_outside(true, true));
    assert!(is_outside(true, false));
}

#[test]
fn listens_for_pointer_down_events() {
    assert!(OUTSIDE_EVENTS.contains(&"mousedown"));
    assert!(OUTSIDE_EVENTS.contains(&"touchstart"));
}
