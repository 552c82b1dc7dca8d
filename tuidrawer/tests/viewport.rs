use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::Event;
use tuidrawer::ViewportTracker;

fn recording_tracker() -> (ViewportTracker, Rc<RefCell<Vec<(u16, u16)>>>) {
    let mut tracker = ViewportTracker::new(80, 24);
    let seen: Rc<RefCell<Vec<(u16, u16)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    tracker.subscribe(move |w, h| sink.borrow_mut().push((w, h)));
    (tracker, seen)
}

#[test]
fn test_tracker_initial_size() {
    let tracker = ViewportTracker::new(80, 24);
    assert_eq!(tracker.size(), (80, 24));
}

#[test]
fn test_tracker_notifies_on_change() {
    let (mut tracker, seen) = recording_tracker();

    tracker.set_size(100, 30);
    assert_eq!(tracker.size(), (100, 30));
    assert_eq!(*seen.borrow(), vec![(100, 30)]);
}

#[test]
fn test_tracker_skips_unchanged_size() {
    let (mut tracker, seen) = recording_tracker();

    tracker.set_size(80, 24);
    tracker.set_size(80, 24);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_tracker_maps_resize_events() {
    let (mut tracker, seen) = recording_tracker();

    tracker.handle_event(&Event::Resize(120, 40));
    assert_eq!(tracker.size(), (120, 40));
    assert_eq!(*seen.borrow(), vec![(120, 40)]);

    // Non-resize events are ignored
    tracker.handle_event(&Event::FocusGained);
    assert_eq!(*seen.borrow(), vec![(120, 40)]);
}

#[test]
fn test_tracker_unsubscribe() {
    let mut tracker = ViewportTracker::new(80, 24);
    let seen: Rc<RefCell<Vec<(u16, u16)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = tracker.subscribe(move |w, h| sink.borrow_mut().push((w, h)));

    tracker.set_size(100, 30);
    assert_eq!(seen.borrow().len(), 1);

    assert!(tracker.unsubscribe(id));
    assert!(!tracker.unsubscribe(id));

    tracker.set_size(120, 40);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_tracker_multiple_subscribers() {
    let mut tracker = ViewportTracker::new(80, 24);
    let first: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let second: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));

    let counter = first.clone();
    tracker.subscribe(move |_, _| *counter.borrow_mut() += 1);
    let counter = second.clone();
    tracker.subscribe(move |_, _| *counter.borrow_mut() += 1);

    tracker.set_size(90, 30);
    assert_eq!(*first.borrow(), 1);
    assert_eq!(*second.borrow(), 1);
}
