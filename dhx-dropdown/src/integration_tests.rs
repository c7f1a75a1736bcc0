//! Integration tests for the outside-click lifecycle.
//!
//! These drive a watcher through an owner harness the way the `Dropdown`
//! component does (visible signal → open/close, next frame → arm, document
//! click → clickout) and check listener bookkeeping along the way.

use crate::outside_click::{ClickOutcome, ClickTarget, WatchState};
use crate::position::{Dimensions, Placement};
use crate::style::PanelStyle;
use crate::test_helpers::{inside, outside, Owner, RecordingListeners};

fn opened_owner() -> Owner {
    let mut owner = Owner::new(RecordingListeners::default());
    owner.set_visible(true);
    owner.frame();
    owner
}

// --- Click out ---

#[test]
fn outside_click_closes_owner_state_once() {
    let mut owner = opened_owner();

    assert_eq!(owner.click(ClickTarget::Outside), ClickOutcome::Close);
    assert!(!owner.visible);
    assert_eq!(owner.clickouts, 1);

    // Further document clicks reach no listener.
    assert_eq!(owner.click(ClickTarget::Outside), ClickOutcome::Ignored);
    assert_eq!(owner.clickouts, 1);
    assert_eq!(owner.listeners.active(), 0);
}

#[test]
fn inside_click_leaves_panel_open() {
    let mut owner = opened_owner();

    for _ in 0..3 {
        assert_eq!(owner.click(ClickTarget::Inside), ClickOutcome::Inside);
    }
    assert!(owner.visible);
    assert_eq!(owner.clickouts, 0);
    assert_eq!(owner.listeners.active(), 1);
}

#[test]
fn opening_click_does_not_close_panel() {
    let mut owner = Owner::new(RecordingListeners::default());
    owner.set_visible(true);

    // The click that opened the panel is still propagating: nothing is armed.
    assert_eq!(owner.click(ClickTarget::Outside), ClickOutcome::Ignored);
    assert!(owner.visible);

    owner.frame();
    assert_eq!(owner.watcher.state(), WatchState::Armed);
}

#[test]
fn owner_close_releases_listener() {
    let mut owner = opened_owner();
    owner.set_visible(false);

    assert_eq!(owner.watcher.state(), WatchState::Closed);
    assert_eq!(owner.listeners.active(), 0);
    assert_eq!(owner.clickouts, 0);
}

// --- Listener bookkeeping ---

#[test]
fn repeated_cycles_never_leak_listeners() {
    let mut owner = Owner::new(RecordingListeners::default());

    for cycle in 0..10 {
        owner.set_visible(true);
        owner.frame();
        assert_eq!(owner.listeners.active(), 1, "cycle {cycle}");

        if cycle % 2 == 0 {
            owner.click(ClickTarget::Outside);
        } else {
            owner.set_visible(false);
        }
        assert_eq!(owner.listeners.active(), 0, "cycle {cycle}");
    }

    assert_eq!(owner.listeners.peak(), 1);
    assert_eq!(owner.listeners.added().len(), 10);
    assert_eq!(owner.listeners.removed().len(), 10);
    assert_eq!(owner.clickouts, 5);
}

#[test]
fn extra_frames_and_reopens_do_not_double_register() {
    let mut owner = opened_owner();
    owner.frame();
    owner.set_visible(true);
    owner.frame();

    assert_eq!(owner.listeners.added().len(), 1);
    assert_eq!(owner.listeners.peak(), 1);
}

#[test]
fn instances_keep_independent_listeners() {
    let mut first = opened_owner();
    let mut second = opened_owner();

    first.click(ClickTarget::Outside);
    assert!(!first.visible);
    assert_eq!(first.listeners.active(), 0);
    assert!(second.visible);
    assert_eq!(second.listeners.active(), 1);

    second.set_visible(false);
    assert_eq!(second.listeners.active(), 0);
    assert_eq!(second.clickouts, 0);
}

#[test]
fn foreign_listener_events_are_ignored() {
    let mut first = opened_owner();
    let id = first.watcher.active_listener().expect("armed");

    first.set_visible(false);
    first.set_visible(true);
    first.frame();

    // An event queued from the previous cycle's listener arrives late.
    assert_eq!(first.watcher.handle_click(outside(id)), ClickOutcome::Ignored);
    let current = first.watcher.active_listener().expect("armed");
    assert_eq!(first.watcher.handle_click(inside(current)), ClickOutcome::Inside);
    assert!(first.visible);
}

#[test]
fn hiding_an_armed_panel_releases_its_listener() {
    let mut owner = opened_owner();
    assert_eq!(owner.listeners.active(), 1);

    assert!(!owner.set_visible(false));
    assert_eq!(owner.watcher.state(), WatchState::Closed);
    assert_eq!(owner.listeners.active(), 0);

    // Reopening asks for a fresh arm exactly once.
    assert!(owner.set_visible(true));
    assert!(!owner.set_visible(true));
    owner.frame();
    assert_eq!(owner.listeners.peak(), 1);
}

// --- Rendering state ---

#[test]
fn panel_style_follows_owner_state() {
    let mut owner = Owner::new(RecordingListeners::default());
    let square = Dimensions::new(100.0, 100.0);
    let style = |visible| PanelStyle::new(Placement::default().compute(square, square), visible);

    assert!(style(owner.visible).to_style().contains("display: none"));

    owner.set_visible(true);
    owner.frame();
    let open = style(owner.visible).to_style();
    assert!(!open.contains("display: none"));
    assert!(open.contains("left: 100px"));
    assert!(open.contains("top: 0px"));

    owner.click(ClickTarget::Outside);
    assert!(style(owner.visible).to_style().contains("display: none"));
}
