//! Test helpers for outside-click tests.
//!
//! Provides a recording `ClickListeners` double that counts registrations,
//! and an owner harness that drives a watcher the way the `Dropdown`
//! component does.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::outside_click::{
    ClickEvent, ClickListeners, ClickOutcome, ClickTarget, ListenerId, OutsideClickWatcher,
};

#[derive(Debug, Default)]
struct Recording {
    added: Vec<ListenerId>,
    removed: Vec<ListenerId>,
    active: BTreeSet<ListenerId>,
    peak: usize,
}

/// `ClickListeners` double that records every add/remove.
///
/// Clones share the same recording, mirroring how the webview registry is
/// shared between the watcher and its guards.
#[derive(Debug, Clone, Default)]
pub struct RecordingListeners {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingListeners {
    /// Number of currently registered listeners.
    pub fn active(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Highest number of simultaneously registered listeners seen so far.
    pub fn peak(&self) -> usize {
        self.inner.borrow().peak
    }

    pub fn added(&self) -> Vec<ListenerId> {
        self.inner.borrow().added.clone()
    }

    /// Ids that were actually removed (removing an absent id is not recorded).
    pub fn removed(&self) -> Vec<ListenerId> {
        self.inner.borrow().removed.clone()
    }
}

impl ClickListeners for RecordingListeners {
    fn add(&self, id: ListenerId) {
        let mut rec = self.inner.borrow_mut();
        rec.added.push(id);
        rec.active.insert(id);
        rec.peak = rec.peak.max(rec.active.len());
    }

    fn remove(&self, id: ListenerId) {
        let mut rec = self.inner.borrow_mut();
        if rec.active.remove(&id) {
            rec.removed.push(id);
        }
    }
}

/// Outside click on the given listener.
pub fn outside(listener: ListenerId) -> ClickEvent {
    ClickEvent {
        listener,
        target: ClickTarget::Outside,
    }
}

/// Inside click on the given listener.
pub fn inside(listener: ListenerId) -> ClickEvent {
    ClickEvent {
        listener,
        target: ClickTarget::Inside,
    }
}

/// Stand-in for a parent component owning `visible`.
///
/// `set_visible` plays the role of the `Dropdown` effect on the `visible`
/// signal; `frame` plays the deferred arm; `click` routes a document click
/// and applies `clickout` the way a parent typically does
/// (`visible = false`).
pub struct Owner {
    pub visible: bool,
    pub clickouts: usize,
    pub watcher: OutsideClickWatcher<RecordingListeners>,
    pub listeners: RecordingListeners,
}

impl Owner {
    pub fn new(listeners: RecordingListeners) -> Self {
        Self {
            visible: false,
            clickouts: 0,
            watcher: OutsideClickWatcher::new(),
            listeners,
        }
    }

    /// Returns whether the watcher asked for an arm on the next frame.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.visible = visible;
        self.watcher.sync_visible(visible)
    }

    pub fn frame(&mut self) {
        self.watcher.arm(&self.listeners);
    }

    /// Dispatch a document click to whichever listener is active.
    pub fn click(&mut self, target: ClickTarget) -> ClickOutcome {
        let Some(listener) = self.watcher.active_listener() else {
            return ClickOutcome::Ignored;
        };
        let outcome = self.watcher.handle_click(ClickEvent { listener, target });
        if outcome == ClickOutcome::Close {
            self.clickouts += 1;
            self.set_visible(false);
        }
        outcome
    }
}
