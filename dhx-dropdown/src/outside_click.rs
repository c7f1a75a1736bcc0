//! Close-on-outside-click state machine.
//!
//! While the panel is open, one document-level click listener reports every
//! click as inside or outside the widget's root element. An outside click
//! asks the owner to close the panel and removes the listener.
//!
//! Registration is split from opening: `open()` only moves to
//! [`WatchState::Arming`], and the listener is registered by `arm()` once the
//! next frame has been painted. The click that opened the panel has finished
//! propagating by then, so it cannot close the panel again.
//!
//! The listener itself lives behind the [`ClickListeners`] seam. The webview
//! implementation is in [`crate::webview`]; tests use a recording double.

/// Identifier of one registered click listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Where a click landed relative to the widget's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Inside,
    Outside,
}

impl ClickTarget {
    #[must_use]
    pub const fn from_inside(inside: bool) -> Self {
        if inside {
            Self::Inside
        } else {
            Self::Outside
        }
    }
}

/// A click reported by a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub listener: ListenerId,
    pub target: ClickTarget,
}

/// What the owner should do after a click was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not from the active listener (or nothing is armed).
    Ignored,
    /// Click inside the widget; the panel stays open.
    Inside,
    /// Outside click; emit `clickout`. The listener is already removed.
    Close,
}

/// Document-level click listener registry.
///
/// Implementations are cheap handles (clone shares the underlying registry).
/// `remove` must tolerate ids that are not registered.
pub trait ClickListeners: Clone {
    fn add(&self, id: ListenerId);
    fn remove(&self, id: ListenerId);
}

/// Owns one registered listener and removes it when dropped.
#[derive(Debug)]
pub struct ListenerGuard<L: ClickListeners> {
    listeners: L,
    id: ListenerId,
}

impl<L: ClickListeners> ListenerGuard<L> {
    pub fn register(listeners: &L, id: ListenerId) -> Self {
        listeners.add(id);
        Self {
            listeners: listeners.clone(),
            id,
        }
    }

    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<L: ClickListeners> Drop for ListenerGuard<L> {
    fn drop(&mut self) {
        self.listeners.remove(self.id);
    }
}

/// Observable state of the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Closed,
    /// Opened, waiting for the next frame before listening.
    Arming,
    /// Listening for outside clicks.
    Armed,
}

#[derive(Debug)]
enum State<L: ClickListeners> {
    Closed,
    Arming,
    Armed(ListenerGuard<L>),
}

/// Outside-click watcher for one dropdown instance.
#[derive(Debug)]
pub struct OutsideClickWatcher<L: ClickListeners> {
    state: State<L>,
    next_id: u64,
}

impl<L: ClickListeners> Default for OutsideClickWatcher<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ClickListeners> OutsideClickWatcher<L> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Closed,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> WatchState {
        match self.state {
            State::Closed => WatchState::Closed,
            State::Arming => WatchState::Arming,
            State::Armed(_) => WatchState::Armed,
        }
    }

    /// Id of the registered listener, if armed.
    #[must_use]
    pub fn active_listener(&self) -> Option<ListenerId> {
        match &self.state {
            State::Armed(guard) => Some(guard.id()),
            State::Closed | State::Arming => None,
        }
    }

    /// The owner opened the panel.
    pub fn open(&mut self) {
        if matches!(self.state, State::Closed) {
            log::debug!("dropdown opened, arming outside-click listener");
            self.state = State::Arming;
        }
    }

    /// Follow the owner's `visible` flag.
    ///
    /// Returns `true` when this call started arming, i.e. the caller must
    /// schedule `arm()` for the next frame.
    pub fn sync_visible(&mut self, visible: bool) -> bool {
        if visible {
            let was_closed = matches!(self.state, State::Closed);
            self.open();
            was_closed
        } else {
            self.close();
            false
        }
    }

    /// Register the listener after the opening frame.
    ///
    /// Returns `false` without registering when the watcher is not arming,
    /// e.g. when the panel was closed again before the frame elapsed.
    pub fn arm(&mut self, listeners: &L) -> bool {
        if !matches!(self.state, State::Arming) {
            return false;
        }
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        log::debug!("registering outside-click listener {id:?}");
        self.state = State::Armed(ListenerGuard::register(listeners, id));
        true
    }

    /// Classify a click reported by a listener.
    pub fn handle_click(&mut self, event: ClickEvent) -> ClickOutcome {
        if self.active_listener() != Some(event.listener) {
            return ClickOutcome::Ignored;
        }
        match event.target {
            ClickTarget::Inside => ClickOutcome::Inside,
            ClickTarget::Outside => {
                log::debug!("outside click on listener {:?}, closing", event.listener);
                self.state = State::Closed;
                ClickOutcome::Close
            }
        }
    }

    /// The owner closed the panel. Removes any listener; no-op when closed.
    pub fn close(&mut self) {
        if !matches!(self.state, State::Closed) {
            log::debug!("dropdown closed, releasing outside-click listener");
        }
        self.state = State::Closed;
    }

    /// The widget is being unmounted.
    pub fn teardown(&mut self) {
        self.close();
    }
}
