//! Custom Dioxus hooks backing the `Dropdown` component.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::outside_click::{ClickEvent, ClickOutcome, OutsideClickWatcher};
use crate::position::{Dimensions, Placement};
use crate::style::PanelStyle;
use crate::webview::{layout_size, next_frame, WebviewListeners};

/// Close-on-outside-click behavior for the element with `root_id`.
///
/// Follows `visible`: opening arms a document click listener on the next
/// frame, closing (or unmounting) removes it. Calls `onclickout` once per
/// outside click while armed.
pub fn use_outside_click(root_id: &str, visible: ReadSignal<bool>, onclickout: EventHandler) {
    let watcher =
        use_hook(|| Rc::new(RefCell::new(OutsideClickWatcher::<WebviewListeners>::new())));

    let clicks = use_coroutine({
        let watcher = watcher.clone();
        move |mut rx: UnboundedReceiver<ClickEvent>| {
            let watcher = watcher.clone();
            async move {
                while let Some(event) = rx.next().await {
                    let outcome = watcher.borrow_mut().handle_click(event);
                    if outcome == ClickOutcome::Close {
                        onclickout.call(());
                    }
                }
            }
        }
    });

    let listeners = use_hook(|| WebviewListeners::new(root_id, clicks));

    use_effect({
        let watcher = watcher.clone();
        move || {
            if watcher.borrow_mut().sync_visible(visible()) {
                let watcher = watcher.clone();
                let listeners = listeners.clone();
                spawn(async move {
                    // Let the opening click finish propagating first.
                    next_frame().await;
                    watcher.borrow_mut().arm(&listeners);
                });
            }
        }
    });

    use_drop(move || watcher.borrow_mut().teardown());
}

async fn measure(element: &MountedData) -> Option<Dimensions> {
    match element.get_client_rect().await {
        Ok(rect) => Some(Dimensions::new(rect.width(), rect.height())),
        Err(err) => {
            log::warn!("failed to measure dropdown anchor: {err:?}");
            None
        }
    }
}

/// Store a new size; empty sizes keep the previous one.
fn update_dim(mut signal: Signal<Dimensions>, dim: Dimensions) {
    if !dim.is_empty() && *signal.peek() != dim {
        signal.set(dim);
    }
}

/// Mounted anchor element and the last measured anchor/panel sizes.
///
/// The anchor is measured with its client rect. The panel scales in when it
/// opens, so its size is read from layout (`offsetWidth`/`offsetHeight`)
/// through its element id instead.
#[derive(Clone, Copy)]
pub struct PanelLayout {
    pub anchor: Signal<Option<Rc<MountedData>>>,
    pub anchor_dim: Signal<Dimensions>,
    pub panel_dim: Signal<Dimensions>,
}

impl PanelLayout {
    /// Record the mounted anchor element and take its size.
    pub async fn mount_anchor(mut self, element: Rc<MountedData>) {
        if let Some(dim) = measure(&element).await {
            update_dim(self.anchor_dim, dim);
        }
        self.anchor.set(Some(element));
    }

    /// The anchor's border box changed size.
    pub fn resized_anchor(self, evt: &ResizeEvent) {
        if let Ok(size) = evt.get_border_box_size() {
            update_dim(self.anchor_dim, Dimensions::new(size.width, size.height));
        }
    }

    /// The panel's border box changed size. Hiding the panel reports zero,
    /// which keeps the last size.
    pub fn resized_panel(self, evt: &ResizeEvent) {
        if let Ok(size) = evt.get_border_box_size() {
            update_dim(self.panel_dim, Dimensions::new(size.width, size.height));
        }
    }

    /// Re-measure the anchor and the panel with id `panel_id`.
    pub async fn remeasure(self, panel_id: &str) {
        let anchor = (*self.anchor.peek()).clone();
        if let Some(anchor) = anchor {
            if let Some(dim) = measure(&anchor).await {
                update_dim(self.anchor_dim, dim);
            }
        }
        if let Some(dim) = layout_size(panel_id).await {
            update_dim(self.panel_dim, dim);
        }
    }
}

/// Track anchor and panel sizes.
///
/// Both are re-measured one frame after each open, and follow resize events
/// routed through [`PanelLayout::resized_anchor`] and
/// [`PanelLayout::resized_panel`] while mounted.
pub fn use_panel_layout(panel_id: &str, visible: ReadSignal<bool>) -> PanelLayout {
    let layout = PanelLayout {
        anchor: use_signal(|| None),
        anchor_dim: use_signal(Dimensions::default),
        panel_dim: use_signal(Dimensions::default),
    };
    let panel_id = use_hook(|| Rc::<str>::from(panel_id));

    use_effect(move || {
        if visible() {
            let panel_id = panel_id.clone();
            spawn(async move {
                next_frame().await;
                layout.remeasure(&panel_id).await;
            });
        }
    });

    layout
}

/// Panel style derived from placement, measured sizes and visibility.
///
/// Recomputed whenever any of them change.
pub fn use_panel_style(
    position: Placement,
    visible: ReadSignal<bool>,
    layout: PanelLayout,
) -> Memo<PanelStyle> {
    use_memo(use_reactive!(|position| {
        let result = position.compute(*layout.anchor_dim.read(), *layout.panel_dim.read());
        PanelStyle::new(result, visible())
    }))
}
