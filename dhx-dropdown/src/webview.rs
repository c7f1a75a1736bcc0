//! Webview-backed click listeners.
//!
//! The DOM lives inside the desktop webview, so the document-level listener
//! is installed with `document::eval`. Each click is reported back to Rust as
//! a boolean (`true` when the target is inside the widget's root element)
//! and forwarded to the component's click coroutine.
//!
//! Installed handlers are kept in `window.__dhxDropdownListeners`, keyed by
//! root element id and listener id, so removal can find them again.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::outside_click::{ClickEvent, ClickListeners, ClickTarget, ListenerId};
use crate::position::Dimensions;

fn listener_key(root_id: &str, id: ListenerId) -> String {
    format!("{root_id}:{}", id.0)
}

fn install_script(root_id: &str, id: ListenerId) -> String {
    let key = listener_key(root_id, id);
    format!(
        r#"
        const registry = (window.__dhxDropdownListeners = window.__dhxDropdownListeners || {{}});
        if (!registry["{key}"]) {{
            const handler = (event) => {{
                const root = document.getElementById("{root_id}");
                dioxus.send(root !== null && root.contains(event.target));
            }};
            registry["{key}"] = handler;
            document.addEventListener("click", handler);
        }}
        "#
    )
}

fn remove_script(root_id: &str, id: ListenerId) -> String {
    let key = listener_key(root_id, id);
    format!(
        r#"
        const registry = window.__dhxDropdownListeners;
        if (registry && registry["{key}"]) {{
            document.removeEventListener("click", registry["{key}"]);
            delete registry["{key}"];
        }}
        "#
    )
}

/// Wait until the webview has painted the next frame.
pub async fn next_frame() {
    let mut frame = document::eval("requestAnimationFrame(() => dioxus.send(true));");
    if let Err(err) = frame.recv::<bool>().await {
        log::warn!("requestAnimationFrame round trip failed: {err:?}");
    }
}

fn layout_size_script(element_id: &str) -> String {
    format!(
        r#"
        const el = document.getElementById("{element_id}");
        dioxus.send(el ? [el.offsetWidth, el.offsetHeight] : null);
        "#
    )
}

/// Layout size of the element with `element_id`.
///
/// Uses `offsetWidth`/`offsetHeight`, which ignore CSS transforms, so a panel
/// measured in the middle of its scale-in animation reports its final size.
/// `None` when the element is missing or the round trip fails.
pub async fn layout_size(element_id: &str) -> Option<Dimensions> {
    let mut eval = document::eval(&layout_size_script(element_id));
    match eval.recv::<Option<(f64, f64)>>().await {
        Ok(size) => size.map(|(width, height)| Dimensions::new(width, height)),
        Err(err) => {
            log::warn!("failed to measure `{element_id}`: {err:?}");
            None
        }
    }
}

/// Click listeners for one dropdown root element.
#[derive(Clone)]
pub struct WebviewListeners {
    root_id: Rc<str>,
    clicks: Coroutine<ClickEvent>,
    tasks: Rc<RefCell<HashMap<ListenerId, Task>>>,
}

impl WebviewListeners {
    /// Listeners reporting clicks relative to the element with `root_id`.
    pub fn new(root_id: &str, clicks: Coroutine<ClickEvent>) -> Self {
        Self {
            root_id: Rc::from(root_id),
            clicks,
            tasks: Rc::default(),
        }
    }
}

impl ClickListeners for WebviewListeners {
    fn add(&self, id: ListenerId) {
        let script = install_script(&self.root_id, id);
        let clicks = self.clicks.clone();
        let task = spawn(async move {
            let mut listener = document::eval(&script);
            while let Ok(inside) = listener.recv::<bool>().await {
                clicks.send(ClickEvent {
                    listener: id,
                    target: ClickTarget::from_inside(inside),
                });
            }
        });
        if let Some(previous) = self.tasks.borrow_mut().insert(id, task) {
            previous.cancel();
        }
    }

    fn remove(&self, id: ListenerId) {
        if let Some(task) = self.tasks.borrow_mut().remove(&id) {
            task.cancel();
        }
        document::eval(&remove_script(&self.root_id, id));
    }
}
