//! Dropdown component: a toggle link with a positioned panel.
//!
//! The owner keeps the open state and passes it in as `visible`. The
//! component never closes itself; an outside click fires `onclickout` and the
//! owner decides.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::hooks::{use_outside_click, use_panel_layout, use_panel_style};
use crate::position::Placement;
use crate::style::{panel_class, DEFAULT_ANIMATION};

/// Counter for unique root element ids.
static DROPDOWN_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Dropdown with anchor/panel alignment and close-on-outside-click.
///
/// # Example
///
/// ```rust,ignore
/// let mut visible = use_signal(|| false);
/// rsx! {
///     Dropdown {
///         visible: visible(),
///         position: "right top left top".parse::<Placement>()?,
///         onclickout: move |()| visible.set(false),
///         panel: rsx! { div { "Dialog" } },
///         span { onclick: move |_| visible.toggle(), "link" }
///     }
/// }
/// ```
#[component]
pub fn Dropdown(
    /// Whether the panel is shown. Owned by the caller.
    visible: ReadSignal<bool>,
    /// Anchor and panel corners.
    #[props(default)]
    position: Placement,
    /// CSS class driving the open/close transition.
    #[props(default = DEFAULT_ANIMATION.to_string(), into)]
    animation: String,
    /// Fired when a click lands outside the widget while open.
    #[props(default)]
    onclickout: EventHandler,
    /// Panel contents.
    panel: Element,
    /// The toggle link.
    children: Element,
) -> Element {
    let root_id = use_hook(|| {
        let id = DROPDOWN_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("dhx-dropdown-{id}")
    });

    let panel_id = format!("{root_id}-panel");

    use_outside_click(&root_id, visible, onclickout);

    let layout = use_panel_layout(&panel_id, visible);
    let style = use_panel_style(position, visible, layout);

    let panel_style = style.read().to_style();
    let class = panel_class(&animation, visible());

    rsx! {
        div {
            id: "{root_id}",
            class: "dropdown",

            div {
                class: "dropdown-toggle",
                onmounted: move |evt: MountedEvent| async move {
                    layout.mount_anchor(evt.data()).await;
                },
                onresize: move |evt: ResizeEvent| layout.resized_anchor(&evt),
                {children}
            }

            div {
                id: "{panel_id}",
                class: "{class}",
                style: "{panel_style}",
                onresize: move |evt: ResizeEvent| layout.resized_panel(&evt),
                {panel}
            }
        }
    }
}
