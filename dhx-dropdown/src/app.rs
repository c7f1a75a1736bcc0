//! Demo application component.
//!
//! One dropdown with a 100×100 toggle link and a 100×100 panel, configured
//! from `DropdownSettings` in the context.

use dioxus::prelude::*;

use crate::components::Dropdown;
use crate::config::DropdownSettings;

#[component]
pub fn App() -> Element {
    let settings = use_context::<DropdownSettings>();
    let mut visible = use_signal(|| settings.visible);

    let position = settings.position;
    let animation = settings.animation.clone();
    let state = if visible() { "open" } else { "closed" };

    rsx! {
        div {
            class: "demo-container",

            Dropdown {
                visible: visible(),
                position,
                animation,
                onclickout: move |()| {
                    log::info!("clickout");
                    visible.set(false);
                },
                panel: rsx! {
                    div { class: "demo-panel", "Dialog" }
                },
                span {
                    class: "demo-link",
                    onclick: move |_| visible.toggle(),
                    "link"
                }
            }

            div {
                class: "demo-status",
                "{position} ({state})"
            }
        }
    }
}
