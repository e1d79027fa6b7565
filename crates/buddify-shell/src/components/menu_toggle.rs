//! Mobile menu toggle button.

use dioxus::prelude::*;

#[component]
pub fn MenuToggle(open: bool, on_toggle: EventHandler<()>) -> Element {
    let (glyph, label) = if open {
        ("\u{2715}", "Close menu")
    } else {
        ("\u{2630}", "Open menu")
    };

    rsx! {
        button {
            class: "menu-toggle mobile-only",
            "aria-label": "{label}",
            "aria-expanded": if open { "true" } else { "false" },
            onclick: move |_| on_toggle.call(()),
            "{glyph}"
        }
    }
}
