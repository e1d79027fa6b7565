//! Single navigation link.

use dioxus::prelude::*;

#[component]
pub fn NavLink(
    title: String,
    href: String,
    active: bool,
    on_navigate: EventHandler<String>,
) -> Element {
    let link_class = if active { "nav-link active" } else { "nav-link" };
    let target = href.clone();

    rsx! {
        a {
            class: "{link_class}",
            href: "{href}",
            "aria-current": if active { "page" } else { "false" },
            onclick: move |evt| {
                evt.prevent_default();
                on_navigate.call(target.clone());
            },
            "{title}"
        }
    }
}
