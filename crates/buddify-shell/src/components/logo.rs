use dioxus::prelude::*;

#[component]
pub fn Logo(title: String) -> Element {
    rsx! {
        span { class: "logo",
            span { class: "logo-mark", "\u{25C9}" }
            span { class: "logo-text", "{title}" }
        }
    }
}
