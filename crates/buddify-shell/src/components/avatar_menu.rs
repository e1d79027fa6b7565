//! Avatar trigger with the account dropdown.

use dioxus::prelude::*;

use buddify_nav::AvatarPanelView;

use super::nav_link::NavLink;

#[component]
pub fn AvatarMenu(
    panel: AvatarPanelView,
    on_toggle: EventHandler<()>,
    on_logout: EventHandler<()>,
    on_navigate: EventHandler<String>,
) -> Element {
    let dropdown_class = if panel.open { "avatar-dropdown open" } else { "avatar-dropdown" };

    rsx! {
        div { class: "avatar-menu",
            img {
                class: "avatar-image",
                src: "{panel.image_url}",
                alt: "Avatar",
                onclick: move |_| on_toggle.call(()),
            }
            div { class: "{dropdown_class}",
                span { class: "avatar-name", "{panel.user_name}" }
                NavLink {
                    title: panel.change_password.title.clone(),
                    href: panel.change_password.href.clone(),
                    active: panel.change_password.active,
                    on_navigate: move |href: String| {
                        on_toggle.call(());
                        on_navigate.call(href);
                    },
                }
                button {
                    class: "logout-btn",
                    onclick: move |_| on_logout.call(()),
                    "Log out"
                }
            }
        }
    }
}
