//! Session-aware navigation bar.
//!
//! Owns a [`NavController`] for its lifetime. The first render shows only
//! the loading placeholder; the mount effect hydrates the controller and the
//! next render draws the real menu. Route and session signals are forwarded
//! to the controller through their own effects.

use dioxus::prelude::*;

use buddify_nav::{NavConfig, NavController, NavView};

use crate::adapters::{document_scroll_lock, SignalAuth, SignalRouter};
use crate::components::app::ShellContext;
use crate::components::avatar_menu::AvatarMenu;
use crate::components::logo::Logo;
use crate::components::menu_toggle::MenuToggle;
use crate::components::nav_link::NavLink;

#[component]
pub fn NavBar(config: NavConfig) -> Element {
    let shell = use_context::<ShellContext>();
    let path = shell.path;
    let session = shell.session;

    let mut nav = use_signal(move || {
        NavController::new(
            SignalAuth::new(session),
            SignalRouter::new(path),
            document_scroll_lock(),
            config,
        )
    });

    // Runs once, after the placeholder has rendered.
    use_effect(move || nav.write().hydrate());

    use_effect(move || {
        let _ = path.read();
        nav.write().on_route_change();
    });

    use_effect(move || {
        let _ = session.read();
        nav.write().on_session_change();
    });

    let mut navigate = move |href: String| nav.write().follow_link(&href);
    let logout = move |_: ()| {
        if let Err(e) = nav.write().logout() {
            tracing::error!(error = %e, "logout failed");
        }
    };

    let bar = match nav.read().view() {
        NavView::Loading { label } => {
            return rsx! {
                div { class: "nav-loading", "{label}" }
            };
        }
        NavView::Ready(bar) => bar,
    };

    let menu_class = if bar.menu_open { "nav-menu open" } else { "nav-menu" };
    let primary_class = if bar.is_logged_in { "nav-links logged-in" } else { "nav-links" };

    rsx! {
        nav { class: "navbar",
            a {
                class: "nav-brand",
                href: "{bar.brand_href}",
                onclick: {
                    let href = bar.brand_href.clone();
                    move |evt: MouseEvent| {
                        evt.prevent_default();
                        navigate(href.clone());
                    }
                },
                Logo { title: bar.brand_title.clone() }
            }
            div { class: "nav-body",
                if let Some(panel) = bar.avatar.clone() {
                    AvatarMenu {
                        panel,
                        on_toggle: move |_| nav.write().toggle_avatar_panel(),
                        on_logout: logout,
                        on_navigate: navigate,
                    }
                }
                div { class: "{menu_class}",
                    ul { class: "{primary_class}",
                        for link in bar.primary.iter() {
                            li { key: "{link.href}", class: "nav-item",
                                NavLink {
                                    title: link.title.clone(),
                                    href: link.href.clone(),
                                    active: link.active,
                                    on_navigate: navigate,
                                }
                            }
                        }
                    }
                    ul { class: "nav-auth-links",
                        for link in bar.secondary.iter() {
                            li { key: "{link.href}", class: "nav-item",
                                NavLink {
                                    title: link.title.clone(),
                                    href: link.href.clone(),
                                    active: link.active,
                                    on_navigate: navigate,
                                }
                            }
                        }
                    }
                }
            }
            MenuToggle {
                open: bar.menu_open,
                on_toggle: move |_| nav.write().toggle_menu(),
            }
        }
    }
}
