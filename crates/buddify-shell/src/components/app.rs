//! Root shell component.

use dioxus::prelude::*;

use buddify_core::SessionView;

use crate::components::nav_bar::NavBar;
use crate::components::page::PagePlaceholder;
use crate::config::ShellConfig;

/// Signals shared by the navigation bar and the pages.
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub path: Signal<String>,
    pub session: Signal<SessionView>,
    /// Session published by the demo sign-in button.
    pub demo_session: Signal<SessionView>,
}

#[component]
pub fn RootApp(config: ShellConfig) -> Element {
    let path = use_signal(|| config.start_path.clone());
    let session = use_signal(|| config.initial_session());
    let demo_session = use_signal(|| config.demo_session());

    use_context_provider(|| ShellContext {
        path,
        session,
        demo_session,
    });

    rsx! {
        div { class: "shell-root",
            NavBar { config: config.nav.clone() }
            main { class: "shell-page",
                PagePlaceholder { path: path() }
            }
        }
    }
}
