//! Placeholder page bodies for each route.

use dioxus::prelude::*;

use buddify_core::Route;

use crate::components::app::ShellContext;

#[component]
pub fn PagePlaceholder(path: String) -> Element {
    let shell = use_context::<ShellContext>();
    let mut session = shell.session;
    let mut current = shell.path;
    let demo_session = shell.demo_session;
    let logged_in = session.read().is_logged_in;

    let Some(route) = Route::from_path(&path) else {
        return rsx! {
            section { class: "page not-found",
                h1 { "Not found" }
                p { "No page lives at {path}." }
            }
        };
    };

    rsx! {
        section { class: "page",
            h1 { "{route.title()}" }
            if route == Route::Login && !logged_in {
                button {
                    class: "demo-login-btn",
                    onclick: move |_| {
                        tracing::info!("demo sign-in");
                        session.set(demo_session.read().clone());
                        current.set(Route::Home.href().to_string());
                    },
                    "Sign in as demo user"
                }
            }
        }
    }
}
