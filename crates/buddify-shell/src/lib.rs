//! Dioxus page shell for Buddify.
//!
//! Mounts the session-aware navigation bar over placeholder pages and wires
//! the controller's capabilities to Dioxus signals and the webview document.

pub mod adapters;
pub mod components;
pub mod config;

pub use adapters::{document_scroll_lock, BodyClassSurface, SignalAuth, SignalRouter};
pub use components::app::{RootApp, ShellContext};
pub use components::nav_bar::NavBar;
pub use config::ShellConfig;

/// Shell CSS, including the scroll-lock marker class.
pub const SHELL_CSS: &str = include_str!("../assets/shell.css");
