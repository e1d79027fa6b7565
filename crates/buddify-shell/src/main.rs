//! Entry point for the Buddify desktop shell.

use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};

use buddify_logging::BuddifySubscriberBuilder;
use buddify_shell::{RootApp, ShellConfig, SHELL_CSS};

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env()?;

    let _log_guard = BuddifySubscriberBuilder::new()
        .with_config(config.log_config())
        .init();

    tracing::info!(
        logged_in = config.start_logged_in,
        start_path = %config.start_path,
        "Starting Buddify shell"
    );

    let mut wb = WindowBuilder::new()
        .with_title("Buddify")
        .with_maximized(false);

    if let (Some(w), Some(h)) = (config.window.width, config.window.height) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(1200.0, 800.0));
    }

    if let (Some(x), Some(y)) = (config.window.x, config.window.y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!("<style>{}</style>", SHELL_CSS)),
        )
        .with_context(config)
        .launch(App);

    Ok(())
}

use dioxus::prelude::*;

#[component]
fn App() -> Element {
    let config = use_context::<ShellConfig>();

    rsx! {
        RootApp { config }
    }
}
