//! Capability adapters backed by Dioxus signals and the webview document.

use std::sync::OnceLock;

use dioxus::prelude::*;

use buddify_core::{AuthContext, AuthError, Router, ScrollLock, ScrollSurface, SessionView};

/// CSS class applied to `document.body` while the mobile menu is open.
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

static DOCUMENT_SCROLL_LOCK: OnceLock<ScrollLock> = OnceLock::new();

/// The process-wide scroll lock over `document.body`.
pub fn document_scroll_lock() -> ScrollLock {
    DOCUMENT_SCROLL_LOCK
        .get_or_init(|| ScrollLock::new(BodyClassSurface::new(SCROLL_LOCK_CLASS)))
        .clone()
}

/// Toggles a class on `document.body` through the webview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyClassSurface {
    class: String,
}

impl BodyClassSurface {
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into() }
    }

    /// Script that applies or removes the class. `classList.toggle` with a
    /// force flag is idempotent.
    pub fn script(&self, locked: bool) -> String {
        format!(
            "document.body.classList.toggle({:?}, {});",
            self.class, locked
        )
    }
}

impl ScrollSurface for BodyClassSurface {
    fn set_locked(&self, locked: bool) {
        // The script is queued on creation; a class toggle returns nothing
        // worth awaiting.
        let _ = document::eval(&self.script(locked));
    }
}

/// Auth context over the shell's session signal.
#[derive(Clone, Copy)]
pub struct SignalAuth {
    session: Signal<SessionView>,
}

impl SignalAuth {
    pub fn new(session: Signal<SessionView>) -> Self {
        Self { session }
    }
}

impl AuthContext for SignalAuth {
    fn session(&self) -> SessionView {
        self.session.peek().clone()
    }

    fn logout(&self) -> Result<(), AuthError> {
        let mut session = self.session;
        session.set(SessionView::logged_out());
        tracing::info!("session cleared");
        Ok(())
    }
}

/// Router over the shell's current-path signal.
#[derive(Clone, Copy)]
pub struct SignalRouter {
    path: Signal<String>,
}

impl SignalRouter {
    pub fn new(path: Signal<String>) -> Self {
        Self { path }
    }
}

impl Router for SignalRouter {
    // Reads use `peek` so callers inside effects don't subscribe to the path.
    fn current_path(&self) -> String {
        self.path.peek().clone()
    }

    fn navigate(&self, to: &str) {
        let mut path = self.path;
        tracing::debug!(to, "navigate");
        path.set(to.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_class_script() {
        let surface = BodyClassSurface::new(SCROLL_LOCK_CLASS);
        assert_eq!(
            surface.script(true),
            r#"document.body.classList.toggle("overflow-hidden", true);"#
        );
        assert_eq!(
            surface.script(false),
            r#"document.body.classList.toggle("overflow-hidden", false);"#
        );
    }
}
