//! Capability traits injected into the navigation controller
//!
//! The controller never reaches for globals. The host hands it one
//! implementation of each trait at construction, which keeps the controller
//! testable against the in-memory versions in [`crate::memory`].
//!
//! ## Key Traits
//!
//! - [`AuthContext`]: session snapshot plus the logout capability
//! - [`Router`]: current path and imperative navigation
//! - [`ScrollSurface`]: the document-level scroll container

use crate::error::AuthError;
use crate::session::SessionView;

/// Ambient authentication state, read-only apart from `logout`.
pub trait AuthContext {
    /// Current session snapshot.
    fn session(&self) -> SessionView;

    /// End the session.
    ///
    /// Failures propagate to the caller untouched; the controller does not
    /// retry.
    fn logout(&self) -> Result<(), AuthError>;
}

/// Routing primitive of the host environment.
pub trait Router {
    /// Path of the currently displayed route.
    fn current_path(&self) -> String;

    /// Imperatively navigate to `path`.
    fn navigate(&self, path: &str);
}

/// The surface the scroll-lock marker is applied to.
///
/// Implementations must be idempotent: setting the same value twice is
/// harmless.
pub trait ScrollSurface: Send {
    fn set_locked(&self, locked: bool);
}
