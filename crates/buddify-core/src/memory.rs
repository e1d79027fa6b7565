//! In-memory capability implementations for tests and the demo shell.
//!
//! Each implementation is a cheap handle over shared state, so a test can
//! keep one clone to drive and inspect while the controller owns another.
//! Calls that matter for ordering are appended to a shared [`CallLog`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::AuthError;
use crate::session::SessionView;
use crate::traits::{AuthContext, Router, ScrollSurface};

/// A side effect observed on one of the in-memory capabilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallRecord {
    Logout,
    Navigate(String),
}

/// Ordered record of capability calls, shared between fakes.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<CallRecord>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: CallRecord) {
        self.calls.lock().push(record);
    }

    pub fn snapshot(&self) -> Vec<CallRecord> {
        self.calls.lock().clone()
    }

    pub fn count(&self, record: &CallRecord) -> usize {
        self.calls.lock().iter().filter(|r| *r == record).count()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

#[derive(Debug, Default)]
struct AuthInner {
    session: SessionView,
    logout_failure: Option<String>,
}

/// Auth context backed by a mutable in-memory session.
#[derive(Clone, Debug, Default)]
pub struct MemoryAuth {
    inner: Arc<Mutex<AuthInner>>,
    log: CallLog,
}

impl MemoryAuth {
    pub fn new(session: SessionView) -> Self {
        Self::with_log(session, CallLog::new())
    }

    pub fn with_log(session: SessionView, log: CallLog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AuthInner {
                session,
                logout_failure: None,
            })),
            log,
        }
    }

    /// Replace the published session.
    pub fn set_session(&self, session: SessionView) {
        self.inner.lock().session = session;
    }

    /// Set or clear only the avatar URL.
    pub fn set_avatar(&self, url: Option<&str>) {
        self.inner.lock().session.avatar_url = url.map(str::to_string);
    }

    /// Make subsequent logouts fail with `reason`.
    pub fn fail_logout(&self, reason: impl Into<String>) {
        self.inner.lock().logout_failure = Some(reason.into());
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl AuthContext for MemoryAuth {
    fn session(&self) -> SessionView {
        self.inner.lock().session.clone()
    }

    fn logout(&self) -> Result<(), AuthError> {
        let mut inner = self.inner.lock();
        self.log.push(CallRecord::Logout);
        if let Some(reason) = &inner.logout_failure {
            return Err(AuthError::LogoutFailed(reason.clone()));
        }
        inner.session = SessionView::logged_out();
        Ok(())
    }
}

/// Router holding the current path in memory.
#[derive(Clone, Debug)]
pub struct MemoryRouter {
    path: Arc<Mutex<String>>,
    log: CallLog,
}

impl MemoryRouter {
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_log(path, CallLog::new())
    }

    pub fn with_log(path: impl Into<String>, log: CallLog) -> Self {
        Self {
            path: Arc::new(Mutex::new(path.into())),
            log,
        }
    }

    /// Change the current path without recording a navigation call, the way
    /// a browser back button would.
    pub fn set_path(&self, path: impl Into<String>) {
        *self.path.lock() = path.into();
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.path.lock().clone()
    }

    fn navigate(&self, path: &str) {
        self.log.push(CallRecord::Navigate(path.to_string()));
        *self.path.lock() = path.to_string();
    }
}

/// Scroll surface that stores the marker in a flag.
#[derive(Clone, Debug, Default)]
pub struct FlagSurface {
    locked: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl FlagSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// Number of times the marker was written.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ScrollSurface for FlagSurface {
    fn set_locked(&self, locked: bool) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.locked.store(locked, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_log_orders_calls() {
        let log = CallLog::new();
        let auth = MemoryAuth::with_log(SessionView::logged_in("ana"), log.clone());
        let router = MemoryRouter::with_log("/", log.clone());

        auth.logout().unwrap();
        router.navigate("/login");

        assert_eq!(
            log.snapshot(),
            vec![CallRecord::Logout, CallRecord::Navigate("/login".into())]
        );
        assert!(!auth.session().is_logged_in);
        assert_eq!(router.current_path(), "/login");
    }

    #[test]
    fn test_failing_logout_keeps_session() {
        let auth = MemoryAuth::new(SessionView::logged_in("ana"));
        auth.fail_logout("network down");

        let err = auth.logout().unwrap_err();
        assert!(matches!(err, AuthError::LogoutFailed(_)));
        assert!(auth.session().is_logged_in);
        assert_eq!(auth.log().count(&CallRecord::Logout), 1);
    }
}
