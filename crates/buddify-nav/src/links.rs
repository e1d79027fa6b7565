//! Navigation link derivation and active-link resolution.

use std::sync::Arc;

use buddify_core::{NavLinkEntry, Route};

const LOGGED_IN: &[Route] = &[
    Route::Home,
    Route::CreateActivity,
    Route::Profile,
    Route::MyActivities,
    Route::Calendar,
];

const LOGGED_OUT: &[Route] = &[Route::Home, Route::About, Route::Register, Route::Login];

/// Ordered link set for the given hydration and auth state.
///
/// Empty until hydrated so the bar never flashes the wrong menu.
pub fn derive_links(is_hydrated: bool, is_logged_in: bool) -> Vec<NavLinkEntry> {
    if !is_hydrated {
        return Vec::new();
    }
    let routes = if is_logged_in { LOGGED_IN } else { LOGGED_OUT };
    routes.iter().copied().map(NavLinkEntry::from).collect()
}

/// First entry whose href equals `path` exactly.
pub fn resolve_active<'a>(links: &'a [NavLinkEntry], path: &str) -> Option<&'a NavLinkEntry> {
    links.iter().find(|link| link.href == path)
}

/// Memoized [`derive_links`] keyed by `(is_hydrated, is_logged_in)`.
///
/// Repeated lookups with the same key hand back the same allocation, so
/// callers can use `Arc::ptr_eq` to skip downstream work.
#[derive(Debug, Clone)]
pub struct LinkMemo {
    key: Option<(bool, bool)>,
    links: Arc<[NavLinkEntry]>,
}

impl Default for LinkMemo {
    fn default() -> Self {
        Self {
            key: None,
            links: Arc::from(Vec::new()),
        }
    }
}

impl LinkMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, is_hydrated: bool, is_logged_in: bool) -> Arc<[NavLinkEntry]> {
        let key = (is_hydrated, is_logged_in);
        if self.key != Some(key) {
            tracing::trace!(is_hydrated, is_logged_in, "recomputing nav links");
            self.links = derive_links(is_hydrated, is_logged_in).into();
            self.key = Some(key);
        }
        Arc::clone(&self.links)
    }
}
