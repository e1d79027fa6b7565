//! Property tests for the navigation controller
//!
//! Each test drives a controller through the in-memory capabilities and
//! checks one invariant at every observable step.

use buddify_core::{FlagSurface, MemoryAuth, MemoryRouter, Route, ScrollLock, SessionView};
use buddify_nav::{derive_links, NavConfig, NavController, NavView, DEFAULT_AVATAR_URL};

struct Harness {
    auth: MemoryAuth,
    router: MemoryRouter,
    surface: FlagSurface,
    nav: NavController<MemoryAuth, MemoryRouter>,
}

impl Harness {
    fn new(session: SessionView, path: &str) -> Self {
        let auth = MemoryAuth::new(session);
        let router = MemoryRouter::new(path);
        let surface = FlagSurface::new();
        let nav = NavController::new(
            auth.clone(),
            router.clone(),
            ScrollLock::new(surface.clone()),
            NavConfig::default(),
        );
        Self {
            auth,
            router,
            surface,
            nav,
        }
    }

    fn assert_lock_matches_menu(&self) {
        assert_eq!(
            self.surface.is_set(),
            self.nav.toggles().menu_open,
            "scroll lock must be applied exactly while the menu is open"
        );
    }
}

#[test]
fn test_unhydrated_links_always_empty() {
    for logged_in in [false, true] {
        assert!(derive_links(false, logged_in).is_empty());
    }

    let h = Harness::new(SessionView::logged_in("ana"), "/");
    assert!(h.nav.links().is_empty());
    assert!(!h.nav.view().is_ready());
}

#[test]
fn test_link_sets_are_exact() {
    let titles = |logged_in| -> Vec<String> {
        derive_links(true, logged_in)
            .into_iter()
            .map(|l| l.title)
            .collect()
    };

    assert_eq!(
        titles(true),
        vec!["Home", "Create activity", "Profile", "My activities", "Calendar"]
    );
    assert_eq!(titles(false), vec!["Home", "About", "Register", "Login"]);
    assert_eq!(derive_links(true, true), derive_links(true, true));
}

#[test]
fn test_nested_path_does_not_activate_parent() {
    let mut h = Harness::new(SessionView::logged_in("ana"), "/profile/edit");
    h.nav.hydrate();
    assert!(h.nav.active().is_none());

    h.router.set_path("/profile");
    h.nav.on_route_change();
    assert_eq!(h.nav.active().map(|l| l.route), Some(Route::Profile));
}

#[test]
fn test_panels_mutually_exclusive_both_directions() {
    let mut h = Harness::new(SessionView::logged_in("ana"), "/");
    h.nav.hydrate();

    h.nav.toggle_menu();
    h.nav.toggle_avatar_panel();
    assert!(!h.nav.toggles().menu_open);
    assert!(h.nav.toggles().avatar_panel_open);

    h.nav.toggle_menu();
    assert!(h.nav.toggles().menu_open);
    assert!(!h.nav.toggles().avatar_panel_open);
}

#[test]
fn test_scroll_lock_tracks_menu_through_lifetime() {
    let mut h = Harness::new(SessionView::logged_out(), "/");
    h.assert_lock_matches_menu();

    h.nav.hydrate();
    h.assert_lock_matches_menu();

    h.nav.toggle_menu();
    h.assert_lock_matches_menu();

    h.router.set_path("/about");
    h.nav.on_route_change();
    h.assert_lock_matches_menu();
    assert!(!h.nav.toggles().menu_open);

    h.nav.toggle_menu();
    h.assert_lock_matches_menu();
    h.nav.toggle_avatar_panel();
    h.assert_lock_matches_menu();
    h.nav.toggle_menu();
    h.assert_lock_matches_menu();

    let surface = h.surface.clone();
    drop(h);
    assert!(!surface.is_set(), "lock must be absent after teardown");
}

#[test]
fn test_teardown_with_menu_closed_leaves_no_lock() {
    let h = Harness::new(SessionView::logged_in("ana"), "/");
    let surface = h.surface.clone();
    drop(h);
    assert!(!surface.is_set());
}

#[test]
fn test_repeated_mounts_share_lock_safely() {
    let surface = FlagSurface::new();
    let lock = ScrollLock::new(surface.clone());
    let auth = MemoryAuth::new(SessionView::logged_out());
    let router = MemoryRouter::new("/");

    for _ in 0..3 {
        let mut nav = NavController::new(
            auth.clone(),
            router.clone(),
            lock.clone(),
            NavConfig::default(),
        );
        nav.hydrate();
        nav.toggle_menu();
        assert!(surface.is_set());
    }

    assert!(!surface.is_set());
    assert_eq!(lock.holders(), 0);
}

#[test]
fn test_avatar_is_sticky_on_last_non_empty() {
    let mut h = Harness::new(SessionView::logged_in("ana"), "/");
    h.nav.hydrate();

    let upstream = [None, None, Some("https://x/a.png"), None];
    let mut shown = Vec::new();
    for value in upstream {
        h.auth.set_avatar(value);
        h.nav.on_session_change();
        shown.push(h.nav.displayed_avatar().to_string());
    }

    assert_eq!(
        shown,
        vec![
            DEFAULT_AVATAR_URL.to_string(),
            DEFAULT_AVATAR_URL.to_string(),
            "https://x/a.png".to_string(),
            "https://x/a.png".to_string(),
        ]
    );
}

#[test]
fn test_login_after_hydration_swaps_links() {
    let mut h = Harness::new(SessionView::logged_out(), "/about");
    h.nav.hydrate();
    assert_eq!(h.nav.active().map(|l| l.route), Some(Route::About));

    h.auth.set_session(SessionView::logged_in("ana"));
    h.nav.on_session_change();

    assert_eq!(h.nav.links().len(), 5);
    assert!(h.nav.active().is_none(), "About is not in the logged-in set");
    match h.nav.view() {
        NavView::Ready(bar) => {
            assert!(bar.is_logged_in);
            assert!(bar.secondary.is_empty());
            assert!(bar.avatar.is_some());
        }
        NavView::Loading { .. } => panic!("expected a ready view"),
    }
}

#[test]
fn test_session_change_does_not_close_menu() {
    let mut h = Harness::new(SessionView::logged_out(), "/");
    h.nav.hydrate();
    h.nav.toggle_menu();

    h.auth.set_session(SessionView::logged_in("ana"));
    h.nav.on_session_change();
    assert!(h.nav.toggles().menu_open);
    h.assert_lock_matches_menu();
}

#[test]
fn test_clearing_lock_keeps_marker_while_menu_open() {
    let surface = FlagSurface::new();
    let lock = ScrollLock::new(surface.clone());
    let mut nav = NavController::new(
        MemoryAuth::new(SessionView::logged_out()),
        MemoryRouter::new("/"),
        lock.clone(),
        NavConfig::default(),
    );
    nav.hydrate();
    nav.toggle_menu();

    lock.clear();
    assert_eq!(nav.toggles().menu_open, surface.is_set());
    assert!(surface.is_set());

    nav.toggle_menu();
    lock.clear();
    assert_eq!(nav.toggles().menu_open, surface.is_set());
    assert!(!surface.is_set());
}

#[test]
fn test_blank_avatar_never_replaces_placeholder() {
    let mut h = Harness::new(SessionView::logged_in("ana").with_avatar("   "), "/");
    h.nav.hydrate();
    assert_eq!(h.nav.displayed_avatar(), DEFAULT_AVATAR_URL);

    h.auth.set_avatar(Some(""));
    h.nav.on_session_change();
    assert_eq!(h.nav.displayed_avatar(), DEFAULT_AVATAR_URL);
}
