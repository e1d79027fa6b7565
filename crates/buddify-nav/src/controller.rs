//! Navigation controller state machine.
//!
//! State per instance is `{Hydrating, Hydrated} x {MenuClosed, MenuOpen} x
//! {AvatarClosed, AvatarOpen}`. Hydration is one-way. Opening either panel
//! closes the other. While the menu is open the controller holds a
//! [`ScrollLockGuard`], so the lock goes away with the controller.

use std::sync::Arc;

use buddify_core::{
    AuthContext, NavLinkEntry, NavResult, Route, Router, ScrollLock, ScrollLockGuard, SessionView,
};

use crate::avatar::AvatarSync;
use crate::config::NavConfig;
use crate::links::{resolve_active, LinkMemo};
use crate::view::{AvatarPanelView, NavBarView, NavLinkView, NavView};

/// Hydration lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Hydrating,
    Hydrated,
}

/// Transient panel state. Never both open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiToggleState {
    pub menu_open: bool,
    pub avatar_panel_open: bool,
}

/// Session-aware navigation controller.
pub struct NavController<A, R> {
    auth: A,
    router: R,
    config: NavConfig,
    scroll_lock: ScrollLock,
    menu_hold: Option<ScrollLockGuard>,
    lifecycle: Lifecycle,
    toggles: UiToggleState,
    memo: LinkMemo,
    links: Arc<[NavLinkEntry]>,
    active: Option<Route>,
    current_path: String,
    session: SessionView,
    avatar: AvatarSync,
}

impl<A: AuthContext, R: Router> NavController<A, R> {
    pub fn new(auth: A, router: R, scroll_lock: ScrollLock, config: NavConfig) -> Self {
        let session = auth.session();
        let current_path = router.current_path();
        let mut avatar = AvatarSync::new(config.placeholder_avatar_url.clone());
        avatar.observe(&session);

        let mut memo = LinkMemo::new();
        let links = memo.get(false, session.is_logged_in);

        Self {
            auth,
            router,
            config,
            scroll_lock,
            menu_hold: None,
            lifecycle: Lifecycle::Hydrating,
            toggles: UiToggleState::default(),
            memo,
            links,
            active: None,
            current_path,
            session,
            avatar,
        }
    }

    /// Complete the first evaluation pass and flip to `Hydrated`.
    ///
    /// Links, active entry and avatar are settled before the flag flips, so
    /// the first ready view is already consistent. Later calls do nothing.
    pub fn hydrate(&mut self) {
        if self.lifecycle == Lifecycle::Hydrated {
            tracing::debug!("hydrate called on an already hydrated nav controller");
            return;
        }

        self.session = self.auth.session();
        self.avatar.observe(&self.session);
        self.current_path = self.router.current_path();
        self.links = self.memo.get(true, self.session.is_logged_in);
        self.active = resolve_active(&self.links, &self.current_path).map(|link| link.route);
        self.lifecycle = Lifecycle::Hydrated;

        tracing::info!(
            logged_in = self.session.is_logged_in,
            path = %self.current_path,
            links = self.links.len(),
            "nav controller hydrated"
        );
    }

    /// Router notification: the current path may have changed.
    ///
    /// Navigating to a different active entry dismisses the mobile menu.
    pub fn on_route_change(&mut self) {
        let path = self.router.current_path();
        if path == self.current_path {
            return;
        }
        tracing::debug!(from = %self.current_path, to = %path, "route changed");
        self.current_path = path;
        self.refresh_active(true);
    }

    /// Auth-context notification: the session may have changed.
    pub fn on_session_change(&mut self) {
        let session = self.auth.session();
        if self.avatar.observe(&session) {
            tracing::debug!("adopted upstream avatar");
        }

        let login_changed = session.is_logged_in != self.session.is_logged_in;
        self.session = session;

        if login_changed {
            tracing::debug!(logged_in = self.session.is_logged_in, "session login state changed");
            if !self.session.is_logged_in {
                self.toggles.avatar_panel_open = false;
            }
        }

        let links = self
            .memo
            .get(self.lifecycle == Lifecycle::Hydrated, self.session.is_logged_in);
        if !Arc::ptr_eq(&links, &self.links) {
            self.links = links;
            self.refresh_active(false);
        }
    }

    /// Flip the mobile menu, closing the avatar panel first.
    pub fn toggle_menu(&mut self) {
        self.toggles.avatar_panel_open = false;
        let open = !self.toggles.menu_open;
        self.set_menu_open(open);
    }

    /// Flip the avatar panel, closing the mobile menu first.
    pub fn toggle_avatar_panel(&mut self) {
        self.set_menu_open(false);
        self.toggles.avatar_panel_open = !self.toggles.avatar_panel_open;
        tracing::debug!(open = self.toggles.avatar_panel_open, "avatar panel toggled");
    }

    pub fn close_menu(&mut self) {
        self.set_menu_open(false);
    }

    /// A link was clicked: dismiss the mobile menu, then navigate.
    ///
    /// The menu closes even when `href` is the current path, where no route
    /// change will follow.
    pub fn follow_link(&mut self, href: &str) {
        self.close_menu();
        self.router.navigate(href);
    }

    /// Log out through the auth context, then go to the login route.
    ///
    /// A failed logout is returned as is and no navigation happens.
    pub fn logout(&mut self) -> NavResult<()> {
        tracing::info!("logging out");
        if let Err(e) = self.auth.logout() {
            tracing::warn!(error = %e, "logout failed");
            return Err(e.into());
        }
        self.router.navigate(&self.config.login_route);
        Ok(())
    }

    /// Render snapshot for the current state.
    pub fn view(&self) -> NavView {
        if self.lifecycle == Lifecycle::Hydrating {
            return NavView::Loading {
                label: self.config.loading_label.clone(),
            };
        }

        let (secondary, primary): (Vec<_>, Vec<_>) = self
            .links
            .iter()
            .partition(|link| link.route.is_auth_entry());
        let to_view = |links: Vec<&NavLinkEntry>| -> Vec<NavLinkView> {
            links
                .into_iter()
                .map(|link| NavLinkView::from_entry(link, self.active))
                .collect()
        };

        let avatar = self.session.is_logged_in.then(|| AvatarPanelView {
            image_url: self.avatar.displayed().to_string(),
            user_name: self.session.user_name.clone().unwrap_or_default(),
            change_password: NavLinkView {
                title: Route::ChangePassword.title().to_string(),
                href: Route::ChangePassword.href().to_string(),
                active: self.current_path == Route::ChangePassword.href(),
            },
            open: self.toggles.avatar_panel_open,
        });

        NavView::Ready(NavBarView {
            brand_title: self.config.brand_title.clone(),
            brand_href: Route::Home.href().to_string(),
            is_logged_in: self.session.is_logged_in,
            menu_open: self.toggles.menu_open,
            primary: to_view(primary),
            secondary: to_view(secondary),
            avatar,
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_hydrated(&self) -> bool {
        self.lifecycle == Lifecycle::Hydrated
    }

    pub fn toggles(&self) -> UiToggleState {
        self.toggles
    }

    pub fn links(&self) -> &Arc<[NavLinkEntry]> {
        &self.links
    }

    pub fn active(&self) -> Option<&NavLinkEntry> {
        let active = self.active?;
        self.links.iter().find(|link| link.route == active)
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn displayed_avatar(&self) -> &str {
        self.avatar.displayed()
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    fn refresh_active(&mut self, navigated: bool) {
        let active = resolve_active(&self.links, &self.current_path).map(|link| link.route);
        let changed = active != self.active;
        self.active = active;
        if navigated && changed && self.toggles.menu_open {
            tracing::debug!("navigation dismissed the mobile menu");
            self.set_menu_open(false);
        }
    }

    fn set_menu_open(&mut self, open: bool) {
        if self.toggles.menu_open == open {
            return;
        }
        self.toggles.menu_open = open;
        self.menu_hold = open.then(|| self.scroll_lock.acquire());
        tracing::debug!(open, "mobile menu toggled");
    }
}

impl<A, R> Drop for NavController<A, R> {
    fn drop(&mut self) {
        if self.menu_hold.take().is_some() {
            tracing::debug!("nav controller torn down with menu open, scroll lock released");
        }
    }
}
