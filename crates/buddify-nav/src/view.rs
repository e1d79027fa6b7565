//! Render snapshot handed to the presentation layer.

use buddify_core::{NavLinkEntry, Route};

/// What the navigation bar should draw right now.
#[derive(Clone, Debug, PartialEq)]
pub enum NavView {
    /// Hydration pending; render only the placeholder.
    Loading { label: String },
    Ready(NavBarView),
}

impl NavView {
    pub fn is_ready(&self) -> bool {
        matches!(self, NavView::Ready(_))
    }

    pub fn bar(&self) -> Option<&NavBarView> {
        match self {
            NavView::Ready(bar) => Some(bar),
            NavView::Loading { .. } => None,
        }
    }
}

/// Fully derived navigation bar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavBarView {
    pub brand_title: String,
    pub brand_href: String,
    pub is_logged_in: bool,
    /// Drives the mobile toggle glyph and the menu overlay.
    pub menu_open: bool,
    pub primary: Vec<NavLinkView>,
    /// Register and Login; empty while logged in.
    pub secondary: Vec<NavLinkView>,
    /// Present only while logged in.
    pub avatar: Option<AvatarPanelView>,
}

impl NavBarView {
    pub fn active_link(&self) -> Option<&NavLinkView> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .find(|link| link.active)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkView {
    pub title: String,
    pub href: String,
    pub active: bool,
}

impl NavLinkView {
    pub fn from_entry(entry: &NavLinkEntry, active: Option<Route>) -> Self {
        Self {
            title: entry.title.clone(),
            href: entry.href.clone(),
            active: active == Some(entry.route),
        }
    }
}

/// Avatar trigger plus its dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarPanelView {
    pub image_url: String,
    pub user_name: String,
    pub change_password: NavLinkView,
    pub open: bool,
}
