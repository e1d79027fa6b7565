//! Route table and navigation link entries.

use serde::{Deserialize, Serialize};

/// Every route the page shell knows how to link to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    About,
    Register,
    Login,
    CreateActivity,
    Profile,
    MyActivities,
    Calendar,
    ChangePassword,
}

impl Route {
    /// Path this route is served at.
    pub fn href(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::CreateActivity => "/create-activity",
            Route::Profile => "/profile",
            Route::MyActivities => "/my-activities",
            Route::Calendar => "/calendar",
            Route::ChangePassword => "/password",
        }
    }

    /// Link title shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Register => "Register",
            Route::Login => "Login",
            Route::CreateActivity => "Create activity",
            Route::Profile => "Profile",
            Route::MyActivities => "My activities",
            Route::Calendar => "Calendar",
            Route::ChangePassword => "Change password",
        }
    }

    /// Whether this is one of the logged-out auth entry points.
    ///
    /// The navigation bar renders these in their own secondary list.
    pub fn is_auth_entry(&self) -> bool {
        matches!(self, Route::Register | Route::Login)
    }

    /// Exact-match lookup of a path.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::all().iter().copied().find(|r| r.href() == path)
    }

    /// Returns all known routes.
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Register,
            Route::Login,
            Route::CreateActivity,
            Route::Profile,
            Route::MyActivities,
            Route::Calendar,
            Route::ChangePassword,
        ]
    }
}

/// One entry of the derived navigation link list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinkEntry {
    pub route: Route,
    pub title: String,
    pub href: String,
}

impl From<Route> for NavLinkEntry {
    fn from(route: Route) -> Self {
        Self {
            route,
            title: route.title().to_string(),
            href: route.href().to_string(),
        }
    }
}
