//! Configuration for the navigation controller

use serde::{Deserialize, Serialize};

use buddify_core::Route;

/// Hosted placeholder shown until the session publishes an avatar.
pub const DEFAULT_AVATAR_URL: &str = "https://res.cloudinary.com/dtlmrtzpa/image/upload/w_1000,c_fill,ar_1:1,g_auto,r_max,bo_5px_solid_red,b_rgb:262c35/v1731928071/avatar16_dsdi8v.png";

/// Navigation controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Avatar image used while the session has none
    pub placeholder_avatar_url: String,

    /// Text rendered while hydration is pending
    pub loading_label: String,

    /// Where `logout` sends the user
    pub login_route: String,

    /// Title of the brand link
    pub brand_title: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            placeholder_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            loading_label: "Loading...".to_string(),
            login_route: Route::Login.href().to_string(),
            brand_title: "Buddify".to_string(),
        }
    }
}

impl NavConfig {
    /// Override the placeholder avatar, ignoring blank values.
    pub fn with_placeholder_avatar(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.placeholder_avatar_url = url;
        }
        self
    }
}
