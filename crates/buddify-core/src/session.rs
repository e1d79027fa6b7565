//! Session snapshot published by the auth context.

use serde::{Deserialize, Serialize};

/// Read-only view of the current authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub is_logged_in: bool,
    pub user_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl SessionView {
    /// A logged-out session.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// A logged-in session without an avatar yet.
    pub fn logged_in(user_name: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            user_name: Some(user_name.into()),
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Avatar URL if present and non-blank.
    pub fn usable_avatar(&self) -> Option<&str> {
        self.avatar_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
