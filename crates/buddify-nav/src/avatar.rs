//! Sticky avatar URL.

use buddify_core::SessionView;

/// Displayed avatar that only ever moves to a fresh usable upstream value.
///
/// Upstream sessions drop the avatar briefly while auth state changes hands;
/// holding the last good value keeps the image from flickering back to the
/// placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarSync {
    displayed: String,
}

impl AvatarSync {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            displayed: placeholder.into(),
        }
    }

    /// Feed the latest session. Returns true if the displayed URL changed.
    pub fn observe(&mut self, session: &SessionView) -> bool {
        match session.usable_avatar() {
            Some(url) if url != self.displayed => {
                self.displayed = url.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(avatar: Option<&str>) -> SessionView {
        let session = SessionView::logged_in("ana");
        match avatar {
            Some(url) => session.with_avatar(url),
            None => session,
        }
    }

    #[test]
    fn test_sticky_on_last_non_empty() {
        let mut sync = AvatarSync::new("placeholder");
        let upstream = [None, Some(""), Some("https://x/a.png"), Some("  "), None];
        let shown: Vec<String> = upstream
            .iter()
            .map(|u| {
                sync.observe(&session(*u));
                sync.displayed().to_string()
            })
            .collect();

        assert_eq!(
            shown,
            vec![
                "placeholder",
                "placeholder",
                "https://x/a.png",
                "https://x/a.png",
                "https://x/a.png"
            ]
        );
    }

    #[test]
    fn test_fresh_value_replaces_previous() {
        let mut sync = AvatarSync::new("placeholder");
        assert!(sync.observe(&session(Some("https://x/a.png"))));
        assert!(!sync.observe(&session(Some("https://x/a.png"))));
        assert!(sync.observe(&session(Some("https://x/b.png"))));
        assert_eq!(sync.displayed(), "https://x/b.png");
    }
}
