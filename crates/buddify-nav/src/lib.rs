//! Session-aware navigation controller for the Buddify page shell
//!
//! The controller derives the visible navigation menu and the avatar panel
//! from the injected auth context and router, owns the transient toggle
//! state of the mobile menu and the avatar dropdown, and holds the document
//! scroll lock while the mobile menu is open.
//!
//! Nothing here depends on a UI framework. The host drives the controller
//! with discrete events and renders the [`NavView`] snapshot it produces.
//!
//! # Quick Start
//!
//! ```ignore
//! use buddify_core::{FlagSurface, MemoryAuth, MemoryRouter, ScrollLock, SessionView};
//! use buddify_nav::{NavConfig, NavController, NavView};
//!
//! let auth = MemoryAuth::new(SessionView::logged_in("ana"));
//! let router = MemoryRouter::new("/profile");
//! let lock = ScrollLock::new(FlagSurface::new());
//!
//! let mut nav = NavController::new(auth, router, lock, NavConfig::default());
//! assert!(matches!(nav.view(), NavView::Loading { .. }));
//!
//! // After the first stable render:
//! nav.hydrate();
//! nav.toggle_menu();
//! ```

pub mod avatar;
pub mod config;
pub mod controller;
pub mod links;
pub mod view;

pub use avatar::AvatarSync;
pub use config::{NavConfig, DEFAULT_AVATAR_URL};
pub use controller::{Lifecycle, NavController, UiToggleState};
pub use links::{derive_links, resolve_active, LinkMemo};
pub use view::{AvatarPanelView, NavBarView, NavLinkView, NavView};
