//! Core types for the Buddify page shell
//!
//! This crate holds everything the navigation controller consumes but does
//! not own: the route table, the session snapshot published by the auth
//! context, the capability traits the host wires in, and the process-wide
//! scroll lock.
//!
//! ## Key Types
//!
//! - [`Route`] / [`NavLinkEntry`]: known app routes and their link form
//! - [`SessionView`]: read-only snapshot of the auth context
//! - [`AuthContext`], [`Router`], [`ScrollSurface`]: injected capabilities
//! - [`ScrollLock`]: reference-counted document scroll lock

pub mod error;
pub mod memory;
pub mod route;
pub mod scroll;
pub mod session;
pub mod traits;

pub use error::{AuthError, ConfigError, NavError, NavResult};
pub use memory::{CallLog, CallRecord, FlagSurface, MemoryAuth, MemoryRouter};
pub use route::{NavLinkEntry, Route};
pub use scroll::{ScrollLock, ScrollLockGuard};
pub use session::SessionView;
pub use traits::{AuthContext, Router, ScrollSurface};
