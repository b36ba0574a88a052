//! keypress-filter: keypress notification filtering for dashboard widget modules
//!
//! Embeds in a widget module to react to keypress notifications broadcast
//! by a separate key-binding module. Provides:
//! - A typed view of the notification bus protocol
//! - Reverse lookup of configured key names
//! - A two-mode focus switch with explicit take and release
//!
//! The crate owns no process and no transport. The host calls
//! [`KeyPressFilter::handle`] (or [`KeyPressFilter::handle_bus`]) synchronously
//! from its notification dispatch, and outgoing mode announcements go through
//! the broadcast handle supplied at construction.

pub mod config;
pub mod filter;
pub mod keymap;
pub mod notify;

pub use config::{ConfigError, KeyBindingsConfig, TakeFocusSpec, DEFAULT_MODE};
pub use filter::{KeyPressFilter, KeyPressHandler};
pub use keymap::ReverseKeyMap;
pub use notify::{KeyPressEvent, Notification, KEYPRESS, KEYPRESS_MODE_CHANGED};
