//! Notification bus protocol
//!
//! Typed view of the two bus notifications the filter understands, plus
//! parse and emit helpers for host adapters.

mod protocol;

pub use protocol::{KeyPressEvent, Notification, KEYPRESS, KEYPRESS_MODE_CHANGED};
