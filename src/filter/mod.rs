//! Keypress filtering and focus handling
//!
//! The decision procedure a widget module runs against every bus
//! notification, plus the two-mode focus switch.

mod machine;

pub use machine::{KeyPressFilter, KeyPressHandler};
