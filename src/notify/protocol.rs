//! Bus notification definitions
//!
//! Payloads are plain JSON on the wire; field casing follows the bus
//! convention (`KeyName`, `Sender`, ...) and is preserved via serde renames.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bus name of a keypress notification
pub const KEYPRESS: &str = "KEYPRESS";
/// Bus name of an operating-mode announcement
pub const KEYPRESS_MODE_CHANGED: &str = "KEYPRESS_MODE_CHANGED";

/// A single key press as delivered by the key-binding module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPressEvent {
    /// Physical key name, e.g. "ArrowRight"
    #[serde(rename = "KeyName")]
    pub key_name: String,

    /// Press kind, e.g. "KEY_PRESSED" or "KEY_LONGPRESSED"
    #[serde(rename = "KeyState")]
    pub key_state: String,

    /// Instance that generated the event
    #[serde(rename = "Sender")]
    pub sender: String,

    /// Instance the event is addressed to
    #[serde(rename = "instance")]
    pub instance: String,
}

/// The two bus notifications the filter understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A key was pressed somewhere
    KeyPress(KeyPressEvent),
    /// A module announced the active operating mode
    ModeChanged(String),
}

impl Notification {
    /// Parse a raw bus notification.
    ///
    /// Unknown kinds and malformed payloads yield `None`; both mean "not
    /// for us", never a fault.
    pub fn from_bus(kind: &str, payload: &Value) -> Option<Self> {
        match kind {
            KEYPRESS => serde_json::from_value(payload.clone())
                .ok()
                .map(Notification::KeyPress),
            KEYPRESS_MODE_CHANGED => payload
                .as_str()
                .map(|mode| Notification::ModeChanged(mode.to_string())),
            _ => None,
        }
    }

    /// Bus name for this notification.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::KeyPress(_) => KEYPRESS,
            Notification::ModeChanged(_) => KEYPRESS_MODE_CHANGED,
        }
    }

    /// Wire payload for this notification.
    pub fn payload(&self) -> Value {
        match self {
            Notification::KeyPress(event) => {
                serde_json::to_value(event).unwrap_or(Value::Null)
            }
            Notification::ModeChanged(mode) => Value::String(mode.clone()),
        }
    }
}
