//! Configuration loading
//!
//! Deserializes the key-binding settings a host module receives as part of
//! its framework config blob. Every field has a default, so an absent config
//! still produces a working (if inert) filter.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Reserved mode name no module owns; the bus idles here.
pub const DEFAULT_MODE: &str = "DEFAULT";

/// Key-binding settings consumed from the embedding module's config.
///
/// Surface keys follow the config convention of the key-binding module
/// (`keyBindingsMode`, `keyBindings`, ...); unrelated keys in the blob are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeyBindingsConfig {
    /// Operating mode this module claims while it has focus
    #[serde(rename = "keyBindingsMode")]
    pub mode: String,

    /// Logical action name -> physical key name
    ///
    /// Duplicate physical keys are a config mistake, not an error: the
    /// last entry wins in the derived reverse map.
    #[serde(rename = "keyBindings")]
    pub bindings: IndexMap<String, String>,

    /// Compare the event's sender against its target instance id
    #[serde(rename = "kbMultiInstance")]
    pub multi_instance: bool,

    /// Keypress that grabs focus while another mode is active
    #[serde(rename = "keyBindingsTakeFocus")]
    pub take_focus: Option<TakeFocusSpec>,
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            bindings: IndexMap::new(),
            multi_instance: true,
            take_focus: None,
        }
    }
}

impl KeyBindingsConfig {
    /// Parse the module's config blob.
    ///
    /// `Null` counts as "no config" and yields the all-defaults config,
    /// leaving the filter with an empty reverse map.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// How the focus-grabbing keypress is matched.
///
/// The config accepts either a bare key name, which matches on name alone,
/// or a `{KeyName, KeyState}` object, which must match both fields. The
/// shape is decided here, at load time, not re-inspected per event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TakeFocusSpec {
    ByKeyName(String),
    ByKeyNameAndState {
        #[serde(rename = "KeyName")]
        key_name: String,
        #[serde(rename = "KeyState")]
        key_state: String,
    },
}

/// Errors from parsing the host-supplied config blob
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed key-binding config: {0}")]
    Invalid(#[from] serde_json::Error),
}
