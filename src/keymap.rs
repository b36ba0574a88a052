//! Reverse lookup of configured key names
//!
//! The config maps logical action names to physical key names; incoming
//! events carry the physical name, so lookups here go the other way.

use std::collections::HashMap;

use crate::config::KeyBindingsConfig;

/// Physical key name -> logical action name, built once at setup.
#[derive(Debug, Clone, Default)]
pub struct ReverseKeyMap {
    actions: HashMap<String, String>,
}

impl ReverseKeyMap {
    /// Invert the configured bindings.
    ///
    /// When two actions are bound to the same physical key, the entry
    /// configured last wins.
    pub fn new(config: &KeyBindingsConfig) -> Self {
        let mut actions = HashMap::new();
        for (action, key) in &config.bindings {
            actions.insert(key.clone(), action.clone());
        }
        Self { actions }
    }

    /// Logical action bound to a physical key, if any.
    pub fn action_for(&self, key_name: &str) -> Option<&str> {
        self.actions.get(key_name).map(String::as_str)
    }

    /// Whether any bindings are configured at all.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of distinct physical keys this module listens for.
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: serde_json::Value) -> KeyBindingsConfig {
        KeyBindingsConfig::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_config() {
        let map = ReverseKeyMap::new(&KeyBindingsConfig::default());
        assert!(map.is_empty());
        assert_eq!(map.action_for("ArrowRight"), None);
    }

    #[test]
    fn test_inverts_bindings() {
        let map = ReverseKeyMap::new(&config(json!({
            "keyBindings": { "Right": "ArrowRight", "Left": "ArrowLeft" },
        })));

        assert_eq!(map.len(), 2);
        assert_eq!(map.action_for("ArrowRight"), Some("Right"));
        assert_eq!(map.action_for("ArrowLeft"), Some("Left"));
        assert_eq!(map.action_for("Enter"), None);
    }

    #[test]
    fn test_duplicate_key_last_entry_wins() {
        let map = ReverseKeyMap::new(&config(json!({
            "keyBindings": { "Next": "ArrowRight", "Right": "ArrowRight" },
        })));

        assert_eq!(map.len(), 1);
        assert_eq!(map.action_for("ArrowRight"), Some("Right"));
    }
}
