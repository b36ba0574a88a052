//! Core filter implementation
//!
//! Decides, per incoming notification, whether it is a relevant keypress
//! for the owning module, tracks the active operating mode, and drives the
//! module's callbacks.

use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::config::{KeyBindingsConfig, TakeFocusSpec, DEFAULT_MODE};
use crate::keymap::ReverseKeyMap;
use crate::notify::{KeyPressEvent, Notification};

/// Module-side hooks invoked by the filter.
///
/// Supplied at construction; the filter never reaches back into the host
/// module any other way.
pub trait KeyPressHandler {
    /// A key bound in this module's config was pressed while the module
    /// held the operating mode. `action` is the logical name the binding
    /// was registered under. Called at most once per event, synchronously,
    /// before `handle` returns.
    fn on_valid_key_press(&mut self, action: &str, event: &KeyPressEvent);

    /// The module just took the operating mode. The bus announcement and
    /// the local mode switch have already happened by the time this runs;
    /// override to start whatever the module does with focus.
    fn on_focus_received(&mut self) {}
}

/// Filters bus notifications down to the keypresses one module cares about.
///
/// Effectively a two-mode switch between the reserved default mode and this
/// module's configured operating mode. Transitions are driven only by
/// mode-change announcements, which any module (including this one) may
/// emit.
pub struct KeyPressFilter<H> {
    /// Active operating mode, as last announced on the bus
    mode: String,
    /// Mode this module claims while it has focus
    own_mode: String,
    /// Compare sender/target instance ids on every event
    multi_instance: bool,
    /// Keypress that grabs focus while another mode is active
    take_focus: Option<TakeFocusSpec>,
    /// Instance this module lives in, for the focus-take sender check
    owning_instance: Option<String>,
    /// Physical key -> logical action, derived from the config
    keymap: ReverseKeyMap,
    /// Module-side callbacks
    handler: H,
    /// Outgoing bus handle for mode announcements
    notify_tx: broadcast::Sender<Notification>,
}

impl<H: KeyPressHandler> KeyPressFilter<H> {
    /// Build a filter for one module instance.
    ///
    /// `owning_instance` names the instance this module runs in. With
    /// multi-instance enabled and no owning instance set, focus can never
    /// be taken.
    pub fn new(
        config: KeyBindingsConfig,
        owning_instance: Option<String>,
        handler: H,
        notify_tx: broadcast::Sender<Notification>,
    ) -> Self {
        let keymap = ReverseKeyMap::new(&config);
        Self {
            mode: DEFAULT_MODE.to_string(),
            own_mode: config.mode,
            multi_instance: config.multi_instance,
            take_focus: config.take_focus,
            owning_instance,
            keymap,
            handler,
            notify_tx,
        }
    }

    /// Active operating mode as this filter last saw it.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Whether this module currently holds the operating mode.
    pub fn has_focus(&self) -> bool {
        self.mode == self.own_mode
    }

    /// The module-side handler supplied at construction.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the module-side handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Run one bus notification through the filter.
    ///
    /// Returns `true` when the notification was consumed here; `false`
    /// means the caller should keep processing it normally.
    pub fn handle(&mut self, notification: &Notification) -> bool {
        match notification {
            // Mode announcements always apply, whatever the current mode.
            Notification::ModeChanged(mode) => {
                self.set_mode(mode);
                true
            }
            Notification::KeyPress(event) => {
                if self.has_focus() {
                    self.dispatch_bound_key(event)
                } else {
                    self.try_take_focus(event)
                }
            }
        }
    }

    /// Parse-and-handle entry point for hosts that deliver raw
    /// (kind, payload) pairs. Unknown kinds fall through unhandled.
    pub fn handle_bus(&mut self, kind: &str, payload: &serde_json::Value) -> bool {
        match Notification::from_bus(kind, payload) {
            Some(notification) => self.handle(&notification),
            None => false,
        }
    }

    /// Give up the operating mode and announce the default mode.
    ///
    /// Nothing calls this automatically: a module that never releases
    /// keeps exclusive mode until some other announcement displaces it.
    pub fn release_focus(&mut self) {
        info!(from = %self.mode, to = DEFAULT_MODE, "releasing keypress focus");
        let _ = self
            .notify_tx
            .send(Notification::ModeChanged(DEFAULT_MODE.to_string()));
        self.mode = DEFAULT_MODE.to_string();
    }

    /// Apply a mode announcement from the bus.
    fn set_mode(&mut self, mode: &str) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "operating mode changed");
        }
        self.mode = mode.to_string();
    }

    /// Keypress while this module holds the mode.
    fn dispatch_bound_key(&mut self, event: &KeyPressEvent) -> bool {
        if self.multi_instance && event.sender != event.instance {
            debug!(
                sender = %event.sender,
                instance = %event.instance,
                "keypress addressed to another instance"
            );
            return false;
        }

        let Some(action) = self.keymap.action_for(&event.key_name).map(str::to_owned) else {
            debug!(key = %event.key_name, "key not bound");
            return false;
        };

        debug!(key = %event.key_name, action = %action, "dispatching bound key");
        self.handler.on_valid_key_press(&action, event);
        true
    }

    /// Keypress while some other mode is active: check whether it is the
    /// configured focus-take key for this instance.
    fn try_take_focus(&mut self, event: &KeyPressEvent) -> bool {
        let Some(spec) = &self.take_focus else {
            return false;
        };

        if self.multi_instance
            && self.owning_instance.as_deref() != Some(event.sender.as_str())
        {
            debug!(sender = %event.sender, "focus keypress from another instance");
            return false;
        }

        let matches = match spec {
            TakeFocusSpec::ByKeyName(key_name) => event.key_name == *key_name,
            TakeFocusSpec::ByKeyNameAndState { key_name, key_state } => {
                event.key_name == *key_name && event.key_state == *key_state
            }
        };
        if !matches {
            return false;
        }

        self.claim_focus();
        self.handler.on_focus_received();
        true
    }

    /// Claim the operating mode: announce it on the bus, then switch the
    /// local state so the in-mode rule matches from the next event on.
    fn claim_focus(&mut self) {
        info!(from = %self.mode, to = %self.own_mode, "taking keypress focus");
        let _ = self
            .notify_tx
            .send(Notification::ModeChanged(self.own_mode.clone()));
        self.mode = self.own_mode.clone();
    }
}
