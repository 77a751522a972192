//! Key bindings.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the text shown for it in the help line.
//!
//! ```rust
//! use radial_timer::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = Binding::new(vec![KeyCode::Char('q')])
//!     .with_press(KeyCode::Char('c'), KeyModifiers::CONTROL)
//!     .with_help("q", "quit");
//!
//! let ctrl_c = KeyMsg { key: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
//! assert!(quit.matches(&ctrl_c));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key, e.g. `"enter"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys without modifiers.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Adds a key press with modifiers.
    pub fn with_press(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
        self.keys.push(KeyPress { code, modifiers });
        self
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Whether the key message triggers this binding.
    ///
    /// Shift is ignored for character keys because terminals already report
    /// it through the character's case.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if !self.enabled {
            return false;
        }
        let mut modifiers = key_msg.modifiers;
        if matches!(key_msg.key, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        self.keys
            .iter()
            .any(|k| k.code == key_msg.key && k.modifiers == modifiers)
    }
}

/// Whether the key message triggers any of the bindings.
pub fn matches(key_msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(key_msg))
}

/// Provides the bindings shown in the help line.
pub trait KeyMap {
    /// Bindings for the one-line help, in display order.
    fn short_help(&self) -> Vec<&Binding>;
}
