//! Type-safe key bindings.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text shown for it. Components expose their bindings through a
//! struct implementing [`KeyMap`], so hosts can render help or remap keys.
//!
//! ```rust
//! use suggest_input::key::{matches_binding, Binding};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let commit = Binding::new(vec![KeyCode::Enter, KeyCode::Tab]).with_help("enter", "commit");
//! let msg = KeyMsg { key: KeyCode::Tab, modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &commit));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
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

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys, e.g. `"↑/↓"`.
    pub key: String,
    /// Description of the action.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the key presses of this binding.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Checks whether a key message triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == key_msg.key && k.modifiers == key_msg.modifiers)
    }
}

/// Checks whether a key message triggers the given binding.
pub fn matches_binding(key_msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(key_msg)
}

/// Checks whether a key message triggers any of the given bindings.
pub fn matches(key_msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(key_msg))
}

/// Implemented by components' key maps so hosts can render help views.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings shown in the expanded help, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_any_key() {
        let b = Binding::new(vec![KeyCode::Enter, KeyCode::Tab]);
        assert!(b.matches(&key(KeyCode::Enter)));
        assert!(b.matches(&key(KeyCode::Tab)));
        assert!(!b.matches(&key(KeyCode::Esc)));
    }

    #[test]
    fn test_binding_requires_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)]);
        assert!(!b.matches(&key(KeyCode::Char('n'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Up]).with_help("↑", "up");
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Up)));
        assert_eq!(b.help().desc, "up");

        let empty = Binding::new(Vec::<KeyCode>::new());
        assert!(!empty.enabled());
    }

    #[test]
    fn test_matches_any_binding() {
        let up = Binding::new(vec![KeyCode::Up]);
        let down = Binding::new(vec![KeyCode::Down]);
        assert!(matches(&key(KeyCode::Down), &[&up, &down]));
        assert!(!matches(&key(KeyCode::Left), &[&up, &down]));
    }
}
