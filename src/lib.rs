#![warn(missing_docs)]

//! # suggest-input
//!
//! A suggest/combobox input for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a text field with a list of predefined choices that can be
//! filtered as you type, navigated by keyboard, and optionally enforced as
//! the only legal values.
//!
//! ## Layers
//!
//! - [`suggest`]: the suggestion state machine. Pure state, no rendering.
//!   Feed it events, apply the presentation changes it returns.
//! - [`suggestinput`]: a Bubble Tea component that owns a text field and a
//!   controller, handles `KeyMsg`s and renders the choice list with lipgloss.
//! - [`config`]: serde-decoded configuration (choices, default value,
//!   filter, restriction) and value validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use suggest_input::prelude::*;
//!
//! let config = SuggestConfig::new("FRUIT", vec!["apple".into(), "banana".into()])
//!     .with_filter(Some(FilterConfig::new().with_case_insensitive(true)))
//!     .with_restrict(true);
//!
//! let mut input = config.build_input();
//! input.focus();
//! assert!(input.is_suggesting());
//! assert_eq!(input.value(), "apple");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use suggest_input::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     input: SuggestInput,
//!     chosen: Option<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut input = suggestinput_new(vec!["red".into(), "green".into()]);
//!         input.focus();
//!         (Self { input, chosen: None }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(CommitMsg(value)) = msg.downcast_ref::<CommitMsg>() {
//!             self.chosen = Some(value.clone());
//!             return None;
//!         }
//!         self.input.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         let mut v = format!("Color:\n{}", self.input.view());
//!         if let Some(chosen) = &self.chosen {
//!             v.push_str(&format!("\n\nPicked: {}", chosen));
//!         }
//!         v
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod suggest;
pub mod suggestinput;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command.
/// - `blur()` unsets it and cleans up focus-related state.
/// - `focused()` reports the current state.
///
/// ```rust
/// use suggest_input::prelude::*;
///
/// fn toggle<T: Component>(component: &mut T) {
///     if component.focused() {
///         component.blur();
///     } else {
///         let _cmd: Option<bubbletea_rs::Cmd> = component.focus();
///     }
/// }
///
/// let mut input = suggestinput_new(vec!["a".into()]);
/// toggle(&mut input);
/// assert!(input.focused());
/// toggle(&mut input);
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use config::{choices_from_text, text_from_choices, SuggestConfig};
pub use error::{Error, Result};
pub use key::{matches, matches_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use suggest::{Change, Choice, Controller, Event, FilterConfig, Key, Presentation, Response};
pub use suggestinput::{
    default_key_map as suggestinput_default_key_map, new as suggestinput_new, ChoiceHoverMsg,
    ChoicePressMsg, ChoiceReleaseMsg, CommitMsg, KeyMap as SuggestInputKeyMap,
    Model as SuggestInput,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use suggest_input::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::SuggestConfig;
    pub use crate::key::{matches, matches_binding, Binding, KeyMap, KeyPress};
    pub use crate::suggest::{
        Change, Choice, Controller, Event, FilterConfig, Key, Presentation, Response,
    };
    pub use crate::suggestinput::{
        default_key_map as suggestinput_default_key_map, new as suggestinput_new,
        ChoiceHoverMsg, ChoicePressMsg, ChoiceReleaseMsg, CommitMsg,
        KeyMap as SuggestInputKeyMap, Model as SuggestInput,
    };
    pub use crate::Component;
    pub use crate::Error;
}
