//! Suggest input component for Bubble Tea applications.
//!
//! A single-line text field with a list of predefined choices below it. The
//! list opens when the field is focused or edited, filters as you type when
//! a [`FilterConfig`](crate::suggest::FilterConfig) is set, and can be
//! navigated with the arrow keys. Enter or Tab writes the highlighted choice
//! into the field; Esc closes the list.
//!
//! # Basic Usage
//!
//! ```rust
//! use suggest_input::suggestinput::new;
//! use suggest_input::suggest::FilterConfig;
//!
//! let mut input = new(vec!["apple".into(), "banana".into(), "cherry".into()])
//!     .with_filter(Some(FilterConfig::new().with_prefix(true)))
//!     .with_restrict(true);
//! input.focus();
//! input.set_max_visible_choices(5);
//! ```
//!
//! # Restriction
//!
//! With restriction enabled the field is drawn with `error_text_style` while
//! its value is not one of the choices, and [`Model::submit`] refuses to let
//! the enclosing form submit.

pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use types::{ChoiceHoverMsg, ChoicePressMsg, ChoiceReleaseMsg, CommitMsg};
