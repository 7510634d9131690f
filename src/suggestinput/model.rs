//! Core model implementation for the suggest input component.

use super::keymap::{default_key_map, KeyMap};
use crate::suggest::{Controller, FilterConfig};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

/// A single-line text field with a filterable list of choices.
///
/// The text and every choice flag live in a [`Controller`]; this model adds
/// the cursor, key handling and rendering on top of it.
///
/// # Examples
///
/// ```rust
/// use suggest_input::suggestinput::new;
/// use suggest_input::suggest::FilterConfig;
///
/// let mut input = new(vec!["apple".into(), "banana".into(), "cherry".into()])
///     .with_filter(Some(FilterConfig::new().with_case_insensitive(true)));
/// input.focus();
/// input.set_placeholder("Pick a fruit...");
/// assert!(input.is_suggesting());
/// ```
pub struct Model {
    /// Prompt displayed before the field text.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,

    /// Style of the field text.
    pub text_style: Style,
    /// Style of the field text while the value violates the restriction.
    pub error_text_style: Style,

    /// Placeholder displayed while the field is empty and unfocused.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,

    /// Style of the character under the cursor.
    pub cursor_style: Style,

    /// Style of a choice line.
    pub choice_style: Style,
    /// Style of the highlighted choice line.
    pub active_choice_style: Style,
    /// Marker drawn before the highlighted choice.
    pub active_marker: String,

    /// Maximum number of choice lines drawn at once. 0 draws them all.
    pub max_visible_choices: usize,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    pub(super) controller: Controller,

    /// Cursor position, in graphemes.
    pub(super) pos: usize,

    /// Choice a pointer went down on and has not been released yet.
    pub(super) pressed: Option<usize>,
}

/// Creates an unfocused suggest input over `choices`, with an empty value,
/// no filtering and no restriction.
pub fn new(choices: Vec<String>) -> Model {
    Model::from_controller(Controller::new("", choices, None, false))
}

impl Model {
    /// Wraps an existing controller.
    pub fn from_controller(controller: Controller) -> Self {
        let mut m = Self {
            prompt: "> ".to_string(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            error_text_style: Style::new().foreground(Color::from("196")),
            placeholder: String::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
            choice_style: Style::new().foreground(Color::from("250")),
            active_choice_style: Style::new().foreground(Color::from("212")).bold(true),
            active_marker: "> ".to_string(),
            max_visible_choices: 0,
            key_map: default_key_map(),
            controller,
            pos: 0,
            pressed: None,
        };
        m.pos = m.grapheme_count();
        m
    }

    /// Rebuilds the controller with a filter configuration, keeping the value.
    pub fn with_filter(self, filter: Option<FilterConfig>) -> Self {
        let c = &self.controller;
        let controller = Controller::new(
            c.value(),
            c.choices().iter().map(|ch| ch.value().to_string()).collect(),
            filter,
            c.restrict(),
        );
        Self::from_controller_keeping_style(self, controller)
    }

    /// Rebuilds the controller with a restriction flag, keeping the value.
    pub fn with_restrict(self, restrict: bool) -> Self {
        let c = &self.controller;
        let controller = Controller::new(
            c.value(),
            c.choices().iter().map(|ch| ch.value().to_string()).collect(),
            c.filter(),
            restrict,
        );
        Self::from_controller_keeping_style(self, controller)
    }

    fn from_controller_keeping_style(mut self, controller: Controller) -> Self {
        self.controller = controller;
        self.pos = self.grapheme_count();
        self
    }

    /// The underlying controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

impl Default for Model {
    fn default() -> Self {
        new(Vec::new())
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
