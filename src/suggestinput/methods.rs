//! Core methods for the Model struct.

use super::model::Model;
use super::types::{ChoiceHoverMsg, ChoicePressMsg, ChoiceReleaseMsg, CommitMsg};
use crate::key::matches_binding;
use crate::suggest::{Choice, Key, Response};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

impl Model {
    /// Returns the current value of the field.
    ///
    /// ```rust
    /// use suggest_input::suggestinput::new;
    ///
    /// let mut input = new(vec!["apple".into()]);
    /// input.set_value("apple");
    /// assert_eq!(input.value(), "apple");
    /// ```
    pub fn value(&self) -> &str {
        self.controller.value()
    }

    /// Replaces the value from outside. The choice list is not opened.
    pub fn set_value(&mut self, value: &str) {
        self.controller.set_value(value);
        self.pos = self.grapheme_count();
    }

    /// Returns the cursor position, in graphemes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.grapheme_count());
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets how many choice lines are drawn at once. 0 draws them all.
    pub fn set_max_visible_choices(&mut self, count: usize) {
        self.max_visible_choices = count;
    }

    /// Whether the field has focus.
    pub fn focused(&self) -> bool {
        self.controller.is_focused()
    }

    /// Focuses the field and opens the choice list.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.controller.focus();
        None
    }

    /// Blurs the field and closes the choice list, unless a pointer is down
    /// over a choice.
    pub fn blur(&mut self) {
        self.controller.blur();
    }

    /// Whether the choice list is open.
    pub fn is_suggesting(&self) -> bool {
        self.controller.is_suggesting()
    }

    /// Whether the value violates the restriction to the choices.
    pub fn restriction_error(&self) -> bool {
        self.controller.restriction_error()
    }

    /// All choices with their flags.
    pub fn choices(&self) -> &[Choice] {
        self.controller.choices()
    }

    /// The highlighted choice value.
    pub fn active_value(&self) -> Option<&str> {
        self.controller.active_choice().map(Choice::value)
    }

    /// Asks whether the enclosing form may be submitted now.
    ///
    /// Returns `false` when the submission must be blocked: always while the
    /// value violates the restriction (the field is then focused again and
    /// the list reopened), and while the list is open (it is closed).
    pub fn submit(&mut self) -> bool {
        !self.controller.submit().prevent_default
    }

    /// Update handles key messages and pointer messages for the choice list.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(press) = msg.downcast_ref::<ChoicePressMsg>() {
            self.pressed = Some(press.0);
            self.controller.pointer_down(press.0);
            return None;
        }

        if let Some(release) = msg.downcast_ref::<ChoiceReleaseMsg>() {
            let response = match (self.pressed.take(), release.0) {
                (Some(pressed), Some(over)) if pressed == over => self.controller.click(over),
                _ => self.controller.pointer_cancel(),
            };
            return self.apply(response);
        }

        if let Some(hover) = msg.downcast_ref::<ChoiceHoverMsg>() {
            self.controller.hover(hover.0);
            return None;
        }

        if !self.focused() {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let response = self.handle_key(key_msg);
            return self.apply(response);
        }

        None
    }

    /// Handles one key press and reports what the host should do with it.
    ///
    /// When `prevent_default` is false for Enter, Tab or Esc the key was
    /// not consumed and the host may act on it (submit the form, move focus).
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> Response {
        if matches_binding(key_msg, &self.key_map.select_upper) {
            return self.controller.key(Key::Up);
        }
        if matches_binding(key_msg, &self.key_map.select_lower) {
            return self.controller.key(Key::Down);
        }
        if matches_binding(key_msg, &self.key_map.commit) {
            let key = if key_msg.key == KeyCode::Tab {
                Key::Tab
            } else {
                Key::Enter
            };
            return self.controller.key(key);
        }
        if matches_binding(key_msg, &self.key_map.close) {
            return self.controller.key(Key::Escape);
        }

        if self.handle_movement_keys(key_msg) {
            return Response::default();
        }
        if let Some(text) = self.handle_deletion_keys(key_msg) {
            return self.controller.input(text);
        }
        if let Some(text) = self.handle_character_input(key_msg) {
            return self.controller.input(text);
        }
        Response::default()
    }

    /// Moves the cursor past a committed choice and announces the commit.
    /// Plain edits keep the cursor where the editing keys put it.
    fn apply(&mut self, response: Response) -> Option<Cmd> {
        response.committed?;
        let value = self.controller.value().to_string();
        self.pos = self.grapheme_count();
        let cmd: Cmd = Box::pin(async move { Some(Box::new(CommitMsg(value)) as Msg) });
        Some(cmd)
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.character_backward) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.set_cursor(0);
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.set_cursor(self.grapheme_count());
        } else {
            return false;
        }
        true
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> Option<String> {
        let mut graphemes: Vec<&str> = self.controller.value().graphemes(true).collect();
        if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos == 0 {
                return None;
            }
            graphemes.remove(self.pos - 1);
            self.pos -= 1;
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos >= graphemes.len() {
                return None;
            }
            graphemes.remove(self.pos);
        } else {
            return None;
        }
        Some(graphemes.concat())
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) -> Option<String> {
        let KeyCode::Char(ch) = key_msg.key else {
            return None;
        };
        if key_msg.modifiers.contains(KeyModifiers::CONTROL)
            || key_msg.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }
        let inserted = ch.to_string();
        let mut graphemes: Vec<&str> = self.controller.value().graphemes(true).collect();
        let before = graphemes.len();
        graphemes.insert(self.pos.min(before), &inserted);
        let text = graphemes.concat();
        // A combining mark may merge into the previous grapheme.
        let after = text.graphemes(true).count();
        self.pos = (self.pos + after).saturating_sub(before).min(after);
        Some(text)
    }

    pub(super) fn graphemes(&self) -> Vec<&str> {
        self.controller.value().graphemes(true).collect()
    }

    pub(super) fn grapheme_count(&self) -> usize {
        self.controller.value().graphemes(true).count()
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
