//! Key bindings for the suggest input component.

use crate::key::{self, Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for choice navigation and text editing.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Highlight the previous available choice.
    pub select_upper: Binding,
    /// Highlight the next available choice.
    pub select_lower: Binding,
    /// Commit the highlighted choice.
    pub commit: Binding,
    /// Close the choice list.
    pub close: Binding,
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
}

fn ctrl(c: char) -> KeyPress {
    (KeyCode::Char(c), KeyModifiers::CONTROL).into()
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        select_upper: Binding::new(vec![KeyCode::Up.into(), ctrl('p')]).with_help("↑", "previous"),
        select_lower: Binding::new(vec![KeyCode::Down.into(), ctrl('n')]).with_help("↓", "next"),
        commit: Binding::new(vec![KeyCode::Enter, KeyCode::Tab]).with_help("enter", "choose"),
        close: Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
        character_forward: Binding::new(vec![KeyCode::Right.into(), ctrl('f')]),
        character_backward: Binding::new(vec![KeyCode::Left.into(), ctrl('b')]),
        line_start: Binding::new(vec![KeyCode::Home.into(), ctrl('a')]),
        line_end: Binding::new(vec![KeyCode::End.into(), ctrl('e')]),
        delete_character_backward: Binding::new(vec![KeyCode::Backspace.into(), ctrl('h')]),
        delete_character_forward: Binding::new(vec![KeyCode::Delete.into(), ctrl('d')]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.select_upper, &self.select_lower, &self.commit, &self.close]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.select_upper, &self.select_lower, &self.commit, &self.close],
            vec![
                &self.character_forward,
                &self.character_backward,
                &self.line_start,
                &self.line_end,
                &self.delete_character_backward,
                &self.delete_character_forward,
            ],
        ]
    }
}
