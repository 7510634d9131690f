//! View rendering methods for the suggest input component.

use super::model::Model;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// View renders the field on the first line and, while suggesting, one
    /// line per available choice below it.
    pub fn view(&self) -> String {
        let mut v = format!("{}{}", self.prompt_style.render(&self.prompt), self.field_view());

        if !self.controller.is_suggesting() {
            return v;
        }

        let active = self.controller.active_index();
        let blank = " ".repeat(self.active_marker.width());
        for (index, choice) in self.visible_choices() {
            v.push('\n');
            if Some(index) == active {
                let line = format!("{}{}", self.active_marker, choice);
                v.push_str(&self.active_choice_style.render(&line));
            } else {
                let line = format!("{}{}", blank, choice);
                v.push_str(&self.choice_style.render(&line));
            }
        }
        v
    }

    /// Maps a line of the rendered choice list (0 is the first line below the
    /// field) to the index of the choice drawn there.
    pub fn choice_at_line(&self, line: usize) -> Option<usize> {
        if !self.controller.is_suggesting() {
            return None;
        }
        self.visible_choices().nth(line).map(|(index, _)| index)
    }

    /// Available choices inside the scroll window, which keeps the highlighted
    /// choice visible.
    fn visible_choices(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        let available: Vec<(usize, &str)> = self
            .controller
            .available()
            .map(|(i, c)| (i, c.value()))
            .collect();

        let window = if self.max_visible_choices == 0 {
            available.len()
        } else {
            self.max_visible_choices
        };
        let active_pos = self
            .controller
            .active_index()
            .and_then(|a| available.iter().position(|(i, _)| *i == a))
            .unwrap_or(0);
        let start = (active_pos + 1).saturating_sub(window);

        available.into_iter().skip(start).take(window)
    }

    fn field_view(&self) -> String {
        let value = self.controller.value();
        let style = if self.controller.restriction_error() {
            &self.error_text_style
        } else {
            &self.text_style
        };

        if value.is_empty() && !self.focused() && !self.placeholder.is_empty() {
            return self.placeholder_style.render(&self.placeholder);
        }

        if !self.focused() {
            return style.render(value);
        }

        let graphemes = self.graphemes();
        let pos = self.pos.min(graphemes.len());
        let before = graphemes[..pos].concat();
        let under = graphemes.get(pos).copied().unwrap_or(" ");
        let after = if pos < graphemes.len() {
            graphemes[pos + 1..].concat()
        } else {
            String::new()
        };

        let mut v = String::new();
        if !before.is_empty() {
            v.push_str(&style.render(&before));
        }
        v.push_str(&self.cursor_style.render(under));
        if !after.is_empty() {
            v.push_str(&style.render(&after));
        }
        v
    }
}
