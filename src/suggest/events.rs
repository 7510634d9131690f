//! Event handlers: the public transitions of the controller.

use super::model::Controller;
use super::types::{Event, Key, Response};
use tracing::debug;

impl Controller {
    /// Dispatches an event to the matching handler.
    pub fn handle(&mut self, event: Event) -> Response {
        match event {
            Event::Focus => self.focus(),
            Event::Blur => self.blur(),
            Event::Input(text) => self.input(text),
            Event::Key(key) => self.key(key),
            Event::PointerDown(index) => self.pointer_down(index),
            Event::PointerCancel => self.pointer_cancel(),
            Event::Click(index) => self.click(index),
            Event::Hover(index) => self.hover(index),
            Event::Change => self.change(),
            Event::Submit => self.submit(),
        }
    }

    /// The field gained focus: re-filter and open the list.
    pub fn focus(&mut self) -> Response {
        self.respond(|c| {
            c.focus_field();
            Response::default()
        })
    }

    /// The field lost focus: close the list.
    ///
    /// If the text changed since focus was gained this also counts as a
    /// change event. While a pointer is down over a choice the close waits
    /// for the click (or the pointer cancel) that follows.
    pub fn blur(&mut self) -> Response {
        self.respond(|c| {
            c.focused = false;
            if c.value != c.value_at_focus {
                c.value_at_focus = c.value.clone();
                c.check_restriction();
            }
            if c.pending_commit {
                debug!("close deferred until pending commit resolves");
                c.close_deferred = true;
            } else {
                c.hide_suggestion();
            }
            Response::default()
        })
    }

    /// The field text was edited.
    pub fn input(&mut self, text: impl Into<String>) -> Response {
        let text = text.into();
        self.respond(|c| {
            c.value = text;
            c.update_input(false, false);
            Response::default()
        })
    }

    /// Replaces the field text from outside, as a host resetting a form would.
    ///
    /// Re-filters and re-checks the restriction but never opens the list.
    pub fn set_value(&mut self, value: impl Into<String>) -> Response {
        let value = value.into();
        self.respond(|c| {
            c.value = value;
            c.value_at_focus = c.value.clone();
            c.update_input(true, true);
            c.check_restriction();
            Response::default()
        })
    }

    /// A key was pressed in the field.
    pub fn key(&mut self, key: Key) -> Response {
        self.respond(|c| match key {
            Key::Up => {
                c.select_upper();
                Response::prevent()
            }
            Key::Down => {
                c.select_lower();
                Response::prevent()
            }
            Key::Enter | Key::Tab => {
                if !c.suggesting {
                    return Response::default();
                }
                match c.active_index() {
                    Some(index) => c.decide(index),
                    None => c.hide_suggestion(),
                }
                Response::prevent()
            }
            Key::Escape => {
                if !c.suggesting {
                    return Response::default();
                }
                c.hide_suggestion();
                Response::prevent()
            }
        })
    }

    /// A pointer went down over choice `index`; a click is expected next.
    pub fn pointer_down(&mut self, index: usize) -> Response {
        if self.choices.get(index).is_some_and(|c| !c.filtered_out) {
            self.pending_commit = true;
        }
        Response::default()
    }

    /// The pointer was released without clicking the choice it went down on.
    pub fn pointer_cancel(&mut self) -> Response {
        self.respond(|c| {
            c.pending_commit = false;
            if c.close_deferred {
                c.close_deferred = false;
                if !c.focused {
                    c.hide_suggestion();
                }
            }
            Response::default()
        })
    }

    /// Choice `index` was clicked: commit it.
    pub fn click(&mut self, index: usize) -> Response {
        self.respond(|c| {
            c.pending_commit = false;
            c.close_deferred = false;
            if c.choices.get(index).is_some_and(|choice| !choice.filtered_out) {
                c.decide(index);
            }
            Response::prevent()
        })
    }

    /// A pointer moved over choice `index`: highlight it.
    pub fn hover(&mut self, index: usize) -> Response {
        self.respond(|c| {
            if c.suggesting {
                c.set_active(Some(index));
            }
            Response::default()
        })
    }

    /// The user committed an edit of the field value.
    pub fn change(&mut self) -> Response {
        self.respond(|c| {
            c.value_at_focus = c.value.clone();
            c.check_restriction();
            Response::default()
        })
    }

    /// The enclosing form is being submitted.
    ///
    /// `prevent_default` in the response means the submission must be
    /// blocked. A restriction violation always blocks it and brings the
    /// field back into suggesting mode; otherwise an open list is closed and
    /// the submission is blocked only for that.
    pub fn submit(&mut self) -> Response {
        self.respond(|c| {
            c.check_restriction();
            if c.restriction_error {
                debug!(value = %c.value, "submit blocked by restriction");
                c.focus_field();
                return Response {
                    prevent_default: true,
                    request_focus: true,
                    ..Response::default()
                };
            }
            if c.suggesting {
                c.hide_suggestion();
                return Response::prevent();
            }
            Response::default()
        })
    }

    fn focus_field(&mut self) {
        if !self.focused {
            self.focused = true;
            self.value_at_focus = self.value.clone();
        }
        self.show_suggestion();
    }
}
