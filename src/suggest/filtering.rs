//! The filter pass run whenever the field text changes.

use super::model::Controller;
use tracing::{debug, trace};

impl Controller {
    /// Re-filters the choices against the field text and re-derives the
    /// highlight from an exact match.
    ///
    /// Does nothing when the text is the same as in the previous pass unless
    /// `force` is set. Opens the list unless `suppress` is set.
    pub(super) fn update_input(&mut self, force: bool, suppress: bool) {
        if !force && self.current_input.as_deref() == Some(self.value.as_str()) {
            return;
        }
        self.current_input = Some(self.value.clone());

        match self.filter {
            Some(filter) => {
                for choice in &mut self.choices {
                    if filter.matches(choice.value(), &self.value) {
                        choice.filtered_out = false;
                    } else {
                        choice.filtered_out = true;
                        choice.active = false;
                    }
                }
            }
            None => {
                for choice in &mut self.choices {
                    choice.filtered_out = false;
                }
            }
        }

        let exact = self
            .choices
            .iter()
            .position(|c| !c.filtered_out && c.value() == self.value);
        self.set_active(exact);

        trace!(
            text = %self.value,
            available = self.available().count(),
            active = ?exact,
            "filter pass"
        );

        if !suppress && !self.suggesting {
            self.suggesting = true;
            debug!(value = %self.value, "suggestion opened by input");
        }
    }
}
