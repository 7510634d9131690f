//! Keyboard navigation over the available choices.

use super::model::Controller;
use super::types::Choice;
use tracing::trace;

impl Controller {
    /// Choices not hidden by the filter, with their indices, in order.
    pub fn available(&self) -> impl Iterator<Item = (usize, &Choice)> + '_ {
        self.choices
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.filtered_out)
    }

    /// Highlights choice `index`, clearing every other highlight first.
    ///
    /// A filtered-out index is treated as `None`.
    pub(super) fn set_active(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| self.choices.get(i).is_some_and(|c| !c.filtered_out));
        for (i, choice) in self.choices.iter_mut().enumerate() {
            choice.active = Some(i) == index;
        }
    }

    /// Moves the highlight to the previous available choice, wrapping from the
    /// first (or from no highlight) to the last.
    pub(super) fn select_upper(&mut self) {
        self.open_for_navigation();
        let available: Vec<usize> = self.available().map(|(i, _)| i).collect();
        let current = self
            .active_index()
            .and_then(|a| available.iter().position(|&i| i == a));
        let next = match current {
            None | Some(0) => available.last().copied(),
            Some(pos) => available.get(pos - 1).copied(),
        };
        trace!(from = ?self.active_index(), to = ?next, "select upper");
        self.set_active(next);
    }

    /// Moves the highlight to the next available choice, wrapping from the
    /// last (or from no highlight) to the first.
    pub(super) fn select_lower(&mut self) {
        self.open_for_navigation();
        let available: Vec<usize> = self.available().map(|(i, _)| i).collect();
        let current = self
            .active_index()
            .and_then(|a| available.iter().position(|&i| i == a));
        let next = match current {
            Some(pos) if pos + 1 < available.len() => available.get(pos + 1).copied(),
            _ => available.first().copied(),
        };
        trace!(from = ?self.active_index(), to = ?next, "select lower");
        self.set_active(next);
    }

    fn open_for_navigation(&mut self) {
        if !self.suggesting {
            self.show_suggestion();
            self.set_active(None);
        }
    }
}
