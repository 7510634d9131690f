//! Presentation snapshots and the diff handed to the rendering layer.

use super::types::Change;

/// Every marker the rendering layer reacts to, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Field text.
    pub value: String,
    /// Container-level "suggesting" marker.
    pub suggesting: bool,
    /// Container-level "restriction-error" marker.
    pub restriction_error: bool,
    /// Index of the choice carrying the "active" marker.
    pub active: Option<usize>,
    /// Per-choice "filtered-out" markers.
    pub filtered_out: Vec<bool>,
}

impl Presentation {
    /// Changes that turn `self` into `next`.
    ///
    /// The field value comes first, then filter flags, then the highlight
    /// (old one cleared before the new one is set), then container markers.
    pub fn diff(&self, next: &Presentation) -> Vec<Change> {
        let mut changes = Vec::new();

        if self.value != next.value {
            changes.push(Change::Value(next.value.clone()));
        }

        for (index, (before, after)) in self
            .filtered_out
            .iter()
            .zip(next.filtered_out.iter())
            .enumerate()
        {
            if before != after {
                changes.push(Change::FilteredOut {
                    index,
                    filtered_out: *after,
                });
            }
        }

        if self.active != next.active {
            if let Some(index) = self.active {
                changes.push(Change::Active {
                    index,
                    active: false,
                });
            }
            if let Some(index) = next.active {
                changes.push(Change::Active {
                    index,
                    active: true,
                });
            }
        }

        if self.suggesting != next.suggesting {
            changes.push(Change::Suggesting(next.suggesting));
        }
        if self.restriction_error != next.restriction_error {
            changes.push(Change::RestrictionError(next.restriction_error));
        }

        changes
    }
}
