//! Value types exchanged with the controller.

/// One selectable literal value in the suggestion list.
///
/// The value never changes after construction; only the two flags do, and
/// only the controller changes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    value: String,
    pub(super) filtered_out: bool,
    pub(super) active: bool,
}

impl Choice {
    pub(super) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            filtered_out: false,
            active: false,
        }
    }

    /// The literal value written into the field when this choice is committed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the current filter hides this choice.
    pub fn is_filtered_out(&self) -> bool {
        self.filtered_out
    }

    /// Whether this choice is highlighted.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Keys the controller reacts to. Every other key is left to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Select the previous available choice.
    Up,
    /// Select the next available choice.
    Down,
    /// Commit the selection.
    Enter,
    /// Commit the selection, like `Enter`.
    Tab,
    /// Close without committing.
    Escape,
}

/// Input events delivered to [`Controller::handle`](super::Controller::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The field gained focus.
    Focus,
    /// The field lost focus.
    Blur,
    /// The field text was edited; carries the new text.
    Input(String),
    /// A key was pressed while the field had focus.
    Key(Key),
    /// A pointer went down over the choice at this index.
    PointerDown(usize),
    /// A pointer that went down over a choice was released without clicking it.
    PointerCancel,
    /// The choice at this index was clicked.
    Click(usize),
    /// A pointer moved over the choice at this index.
    Hover(usize),
    /// The field value changed and was committed by the user.
    Change,
    /// The enclosing form is being submitted.
    Submit,
}

/// A single presentation flag that changed during a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The field text was replaced by the controller.
    Value(String),
    /// A choice was hidden or shown by the filter.
    FilteredOut {
        /// Choice index.
        index: usize,
        /// New flag.
        filtered_out: bool,
    },
    /// A choice was highlighted or un-highlighted.
    Active {
        /// Choice index.
        index: usize,
        /// New flag.
        active: bool,
    },
    /// The choice list was opened or closed.
    Suggesting(bool),
    /// The restriction error marker was set or cleared.
    RestrictionError(bool),
}

/// What the host should do after delivering an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Suppress the default action of the event (key action, form submission).
    pub prevent_default: bool,
    /// Move keyboard focus back to the field.
    pub request_focus: bool,
    /// Presentation flags that changed, in the order they should be applied.
    pub changes: Vec<Change>,
    /// Index of the choice committed into the field by this event.
    pub committed: Option<usize>,
}

impl Response {
    pub(super) fn prevent() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }

    /// Whether nothing changed and nothing needs to be suppressed.
    pub fn is_noop(&self) -> bool {
        !self.prevent_default
            && !self.request_focus
            && self.changes.is_empty()
            && self.committed.is_none()
    }
}
