//! The controller state and its construction.

use super::filter::{restrict_from_payload, FilterConfig};
use super::presentation::Presentation;
use super::types::{Choice, Response};
use serde_json::Value;
use tracing::debug;

/// The suggestion state machine of one suggest input.
///
/// The controller owns the field text, the choice flags and the visibility
/// state. Hosts feed it events and apply the [`Response`] it returns; they
/// never mutate the flags themselves.
///
/// # Examples
///
/// ```rust
/// use suggest_input::suggest::{Controller, FilterConfig, Key};
///
/// let mut c = Controller::new(
///     "",
///     vec!["apple".into(), "banana".into(), "cherry".into()],
///     Some(FilterConfig::new().with_case_insensitive(true)),
///     false,
/// );
/// c.focus();
/// c.input("AN");
/// assert_eq!(c.active_index(), None);
/// c.key(Key::Down);
/// c.key(Key::Enter);
/// assert_eq!(c.value(), "banana");
/// assert!(!c.is_suggesting());
/// ```
#[derive(Debug, Clone)]
pub struct Controller {
    pub(super) choices: Vec<Choice>,
    pub(super) filter: Option<FilterConfig>,
    pub(super) restrict: bool,

    /// Text currently in the field.
    pub(super) value: String,
    /// Text seen by the last filter pass.
    pub(super) current_input: Option<String>,

    pub(super) suggesting: bool,
    pub(super) restriction_error: bool,

    pub(super) focused: bool,
    /// Field text when focus was gained; a blur with different text is a change.
    pub(super) value_at_focus: String,
    /// A pointer is down over a choice; a click on it is expected.
    pub(super) pending_commit: bool,
    /// A blur arrived while a commit was pending.
    pub(super) close_deferred: bool,
    /// Choice committed during the event being handled.
    pub(super) committed: Option<usize>,
}

impl Controller {
    /// Creates a controller for a field holding `value`.
    ///
    /// Runs an initial filter pass without opening the list, then the
    /// initial restriction check.
    pub fn new(
        value: impl Into<String>,
        choices: Vec<String>,
        filter: Option<FilterConfig>,
        restrict: bool,
    ) -> Self {
        let value = value.into();
        let mut controller = Self {
            choices: choices.into_iter().map(Choice::new).collect(),
            filter,
            restrict,
            value_at_focus: value.clone(),
            value,
            current_input: None,
            suggesting: false,
            restriction_error: false,
            focused: false,
            pending_commit: false,
            close_deferred: false,
            committed: None,
        };
        controller.update_input(true, true);
        controller.check_restriction();
        debug!(
            choices = controller.choices.len(),
            filter = ?controller.filter,
            restrict = controller.restrict,
            "suggest controller created"
        );
        controller
    }

    /// Creates a controller from untyped configuration payloads.
    ///
    /// Malformed or falsy payloads disable the corresponding feature.
    pub fn from_payloads(
        value: impl Into<String>,
        choices: Vec<String>,
        filter: &Value,
        restrict: &Value,
    ) -> Self {
        Self::new(
            value,
            choices,
            FilterConfig::from_payload(filter),
            restrict_from_payload(restrict),
        )
    }

    /// Text currently in the field.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// All choices in their original order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The filter configuration, if filtering is enabled.
    pub fn filter(&self) -> Option<FilterConfig> {
        self.filter
    }

    /// Whether the value is restricted to the choices.
    pub fn restrict(&self) -> bool {
        self.restrict
    }

    /// Whether the choice list is open.
    pub fn is_suggesting(&self) -> bool {
        self.suggesting
    }

    /// Whether the restriction error marker is set.
    pub fn restriction_error(&self) -> bool {
        self.restriction_error
    }

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Index of the highlighted choice.
    pub fn active_index(&self) -> Option<usize> {
        self.choices.iter().position(|c| c.active)
    }

    /// The highlighted choice.
    pub fn active_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| c.active)
    }

    /// Snapshot of every presentation marker.
    pub fn presentation(&self) -> Presentation {
        Presentation {
            value: self.value.clone(),
            suggesting: self.suggesting,
            restriction_error: self.restriction_error,
            active: self.active_index(),
            filtered_out: self.choices.iter().map(|c| c.filtered_out).collect(),
        }
    }

    /// Whether `value` equals one of the choices exactly.
    pub fn is_choice(&self, value: &str) -> bool {
        self.choices.iter().any(|c| c.value() == value)
    }

    /// Runs `f` and fills the response with the flags it changed.
    pub(super) fn respond(&mut self, f: impl FnOnce(&mut Self) -> Response) -> Response {
        let before = self.presentation();
        self.committed = None;
        let mut response = f(self);
        response.changes = before.diff(&self.presentation());
        response.committed = self.committed.take();
        response
    }

    pub(super) fn show_suggestion(&mut self) {
        self.update_input(true, true);
        if !self.suggesting {
            self.suggesting = true;
            debug!(value = %self.value, "suggestion opened");
        }
    }

    pub(super) fn hide_suggestion(&mut self) {
        self.set_active(None);
        if self.suggesting {
            self.suggesting = false;
            debug!(value = %self.value, "suggestion closed");
        }
    }

    pub(super) fn check_restriction(&mut self) {
        let error = self.restrict && !self.is_choice(&self.value);
        if error != self.restriction_error {
            debug!(value = %self.value, error, "restriction state changed");
        }
        self.restriction_error = error;
    }

    /// Writes the value of choice `index` into the field and closes the list.
    pub(super) fn decide(&mut self, index: usize) {
        let Some(choice) = self.choices.get(index) else {
            return;
        };
        self.value = choice.value().to_string();
        debug!(index, value = %self.value, "choice committed");
        self.committed = Some(index);
        self.update_input(true, true);
        self.check_restriction();
        self.hide_suggestion();
    }
}
