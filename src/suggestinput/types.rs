//! Messages understood and produced by the suggest input component.
//!
//! The component cannot know where the host draws it, so pointer input on
//! the choice list arrives as index-based messages. Use
//! [`Model::choice_at_line`](super::Model::choice_at_line) to turn a mouse
//! row into a choice index.

use bubbletea_rs::Msg;

/// A pointer went down over the choice at this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoicePressMsg(pub usize);

/// The pointer was released, over the choice at this index if any.
///
/// Releasing over the pressed choice clicks it; anything else cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceReleaseMsg(pub Option<usize>);

/// The pointer moved over the choice at this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceHoverMsg(pub usize);

/// Sent after a choice was committed into the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMsg(pub String);

impl From<ChoicePressMsg> for Msg {
    fn from(msg: ChoicePressMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ChoiceReleaseMsg> for Msg {
    fn from(msg: ChoiceReleaseMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ChoiceHoverMsg> for Msg {
    fn from(msg: ChoiceHoverMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<CommitMsg> for Msg {
    fn from(msg: CommitMsg) -> Self {
        Box::new(msg) as Msg
    }
}
