//! The suggestion state machine behind a suggest input.
//!
//! A [`Controller`] is bound to one text field and a fixed, ordered list of
//! choices. It decides when the choice list is open, which choice is
//! highlighted, which choices the typed text hides, and whether the value
//! violates the restriction to the choices.
//!
//! The controller has no rendering of its own. Each event returns a
//! [`Response`] whose `changes` list the presentation markers that flipped,
//! so a rendering layer can apply them without inspecting the controller.
//!
//! # Keyboard contract
//!
//! | Key | Suggesting | Not suggesting |
//! |-----|------------|----------------|
//! | Up / Down | move highlight (wrapping) | open, highlight last / first |
//! | Enter / Tab | commit highlight or close | left to the host |
//! | Esc | close | left to the host |
//!
//! # Pointer commits
//!
//! A blur that happens while a pointer is down over a choice does not close
//! the list; the click that follows commits the choice and closes it.
//!
//! ```rust
//! use suggest_input::suggest::{Controller, Event};
//!
//! let mut c = Controller::new("", vec!["apple".into(), "banana".into()], None, false);
//! c.handle(Event::Focus);
//! c.handle(Event::PointerDown(1));
//! c.handle(Event::Blur);
//! assert!(c.is_suggesting());
//! c.handle(Event::Click(1));
//! assert_eq!(c.value(), "banana");
//! assert!(!c.is_suggesting());
//! ```

pub mod events;
pub mod filter;
pub mod filtering;
pub mod model;
pub mod navigation;
pub mod presentation;
pub mod types;


pub use filter::{restrict_from_payload, FilterConfig};
pub use model::Controller;
pub use presentation::Presentation;
pub use types::{Change, Choice, Event, Key, Response};
