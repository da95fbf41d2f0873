//! Event handling for Sence.
//!
//! Terminal key and mouse events are translated into store [`Action`]s.
//! Voting gestures map onto keys: a tap is `y`/`n`, a swipe is the right or
//! left arrow.
//!
//! [`Action`]: crate::state::Action

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
