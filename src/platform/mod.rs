//! Platform abstraction layer
//!
//! The device layer polls its buttons once per tick and hands the core a
//! [`TickInput`] snapshot. Drawing and sound go through
//! [`renderer::Canvas`](crate::renderer::Canvas) and
//! [`audio::AudioSink`](crate::audio::AudioSink).

pub mod input;

pub use input::{Button, Buttons, InputTracker, TickInput};
