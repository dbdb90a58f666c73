//! Adapter utilities for the `pullrefresh` crate.
//!
//! The `pullrefresh` crate is UI-agnostic and focuses on the gesture state machine and its
//! motion model. This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - An offset sink that keeps the absolute pulled offset for layout code
//! - An event queue so immediate-mode UIs can drain notifications once per frame
//! - A frame-driven controller bundling both with the state machine
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

mod accumulator;
mod controller;
mod events;

#[cfg(test)]
mod tests;

pub use accumulator::OffsetAccumulator;
pub use controller::Controller;
pub use events::{EventQueue, PullEvent};
