//! A headless pull-to-refresh engine.
//!
//! For adapter-level utilities (offset accumulation, event queues, a frame-driven
//! controller), see the `pullrefresh-adapter` crate.
//!
//! This crate implements the behavior behind "pull down to refresh" lists: dragging a list
//! past its edge reveals a header (or footer) through a damped, bounded offset; releasing
//! beyond a threshold pins the view and requests a refresh; completing the refresh eases the
//! view back to rest.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - pointer events (or pre-computed drag deltas)
//! - whether the list is overscrolled, and which edges are reachable
//! - the measured size of each pulled view
//! - a clock, via `tick(now_ms)`
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod gesture;
mod listener;
mod machine;
pub mod motion;
mod options;
mod schedule;
mod state;
mod types;


pub use error::{ConfigError, PullError};
pub use listener::{OffsetSink, PullEventListener, RefreshTicket};
pub use machine::PullRefresh;
pub use options::PullOptions;
pub use schedule::{ScheduledTask, Scheduler, Task, TaskHandle};
pub use state::{EdgeConfig, EdgeLayout, PullSnapshot};
pub use types::{DragAction, DragSample, Edge, EdgePair, Phase, PullState};
