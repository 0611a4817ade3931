#![forbid(unsafe_code)]

//! Core primitives for PatternPlay demos.
//!
//! - [`surface`]: the retained text document a widget renders into.
//! - [`timer`]: a deterministic virtual-clock timer queue.
//! - [`widget`]: the [`Widget`] contract, per-callback [`Context`], and
//!   button [`Bindings`].

pub mod surface;
pub mod timer;
pub mod widget;

pub use surface::{Button, ButtonId, RegionId, Row, Surface};
pub use timer::{FiredTimer, MountId, TimerId, TimerQueue};
pub use widget::{Bindings, Context, Widget};

pub use web_time::Duration;
