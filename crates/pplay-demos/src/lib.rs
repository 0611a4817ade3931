#![forbid(unsafe_code)]

//! Interactive design-pattern demos.
//!
//! # Role
//! This crate is the demo engine: ten small state machines, a [`Registry`]
//! that maps a demo type tag to a constructor, and a [`DemoHost`] that keeps
//! exactly one demo mounted at a time.
//!
//! # Example
//! ```
//! use pplay_demos::DemoHost;
//! use pplay_core::Duration;
//!
//! let mut host = DemoHost::default();
//! host.activate("state-vending");
//! host.press_label("Insert Coin");
//! host.press_label("Press Button");
//! host.advance(Duration::from_millis(1000));
//! assert_eq!(host.surface().output_text(), Some("Here is your soda! 🥤"));
//! ```

pub mod demos;
pub mod host;
pub mod registry;
pub mod settings;

pub use host::DemoHost;
pub use registry::{FALLBACK_TYPE, Factory, Registry, WidgetDescriptor};
pub use settings::DemoSettings;
