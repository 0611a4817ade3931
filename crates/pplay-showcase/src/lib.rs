#![forbid(unsafe_code)]

//! PatternPlay showcase.
//!
//! The `pplay` binary is the selection controller around the demo engine: it
//! looks patterns up in the catalog, hands their demo type to a
//! [`DemoHost`](pplay_demos::DemoHost), and prints the resulting surface.

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod play;
pub mod render;
pub mod script;
pub mod test_logging;

pub use cli::{Cli, Commands, run, run_from_env};
pub use config::ShowcaseConfig;
pub use error::{Result, ShowcaseError};
