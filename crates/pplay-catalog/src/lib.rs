#![forbid(unsafe_code)]

//! Design-pattern catalog.
//!
//! The catalog is a static, ordered list of [`Pattern`] records. The demo
//! engine only reads [`Pattern::demo_type`]; everything else feeds the
//! detail page produced by [`render_detail`].

pub mod catalog;
pub mod detail;
pub mod error;
pub mod pattern;

pub use catalog::Catalog;
pub use detail::{DEMO_SECTION, render_detail};
pub use error::{CatalogError, Result};
pub use pattern::{Category, CodeSample, DeepDive, DemoRef, Pattern, Story};
