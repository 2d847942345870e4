//! Folio Showcase
//!
//! Project catalog records and the project modal state machine:
//!
//! - **Project Records**: the JSON data contract for showcase entries, with
//!   defensive defaults for every optional section
//! - **Project Modal**: open/close, catalog navigation, and image carousel
//!   state driven by keyboard and pointer events, plus the entrance
//!   descriptors the renderer animates

pub mod error;
pub mod modal;
pub mod project;

pub use error::{Result, ShowcaseError};
pub use modal::{ClickTarget, ProjectModal};
pub use project::{projects_from_json, ProjectMetrics, ProjectRecord, ProjectTag};
