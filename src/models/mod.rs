//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Project`], [`MediaItem`], [`AboutInfo`] - CMS content records
//! - [`AppRoute`] - Hash-based navigation
//! - [`PageKind`] - Typed page context for page-level styling state

mod content;
mod route;
mod view;

pub use content::{AboutInfo, MediaItem, MediaKind, Project, grid_ordinal, slide_counter};
pub use route::AppRoute;
pub use view::PageKind;
