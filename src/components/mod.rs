//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`menu`] - Expandable menu belt
//! - [`sliders`] - Home and project slideshows
//! - [`grid`] - Thumbnail grid view
//! - [`project_info`] - Project caption panel
//! - [`transitions`] - Page transition choreography
//! - [`media`] - Renderable media items
//! - [`icons`] - Centralized icon definitions

pub mod grid;
pub mod icons;
pub mod media;
pub mod menu;
pub mod pages;
pub mod project_info;
pub mod router;
pub mod sliders;
pub mod transitions;

pub use router::AppRouter;
