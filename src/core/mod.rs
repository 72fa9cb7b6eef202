//! Pure view-state core.
//!
//! Every state machine that drives the site's interaction layer lives
//! here, free of browser types so it can be unit-tested natively:
//!
//! - [`bus`] - Typed cross-component event bus
//! - [`placement`] - Epoch-scoped scattered-photograph placement
//! - [`arrow`] - Navigation arrow direction inference
//! - [`transition`] - Page transition phase guard
//! - [`gallery`] - Slideshow/grid view-mode machine
//! - [`slideshow`] - Carousel primitive, ghost slides, resize cool-down
//! - [`menu`] - Expandable menu machine and swipe classification
//! - [`presentation`] - Intro reveal sequencer
//! - [`content`] - Content provider (CMS documents + pure lookups)
//!
//! The component layer owns timers and listeners; machines record
//! pending deadlines as state and treat stale expirations as no-ops,
//! so callback ordering can never corrupt view state.

pub mod arrow;
pub mod bus;
pub mod content;
pub mod error;
pub mod gallery;
pub mod menu;
pub mod placement;
pub mod presentation;
pub mod slideshow;
pub mod transition;

pub use bus::{AppEvent, EventBus};
pub use menu::MenuSection;
pub use transition::TransitionController;
