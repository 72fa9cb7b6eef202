//! Centralized icon definitions.

/// Navigation arrow, pointing left.
pub const ARROW_LEFT: icondata::Icon = icondata::LuArrowLeft;

/// Navigation arrow, pointing right.
pub const ARROW_RIGHT: icondata::Icon = icondata::LuArrowRight;
