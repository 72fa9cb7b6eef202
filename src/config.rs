//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the
//! application: choreography timings, gesture thresholds, layout
//! insets, and content-endpoint locations.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site title shown in the menu header.
pub const SITE_TITLE: &str = "Pep Serra";

/// Site subtitle shown under the title.
pub const SITE_SUBTITLE: &str = "Photography & Direction";

// =============================================================================
// Content Provider Configuration
// =============================================================================

/// Base URL of the published CMS content.
pub const CONTENT_BASE_URL: &str = "https://content.pepserra.com/published";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the project list document.
    pub const PROJECTS_KEY: &str = "projects_cache";
    /// sessionStorage key for the about document.
    pub const ABOUT_KEY: &str = "about_cache";
}

// =============================================================================
// Transition Choreography
// =============================================================================

/// Fade choreography delays (milliseconds).
///
/// `PAGE_MS` matches the CSS opacity transition on page content; the
/// transition controller and the gallery mode lock both wait this long
/// before considering a fade finished.
pub mod fade {
    /// Page fade-out/fade-in duration.
    pub const PAGE_MS: u32 = 800;
    /// Delay between mounting hidden content and starting its fade-in,
    /// so the hidden state is painted first and the transition is not
    /// skipped.
    pub const PAINT_DELAY_MS: u32 = 50;
}

// =============================================================================
// Menu Behavior
// =============================================================================

pub mod menu {
    /// Debounce before a pointer-leave actually collapses the menu.
    pub const CLOSE_DELAY_MS: u32 = 250;
    /// Delay before the active section resets to Projects after a
    /// collapse, so the reset happens behind the collapse animation.
    pub const SECTION_RESET_MS: u32 = 300;
    /// Delay before the outside-tap listener arms on mobile, so the
    /// opening tap does not immediately close the menu.
    pub const OUTSIDE_TAP_ARM_MS: u32 = 100;
    /// Media query separating the touch layout from the pointer layout.
    pub const MOBILE_QUERY: &str = "(max-width: 768px)";
}

/// Swipe-gesture classification thresholds.
pub mod swipe {
    /// Minimum displacement for a significant swipe.
    pub const MIN_DISTANCE_PX: f64 = 50.0;
    /// Minimum velocity for a significant short swipe.
    pub const MIN_VELOCITY_PX_PER_MS: f64 = 0.5;
    /// Vertical travel beyond which a touch-move suppresses native
    /// scrolling (outside the open menu's content area).
    pub const SCROLL_SUPPRESS_PX: f64 = 10.0;
}

// =============================================================================
// Slideshow & Placement
// =============================================================================

pub mod slideshow {
    /// Whether project galleries wrap around. When false, advancing
    /// past the last item hands off to the next project instead.
    pub const LOOP_GALLERY: bool = true;
    /// Inactivity decay for the navigation arrow affordance.
    pub const ARROW_DECAY_MS: u32 = 1000;
    /// Window after a viewport resize during which index-change
    /// notifications are treated as non-interactive.
    pub const RESIZE_COOLDOWN_MS: f64 = 300.0;
    /// Eager-load budget for the home slideshow (first N projects).
    pub const HOME_EAGER_SLIDES: usize = 2;
    /// Eager-load budget for grid thumbnails (first visible row).
    pub const GRID_EAGER_COUNT: usize = 8;
}

/// Scattered-photograph placement parameters.
pub mod placement {
    /// Safe-zone inset on each side, as a fraction of the viewport.
    pub const INSET_FRAC: f64 = 0.12;
    /// Media height as a fraction of viewport height.
    pub const MEDIA_HEIGHT_FRAC: f64 = 0.4;
    /// Debounce for recomputing placements after a resize.
    pub const RESIZE_DEBOUNCE_MS: u32 = 200;
}

// =============================================================================
// Presentation / Intro Sequence
// =============================================================================

pub mod intro {
    /// How long the centered intro panel is shown before the gallery
    /// is revealed.
    pub const REVEAL_MS: u32 = 3000;
    /// When set, a finished intro navigates to the next project
    /// (wrapping) with the intro re-armed.
    pub const AUTO_ADVANCE: bool = false;
}
