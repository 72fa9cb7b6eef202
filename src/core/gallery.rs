//! Gallery view-mode state machine.
//!
//! A project gallery is either a slideshow or a thumbnail grid. Mode
//! flips fade the old view out first, so the machine carries a
//! transition lock: while locked, `toggle` and `jump_to_slideshow` are
//! no-ops. The owning component releases the lock once the fade
//! choreography (`config::fade::PAGE_MS`) has elapsed.

/// How a project gallery is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryView {
    #[default]
    Slideshow,
    Grid,
}

/// View-mode machine with a re-entrancy lock.
#[derive(Clone, Copy, Debug, Default)]
pub struct GalleryMode {
    view: GalleryView,
    locked: bool,
}

impl GalleryMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(self) -> GalleryView {
        self.view
    }

    pub fn is_locked(self) -> bool {
        self.locked
    }

    /// Flip between slideshow and grid. Returns the new view, or
    /// `None` while a previous flip is still fading.
    pub fn toggle(&mut self) -> Option<GalleryView> {
        if self.locked {
            return None;
        }
        self.view = match self.view {
            GalleryView::Slideshow => GalleryView::Grid,
            GalleryView::Grid => GalleryView::Slideshow,
        };
        self.locked = true;
        Some(self.view)
    }

    /// Force slideshow mode (a grid thumbnail was clicked; the caller
    /// carries the target slide index). No-op while locked or already
    /// in slideshow mode.
    pub fn jump_to_slideshow(&mut self) -> bool {
        if self.locked || self.view == GalleryView::Slideshow {
            return false;
        }
        self.view = GalleryView::Slideshow;
        self.locked = true;
        true
    }

    /// The fade choreography finished; mode flips are allowed again.
    pub fn release_lock(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_double_toggle_flips_exactly_once() {
        let mut mode = GalleryMode::new();
        assert_eq!(mode.toggle(), Some(GalleryView::Grid));
        // Second call lands inside the fade window.
        assert_eq!(mode.toggle(), None);
        assert_eq!(mode.view(), GalleryView::Grid);

        mode.release_lock();
        assert_eq!(mode.toggle(), Some(GalleryView::Slideshow));
    }

    #[test]
    fn jump_to_slideshow_respects_the_lock() {
        let mut mode = GalleryMode::new();
        mode.toggle();
        mode.release_lock();
        assert_eq!(mode.view(), GalleryView::Grid);

        assert!(mode.jump_to_slideshow());
        assert_eq!(mode.view(), GalleryView::Slideshow);
        // Still fading: neither jump nor toggle may run.
        assert!(!mode.jump_to_slideshow());
        assert_eq!(mode.toggle(), None);
    }

    #[test]
    fn jump_is_a_no_op_in_slideshow_mode() {
        let mut mode = GalleryMode::new();
        assert!(!mode.jump_to_slideshow());
        assert!(!mode.is_locked());
    }
}
