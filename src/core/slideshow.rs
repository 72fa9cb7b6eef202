//! Slideshow engine: carousel state, ghost-slide derivation, click
//! classification, resize cool-down, and eager-load hints.
//!
//! The [`Carousel`] is the primitive the slider components wrap: it
//! owns the active index and the loop policy, and reports every move
//! as a `from → to` pair so the arrow indicator can infer direction.

use crate::core::arrow::{self, ArrowDirection};

/// A completed index change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideMove {
    pub from: usize,
    pub to: usize,
}

/// Outcome of advancing the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(SlideMove),
    /// Non-looping carousel at its last item: the configured
    /// "next project" action fires instead of a wrap.
    EndReached,
}

/// Which half of the display area a click landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideStep {
    Prev,
    Next,
}

/// Symmetric click rule: left half steps back, right half forward.
///
/// The ghost slide is the one named exception — a ghost click is
/// always `Prev`, regardless of position (see the slider component).
pub fn classify_click(click_x: f64, viewport_width: f64) -> SlideStep {
    if click_x < viewport_width / 2.0 {
        SlideStep::Prev
    } else {
        SlideStep::Next
    }
}

/// Index of the ghost (previous) slide, if one should be shown.
///
/// Looping galleries always have a ghost (`(i + n - 1) % n`). A
/// non-looping gallery shows none before the first interaction, so
/// index 0 has no spurious "previous".
pub fn ghost_index(active: usize, len: usize, looping: bool) -> Option<usize> {
    if len < 2 {
        return None;
    }
    if looping {
        Some((active + len - 1) % len)
    } else if active > 0 {
        Some(active - 1)
    } else {
        None
    }
}

/// Indices that should be eagerly rendered: the entry slide and the
/// ghost it will show alongside. Everything else loads lazily.
pub fn eager_indices(initial: usize, len: usize, looping: bool) -> Vec<usize> {
    let mut indices = vec![initial];
    if let Some(ghost) = ghost_index(initial, len, looping)
        && ghost != initial
    {
        indices.push(ghost);
    }
    indices
}

/// The carousel primitive: active index plus loop policy.
#[derive(Clone, Copy, Debug)]
pub struct Carousel {
    len: usize,
    looping: bool,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize, looping: bool, initial: usize) -> Self {
        Self {
            len,
            looping,
            active: initial.min(len.saturating_sub(1)),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Step forward, wrapping in loop mode.
    pub fn slide_next(&mut self) -> Advance {
        if self.len < 2 {
            return Advance::EndReached;
        }
        let from = self.active;
        if from + 1 < self.len {
            self.active = from + 1;
        } else if self.looping {
            self.active = 0;
        } else {
            return Advance::EndReached;
        }
        Advance::Moved(SlideMove { from, to: self.active })
    }

    /// Step backward, wrapping in loop mode. `None` means no move
    /// (first item of a non-looping gallery).
    pub fn slide_prev(&mut self) -> Option<SlideMove> {
        if self.len < 2 {
            return None;
        }
        let from = self.active;
        if from > 0 {
            self.active = from - 1;
        } else if self.looping {
            self.active = self.len - 1;
        } else {
            return None;
        }
        Some(SlideMove { from, to: self.active })
    }

    /// Jump straight to an index (grid-thumbnail click).
    pub fn slide_to(&mut self, index: usize) -> Option<SlideMove> {
        if index >= self.len || index == self.active {
            return None;
        }
        let from = self.active;
        self.active = index;
        Some(SlideMove { from, to: index })
    }

    /// Travel direction of a move, for the arrow indicator.
    pub fn direction_of(&self, slide_move: SlideMove) -> ArrowDirection {
        arrow::from_slide_change(slide_move.from, slide_move.to, self.len, self.looping)
    }
}

/// Suppression window for resize-driven carousel recalculation.
///
/// A viewport resize re-runs layout and can emit index-change
/// notifications that no user asked for. Moves that land inside the
/// window are treated as non-interactive: positions still update, but
/// the arrow direction and ghost re-roll do not.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeCooldown {
    deadline_ms: f64,
}

impl ResizeCooldown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_resize(&mut self, now_ms: f64, window_ms: f64) {
        self.deadline_ms = now_ms + window_ms;
    }

    pub fn is_suppressed(&self, now_ms: f64) -> bool {
        now_ms < self.deadline_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_wraps_when_looping() {
        assert_eq!(ghost_index(0, 5, true), Some(4));
        assert_eq!(ghost_index(3, 5, true), Some(2));
    }

    #[test]
    fn ghost_absent_before_first_interaction_without_loop() {
        assert_eq!(ghost_index(0, 5, false), None);
        assert_eq!(ghost_index(1, 5, false), Some(0));
        assert_eq!(ghost_index(4, 5, false), Some(3));
    }

    #[test]
    fn ghost_absent_for_degenerate_galleries() {
        assert_eq!(ghost_index(0, 1, true), None);
        assert_eq!(ghost_index(0, 0, true), None);
    }

    #[test]
    fn click_halves_map_to_steps() {
        assert_eq!(classify_click(100.0, 1000.0), SlideStep::Prev);
        assert_eq!(classify_click(700.0, 1000.0), SlideStep::Next);
    }

    #[test]
    fn looping_carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(3, true, 0);
        assert_eq!(
            carousel.slide_prev(),
            Some(SlideMove { from: 0, to: 2 })
        );
        assert_eq!(
            carousel.slide_next(),
            Advance::Moved(SlideMove { from: 2, to: 0 })
        );
    }

    #[test]
    fn non_looping_end_hands_off_to_next_project() {
        let mut carousel = Carousel::new(3, false, 2);
        assert_eq!(carousel.slide_next(), Advance::EndReached);
        assert_eq!(carousel.active(), 2);

        let mut carousel = Carousel::new(3, false, 0);
        assert_eq!(carousel.slide_prev(), None);
    }

    #[test]
    fn slide_to_ignores_out_of_range_and_same_index() {
        let mut carousel = Carousel::new(4, true, 1);
        assert_eq!(carousel.slide_to(1), None);
        assert_eq!(carousel.slide_to(9), None);
        assert_eq!(carousel.slide_to(3), Some(SlideMove { from: 1, to: 3 }));
    }

    #[test]
    fn wraparound_moves_report_seam_direction() {
        let mut carousel = Carousel::new(5, true, 4);
        let Advance::Moved(m) = carousel.slide_next() else {
            panic!("looping carousel always moves");
        };
        assert_eq!(carousel.direction_of(m), ArrowDirection::Right);
    }

    #[test]
    fn eager_set_is_entry_slide_plus_ghost() {
        assert_eq!(eager_indices(0, 5, true), vec![0, 4]);
        assert_eq!(eager_indices(0, 5, false), vec![0]);
        assert_eq!(eager_indices(2, 5, false), vec![2, 1]);
        assert_eq!(eager_indices(0, 1, true), vec![0]);
    }

    #[test]
    fn resize_cooldown_suppresses_within_window() {
        let mut cooldown = ResizeCooldown::new();
        assert!(!cooldown.is_suppressed(1000.0));

        cooldown.note_resize(1000.0, 300.0);
        assert!(cooldown.is_suppressed(1299.0));
        assert!(!cooldown.is_suppressed(1300.0));
    }
}
