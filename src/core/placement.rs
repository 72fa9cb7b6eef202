//! Scattered-photograph placement.
//!
//! Each gallery item is rendered at a random position inside a safe
//! zone of the viewport, like a print dropped on a table. Positions are
//! memoized per epoch so re-renders never cause visual jitter: a fresh
//! draw only happens on mount, after a (debounced) resize, or when a
//! slide change explicitly re-rolls one item.

use std::collections::HashMap;

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Offsets of a media item's bounding box from the viewport origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

impl Placement {
    /// Inline style fragment for absolutely positioned media.
    pub fn to_style(self) -> String {
        format!("top: {:.1}px; left: {:.1}px;", self.top, self.left)
    }
}

/// Compute a random placement keeping the media's full bounding box
/// inside the safe zone (an `inset_frac` margin on every side).
///
/// `media_height` is in CSS pixels; the width follows from
/// `aspect_ratio`. When the safe zone is smaller than the media box the
/// available range clamps to zero and the media sits at the safe-zone
/// origin. `rng` yields uniform samples in `[0, 1)`.
pub fn compute_position(
    viewport: Viewport,
    media_height: f64,
    aspect_ratio: f64,
    inset_frac: f64,
    rng: &mut dyn FnMut() -> f64,
) -> Placement {
    let media_width = media_height * aspect_ratio;
    let inset_x = viewport.width * inset_frac;
    let inset_y = viewport.height * inset_frac;

    let range_x = (viewport.width - 2.0 * inset_x - media_width).max(0.0);
    let range_y = (viewport.height - 2.0 * inset_y - media_height).max(0.0);

    Placement {
        top: inset_y + rng() * range_y,
        left: inset_x + rng() * range_x,
    }
}

/// Epoch-scoped placement memo for one gallery.
///
/// Within an epoch, `position_for` is idempotent per item index. An
/// epoch ends on [`PlacementCache::advance_epoch`] (mount, debounced
/// resize); a single item re-rolls via [`PlacementCache::invalidate`]
/// (ghost handover on slide change).
#[derive(Debug, Default)]
pub struct PlacementCache {
    slots: HashMap<usize, Placement>,
}

impl PlacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every memoized position; the next lookups draw fresh ones.
    pub fn advance_epoch(&mut self) {
        self.slots.clear();
    }

    /// Re-roll a single item on its next lookup.
    pub fn invalidate(&mut self, index: usize) {
        self.slots.remove(&index);
    }

    /// The stable position for `index` within the current epoch.
    pub fn position_for(
        &mut self,
        index: usize,
        viewport: Viewport,
        media_height: f64,
        aspect_ratio: f64,
        inset_frac: f64,
        rng: &mut dyn FnMut() -> f64,
    ) -> Placement {
        *self
            .slots
            .entry(index)
            .or_insert_with(|| compute_position(viewport, media_height, aspect_ratio, inset_frac, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic linear-congruential sampler for tests.
    fn seeded_rng(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn bounding_box_stays_inside_safe_zone() {
        let mut rng = seeded_rng(7);
        let viewports = [
            Viewport { width: 1920.0, height: 1080.0 },
            Viewport { width: 1280.0, height: 800.0 },
            Viewport { width: 390.0, height: 844.0 },
        ];
        let inset_frac = 0.12;

        for viewport in viewports {
            for _ in 0..200 {
                let media_height = viewport.height * 0.4;
                let aspect = 1.5;
                let media_width = media_height * aspect;
                let p = compute_position(viewport, media_height, aspect, inset_frac, &mut rng);

                let inset_x = viewport.width * inset_frac;
                let inset_y = viewport.height * inset_frac;
                assert!(p.left >= inset_x);
                assert!(p.top >= inset_y);
                assert!(p.top + media_height <= viewport.height - inset_y + 1e-9);
                if media_width <= viewport.width - 2.0 * inset_x {
                    assert!(p.left + media_width <= viewport.width - inset_x + 1e-9);
                } else {
                    // Too wide for the safe zone (portrait phones):
                    // the horizontal range clamps to the inset.
                    assert_eq!(p.left, inset_x);
                }
            }
        }
    }

    #[test]
    fn oversized_media_clamps_to_safe_zone_origin() {
        let mut rng = seeded_rng(3);
        let viewport = Viewport { width: 400.0, height: 300.0 };
        // Media larger than the whole safe zone on both axes: no
        // sampling range left, so the position pins to the inset.
        let p = compute_position(viewport, 260.0, 3.0, 0.1, &mut rng);
        assert_eq!(p.left, 40.0);
        assert_eq!(p.top, 30.0);
    }

    #[test]
    fn positions_are_stable_within_an_epoch() {
        let mut rng = seeded_rng(11);
        let mut cache = PlacementCache::new();
        let viewport = Viewport { width: 1440.0, height: 900.0 };

        let first = cache.position_for(4, viewport, 360.0, 1.5, 0.12, &mut rng);
        let second = cache.position_for(4, viewport, 360.0, 1.5, 0.12, &mut rng);
        assert_eq!(first, second);
    }

    #[test]
    fn advancing_the_epoch_rerolls() {
        let mut rng = seeded_rng(11);
        let mut cache = PlacementCache::new();
        let viewport = Viewport { width: 1440.0, height: 900.0 };

        let first = cache.position_for(0, viewport, 360.0, 1.5, 0.12, &mut rng);
        cache.advance_epoch();
        let second = cache.position_for(0, viewport, 360.0, 1.5, 0.12, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn invalidate_rerolls_only_that_item() {
        let mut rng = seeded_rng(23);
        let mut cache = PlacementCache::new();
        let viewport = Viewport { width: 1440.0, height: 900.0 };

        let kept = cache.position_for(1, viewport, 360.0, 1.5, 0.12, &mut rng);
        let rolled = cache.position_for(2, viewport, 360.0, 1.5, 0.12, &mut rng);

        cache.invalidate(2);
        assert_eq!(cache.position_for(1, viewport, 360.0, 1.5, 0.12, &mut rng), kept);
        assert_ne!(cache.position_for(2, viewport, 360.0, 1.5, 0.12, &mut rng), rolled);
    }
}
