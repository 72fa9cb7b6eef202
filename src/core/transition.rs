//! Page transition phase tracking.
//!
//! One controller instance lives for the whole page and guards against
//! overlapping transitions: the first `begin` wins and every later
//! attempt is ignored until the cycle resolves back to idle. The
//! controller only tracks phase; the fade timers and the actual
//! navigation live in `components::transitions`.

use std::sync::atomic::{AtomicU8, Ordering};

/// Where an in-flight page transition currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TransitionPhase {
    #[default]
    Idle = 0,
    FadingOut = 1,
    Navigating = 2,
    FadingIn = 3,
}

impl TransitionPhase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::FadingOut,
            2 => Self::Navigating,
            3 => Self::FadingIn,
            _ => Self::Idle,
        }
    }
}

/// Re-entrancy guard for page transitions.
#[derive(Debug, Default)]
pub struct TransitionController {
    phase: AtomicU8,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TransitionPhase {
        TransitionPhase::from_raw(self.phase.load(Ordering::Relaxed))
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == TransitionPhase::Idle
    }

    /// Try to start a transition. Returns `false` (and changes
    /// nothing) while another transition is in flight.
    pub fn begin(&self) -> bool {
        self.phase
            .compare_exchange(
                TransitionPhase::Idle as u8,
                TransitionPhase::FadingOut as u8,
                Ordering::Relaxed,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    /// The fade-out finished; the navigation is being performed.
    pub fn mark_navigating(&self) {
        self.phase
            .store(TransitionPhase::Navigating as u8, Ordering::Relaxed);
    }

    /// The destination mounted and is fading in.
    pub fn mark_fading_in(&self) {
        self.phase
            .store(TransitionPhase::FadingIn as u8, Ordering::Relaxed);
    }

    /// Resolve back to idle. Always safe to call, including after a
    /// failed navigation, so the UI can never stay stuck mid-fade.
    pub fn finish(&self) {
        self.phase
            .store(TransitionPhase::Idle as u8, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_transition_starts() {
        let controller = TransitionController::new();
        assert!(controller.begin());
        assert!(!controller.begin());
        assert_eq!(controller.phase(), TransitionPhase::FadingOut);
    }

    #[test]
    fn one_navigation_per_completed_cycle() {
        let controller = TransitionController::new();
        let mut navigations = 0;

        // Rapid double click: both call sites try to begin.
        for _ in 0..2 {
            if controller.begin() {
                controller.mark_navigating();
                navigations += 1;
            }
        }
        assert_eq!(navigations, 1);

        controller.mark_fading_in();
        controller.finish();
        assert!(controller.begin());
    }

    #[test]
    fn finish_recovers_from_any_phase() {
        let controller = TransitionController::new();
        controller.begin();
        // Navigation failed mid-way; the phase must still resolve.
        controller.finish();
        assert!(controller.is_idle());
    }
}
