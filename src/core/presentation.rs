//! Presentation (intro) sequencer.
//!
//! Entering a project through an "introduce this project" link runs a
//! one-shot reveal: the info panel appears centered and hidden, fades
//! in after a paint delay, holds for the configured reveal time, then
//! hands the screen over to the gallery. The transient URL flag that
//! armed the sequence is stripped in place when the sequence completes.
//!
//! The machine is deadline-driven like [`crate::core::menu`]: methods
//! return an [`IntroEffect`] and the owning component schedules the
//! timers, feeding expirations back in. A user click short-circuits
//! straight to the end state.

/// Where the intro sequence currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    /// Centered panel mounted with opacity 0, awaiting the paint
    /// delay so the fade-in transition is not skipped.
    Hidden,
    /// Centered panel visible; gallery still concealed.
    Presenting,
    /// Default layout restored, gallery revealed.
    Done,
}

/// What the owning component should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroEffect {
    None,
    /// Arm the paint deadline (`config::fade::PAINT_DELAY_MS`).
    SchedulePaint,
    /// Arm the reveal deadline (`config::intro::REVEAL_MS`).
    ScheduleReveal,
    /// Sequence finished: strip the URL flag and, when `advance` is
    /// set, navigate to the next project with the intro re-armed.
    Complete { advance: bool },
}

/// One-shot intro state machine.
#[derive(Clone, Copy, Debug)]
pub struct IntroSequencer {
    phase: IntroPhase,
    auto_advance: bool,
}

impl IntroSequencer {
    /// Start the sequence in the hidden-centered state.
    pub fn begin(auto_advance: bool) -> (Self, IntroEffect) {
        (
            Self {
                phase: IntroPhase::Hidden,
                auto_advance,
            },
            IntroEffect::SchedulePaint,
        )
    }

    pub fn phase(self) -> IntroPhase {
        self.phase
    }

    pub fn is_presenting(self) -> bool {
        self.phase != IntroPhase::Done
    }

    /// The paint deadline fired: the hidden state has been painted and
    /// the fade-in may start.
    pub fn paint_elapsed(&mut self) -> IntroEffect {
        if self.phase != IntroPhase::Hidden {
            return IntroEffect::None;
        }
        self.phase = IntroPhase::Presenting;
        IntroEffect::ScheduleReveal
    }

    /// The reveal deadline fired.
    pub fn reveal_elapsed(&mut self) -> IntroEffect {
        self.complete()
    }

    /// User click/tap during the presentation: skip the remaining wait.
    pub fn dismiss(&mut self) -> IntroEffect {
        self.complete()
    }

    fn complete(&mut self) -> IntroEffect {
        if self.phase == IntroPhase::Done {
            return IntroEffect::None;
        }
        self.phase = IntroPhase::Done;
        IntroEffect::Complete {
            advance: self.auto_advance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence_in_order() {
        let (mut intro, effect) = IntroSequencer::begin(false);
        assert_eq!(effect, IntroEffect::SchedulePaint);
        assert_eq!(intro.phase(), IntroPhase::Hidden);

        assert_eq!(intro.paint_elapsed(), IntroEffect::ScheduleReveal);
        assert_eq!(intro.phase(), IntroPhase::Presenting);

        assert_eq!(
            intro.reveal_elapsed(),
            IntroEffect::Complete { advance: false }
        );
        assert_eq!(intro.phase(), IntroPhase::Done);

        // Late deadlines are inert once done.
        assert_eq!(intro.reveal_elapsed(), IntroEffect::None);
        assert_eq!(intro.paint_elapsed(), IntroEffect::None);
    }

    #[test]
    fn dismiss_short_circuits_to_done() {
        let (mut intro, _) = IntroSequencer::begin(false);
        intro.paint_elapsed();

        assert_eq!(intro.dismiss(), IntroEffect::Complete { advance: false });
        assert_eq!(intro.phase(), IntroPhase::Done);
        assert_eq!(intro.dismiss(), IntroEffect::None);
    }

    #[test]
    fn dismiss_before_paint_still_completes() {
        let (mut intro, _) = IntroSequencer::begin(false);
        assert_eq!(intro.dismiss(), IntroEffect::Complete { advance: false });
        // The stale paint deadline finds nothing to do.
        assert_eq!(intro.paint_elapsed(), IntroEffect::None);
    }

    #[test]
    fn auto_advance_is_carried_on_completion() {
        let (mut intro, _) = IntroSequencer::begin(true);
        intro.paint_elapsed();
        assert_eq!(
            intro.reveal_elapsed(),
            IntroEffect::Complete { advance: true }
        );
    }
}
