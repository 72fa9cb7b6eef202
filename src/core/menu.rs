//! Expandable menu state machine.
//!
//! The menu belt expands over the page on hover (desktop) or tap/swipe
//! (mobile) and hosts three sections: the project list, the about
//! panel, and the current project's info. The machine here owns every
//! transition decision; the component layer owns the actual timers and
//! listeners and feeds elapsed deadlines back in. Each mutating method
//! returns a [`MenuEffect`] telling the component what to (re)schedule.
//!
//! Timer races are resolved by guards, not by callback ordering: a
//! pending close is recorded in the machine, and a close deadline that
//! fires after the pointer re-entered finds the flag cleared and does
//! nothing. The force-close flag set by a programmatic collapse clears
//! on the next pointer-leave (the behavior of the latest iteration of
//! this design; earlier ones cleared it on re-enter).

use crate::config::swipe;

/// Menu belt content sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuSection {
    #[default]
    Projects,
    About,
    ProjectInfo,
}

/// What the owning component should do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    None,
    /// Arm the debounced-close deadline (`config::menu::CLOSE_DELAY_MS`).
    ScheduleClose,
    /// Drop any pending close deadline.
    CancelClose,
    /// Arm the section-reset deadline (`config::menu::SECTION_RESET_MS`).
    ScheduleSectionReset,
}

/// Expansion state plus active section.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuMachine {
    expanded: bool,
    section: MenuSection,
    force_close: bool,
    close_pending: bool,
}

impl MenuMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn section(self) -> MenuSection {
        self.section
    }

    pub fn is_force_closed(self) -> bool {
        self.force_close
    }

    /// Desktop: pointer entered the belt region.
    pub fn pointer_enter(&mut self) -> MenuEffect {
        self.close_pending = false;
        if !self.force_close {
            self.expanded = true;
        }
        MenuEffect::CancelClose
    }

    /// Desktop: pointer left the belt region. Collapse is debounced so
    /// crossing internal element boundaries does not flicker.
    pub fn pointer_leave(&mut self) -> MenuEffect {
        // A real leave ends the forced-close episode.
        self.force_close = false;
        if self.expanded {
            self.close_pending = true;
            MenuEffect::ScheduleClose
        } else {
            MenuEffect::None
        }
    }

    /// The debounced-close deadline fired.
    pub fn close_elapsed(&mut self) -> MenuEffect {
        if !self.close_pending {
            return MenuEffect::None;
        }
        self.close_pending = false;
        self.collapse()
    }

    /// The section-reset deadline fired (after the collapse animation).
    pub fn section_reset_elapsed(&mut self) {
        if !self.expanded {
            self.section = MenuSection::Projects;
        }
    }

    /// Mobile: tap on the collapsed belt expands it. Taps inside an
    /// expanded belt are not close triggers (outside-tap handles that).
    /// Returns whether the tap expanded the menu.
    pub fn tap(&mut self) -> bool {
        if self.expanded {
            return false;
        }
        self.expanded = true;
        self.close_pending = false;
        true
    }

    /// Mobile: a tap landed outside the expanded belt.
    pub fn outside_tap(&mut self) -> MenuEffect {
        self.collapse()
    }

    /// Escape key.
    pub fn escape(&mut self) -> MenuEffect {
        self.collapse()
    }

    /// Programmatic collapse from a sibling (page transition starting,
    /// grid toggle). Sets the force-close flag so a pointer still
    /// resting on the belt cannot immediately re-expand it.
    pub fn force_collapse(&mut self) -> MenuEffect {
        self.force_close = true;
        self.close_pending = false;
        self.collapse()
    }

    /// Switch sections without touching expansion. A request for
    /// `ProjectInfo` without a resolvable current project falls back
    /// to `Projects`.
    pub fn set_section(&mut self, section: MenuSection, has_project: bool) {
        self.section = resolve_section(section, has_project);
    }

    /// External "open to section" request (event bus).
    pub fn open_section(&mut self, section: MenuSection, has_project: bool) -> MenuEffect {
        self.set_section(section, has_project);
        self.expanded = true;
        self.close_pending = false;
        MenuEffect::CancelClose
    }

    /// The route changed; re-validate the section invariant.
    pub fn sync_project(&mut self, has_project: bool) {
        if !has_project && self.section == MenuSection::ProjectInfo {
            self.section = MenuSection::Projects;
        }
    }

    /// A classified swipe gesture.
    pub fn apply_swipe(&mut self, verdict: SwipeVerdict) -> MenuEffect {
        match verdict {
            SwipeVerdict::Open => {
                if !self.expanded {
                    self.expanded = true;
                    self.close_pending = false;
                }
                MenuEffect::None
            }
            SwipeVerdict::Close => self.collapse(),
            SwipeVerdict::Pass => MenuEffect::None,
        }
    }

    fn collapse(&mut self) -> MenuEffect {
        if self.expanded {
            self.expanded = false;
            MenuEffect::ScheduleSectionReset
        } else {
            MenuEffect::None
        }
    }
}

fn resolve_section(requested: MenuSection, has_project: bool) -> MenuSection {
    match requested {
        MenuSection::ProjectInfo if !has_project => MenuSection::Projects,
        other => other,
    }
}

// =============================================================================
// Swipe classification
// =============================================================================

/// Outcome of classifying a completed touch gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeVerdict {
    /// Swipe up while collapsed: open the menu.
    Open,
    /// Swipe down while expanded: close the menu.
    Close,
    /// Not significant, wrong direction for the current state, or a
    /// scroll gesture inside the open menu.
    Pass,
}

#[derive(Clone, Copy, Debug)]
struct TouchOrigin {
    y: f64,
    at_ms: f64,
    in_menu_content: bool,
}

/// Tracks one touch sequence from start to end.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    origin: Option<TouchOrigin>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record touch-start. `in_menu_content` marks gestures beginning
    /// inside the open menu's scrollable area, which must keep native
    /// scrolling.
    pub fn begin(&mut self, y: f64, at_ms: f64, in_menu_content: bool) {
        self.origin = Some(TouchOrigin {
            y,
            at_ms,
            in_menu_content,
        });
    }

    /// Whether a touch-move at `y` should prevent the default scroll.
    /// Scrolling stays native inside the open menu's content area;
    /// elsewhere a vertical drag belongs to the open/close gesture.
    pub fn should_prevent_scroll(&self, y: f64, menu_expanded: bool) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };
        if origin.in_menu_content && menu_expanded {
            return false;
        }
        (origin.y - y).abs() > swipe::SCROLL_SUPPRESS_PX
    }

    /// Classify the gesture at touch-end and reset the tracker.
    pub fn end(&mut self, y: f64, at_ms: f64, menu_expanded: bool) -> SwipeVerdict {
        let Some(origin) = self.origin.take() else {
            return SwipeVerdict::Pass;
        };

        let delta = origin.y - y; // positive = swipe up
        if !is_significant(delta.abs(), at_ms - origin.at_ms) {
            return SwipeVerdict::Pass;
        }
        if origin.in_menu_content && menu_expanded {
            return SwipeVerdict::Pass;
        }

        if delta > 0.0 && !menu_expanded {
            SwipeVerdict::Open
        } else if delta < 0.0 && menu_expanded {
            SwipeVerdict::Close
        } else {
            SwipeVerdict::Pass
        }
    }
}

/// A swipe is significant on displacement or on velocity, so both slow
/// deliberate drags and quick flicks register.
pub fn is_significant(distance_px: f64, duration_ms: f64) -> bool {
    if distance_px >= swipe::MIN_DISTANCE_PX {
        return true;
    }
    duration_ms > 0.0 && distance_px / duration_ms > swipe::MIN_VELOCITY_PX_PER_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reenter_within_debounce_cancels_close() {
        let mut menu = MenuMachine::new();
        assert_eq!(menu.pointer_enter(), MenuEffect::CancelClose);
        assert!(menu.is_expanded());

        assert_eq!(menu.pointer_leave(), MenuEffect::ScheduleClose);
        // Pointer comes back before the deadline.
        menu.pointer_enter();
        // The stale deadline fires anyway and must find nothing to do.
        assert_eq!(menu.close_elapsed(), MenuEffect::None);
        assert!(menu.is_expanded());
    }

    #[test]
    fn leave_without_reentry_collapses_exactly_once() {
        let mut menu = MenuMachine::new();
        menu.pointer_enter();
        menu.pointer_leave();

        assert_eq!(menu.close_elapsed(), MenuEffect::ScheduleSectionReset);
        assert!(!menu.is_expanded());
        // A duplicate deadline is inert.
        assert_eq!(menu.close_elapsed(), MenuEffect::None);
    }

    #[test]
    fn collapse_resets_section_after_delay() {
        let mut menu = MenuMachine::new();
        menu.pointer_enter();
        menu.set_section(MenuSection::About, false);

        menu.pointer_leave();
        menu.close_elapsed();
        // Before the reset deadline the section is still About (the
        // collapse animation is covering it).
        assert_eq!(menu.section(), MenuSection::About);
        menu.section_reset_elapsed();
        assert_eq!(menu.section(), MenuSection::Projects);
    }

    #[test]
    fn reset_deadline_is_inert_if_reopened() {
        let mut menu = MenuMachine::new();
        menu.pointer_enter();
        menu.set_section(MenuSection::About, false);
        menu.pointer_leave();
        menu.close_elapsed();

        menu.pointer_enter();
        menu.section_reset_elapsed();
        assert_eq!(menu.section(), MenuSection::About);
    }

    #[test]
    fn project_info_requires_a_resolvable_project() {
        let mut menu = MenuMachine::new();
        menu.open_section(MenuSection::ProjectInfo, false);
        assert_eq!(menu.section(), MenuSection::Projects);

        menu.open_section(MenuSection::ProjectInfo, true);
        assert_eq!(menu.section(), MenuSection::ProjectInfo);

        // Navigating away from the project drops the section.
        menu.sync_project(false);
        assert_eq!(menu.section(), MenuSection::Projects);
    }

    #[test]
    fn section_switch_never_changes_expansion() {
        let mut menu = MenuMachine::new();
        menu.set_section(MenuSection::About, false);
        assert!(!menu.is_expanded());

        menu.pointer_enter();
        menu.set_section(MenuSection::Projects, false);
        assert!(menu.is_expanded());
    }

    #[test]
    fn force_collapse_suppresses_reexpansion_until_leave() {
        let mut menu = MenuMachine::new();
        menu.pointer_enter();
        assert_eq!(menu.force_collapse(), MenuEffect::ScheduleSectionReset);
        assert!(!menu.is_expanded());

        // The pointer is still resting on the belt; hover must not
        // snap it back open.
        menu.pointer_enter();
        assert!(!menu.is_expanded());

        // Leaving clears the flag; the next enter expands normally.
        menu.pointer_leave();
        menu.pointer_enter();
        assert!(menu.is_expanded());
    }

    #[test]
    fn tap_expands_only_when_collapsed() {
        let mut menu = MenuMachine::new();
        assert!(menu.tap());
        assert!(menu.is_expanded());
        assert!(!menu.tap());
        assert!(menu.is_expanded());
    }

    #[test]
    fn outside_tap_collapses() {
        let mut menu = MenuMachine::new();
        menu.tap();
        assert_eq!(menu.outside_tap(), MenuEffect::ScheduleSectionReset);
        assert!(!menu.is_expanded());
    }

    #[test]
    fn swipe_significance_boundaries() {
        // 49px over 200ms: 0.245 px/ms — below both thresholds.
        assert!(!is_significant(49.0, 200.0));
        // 50px over 200ms: displacement threshold met exactly.
        assert!(is_significant(50.0, 200.0));
        // 10px over 5ms: 2 px/ms — velocity threshold carries it.
        assert!(is_significant(10.0, 5.0));
        // Zero-duration gestures cannot qualify on velocity.
        assert!(!is_significant(10.0, 0.0));
    }

    #[test]
    fn swipe_up_opens_and_swipe_down_closes() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(600.0, 0.0, false);
        assert_eq!(tracker.end(520.0, 150.0, false), SwipeVerdict::Open);

        tracker.begin(400.0, 0.0, false);
        assert_eq!(tracker.end(480.0, 150.0, true), SwipeVerdict::Close);
    }

    #[test]
    fn swipe_inside_open_menu_content_is_a_scroll() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(400.0, 0.0, true);
        assert_eq!(tracker.end(480.0, 150.0, true), SwipeVerdict::Pass);

        // Touch-move inside the open menu keeps native scrolling.
        tracker.begin(400.0, 0.0, true);
        assert!(!tracker.should_prevent_scroll(300.0, true));
        // Outside it, a vertical drag suppresses the page scroll.
        tracker.begin(400.0, 0.0, false);
        assert!(tracker.should_prevent_scroll(380.0, true));
        assert!(!tracker.should_prevent_scroll(395.0, true));
    }

    #[test]
    fn wrong_direction_swipes_pass() {
        let mut tracker = SwipeTracker::new();
        // Swipe down while collapsed.
        tracker.begin(300.0, 0.0, false);
        assert_eq!(tracker.end(400.0, 100.0, false), SwipeVerdict::Pass);
        // Swipe up while expanded.
        tracker.begin(500.0, 0.0, false);
        assert_eq!(tracker.end(400.0, 100.0, true), SwipeVerdict::Pass);
    }

    #[test]
    fn machine_applies_swipe_verdicts() {
        let mut menu = MenuMachine::new();
        menu.apply_swipe(SwipeVerdict::Open);
        assert!(menu.is_expanded());
        assert_eq!(
            menu.apply_swipe(SwipeVerdict::Close),
            MenuEffect::ScheduleSectionReset
        );
        assert!(!menu.is_expanded());
        assert_eq!(menu.apply_swipe(SwipeVerdict::Pass), MenuEffect::None);
    }
}
