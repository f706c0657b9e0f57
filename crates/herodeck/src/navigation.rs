use tracing::debug;

use crate::registry::{SlideDescriptor, SlideRegistry};

/// Which way the last index change went. Only used to pick an animation offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionDirection {
    Forward,
    Backward,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Simple,
    Advanced,
}

impl DisplayMode {
    pub fn is_simple(self) -> bool {
        self == DisplayMode::Simple
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Simple => DisplayMode::Advanced,
            DisplayMode::Advanced => DisplayMode::Simple,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simple" => Some(DisplayMode::Simple),
            "advanced" => Some(DisplayMode::Advanced),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Simple => "Simple",
            DisplayMode::Advanced => "Advanced",
        }
    }
}

/// A navigation request from one of the input sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    JumpTo(usize),
    ToggleMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub current_index: usize,
    pub direction: TransitionDirection,
    pub mode: DisplayMode,
}

/// The slide to draw this frame, together with the mode to draw it in.
pub struct ActiveSlide<'a, R> {
    pub index: usize,
    pub descriptor: &'a SlideDescriptor<R>,
    pub mode: DisplayMode,
}

/// Owns the traversal state of a presentation.
///
/// Invariant: `state.current_index < registry.len()`. The registry is
/// non-empty by construction, so index 0 is always valid.
pub struct NavigationController<R> {
    registry: SlideRegistry<R>,
    state: PresentationState,
}

impl<R> NavigationController<R> {
    pub fn new(registry: SlideRegistry<R>) -> Self {
        Self {
            registry,
            state: PresentationState::default(),
        }
    }

    pub fn registry(&self) -> &SlideRegistry<R> {
        &self.registry
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn slide_count(&self) -> usize {
        self.registry.len()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn direction(&self) -> TransitionDirection {
        self.state.direction
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.state.mode
    }

    /// Move one slide forward. Clamped at the last slide.
    ///
    /// Leaving a slide always drops back to simple mode.
    pub fn advance(&mut self) {
        if self.state.current_index + 1 >= self.slide_count() {
            return;
        }
        self.state.direction = TransitionDirection::Forward;
        self.state.mode = DisplayMode::Simple;
        self.state.current_index += 1;
    }

    /// Move one slide back. Clamped at the first slide.
    pub fn retreat(&mut self) {
        if self.state.current_index == 0 {
            return;
        }
        self.state.direction = TransitionDirection::Backward;
        self.state.mode = DisplayMode::Simple;
        self.state.current_index -= 1;
    }

    /// Jump straight to `target`. Keeps the current display mode.
    ///
    /// Targets past the end are ignored.
    pub fn jump_to(&mut self, target: usize) {
        if target >= self.slide_count() {
            debug!(
                requested = target,
                slide_count = self.slide_count(),
                "ignoring out-of-range jump"
            );
            return;
        }
        self.state.direction = if target > self.state.current_index {
            TransitionDirection::Forward
        } else {
            TransitionDirection::Backward
        };
        self.state.current_index = target;
    }

    pub fn toggle_mode(&mut self) {
        self.state.mode = self.state.mode.toggled();
    }

    /// Dispatch an intent. Returns whether the index or display mode changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let before = self.state;
        match intent {
            Intent::Advance => self.advance(),
            Intent::Retreat => self.retreat(),
            Intent::JumpTo(target) => self.jump_to(target),
            Intent::ToggleMode => self.toggle_mode(),
        }
        let changed = before.current_index != self.state.current_index
            || before.mode != self.state.mode;
        if changed {
            debug!(
                ?intent,
                index = self.state.current_index,
                direction = ?self.state.direction,
                mode = ?self.state.mode,
                "navigation"
            );
        }
        changed
    }

    pub fn active_slide(&self) -> ActiveSlide<'_, R> {
        let index = self.state.current_index;
        ActiveSlide {
            index,
            descriptor: &self.registry[index],
            mode: self.state.mode,
        }
    }

    /// `(index + 1) / slide_count`, always in `(0, 1]`.
    pub fn progress_fraction(&self) -> f32 {
        (self.state.current_index + 1) as f32 / self.slide_count() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(count: usize) -> NavigationController<()> {
        let slides = (0..count)
            .map(|i| SlideDescriptor::new(format!("s{i}"), format!("Slide {i}"), ()))
            .collect();
        NavigationController::new(SlideRegistry::new(slides).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let nav = controller(3);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.direction(), TransitionDirection::None);
        assert_eq!(nav.display_mode(), DisplayMode::Simple);
        assert_eq!(nav.slide_count(), 3);
    }

    #[test]
    fn test_advance_walks_to_end_then_clamps() {
        let mut nav = controller(4);
        for expected in 1..4 {
            nav.advance();
            assert_eq!(nav.current_index(), expected);
            assert_eq!(nav.direction(), TransitionDirection::Forward);
        }
        for _ in 0..3 {
            nav.advance();
            assert_eq!(nav.current_index(), 3);
        }
    }

    #[test]
    fn test_retreat_walks_to_start_then_clamps() {
        let mut nav = controller(4);
        nav.jump_to(3);
        for expected in (0..3).rev() {
            nav.retreat();
            assert_eq!(nav.current_index(), expected);
            assert_eq!(nav.direction(), TransitionDirection::Backward);
        }
        nav.retreat();
        nav.retreat();
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_retreat_at_start_keeps_direction_and_mode() {
        let mut nav = controller(2);
        nav.toggle_mode();
        nav.retreat();
        assert_eq!(nav.direction(), TransitionDirection::None);
        assert_eq!(nav.display_mode(), DisplayMode::Advanced);
    }

    #[test]
    fn test_advance_and_retreat_reset_mode() {
        let mut nav = controller(3);
        nav.toggle_mode();
        nav.advance();
        assert_eq!(nav.display_mode(), DisplayMode::Simple);

        nav.toggle_mode();
        nav.retreat();
        assert_eq!(nav.display_mode(), DisplayMode::Simple);
    }

    #[test]
    fn test_jump_keeps_mode() {
        let mut nav = controller(6);
        nav.toggle_mode();
        for target in [5, 2, 0, 4] {
            nav.jump_to(target);
            assert_eq!(nav.current_index(), target);
            assert_eq!(nav.display_mode(), DisplayMode::Advanced);
        }
    }

    #[test]
    fn test_jump_direction() {
        let mut nav = controller(5);
        nav.jump_to(3);
        assert_eq!(nav.direction(), TransitionDirection::Forward);
        nav.jump_to(1);
        assert_eq!(nav.direction(), TransitionDirection::Backward);
        nav.jump_to(1);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.direction(), TransitionDirection::Backward);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut nav = controller(3);
        nav.jump_to(1);
        nav.jump_to(3);
        nav.jump_to(usize::MAX);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.direction(), TransitionDirection::Forward);
        assert!(!nav.apply(Intent::JumpTo(10)));
    }

    #[test]
    fn test_toggle_mode_is_an_involution() {
        let mut nav = controller(3);
        nav.jump_to(2);
        let before = nav.state();
        nav.toggle_mode();
        assert_eq!(nav.display_mode(), DisplayMode::Advanced);
        nav.toggle_mode();
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn test_progress_fraction_bounds() {
        let mut nav = controller(4);
        assert_eq!(nav.progress_fraction(), 0.25);
        nav.jump_to(3);
        assert_eq!(nav.progress_fraction(), 1.0);

        let single = controller(1);
        assert_eq!(single.progress_fraction(), 1.0);
    }

    #[test]
    fn test_single_slide_navigation_is_inert() {
        let mut nav = controller(1);
        assert!(!nav.apply(Intent::Advance));
        assert!(!nav.apply(Intent::Retreat));
        assert_eq!(nav.current_index(), 0);
        assert!(nav.apply(Intent::ToggleMode));
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut nav = controller(3);
        assert!(nav.apply(Intent::Advance));
        assert!(!nav.apply(Intent::JumpTo(1)));
        assert!(nav.apply(Intent::ToggleMode));
        assert!(nav.apply(Intent::Retreat));
        assert!(!nav.apply(Intent::Retreat));
    }

    #[test]
    fn test_active_slide() {
        let mut nav = controller(3);
        nav.advance();
        nav.toggle_mode();
        let active = nav.active_slide();
        assert_eq!(active.index, 1);
        assert_eq!(active.descriptor.id, "s1");
        assert_eq!(active.mode, DisplayMode::Advanced);
    }

    #[test]
    fn test_walkthrough_with_five_slides() {
        let mut nav = controller(5);

        nav.toggle_mode();
        assert_eq!(nav.display_mode(), DisplayMode::Advanced);

        nav.advance();
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.direction(), TransitionDirection::Forward);
        assert_eq!(nav.display_mode(), DisplayMode::Simple);

        nav.jump_to(4);
        assert_eq!(nav.current_index(), 4);
        assert_eq!(nav.direction(), TransitionDirection::Forward);
        assert_eq!(nav.display_mode(), DisplayMode::Simple);

        nav.advance();
        assert_eq!(nav.current_index(), 4);

        nav.retreat();
        assert_eq!(nav.current_index(), 3);
        assert_eq!(nav.direction(), TransitionDirection::Backward);

        assert!((nav.progress_fraction() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_mode_names() {
        assert_eq!(DisplayMode::from_name("simple"), Some(DisplayMode::Simple));
        assert_eq!(DisplayMode::from_name("advanced"), Some(DisplayMode::Advanced));
        assert_eq!(DisplayMode::from_name("expert"), None);
        assert!(DisplayMode::Simple.is_simple());
        assert_eq!(DisplayMode::Advanced.label(), "Advanced");
    }
}
