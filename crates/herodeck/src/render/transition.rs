use std::time::Instant;

use crate::navigation::TransitionDirection;

pub const TRANSITION_DURATION: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    SlideHorizontal,
    Fade,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => TransitionKind::Fade,
            "none" => TransitionKind::None,
            _ => TransitionKind::SlideHorizontal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransitionKind::SlideHorizontal => "Slide",
            TransitionKind::Fade => "Fade",
            TransitionKind::None => "None",
        }
    }

    pub fn cycled(self) -> Self {
        match self {
            TransitionKind::SlideHorizontal => TransitionKind::Fade,
            TransitionKind::Fade => TransitionKind::None,
            TransitionKind::None => TransitionKind::SlideHorizontal,
        }
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Horizontal offsets of the outgoing and incoming slide, as multiples of
/// the slide width, for an eased `progress` in `[0, 1]`.
///
/// Going forward the outgoing slide exits to the left and the new one enters
/// from the right; backward is mirrored.
pub fn slide_offsets(direction: TransitionDirection, progress: f32) -> (f32, f32) {
    let sign = match direction {
        TransitionDirection::Backward => 1.0,
        TransitionDirection::Forward | TransitionDirection::None => -1.0,
    };
    let from = sign * progress;
    (from, from - sign)
}

/// An animation between two slide indices. Purely visual: the controller
/// has already moved to `to` when this starts.
#[derive(Debug, Clone)]
pub struct ActiveTransition {
    pub from: usize,
    pub to: usize,
    pub kind: TransitionKind,
    pub direction: TransitionDirection,
    start: Instant,
}

impl ActiveTransition {
    pub fn new(
        from: usize,
        to: usize,
        kind: TransitionKind,
        direction: TransitionDirection,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            direction,
            start: Instant::now(),
        }
    }

    fn raw_progress(&self) -> f32 {
        (self.start.elapsed().as_secs_f32() / TRANSITION_DURATION).clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> f32 {
        ease_in_out(self.raw_progress())
    }

    pub fn is_complete(&self) -> bool {
        self.kind == TransitionKind::None || self.raw_progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_forward_offsets() {
        assert_eq!(slide_offsets(TransitionDirection::Forward, 0.0), (0.0, 1.0));
        assert_eq!(slide_offsets(TransitionDirection::Forward, 1.0), (-1.0, 0.0));
    }

    #[test]
    fn test_backward_offsets() {
        assert_eq!(slide_offsets(TransitionDirection::Backward, 0.0), (0.0, -1.0));
        assert_eq!(slide_offsets(TransitionDirection::Backward, 1.0), (1.0, 0.0));
    }

    #[test]
    fn test_kind_names_and_cycle() {
        assert_eq!(TransitionKind::from_name("fade"), TransitionKind::Fade);
        assert_eq!(TransitionKind::from_name("none"), TransitionKind::None);
        assert_eq!(
            TransitionKind::from_name("slide"),
            TransitionKind::SlideHorizontal
        );
        let mut kind = TransitionKind::SlideHorizontal;
        for _ in 0..3 {
            kind = kind.cycled();
        }
        assert_eq!(kind, TransitionKind::SlideHorizontal);
    }

    #[test]
    fn test_none_transition_completes_immediately() {
        let t = ActiveTransition::new(0, 1, TransitionKind::None, TransitionDirection::Forward);
        assert!(t.is_complete());
        let t = ActiveTransition::new(
            0,
            1,
            TransitionKind::Fade,
            TransitionDirection::Forward,
        );
        assert!(!t.is_complete());
    }
}
