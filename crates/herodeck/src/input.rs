use eframe::egui::{self, Key};

use crate::navigation::Intent;

/// Horizontal travel (in reference pixels) a drag needs before it counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 120.0;

/// Map a navigation key to an intent. `End` needs the slide count to know
/// where the last slide is.
pub fn intent_for_key(key: Key, slide_count: usize) -> Option<Intent> {
    match key {
        Key::ArrowRight | Key::N | Key::Space | Key::PageDown => Some(Intent::Advance),
        Key::ArrowLeft | Key::P | Key::PageUp => Some(Intent::Retreat),
        Key::Home => Some(Intent::JumpTo(0)),
        Key::End => Some(Intent::JumpTo(slide_count.saturating_sub(1))),
        Key::M => Some(Intent::ToggleMode),
        _ => None,
    }
}

/// Collect every navigation intent pressed this frame, in key order.
pub fn intents_from_input(input: &egui::InputState, slide_count: usize) -> Vec<Intent> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } if !modifiers.ctrl && !modifiers.command && !modifiers.alt => {
                intent_for_key(*key, slide_count)
            }
            _ => None,
        })
        .collect()
}

/// Interpret a finished drag. Dragging the content left brings in the next slide.
pub fn swipe_intent(delta: egui::Vec2, scale: f32) -> Option<Intent> {
    if delta.x.abs() < SWIPE_THRESHOLD * scale || delta.x.abs() <= delta.y.abs() * 1.5 {
        return None;
    }
    if delta.x < 0.0 {
        Some(Intent::Advance)
    } else {
        Some(Intent::Retreat)
    }
}

/// Tracks a primary-button drag across frames.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<egui::Pos2>,
    last: Option<egui::Pos2>,
}

impl SwipeTracker {
    /// Feed this frame's pointer state. Returns an intent once a swipe completes.
    pub fn update(&mut self, pointer: &egui::PointerState, scale: f32) -> Option<Intent> {
        if pointer.primary_pressed() {
            self.origin = pointer.interact_pos();
            self.last = self.origin;
            return None;
        }
        if pointer.primary_down() {
            if let Some(pos) = pointer.interact_pos() {
                self.last = Some(pos);
            }
            return None;
        }
        if pointer.primary_released() {
            let (origin, last) = (self.origin.take(), self.last.take());
            if let (Some(origin), Some(last)) = (origin, last) {
                return swipe_intent(last - origin, scale);
            }
        }
        None
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn test_forward_keys() {
        for key in [Key::ArrowRight, Key::N, Key::Space, Key::PageDown] {
            assert_eq!(intent_for_key(key, 5), Some(Intent::Advance));
        }
    }

    #[test]
    fn test_backward_keys() {
        for key in [Key::ArrowLeft, Key::P, Key::PageUp] {
            assert_eq!(intent_for_key(key, 5), Some(Intent::Retreat));
        }
    }

    #[test]
    fn test_home_end_and_mode() {
        assert_eq!(intent_for_key(Key::Home, 5), Some(Intent::JumpTo(0)));
        assert_eq!(intent_for_key(Key::End, 5), Some(Intent::JumpTo(4)));
        assert_eq!(intent_for_key(Key::End, 1), Some(Intent::JumpTo(0)));
        assert_eq!(intent_for_key(Key::M, 5), Some(Intent::ToggleMode));
    }

    #[test]
    fn test_app_keys_are_not_navigation() {
        for key in [Key::Q, Key::F, Key::D, Key::T, Key::H, Key::Escape] {
            assert_eq!(intent_for_key(key, 5), None);
        }
    }

    #[test]
    fn test_swipe_left_advances() {
        assert_eq!(swipe_intent(vec2(-200.0, 10.0), 1.0), Some(Intent::Advance));
    }

    #[test]
    fn test_swipe_right_retreats() {
        assert_eq!(swipe_intent(vec2(180.0, -20.0), 1.0), Some(Intent::Retreat));
    }

    #[test]
    fn test_short_or_vertical_drags_are_ignored() {
        assert_eq!(swipe_intent(vec2(-60.0, 0.0), 1.0), None);
        assert_eq!(swipe_intent(vec2(-200.0, 180.0), 1.0), None);
        assert_eq!(swipe_intent(vec2(0.0, 400.0), 1.0), None);
    }

    #[test]
    fn test_swipe_threshold_scales() {
        assert_eq!(swipe_intent(vec2(-80.0, 0.0), 0.5), Some(Intent::Advance));
        assert_eq!(swipe_intent(vec2(-80.0, 0.0), 1.0), None);
    }
}
