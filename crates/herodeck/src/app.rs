use eframe::egui;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::deck;
use crate::input::{self, SwipeTracker};
use crate::navigation::{DisplayMode, Intent, NavigationController};
use crate::registry::SlideRegistry;
use crate::render::chrome::{self, ChromeInfo, Toast};
use crate::render::transition::{ActiveTransition, TransitionKind, slide_offsets};
use crate::render::{self, RenderUnit};
use crate::theme::Theme;

const DOUBLE_TAP_WINDOW: f32 = 1.0;

pub struct LaunchOptions {
    pub windowed: bool,
    /// 1-indexed, as typed on the command line.
    pub start_slide: Option<usize>,
    /// Slide id to open on; takes the place of `start_slide`.
    pub topic: Option<String>,
    pub advanced: bool,
}

struct PresentationApp {
    nav: NavigationController<RenderUnit>,
    theme: Theme,
    transition_kind: TransitionKind,
    transition: Option<ActiveTransition>,
    swipe: SwipeTracker,
    /// Scale of the last drawn frame, used to size the swipe threshold
    last_scale: f32,
    show_help: bool,
    toast: Option<Toast>,
    last_ctrl_c: Option<Instant>,
    last_esc: Option<Instant>,
}

/// Build a controller and replay the requested start position on top of the
/// fresh state, so startup goes through the same intents as the keyboard.
///
/// `start_slide` is 1-indexed and clamped to the deck.
pub fn prepare_controller<R>(
    registry: SlideRegistry<R>,
    start_slide: Option<usize>,
    mode: DisplayMode,
) -> NavigationController<R> {
    let mut nav = NavigationController::new(registry);
    if let Some(slide) = start_slide {
        let last = nav.slide_count() - 1;
        nav.apply(Intent::JumpTo(slide.saturating_sub(1).min(last)));
    }
    if mode != nav.display_mode() {
        nav.apply(Intent::ToggleMode);
    }
    nav
}

/// Turn a topic id into a 1-indexed start slide.
pub fn resolve_topic<R>(registry: &SlideRegistry<R>, topic: &str) -> anyhow::Result<usize> {
    registry
        .position_of(topic)
        .map(|i| i + 1)
        .ok_or_else(|| {
            anyhow::anyhow!("Unknown topic: {topic}. Run `herodeck list` to see slide ids.")
        })
}

impl PresentationApp {
    fn new(
        nav: NavigationController<RenderUnit>,
        theme: Theme,
        transition_kind: TransitionKind,
    ) -> Self {
        Self {
            nav,
            theme,
            transition_kind,
            transition: None,
            swipe: SwipeTracker::default(),
            last_scale: 1.0,
            show_help: false,
            toast: None,
            last_ctrl_c: None,
            last_esc: None,
        }
    }

    /// Hand an intent to the controller and start an animation if the slide changed.
    /// A transition already running is superseded.
    fn apply(&mut self, intent: Intent) {
        let before = self.nav.state();
        if !self.nav.apply(intent) {
            return;
        }
        let from = before.current_index;
        let to = self.nav.current_index();
        if from != to {
            self.transition = Some(ActiveTransition::new(
                from,
                to,
                self.transition_kind,
                self.nav.direction(),
            ));
        } else if before.mode != self.nav.display_mode() {
            self.toast = Some(Toast::new(format!(
                "{} mode",
                self.nav.display_mode().label()
            )));
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn cycle_transition(&mut self) {
        self.transition_kind = self.transition_kind.cycled();
        self.toast = Some(Toast::new(format!(
            "Transition: {}",
            self.transition_kind.label()
        )));
    }

    /// Returns true when a second tap arrived inside the double-tap window.
    fn double_tap(last: &mut Option<Instant>) -> bool {
        if last.is_some_and(|t| t.elapsed().as_secs_f32() < DOUBLE_TAP_WINDOW) {
            return true;
        }
        *last = Some(Instant::now());
        false
    }

    fn draw_slide(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        rect: egui::Rect,
        opacity: f32,
        scale: f32,
    ) {
        if let Some(slide) = self.nav.registry().get(index) {
            let simple = self.nav.display_mode().is_simple();
            render::render_slide(
                ui,
                slide.render,
                &self.theme,
                rect,
                opacity,
                scale,
                index,
                simple,
            );
        }
    }

    fn draw_slides(&self, ui: &mut egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let Some(t) = &self.transition else {
            let active = self.nav.active_slide();
            render::render_slide(
                ui,
                active.descriptor.render,
                &self.theme,
                rect,
                1.0,
                scale,
                active.index,
                active.mode.is_simple(),
            );
            return;
        };

        let progress = t.progress();
        match t.kind {
            TransitionKind::Fade => {
                self.draw_slide(ui, t.from, rect, 1.0 - progress, scale);
                self.draw_slide(ui, t.to, rect, progress, scale);
            }
            TransitionKind::SlideHorizontal => {
                let w = rect.width();
                let (from_offset, to_offset) = slide_offsets(t.direction, progress);
                let from_rect = rect.translate(egui::vec2(from_offset * w, 0.0));
                let to_rect = rect.translate(egui::vec2(to_offset * w, 0.0));
                self.draw_slide(ui, t.from, from_rect, 1.0, scale);
                self.draw_slide(ui, t.to, to_rect, 1.0, scale);
            }
            TransitionKind::None => {
                self.draw_slide(ui, t.to, rect, 1.0, scale);
            }
        }
        ctx.request_repaint();
    }
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut intents: Vec<Intent> = Vec::new();

        // A focused text field inside a slide owns the keyboard.
        let typing = ctx.wants_keyboard_input();
        let slide_count = self.nav.slide_count();

        ctx.input(|i| {
            if typing {
                return;
            }

            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::C) {
                if Self::double_tap(&mut self.last_ctrl_c) {
                    viewport_cmds.push(egui::ViewportCommand::Close);
                } else {
                    self.toast = Some(Toast::new("Press Ctrl+C again to quit"));
                }
                return;
            }

            // ESC closes the help overlay first, then double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if self.show_help {
                    self.show_help = false;
                    self.last_esc = None;
                    return;
                }
                if Self::double_tap(&mut self.last_esc) {
                    viewport_cmds.push(egui::ViewportCommand::Close);
                } else {
                    self.toast = Some(Toast::new("Press Esc again to exit"));
                }
                return;
            }

            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }

            if i.key_pressed(egui::Key::T) {
                self.cycle_transition();
                return;
            }

            if i.key_pressed(egui::Key::H) {
                self.show_help = !self.show_help;
                return;
            }

            intents.extend(input::intents_from_input(i, slide_count));
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        let scale = self.last_scale;
        if ctx.dragged_id().is_some() {
            self.swipe.cancel();
        } else if let Some(intent) = ctx.input(|i| self.swipe.update(&i.pointer, scale)) {
            intents.push(intent);
        }

        for intent in intents {
            self.apply(intent);
        }

        if self.transition.as_ref().is_some_and(|t| t.is_complete()) {
            if let Some(t) = self.transition.take() {
                debug!(from = t.from, to = t.to, "transition finished");
            }
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;
        let mut chrome_intents: Vec<Intent> = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = render::compute_scale(rect);
                self.last_scale = scale;

                self.draw_slides(ui, ctx, rect, scale);

                let info = ChromeInfo {
                    index: self.nav.current_index(),
                    count: self.nav.slide_count(),
                    progress: self.nav.progress_fraction(),
                    mode: self.nav.display_mode(),
                    title: deck::COURSE_TITLE,
                };
                chrome_intents = chrome::draw(ui, &self.theme, rect, scale, &info);

                if let Some(ref toast) = self.toast {
                    toast.draw(ui, &self.theme, rect, scale);
                    ctx.request_repaint();
                }

                if self.show_help {
                    chrome::draw_help(ui, &self.theme, rect, scale);
                }
            });

        for intent in chrome_intents {
            self.apply(intent);
        }
    }
}

/// A small window icon: a cyan ring on a dark tile.
fn app_icon() -> egui::IconData {
    const SIZE: u32 = 64;
    let center = SIZE as f32 / 2.0;
    let image = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let d = (dx * dx + dy * dy).sqrt();
        if (d - 20.0).abs() < 3.5 || d < 5.0 {
            image::Rgba([0x61, 0xDA, 0xFB, 0xFF])
        } else {
            image::Rgba([0x1B, 0x1F, 0x27, 0xFF])
        }
    });
    egui::IconData {
        rgba: image.into_raw(),
        width: SIZE,
        height: SIZE,
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let registry = deck::registry()?;
    let config = Config::load_or_default();

    // CLI flags override config
    let start_slide = match options.topic.as_deref() {
        Some(topic) => Some(resolve_topic(&registry, topic)?),
        None => options.start_slide.or(config.start_slide()),
    };
    let mode = if options.advanced {
        DisplayMode::Advanced
    } else {
        config
            .display_mode()
            .and_then(DisplayMode::from_name)
            .unwrap_or_default()
    };
    let nav = prepare_controller(registry, start_slide, mode);

    let theme = Theme::from_name(config.theme().unwrap_or("dark"));
    let transition_kind = TransitionKind::from_name(config.transition().unwrap_or("slide"));

    info!(
        slides = nav.slide_count(),
        start = nav.current_index() + 1,
        mode = ?nav.display_mode(),
        theme = %theme.name,
        "starting presentation"
    );

    let title = deck::COURSE_TITLE;
    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(title)
    };
    let viewport = viewport.with_icon(std::sync::Arc::new(app_icon()));

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(PresentationApp::new(nav, theme, transition_kind)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::TransitionDirection;
    use crate::registry::SlideDescriptor;

    fn registry(count: usize) -> SlideRegistry<()> {
        let slides = (0..count)
            .map(|i| SlideDescriptor::new(format!("s{i}"), format!("Slide {i}"), ()))
            .collect();
        SlideRegistry::new(slides).unwrap()
    }

    #[test]
    fn test_default_start() {
        let nav = prepare_controller(registry(4), None, DisplayMode::Simple);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.direction(), TransitionDirection::None);
        assert_eq!(nav.display_mode(), DisplayMode::Simple);
    }

    #[test]
    fn test_start_slide_is_one_indexed() {
        let nav = prepare_controller(registry(4), Some(3), DisplayMode::Simple);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_start_slide_is_clamped() {
        let nav = prepare_controller(registry(4), Some(40), DisplayMode::Simple);
        assert_eq!(nav.current_index(), 3);
        let nav = prepare_controller(registry(4), Some(0), DisplayMode::Simple);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_start_in_advanced_mode() {
        let nav = prepare_controller(registry(4), Some(2), DisplayMode::Advanced);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.display_mode(), DisplayMode::Advanced);
    }

    #[test]
    fn test_resolve_topic() {
        let reg = registry(4);
        assert_eq!(resolve_topic(&reg, "s0").unwrap(), 1);
        assert_eq!(resolve_topic(&reg, "s3").unwrap(), 4);
        let err = resolve_topic(&reg, "hooks").unwrap_err();
        assert!(err.to_string().contains("Unknown topic: hooks"));
    }

    fn course_app(start_slide: Option<usize>) -> PresentationApp {
        let nav = prepare_controller(deck::registry().unwrap(), start_slide, DisplayMode::Simple);
        PresentationApp::new(nav, Theme::dark(), TransitionKind::SlideHorizontal)
    }

    #[test]
    fn test_advance_starts_a_transition() {
        let mut app = course_app(None);
        assert!(app.transition.is_none());

        app.apply(Intent::Advance);
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (0, 1));
        assert_eq!(t.direction, TransitionDirection::Forward);
        assert_eq!(t.kind, TransitionKind::SlideHorizontal);
    }

    #[test]
    fn test_new_intent_replaces_running_transition() {
        let mut app = course_app(None);
        app.apply(Intent::Advance);
        app.apply(Intent::Advance);
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (1, 2));
        assert_eq!(t.direction, TransitionDirection::Forward);

        app.apply(Intent::Retreat);
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (2, 1));
        assert_eq!(t.direction, TransitionDirection::Backward);
        assert_eq!(app.nav.current_index(), 1);
    }

    #[test]
    fn test_jump_to_current_slide_starts_nothing() {
        let mut app = course_app(Some(3));
        app.apply(Intent::JumpTo(2));
        assert!(app.transition.is_none());
        assert!(app.toast.is_none());

        app.apply(Intent::Advance);
        app.apply(Intent::JumpTo(3));
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (2, 3));
    }

    #[test]
    fn test_mode_toggle_shows_toast_without_transition() {
        let mut app = course_app(Some(5));
        app.apply(Intent::ToggleMode);
        assert!(app.transition.is_none());
        assert!(app.toast.is_some());
        assert_eq!(app.nav.display_mode(), DisplayMode::Advanced);
        assert_eq!(app.nav.current_index(), 4);
    }

    #[test]
    fn test_icon_dimensions() {
        let icon = app_icon();
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}
