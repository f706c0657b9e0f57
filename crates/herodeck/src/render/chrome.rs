//! Everything drawn around the slide: progress bar, arrows, dots, mode
//! switch, counter, toast and the help overlay.

use eframe::egui::{self, Pos2, Sense};

use crate::navigation::{DisplayMode, Intent};
use crate::theme::Theme;

const MAX_DOT_SPACING: f32 = 34.0;

/// What the chrome needs to know about the presentation this frame.
pub struct ChromeInfo<'a> {
    pub index: usize,
    pub count: usize,
    pub progress: f32,
    pub mode: DisplayMode,
    pub title: &'a str,
}

/// Center x of each dot, spread across `width` and centered on `center_x`.
pub fn dot_positions(count: usize, center_x: f32, width: f32, scale: f32) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = if count > 1 {
        (width / (count - 1) as f32).min(MAX_DOT_SPACING * scale)
    } else {
        0.0
    };
    let span = spacing * (count - 1) as f32;
    let left = center_x - span / 2.0;
    (0..count).map(|i| left + spacing * i as f32).collect()
}

/// Draw the chrome and return the intents triggered by clicks on it.
pub fn draw(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
    info: &ChromeInfo<'_>,
) -> Vec<Intent> {
    let mut intents = Vec::new();

    draw_progress_bar(ui, theme, rect, scale, info.progress);

    let bottom_y = rect.bottom() - 44.0 * scale;

    // Dots
    let dot_xs = dot_positions(info.count, rect.center().x, rect.width() * 0.5, scale);
    let radius = 6.0 * scale;
    for (i, x) in dot_xs.iter().enumerate() {
        let center = Pos2::new(*x, bottom_y);
        let hit = egui::Rect::from_center_size(center, egui::vec2(radius * 4.0, radius * 4.0));
        let response = ui.interact(hit, ui.id().with(("dot", i)), Sense::click());
        let current = i == info.index;
        let color = if current {
            theme.accent
        } else if response.hovered() {
            Theme::with_opacity(theme.foreground, 0.6)
        } else {
            Theme::with_opacity(theme.foreground, 0.25)
        };
        let r = if current { radius * 1.4 } else { radius };
        ui.painter().circle_filled(center, r, color);
        if response.clicked() {
            intents.push(Intent::JumpTo(i));
        }
    }

    // Arrows
    let arrow_size = 56.0 * scale;
    let margin = 28.0 * scale;
    let arrows = [
        ("\u{2039}", rect.left() + margin, info.index > 0, Intent::Retreat),
        (
            "\u{203A}",
            rect.right() - margin - arrow_size,
            info.index + 1 < info.count,
            Intent::Advance,
        ),
    ];
    for (glyph, x, enabled, intent) in arrows {
        let arrow_rect = egui::Rect::from_min_size(
            Pos2::new(x, rect.center().y - arrow_size / 2.0),
            egui::vec2(arrow_size, arrow_size),
        );
        let response = ui.interact(arrow_rect, ui.id().with(glyph), Sense::click());
        let opacity = match (enabled, response.hovered()) {
            (false, _) => 0.1,
            (true, true) => 0.7,
            (true, false) => 0.35,
        };
        let color = Theme::with_opacity(theme.foreground, opacity);
        ui.painter().circle_stroke(
            arrow_rect.center(),
            arrow_size / 2.0,
            egui::Stroke::new(2.0 * scale, color),
        );
        let galley = ui.painter().layout_no_wrap(
            glyph.to_string(),
            egui::FontId::proportional(44.0 * scale),
            color,
        );
        let pos = arrow_rect.center() - galley.rect.size() / 2.0;
        ui.painter().galley(pos, galley, color);
        if enabled && response.clicked() {
            intents.push(intent);
        }
    }

    // Mode switch
    let mode_color = match info.mode {
        DisplayMode::Simple => theme.accent,
        DisplayMode::Advanced => theme.advanced,
    };
    let mode_galley = ui.painter().layout_no_wrap(
        format!("{} mode", info.mode.label()),
        egui::FontId::proportional(18.0 * scale),
        mode_color,
    );
    let pad = egui::vec2(16.0, 8.0) * scale;
    let mode_rect = egui::Rect::from_min_size(
        Pos2::new(
            rect.right() - mode_galley.rect.width() - pad.x * 2.0 - 24.0 * scale,
            rect.top() + 24.0 * scale,
        ),
        mode_galley.rect.size() + pad * 2.0,
    );
    let response = ui.interact(mode_rect, ui.id().with("mode"), Sense::click());
    let fill_opacity = if response.hovered() { 0.2 } else { 0.1 };
    ui.painter().rect_filled(
        mode_rect,
        mode_rect.height() / 2.0,
        Theme::with_opacity(mode_color, fill_opacity),
    );
    ui.painter()
        .galley(mode_rect.min + pad, mode_galley, mode_color);
    if response.clicked() {
        intents.push(Intent::ToggleMode);
    }

    // Footer title and counter
    let faint = Theme::with_opacity(theme.foreground, 0.4);
    let footer = ui.painter().layout_no_wrap(
        info.title.to_string(),
        egui::FontId::proportional(14.0 * scale),
        faint,
    );
    ui.painter().galley(
        Pos2::new(rect.left() + 24.0 * scale, rect.bottom() - 30.0 * scale),
        footer,
        faint,
    );

    let counter = ui.painter().layout_no_wrap(
        format!("{} / {}", info.index + 1, info.count),
        egui::FontId::monospace(14.0 * scale),
        faint,
    );
    let counter_pos = Pos2::new(
        rect.right() - counter.rect.width() - 16.0 * scale,
        rect.bottom() - 30.0 * scale,
    );
    ui.painter().galley(counter_pos, counter, faint);

    intents
}

fn draw_progress_bar(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32, progress: f32) {
    let height = 6.0 * scale;
    let track = egui::Rect::from_min_size(rect.left_top(), egui::vec2(rect.width(), height));
    ui.painter()
        .rect_filled(track, 0.0, Theme::with_opacity(theme.foreground, 0.08));
    let fill = egui::Rect::from_min_size(
        rect.left_top(),
        egui::vec2(rect.width() * progress.clamp(0.0, 1.0), height),
    );
    ui.painter().rect_filled(fill, 0.0, theme.accent);
}

/// A short-lived message at the bottom of the screen.
pub struct Toast {
    message: String,
    start: std::time::Instant,
}

impl Toast {
    const DURATION: f32 = 1.5;
    const FADE_START: f32 = 1.0;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            start: std::time::Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < Self::FADE_START {
            1.0
        } else if elapsed < Self::DURATION {
            1.0 - (elapsed - Self::FADE_START) / (Self::DURATION - Self::FADE_START)
        } else {
            0.0
        }
    }

    pub fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= Self::DURATION
    }

    pub fn draw(&self, ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
        let opacity = self.opacity();
        if opacity <= 0.0 {
            return;
        }
        let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
        let toast_bg = Theme::with_opacity(theme.code_background, opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            self.message.clone(),
            egui::FontId::proportional(20.0 * scale),
            toast_color,
        );
        let padding = 16.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            Pos2::new(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - 120.0 * scale,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
        let text_pos = Pos2::new(toast_rect.left() + padding, toast_rect.top() + padding);
        ui.painter().galley(text_pos, galley, toast_color);
    }
}

const HELP_ROWS: &[(&str, &str)] = &[
    ("\u{2192}  N  Space  PgDn", "Next slide"),
    ("\u{2190}  P  PgUp", "Previous slide"),
    ("Home / End", "First / last slide"),
    ("M", "Toggle simple / advanced"),
    ("Swipe", "Drag left or right to navigate"),
    ("T", "Cycle transition"),
    ("D", "Toggle dark / light"),
    ("F", "Toggle fullscreen"),
    ("H", "Toggle this help"),
    ("Q  or  Esc Esc", "Quit"),
];

pub fn draw_help(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let overlay_w = 640.0 * scale;
    let row_h = 34.0 * scale;
    let padding = 28.0 * scale;
    let overlay_h = padding * 2.0 + 48.0 * scale + row_h * HELP_ROWS.len() as f32;
    let overlay = egui::Rect::from_center_size(rect.center(), egui::vec2(overlay_w, overlay_h));

    ui.painter().rect_filled(
        overlay,
        12.0 * scale,
        Theme::with_opacity(theme.code_background, 0.95),
    );

    let title_color = theme.heading_color;
    let title = ui.painter().layout_no_wrap(
        "Keyboard shortcuts".to_string(),
        egui::FontId::proportional(24.0 * scale),
        title_color,
    );
    ui.painter().galley(
        Pos2::new(overlay.left() + padding, overlay.top() + padding),
        title,
        title_color,
    );

    let key_color = theme.accent;
    let desc_color = theme.foreground;
    let mut y = overlay.top() + padding + 48.0 * scale;
    for (keys, desc) in HELP_ROWS {
        let key_galley = ui.painter().layout_no_wrap(
            keys.to_string(),
            egui::FontId::monospace(17.0 * scale),
            key_color,
        );
        ui.painter()
            .galley(Pos2::new(overlay.left() + padding, y), key_galley, key_color);
        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            egui::FontId::proportional(17.0 * scale),
            desc_color,
        );
        ui.painter().galley(
            Pos2::new(overlay.left() + padding + 260.0 * scale, y),
            desc_galley,
            desc_color,
        );
        y += row_h;
    }
}
