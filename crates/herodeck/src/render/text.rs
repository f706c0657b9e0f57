use crate::theme::Theme;
use eframe::egui::{self, Color32, FontFamily, FontId, Pos2};

/// Split text on backticks into `(segment, is_code)` pairs.
/// An unmatched trailing backtick is kept as literal text.
pub fn split_code_spans(text: &str) -> Vec<(&str, bool)> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('`') {
        let Some(close) = rest[open + 1..].find('`') else {
            break;
        };
        if open > 0 {
            spans.push((&rest[..open], false));
        }
        spans.push((&rest[open + 1..open + 1 + close], true));
        rest = &rest[open + close + 2..];
    }
    if !rest.is_empty() {
        spans.push((rest, false));
    }
    spans
}

/// Create a LayoutJob for prose with `inline code` spans.
pub fn prose_job(
    text: &str,
    font_size: f32,
    color: Color32,
    code_color: Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    for (segment, is_code) in split_code_spans(text) {
        let format = if is_code {
            egui::text::TextFormat {
                font_id: FontId::new(font_size * 0.85, FontFamily::Monospace),
                color: code_color,
                background: Color32::from_rgba_unmultiplied(128, 128, 128, 30),
                ..Default::default()
            }
        } else {
            egui::text::TextFormat {
                font_id: FontId::new(font_size, FontFamily::Proportional),
                color,
                ..Default::default()
            }
        };
        job.append(segment, 0.0, format);
    }
    job
}

/// Layout and paint prose, returning the height used.
pub fn draw_prose(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font_size: f32,
    color: Color32,
    code_color: Color32,
    max_width: f32,
) -> f32 {
    let job = prose_job(text, font_size, color, code_color, max_width);
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Draw a heading. Returns height used.
pub fn draw_heading(
    ui: &egui::Ui,
    text: &str,
    level: u8,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    scale: f32,
) -> f32 {
    let size = theme.heading_size(level) * scale;
    let color = theme.heading_color;
    let code_color = theme.accent;
    draw_prose(ui, text, pos, size, color, code_color, max_width)
}

/// Draw a bulleted list. Returns height used.
pub fn draw_bullets(
    ui: &egui::Ui,
    items: &[&str],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    scale: f32,
) -> f32 {
    let font_size = theme.body_size * scale;
    let color = theme.foreground;
    let code_color = theme.accent;
    let bullet_color = theme.accent;
    let indent = font_size * 1.2;
    let gap = font_size * 0.35;

    let mut y = pos.y;
    for item in items {
        let radius = font_size * 0.12;
        let center = Pos2::new(pos.x + indent * 0.4, y + font_size * 0.6);
        ui.painter().circle_filled(center, radius, bullet_color);

        let h = draw_prose(
            ui,
            item,
            Pos2::new(pos.x + indent, y),
            font_size,
            color,
            code_color,
            max_width - indent,
        );
        y += h + gap;
    }
    (y - pos.y - gap).max(0.0)
}

/// Draw a code block with syntax highlighting. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_code_block(
    ui: &egui::Ui,
    code: &str,
    language: Option<&str>,
    highlight_lines: &[usize],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    scale: f32,
) -> f32 {
    let padding = 16.0 * scale;
    let bg_color = theme.code_background;

    let job = crate::render::syntax::highlight_code(
        code.trim_end_matches('\n'),
        language,
        theme.code_size * scale,
        theme,
        max_width - padding * 2.0,
    );
    let code_galley = ui.painter().layout_job(job);

    let total_height = code_galley.rect.height() + padding * 2.0;

    let bg_rect = egui::Rect::from_min_size(pos, egui::vec2(max_width, total_height));
    ui.painter().rect_filled(bg_rect, 8.0 * scale, bg_color);

    // Highlighted source lines are 1-indexed; wrapped rows share their line's number.
    if !highlight_lines.is_empty() {
        let accent = Theme::with_opacity(theme.accent, 0.15);
        let code_top = pos.y + padding;

        let mut source_line = 1usize;
        for row in &code_galley.rows {
            let row_rect = row.rect();

            if highlight_lines.contains(&source_line) {
                let hl_rect = egui::Rect::from_min_max(
                    Pos2::new(pos.x + padding * 0.5, code_top + row_rect.top()),
                    Pos2::new(
                        pos.x + max_width - padding * 0.5,
                        code_top + row_rect.bottom(),
                    ),
                );
                ui.painter().rect_filled(hl_rect, 4.0 * scale, accent);
            }

            if row.ends_with_newline {
                source_line += 1;
            }
        }
    }

    let code_pos = Pos2::new(pos.x + padding, pos.y + padding);
    let fallback = theme.code_foreground;
    ui.painter().galley(code_pos, code_galley, fallback);

    total_height
}

/// Draw a tinted note with a left accent bar. Returns height used.
pub fn draw_callout(
    ui: &egui::Ui,
    text: &str,
    bar_color: Color32,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    scale: f32,
) -> f32 {
    let padding = 18.0 * scale;
    let bar_width = 5.0 * scale;
    let font_size = theme.body_size * 0.85 * scale;
    let color = theme.foreground;
    let code_color = theme.accent;

    let job = prose_job(
        text,
        font_size,
        color,
        code_color,
        max_width - padding * 2.0 - bar_width,
    );
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height() + padding * 2.0;

    let rect = egui::Rect::from_min_size(pos, egui::vec2(max_width, height));
    ui.painter().rect_filled(
        rect,
        6.0 * scale,
        Theme::with_opacity(bar_color, 0.08),
    );
    let bar = egui::Rect::from_min_size(pos, egui::vec2(bar_width, height));
    ui.painter().rect_filled(bar, 2.0 * scale, bar_color);

    ui.painter().galley(
        Pos2::new(pos.x + bar_width + padding, pos.y + padding),
        galley,
        color,
    );
    height
}
