pub mod chrome;
pub mod syntax;
pub mod text;
pub mod transition;

use eframe::egui::{self, Pos2};

use crate::theme::Theme;

/// A slide's drawing routine. The flag is `true` in simple mode.
pub type RenderUnit = fn(&mut Stage<'_>, bool);

/// Reference resolution every size in the deck is authored against.
pub const REFERENCE_SIZE: egui::Vec2 = egui::vec2(1920.0, 1080.0);

pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / REFERENCE_SIZE.x).min(rect.height() / REFERENCE_SIZE.y)
}

/// Drawing context for one slide in one frame.
///
/// Content flows top to bottom: every helper draws at the cursor and moves
/// it down by the height it used.
pub struct Stage<'a> {
    pub ui: &'a mut egui::Ui,
    pub theme: &'a Theme,
    pub scale: f32,
    /// Position of the slide in the deck; keys slide-local demo state.
    pub index: usize,
    content: egui::Rect,
    cursor: f32,
}

impl<'a> Stage<'a> {
    pub fn new(
        ui: &'a mut egui::Ui,
        theme: &'a Theme,
        rect: egui::Rect,
        scale: f32,
        index: usize,
    ) -> Self {
        let padding = egui::vec2(120.0, 90.0) * scale;
        let content = rect.shrink2(padding);
        Self {
            ui,
            theme,
            scale,
            index,
            content,
            cursor: content.top(),
        }
    }

    fn pos(&self) -> Pos2 {
        Pos2::new(self.content.left(), self.cursor)
    }

    fn width(&self) -> f32 {
        self.content.width()
    }

    pub fn heading(&mut self, title: &str) {
        let h = text::draw_heading(
            self.ui,
            title,
            2,
            self.theme,
            self.pos(),
            self.width(),
            self.scale,
        );
        self.cursor += h + 40.0 * self.scale;
    }

    /// A vertically centered title card for opening and closing slides.
    pub fn title_card(&mut self, title: &str, subtitle: &str) {
        let theme = self.theme;
        let title_color = theme.heading_color;
        let sub_color = theme.accent;

        let title_galley = self.ui.painter().layout(
            title.to_string(),
            egui::FontId::proportional(theme.h1_size * self.scale),
            title_color,
            self.width(),
        );
        let sub_galley = self.ui.painter().layout(
            subtitle.to_string(),
            egui::FontId::proportional(theme.body_size * 1.1 * self.scale),
            sub_color,
            self.width(),
        );
        let gap = 30.0 * self.scale;
        let total = title_galley.rect.height() + gap + sub_galley.rect.height();
        let top = self.content.center().y - total / 2.0;
        let center_x = self.content.center().x;

        let title_h = title_galley.rect.height();
        let title_pos = Pos2::new(center_x - title_galley.rect.width() / 2.0, top);
        self.ui.painter().galley(title_pos, title_galley, title_color);

        let sub_pos = Pos2::new(
            center_x - sub_galley.rect.width() / 2.0,
            top + title_h + gap,
        );
        let sub_h = sub_galley.rect.height();
        self.ui.painter().galley(sub_pos, sub_galley, sub_color);
        self.cursor = sub_pos.y + sub_h + gap;
    }

    pub fn paragraph(&mut self, body: &str) {
        let color = self.theme.foreground;
        let code_color = self.theme.accent;
        let h = text::draw_prose(
            self.ui,
            body,
            self.pos(),
            self.theme.body_size * self.scale,
            color,
            code_color,
            self.width(),
        );
        self.cursor += h + 28.0 * self.scale;
    }

    pub fn bullets(&mut self, items: &[&str]) {
        let (pos, width) = (self.pos(), self.width());
        let h = text::draw_bullets(self.ui, items, self.theme, pos, width, self.scale);
        self.cursor += h + 32.0 * self.scale;
    }

    /// A JSX sample.
    pub fn code(&mut self, source: &str) {
        self.code_with(source, "jsx", &[]);
    }

    pub fn code_with(&mut self, source: &str, language: &str, highlight_lines: &[usize]) {
        let h = text::draw_code_block(
            self.ui,
            source,
            Some(language),
            highlight_lines,
            self.theme,
            self.pos(),
            self.width(),
            self.scale,
        );
        self.cursor += h + 32.0 * self.scale;
    }

    /// Bullets on the left, a JSX sample on the right.
    pub fn bullets_beside_code(&mut self, items: &[&str], source: &str) {
        let gap = 48.0 * self.scale;
        let left_w = (self.width() - gap) * 0.45;
        let right_w = self.width() - gap - left_w;
        let top = self.pos();

        let left_h = text::draw_bullets(self.ui, items, self.theme, top, left_w, self.scale);
        let right_h = text::draw_code_block(
            self.ui,
            source,
            Some("jsx"),
            &[],
            self.theme,
            Pos2::new(top.x + left_w + gap, top.y),
            right_w,
            self.scale,
        );
        self.cursor += left_h.max(right_h) + 32.0 * self.scale;
    }

    pub fn callout(&mut self, note: &str) {
        let bar = self.theme.accent;
        self.callout_in(note, bar);
    }

    /// A callout tinted with the advanced-mode color.
    pub fn deep_dive(&mut self, note: &str) {
        let bar = self.theme.advanced;
        self.callout_in(note, bar);
    }

    fn callout_in(&mut self, note: &str, bar: egui::Color32) {
        let h = text::draw_callout(
            self.ui,
            note,
            bar,
            self.theme,
            self.pos(),
            self.width(),
            self.scale,
        );
        self.cursor += h + 32.0 * self.scale;
    }

    fn demo_id(&self, name: &str) -> egui::Id {
        egui::Id::new(("herodeck-demo", self.index, name))
    }

    fn demo_font(&self) -> egui::FontId {
        egui::FontId::proportional(self.theme.body_size * 0.9 * self.scale)
    }

    fn demo_label(&mut self, label: String, x: f32, row: egui::Rect) {
        let color = self.theme.heading_color;
        let galley = self
            .ui
            .painter()
            .layout_no_wrap(label, self.demo_font(), color);
        let pos = Pos2::new(x, row.center().y - galley.rect.height() / 2.0);
        self.ui.painter().galley(pos, galley, color);
    }

    /// A live counter with `-1`, `+1` and reset buttons. Returns the value
    /// after this frame's clicks.
    pub fn counter(&mut self, name: &str, label: &str) -> i64 {
        let id = self.demo_id(name);
        let mut count = self.ui.data(|d| d.get_temp::<i64>(id)).unwrap_or(0);

        let row_h = 72.0 * self.scale;
        let button_w = 110.0 * self.scale;
        let gap = 20.0 * self.scale;
        let row = egui::Rect::from_min_size(self.pos(), egui::vec2(self.width(), row_h));
        let font = self.demo_font();

        let mut x = row.left();
        for (text, delta) in [("-1", -1), ("+1", 1)] {
            let rect = egui::Rect::from_min_size(
                Pos2::new(x, row.top()),
                egui::vec2(button_w, row_h),
            );
            let button = egui::Button::new(egui::RichText::new(text).font(font.clone()));
            if self.ui.put(rect, button).clicked() {
                count += delta;
            }
            x += button_w + gap;
        }
        let reset_rect = egui::Rect::from_min_size(
            Pos2::new(x, row.top()),
            egui::vec2(button_w * 1.4, row_h),
        );
        let reset = egui::Button::new(egui::RichText::new("reset").font(font));
        if self.ui.put(reset_rect, reset).clicked() {
            count = 0;
        }
        x += button_w * 1.4 + gap * 2.0;

        self.demo_label(format!("{label}: {count}"), x, row);
        self.ui.data_mut(|d| d.insert_temp(id, count));
        self.cursor += row_h + 32.0 * self.scale;
        count
    }

    /// A controlled text input. Returns the current text.
    pub fn text_field(&mut self, name: &str, hint: &str) -> String {
        let id = self.demo_id(name);
        let mut value = self.ui.data(|d| d.get_temp::<String>(id)).unwrap_or_default();

        let row_h = 72.0 * self.scale;
        let field_w = self.width() * 0.5;
        let rect = egui::Rect::from_min_size(self.pos(), egui::vec2(field_w, row_h));
        let edit = egui::TextEdit::singleline(&mut value)
            .id(id.with("edit"))
            .hint_text(hint)
            .font(self.demo_font())
            .vertical_align(egui::Align::Center);
        self.ui.put(rect, edit);

        self.ui.data_mut(|d| d.insert_temp(id, value.clone()));
        self.cursor += row_h + 24.0 * self.scale;
        value
    }

    /// A show/hide switch. Returns whether it is on.
    pub fn toggle(&mut self, name: &str, on_label: &str, off_label: &str) -> bool {
        let id = self.demo_id(name);
        let mut on = self.ui.data(|d| d.get_temp::<bool>(id)).unwrap_or(false);

        let row_h = 72.0 * self.scale;
        let rect = egui::Rect::from_min_size(self.pos(), egui::vec2(self.width() * 0.4, row_h));
        let label = if on { on_label } else { off_label };
        let button = egui::Button::new(egui::RichText::new(label).font(self.demo_font()))
            .selected(on);
        if self.ui.put(rect, button).clicked() {
            on = !on;
        }

        self.ui.data_mut(|d| d.insert_temp(id, on));
        self.cursor += row_h + 24.0 * self.scale;
        on
    }
}

/// Draw one slide into `rect`. Each slide gets its own child `Ui` so widget
/// ids never collide while two slides share the screen mid-transition.
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &mut egui::Ui,
    render: RenderUnit,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    index: usize,
    simple: bool,
) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .id_salt(("slide", index)),
    );
    // Fades are applied here once; helpers paint at full strength.
    child.set_opacity(opacity);
    let mut stage = Stage::new(&mut child, theme, rect, scale, index);
    render(&mut stage, simple);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_one_at_reference() {
        let rect = egui::Rect::from_min_size(Pos2::ZERO, REFERENCE_SIZE);
        assert_eq!(compute_scale(rect), 1.0);
    }

    fn one_paragraph(stage: &mut Stage<'_>, _simple: bool) {
        stage.paragraph("Props flow `down`");
    }

    #[test]
    fn test_fade_is_applied_once() {
        let ctx = egui::Context::default();
        let theme = Theme::dark();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = egui::Rect::from_min_size(Pos2::ZERO, REFERENCE_SIZE);
                render_slide(ui, one_paragraph, &theme, rect, 0.5, 1.0, 0, true);
            });
        });

        let texts: Vec<_> = output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text),
                _ => None,
            })
            .collect();
        assert!(!texts.is_empty());
        for text in texts {
            assert!((text.opacity_factor - 0.5).abs() < 1e-6);
            for section in &text.galley.job.sections {
                assert_eq!(section.format.color.a(), 255);
            }
        }
    }

    #[test]
    fn test_scale_uses_tighter_axis() {
        let rect = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(960.0, 1080.0));
        assert_eq!(compute_scale(rect), 0.5);
    }
}
