use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use colored::Colorize;
use eframe::egui;
use tracing::{info, warn};

use crate::cli::ModeArg;
use crate::config::Config;
use crate::deck;
use crate::navigation::NavigationController;
use crate::render::{self, RenderUnit};
use crate::theme::Theme;

/// Walks the deck with a controller, one screenshot per slide.
struct ExportApp {
    nav: NavigationController<RenderUnit>,
    theme: Theme,
    output_dir: PathBuf,
    /// Slides whose PNG could not be written.
    failures: Arc<AtomicUsize>,
    /// A screenshot is in flight for the current slide.
    capture_pending: bool,
    done: bool,
}

impl ExportApp {
    fn new(
        nav: NavigationController<RenderUnit>,
        theme: Theme,
        output_dir: PathBuf,
        failures: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            nav,
            theme,
            output_dir,
            failures,
            capture_pending: false,
            done: false,
        }
    }

    /// Move to the next slide, keeping the requested mode. Returns false at the end.
    fn next_slide(&mut self) -> bool {
        let next = self.nav.current_index() + 1;
        if next >= self.nav.slide_count() {
            return false;
        }
        // jump_to keeps the display mode, advance would reset it.
        self.nav.jump_to(next);
        true
    }
}

pub fn slide_filename(index: usize) -> String {
    format!("slide-{:02}.png", index + 1)
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // The capture requested last frame arrives as an input event.
        let mut captured = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    let filename = slide_filename(self.nav.current_index());
                    let path = self.output_dir.join(&filename);
                    match save_color_image(image, &path) {
                        Ok(()) => eprintln!("  {} {filename}", "wrote".green()),
                        Err(e) => {
                            warn!(path = %path.display(), "failed to save slide: {e:#}");
                            eprintln!("  {} {filename}: {e:#}", "failed".red());
                            self.failures.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                    captured = true;
                }
            }
        });

        if captured {
            self.capture_pending = false;
            if !self.next_slide() {
                self.done = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = render::compute_scale(rect);
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
            });

        // Capture after painting; the image shows up next frame.
        if !self.capture_pending {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.capture_pending = true;
        }

        ctx.request_repaint();
    }
}

fn save_color_image(image: &egui::ColorImage, path: &Path) -> anyhow::Result<()> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)
        .map_err(|e| anyhow::anyhow!("Could not write {}: {e}", path.display()))
}

pub fn run(output_dir: PathBuf, width: u32, height: u32, mode: ModeArg) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("Export size must be non-zero, got {width}x{height}");
    }

    let registry = deck::registry()?;
    let mut nav = NavigationController::new(registry);
    if mode == ModeArg::Advanced {
        nav.toggle_mode();
    }

    let config = Config::load_or_default();
    let theme = Theme::from_name(config.theme().unwrap_or("dark"));

    std::fs::create_dir_all(&output_dir)?;

    info!(
        slides = nav.slide_count(),
        dir = %output_dir.display(),
        width,
        height,
        "exporting"
    );
    eprintln!(
        "{} {} slides ({} mode, {width}x{height}) into {}",
        "Rendering".bold(),
        nav.slide_count(),
        nav.display_mode().label(),
        output_dir.display(),
    );

    let title = format!("{} export", deck::COURSE_TITLE);
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title(&title)
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let target_dir = output_dir.clone();
    let failures = Arc::new(AtomicUsize::new(0));
    let app_failures = Arc::clone(&failures);
    let slide_count = nav.slide_count();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ExportApp::new(nav, theme, target_dir, app_failures)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    let failed = failures.load(Ordering::Relaxed);
    if failed > 0 {
        anyhow::bail!("{failed} of {slide_count} slides could not be saved");
    }
    eprintln!("{}", "Done.".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_filenames_are_one_indexed_and_padded() {
        assert_eq!(slide_filename(0), "slide-01.png");
        assert_eq!(slide_filename(9), "slide-10.png");
        assert_eq!(slide_filename(123), "slide-124.png");
    }

    #[test]
    fn test_save_color_image_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(slide_filename(0));
        let image = egui::ColorImage::from_rgba_unmultiplied([4, 3], &[200; 4 * 3 * 4]);

        save_color_image(&image, &path).unwrap();

        let saved = image::open(&path).unwrap();
        assert_eq!((saved.width(), saved.height()), (4, 3));
    }

    #[test]
    fn test_save_color_image_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(slide_filename(0));
        let image = egui::ColorImage::from_rgba_unmultiplied([2, 2], &[0; 2 * 2 * 4]);

        let err = save_color_image(&image, &path).unwrap_err();
        assert!(err.to_string().contains("Could not write"));
        assert!(!path.exists());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path().join("out"), 0, 1080, ModeArg::Simple).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }
}
