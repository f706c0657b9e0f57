use std::sync::LazyLock;

use eframe::egui::{self, Color32, FontFamily, FontId};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::theme::Theme;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Map a fence-style language tag onto a syntect extension.
/// The default syntaxes have no JSX grammar; JavaScript reads close enough.
fn extension_for(language: &str) -> &str {
    match language {
        "jsx" | "tsx" | "ts" | "typescript" | "javascript" => "js",
        "shell" | "bash" => "sh",
        other => other,
    }
}

/// Build a syntax-highlighted layout job. Unknown languages fall back to
/// plain monospace text in the theme's code color.
pub fn highlight_code(
    code: &str,
    language: Option<&str>,
    font_size: f32,
    theme: &Theme,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    let font_id = FontId::new(font_size, FontFamily::Monospace);

    let syntax = language.and_then(|l| SYNTAX_SET.find_syntax_by_extension(extension_for(l)));
    let syntect_theme = THEME_SET.themes.get(theme.syntect_theme_name());

    let (Some(syntax), Some(syntect_theme)) = (syntax, syntect_theme) else {
        append_plain(&mut job, code, &font_id, theme);
        return job;
    };

    let mut highlighter = HighlightLines::new(syntax, syntect_theme);
    for line in LinesWithEndings::from(code) {
        let Ok(ranges) = highlighter.highlight_line(line, &SYNTAX_SET) else {
            append_plain(&mut job, line, &font_id, theme);
            continue;
        };
        for (style, text) in ranges {
            let fg = style.foreground;
            let color = Color32::from_rgb(fg.r, fg.g, fg.b);
            job.append(
                text,
                0.0,
                egui::text::TextFormat {
                    font_id: font_id.clone(),
                    color,
                    ..Default::default()
                },
            );
        }
    }
    job
}

fn append_plain(
    job: &mut egui::text::LayoutJob,
    text: &str,
    font_id: &FontId,
    theme: &Theme,
) {
    job.append(
        text,
        0.0,
        egui::text::TextFormat {
            font_id: font_id.clone(),
            color: theme.code_foreground,
            ..Default::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsx_maps_to_javascript() {
        assert_eq!(extension_for("jsx"), "js");
        assert_eq!(extension_for("rust"), "rust");
        assert!(SYNTAX_SET.find_syntax_by_extension("js").is_some());
    }

    #[test]
    fn test_highlight_keeps_text() {
        let code = "const [count, setCount] = useState(0);\n";
        let job = highlight_code(code, Some("jsx"), 20.0, &Theme::dark(), 800.0);
        assert_eq!(job.text, code);
        assert!(job.sections.len() > 1);
    }

    #[test]
    fn test_unknown_language_is_plain() {
        let code = "just text";
        let job = highlight_code(code, Some("nope"), 20.0, &Theme::light(), 800.0);
        assert_eq!(job.text, code);
        assert_eq!(job.sections.len(), 1);
    }
}
