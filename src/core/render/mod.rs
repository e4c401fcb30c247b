//! Display-side rendering of stored question text.
//!
//! Stored fields are split on newlines; each line gets its markdown
//! emphasis markers expanded to inline HTML, and any line carrying LaTeX
//! control characters is wrapped in `$...$` so the math renderer on the
//! page picks it up. A line that would make that renderer throw is
//! degraded to a `Broken` line carrying the raw source, so one bad line
//! never takes the rest of the field down with it.

use lazy_static::lazy_static;
use regex::Regex;
use texnorm_ir::{LineContent, RichLine, RichText};

use crate::utils::diagnostics;

/// Shown in place of an empty field. Bangla UI, Bangla placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "কোনো লেখা নেই";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Stand-in markup for an empty/whitespace-only field.
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

lazy_static! {
    // Bold and underline run before italic so `**` and `__` pairs are
    // not eaten marker-by-marker.
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref UNDERLINE: Regex = Regex::new(r"__([^_]+)__").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
}

/// Render a stored field with the default options.
pub fn render_rich_text(stored: &str) -> RichText {
    render_rich_text_with_options(stored, &RenderOptions::default())
}

pub fn render_rich_text_with_options(stored: &str, options: &RenderOptions) -> RichText {
    if stored.trim().is_empty() {
        let line = RichLine::new(
            stored,
            LineContent::Placeholder(options.placeholder.clone()),
        );
        return RichText::new(vec![line]);
    }

    let lines = stored.split('\n').map(render_line).collect();
    RichText::new(lines)
}

fn render_line(raw: &str) -> RichLine {
    let markup = expand_markdown(raw);

    if !contains_latex_control(&markup) {
        return RichLine::new(raw, LineContent::Plain(markup));
    }

    let markup = if is_dollar_delimited(markup.trim()) {
        markup
    } else {
        format!("${}$", markup)
    };

    match diagnostics::line_error(&markup) {
        Some(message) => RichLine::new(raw, LineContent::Broken { message, markup }),
        None => RichLine::new(raw, LineContent::Math(markup)),
    }
}

/// `**bold**` → `<b>`, `__underline__` → `<u>`, `*italic*` → `<i>`.
fn expand_markdown(line: &str) -> String {
    let line = BOLD.replace_all(line, "<b>$1</b>");
    let line = UNDERLINE.replace_all(&line, "<u>$1</u>");
    ITALIC.replace_all(&line, "<i>$1</i>").into_owned()
}

fn contains_latex_control(line: &str) -> bool {
    line.chars()
        .any(|c| matches!(c, '\\' | '{' | '}' | '^' | '_'))
}

fn is_dollar_delimited(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('$') && line.ends_with('$')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup_of(text: &str) -> Vec<String> {
        render_rich_text(text)
            .lines
            .into_iter()
            .map(|l| l.content.markup().to_string())
            .collect()
    }

    #[test]
    fn plain_prose_stays_plain() {
        let rendered = render_rich_text("just a sentence");
        assert_eq!(rendered.lines.len(), 1);
        assert_eq!(
            rendered.lines[0].content,
            LineContent::Plain("just a sentence".to_string())
        );
    }

    #[test]
    fn math_line_gets_dollar_wrapped() {
        assert_eq!(markup_of(r"\frac{1}{2}"), vec![r"$\frac{1}{2}$"]);
    }

    #[test]
    fn already_delimited_line_is_not_double_wrapped() {
        assert_eq!(markup_of("$x^{2}$"), vec!["$x^{2}$"]);
    }

    #[test]
    fn lines_split_on_newline() {
        let rendered = render_rich_text("one\nx^{2}\nthree");
        assert_eq!(rendered.lines.len(), 3);
        assert!(rendered.lines[0].content == LineContent::Plain("one".to_string()));
        assert!(rendered.lines[1].content.is_math());
    }

    #[test]
    fn markdown_expands_to_inline_html() {
        assert_eq!(markup_of("**বল্ড**"), vec!["<b>বল্ড</b>"]);
        assert_eq!(markup_of("*তির্যক*"), vec!["<i>তির্যক</i>"]);
        assert_eq!(markup_of("__নিচে__"), vec!["<u>নিচে</u>"]);
    }

    #[test]
    fn bold_marker_wins_over_italic() {
        assert_eq!(markup_of("**x** and *y*"), vec!["<b>x</b> and <i>y</i>"]);
    }

    #[test]
    fn empty_input_renders_placeholder() {
        let rendered = render_rich_text("");
        assert_eq!(rendered.lines.len(), 1);
        assert_eq!(
            rendered.lines[0].content,
            LineContent::Placeholder(DEFAULT_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn placeholder_is_configurable() {
        let options = RenderOptions {
            placeholder: "empty".to_string(),
        };
        let rendered = render_rich_text_with_options("   ", &options);
        assert_eq!(
            rendered.lines[0].content,
            LineContent::Placeholder("empty".to_string())
        );
    }

    #[test]
    fn malformed_line_degrades_without_breaking_neighbors() {
        let rendered = render_rich_text("fine\n\\frac{1}{2\nx^{2}");
        assert_eq!(rendered.lines.len(), 3);
        match &rendered.lines[1].content {
            LineContent::Broken { message, .. } => {
                assert!(message.contains("unbalanced"));
            }
            other => panic!("expected Broken line, got {:?}", other),
        }
        assert!(rendered.lines[2].content.is_math());
        assert_eq!(rendered.lines[1].source, "\\frac{1}{2");
    }
}
