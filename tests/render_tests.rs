//! Integration tests for the display-side line renderer

use pretty_assertions::assert_eq;
use texnorm::{
    check_text, normalize_for_latex, render_rich_text, render_rich_text_with_options,
    LineContent, RenderOptions, DEFAULT_PLACEHOLDER,
};

// ============================================================================
// Line splitting and math wrapping
// ============================================================================

mod line_rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stored_math_is_dollar_wrapped() {
        let rendered = render_rich_text(r"\frac{1}{2}");
        assert_eq!(rendered.lines.len(), 1);
        assert_eq!(rendered.lines[0].content.markup(), r"$\frac{1}{2}$");
        assert!(rendered.lines[0].content.is_math());
    }

    #[test]
    fn prose_lines_are_left_as_prose() {
        let rendered = render_rich_text("Which of these is correct?");
        assert_eq!(
            rendered.lines[0].content,
            LineContent::Plain("Which of these is correct?".to_string())
        );
    }

    #[test]
    fn each_stored_line_renders_independently() {
        let rendered = render_rich_text("প্রশ্ন:\n$x^{2}$\nউত্তর দাও");
        assert_eq!(rendered.lines.len(), 3);
        assert!(!rendered.lines[0].content.is_math());
        assert!(rendered.lines[1].content.is_math());
        assert!(!rendered.lines[2].content.is_math());
    }

    #[test]
    fn predelimited_lines_are_not_rewrapped() {
        let rendered = render_rich_text("$x^{2}$");
        assert_eq!(rendered.lines[0].content.markup(), "$x^{2}$");
    }

    #[test]
    fn rendering_is_restartable() {
        let rendered = render_rich_text("a\nb");
        let first: Vec<_> = rendered.lines.iter().map(|l| &l.source).collect();
        let second: Vec<_> = rendered.lines.iter().map(|l| &l.source).collect();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Markdown emphasis
// ============================================================================

mod markdown {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bold_bangla_renders_as_bold_html() {
        let rendered = render_rich_text("**বল্ড**");
        assert_eq!(rendered.lines[0].content.markup(), "<b>বল্ড</b>");
    }

    #[test]
    fn all_three_markers_expand() {
        let rendered = render_rich_text("**b** *i* __u__");
        assert_eq!(
            rendered.lines[0].content.markup(),
            "<b>b</b> <i>i</i> <u>u</u>"
        );
    }

    #[test]
    fn unmatched_markers_are_left_alone() {
        let rendered = render_rich_text("2 * 3 = 6");
        assert_eq!(rendered.lines[0].content.markup(), "2 * 3 = 6");
    }
}

// ============================================================================
// Placeholder and failure isolation
// ============================================================================

mod degradation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_shows_placeholder() {
        let rendered = render_rich_text("");
        assert_eq!(rendered.lines.len(), 1);
        assert_eq!(
            rendered.lines[0].content,
            LineContent::Placeholder(DEFAULT_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn whitespace_only_input_shows_placeholder() {
        let rendered = render_rich_text(" \n ");
        assert_eq!(rendered.lines.len(), 1);
        assert!(matches!(
            rendered.lines[0].content,
            LineContent::Placeholder(_)
        ));
    }

    #[test]
    fn custom_placeholder_is_used() {
        let options = RenderOptions {
            placeholder: "নেই".to_string(),
        };
        let rendered = render_rich_text_with_options("", &options);
        assert_eq!(
            rendered.lines[0].content,
            LineContent::Placeholder("নেই".to_string())
        );
    }

    #[test]
    fn broken_line_keeps_raw_source_visible() {
        let rendered = render_rich_text("ok\n\\frac{1}{2");
        match &rendered.lines[1].content {
            LineContent::Broken { message, markup } => {
                assert!(message.contains("unbalanced"));
                assert!(markup.contains("\\frac{1}{2"));
            }
            other => panic!("expected Broken, got {:?}", other),
        }
        assert_eq!(rendered.lines[1].source, "\\frac{1}{2");
        // The neighboring line still renders.
        assert_eq!(
            rendered.lines[0].content,
            LineContent::Plain("ok".to_string())
        );
    }

    #[test]
    fn dangling_superscript_is_broken_not_fatal() {
        let rendered = render_rich_text("x^");
        assert!(matches!(
            rendered.lines[0].content,
            LineContent::Broken { .. }
        ));
    }
}

// ============================================================================
// Normalizer output always renders
// ============================================================================

mod pipeline_compatibility {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalized_fields_render_without_errors() {
        let inputs = [
            "1/2 + 1/3",
            "(x+1)^2 ≥ 0",
            "sqrt(16) = 4",
            "ত্রিভুজের ক্ষেত্রফল 1/2 ভূমি",
            "৫ টাকা ½",
        ];
        for input in inputs {
            let stored = normalize_for_latex(input);
            assert!(
                !check_text(&stored).has_errors(),
                "normalizer output failed check for {:?}: {:?}",
                input,
                stored
            );
            let rendered = render_rich_text(&stored);
            assert!(rendered
                .lines
                .iter()
                .all(|l| !matches!(l.content, LineContent::Broken { .. })));
        }
    }
}
