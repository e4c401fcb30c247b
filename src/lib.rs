//! texnorm - shared text-to-LaTeX normalization for exam question authoring
//!
//! One implementation of the transformation the admin question forms
//! (MCQ/CQ/SQ and exam creation) used to each carry a near-identical copy
//! of: plain-text math notation is rewritten into LaTeX, Bangla prose is
//! wrapped so it survives math mode, and stored fields are later split
//! into renderable lines for display.
//!
//! ```
//! use texnorm::normalize_for_latex;
//!
//! assert_eq!(normalize_for_latex("2/4"), r"\frac{1}{2}");
//! assert_eq!(normalize_for_latex("৫ টাকা"), r"\text{৫ টাকা}");
//! ```

pub mod core;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::normalize::{
    normalize_with_options, normalize_with_report, NormalizeOptions,
};
pub use crate::core::render::{
    render_rich_text, render_rich_text_with_options, RenderOptions, DEFAULT_PLACEHOLDER,
};
pub use crate::utils::{
    check_text, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel, NormalizeError,
    NormalizeReport, NormalizeResult, PassRecord,
};

// Re-export the rendering IR so consumers don't need a direct dependency
// on the sub-crate.
pub use texnorm_ir::{LineContent, LossRecord, RichLine, RichText};

/// Normalize raw author input into the stored LaTeX-annotated form,
/// with the default options. This is what every form field calls on
/// change.
pub fn normalize_for_latex(input: &str) -> String {
    crate::core::normalize::normalize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_render_round_trip() {
        let stored = normalize_for_latex("ক্ষেত্রফল 1/2 sqrt(4)");
        assert_eq!(stored, r"\text{ক্ষেত্রফল} \frac{1}{2} \sqrt{4}");

        let rendered = render_rich_text(&stored);
        assert_eq!(rendered.lines.len(), 1);
        assert!(rendered.lines[0].content.is_math());
    }

    #[test]
    fn check_accepts_normalizer_output() {
        let stored = normalize_for_latex("x^2 + sqrt(9) = 1/2");
        assert!(!check_text(&stored).has_errors());
    }
}
