//! Author-input normalization pipeline.
//!
//! Raw text typed into a question/answer/passage field goes through two
//! stages before it is stored: the pattern rewriter (plain-text math
//! notation into LaTeX) and the script-aware wrapper (Bangla runs into
//! `\text{}`). The stored string is what the line renderer later reads
//! back.
//!
//! Normalization is re-run in full on every invocation and is NOT
//! idempotent by construction: re-normalizing stored text can re-wrap
//! content. See the regression tests in `tests/normalize_tests.rs`.

pub mod fraction;
pub mod rewrite;
pub mod script;

use texnorm_ir::LossRecord;

use crate::utils::report::{NormalizeReport, PassRecord};

/// Pipeline toggles. The defaults match what the authoring forms use.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Reduce matched fractions to lowest terms before emitting `\frac`.
    pub simplify_fractions: bool,
    /// Wrap Bangla script runs in `\text{...}`.
    pub wrap_bangla: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            simplify_fractions: true,
            wrap_bangla: true,
        }
    }
}

/// Normalize with the default options.
pub fn normalize(input: &str) -> String {
    normalize_with_options(input, &NormalizeOptions::default())
}

pub fn normalize_with_options(input: &str, options: &NormalizeOptions) -> String {
    let outcome = rewrite::rewrite(input, options);
    if options.wrap_bangla {
        script::wrap_bangla_runs(&outcome.text)
    } else {
        outcome.text
    }
}

/// Normalize and report which passes fired and what was lost.
pub fn normalize_with_report(
    input: &str,
    options: &NormalizeOptions,
) -> (String, NormalizeReport) {
    let outcome = rewrite::rewrite(input, options);
    let mut passes: Vec<PassRecord> = outcome.passes;
    let losses: Vec<LossRecord> = outcome.losses;

    let text = if options.wrap_bangla {
        let (wrapped, runs) = script::wrap_bangla_runs_counted(&outcome.text);
        passes.push(PassRecord::new("bangla-text", runs));
        wrapped
    } else {
        outcome.text
    };

    (text, NormalizeReport::new(passes, losses))
}
