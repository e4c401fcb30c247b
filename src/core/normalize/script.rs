//! `\text{}` wrapping for Bangla prose embedded in math-mode fields.
//!
//! The math renderer on the display side only draws Latin math glyphs, so
//! runs of Bengali script have to be wrapped in `\text{...}` to survive.
//! This is a best-effort heuristic: Bangla directly adjacent to Latin math
//! symbols without a separating space can be mis-wrapped. Known
//! limitation, kept as-is.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A maximal run starting on a Bengali-block code point, continuing
    /// over Bengali characters (consonants, vowel signs, virama, digits),
    /// spaces, and `/`. Trailing punctuation and whitespace fall outside
    /// the match and therefore outside the wrapper.
    static ref BANGLA_RUN: Regex =
        Regex::new(r"[\u{0980}-\u{09FF}][\u{0980}-\u{09FF} /]*").unwrap();
    /// The numeric exclusion matches Latin digits only. Bangla numerals
    /// (০-৯) deliberately do NOT match, so a pure-Bangla-numeral run is
    /// still wrapped. Preserved current behavior; see DESIGN.md.
    static ref NUMERIC_ONLY: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Wrap every Bangla run's trimmed content in `\text{...}`, keeping the
/// trailing separator outside. Runs that look like fraction notation
/// (purely numeric, or containing `/`) are left alone.
pub fn wrap_bangla_runs(input: &str) -> String {
    wrap_bangla_runs_counted(input).0
}

/// Same as [`wrap_bangla_runs`], additionally returning how many runs
/// were wrapped.
pub fn wrap_bangla_runs_counted(input: &str) -> (String, usize) {
    let mut count = 0usize;
    let wrapped = BANGLA_RUN
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let run = &caps[0];
            let content = run.trim_end();
            let trailing = &run[content.len()..];
            if NUMERIC_ONLY.is_match(content) || content.contains('/') {
                return run.to_string();
            }
            count += 1;
            format!("\\text{{{}}}{}", content, trailing)
        })
        .into_owned();
    (wrapped, count)
}
