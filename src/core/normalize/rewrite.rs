//! Ordered regex rewriting of plain-text math notation into LaTeX.
//!
//! The pass list is fixed and order-sensitive: every pass is a global
//! replace over the whole string, and later passes see the output of
//! earlier ones. Already-braced LaTeX (`\frac{1}{2}`) falls through the
//! fraction passes untouched because their digit/slash patterns cannot
//! match across braces.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use texnorm_ir::LossRecord;

use super::fraction::Fraction;
use super::NormalizeOptions;
use crate::utils::report::PassRecord;

// Digit and word classes are spelled out in ASCII. The regex crate's `\d`
// and `\w` match the whole Unicode Nd/word categories, which would pull
// Bangla numerals (০-৯) into the fraction passes; the stored-text format
// only treats Latin digits as math notation.
lazy_static! {
    /// `<int> <int>/<int>`: a whole part followed by a fraction on the
    /// same line.
    static ref MIXED_FRACTION: Regex =
        Regex::new(r"([0-9]+) +([0-9]+)/([0-9]+)").unwrap();
    /// `<int>/<int>`.
    static ref SIMPLE_FRACTION: Regex = Regex::new(r"([0-9]+)/([0-9]+)").unwrap();
    /// `[...]^e` or `(...)^e` with an unbraced exponent.
    static ref GROUPED_SUPERSCRIPT: Regex =
        Regex::new(r"(\[[^\[\]]*\]|\([^()]*\))\^([0-9A-Za-z_]+)").unwrap();
    /// `word^e` with an unbraced exponent.
    static ref WORD_SUPERSCRIPT: Regex =
        Regex::new(r"([0-9A-Za-z_]+)\^([0-9A-Za-z_]+)").unwrap();
    static ref SQRT: Regex = Regex::new(r"sqrt\(([^()]*)\)").unwrap();
    /// Emphasis markers are counted but preserved for the line renderer.
    static ref MARKDOWN_EMPHASIS: Regex =
        Regex::new(r"\*\*[^*]+\*\*|__[^_]+__|\*[^*]+\*").unwrap();
}

/// Literal symbol conversions, applied after the structural passes.
static SYMBOLS: phf::Map<char, &'static str> = phf::phf_map! {
    '≥' => r"\geq",
    '≤' => r"\leq",
    '≠' => r"\neq",
    '½' => r"\frac{1}{2}",
    '²' => r"^{2}",
    '³' => r"^{3}",
};

#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub text: String,
    pub passes: Vec<PassRecord>,
    pub losses: Vec<LossRecord>,
}

/// Run the full pass list over `input`.
pub fn rewrite(input: &str, options: &NormalizeOptions) -> RewriteOutcome {
    let mut passes = Vec::with_capacity(7);
    let mut losses = Vec::new();

    let (text, count) = apply_mixed_fractions(input, options, &mut losses);
    passes.push(PassRecord::new("mixed-fraction", count));

    let (text, count) = apply_simple_fractions(&text, options, &mut losses);
    passes.push(PassRecord::new("fraction", count));

    let (text, count) = replace_counted(&GROUPED_SUPERSCRIPT, &text, "$1^{$2}");
    passes.push(PassRecord::new("grouped-superscript", count));

    let (text, count) = replace_counted(&WORD_SUPERSCRIPT, &text, "$1^{$2}");
    passes.push(PassRecord::new("superscript", count));

    let (text, count) = replace_counted(&SQRT, &text, r"\sqrt{$1}");
    passes.push(PassRecord::new("sqrt", count));

    let (text, count) = apply_symbols(&text);
    passes.push(PassRecord::new("symbol", count));

    // Pass 7 deliberately rewrites nothing: bold/italic/underline markers
    // stay verbatim in storage and only the renderer expands them.
    let count = MARKDOWN_EMPHASIS.find_iter(&text).count();
    passes.push(PassRecord::new("markdown", count));

    RewriteOutcome {
        text,
        passes,
        losses,
    }
}

fn apply_mixed_fractions(
    input: &str,
    options: &NormalizeOptions,
    losses: &mut Vec<LossRecord>,
) -> (String, usize) {
    let mut count = 0usize;
    let text = MIXED_FRACTION.replace_all(input, |caps: &Captures<'_>| {
        match parse_fraction(&caps[2], &caps[3], options, losses) {
            Some(frac) => {
                count += 1;
                format!(
                    "{}\\ \\frac{{{}}}{{{}}}",
                    &caps[1], frac.numerator, frac.denominator
                )
            }
            None => caps[0].to_string(),
        }
    });
    (text.into_owned(), count)
}

fn apply_simple_fractions(
    input: &str,
    options: &NormalizeOptions,
    losses: &mut Vec<LossRecord>,
) -> (String, usize) {
    let mut count = 0usize;
    let text = SIMPLE_FRACTION.replace_all(input, |caps: &Captures<'_>| {
        match parse_fraction(&caps[1], &caps[2], options, losses) {
            Some(frac) => {
                count += 1;
                format!("\\frac{{{}}}{{{}}}", frac.numerator, frac.denominator)
            }
            None => caps[0].to_string(),
        }
    });
    (text.into_owned(), count)
}

/// Parse and reduce one matched pair. Returns `None` when the match must
/// be left in the source text (zero denominator, digit run too long).
fn parse_fraction(
    numerator: &str,
    denominator: &str,
    options: &NormalizeOptions,
    losses: &mut Vec<LossRecord>,
) -> Option<Fraction> {
    let (Ok(n), Ok(d)) = (numerator.parse::<i64>(), denominator.parse::<i64>()) else {
        losses.push(LossRecord::new(
            "fraction-overflow",
            format!("fraction {}/{} does not fit in i64; left as-is", numerator, denominator),
        ));
        return None;
    };
    if d == 0 {
        losses.push(LossRecord::new(
            "fraction-zero-denominator",
            format!("fraction {}/0 has a zero denominator; left as-is", n),
        ));
        return None;
    }
    let frac = Fraction::new(n, d);
    Some(if options.simplify_fractions {
        frac.simplify()
    } else {
        frac
    })
}

fn replace_counted(pattern: &Regex, input: &str, replacement: &str) -> (String, usize) {
    let count = pattern.find_iter(input).count();
    if count == 0 {
        return (input.to_string(), 0);
    }
    (pattern.replace_all(input, replacement).into_owned(), count)
}

fn apply_symbols(input: &str) -> (String, usize) {
    let mut count = 0usize;
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match SYMBOLS.get(&ch) {
            Some(mapped) => {
                count += 1;
                out.push_str(mapped);
            }
            None => out.push(ch),
        }
    }
    (out, count)
}
