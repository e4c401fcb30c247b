//! Renderability checks for stored question text.
//!
//! The display side feeds every math-flagged line to a LaTeX renderer
//! that throws on malformed markup. `check_text` finds the lines that
//! would blow up (or render suspiciously) before they reach a student's
//! screen; the CLI `check` subcommand and the line renderer both go
//! through it.

use std::fmt;

/// Severity level for a diagnostic (determines coloring and exit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// The line will fail to render.
    Error,
    /// The line renders, but probably not the way the author meant.
    Warning,
    /// Worth knowing, harmless.
    Info,
}

impl DiagnosticLevel {
    fn label(&self) -> &'static str {
        match self {
            DiagnosticLevel::Error => "error",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Info => "info",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            DiagnosticLevel::Error => "\x1b[31m",   // red
            DiagnosticLevel::Warning => "\x1b[33m", // yellow
            DiagnosticLevel::Info => "\x1b[36m",    // cyan
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// 1-based line in the stored field, when known.
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: line {}: {}", self.level.label(), line, self.message),
            None => write!(f, "{}: {}", self.level.label(), self.message),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckResult {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => {}
        }
        self.diagnostics.push(diagnostic);
    }
}

/// Check every line of a stored field for renderability issues.
pub fn check_text(source: &str) -> CheckResult {
    let mut result = CheckResult::default();
    for (idx, line) in source.split('\n').enumerate() {
        for diagnostic in check_line(line) {
            result.push(diagnostic.at_line(idx + 1));
        }
    }
    result
}

/// The first render-breaking problem in a single line, if any. The line
/// renderer uses this to isolate broken lines instead of failing the
/// whole field.
pub fn line_error(line: &str) -> Option<String> {
    check_line(line)
        .into_iter()
        .find(|d| d.level == DiagnosticLevel::Error)
        .map(|d| d.message)
}

fn check_line(line: &str) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    let mut depth = 0i32;
    let mut escaped = false;
    let mut dollars = 0usize;
    for ch in line.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    break;
                }
            }
            '$' => dollars += 1,
            _ => {}
        }
    }

    if depth != 0 {
        out.push(Diagnostic::new(
            DiagnosticLevel::Error,
            "unbalanced braces",
        ));
    }
    if escaped {
        // The line ended while a backslash was still waiting for its
        // command character.
        out.push(Diagnostic::new(
            DiagnosticLevel::Error,
            "trailing bare backslash",
        ));
    }
    if dollars % 2 != 0 {
        out.push(Diagnostic::new(
            DiagnosticLevel::Error,
            "unmatched math delimiter `$`",
        ));
    }

    if has_dangling_script(line) {
        out.push(Diagnostic::new(
            DiagnosticLevel::Error,
            "superscript or subscript with no operand",
        ));
    }

    if has_latex_control(line) && has_unwrapped_bangla(line) {
        out.push(Diagnostic::new(
            DiagnosticLevel::Warning,
            "Bangla text outside \\text{} in a math line may render as empty glyphs",
        ));
    }

    if has_latex_control(line) && (line.contains("**") || line.contains("__")) {
        out.push(Diagnostic::new(
            DiagnosticLevel::Info,
            "markdown emphasis inside a math line renders literally",
        ));
    }

    out
}

/// A `^` or `_` whose operand is missing: nothing after it, or only a
/// closing `$`/`}`.
fn has_dangling_script(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        if ch != '^' && ch != '_' {
            continue;
        }
        if i > 0 && chars[i - 1] == '\\' {
            continue;
        }
        // `__` is a markdown underline marker in stored text, not a
        // subscript.
        if ch == '_'
            && ((i > 0 && chars[i - 1] == '_')
                || (i + 1 < chars.len() && chars[i + 1] == '_'))
        {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j] == ' ' {
            j += 1;
        }
        if j >= chars.len() || matches!(chars[j], '$' | '}') {
            return true;
        }
    }
    false
}

fn has_latex_control(line: &str) -> bool {
    line.chars()
        .any(|c| matches!(c, '\\' | '{' | '}' | '^' | '_'))
}

/// Cheap scan for Bangla characters sitting outside any `\text{...}`.
fn has_unwrapped_bangla(line: &str) -> bool {
    let mut depth = 0i32;
    let mut chars = line.char_indices();
    while let Some((idx, ch)) = chars.next() {
        if depth == 0 && line[idx..].starts_with("\\text{") {
            depth = 1;
            for _ in 0..5 {
                chars.next();
            }
            continue;
        }
        if depth > 0 {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            continue;
        }
        if ('\u{0980}'..='\u{09FF}').contains(&ch) {
            return true;
        }
    }
    false
}

/// Format a check result for console output, optionally colored.
pub fn format_diagnostics(result: &CheckResult, color: bool) -> String {
    const RESET: &str = "\x1b[0m";
    let mut out = String::new();

    if result.diagnostics.is_empty() {
        out.push_str("No issues found.\n");
        return out;
    }

    for diagnostic in &result.diagnostics {
        if color {
            out.push_str(diagnostic.level.color_code());
        }
        out.push_str(&diagnostic.to_string());
        if color {
            out.push_str(RESET);
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{} error(s), {} warning(s)\n",
        result.errors, result.warnings
    ));
    out
}
