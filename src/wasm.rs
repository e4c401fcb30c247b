//! WASM bindings for texnorm
//!
//! The normalizer runs in the browser, on every change event of the
//! authoring forms; this module exposes it to JavaScript.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Normalization options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct NormalizeJsOptions {
    /// Reduce matched fractions to lowest terms
    #[serde(default = "default_true")]
    pub simplify_fractions: bool,
    /// Wrap Bangla runs in `\text{...}`
    #[serde(default = "default_true")]
    pub wrap_bangla: bool,
}

/// Rendering options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct RenderJsOptions {
    /// Markup shown for an empty field; the localized default applies
    /// when absent
    #[serde(default)]
    pub placeholder: Option<String>,
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
impl From<&NormalizeJsOptions> for crate::NormalizeOptions {
    fn from(opts: &NormalizeJsOptions) -> Self {
        Self {
            simplify_fractions: opts.simplify_fractions,
            wrap_bangla: opts.wrap_bangla,
        }
    }
}

/// Normalization result with report metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct NormalizeJsResult {
    /// The normalized text
    pub output: String,
    /// Whether normalization succeeded
    pub success: bool,
    /// Error message if it did not
    pub error: Option<String>,
    /// Loss messages (zero denominators and the like)
    pub losses: Vec<String>,
}

/// One rendered line, flattened for JavaScript consumers
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RichLineJs {
    pub source: String,
    /// "plain" | "math" | "placeholder" | "broken"
    pub kind: String,
    pub markup: String,
    /// Present only for broken lines
    pub error: Option<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
///
/// This prevents panics from `unwrap()` when serialization fails.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = NormalizeJsResult {
            output: String::new(),
            success: false,
            error: Some(format!("Serialization error: {}", e)),
            losses: vec![],
        };
        // This inner serialization should always succeed for simple structs
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Normalize raw author input with the default options
///
/// # Arguments
/// * `input` - raw field text as typed
///
/// # Returns
/// The stored form: LaTeX-annotated text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeForLatex")]
pub fn normalize_for_latex_wasm(input: &str) -> String {
    crate::normalize_for_latex(input)
}

/// Normalize with options and return output plus report
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeWithReport")]
pub fn normalize_with_report_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: NormalizeJsOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let (output, report) = crate::normalize_with_report(input, &(&opts).into());

    let result = NormalizeJsResult {
        output,
        success: true,
        error: None,
        losses: report
            .losses
            .iter()
            .map(|l| format!("{}: {}", l.kind, l.message))
            .collect(),
    };
    to_js_value(&result)
}

/// Render a stored field into display lines
///
/// # Arguments
/// * `input` - the stored (normalized) field text
///
/// # Returns
/// An array of `{ source, kind, markup, error }` line objects
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderRichText")]
pub fn render_rich_text_wasm(input: &str, options: JsValue) -> JsValue {
    use texnorm_ir::LineContent;

    let opts: RenderJsOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let render_opts = crate::RenderOptions {
        placeholder: opts
            .placeholder
            .unwrap_or_else(|| crate::DEFAULT_PLACEHOLDER.to_string()),
    };

    let rendered = crate::render_rich_text_with_options(input, &render_opts);
    let lines: Vec<RichLineJs> = rendered
        .lines
        .into_iter()
        .map(|line| {
            let (kind, error) = match &line.content {
                LineContent::Plain(_) => ("plain", None),
                LineContent::Math(_) => ("math", None),
                LineContent::Placeholder(_) => ("placeholder", None),
                LineContent::Broken { message, .. } => ("broken", Some(message.clone())),
            };
            RichLineJs {
                markup: line.content.markup().to_string(),
                source: line.source,
                kind: kind.to_string(),
                error,
            }
        })
        .collect();
    to_js_value(&lines)
}

/// Check a stored field for renderability issues
///
/// # Returns
/// An array of `{ level, line, message }` diagnostics
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkText")]
pub fn check_text_wasm(input: &str) -> JsValue {
    #[derive(Serialize)]
    struct DiagnosticJs {
        level: String,
        line: Option<usize>,
        message: String,
    }

    let result = crate::check_text(input);
    let diagnostics: Vec<DiagnosticJs> = result
        .diagnostics
        .into_iter()
        .map(|d| DiagnosticJs {
            level: match d.level {
                crate::DiagnosticLevel::Error => "error".to_string(),
                crate::DiagnosticLevel::Warning => "warning".to_string(),
                crate::DiagnosticLevel::Info => "info".to_string(),
            },
            line: d.line,
            message: d.message,
        })
        .collect();
    to_js_value(&diagnostics)
}
