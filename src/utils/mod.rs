//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and renderability checks
//! - Error types and result types
//! - Normalization run reports

pub mod diagnostics;
pub mod error;
pub mod report;

// Re-export commonly used items
pub use diagnostics::{
    check_text, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel,
};
pub use error::{NormalizeError, NormalizeResult};
pub use report::{LossEntry, NormalizeReport, PassRecord};
