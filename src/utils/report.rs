//! Per-pass reporting for normalization runs.
//!
//! The authoring tools re-run the full pipeline on every change; the
//! report says which passes actually fired and what was left behind,
//! and serializes to JSON for the CLI `--report` flag.

use serde::Serialize;
use texnorm_ir::LossRecord;

/// One pass of the rewrite pipeline and how many times it replaced.
#[derive(Debug, Clone, Serialize)]
pub struct PassRecord {
    pub name: &'static str,
    pub replacements: usize,
}

impl PassRecord {
    pub fn new(name: &'static str, replacements: usize) -> Self {
        Self { name, replacements }
    }
}

/// A serializable mirror of [`LossRecord`]; the IR crate stays
/// dependency-free.
#[derive(Debug, Clone, Serialize)]
pub struct LossEntry {
    pub kind: String,
    pub message: String,
}

impl From<LossRecord> for LossEntry {
    fn from(loss: LossRecord) -> Self {
        Self {
            kind: loss.kind,
            message: loss.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    pub passes: Vec<PassRecord>,
    pub losses: Vec<LossEntry>,
}

impl NormalizeReport {
    pub fn new(passes: Vec<PassRecord>, losses: Vec<LossRecord>) -> Self {
        Self {
            passes,
            losses: losses.into_iter().map(LossEntry::from).collect(),
        }
    }

    pub fn has_losses(&self) -> bool {
        !self.losses.is_empty()
    }

    /// Total replacements across all passes.
    pub fn total_replacements(&self) -> usize {
        self.passes.iter().map(|p| p.replacements).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_totals_replacements() {
        let report = NormalizeReport::new(
            vec![PassRecord::new("fraction", 2), PassRecord::new("sqrt", 1)],
            vec![],
        );
        assert_eq!(report.total_replacements(), 3);
        assert!(!report.has_losses());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = NormalizeReport::new(
            vec![PassRecord::new("fraction", 1)],
            vec![LossRecord::new("fraction-zero-denominator", "3/0 left as-is")],
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"fraction\""));
        assert!(json.contains("fraction-zero-denominator"));
    }
}
