//! JSON report formatter.
//!
//! Formats check results as machine-readable JSON for CI tooling.

use std::io::Write;

use serde::Serialize;

use super::{mismatch_message, CheckOutcome, ReportFormatter};

/// Formats check results as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<JsonResult<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    manifest: &'a str,
    clean: bool,
    mismatches: Vec<JsonMismatch<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_text: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonMismatch<'a> {
    name: &'a str,
    expected: &'a str,
    actual: Option<&'a str>,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    manifests: usize,
    mismatched_manifests: usize,
    mismatches: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, outcomes: &[CheckOutcome], writer: &mut W) -> std::io::Result<()> {
        let results: Vec<_> = outcomes
            .iter()
            .map(|outcome| JsonResult {
                manifest: outcome.manifest(),
                clean: outcome.is_clean(),
                mismatches: outcome
                    .mismatches()
                    .iter()
                    .map(|m| JsonMismatch {
                        name: &m.name,
                        expected: &m.expected,
                        actual: m.actual.as_deref(),
                        message: mismatch_message(m, outcome.manifest()),
                    })
                    .collect(),
                post_text: match outcome {
                    CheckOutcome::Mismatched(report) => report.post_text.as_deref(),
                    CheckOutcome::Clean { .. } => None,
                },
            })
            .collect();

        let summary = JsonSummary {
            manifests: outcomes.len(),
            mismatched_manifests: outcomes.iter().filter(|o| !o.is_clean()).count(),
            mismatches: outcomes.iter().map(|o| o.mismatches().len()).sum(),
        };

        let output = JsonOutput { results, summary };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
