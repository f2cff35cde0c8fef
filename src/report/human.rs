//! Human-readable report formatter.
//!
//! Formats mismatches for terminal display:
//!
//! ```text
//! There are requirement mismatches with requirements.txt
//!     * Package django has version 4.2.1 but you have version 4.1.0 installed.
//!     * Package requests is in requirements.txt but not in virtualenv
//! Run `pip install -r requirements.txt` to fix.
//! ```

use std::io::Write;

use super::{CheckOutcome, ReportFormatter};
use crate::ui::PinlockTheme;

/// Formats check results for human consumption.
pub struct HumanFormatter {
    theme: PinlockTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            PinlockTheme::new()
        } else {
            PinlockTheme::plain()
        };
        Self { theme }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, outcomes: &[CheckOutcome], writer: &mut W) -> std::io::Result<()> {
        for outcome in outcomes {
            if let CheckOutcome::Mismatched(report) = outcome {
                print_errors(
                    writer,
                    &self.theme,
                    &report.messages(),
                    Some(&report.header()),
                    report.post_text.as_deref(),
                )?;
            }
        }
        Ok(())
    }
}

/// Write a list of errors with an optional leading and trailing line.
pub fn print_errors<W: Write>(
    writer: &mut W,
    theme: &PinlockTheme,
    errors: &[String],
    pre_text: Option<&str>,
    post_text: Option<&str>,
) -> std::io::Result<()> {
    if let Some(pre) = pre_text {
        writeln!(writer, "{}", theme.error.apply_to(pre))?;
    }
    for message in errors {
        writeln!(writer, "{}", theme.mismatch.apply_to(format!("    * {}", message)))?;
    }
    if let Some(post) = post_text {
        writeln!(writer, "{}", theme.mismatch.apply_to(post))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Mismatch;
    use crate::report::MismatchReport;

    fn render(outcomes: &[CheckOutcome], use_color: bool) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(use_color)
            .format(outcomes, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn mismatched(post_text: Option<&str>) -> CheckOutcome {
        CheckOutcome::Mismatched(MismatchReport {
            manifest: "requirements.txt".into(),
            mismatches: vec![
                Mismatch::version("package1", "1.1", "1.0"),
                Mismatch::missing("package2", "1.0"),
            ],
            post_text: post_text.map(str::to_string),
        })
    }

    #[test]
    fn formats_report() {
        let output = render(&[mismatched(None)], false);

        assert_eq!(
            output,
            "There are requirement mismatches with requirements.txt\n\
             \x20   * Package package1 has version 1.1 but you have version 1.0 installed.\n\
             \x20   * Package package2 is in requirements.txt but not in virtualenv\n"
        );
    }

    #[test]
    fn appends_post_text() {
        let output = render(&[mismatched(Some("post text"))], false);
        assert!(output.ends_with("post text\n"));
    }

    #[test]
    fn clean_outcome_prints_nothing() {
        let output = render(
            &[CheckOutcome::Clean {
                manifest: "requirements.txt".into(),
            }],
            false,
        );
        assert!(output.is_empty());
    }

    #[test]
    fn colored_output_uses_ansi_codes() {
        let output = render(&[mismatched(None)], true);
        assert!(output.contains("\x1b["));
        assert!(output.contains("package1"));
    }

    #[test]
    fn print_errors_with_pre_and_post_text() {
        let mut output = Vec::new();
        print_errors(
            &mut output,
            &PinlockTheme::plain(),
            &["error message".to_string()],
            Some("pre text"),
            Some("post text"),
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("error message"));
        assert!(output.contains("pre text"));
        assert!(output.contains("post text"));
    }
}
