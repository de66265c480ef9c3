//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Color/terminal formatting is left to whatever surface embeds the library.

use std::io::Write;

use crate::error::ValidationError;
use crate::report::ValidationReport;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(
        writer,
        "  PASSWORD POLICY: {}",
        report.policy.to_uppercase()
    )?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer)?;
    writeln!(writer, "  Checked:   {}", report.checked)?;
    writeln!(writer, "  Passed:    {}", report.passed)?;
    writeln!(writer, "  Failed:    {}", report.failed)?;
    writeln!(writer)?;

    if !report.failures.is_empty() {
        writeln!(writer, "{}", "-".repeat(60))?;
        writeln!(writer, "  REJECTED")?;
        writeln!(writer, "{}", "-".repeat(60))?;
        for failure in &report.failures {
            writeln!(
                writer,
                "#{}: [{}] {}",
                failure.index,
                failure.kind.code(),
                failure.message
            )?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(60))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} password(s) satisfy the policy",
            report.checked
        )?;
    } else {
        writeln!(writer, "\u{2717} {} password(s) rejected", report.failed)?;
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;
        for (kind, hint) in HINTS {
            if report.count_of(*kind) > 0 {
                writeln!(writer, "    - {hint}")?;
            }
        }
    }
    writeln!(writer, "{}", "=".repeat(60))?;

    Ok(())
}

const HINTS: &[(ValidationError, &str)] = &[
    (
        ValidationError::InsufficientLength,
        "Use a longer password (it must exceed the policy's length threshold)",
    ),
    (ValidationError::MissingUppercase, "Add an uppercase letter"),
    (ValidationError::MissingLowercase, "Add a lowercase letter"),
    (ValidationError::MissingDigit, "Add a digit"),
    (ValidationError::MissingSpecialCharacter, "Add one of @ _ # % $"),
    (
        ValidationError::MissingSecretWord,
        "Include the secret word with some, but not all, letters uppercase",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyKind;
    use crate::validador::Validador;

    fn render_human(report: &ValidationReport) -> String {
        let mut buf = Vec::new();
        write_human(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_output() {
        let report =
            Validador::from_kind(PolicyKind::Ganimedes).validate_batch(["Passw0rd@", "abc"]);
        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["policy"], "ganimedes");
        assert_eq!(value["checked"], 2);
        assert_eq!(value["ok"], false);
        assert_eq!(value["failures"][0]["index"], 1);
        assert_eq!(value["failures"][0]["kind"], "insufficient_length");
    }

    #[test]
    fn test_json_output_never_contains_password() {
        let report = Validador::from_kind(PolicyKind::Calisto).validate_batch(["hunter22"]);
        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("hunter22"), "got: {text}");
    }

    #[test]
    fn test_human_output_all_passed() {
        let report =
            Validador::from_kind(PolicyKind::Calisto).validate_batch(["abc1CaLISTOxyz"]);
        let text = render_human(&report);
        assert!(text.contains("PASSWORD POLICY: CALISTO"), "got: {text}");
        assert!(
            text.contains("All 1 password(s) satisfy the policy"),
            "got: {text}"
        );
        assert!(!text.contains("To fix"), "got: {text}");
    }

    #[test]
    fn test_human_output_lists_hints_for_seen_failures_only() {
        let report =
            Validador::from_kind(PolicyKind::Calisto).validate_batch(["abc", "num1CALISTO"]);
        let text = render_human(&report);
        assert!(text.contains("#0: [insufficient_length]"), "got: {text}");
        assert!(text.contains("#1: [missing_secret_word]"), "got: {text}");
        assert!(text.contains("2 password(s) rejected"), "got: {text}");
        assert!(text.contains("Use a longer password"), "got: {text}");
        assert!(text.contains("Include the secret word"), "got: {text}");
        assert!(!text.contains("Add a digit"), "got: {text}");
    }
}
