// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output
//!
//! One line per violation, `key — base value — target value`, with both
//! values JSON-stringified. Missing keys are listed before value problems.

use super::output::ReportOutputFormat;
use crate::check::{CheckReport, LocaleReport};
use crate::compare::MissingSide;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Title,
    Heading,
    Plain,
    Error,
    Warn,
    Good,
}

struct Line {
    tone: Tone,
    text: String,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(Tone::Plain, "")
    }

    fn painted(&self) -> ColoredString {
        let text = self.text.as_str();
        match self.tone {
            Tone::Title => text.bold().cyan(),
            Tone::Heading => text.bold().yellow(),
            Tone::Plain => text.normal(),
            Tone::Error => text.red(),
            Tone::Warn => text.yellow(),
            Tone::Good => text.green().bold(),
        }
    }
}

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &CheckReport) {
        for line in render(report) {
            println!("{}", line.painted());
        }
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        report: &CheckReport,
        format: ReportOutputFormat,
        path: P,
    ) -> Result<()> {
        let content = format.serialize(report)?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("writing report {}", path.as_ref().display()))?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// The console report without colour codes.
pub fn render_plain(report: &CheckReport) -> String {
    let mut text = render(report)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

fn render(report: &CheckReport) -> Vec<Line> {
    let mut lines = vec![
        Line::new(Tone::Title, "=== TRANSLATION CONSISTENCY REPORT ==="),
        Line::new(
            Tone::Plain,
            format!("Messages: {}", report.messages_dir.display()),
        ),
        Line::new(Tone::Plain, format!("Base locale: {}", report.base)),
    ];

    for locale in &report.locales {
        lines.push(Line::blank());
        render_locale(locale, &mut lines);
    }

    lines.push(Line::blank());
    if report.passed() {
        lines.push(Line::new(
            Tone::Good,
            "PASSED: all locales have matching keys and translated values",
        ));
    } else {
        lines.push(Line::new(
            Tone::Error,
            format!("FAILED: {} violation(s) found", report.violation_count()),
        ));
    }
    lines
}

fn render_locale(locale: &LocaleReport, lines: &mut Vec<Line>) {
    lines.push(Line::new(
        Tone::Heading,
        format!("{} -> {}", locale.base, locale.target),
    ));
    lines.push(Line::new(
        Tone::Plain,
        format!(
            "  Keys: {} base, {} target",
            locale.base_key_count, locale.target_key_count
        ),
    ));

    if locale.passed() {
        lines.push(Line::new(Tone::Good, "  No inconsistencies"));
        return;
    }

    if !locale.missing_keys.is_empty() {
        lines.push(Line::new(
            Tone::Plain,
            format!(
                "  Missing keys ({}): KEY — {} — {}",
                locale.missing_keys.len(),
                locale.base,
                locale.target
            ),
        ));
        for entry in &locale.missing_keys {
            let side = match entry.missing_from {
                MissingSide::Target => locale.target.as_str(),
                MissingSide::Base => locale.base.as_str(),
            };
            lines.push(Line::new(
                Tone::Error,
                format!(
                    "    {} — {} — {} (missing from {})",
                    entry.key, entry.base_value, entry.target_value, side
                ),
            ));
        }
    }

    if !locale.value_violations.is_empty() {
        lines.push(Line::new(
            Tone::Plain,
            format!(
                "  Value problems ({}): KEY — {} — {}",
                locale.value_violations.len(),
                locale.base,
                locale.target
            ),
        ));
        for violation in &locale.value_violations {
            lines.push(Line::new(
                Tone::Warn,
                format!(
                    "    {} — {} — {} ({})",
                    violation.key,
                    violation.base_value,
                    violation.target_value,
                    violation.kind.describe()
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{MissingKey, ValueSnapshot, ValueViolation, ViolationKind};
    use crate::config::Locale;
    use std::path::PathBuf;

    fn locale(code: &str) -> Locale {
        code.parse().unwrap()
    }

    fn failing_report() -> CheckReport {
        CheckReport {
            messages_dir: PathBuf::from("messages"),
            base: locale("en"),
            locales: vec![LocaleReport {
                base: locale("en"),
                target: locale("ro"),
                base_key_count: 3,
                target_key_count: 2,
                missing_keys: vec![MissingKey {
                    key: "Extra".into(),
                    missing_from: MissingSide::Target,
                    base_value: ValueSnapshot::Text("Value".into()),
                    target_value: ValueSnapshot::Missing,
                }],
                value_violations: vec![ValueViolation {
                    key: "Home".into(),
                    kind: ViolationKind::Identical,
                    base_value: ValueSnapshot::Text("Acasă".into()),
                    target_value: ValueSnapshot::Text("Acasă".into()),
                }],
            }],
        }
    }

    #[test]
    fn test_plain_render_lists_missing_before_values() {
        let text = render_plain(&failing_report());
        let missing = text
            .find(r#"Extra — "Value" — "" (missing from ro)"#)
            .expect("missing key line");
        let value = text
            .find(r#"Home — "Acasă" — "Acasă" (same value in both locales)"#)
            .expect("value line");
        assert!(missing < value);
        assert!(text.contains("FAILED: 2 violation(s) found"));
    }

    #[test]
    fn test_plain_render_passing_report() {
        let mut report = failing_report();
        report.locales[0].missing_keys.clear();
        report.locales[0].value_violations.clear();
        let text = render_plain(&report);
        assert!(text.contains("No inconsistencies"));
        assert!(text.contains("PASSED"));
    }
}
