// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod output;

use crate::check::CheckReport;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Print report to console
pub fn print_report(report: &CheckReport) {
    let formatter = ReportFormatter::new();
    formatter.print(report);
}

/// Save report to file in the given format
pub fn save_report<P: AsRef<Path>>(
    report: &CheckReport,
    format: ReportOutputFormat,
    path: P,
) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.save(report, format, path)
}
