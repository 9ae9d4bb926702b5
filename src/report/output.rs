// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use crate::check::CheckReport;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    /// Human-readable console table
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn serialize(&self, report: &CheckReport) -> Result<String> {
        match self {
            ReportOutputFormat::Text => Ok(super::formatter::render_plain(report)),
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}
