// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration
//!
//! Locales are identified by short codes (`en`, `ro`, `pt-BR`) and map to
//! `<messages_dir>/<code>.json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_MESSAGES_DIR: &str = "messages";
pub const DEFAULT_BASE_LOCALE: &str = "en";
pub const DEFAULT_TARGET_LOCALE: &str = "ro";

/// A validated locale code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid locale code `{0}`: use ASCII letters, digits, `-` or `_`")]
pub struct InvalidLocale(pub String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this locale's catalog.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl FromStr for Locale {
    type Err = InvalidLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Locale(value.to_string()))
        } else {
            Err(InvalidLocale(value.to_string()))
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = InvalidLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved configuration for a check or generate run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Directory holding `<locale>.json` files.
    pub messages_dir: PathBuf,
    /// Reference locale; the source of truth for keys.
    pub base: Locale,
    /// Locales compared against the base, in order.
    pub targets: Vec<Locale>,
}

impl CheckConfig {
    pub fn new(messages_dir: impl Into<PathBuf>, base: Locale, targets: Vec<Locale>) -> Self {
        Self {
            messages_dir: messages_dir.into(),
            base,
            targets,
        }
    }

    /// Make a relative messages directory absolute against `cwd`.
    pub fn resolve_against(mut self, cwd: &Path) -> Self {
        if self.messages_dir.is_relative() {
            self.messages_dir = cwd.join(&self.messages_dir);
        }
        self
    }

    pub fn locale_path(&self, locale: &Locale) -> PathBuf {
        self.messages_dir.join(locale.file_name())
    }

    /// Targets with the base locale and duplicates removed.
    pub fn effective_targets(&self) -> Vec<&Locale> {
        let mut seen = Vec::new();
        for target in &self.targets {
            if target != &self.base && !seen.contains(&target) {
                seen.push(target);
            }
        }
        seen
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            messages_dir: PathBuf::from(DEFAULT_MESSAGES_DIR),
            base: Locale(DEFAULT_BASE_LOCALE.to_string()),
            targets: vec![Locale(DEFAULT_TARGET_LOCALE.to_string())],
        }
    }
}
