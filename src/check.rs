// SPDX-License-Identifier: PMPL-1.0-or-later

//! Check and generate pipelines
//!
//! `check`: load -> extract keys (per locale) -> key diff -> value check,
//! producing a [`CheckReport`]. The base catalog is loaded once and compared
//! against every target in turn.
//!
//! `generate`: fills keys missing from each target with empty placeholders
//! and writes the target back.

use crate::compare::{self, KeyDiff, MissingKey, ValueViolation};
use crate::config::{CheckConfig, Locale};
use crate::keys::extract_keys;
use crate::loader::{self, LoadError};
use crate::types::{Insertion, TranslationTree};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Comparison of one target locale against the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleReport {
    pub base: Locale,
    pub target: Locale,
    pub base_key_count: usize,
    pub target_key_count: usize,
    pub missing_keys: Vec<MissingKey>,
    pub value_violations: Vec<ValueViolation>,
}

impl LocaleReport {
    pub fn passed(&self) -> bool {
        self.missing_keys.is_empty() && self.value_violations.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.missing_keys.len() + self.value_violations.len()
    }
}

/// Result of a full check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub messages_dir: PathBuf,
    pub base: Locale,
    pub locales: Vec<LocaleReport>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.locales.iter().all(LocaleReport::passed)
    }

    pub fn violation_count(&self) -> usize {
        self.locales.iter().map(LocaleReport::violation_count).sum()
    }

    /// Process exit code: `0` when clean, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// Compare two already-loaded catalogs.
pub fn check_pair(
    base_locale: &Locale,
    base: &TranslationTree,
    target_locale: &Locale,
    target: &TranslationTree,
) -> LocaleReport {
    info!(base = %base_locale, target = %target_locale, "comparing translation keys");
    let base_keys = extract_keys(base);
    let target_keys = extract_keys(target);

    let diff = compare::diff_keys(&base_keys, &target_keys);
    let missing_keys = compare::missing_key_entries(&diff, base, target);
    let value_violations = compare::check_values(base, target, &base_keys, &target_keys);

    LocaleReport {
        base: base_locale.clone(),
        target: target_locale.clone(),
        base_key_count: base_keys.len(),
        target_key_count: target_keys.len(),
        missing_keys,
        value_violations,
    }
}

/// Run the consistency check for every configured target.
///
/// Any load failure aborts the run before a report is produced.
pub fn run_check(config: &CheckConfig) -> Result<CheckReport, LoadError> {
    info!(dir = %config.messages_dir.display(), "loading translation files");
    let base = loader::load_tree(&config.locale_path(&config.base))?;

    let targets = config.effective_targets();
    let mut trees = Vec::with_capacity(targets.len());
    for locale in &targets {
        trees.push(loader::load_tree(&config.locale_path(locale))?);
    }

    let locales = targets
        .iter()
        .zip(&trees)
        .map(|(locale, tree)| check_pair(&config.base, &base, locale, tree))
        .collect();

    Ok(CheckReport {
        messages_dir: config.messages_dir.clone(),
        base: config.base.clone(),
        locales,
    })
}

/// What `generate` did (or would do) for one target locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutcome {
    pub target: Locale,
    pub path: PathBuf,
    /// The target file did not exist and was started from `{}`.
    pub created: bool,
    /// Keys added as empty placeholders.
    pub added: Vec<String>,
    /// Keys present only in the target; left untouched.
    pub extra: Vec<String>,
    /// Whether the file was written.
    pub written: bool,
}

/// Add empty placeholders for every base key the target lacks.
pub fn fill_missing(target: &mut TranslationTree, diff: &KeyDiff) -> Vec<String> {
    let mut added = Vec::new();
    for key in &diff.missing_from_target {
        match target.insert_placeholder(key) {
            Insertion::Inserted => added.push(key.clone()),
            Insertion::Blocked => {
                warn!(
                    key = %key,
                    "a translated string in the target occupies this path, placeholder skipped"
                );
            }
            Insertion::Unchanged => {
                warn!(key = %key, "path already occupied by a namespace, placeholder skipped");
            }
        }
    }
    added
}

/// Run the placeholder generator for every configured target.
pub fn run_generate(config: &CheckConfig, dry_run: bool) -> Result<Vec<GenerateOutcome>> {
    let base_path = config.locale_path(&config.base);
    let base = loader::load_tree(&base_path)
        .with_context(|| format!("loading base locale `{}`", config.base))?;
    let base_keys = extract_keys(&base);

    let mut outcomes = Vec::new();
    for locale in config.effective_targets() {
        let path = config.locale_path(locale);
        let created = !path.exists();
        let mut target = if created {
            warn!(path = %path.display(), "translation file does not exist, starting from an empty catalog");
            TranslationTree::new()
        } else {
            loader::load_tree(&path)
                .with_context(|| format!("loading target locale `{}`", locale))?
        };

        let diff = compare::diff_keys(&base_keys, &extract_keys(&target));
        for key in &diff.missing_from_base {
            warn!(target = %locale, key = %key, "key exists only in target locale");
        }

        let added = fill_missing(&mut target, &diff);
        let written = !dry_run && (created || !added.is_empty());
        if written {
            loader::write_tree(&path, &target)
                .with_context(|| format!("writing target locale `{}`", locale))?;
            info!(path = %path.display(), added = added.len(), "wrote missing keys to translation file");
        } else if added.is_empty() {
            info!(target = %locale, "no missing keys detected");
        }

        outcomes.push(GenerateOutcome {
            target: locale.clone(),
            path,
            created,
            added,
            extra: diff.missing_from_base,
            written,
        });
    }
    Ok(outcomes)
}
