// SPDX-License-Identifier: PMPL-1.0-or-later

//! Cross-locale comparison
//!
//! Two independent passes over a base and a target catalog:
//!
//! 1. **Key presence**: the symmetric difference of the two key sets.
//! 2. **Value consistency**: for keys present on both sides, flags values
//!    that are identical (likely untranslated), empty, `null`, or that the
//!    dotted-path lookup cannot resolve.
//!
//! Both passes are exhaustive and never stop at the first violation.

use crate::types::{Message, TranslationTree};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// Result of the key presence pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDiff {
    /// Keys present in the base locale but absent from the target.
    pub missing_from_target: Vec<String>,
    /// Keys present in the target locale but absent from the base.
    pub missing_from_base: Vec<String>,
}

impl KeyDiff {
    /// True iff both difference sets are empty.
    pub fn is_consistent(&self) -> bool {
        self.missing_from_target.is_empty() && self.missing_from_base.is_empty()
    }

    pub fn len(&self) -> usize {
        self.missing_from_target.len() + self.missing_from_base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which catalog lacks a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSide {
    Base,
    Target,
}

/// A value as seen by the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ValueSnapshot {
    Text(String),
    Null,
    /// The key does not resolve to a value; reported as the `""` sentinel.
    Missing,
}

impl ValueSnapshot {
    pub fn of(message: Option<&Message>) -> Self {
        match message {
            Some(Message::Leaf(text)) => ValueSnapshot::Text(text.clone()),
            Some(Message::Null) => ValueSnapshot::Null,
            Some(Message::Node(_)) | None => ValueSnapshot::Missing,
        }
    }
}

impl fmt::Display for ValueSnapshot {
    /// JSON-stringified form used in diagnostic lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSnapshot::Text(text) => match serde_json::to_string(text) {
                Ok(quoted) => f.write_str(&quoted),
                Err(_) => write!(f, "{:?}", text),
            },
            ValueSnapshot::Null => f.write_str("null"),
            ValueSnapshot::Missing => f.write_str("\"\""),
        }
    }
}

/// A key found in only one of the two catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingKey {
    pub key: String,
    pub missing_from: MissingSide,
    pub base_value: ValueSnapshot,
    pub target_value: ValueSnapshot,
}

/// Why a pair of values was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The dotted path did not resolve to a value on at least one side.
    Unresolved,
    /// At least one side is JSON `null`.
    Null,
    /// At least one side is the empty string.
    Empty,
    /// Both sides hold the same string.
    Identical,
}

impl ViolationKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ViolationKind::Unresolved => "unresolved",
            ViolationKind::Null => "null value",
            ViolationKind::Empty => "empty value",
            ViolationKind::Identical => "same value in both locales",
        }
    }
}

/// A key whose values fail the consistency rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueViolation {
    pub key: String,
    pub kind: ViolationKind,
    pub base_value: ValueSnapshot,
    pub target_value: ValueSnapshot,
}

/// Compute the symmetric difference of two key lists.
///
/// Output order follows the input lists; duplicates in the input are
/// reported once.
pub fn diff_keys(base_keys: &[String], target_keys: &[String]) -> KeyDiff {
    info!(
        base = base_keys.len(),
        target = target_keys.len(),
        "extracted translation keys"
    );
    if base_keys.len() == target_keys.len() {
        info!("translation files have the same number of keys");
    }

    let base_set: HashSet<&str> = base_keys.iter().map(String::as_str).collect();
    let target_set: HashSet<&str> = target_keys.iter().map(String::as_str).collect();

    let diff = KeyDiff {
        missing_from_target: difference(base_keys, &target_set),
        missing_from_base: difference(target_keys, &base_set),
    };
    info!(
        missing_from_target = diff.missing_from_target.len(),
        missing_from_base = diff.missing_from_base.len(),
        "computed key differences"
    );
    diff
}

fn difference(keys: &[String], other: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.iter()
        .filter(|key| !other.contains(key.as_str()))
        .filter(|key| seen.insert(key.as_str()))
        .cloned()
        .collect()
}

/// Attach both sides' values to every key of `diff`.
pub fn missing_key_entries(
    diff: &KeyDiff,
    base: &TranslationTree,
    target: &TranslationTree,
) -> Vec<MissingKey> {
    let entry = |key: &String, missing_from: MissingSide| MissingKey {
        key: key.clone(),
        missing_from,
        base_value: ValueSnapshot::of(base.lookup(key)),
        target_value: ValueSnapshot::of(target.lookup(key)),
    };
    diff.missing_from_target
        .iter()
        .map(|key| entry(key, MissingSide::Target))
        .chain(
            diff.missing_from_base
                .iter()
                .map(|key| entry(key, MissingSide::Base)),
        )
        .collect()
}

/// Classify a pair of looked-up values; `None` means the pair is consistent.
pub fn classify(base: Option<&Message>, target: Option<&Message>) -> Option<ViolationKind> {
    match (base, target) {
        (Some(Message::Leaf(base)), Some(Message::Leaf(target))) => {
            if base.is_empty() || target.is_empty() {
                Some(ViolationKind::Empty)
            } else if base == target {
                Some(ViolationKind::Identical)
            } else {
                None
            }
        }
        (None, _) | (_, None) | (Some(Message::Node(_)), _) | (_, Some(Message::Node(_))) => {
            Some(ViolationKind::Unresolved)
        }
        (Some(Message::Null), _) | (_, Some(Message::Null)) => Some(ViolationKind::Null),
    }
}

/// Check values of every key present in both key lists.
///
/// Keys are visited in base order, then target order; each key is reported
/// at most once.
pub fn check_values(
    base: &TranslationTree,
    target: &TranslationTree,
    base_keys: &[String],
    target_keys: &[String],
) -> Vec<ValueViolation> {
    let base_set: HashSet<&str> = base_keys.iter().map(String::as_str).collect();
    let target_set: HashSet<&str> = target_keys.iter().map(String::as_str).collect();
    let mut visited = HashSet::new();
    let mut violations = Vec::new();

    for key in base_keys.iter().chain(target_keys) {
        let key = key.as_str();
        if !(base_set.contains(key) && target_set.contains(key)) || !visited.insert(key) {
            continue;
        }
        let base_message = base.lookup(key);
        let target_message = target.lookup(key);
        debug!(key, "comparing message values");
        if let Some(kind) = classify(base_message, target_message) {
            violations.push(ValueViolation {
                key: key.to_string(),
                kind,
                base_value: ValueSnapshot::of(base_message),
                target_value: ValueSnapshot::of(target_message),
            });
        }
    }

    info!(
        checked = visited.len(),
        violations = violations.len(),
        "finished comparing message values"
    );
    violations
}
