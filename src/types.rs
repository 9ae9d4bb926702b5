// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for i18n-sync
//!
//! A locale catalog is a [`TranslationTree`]: an ordered map from key to
//! [`Message`], where a message is either a leaf string, an explicit JSON
//! `null`, or a nested namespace. Entries keep the order they had in the
//! source document so that diagnostics and rewritten files follow it.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Separator between the segments of a dotted key path.
pub const KEY_SEPARATOR: char = '.';

/// A single node in a translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A translated string (possibly empty).
    Leaf(String),
    /// An explicit JSON `null` placeholder.
    Null,
    /// A nested namespace of further messages.
    Node(TranslationTree),
}

impl Message {
    pub fn leaf(value: impl Into<String>) -> Self {
        Message::Leaf(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Message::Leaf(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Message::Node(_))
    }
}

/// An ordered namespace of translation keys.
///
/// Keys within one level are unique. Insertion of an existing key replaces
/// its message in place, so the original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    entries: Vec<(String, Message)>,
}

/// A value in the source document that is not a string, `null` or object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Dotted path of the offending value.
    pub key: String,
    /// JSON type name of the offending value.
    pub found: &'static str,
}

/// Outcome of [`TranslationTree::insert_placeholder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The key did not exist and an empty placeholder was added.
    Inserted,
    /// A leaf sits on the way to the key; nothing was changed.
    Blocked,
    /// The key (or a namespace with the same path) was already present.
    Unchanged,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a parsed JSON object.
    pub fn from_json_object(
        object: serde_json::Map<String, Value>,
    ) -> Result<Self, SchemaViolation> {
        Self::from_object_at(object, None)
    }

    fn from_object_at(
        object: serde_json::Map<String, Value>,
        prefix: Option<&str>,
    ) -> Result<Self, SchemaViolation> {
        let mut tree = TranslationTree::new();
        for (key, value) in object {
            let path = match prefix {
                Some(prefix) => format!("{}{}{}", prefix, KEY_SEPARATOR, key),
                None => key.clone(),
            };
            let message = match value {
                Value::String(text) => Message::Leaf(text),
                Value::Null => Message::Null,
                Value::Object(child) => {
                    Message::Node(Self::from_object_at(child, Some(path.as_str()))?)
                }
                other => {
                    return Err(SchemaViolation {
                        key: path,
                        found: json_type_name(&other),
                    })
                }
            };
            tree.entries.push((key, message));
        }
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries of this level in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.entries.iter().map(|(key, message)| (key.as_str(), message))
    }

    pub fn get(&self, key: &str) -> Option<&Message> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, message)| message)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(candidate, _)| candidate == key)
    }

    /// Insert or replace a direct child of this level.
    pub fn insert(&mut self, key: impl Into<String>, message: Message) {
        let key = key.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1 = message,
            None => self.entries.push((key, message)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, message: Message) -> Self {
        self.insert(key, message);
        self
    }

    /// Number of leaves (strings and nulls) in the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, message)| match message {
                Message::Node(child) => child.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    /// Resolve a dotted key path such as `Domains.services.title`.
    ///
    /// Each segment descends one level; the lookup fails as soon as a segment
    /// is absent or the current message is not a namespace.
    pub fn lookup(&self, dotted: &str) -> Option<&Message> {
        let mut segments = dotted.split(KEY_SEPARATOR);
        let first = self.get(segments.next()?)?;
        segments.try_fold(first, |current, segment| match current {
            Message::Node(child) => child.get(segment),
            _ => None,
        })
    }

    /// Add an empty-string leaf at `dotted`, creating namespaces on the way.
    pub fn insert_placeholder(&mut self, dotted: &str) -> Insertion {
        let segments: Vec<&str> = dotted.split(KEY_SEPARATOR).collect();
        self.insert_segments(&segments)
    }

    fn insert_segments(&mut self, segments: &[&str]) -> Insertion {
        match segments {
            [] => Insertion::Unchanged,
            [leaf] => {
                if self.position(leaf).is_some() {
                    return Insertion::Unchanged;
                }
                self.entries
                    .push((leaf.to_string(), Message::Leaf(String::new())));
                Insertion::Inserted
            }
            [head, rest @ ..] => {
                let index = match self.position(head) {
                    Some(index) if !self.entries[index].1.is_node() => {
                        return Insertion::Blocked;
                    }
                    Some(index) => index,
                    None => {
                        self.entries
                            .push((head.to_string(), Message::Node(TranslationTree::new())));
                        self.entries.len() - 1
                    }
                };
                match &mut self.entries[index].1 {
                    Message::Node(child) => child.insert_segments(rest),
                    _ => Insertion::Unchanged,
                }
            }
        }
    }
}

impl Serialize for TranslationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, message) in &self.entries {
            map.serialize_entry(key, message)?;
        }
        map.end()
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Message::Leaf(text) => serializer.serialize_str(text),
            Message::Null => serializer.serialize_unit(),
            Message::Node(tree) => tree.serialize(serializer),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key `{}` holds a {}, expected a string, null or object",
            self.key, self.found
        )
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
