// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key extraction
//!
//! Flattens a translation tree into dotted key paths with a depth-first
//! descent. Every leaf yields exactly one path; namespaces yield none of
//! their own, so an empty namespace contributes nothing.

use crate::types::{Message, TranslationTree, KEY_SEPARATOR};
use tracing::debug;

/// Extract every dotted key path of `tree`, in document order.
pub fn extract_keys(tree: &TranslationTree) -> Vec<String> {
    let mut keys = Vec::with_capacity(tree.leaf_count());
    for (key, message) in tree.entries() {
        match message {
            Message::Leaf(_) | Message::Null => keys.push(key.to_string()),
            Message::Node(child) => {
                debug!(key, "key is a namespace, extracting sub-keys");
                keys.extend(
                    extract_keys(child)
                        .into_iter()
                        .map(|sub_key| format!("{}{}{}", key, KEY_SEPARATOR, sub_key)),
                );
            }
        }
    }
    keys
}
