// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reading and writing locale catalogs
//!
//! A catalog file is a UTF-8 JSON document whose top-level value is an
//! object. Loading is all-or-nothing: any failure yields a [`LoadError`]
//! and no partial tree.

use crate::types::{json_type_name, TranslationTree};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while loading a locale catalog. All of them are fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in translation file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("translation file {path} must contain a JSON object, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("schema violation in translation file {path}: key `{key}` holds a {found}, expected a string, null or object")]
    Schema {
        path: PathBuf,
        key: String,
        found: &'static str,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::NotAnObject { path, .. }
            | LoadError::Schema { path, .. } => path,
        }
    }
}

/// Errors raised while writing a catalog back to disk.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot write translation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize translation tree for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a catalog from `path`.
pub fn load_tree(path: &Path) -> Result<TranslationTree, LoadError> {
    let result = read_tree(path);
    if let Err(err) = &result {
        error!(path = %path.display(), "error encountered when loading translation file");
        error!("error details: {}", err);
    }
    result
}

fn read_tree(path: &Path) -> Result<TranslationTree, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        bytes = content.len(),
        content = %content,
        "loaded translation file"
    );
    parse_tree(path, &content)
}

/// Parse catalog text; `path` is only used for error reporting.
pub fn parse_tree(path: &Path, content: &str) -> Result<TranslationTree, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(LoadError::NotAnObject {
                path: path.to_path_buf(),
                found: json_type_name(&other),
            })
        }
    };
    let tree = TranslationTree::from_json_object(object).map_err(|violation| {
        LoadError::Schema {
            path: path.to_path_buf(),
            key: violation.key,
            found: violation.found,
        }
    })?;
    debug!(
        path = %path.display(),
        top_level = tree.len(),
        leaves = tree.leaf_count(),
        "converted translation file into a translation tree"
    );
    Ok(tree)
}

/// Render a tree as pretty JSON with a two-space indent and trailing newline.
pub fn render_tree(path: &Path, tree: &TranslationTree) -> Result<String, WriteError> {
    let mut text = serde_json::to_string_pretty(tree).map_err(|source| WriteError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    Ok(text)
}

/// Write a tree to `path`, replacing any existing content.
pub fn write_tree(path: &Path, tree: &TranslationTree) -> Result<(), WriteError> {
    let text = render_tree(path, tree)?;
    fs::write(path, text).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote translation file");
    Ok(())
}
