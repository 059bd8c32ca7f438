//! Immutable per-locale message catalogs and the effective-catalog merge.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;

/// Static message catalogs, one nested JSON tree per supported locale.
///
/// Catalogs are loaded once at startup and never change afterwards; gaps are
/// covered at request time by the generated overlay and the fallback resolver.
#[derive(Debug)]
pub struct MessageCatalog {
    trees: HashMap<LocaleCode, Value>,
}

impl MessageCatalog {
    /// Load every supported locale's catalog from `<dir>/<locale>.json`.
    ///
    /// A missing or malformed file degrades to an empty tree for that locale
    /// and is logged; loading never fails.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let mut trees = HashMap::new();
        for locale in LocaleCode::all() {
            let path = dir.join(format!("{}.json", locale.code()));
            let tree = match load_tree("catalog.load", &path) {
                Ok(tree) => tree,
                Err(err) => {
                    warn!(error = %err, locale = %locale, path = %path.display(),
                        "falling back to an empty catalog");
                    Value::Object(Map::new())
                }
            };
            trees.insert(locale, tree);
        }
        Self { trees }
    }

    /// Build a catalog from in-memory trees.
    #[must_use]
    pub fn from_trees(trees: HashMap<LocaleCode, Value>) -> Self {
        Self { trees }
    }

    /// The raw tree for a locale; empty object if the locale never loaded.
    #[must_use]
    pub fn tree(&self, locale: LocaleCode) -> &Value {
        self.trees.get(&locale).unwrap_or(&Value::Null)
    }

    /// Resolve a dotted key (`ai.chatTitle`) against a locale's tree.
    #[must_use]
    pub fn resolve(&self, locale: LocaleCode, key: &str) -> Option<String> {
        resolve_path(self.tree(locale), key)
    }

    /// Effective catalog for a locale: the static tree overlaid with the
    /// generated translations, overlay winning on key collision.
    #[must_use]
    pub fn effective(&self, locale: LocaleCode, overlay: &Value) -> Value {
        let mut merged = self.tree(locale).clone();
        if merged.as_object().is_none() {
            merged = Value::Object(Map::new());
        }
        merge_into(&mut merged, overlay);
        merged
    }
}

/// Resolve a dotted path against a nested JSON tree.
#[must_use]
pub fn resolve_path(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

/// Deep-merge `overlay` into `base`: objects merge recursively, any other
/// overlay value replaces the base value.
pub(crate) fn merge_into(base: &mut Value, overlay: &Value) {
    let Some(additions) = overlay.as_object() else {
        return;
    };
    let Some(target) = base.as_object_mut() else {
        *base = overlay.clone();
        return;
    };
    for (key, value) in additions {
        match (target.get_mut(key), value.as_object()) {
            (Some(existing @ Value::Object(_)), Some(_)) => merge_into(existing, value),
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Read and parse a JSON document from disk.
pub(crate) fn load_tree(operation: &'static str, path: &Path) -> I18nResult<Value> {
    let raw = fs::read_to_string(path).map_err(|source| I18nError::Io {
        operation,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| I18nError::Json {
        operation,
        path: path.to_path_buf(),
        source,
    })
}
