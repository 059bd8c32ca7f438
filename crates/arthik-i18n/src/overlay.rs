//! Persisted store for generated translations.
//!
//! # Design
//! - One JSON document per target locale under the generated directory.
//! - Lazy load per locale per process; memoized afterwards.
//! - Every write persists the whole per-locale document; persistence failures
//!   are logged and swallowed so translation serving keeps running on the
//!   in-memory copy.
//! - Concurrent whole-file writes race last-writer-wins per key. A stale
//!   in-memory snapshot can briefly shadow a key written by another process
//!   and self-heals on the next cold load; no file locking is attempted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::{Map, Value};
use tracing::warn;

use crate::catalog::{load_tree, resolve_path};
use crate::locale::LocaleCode;

/// Append-only store of generated translations, keyed by locale and dotted key.
#[derive(Debug)]
pub struct OverlayStore {
    dir: PathBuf,
    cache: Mutex<HashMap<LocaleCode, Value>>,
}

impl OverlayStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    ///
    /// A failure to create the directory is logged and tolerated: reads serve
    /// empty overlays and later writes surface the underlying problem.
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        if let Err(err) = fs::create_dir_all(dir) {
            warn!(error = %err, dir = %dir.display(), "failed to create overlay directory");
        }
        Self {
            dir: dir.to_path_buf(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Snapshot of the generated tree for a locale.
    ///
    /// The first access per locale reads the persisted document; a missing or
    /// malformed file degrades to an empty tree. Never fails.
    #[must_use]
    pub fn snapshot(&self, locale: LocaleCode) -> Value {
        let mut guard = lock_guard(&self.cache, "overlay_cache");
        self.tree_mut(&mut guard, locale).clone()
    }

    /// Look up a dotted key in a locale's generated tree.
    #[must_use]
    pub fn lookup(&self, locale: LocaleCode, key: &str) -> Option<String> {
        let mut guard = lock_guard(&self.cache, "overlay_cache");
        resolve_path(self.tree_mut(&mut guard, locale), key)
    }

    /// Merge `value` into the locale's tree at the dotted `key` and persist.
    ///
    /// Writing the same `(locale, key, value)` twice is a no-op after the
    /// first; a later write to the same key overwrites the earlier value.
    pub fn set(&self, locale: LocaleCode, key: &str, value: &str) {
        let snapshot = {
            let mut guard = lock_guard(&self.cache, "overlay_cache");
            let tree = self.tree_mut(&mut guard, locale);
            set_nested(tree, key, value);
            tree.clone()
        };
        self.persist(locale, &snapshot);
    }

    /// Shallow-merge a whole generated tree into the locale's tree and persist.
    pub fn merge(&self, locale: LocaleCode, additions: &Value) {
        let Some(additions) = additions.as_object() else {
            return;
        };
        let snapshot = {
            let mut guard = lock_guard(&self.cache, "overlay_cache");
            let tree = self.tree_mut(&mut guard, locale);
            if let Some(target) = tree.as_object_mut() {
                for (key, value) in additions {
                    target.insert(key.clone(), value.clone());
                }
            }
            tree.clone()
        };
        self.persist(locale, &snapshot);
    }

    fn locale_path(&self, locale: LocaleCode) -> PathBuf {
        self.dir.join(format!("{}.json", locale.code()))
    }

    /// Cached tree for `locale`, loading from disk on first access.
    fn tree_mut<'a>(
        &self,
        guard: &'a mut MutexGuard<'_, HashMap<LocaleCode, Value>>,
        locale: LocaleCode,
    ) -> &'a mut Value {
        guard.entry(locale).or_insert_with(|| {
            let path = self.locale_path(locale);
            match load_tree("overlay.load", &path) {
                Ok(tree) if tree.is_object() => tree,
                Ok(_) => {
                    warn!(locale = %locale, path = %path.display(),
                        "overlay document is not an object; starting empty");
                    Value::Object(Map::new())
                }
                Err(err) => {
                    if path.exists() {
                        warn!(error = %err, locale = %locale, path = %path.display(),
                            "failed to load overlay; starting empty");
                    }
                    Value::Object(Map::new())
                }
            }
        })
    }

    fn persist(&self, locale: LocaleCode, tree: &Value) {
        let path = self.locale_path(locale);
        let serialized = match serde_json::to_string_pretty(tree) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, locale = %locale, "failed to serialize overlay");
                return;
            }
        };
        if let Err(err) = fs::write(&path, serialized) {
            warn!(error = %err, locale = %locale, path = %path.display(),
                "failed to persist overlay; serving from memory");
        }
    }
}

/// Insert `value` at the dotted `key`, materializing intermediate objects and
/// replacing any non-object encountered along the path.
fn set_nested(tree: &mut Value, key: &str, value: &str) {
    let mut node = tree;
    let mut segments = key.split('.').peekable();
    while let Some(segment) = segments.next() {
        if node.as_object().is_none() {
            *node = Value::Object(Map::new());
        }
        let map = node
            .as_object_mut()
            .unwrap_or_else(|| unreachable!("node was just made an object"));
        if segments.peek().is_none() {
            map.insert(segment.to_string(), Value::String(value.to_string()));
            return;
        }
        node = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

fn lock_guard<'a, T>(mutex: &'a Mutex<T>, name: &'a str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|err| {
        panic!("failed to lock {name}: {err}");
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn set_writes_nested_keys_and_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OverlayStore::new(dir.path());
        store.set(LocaleCode::Hi, "ai.chatTitle", "एआई वित्तीय सहायक");

        assert_eq!(
            store.snapshot(LocaleCode::Hi),
            json!({ "ai": { "chatTitle": "एआई वित्तीय सहायक" } })
        );

        let raw = std::fs::read_to_string(dir.path().join("hi.json")).expect("persisted");
        let parsed: Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(parsed, json!({ "ai": { "chatTitle": "एआई वित्तीय सहायक" } }));
    }

    #[test]
    fn writing_the_same_entry_twice_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OverlayStore::new(dir.path());
        store.set(LocaleCode::Kn, "nav.home", "ಮುಖಪುಟ");
        let first = std::fs::read_to_string(dir.path().join("kn.json")).expect("persisted");
        store.set(LocaleCode::Kn, "nav.home", "ಮುಖಪುಟ");
        let second = std::fs::read_to_string(dir.path().join("kn.json")).expect("persisted");
        assert_eq!(first, second);
    }

    #[test]
    fn later_writes_overwrite_earlier_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OverlayStore::new(dir.path());
        store.set(LocaleCode::Hi, "nav.home", "draft");
        store.set(LocaleCode::Hi, "nav.home", "होम");
        assert_eq!(store.lookup(LocaleCode::Hi, "nav.home").as_deref(), Some("होम"));
    }

    #[test]
    fn intermediate_scalars_are_replaced_by_objects() {
        let mut tree = json!({ "nav": "oops" });
        set_nested(&mut tree, "nav.home", "Home");
        assert_eq!(tree, json!({ "nav": { "home": "Home" } }));
    }

    #[test]
    fn malformed_document_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("hi.json"), "{ nope").expect("write");
        let store = OverlayStore::new(dir.path());
        assert_eq!(store.snapshot(LocaleCode::Hi), json!({}));
    }

    #[test]
    fn persisted_overlay_survives_a_new_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let store = OverlayStore::new(dir.path());
            store.set(LocaleCode::Hi, "ai.chatTitle", "एआई वित्तीय सहायक");
        }
        let reopened = OverlayStore::new(dir.path());
        assert_eq!(
            reopened.lookup(LocaleCode::Hi, "ai.chatTitle").as_deref(),
            Some("एआई वित्तीय सहायक")
        );
    }

    #[test]
    fn merge_layers_whole_trees() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OverlayStore::new(dir.path());
        store.set(LocaleCode::Hi, "nav.home", "होम");
        store.merge(LocaleCode::Hi, &json!({ "footer": { "contact": "संपर्क" } }));
        assert_eq!(
            store.lookup(LocaleCode::Hi, "footer.contact").as_deref(),
            Some("संपर्क")
        );
        assert_eq!(store.lookup(LocaleCode::Hi, "nav.home").as_deref(), Some("होम"));
    }

    #[test]
    fn write_failure_is_swallowed_and_memory_keeps_serving() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Occupy the target path with a directory so the file write fails.
        std::fs::create_dir(dir.path().join("hi.json")).expect("blocker");
        let store = OverlayStore::new(dir.path());
        store.set(LocaleCode::Hi, "nav.home", "होम");
        assert_eq!(store.lookup(LocaleCode::Hi, "nav.home").as_deref(), Some("होम"));
    }
}
