//! Catalog fixtures written to temporary directories.

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

/// Create a temp directory holding the sample message catalogs.
///
/// # Panics
///
/// Panics when the fixture cannot be written; fixtures are test-only.
#[must_use]
pub fn temp_message_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp message dir");
    write_message_files(dir.path());
    dir
}

/// Write the sample `en`/`hi`/`kn` catalogs under `dir`.
///
/// The English catalog is complete; the Hindi catalog covers a subset so
/// lookups exercise the fallback path; the Kannada catalog is empty.
///
/// # Panics
///
/// Panics when a file cannot be written; fixtures are test-only.
pub fn write_message_files(dir: &Path) {
    let en = json!({
        "ai": { "chatTitle": "AI Financial Assistant" },
        "nav": { "home": "Home", "markets": "Markets", "news": "News" },
        "expenses": { "add": "Add Expense", "total": "Total Balance" }
    });
    let hi = json!({
        "nav": { "home": "होम" }
    });
    let kn = json!({});
    for (name, tree) in [("en", &en), ("hi", &hi), ("kn", &kn)] {
        let serialized = serde_json::to_string_pretty(tree).expect("serialize fixture");
        fs::write(dir.join(format!("{name}.json")), serialized).expect("write fixture");
    }
}
