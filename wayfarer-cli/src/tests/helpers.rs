//! Test helpers writing dataset directories for CLI commands.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// A dataset directory on disk, removed when dropped.
#[derive(Debug)]
pub(super) struct DatasetDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DatasetDir {
    /// Write a consistent dataset.
    pub(super) fn consistent() -> Self {
        Self::with_experiences(&json!({
            "e1": {"id": "e1", "title": "Harvest", "relation": "r1", "tags": ["food"]}
        }))
    }

    /// Write a dataset with one experience whose relation is missing.
    pub(super) fn with_orphan() -> Self {
        Self::with_experiences(&json!([
            {"id": "e1", "title": "Harvest", "relation": "r1"},
            {"id": "e2", "title": "Orphan", "relation": "gone"}
        ]))
    }

    fn with_experiences(experiences: &Value) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let dataset = Self { _dir: dir, root };
        dataset.write(
            "countries.json",
            &json!({"FR": {"code": "FR", "name": "France"}}),
        );
        dataset.write(
            "languages.json",
            &json!({"fr": {"id": "fr", "name": "French"}}),
        );
        dataset.write("tags.json", &json!({"food": {"id": "food", "label": "Food"}}));
        dataset.write(
            "relations.json",
            &json!({"r1": {"id": "r1", "code": "BDX", "name": "Bordeaux", "country": "FR",
                           "languages": ["fr"], "tags": ["food"]}}),
        );
        dataset.write("experiences.json", experiences);
        dataset
    }

    fn write(&self, file_name: &str, contents: &Value) {
        fs::write(self.root.join(file_name), contents.to_string()).expect("write dataset file");
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.root
    }
}
