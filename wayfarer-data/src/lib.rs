//! Dataset loading for the Wayfarer data API.
//!
//! Responsibilities:
//! - Read the five dataset files from a directory into a
//!   [`Catalogue`](wayfarer_core::Catalogue).
//! - Report dangling references so operators can audit a dataset.
//!
//! Boundaries:
//! - Do not encode join or projection rules (live in `wayfarer-core`).
//! - Loading happens once at start-up; nothing here is called per request.
//!
//! # Dataset layout
//!
//! A dataset directory holds `countries.json`, `languages.json`, `tags.json`,
//! `relations.json` and `experiences.json`. Each file is either a JSON object
//! keyed by identifier or a JSON array of records. Array records are keyed by
//! `code` (countries) or `id` (relations and experiences). Languages and tags
//! have no intrinsic identifier and must be keyed objects.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use wayfarer_data::load_dataset;
//!
//! let catalogue = load_dataset(Utf8Path::new("database"))?;
//! println!("{} relations loaded", catalogue.all::<wayfarer_core::Relation>().len());
//! # Ok::<(), wayfarer_data::DatasetError>(())
//! ```

#![forbid(unsafe_code)]

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wayfarer_core::{
    Catalogue, CatalogueBuilder, Country, Entity, EntityKind, Experience, Language, Relation, Tag,
};

mod error;
mod integrity;

pub use error::DatasetError;
pub use integrity::{DanglingReference, dangling_references};

/// File holding [`Country`] records.
pub const COUNTRIES_FILE: &str = "countries.json";
/// File holding [`Language`] records.
pub const LANGUAGES_FILE: &str = "languages.json";
/// File holding [`Tag`] records.
pub const TAGS_FILE: &str = "tags.json";
/// File holding [`Relation`] records.
pub const RELATIONS_FILE: &str = "relations.json";
/// File holding [`Experience`] records.
pub const EXPERIENCES_FILE: &str = "experiences.json";

/// Load every dataset file in `dir` into an immutable catalogue.
///
/// Duplicate identifiers within a file follow "last write wins".
///
/// # Errors
/// Returns [`DatasetError`] when the directory or a file cannot be opened,
/// when a file is not valid JSON or has the wrong structure, or when a record
/// cannot be decoded.
pub fn load_dataset(dir: &Utf8Path) -> Result<Catalogue, DatasetError> {
    let directory = fs_utf8::Dir::open_ambient_dir(dir, ambient_authority()).map_err(|source| {
        DatasetError::OpenDirectory {
            path: dir.to_path_buf(),
            source,
        }
    })?;
    let dataset = DatasetDir {
        root: dir,
        directory,
    };

    let mut builder = Catalogue::builder();
    dataset.load::<Country>(&mut builder, COUNTRIES_FILE)?;
    dataset.load::<Language>(&mut builder, LANGUAGES_FILE)?;
    dataset.load::<Tag>(&mut builder, TAGS_FILE)?;
    dataset.load::<Relation>(&mut builder, RELATIONS_FILE)?;
    dataset.load::<Experience>(&mut builder, EXPERIENCES_FILE)?;
    let catalogue = builder.build();

    info!(
        "Loaded dataset from {dir}: {} countries, {} languages, {} tags, {} relations, {} experiences",
        catalogue.all::<Country>().len(),
        catalogue.all::<Language>().len(),
        catalogue.all::<Tag>().len(),
        catalogue.all::<Relation>().len(),
        catalogue.all::<Experience>().len(),
    );
    Ok(catalogue)
}

struct DatasetDir<'a> {
    root: &'a Utf8Path,
    directory: fs_utf8::Dir,
}

impl DatasetDir<'_> {
    fn load<E>(&self, builder: &mut CatalogueBuilder, file_name: &str) -> Result<(), DatasetError>
    where
        E: Entity + DeserializeOwned,
    {
        let path = self.root.join(file_name);
        let document = self.read_document(file_name, &path)?;
        match document {
            Value::Object(records) => {
                for (key, value) in records {
                    let record = decode::<E>(&path, &key, value)?;
                    builder.insert(key, record);
                }
            }
            Value::Array(records) if has_intrinsic_identifier(E::KIND) => {
                for (index, value) in records.into_iter().enumerate() {
                    let record = decode::<E>(&path, &index.to_string(), value)?;
                    let key = record
                        .identifier()
                        .filter(|id| !id.is_empty())
                        .map(str::to_owned)
                        .ok_or_else(|| DatasetError::MissingIdentifier {
                            path: path.clone(),
                            index,
                        })?;
                    builder.insert(key, record);
                }
            }
            _ => {
                return Err(DatasetError::UnexpectedShape {
                    path,
                    expected: expected_shape(E::KIND),
                });
            }
        }
        Ok(())
    }

    fn read_document(&self, file_name: &str, path: &Utf8Path) -> Result<Value, DatasetError> {
        let file = self
            .directory
            .open(file_name)
            .map_err(|source| DatasetError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn decode<E: DeserializeOwned>(path: &Utf8Path, key: &str, value: Value) -> Result<E, DatasetError> {
    serde_json::from_value(value).map_err(|source| DatasetError::Record {
        path: path.to_path_buf(),
        key: key.to_owned(),
        source,
    })
}

const fn has_intrinsic_identifier(kind: EntityKind) -> bool {
    !matches!(kind, EntityKind::Language | EntityKind::Tag)
}

const fn expected_shape(kind: EntityKind) -> &'static str {
    if has_intrinsic_identifier(kind) {
        "a JSON object keyed by identifier or a JSON array of records"
    } else {
        "a JSON object keyed by identifier"
    }
}

/// Paths of every dataset file under `dir`, in load order.
#[must_use]
pub fn dataset_files(dir: &Utf8Path) -> [Utf8PathBuf; 5] {
    [
        COUNTRIES_FILE,
        LANGUAGES_FILE,
        TAGS_FILE,
        RELATIONS_FILE,
        EXPERIENCES_FILE,
    ]
    .map(|file_name| dir.join(file_name))
}
