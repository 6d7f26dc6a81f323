//! Error types raised while loading a dataset directory.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading dataset files into a catalogue.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset directory could not be opened.
    #[error("failed to open dataset directory {path}")]
    OpenDirectory {
        /// Requested directory.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A dataset file could not be opened.
    #[error("failed to open dataset file {path}")]
    OpenFile {
        /// Path of the file that could not be opened.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A dataset file did not contain valid JSON.
    #[error("failed to parse JSON in {path}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A dataset file had the wrong top-level structure.
    #[error("{path} must contain {expected}")]
    UnexpectedShape {
        /// Path of the offending file.
        path: Utf8PathBuf,
        /// Description of the accepted structure.
        expected: &'static str,
    },
    /// A record could not be decoded into its entity type.
    #[error("failed to decode record {key:?} in {path}")]
    Record {
        /// Path of the file holding the record.
        path: Utf8PathBuf,
        /// Map key or array position of the record.
        key: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// An array record carried no identifier.
    #[error("record at position {index} in {path} has no identifier")]
    MissingIdentifier {
        /// Path of the file holding the record.
        path: Utf8PathBuf,
        /// Zero-based array position of the record.
        index: usize,
    },
}
