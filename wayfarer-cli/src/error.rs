//! Error types emitted by the Wayfarer CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfarer_data::DatasetError;

/// Errors emitted by the Wayfarer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The dataset directory could not be loaded.
    #[error("failed to load dataset from {path:?}: {source}")]
    LoadDataset {
        path: Utf8PathBuf,
        #[source]
        source: Box<DatasetError>,
    },
    /// Building the async runtime failed.
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Binding the listen address failed.
    #[error("failed to listen on {host}:{port}: {source}")]
    Bind {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server stopped with an error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
    /// The dataset holds experiences whose relation does not exist.
    #[error("{count} experience(s) reference a relation that does not exist")]
    OrphanedExperiences { count: usize },
}
