//! Serve command implementation for the Wayfarer CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use wayfarer_api::create_router;
use wayfarer_core::Catalogue;

use crate::{
    ARG_DATA_DIR, ARG_HOST, ARG_PORT, CliError, DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_PORT,
    check::load_catalogue,
};

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load the countries, languages, tags, relations and \
                 experiences files from a dataset directory and serve them \
                 as a read-only JSON API. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Serve the dataset over HTTP"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct ServeArgs {
    /// Directory holding the dataset files.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Address to listen on.
    #[arg(long = ARG_HOST, value_name = "host")]
    #[serde(default)]
    pub(crate) host: Option<String>,
    /// Port to listen on.
    #[arg(long = ARG_PORT, value_name = "port")]
    #[serde(default)]
    pub(crate) port: Option<u16>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ServeConfig::from(merged))
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) host: String,
    pub(crate) port: u16,
}

impl From<ServeArgs> for ServeConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            host: args.host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: args.port.unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Load the dataset, then block serving it until the server stops.
pub(crate) fn run_serve(config: ServeConfig) -> Result<(), CliError> {
    let catalogue = Arc::new(load_catalogue(&config.data_dir)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(serve(catalogue, config))
}

async fn serve(catalogue: Arc<Catalogue>, config: ServeConfig) -> Result<(), CliError> {
    let ServeConfig { host, port, .. } = config;
    let listener = match TcpListener::bind((host.as_str(), port)).await {
        Ok(listener) => listener,
        Err(source) => return Err(CliError::Bind { host, port, source }),
    };
    info!("Wayfarer API listening on {host}:{port}");
    axum::serve(listener, create_router(catalogue))
        .await
        .map_err(CliError::Serve)
}
