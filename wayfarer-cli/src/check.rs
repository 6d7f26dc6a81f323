//! Check command implementation for the Wayfarer CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{Catalogue, Country, Experience, Language, Relation, Tag};
use wayfarer_data::{DanglingReference, dangling_references, load_dataset};

use crate::{ARG_DATA_DIR, CliError, DEFAULT_DATA_DIR};

/// CLI arguments for the `check` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a dataset directory, log how many records of each \
                 kind it holds and every reference that does not resolve. \
                 Fails when an experience references a missing relation.",
    about = "Audit a dataset for dangling references"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct CheckArgs {
    /// Directory holding the dataset files.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
}

impl CheckArgs {
    pub(crate) fn into_config(self) -> Result<CheckConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CheckConfig::from(merged))
    }
}

/// Resolved `check` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckConfig {
    pub(crate) data_dir: Utf8PathBuf,
}

impl From<CheckArgs> for CheckConfig {
    fn from(args: CheckArgs) -> Self {
        Self {
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }
}

/// Outcome of auditing a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckReport {
    pub(crate) dangling: Vec<DanglingReference>,
}

impl CheckReport {
    pub(crate) fn orphaned_experiences(&self) -> usize {
        self.dangling
            .iter()
            .filter(|dangling| dangling.is_orphaned_experience())
            .count()
    }

    /// Fail when any experience lost its relation; other misses only warn.
    pub(crate) fn into_result(self) -> Result<(), CliError> {
        match self.orphaned_experiences() {
            0 => Ok(()),
            count => Err(CliError::OrphanedExperiences { count }),
        }
    }
}

pub(crate) fn load_catalogue(data_dir: &Utf8Path) -> Result<Catalogue, CliError> {
    load_dataset(data_dir).map_err(|source| CliError::LoadDataset {
        path: data_dir.to_path_buf(),
        source: Box::new(source),
    })
}

pub(crate) fn run_check(config: &CheckConfig) -> Result<CheckReport, CliError> {
    let catalogue = load_catalogue(&config.data_dir)?;
    info!(
        "{}: {} countries, {} languages, {} tags, {} relations, {} experiences",
        config.data_dir,
        catalogue.all::<Country>().len(),
        catalogue.all::<Language>().len(),
        catalogue.all::<Tag>().len(),
        catalogue.all::<Relation>().len(),
        catalogue.all::<Experience>().len(),
    );
    let report = CheckReport {
        dangling: dangling_references(&catalogue),
    };
    info!(
        "{} dangling reference(s), {} orphaned experience(s)",
        report.dangling.len(),
        report.orphaned_experiences()
    );
    Ok(report)
}
